//! Behaviour shared by every page: nav highlighting, scroll reveal, the theme
//! toggle, session-aware sign-out and the itinerary detail dialog.

use super::*;
use js_sys::{Array, Reflect};
use triptales_app_state::MODAL_CLOSE_DELAY;
use triptales_app_state::explore::ExploreController;
use triptales_app_state::signout::{SignOutController, run_sign_out};
use triptales_ui_core::cards::OPEN_MODAL_ATTR;
use triptales_ui_core::nav::{
    ACTIVE_CLASS, REVEAL_THRESHOLD, REVEAL_VISIBLE_CLASS, SIGN_OUT_LABEL, SIGNOUT_MODAL_CLASS,
    SIGNOUT_MODAL_HTML, is_active_link,
};
use triptales_ui_core::theme::DARK_CLASS;
use triptales_ui_core::{ItineraryDetailView, Theme, escape_html};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

thread_local! {
    static REVEAL_OBSERVER: RefCell<Option<(IntersectionObserver, RevealCallback)>> = const { RefCell::new(None) };
}

fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(super) fn init_nav(document: &Document) {
    let pathname = web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_default();
    for link in elements(document, NAV_LINKS_SELECTOR) {
        let href = link.get_attribute("href").unwrap_or_default();
        if is_active_link(&href, &pathname) {
            set_class(&link, ACTIVE_CLASS, true);
        }
    }
}

pub(super) fn init_reveal(document: &Document) {
    reveal(document);
}

/// Fades in `.fade-up` elements as they scroll into view. Each element is
/// revealed once; without IntersectionObserver everything shows at once.
pub(super) fn reveal(document: &Document) {
    let observer = reveal_observer();
    for target in elements(document, REVEAL_SELECTOR) {
        match observer.as_ref() {
            Some(observer) => observer.observe(&target),
            None => set_class(&target, REVEAL_VISIBLE_CLASS, true),
        }
    }
}

fn reveal_observer() -> Option<IntersectionObserver> {
    REVEAL_OBSERVER.with(|slot| {
        if let Some((observer, _)) = slot.borrow().as_ref() {
            return Some(observer.clone());
        }
        let window = web_sys::window()?;
        if !Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
            return None;
        }
        let callback = RevealCallback::wrap(Box::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if entry.is_intersecting() {
                        let target = entry.target();
                        set_class(&target, REVEAL_VISIBLE_CLASS, true);
                        observer.unobserve(&target);
                    }
                }
            },
        ));
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .ok()?;
        *slot.borrow_mut() = Some((observer.clone(), callback));
        Some(observer)
    })
}

pub(super) fn init_theme_toggle(document: &Document, api: &Rc<WebApi>) {
    let Some(toggle) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return;
    };
    let stored = api.session().theme_preference();
    apply_theme(document, &toggle, Theme::from_preference(stored.as_deref()));

    let document = document.clone();
    let api = Rc::clone(api);
    let button = toggle.clone();
    listen(&toggle, "click", move |_event| {
        let is_dark = document
            .body()
            .is_some_and(|body| body.class_list().contains(DARK_CLASS));
        let current = if is_dark { Theme::Dark } else { Theme::Light };
        let next = current.toggled();
        if let Err(error) = api.session().set_theme_preference(next.as_str()) {
            web_sys::console::warn_1(&JsValue::from_str(&error.to_string()));
        }
        apply_theme(&document, &button, next);
    });
}

fn apply_theme(document: &Document, toggle: &Element, theme: Theme) {
    if let Some(body) = document.body() {
        set_class(&body, DARK_CLASS, theme.is_dark());
    }
    toggle.set_text_content(Some(theme.toggle_icon()));
    let _ = toggle.set_attribute("aria-label", theme.toggle_label());
    let _ = toggle.set_attribute("title", theme.toggle_label());
    let _ = toggle.set_attribute("aria-pressed", theme.aria_pressed());
}

fn ensure_signout_dialog(document: &Document) -> Result<Element, String> {
    if let Some(existing) = document.get_element_by_id(SIGNOUT_MODAL_ID) {
        return Ok(existing);
    }
    let dialog = document
        .create_element("div")
        .map_err(|_| "failed to create sign-out dialog".to_string())?;
    dialog.set_id(SIGNOUT_MODAL_ID);
    dialog.set_class_name(SIGNOUT_MODAL_CLASS);
    dialog.set_inner_html(SIGNOUT_MODAL_HTML);
    let body = document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())?;
    body.append_child(&dialog)
        .map_err(|_| "failed to attach sign-out dialog".to_string())?;
    Ok(dialog)
}

struct SignOutDialog {
    document: Document,
    dialog: Element,
    controller: Rc<RefCell<SignOutController>>,
}

impl SignOutDialog {
    fn open(&self) {
        self.controller.borrow_mut().open();
        show_dialog(&self.document, &self.dialog);
    }

    fn hide(&self, delay: Option<Duration>) {
        let Some(delay) = delay else {
            return;
        };
        let controller = Rc::clone(&self.controller);
        hide_dialog(&self.document, &self.dialog, delay, move || {
            controller.borrow_mut().modal_mut().finish_close()
        });
    }

    fn close(&self) {
        let delay = self.controller.borrow_mut().close();
        self.hide(delay);
    }
}

pub(super) fn init_session_nav(document: &Document, api: &Rc<WebApi>) -> Result<(), String> {
    let dialog = ensure_signout_dialog(document)?;
    let signout = Rc::new(SignOutDialog {
        document: document.clone(),
        dialog: dialog.clone(),
        controller: Rc::new(RefCell::new(SignOutController::new())),
    });

    {
        let signout = Rc::clone(&signout);
        listen_by_id(document, SIGNOUT_CANCEL_ID, "click", move |_event| signout.close());
    }
    {
        let signout = Rc::clone(&signout);
        let api = Rc::clone(api);
        listen_by_id(document, SIGNOUT_CONFIRM_ID, "click", move |_event| {
            let signout = Rc::clone(&signout);
            let api = Rc::clone(&api);
            spawn_local(async move {
                let repaint = || {
                    let confirming = signout.controller.borrow().is_confirming();
                    set_disabled(&signout.document, SIGNOUT_CONFIRM_ID, confirming);
                };
                let redirect = run_sign_out(&signout.controller, &api, &repaint).await;
                signout.hide(Some(MODAL_CLOSE_DELAY));
                follow(redirect);
            });
        });
    }
    {
        let signout = Rc::clone(&signout);
        listen(&dialog, "click", move |event| {
            if is_backdrop_click(&event, &signout.dialog) {
                signout.close();
            }
        });
    }
    {
        let signout = Rc::clone(&signout);
        listen(document, "keydown", move |event| {
            if is_escape(&event) {
                let delay = signout.controller.borrow_mut().on_escape();
                signout.hide(delay);
            }
        });
    }

    let opener = |target: &Element| {
        let signout = Rc::clone(&signout);
        listen(target, "click", move |event| {
            event.prevent_default();
            signout.open();
        });
    };
    if api.session().has_session()
        && let Ok(Some(link)) = document.query_selector(NAV_LOGIN_LINK_SELECTOR)
    {
        link.set_text_content(Some(SIGN_OUT_LABEL));
        let _ = link.set_attribute("aria-label", SIGN_OUT_LABEL);
        opener(&link);
    }
    if let Some(button) = document.get_element_by_id(LOGOUT_BUTTON_ID) {
        opener(&button);
    }
    Ok(())
}

/// Cards rendered from markup carry their content in `data-*` attributes;
/// cards rendered from a fetched list are looked up by id.
fn detail_view_for(
    trigger: &Element,
    explore: Option<&RefCell<ExploreController>>,
) -> Option<ItineraryDetailView> {
    if trigger.has_attribute("data-title") {
        let data = |name: &str| trigger.get_attribute(&format!("data-{name}")).unwrap_or_default();
        let details = js_sys::decode_uri_component(&data("details"))
            .map(String::from)
            .unwrap_or_default();
        let chips = ["region", "duration", "budget", "status"]
            .iter()
            .map(|name| data(*name))
            .collect();
        return Some(ItineraryDetailView::from_parts(
            &data("title"),
            chips,
            &data("image"),
            &details,
        ));
    }
    let id = id_attribute(trigger, OPEN_MODAL_ATTR)?;
    explore?.borrow().detail_view(id)
}

fn render_detail(document: &Document, view: &ItineraryDetailView) {
    set_text(document, DETAIL_TITLE_ID, &view.title);
    if let Some(meta) = document.get_element_by_id(DETAIL_META_ID) {
        let chips: String = view
            .chips
            .iter()
            .map(|chip| format!("<span>{}</span>", escape_html(chip)))
            .collect();
        meta.set_inner_html(&chips);
    }
    if let Some(body) = document.get_element_by_id(DETAIL_BODY_ID) {
        set_html(&body, view.details_html());
    }
    if let Some(image) = element::<web_sys::HtmlImageElement>(document, DETAIL_IMAGE_ID) {
        image.set_src(&view.image_url);
        image.set_alt(&view.image_alt);
    }
}

pub(super) fn init_detail_modal(
    document: &Document,
    explore: Option<Rc<RefCell<ExploreController>>>,
) {
    let Some(dialog) = document.get_element_by_id(DETAIL_MODAL_ID) else {
        return;
    };
    let state = Rc::new(RefCell::new(ModalState::default()));
    let close = {
        let document = document.clone();
        let dialog = dialog.clone();
        let state = Rc::clone(&state);
        Rc::new(move || {
            let delay = state.borrow_mut().close();
            if let Some(delay) = delay {
                let state = Rc::clone(&state);
                hide_dialog(&document, &dialog, delay, move || {
                    state.borrow_mut().finish_close()
                });
            }
        })
    };

    {
        let close = Rc::clone(&close);
        listen_by_id(document, DETAIL_CLOSE_ID, "click", move |_event| close());
    }
    {
        let close = Rc::clone(&close);
        let overlay = dialog.clone();
        listen(&dialog, "click", move |event| {
            if is_backdrop_click(&event, &overlay) {
                close();
            }
        });
    }
    {
        let close = Rc::clone(&close);
        listen(document, "keydown", move |event| {
            if is_escape(&event) {
                close();
            }
        });
    }

    let page = document.clone();
    listen(document, "click", move |event| {
        let Some(trigger) = closest_with(&event, OPEN_MODAL_ATTR) else {
            return;
        };
        let Some(view) = detail_view_for(&trigger, explore.as_deref()) else {
            return;
        };
        render_detail(&page, &view);
        state.borrow_mut().open();
        show_dialog(&page, &dialog);
    });
}
