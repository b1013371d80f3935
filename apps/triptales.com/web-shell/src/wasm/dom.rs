use super::*;
use triptales_ui_core::nav::{
    HIDDEN_CLASS, MODAL_BACKDROP_CLASS, MODAL_OPEN_CLASS, SCROLL_LOCK_CLASS,
};

pub(super) fn document() -> Result<Document, String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    window
        .document()
        .ok_or_else(|| "document is unavailable".to_string())
}

pub(super) fn element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub(super) fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(target) = document.get_element_by_id(id) {
        target.set_text_content(Some(text));
    }
}

/// Replaces the children of `target` with rendered markup. A failed render
/// leaves the current content in place.
pub(super) fn set_html<E: std::fmt::Display>(target: &Element, rendered: Result<String, E>) {
    match rendered {
        Ok(html) => target.set_inner_html(&html),
        Err(error) => web_sys::console::error_1(&JsValue::from_str(&format!(
            "TripTales render failed: {error}"
        ))),
    }
}

pub(super) fn set_class(target: &Element, class: &str, enabled: bool) {
    let _ = target.class_list().toggle_with_force(class, enabled);
}

pub(super) fn set_disabled(document: &Document, id: &str, disabled: bool) {
    if let Some(button) = element::<web_sys::HtmlButtonElement>(document, id) {
        button.set_disabled(disabled);
    }
}

/// Current value of an input, select or textarea. Missing fields read as empty.
pub(super) fn field_value(document: &Document, id: &str) -> String {
    let Some(target) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        return select.value();
    }
    if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

pub(super) fn set_field_value(document: &Document, id: &str, value: &str) {
    if let Some(input) = element::<web_sys::HtmlInputElement>(document, id) {
        input.set_value(value);
    }
}

pub(super) fn reset_form(document: &Document, id: &str) {
    if let Some(form) = element::<web_sys::HtmlFormElement>(document, id) {
        form.reset();
    }
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub(super) fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handler));
    let _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
    EVENT_HANDLERS.with(|slot| slot.borrow_mut().push(callback));
}

pub(super) fn listen_by_id(
    document: &Document,
    id: &str,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    if let Some(target) = document.get_element_by_id(id) {
        listen(&target, event, handler);
    }
}

pub(super) fn is_escape(event: &web_sys::Event) -> bool {
    event
        .dyn_ref::<web_sys::KeyboardEvent>()
        .is_some_and(|event| event.key() == "Escape")
}

/// Nearest ancestor of the event target (inclusive) carrying `attribute`.
pub(super) fn closest_with(event: &web_sys::Event, attribute: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(&format!("[{attribute}]")).ok()?
}

pub(super) fn id_attribute(target: &Element, attribute: &str) -> Option<i64> {
    target.get_attribute(attribute)?.trim().parse().ok()
}

pub(super) fn navigate(target: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(target);
    }
}

pub(super) fn follow(redirect: Redirect) {
    if redirect.delay.is_zero() {
        navigate(redirect.target);
        return;
    }
    spawn_local(async move {
        sleep(redirect.delay).await;
        navigate(redirect.target);
    });
}

pub(super) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub(super) fn prompt(message: &str) -> Option<String> {
    web_sys::window()?.prompt_with_message(message).ok()?
}

fn next_frame(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(callback);
    let _ = window.request_animation_frame(callback.unchecked_ref());
}

pub(super) fn show_dialog(document: &Document, dialog: &Element) {
    set_class(dialog, HIDDEN_CLASS, false);
    let opened = dialog.clone();
    next_frame(move || set_class(&opened, MODAL_OPEN_CLASS, true));
    if let Some(body) = document.body() {
        set_class(&body, SCROLL_LOCK_CLASS, true);
    }
}

/// Plays the close animation, then hides the dialog if `finish` agrees.
pub(super) fn hide_dialog(
    document: &Document,
    dialog: &Element,
    delay: Duration,
    finish: impl FnOnce() -> bool + 'static,
) {
    set_class(dialog, MODAL_OPEN_CLASS, false);
    if let Some(body) = document.body() {
        set_class(&body, SCROLL_LOCK_CLASS, false);
    }
    let dialog = dialog.clone();
    spawn_local(async move {
        sleep(delay).await;
        if finish() {
            set_class(&dialog, HIDDEN_CLASS, true);
        }
    });
}

/// True when a click landed on the dialog overlay itself or its backdrop.
pub(super) fn is_backdrop_click(event: &web_sys::Event, dialog: &Element) -> bool {
    let Some(target) = event.target().and_then(|target| target.dyn_into::<Element>().ok()) else {
        return false;
    };
    target.is_same_node(Some(dialog.as_ref()))
        || target
            .class_list()
            .contains(MODAL_BACKDROP_CLASS)
}
