use super::*;
use triptales_app_state::auth::{AuthController, AuthEffect, AuthTab, run_login, run_register};
use triptales_ui_core::nav::HIDDEN_CLASS;

struct AuthPage {
    document: Document,
    api: Rc<WebApi>,
    controller: RefCell<AuthController>,
}

impl AuthPage {
    fn repaint(&self) {
        let controller = self.controller.borrow();
        let on_login = controller.tab() == AuthTab::Login;
        for (panel, tab, active) in [
            (LOGIN_PANEL_ID, LOGIN_TAB_ID, on_login),
            (REGISTER_PANEL_ID, REGISTER_TAB_ID, !on_login),
        ] {
            if let Some(panel) = self.document.get_element_by_id(panel) {
                set_class(&panel, HIDDEN_CLASS, !active);
            }
            if let Some(tab) = self.document.get_element_by_id(tab) {
                set_class(&tab, TAB_ACTIVE_CLASS, active);
                let _ = tab.set_attribute("aria-selected", if active { "true" } else { "false" });
            }
        }

        let login = controller.login_status();
        set_text(&self.document, LOGIN_MESSAGE_ID, &login.message);
        set_disabled(&self.document, LOGIN_SUBMIT_ID, login.busy);
        let register = controller.register_status();
        set_text(&self.document, REGISTER_MESSAGE_ID, &register.message);
        set_disabled(&self.document, REGISTER_SUBMIT_ID, register.busy);
    }

    fn select(&self, tab: AuthTab) {
        self.controller.borrow_mut().select_tab(tab);
        self.repaint();
    }

    fn apply(&self, effects: Vec<AuthEffect>) {
        for effect in effects {
            match effect {
                AuthEffect::Redirect(redirect) => follow(redirect),
                AuthEffect::ResetRegisterForm => reset_form(&self.document, REGISTER_FORM_ID),
                AuthEffect::PrefillLoginEmail(email) => {
                    set_field_value(&self.document, LOGIN_EMAIL_ID, &email);
                }
            }
        }
    }

    fn submit_login(self: &Rc<Self>) {
        let email = field_value(&self.document, LOGIN_EMAIL_ID);
        let password = field_value(&self.document, LOGIN_PASSWORD_ID);
        let page = Rc::clone(self);
        spawn_local(async move {
            let repaint = || page.repaint();
            let effects = run_login(&page.controller, &page.api, &email, &password, &repaint).await;
            page.apply(effects);
        });
    }

    fn submit_register(self: &Rc<Self>) {
        let name = field_value(&self.document, REGISTER_NAME_ID);
        let email = field_value(&self.document, REGISTER_EMAIL_ID);
        let password = field_value(&self.document, REGISTER_PASSWORD_ID);
        let page = Rc::clone(self);
        spawn_local(async move {
            let repaint = || page.repaint();
            let effects = run_register(
                &page.controller,
                &page.api,
                &name,
                &email,
                &password,
                &repaint,
            )
            .await;
            page.apply(effects);
        });
    }
}

/// Wires the login/register page when its login form is present.
pub(super) fn init(document: &Document, api: &Rc<WebApi>) {
    if document.get_element_by_id(LOGIN_FORM_ID).is_none() {
        return;
    }
    let page = Rc::new(AuthPage {
        document: document.clone(),
        api: Rc::clone(api),
        controller: RefCell::new(AuthController::new()),
    });

    for (id, tab) in [
        (LOGIN_TAB_ID, AuthTab::Login),
        (SHOW_LOGIN_LINK_ID, AuthTab::Login),
        (REGISTER_TAB_ID, AuthTab::Register),
        (SHOW_REGISTER_LINK_ID, AuthTab::Register),
    ] {
        let page = Rc::clone(&page);
        listen_by_id(document, id, "click", move |event| {
            event.prevent_default();
            page.select(tab);
        });
    }
    {
        let page = Rc::clone(&page);
        listen_by_id(document, LOGIN_FORM_ID, "submit", move |event| {
            event.prevent_default();
            page.submit_login();
        });
    }
    {
        let page = Rc::clone(&page);
        listen_by_id(document, REGISTER_FORM_ID, "submit", move |event| {
            event.prevent_default();
            page.submit_register();
        });
    }

    page.repaint();
}
