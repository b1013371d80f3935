use super::*;
use triptales_app_state::admin::{
    AdminController, AdminEffect, DELETE_CONFIRM_PROMPT, EDIT_TITLE_PROMPT, run_boot, run_create,
    run_delete, run_edit, run_review,
};
use triptales_client_core::models::{ItineraryInput, ItineraryStatus};
use triptales_ui_core::cards::{
    APPROVE_ATTR, DELETE_ATTR, EDIT_ATTR, REJECT_ATTR, render_own_rows_html,
    render_review_rows_html,
};
use triptales_ui_core::nav::HIDDEN_CLASS;

fn row_id(event: &web_sys::Event, attribute: &str) -> Option<i64> {
    id_attribute(&closest_with(event, attribute)?, attribute)
}

struct AdminPage {
    document: Document,
    api: Rc<WebApi>,
    controller: RefCell<AdminController>,
}

impl AdminPage {
    fn repaint(&self) {
        let controller = self.controller.borrow();
        set_text(&self.document, SESSION_INFO_ID, controller.session_info());
        set_text(&self.document, ADMIN_MESSAGE_ID, controller.message());
        if controller.has_loaded_own()
            && let Some(body) = self.document.get_element_by_id(OWN_ITINERARIES_BODY_ID)
        {
            set_html(&body, render_own_rows_html(controller.own_itineraries()));
        }
        if controller.has_loaded_review()
            && let Some(body) = self.document.get_element_by_id(REVIEW_BODY_ID)
        {
            set_html(&body, render_review_rows_html(controller.review_queue()));
        }
        if let Some(section) = self.document.get_element_by_id(REVIEW_SECTION_ID) {
            set_class(&section, HIDDEN_CLASS, !controller.is_review_visible());
        }
    }

    fn form_input(&self) -> ItineraryInput {
        let text = |id: &str| field_value(&self.document, id);
        ItineraryInput {
            title: text(FORM_TITLE_ID),
            region: text(FORM_REGION_ID),
            duration_days: text(FORM_DURATION_ID).trim().parse().unwrap_or(0),
            budget_min: text(FORM_BUDGET_MIN_ID).trim().parse().unwrap_or(0),
            budget_max: text(FORM_BUDGET_MAX_ID).trim().parse().unwrap_or(0),
            image_url: text(FORM_IMAGE_ID),
            details: text(FORM_DETAILS_ID),
        }
    }

    fn boot(self: &Rc<Self>) {
        let page = Rc::clone(self);
        spawn_local(async move {
            let repaint = || page.repaint();
            if let Some(redirect) = run_boot(&page.controller, &page.api, &repaint).await {
                follow(redirect);
            }
        });
    }

    fn submit(self: &Rc<Self>) {
        let input = self.form_input();
        let page = Rc::clone(self);
        spawn_local(async move {
            let repaint = || page.repaint();
            for effect in run_create(&page.controller, &page.api, input, &repaint).await {
                match effect {
                    AdminEffect::ResetItineraryForm => {
                        reset_form(&page.document, ITINERARY_FORM_ID);
                    }
                }
            }
        });
    }

    fn own_row_click(self: &Rc<Self>, event: &web_sys::Event) {
        if let Some(id) = row_id(event, DELETE_ATTR) {
            let confirmed = confirm(DELETE_CONFIRM_PROMPT);
            let page = Rc::clone(self);
            spawn_local(async move {
                let repaint = || page.repaint();
                run_delete(&page.controller, &page.api, id, confirmed, &repaint).await;
            });
            return;
        }
        if let Some(id) = row_id(event, EDIT_ATTR) {
            let title = prompt(EDIT_TITLE_PROMPT);
            let page = Rc::clone(self);
            spawn_local(async move {
                let repaint = || page.repaint();
                run_edit(&page.controller, &page.api, id, title.as_deref(), &repaint).await;
            });
        }
    }

    fn review_row_click(self: &Rc<Self>, event: &web_sys::Event) {
        let decision = [
            (APPROVE_ATTR, ItineraryStatus::Approved),
            (REJECT_ATTR, ItineraryStatus::Rejected),
        ]
        .into_iter()
        .find_map(|(attribute, status)| row_id(event, attribute).map(|id| (id, status)));
        let Some((id, status)) = decision else {
            return;
        };
        let page = Rc::clone(self);
        spawn_local(async move {
            let repaint = || page.repaint();
            run_review(&page.controller, &page.api, id, status, &repaint).await;
        });
    }
}

/// Wires the dashboard when its session banner is present.
pub(super) fn init(document: &Document, api: &Rc<WebApi>) {
    if document.get_element_by_id(SESSION_INFO_ID).is_none() {
        return;
    }
    let page = Rc::new(AdminPage {
        document: document.clone(),
        api: Rc::clone(api),
        controller: RefCell::new(AdminController::new()),
    });

    {
        let page = Rc::clone(&page);
        listen_by_id(document, ITINERARY_FORM_ID, "submit", move |event| {
            event.prevent_default();
            page.submit();
        });
    }
    {
        let page = Rc::clone(&page);
        listen_by_id(document, OWN_ITINERARIES_BODY_ID, "click", move |event| {
            page.own_row_click(&event);
        });
    }
    {
        let page = Rc::clone(&page);
        listen_by_id(document, REVIEW_BODY_ID, "click", move |event| {
            page.review_row_click(&event);
        });
    }

    page.boot();
}
