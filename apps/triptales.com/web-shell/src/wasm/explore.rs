use super::*;
use triptales_app_state::explore::{ExploreController, run_debounced_load, run_load};
use triptales_ui_core::cards::render_cards_html;

struct ExplorePage {
    document: Document,
    api: Rc<WebApi>,
    controller: Rc<RefCell<ExploreController>>,
}

impl ExplorePage {
    fn repaint(&self) {
        let controller = self.controller.borrow();
        set_text(&self.document, EXPLORE_MESSAGE_ID, controller.message());
        set_disabled(&self.document, EXPLORE_APPLY_ID, controller.is_loading());
        if let Some(grid) = self.document.get_element_by_id(EXPLORE_GRID_ID) {
            set_html(&grid, render_cards_html(controller.items()));
        }
        drop(controller);
        chrome::reveal(&self.document);
    }

    fn sync_filters(&self) {
        let query = field_value(&self.document, EXPLORE_SEARCH_ID);
        let region = field_value(&self.document, EXPLORE_REGION_ID);
        let mut controller = self.controller.borrow_mut();
        controller.set_query(&query);
        controller.set_region(&region);
    }

    fn load(self: &Rc<Self>) {
        self.sync_filters();
        let page = Rc::clone(self);
        spawn_local(async move {
            let repaint = || page.repaint();
            run_load(&page.controller, &page.api, &repaint).await;
        });
    }

    fn search_input(self: &Rc<Self>) {
        let query = field_value(&self.document, EXPLORE_SEARCH_ID);
        let region = field_value(&self.document, EXPLORE_REGION_ID);
        let (token, delay) = {
            let mut controller = self.controller.borrow_mut();
            controller.set_region(&region);
            let token = controller.on_search_input(&query);
            (token, controller.debouncer().delay())
        };
        let page = Rc::clone(self);
        spawn_local(async move {
            let repaint = || page.repaint();
            run_debounced_load(&page.controller, &page.api, token, sleep(delay), &repaint).await;
        });
    }
}

/// Wires the explore page when its grid is present and runs the first load.
pub(super) fn init(
    document: &Document,
    api: &Rc<WebApi>,
) -> Option<Rc<RefCell<ExploreController>>> {
    document.get_element_by_id(EXPLORE_GRID_ID)?;
    let page = Rc::new(ExplorePage {
        document: document.clone(),
        api: Rc::clone(api),
        controller: Rc::new(RefCell::new(ExploreController::new())),
    });

    {
        let page = Rc::clone(&page);
        listen_by_id(document, EXPLORE_APPLY_ID, "click", move |_event| page.load());
    }
    {
        let page = Rc::clone(&page);
        listen_by_id(document, EXPLORE_REGION_ID, "change", move |_event| page.load());
    }
    {
        let page = Rc::clone(&page);
        listen_by_id(document, EXPLORE_SEARCH_ID, "keydown", move |event| {
            let is_enter = event
                .dyn_ref::<web_sys::KeyboardEvent>()
                .is_some_and(|event| event.key() == "Enter");
            if is_enter {
                event.prevent_default();
                page.load();
            }
        });
    }
    {
        let page = Rc::clone(&page);
        listen_by_id(document, EXPLORE_SEARCH_ID, "input", move |_event| {
            page.search_input();
        });
    }

    page.load();
    Some(Rc::clone(&page.controller))
}
