use std::cell::RefCell;
use std::future::Future;

use triptales_client_core::models::{Itinerary, ItineraryQuery};
use triptales_client_core::{ApiClient, HttpTransport, KeyValueStore, RequestError};
use triptales_ui_core::ItineraryDetailView;

use crate::debounce::{DebounceToken, Debouncer};

pub const LOADING_MESSAGE: &str = "Loading itineraries...";
pub const EMPTY_RESULT_MESSAGE: &str = "No itineraries found for this filter.";

#[must_use]
pub fn found_message(count: usize) -> String {
    format!("{count} itineraries found.")
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExploreFilters {
    pub query: String,
    pub region: String,
}

impl ExploreFilters {
    #[must_use]
    pub fn to_query(&self) -> ItineraryQuery {
        ItineraryQuery::public(&self.query, &self.region)
    }
}

/// Identifies one issued load; only the most recent ticket may apply results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Default)]
pub struct ExploreController {
    filters: ExploreFilters,
    latest_ticket: u64,
    loading: bool,
    message: String,
    items: Vec<Itinerary>,
    debouncer: Debouncer,
}

impl ExploreController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filters(&self) -> &ExploreFilters {
        &self.filters
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn items(&self) -> &[Itinerary] {
        &self.items
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    pub fn set_query(&mut self, query: &str) {
        self.filters.query = query.to_string();
    }

    pub fn set_region(&mut self, region: &str) {
        self.filters.region = region.to_string();
    }

    /// Records the new search text and arms the debouncer.
    pub fn on_search_input(&mut self, query: &str) -> DebounceToken {
        self.set_query(query);
        self.debouncer.schedule()
    }

    pub fn begin_load(&mut self) -> (LoadTicket, ItineraryQuery) {
        self.latest_ticket = self.latest_ticket.wrapping_add(1);
        self.loading = true;
        self.message = LOADING_MESSAGE.to_string();
        self.items.clear();
        (LoadTicket(self.latest_ticket), self.filters.to_query())
    }

    /// Applies a response. Returns `false` and changes nothing when a newer
    /// load has been issued since `ticket`.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Itinerary>, RequestError>,
    ) -> bool {
        if ticket.0 != self.latest_ticket {
            tracing::debug!(ticket = ticket.0, latest = self.latest_ticket, "dropping stale explore response");
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) if items.is_empty() => {
                self.message = EMPTY_RESULT_MESSAGE.to_string();
                self.items.clear();
            }
            Ok(items) => {
                self.message = found_message(items.len());
                self.items = items;
            }
            Err(error) => {
                self.message = error.message;
                self.items.clear();
            }
        }
        true
    }

    /// Detail view for a card currently on screen.
    #[must_use]
    pub fn detail_view(&self, id: i64) -> Option<ItineraryDetailView> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(ItineraryDetailView::from)
    }
}

/// Issues one load and applies the response if it is still the latest.
/// `repaint` runs once the loading state is set and again if the response
/// was applied.
pub async fn run_load<T, S>(
    cell: &RefCell<ExploreController>,
    api: &ApiClient<T, S>,
    repaint: &dyn Fn(),
) -> bool
where
    T: HttpTransport,
    S: KeyValueStore,
{
    let (ticket, query) = cell.borrow_mut().begin_load();
    repaint();
    let result = api.list_itineraries(&query).await;
    let applied = cell.borrow_mut().finish_load(ticket, result);
    if applied {
        repaint();
    }
    applied
}

/// Waits out `delay` and loads only if no newer keystroke arrived meanwhile.
pub async fn run_debounced_load<T, S, F>(
    cell: &RefCell<ExploreController>,
    api: &ApiClient<T, S>,
    token: DebounceToken,
    delay: F,
    repaint: &dyn Fn(),
) -> bool
where
    T: HttpTransport,
    S: KeyValueStore,
    F: Future<Output = ()>,
{
    delay.await;
    if !cell.borrow().debouncer.is_current(token) {
        return false;
    }
    run_load(cell, api, repaint).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn itinerary(id: i64, title: &str) -> Itinerary {
        serde_json::from_value(json!({
            "id": id,
            "title": title,
            "region": "Ladakh",
            "duration_days": 5,
            "budget_min": 20000,
            "budget_max": 30000,
            "image_url": "../images/leh.jpg",
            "details": "Day 1: Acclimatise in Leh.",
            "status": "approved"
        }))
        .expect("fixture itinerary")
    }

    #[test]
    fn out_of_order_responses_keep_only_the_latest() {
        let mut explore = ExploreController::new();
        let (first, _) = explore.begin_load();
        let (second, _) = explore.begin_load();
        let (third, _) = explore.begin_load();
        assert_eq!(explore.message(), LOADING_MESSAGE);
        assert!(explore.is_loading());

        assert!(!explore.finish_load(second, Ok(vec![itinerary(2, "Second")])));
        assert!(explore.is_loading());
        assert!(explore.finish_load(third, Ok(vec![itinerary(3, "Third")])));
        assert!(!explore.finish_load(first, Err(RequestError::new("late failure"))));

        assert_eq!(explore.items().len(), 1);
        assert_eq!(explore.items()[0].title, "Third");
        assert_eq!(explore.message(), "1 itineraries found.");
        assert!(!explore.is_loading());
    }

    #[test]
    fn empty_and_failed_loads_set_messages() {
        let mut explore = ExploreController::new();
        let (ticket, _) = explore.begin_load();
        explore.finish_load(ticket, Ok(Vec::new()));
        assert_eq!(explore.message(), EMPTY_RESULT_MESSAGE);

        let (ticket, _) = explore.begin_load();
        explore.finish_load(ticket, Err(RequestError::new("Itinerary service down")));
        assert_eq!(explore.message(), "Itinerary service down");
        assert!(explore.items().is_empty());
    }

    #[test]
    fn begin_load_replaces_previous_cards_and_builds_query() {
        let mut explore = ExploreController::new();
        let (ticket, _) = explore.begin_load();
        explore.finish_load(ticket, Ok(vec![itinerary(1, "One")]));

        explore.set_region("Ladakh");
        explore.on_search_input("  monastery ");
        let (_, query) = explore.begin_load();
        assert!(explore.items().is_empty());
        assert_eq!(query.path(), "/itineraries?q=monastery&region=Ladakh");
    }

    #[test]
    fn detail_view_looks_up_visible_card() {
        let mut explore = ExploreController::new();
        let (ticket, _) = explore.begin_load();
        explore.finish_load(ticket, Ok(vec![itinerary(8, "Leh Loop")]));

        let view = explore.detail_view(8).expect("card is visible");
        assert_eq!(view.title, "Leh Loop");
        assert_eq!(view.details.days.len(), 1);
        assert!(explore.detail_view(9).is_none());
    }
}
