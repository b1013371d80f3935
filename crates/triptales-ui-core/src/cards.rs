use askama::Template;
use triptales_client_core::models::Itinerary;

use crate::details::{ParsedDetails, parse_details, render_details_html};

pub const NO_OWN_ITINERARIES: &str = "No itineraries yet.";
pub const NO_SUBMISSIONS: &str = "No submissions found.";
pub const DEFAULT_IMAGE_ALT: &str = "Itinerary image";

/// Attribute carried by the "View details" button; its value is the itinerary id.
pub const OPEN_MODAL_ATTR: &str = "data-open-modal";
pub const EDIT_ATTR: &str = "data-edit-id";
pub const DELETE_ATTR: &str = "data-delete-id";
pub const APPROVE_ATTR: &str = "data-approve-id";
pub const REJECT_ATTR: &str = "data-reject-id";

#[must_use]
pub fn region_label(item: &Itinerary) -> String {
    format!("Region: {}", item.region)
}

#[must_use]
pub fn duration_label(item: &Itinerary) -> String {
    format!("Duration: {} Days", item.duration_days)
}

#[must_use]
pub fn budget_label(item: &Itinerary) -> String {
    format!("Budget: Rs {} - {}", item.budget_min, item.budget_max)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryCard {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    pub status: String,
    pub region: String,
    pub duration: String,
    pub budget: String,
}

impl From<&Itinerary> for ItineraryCard {
    fn from(item: &Itinerary) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            image_url: item.image_url.clone(),
            status: item.status.to_string(),
            region: region_label(item),
            duration: duration_label(item),
            budget: budget_label(item),
        }
    }
}

#[derive(Template)]
#[template(path = "cards.html")]
struct CardGridTemplate {
    cards: Vec<ItineraryCard>,
}

/// Card grid markup. Rendering the same items twice yields identical output.
pub fn render_cards_html(items: &[Itinerary]) -> Result<String, askama::Error> {
    CardGridTemplate {
        cards: items.iter().map(ItineraryCard::from).collect(),
    }
    .render()
}

/// Everything the detail modal shows for one itinerary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryDetailView {
    pub title: String,
    pub chips: Vec<String>,
    pub image_url: String,
    pub image_alt: String,
    pub details: ParsedDetails,
}

impl From<&Itinerary> for ItineraryDetailView {
    fn from(item: &Itinerary) -> Self {
        Self::from_parts(
            &item.title,
            vec![
                region_label(item),
                duration_label(item),
                budget_label(item),
                format!("Status: {}", item.status),
            ],
            &item.image_url,
            &item.details,
        )
    }
}

impl ItineraryDetailView {
    /// View built from pre-rendered markup attributes rather than a fetched record.
    #[must_use]
    pub fn from_parts(title: &str, chips: Vec<String>, image_url: &str, raw_details: &str) -> Self {
        let image_alt = if title.is_empty() {
            DEFAULT_IMAGE_ALT.to_string()
        } else {
            title.to_string()
        };
        Self {
            title: title.to_string(),
            chips: chips.into_iter().filter(|chip| !chip.is_empty()).collect(),
            image_url: image_url.to_string(),
            image_alt,
            details: parse_details(raw_details),
        }
    }

    pub fn details_html(&self) -> Result<String, askama::Error> {
        render_details_html(&self.details)
    }
}

struct TableRow {
    id: i64,
    title: String,
    detail: String,
    status: String,
}

#[derive(Template)]
#[template(path = "table_rows.html")]
struct TableRowsTemplate {
    rows: Vec<TableRow>,
    review: bool,
    empty_message: &'static str,
}

/// Rows for the "my itineraries" table with edit and delete actions.
pub fn render_own_rows_html(items: &[Itinerary]) -> Result<String, askama::Error> {
    TableRowsTemplate {
        rows: items
            .iter()
            .map(|item| TableRow {
                id: item.id,
                title: item.title.clone(),
                detail: item.region.clone(),
                status: item.status.to_string(),
            })
            .collect(),
        review: false,
        empty_message: NO_OWN_ITINERARIES,
    }
    .render()
}

/// Rows for the admin review table with approve and reject actions.
pub fn render_review_rows_html(items: &[Itinerary]) -> Result<String, askama::Error> {
    TableRowsTemplate {
        rows: items
            .iter()
            .map(|item| TableRow {
                id: item.id,
                title: item.title.clone(),
                detail: item.creator_name().to_string(),
                status: item.status.to_string(),
            })
            .collect(),
        review: true,
        empty_message: NO_SUBMISSIONS,
    }
    .render()
}
