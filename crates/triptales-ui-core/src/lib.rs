//! Presentation logic shared by every TripTales surface: escaping, the
//! itinerary detail parser, card/table/modal view models and the small
//! theme/navigation helpers. Nothing here touches the DOM.

pub mod cards;
pub mod details;
pub mod escape;
pub mod nav;
pub mod theme;

pub use cards::{ItineraryCard, ItineraryDetailView};
pub use details::{DaySegment, DetailLine, ParsedDetails, parse_details, render_details_html};
pub use escape::escape_html;
pub use theme::Theme;
