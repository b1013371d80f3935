//! Parser for the free-form itinerary `details` text.
//!
//! Authors write prose such as
//! `"Best Season: Winter. Ideal For: Families. Day 1: Arrive. Day 2-3: Trek."`.
//! The parser pulls out the labelled meta fields, the intro before the first
//! day marker and one segment per `Day N:` / `Day N-M -` marker. Text with no
//! day markers falls back to a list of sentences.

use std::sync::LazyLock;

use askama::Template;
use regex::Regex;

#[expect(clippy::expect_used, reason = "static pattern")]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("detail pattern compiles")
}

static META_FIELD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(best season|ideal for|short)\s*:\s*([^.]*)\.?"));
static DAY_WORD: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)day\s*[0-9]+"));
static DAY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(day\s*[0-9]+(?:\s*-\s*[0-9]+)?)\s*[:\-]\s*"));

pub const BEST_SEASON_LABEL: &str = "Best Season";
pub const IDEAL_FOR_LABEL: &str = "Ideal For";
pub const OVERVIEW_LABEL: &str = "Overview";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySegment {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDetails {
    pub best_season: Option<String>,
    pub ideal_for: Option<String>,
    pub overview: Option<String>,
    pub intro: Option<String>,
    pub days: Vec<DaySegment>,
    pub sentences: Vec<String>,
}

/// One rendered line of the detail view, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine {
    Meta { label: &'static str, value: String },
    Intro(String),
    Day(DaySegment),
    Sentence(String),
}

impl ParsedDetails {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }

    /// Meta fields first (best season, ideal for, overview), then the intro,
    /// then either the day segments or the fallback sentences.
    #[must_use]
    pub fn lines(&self) -> Vec<DetailLine> {
        let mut lines = Vec::new();
        let meta = [
            (BEST_SEASON_LABEL, &self.best_season),
            (IDEAL_FOR_LABEL, &self.ideal_for),
            (OVERVIEW_LABEL, &self.overview),
        ];
        for (label, value) in meta {
            if let Some(value) = value {
                lines.push(DetailLine::Meta {
                    label,
                    value: value.clone(),
                });
            }
        }
        if let Some(intro) = &self.intro {
            lines.push(DetailLine::Intro(intro.clone()));
        }
        lines.extend(self.days.iter().cloned().map(DetailLine::Day));
        lines.extend(self.sentences.iter().cloned().map(DetailLine::Sentence));
        lines
    }
}

#[must_use]
pub fn parse_details(raw: &str) -> ParsedDetails {
    let text = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut parsed = ParsedDetails::default();
    if text.is_empty() {
        return parsed;
    }

    for captures in META_FIELD.captures_iter(&text) {
        let value = captures.get(2).map_or("", |m| m.as_str()).trim();
        let label = captures
            .get(1)
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();
        let slot = match label.as_str() {
            "best season" => &mut parsed.best_season,
            "ideal for" => &mut parsed.ideal_for,
            _ => &mut parsed.overview,
        };
        *slot = Some(value.to_string());
    }
    for slot in [
        &mut parsed.best_season,
        &mut parsed.ideal_for,
        &mut parsed.overview,
    ] {
        if slot.as_deref().is_some_and(str::is_empty) {
            *slot = None;
        }
    }

    let remainder = META_FIELD.replace_all(&text, "");
    let remainder = remainder.trim();

    let before_days = DAY_WORD
        .find(remainder)
        .map_or(remainder, |m| &remainder[..m.start()]);
    parsed.intro = non_empty(strip_trailing_punctuation(before_days));

    let markers: Vec<_> = DAY_MARKER.captures_iter(remainder).collect();
    for (index, captures) in markers.iter().enumerate() {
        let (Some(whole), Some(label)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        let end = markers
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(remainder.len(), |next| next.start());
        let Some(text) = non_empty(strip_trailing_punctuation(&remainder[whole.end()..end]))
        else {
            continue;
        };
        parsed.days.push(DaySegment {
            label: label.as_str().trim().to_string(),
            text,
        });
    }

    if markers.is_empty() {
        parsed.sentences = remainder
            .split('.')
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(ToString::to_string)
            .collect();
    }

    parsed
}

fn strip_trailing_punctuation(value: &str) -> &str {
    value
        .trim()
        .trim_end_matches(|ch: char| matches!(ch, '.' | ':' | '-') || ch.is_whitespace())
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

struct MarkupLine {
    label: String,
    text: String,
}

impl From<DetailLine> for MarkupLine {
    fn from(line: DetailLine) -> Self {
        let (label, text) = match line {
            DetailLine::Meta { label, value } => (label.to_string(), value),
            DetailLine::Intro(text) | DetailLine::Sentence(text) => (String::new(), text),
            DetailLine::Day(day) => (day.label, day.text),
        };
        Self { label, text }
    }
}

#[derive(Template)]
#[template(path = "details.html")]
struct DetailsTemplate {
    paragraphs: Vec<MarkupLine>,
    items: Vec<MarkupLine>,
}

/// Markup for the detail modal body. Empty details render nothing.
pub fn render_details_html(details: &ParsedDetails) -> Result<String, askama::Error> {
    let (items, paragraphs): (Vec<_>, Vec<_>) = details
        .lines()
        .into_iter()
        .partition(|line| matches!(line, DetailLine::Day(_) | DetailLine::Sentence(_)));
    DetailsTemplate {
        paragraphs: paragraphs.into_iter().map(MarkupLine::from).collect(),
        items: items.into_iter().map(MarkupLine::from).collect(),
    }
    .render()
}
