use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl UserProfile {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: Option<UserProfile>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItineraryStatus {
    Pending,
    Approved,
    Rejected,
}

impl ItineraryStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ItineraryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Itinerary {
    pub id: i64,
    pub title: String,
    pub region: String,
    pub duration_days: u32,
    pub budget_min: i64,
    pub budget_max: i64,
    pub image_url: String,
    #[serde(default)]
    pub details: String,
    pub status: ItineraryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Creator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Itinerary {
    /// Full copy of the record with only the title replaced.
    #[must_use]
    pub fn with_title(&self, title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn creator_name(&self) -> &str {
        self.created_by
            .as_ref()
            .map_or("", |creator| creator.name.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryInput {
    pub title: String,
    pub region: String,
    pub duration_days: u32,
    pub budget_min: i64,
    pub budget_max: i64,
    pub image_url: String,
    pub details: String,
}

impl ItineraryInput {
    #[must_use]
    pub fn trimmed(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            region: self.region.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            details: self.details.trim().to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItineraryList {
    #[serde(default)]
    pub items: Vec<Itinerary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: ItineraryStatus,
}

/// Filters for `GET /itineraries`. Empty values are left out of the query
/// string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItineraryQuery {
    pub q: Option<String>,
    pub region: Option<String>,
    pub mine: bool,
    pub status: Option<ItineraryStatus>,
}

impl ItineraryQuery {
    #[must_use]
    pub fn public(query: &str, region: &str) -> Self {
        Self {
            q: non_empty(query),
            region: non_empty(region),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mine() -> Self {
        Self {
            mine: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_status(status: ItineraryStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(q) = self.q.as_deref() {
            serializer.append_pair("q", q);
        }
        if let Some(region) = self.region.as_deref() {
            serializer.append_pair("region", region);
        }
        if self.mine {
            serializer.append_pair("mine", "true");
        }
        if let Some(status) = self.status {
            serializer.append_pair("status", status.as_str());
        }
        serializer.finish()
    }

    #[must_use]
    pub fn path(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            "/itineraries".to_string()
        } else {
            format!("/itineraries?{query}")
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
