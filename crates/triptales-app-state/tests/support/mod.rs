use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::{Value, json};
use triptales_client_core::{
    ApiClient, ClientConfig, HttpMethod, HttpRequest, HttpResponse, HttpTransport, MemoryStore,
    TransportError,
};

pub const BASE_URL: &str = "https://api.triptales.test";

struct Route {
    method: HttpMethod,
    path: String,
    responses: VecDeque<HttpResponse>,
}

/// In-memory backend keyed by method and path. The last scripted response
/// for a route keeps answering; unknown routes get FastAPI's 404.
#[derive(Default)]
pub struct FakeBackend {
    routes: RefCell<Vec<Route>>,
    sent: RefCell<Vec<HttpRequest>>,
}

impl FakeBackend {
    pub fn on(self, method: HttpMethod, path: &str, status: u16, body: Value) -> Self {
        let response = HttpResponse {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        };
        {
            let mut routes = self.routes.borrow_mut();
            match routes
                .iter_mut()
                .find(|route| route.method == method && route.path == path)
            {
                Some(route) => route.responses.push_back(response),
                None => routes.push(Route {
                    method,
                    path: path.to_string(),
                    responses: VecDeque::from([response]),
                }),
            }
        }
        self
    }

    /// `METHOD /path` for every request sent, in order.
    pub fn calls(&self) -> Vec<String> {
        self.sent
            .borrow()
            .iter()
            .map(|request| format!("{} {}", request.method.as_str(), path_of(request)))
            .collect()
    }

    pub fn body_of(&self, call: &str) -> Option<Value> {
        self.sent
            .borrow()
            .iter()
            .find(|request| format!("{} {}", request.method.as_str(), path_of(request)) == call)
            .and_then(|request| request.body.as_deref())
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

fn path_of(request: &HttpRequest) -> &str {
    request
        .url
        .strip_prefix(BASE_URL)
        .unwrap_or(request.url.as_str())
}

#[async_trait(?Send)]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let path = path_of(&request).to_string();
        let method = request.method;
        self.sent.borrow_mut().push(request);

        let mut routes = self.routes.borrow_mut();
        let Some(route) = routes
            .iter_mut()
            .find(|route| route.method == method && route.path == path)
        else {
            return Ok(HttpResponse {
                status: 404,
                content_type: Some("application/json".to_string()),
                body: json!({"detail": "Not Found"}).to_string(),
            });
        };
        let response = if route.responses.len() > 1 {
            route.responses.pop_front()
        } else {
            route.responses.front().cloned()
        };
        response.ok_or_else(|| TransportError::Network("route has no response".to_string()))
    }
}

pub fn api<T: HttpTransport>(transport: T) -> ApiClient<T, MemoryStore> {
    let config = ClientConfig::new(BASE_URL).expect("test base url");
    ApiClient::new(config, transport, MemoryStore::new())
}

pub fn itinerary(id: i64, title: &str, status: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "region": "Himachal",
        "duration_days": 4,
        "budget_min": 9000,
        "budget_max": 15000,
        "image_url": "../images/manali.jpg",
        "details": "Ideal For: Friends. Day 1: Mall Road. Day 2: Solang Valley.",
        "status": status,
        "created_by": {"id": 2, "name": "Demo User", "email": "user@triptales.local"},
        "created_at": "2026-02-01T09:00:00Z",
        "updated_at": "2026-02-01T09:00:00Z"
    })
}

pub fn list(items: Vec<Value>) -> Value {
    json!({ "items": items })
}

pub fn admin_profile() -> Value {
    json!({"id": 1, "name": "Admin", "email": "admin@triptales.local", "role": "admin"})
}

pub fn user_profile() -> Value {
    json!({"id": 2, "name": "Demo User", "email": "user@triptales.local", "role": "user"})
}
