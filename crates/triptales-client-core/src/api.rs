use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::RequestError;
use crate::models::{
    Itinerary, ItineraryInput, ItineraryList, ItineraryQuery, ItineraryStatus, LoginRequest,
    LoginResponse, RegisterRequest, StatusUpdate, UserProfile,
};
use crate::session::{KeyValueStore, SessionStore};
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: HttpMethod::Get,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn method(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// JSON API client for the TripTales backend.
///
/// Every call is a single attempt through the injected transport; the bearer
/// token is read from the session store at send time.
#[derive(Debug, Clone)]
pub struct ApiClient<T, S> {
    config: ClientConfig,
    transport: T,
    session: SessionStore<S>,
}

impl<T, S> ApiClient<T, S>
where
    T: HttpTransport,
    S: KeyValueStore,
{
    pub fn new(config: ClientConfig, transport: T, store: S) -> Self {
        Self {
            config,
            transport,
            session: SessionStore::new(store),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_request(
        &self,
        path: &str,
        options: &RequestOptions,
    ) -> Result<HttpRequest, RequestError> {
        let mut headers = vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())];
        for (name, value) in &options.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }
        if let Some(token) = self.session.token() {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case("authorization"));
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let body = options
            .body
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|error| {
                tracing::warn!(%error, path, "failed to serialize request body");
                RequestError::fallback()
            })?;

        Ok(HttpRequest {
            method: options.method,
            url: self.config.endpoint(path),
            headers,
            body,
        })
    }

    pub async fn request(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Option<Value>, RequestError> {
        let request = self.build_request(path, &options)?;
        let method = request.method.as_str();
        tracing::debug!(method, path, "sending api request");

        let response = self.transport.send(request).await.map_err(|error| {
            tracing::warn!(%error, method, path, "api request did not reach the server");
            RequestError::fallback()
        })?;

        let result = decode_response(response);
        if let Err(error) = result.as_ref() {
            tracing::warn!(status = ?error.status, message = %error.message, method, path, "api request failed");
        }
        result
    }

    pub async fn request_json<R>(&self, path: &str, options: RequestOptions) -> Result<R, RequestError>
    where
        R: DeserializeOwned,
    {
        let value = self.request(path, options).await?.unwrap_or(Value::Null);
        serde_json::from_value(value).map_err(|error| {
            tracing::warn!(%error, path, "api response did not match the expected shape");
            RequestError::fallback()
        })
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, RequestError> {
        let options = RequestOptions::method(HttpMethod::Post).json(to_json(request)?);
        self.request_json("/auth/login", options).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<(), RequestError> {
        let options = RequestOptions::method(HttpMethod::Post).json(to_json(request)?);
        self.request("/auth/register", options).await.map(|_| ())
    }

    pub async fn logout(&self) -> Result<(), RequestError> {
        self.request("/auth/logout", RequestOptions::method(HttpMethod::Post))
            .await
            .map(|_| ())
    }

    pub async fn me(&self) -> Result<UserProfile, RequestError> {
        self.request_json("/auth/me", RequestOptions::get()).await
    }

    pub async fn list_itineraries(
        &self,
        query: &ItineraryQuery,
    ) -> Result<Vec<Itinerary>, RequestError> {
        let list: ItineraryList = self
            .request_json(query.path().as_str(), RequestOptions::get())
            .await?;
        Ok(list.items)
    }

    pub async fn create_itinerary(
        &self,
        input: &ItineraryInput,
    ) -> Result<Option<Value>, RequestError> {
        let options = RequestOptions::method(HttpMethod::Post).json(to_json(input)?);
        self.request("/itineraries", options).await
    }

    /// Full-resource update: the whole record is sent, not a patch.
    pub async fn update_itinerary(
        &self,
        itinerary: &Itinerary,
    ) -> Result<Option<Value>, RequestError> {
        let options = RequestOptions::method(HttpMethod::Put).json(to_json(itinerary)?);
        self.request(itinerary_path(itinerary.id).as_str(), options)
            .await
    }

    pub async fn delete_itinerary(&self, id: i64) -> Result<(), RequestError> {
        self.request(
            itinerary_path(id).as_str(),
            RequestOptions::method(HttpMethod::Delete),
        )
        .await
        .map(|_| ())
    }

    pub async fn set_itinerary_status(
        &self,
        id: i64,
        status: ItineraryStatus,
    ) -> Result<(), RequestError> {
        let options =
            RequestOptions::method(HttpMethod::Patch).json(to_json(&StatusUpdate { status })?);
        self.request(itinerary_status_path(id).as_str(), options)
            .await
            .map(|_| ())
    }
}

#[must_use]
pub fn itinerary_path(id: i64) -> String {
    format!("/itineraries/{id}")
}

#[must_use]
pub fn itinerary_status_path(id: i64) -> String {
    format!("/itineraries/{id}/status")
}

/// Maps a raw response to its JSON body, or to the user-facing error for any
/// non-2xx status. Non-JSON bodies are treated as absent.
pub fn decode_response(response: HttpResponse) -> Result<Option<Value>, RequestError> {
    let data = if response.is_json() {
        match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(%error, status = response.status, "api returned malformed json");
                return Err(RequestError::fallback().with_status(response.status));
            }
        }
    } else {
        None
    };

    if !response.is_success() {
        return Err(RequestError::from_response(response.status, data.as_ref()));
    }
    Ok(data)
}

fn to_json<B: Serialize + ?Sized>(body: &B) -> Result<Value, RequestError> {
    serde_json::to_value(body).map_err(|error| {
        tracing::warn!(%error, "failed to encode request body");
        RequestError::fallback()
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::error::FALLBACK_ERROR_MESSAGE;
    use crate::models::Role;
    use crate::session::MemoryStore;
    use crate::transport::TransportError;

    #[derive(Default)]
    struct ScriptedTransport {
        responses: RefCell<VecDeque<Result<HttpResponse, TransportError>>>,
        sent: RefCell<Vec<HttpRequest>>,
    }

    impl ScriptedTransport {
        fn respond(self, status: u16, content_type: Option<&str>, body: &str) -> Self {
            self.responses.borrow_mut().push_back(Ok(HttpResponse {
                status,
                content_type: content_type.map(ToString::to_string),
                body: body.to_string(),
            }));
            self
        }

        fn fail(self, error: TransportError) -> Self {
            self.responses.borrow_mut().push_back(Err(error));
            self
        }

        fn last_sent(&self) -> HttpRequest {
            self.sent.borrow().last().cloned().expect("a request was sent")
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
            self.sent.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Network("no scripted response".into())))
        }
    }

    fn client(transport: ScriptedTransport) -> ApiClient<ScriptedTransport, MemoryStore> {
        let config = ClientConfig::new("https://api.triptales.example").expect("config");
        ApiClient::new(config, transport, MemoryStore::new())
    }

    const JSON: Option<&str> = Some("application/json");

    #[test]
    fn build_request_merges_headers_and_attaches_token() {
        let api = client(ScriptedTransport::default());
        api.session().set_token("tok_abc").expect("token");

        let options = RequestOptions::method(HttpMethod::Post)
            .header("content-type", "application/merge-patch+json")
            .header("X-Trace", "1")
            .header("Authorization", "Bearer caller")
            .json(json!({"status": "approved"}));
        let request = api
            .build_request("/itineraries/4/status", &options)
            .expect("request");

        assert_eq!(request.url, "https://api.triptales.example/itineraries/4/status");
        assert_eq!(
            request.header("Content-Type"),
            Some("application/merge-patch+json")
        );
        assert_eq!(request.header("x-trace"), Some("1"));
        assert_eq!(request.header("authorization"), Some("Bearer tok_abc"));
        assert_eq!(
            request
                .headers
                .iter()
                .filter(|(name, _)| name.eq_ignore_ascii_case("authorization"))
                .count(),
            1
        );
        assert_eq!(request.body.as_deref(), Some(r#"{"status":"approved"}"#));
    }

    #[test]
    fn build_request_without_session_has_no_authorization() {
        let api = client(ScriptedTransport::default());
        let request = api
            .build_request("/itineraries", &RequestOptions::get())
            .expect("request");
        assert_eq!(request.header("Authorization"), None);
        assert_eq!(request.header("Content-Type"), Some(JSON_CONTENT_TYPE));
        assert_eq!(request.body, None);
    }

    #[tokio::test]
    async fn not_found_detail_becomes_error_message() {
        let api = client(ScriptedTransport::default().respond(
            404,
            JSON,
            r#"{"detail":"Not found"}"#,
        ));
        let error = api
            .request("/itineraries/99", RequestOptions::get())
            .await
            .expect_err("404 must fail");
        assert_eq!(error.message, "Not found");
        assert_eq!(error.status, Some(404));
    }

    #[tokio::test]
    async fn non_json_error_uses_fallback_message() {
        let api = client(ScriptedTransport::default().respond(
            502,
            Some("text/html"),
            "<h1>Bad Gateway</h1>",
        ));
        let error = api
            .request("/itineraries", RequestOptions::get())
            .await
            .expect_err("502 must fail");
        assert_eq!(error.message, FALLBACK_ERROR_MESSAGE);
        assert_eq!(error.status, Some(502));
    }

    #[tokio::test]
    async fn transport_failure_uses_fallback_message() {
        let api = client(
            ScriptedTransport::default().fail(TransportError::Network("dns failure".into())),
        );
        let error = api.me().await.expect_err("network failure");
        assert_eq!(error, RequestError::fallback());
    }

    #[tokio::test]
    async fn success_without_json_body_is_absent() {
        let api = client(ScriptedTransport::default().respond(204, None, ""));
        let data = api
            .request("/itineraries/3", RequestOptions::method(HttpMethod::Delete))
            .await
            .expect("delete ok");
        assert_eq!(data, None);
    }

    #[tokio::test]
    async fn login_posts_credentials_and_decodes_session() {
        let api = client(ScriptedTransport::default().respond(
            200,
            JSON,
            r#"{"token":"tok_1","user":{"id":1,"name":"Admin","email":"admin@triptales.local","role":"admin"}}"#,
        ));
        let response = api
            .login(&LoginRequest {
                email: "admin@triptales.local".to_string(),
                password: "admin123".to_string(),
            })
            .await
            .expect("login");

        assert_eq!(response.token, "tok_1");
        assert_eq!(response.user.role, Role::Admin);

        let sent = api.transport().last_sent();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(sent.url, "https://api.triptales.example/auth/login");
        let body: Value = serde_json::from_str(sent.body.as_deref().unwrap_or("null"))
            .expect("json body");
        assert_eq!(
            body,
            json!({"email": "admin@triptales.local", "password": "admin123"})
        );
    }

    #[tokio::test]
    async fn list_itineraries_sends_filters_and_decodes_items() {
        let api = client(ScriptedTransport::default().respond(
            200,
            JSON,
            r#"{"items":[{"id":1,"title":"Dal Lake Serenity Escape","region":"Kashmir","duration_days":3,"budget_min":8000,"budget_max":12000,"image_url":"../images/dal-lake.jpg","details":"Day 1: Arrive.","status":"approved","created_by":{"id":2,"name":"Demo User"}}]}"#,
        ));
        let items = api
            .list_itineraries(&ItineraryQuery::public("dal", "Kashmir"))
            .await
            .expect("items");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Dal Lake Serenity Escape");
        assert_eq!(
            api.transport().last_sent().url,
            "https://api.triptales.example/itineraries?q=dal&region=Kashmir"
        );
    }

    #[tokio::test]
    async fn malformed_success_payload_maps_to_fallback() {
        let api = client(ScriptedTransport::default().respond(200, JSON, r#"{"items": 3}"#));
        let error = api
            .list_itineraries(&ItineraryQuery::mine())
            .await
            .expect_err("bad shape");
        assert_eq!(error.message, FALLBACK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn status_patch_targets_status_path() {
        let api = client(ScriptedTransport::default().respond(
            200,
            JSON,
            r#"{"message":"Itinerary marked as rejected"}"#,
        ));
        api.set_itinerary_status(12, ItineraryStatus::Rejected)
            .await
            .expect("patch");

        let sent = api.transport().last_sent();
        assert_eq!(sent.method, HttpMethod::Patch);
        assert_eq!(sent.url, "https://api.triptales.example/itineraries/12/status");
        assert_eq!(sent.body.as_deref(), Some(r#"{"status":"rejected"}"#));
    }
}
