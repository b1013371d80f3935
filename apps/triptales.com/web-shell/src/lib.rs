#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use async_trait::async_trait;
    use gloo_net::http::Request;
    use gloo_timers::future::sleep;
    use triptales_app_state::{ModalState, Redirect};
    use triptales_client_core::{
        ApiClient, ClientConfig, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
        KeyValueStore, StorageError, TransportError,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Document, Element};

    use crate::wasm_constants::*;

    mod admin;
    mod auth;
    mod chrome;
    mod dom;
    mod explore;
    mod network;
    mod storage;

    use dom::*;
    use network::GlooTransport;
    use storage::LocalStorageStore;

    type WebApi = ApiClient<GlooTransport, LocalStorageStore>;

    thread_local! {
        static EVENT_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(Vec::new()) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        if let Err(error) = boot() {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "TripTales failed to start: {error}"
            )));
        }
    }

    /// Wires every feature whose anchor element exists on the current page.
    fn boot() -> Result<(), String> {
        let (config, source) = ClientConfig::from_build_env().map_err(|error| error.to_string())?;
        web_sys::console::debug_1(&JsValue::from_str(&format!(
            "TripTales api base {} ({source})",
            config.base_url
        )));
        let document = document()?;
        let api = Rc::new(ApiClient::new(config, GlooTransport, LocalStorageStore));

        chrome::init_nav(&document);
        chrome::init_reveal(&document);
        chrome::init_theme_toggle(&document, &api);
        chrome::init_session_nav(&document, &api)?;
        let explore = explore::init(&document, &api);
        chrome::init_detail_modal(&document, explore);
        auth::init(&document, &api);
        admin::init(&document, &api);
        Ok(())
    }
}
