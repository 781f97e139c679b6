#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    routing::get,
    Router,
};
use pizza_order::api::{self, AppState};
use pizza_order::client::DominosClient;
use pizza_order::order::OrderRegistry;
use std::collections::HashMap;
use std::net::{SocketAddr, TcpListener};
use std::sync::{Arc, Mutex};

pub const LOCATOR: &str = include_str!("../fixtures/locator.json");
pub const MENU: &str = include_str!("../fixtures/menu.json");

/// Serves `app` on an ephemeral local port.
pub fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let server = axum::Server::from_tcp(listener)
        .unwrap()
        .serve(app.into_make_service());
    tokio::spawn(server);
    addr
}

/// An address nothing is listening on.
pub fn dead_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

type Requests = Arc<Mutex<Vec<String>>>;

/// Stand-in for the ordering platform, recording every request URI.
pub struct FakePlatform {
    pub addr: SocketAddr,
    requests: Requests,
}

impl FakePlatform {
    pub fn start() -> Self {
        let requests = Requests::default();
        let app = Router::new()
            .route("/power/store-locator", get(store_locator))
            .route("/power/store/:store_id/menu", get(store_menu))
            .with_state(requests.clone());

        Self {
            addr: serve(app),
            requests,
        }
    }

    pub fn api_url(&self) -> String {
        format!("http://{}/power", self.addr)
    }

    pub fn client(&self) -> DominosClient {
        DominosClient::new(self.api_url()).unwrap()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

async fn store_locator(
    State(requests): State<Requests>,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    requests.lock().unwrap().push(uri.to_string());

    match query.get("s").map(String::as_str) {
        Some("1 Nowhere Rd") => (
            StatusCode::OK,
            r#"{"Stores": [{"StoreID": "1", "IsOnlineCapable": true, "IsOpen": false}]}"#.to_string(),
        ),
        Some("1 Outage Ave") => (
            StatusCode::SERVICE_UNAVAILABLE,
            "<html>Service Unavailable</html>".to_string(),
        ),
        _ => (StatusCode::OK, LOCATOR.to_string()),
    }
}

async fn store_menu(
    State(requests): State<Requests>,
    uri: Uri,
    Path(store_id): Path<String>,
) -> String {
    requests.lock().unwrap().push(uri.to_string());

    match store_id.as_str() {
        "4318" => MENU.to_string(),
        _ => "{}".to_string(),
    }
}

/// Runs the order API against `platform` and returns its base URL.
pub fn start_api(platform: &FakePlatform) -> (String, OrderRegistry) {
    let registry = OrderRegistry::new();
    let state = AppState {
        registry: registry.clone(),
        client: platform.client(),
    };
    let addr = serve(api::create_router(state));
    (format!("http://{}", addr), registry)
}
