use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::address::Address;
use crate::error::{AppError, AppResult};
use crate::menu::Menu;
use crate::store::{decode_locator_response, select_deliverable_store, Store};

pub const DEFAULT_API_URL: &str = "https://order.dominos.com/power";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the ordering platform's store-locator and menu endpoints.
///
/// Calls are stateless; a clone shares the underlying connection pool. No
/// timeout or retry is applied here, callers bring their own deadline.
#[derive(Clone)]
pub struct DominosClient {
    inner: Arc<DominosClientInner>,
}

struct DominosClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl DominosClient {
    /// Creates a client for the platform rooted at `base_url`
    /// (e.g. [`DEFAULT_API_URL`]).
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = http_client(USER_AGENT)?;

        Ok(Self {
            inner: Arc::new(DominosClientInner {
                client,
                base_url: base_url.into().trim_end_matches('/').to_string(),
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn locator_url(&self, line_one: &str, line_two: &str) -> String {
        format!(
            "{}/store-locator?s={}&c={}&type=delivery",
            self.inner.base_url,
            urlencoding::encode(line_one),
            urlencoding::encode(line_two)
        )
    }

    pub fn menu_url(&self, store_id: i64) -> String {
        format!(
            "{}/store/{}/menu?lang=en&structured=true",
            self.inner.base_url, store_id
        )
    }

    async fn get(&self, url: &str) -> AppResult<String> {
        debug!(%url, "requesting");
        let response = self.inner.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "platform returned a non-success status");
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "response received");
        Ok(body)
    }

    /// Candidate stores for an address, in the platform's order.
    #[instrument(skip(self))]
    pub async fn locate_stores(&self, line_one: &str, line_two: &str) -> AppResult<Vec<Store>> {
        let body = self.get(&self.locator_url(line_one, line_two)).await?;
        let stores = decode_locator_response(&body)?;
        debug!(count = stores.len(), "stores located");
        Ok(stores)
    }

    /// The first store near `address` that can deliver right now.
    #[instrument(skip(self, address), fields(address = %address))]
    pub async fn nearest_store(&self, address: &Address) -> AppResult<Store> {
        let stores = self
            .locate_stores(address.line_one(), &address.line_two())
            .await?;
        select_deliverable_store(stores)
    }

    /// Fetches and decodes the structured menu of `store_id`.
    ///
    /// # Returns
    /// * `AppError::InvalidStoreId` without touching the network when
    ///   `store_id` is not an integer.
    #[instrument(skip(self))]
    pub async fn fetch_menu(&self, store_id: &str) -> AppResult<Menu> {
        let id = parse_store_id(store_id)?;
        let body = self.get(&self.menu_url(id)).await?;
        Menu::from_json(&body)
    }
}

fn http_client(user_agent: &str) -> AppResult<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .user_agent(user_agent)
        .build()
        .map_err(|e| AppError::Config(format!("could not build HTTP client: {e}")))
}

fn parse_store_id(store_id: &str) -> AppResult<i64> {
    store_id
        .parse()
        .map_err(|_| AppError::InvalidStoreId(store_id.to_string()))
}
