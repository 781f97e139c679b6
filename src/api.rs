use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::address::Address;
use crate::client::DominosClient;
use crate::error::{AppError, AppResult};
use crate::menu::Menu;
use crate::order::{Customer, Order, OrderRegistry};
use crate::store::Store;

const MIN_FIELD_LEN: usize = 2;
const MAX_FIELD_LEN: usize = 45;

#[derive(Debug, Serialize, Deserialize)]
pub struct BeginOrderRequest {
    pub name: String,
    pub street: String,
    pub city: String,
    pub region: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BeginOrderResponse {
    #[serde(rename = "orderId")]
    pub order_id: String,
}

fn text_field(label: &str, value: &str) -> AppResult<String> {
    let value = value.trim();
    let len = value.chars().count();
    if !(MIN_FIELD_LEN..=MAX_FIELD_LEN).contains(&len) {
        return Err(AppError::InvalidInput(format!(
            "{label} must be between {MIN_FIELD_LEN} and {MAX_FIELD_LEN} characters"
        )));
    }
    Ok(value.to_string())
}

impl BeginOrderRequest {
    /// Validates the submitted form and turns it into a customer.
    pub fn into_customer(self) -> AppResult<Customer> {
        let postal_code: u32 = self
            .postal_code
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidInput("postal code must be a number".to_string()))?;

        Ok(Customer {
            name: text_field("name", &self.name)?,
            address: Address::new(
                text_field("street", &self.street)?,
                text_field("city", &self.city)?,
                text_field("region", &self.region)?,
                postal_code,
            ),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub registry: OrderRegistry,
    pub client: DominosClient,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/orders/:identity",
            post(begin_order).get(view_order).delete(end_order),
        )
        .route("/orders/:identity/store", get(order_store))
        .route("/stores/:store_id/menu", get(store_menu))
        .with_state(state)
}

async fn begin_order(
    State(state): State<AppState>,
    Path(identity): Path<String>,
    request: Result<Json<BeginOrderRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BeginOrderResponse>)> {
    // An order in progress wins over anything wrong with the form.
    if state.registry.contains(&identity) {
        return Err(AppError::AlreadyInProgress(identity));
    }

    let Json(request) = request.map_err(|e| AppError::InvalidInput(e.body_text()))?;
    let order = Order::new(request.into_customer()?);
    let order_id = order.order_id.clone();
    state.registry.begin(&identity, order)?;

    Ok((StatusCode::CREATED, Json(BeginOrderResponse { order_id })))
}

async fn view_order(
    State(state): State<AppState>,
    Path(identity): Path<String>,
) -> AppResult<Json<Order>> {
    state
        .registry
        .get(&identity)
        .map(Json)
        .ok_or(AppError::OrderNotFound(identity))
}

async fn end_order(State(state): State<AppState>, Path(identity): Path<String>) -> StatusCode {
    state.registry.end(&identity);
    StatusCode::NO_CONTENT
}

async fn order_store(
    State(state): State<AppState>,
    Path(identity): Path<String>,
) -> AppResult<Json<Store>> {
    let order = state
        .registry
        .get(&identity)
        .ok_or(AppError::OrderNotFound(identity))?;

    let store = state.client.nearest_store(&order.customer.address).await?;
    info!(store_id = %store.store_id, "found delivering store");
    Ok(Json(store))
}

async fn store_menu(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> AppResult<Json<Menu>> {
    let menu = state.client.fetch_menu(&store_id).await?;
    Ok(Json(menu))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BeginOrderRequest {
        BeginOrderRequest {
            name: "Jane Doe".into(),
            street: "1600 Pennsylvania Ave NW".into(),
            city: "Washington".into(),
            region: "DC".into(),
            postal_code: "20500".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        let customer = request().into_customer().unwrap();
        assert_eq!(customer.name, "Jane Doe");
        assert_eq!(customer.address.line_two(), "Washington DC 20500");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut form = request();
        form.city = "  Washington ".into();
        form.postal_code = " 20500 ".into();
        let customer = form.into_customer().unwrap();
        assert_eq!(customer.address.city, "Washington");
        assert_eq!(customer.address.postal_code, 20500);
    }

    #[test]
    fn test_postal_code_must_be_numeric() {
        let mut form = request();
        form.postal_code = "DC-1".into();
        assert!(matches!(form.into_customer(), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_field_length_bounds() {
        let mut form = request();
        form.name = "J".into();
        assert!(matches!(form.into_customer(), Err(AppError::InvalidInput(_))));

        let mut form = request();
        form.street = "x".repeat(46);
        assert!(matches!(form.into_customer(), Err(AppError::InvalidInput(_))));

        let mut form = request();
        form.region = "x".repeat(45);
        assert!(form.into_customer().is_ok());
    }
}
