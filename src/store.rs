use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::address::Address;
use crate::decode::{lenient, lenient_seq, string_or_number};
use crate::error::{AppError, AppResult};

/// A store as reported by the locator endpoint.
///
/// Only the fields needed to pick a delivering store are kept. Every field
/// falls back to its zero value when the platform omits it or sends
/// something unexpected.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Store {
    #[serde(rename = "StoreID", default, deserialize_with = "string_or_number")]
    pub store_id: String,
    #[serde(rename = "IsOnlineCapable", default, deserialize_with = "lenient")]
    pub is_online_capable: bool,
    #[serde(rename = "IsOnlineNow", default, deserialize_with = "lenient")]
    pub is_online_now: bool,
    #[serde(rename = "AllowDeliveryOrders", default, deserialize_with = "lenient")]
    pub allow_delivery_orders: bool,
    #[serde(rename = "IsOpen", default, deserialize_with = "lenient")]
    pub is_open: bool,
    #[serde(rename = "ServiceIsOpen", default, deserialize_with = "lenient")]
    pub service_is_open: ServiceIsOpen,
    #[serde(
        rename = "ServiceMethodEstimatedWaitMinutes",
        default,
        deserialize_with = "lenient"
    )]
    pub estimated_wait_minutes: EstimatedWaitMinutes,
    #[serde(rename = "ContactlessDelivery", default, deserialize_with = "lenient")]
    pub contactless_delivery: String,
    #[serde(rename = "Address", default, deserialize_with = "lenient")]
    pub address: Address,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ServiceIsOpen {
    #[serde(rename = "Delivery", default, deserialize_with = "lenient")]
    pub delivery: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct EstimatedWaitMinutes {
    #[serde(rename = "Delivery", default, deserialize_with = "lenient")]
    pub delivery: WaitRange,
}

/// Estimated wait bounds, in minutes.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct WaitRange {
    #[serde(rename = "Min", default, deserialize_with = "lenient")]
    pub min: u32,
    #[serde(rename = "Max", default, deserialize_with = "lenient")]
    pub max: u32,
}

impl Store {
    /// Whether this store can take an online delivery order right now.
    pub fn is_deliverable(&self) -> bool {
        self.is_online_capable
            && self.is_online_now
            && self.allow_delivery_orders
            && self.is_open
            && self.service_is_open.delivery
    }
}

#[derive(Debug, Deserialize, Default)]
struct StoreLocatorResponse {
    #[serde(rename = "Stores", default, deserialize_with = "lenient_seq")]
    stores: Vec<Store>,
}

/// Decodes a locator response body into its candidate stores, in platform order.
///
/// Only unparsable JSON is an error; any other document shape yields no stores.
pub fn decode_locator_response(body: &str) -> AppResult<Vec<Store>> {
    let document: Value = serde_json::from_str(body)?;
    let response = StoreLocatorResponse::deserialize(document).unwrap_or_default();
    Ok(response.stores)
}

/// Returns the first deliverable store, keeping the platform's own ranking.
pub fn select_deliverable_store<I>(stores: I) -> AppResult<Store>
where
    I: IntoIterator<Item = Store>,
{
    stores
        .into_iter()
        .find(Store::is_deliverable)
        .ok_or(AppError::NoEligibleStore)
}
