use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::address::Address;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Customer {
    pub name: String,
    pub address: Address,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Order {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub customer: Customer,
}

impl Order {
    /// Creates a new, empty order for `customer` with a fresh ID.
    pub fn new(customer: Customer) -> Self {
        Self {
            order_id: Uuid::new_v4().to_string(),
            customer,
        }
    }
}

/// In-memory orders in progress, at most one per customer identity.
///
/// Cloning shares the same underlying map. Nothing is persisted: orders are
/// gone once the process exits.
#[derive(Clone, Default)]
pub struct OrderRegistry {
    orders: Arc<Mutex<HashMap<String, Order>>>,
}

impl OrderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Each critical section is a single map call, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Order>> {
        self.orders.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers `order` for `identity`.
    ///
    /// # Returns
    /// * `AppError::AlreadyInProgress` if `identity` already has an order; the
    ///   existing order is left untouched.
    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    pub fn begin(&self, identity: &str, order: Order) -> AppResult<()> {
        match self.lock().entry(identity.to_string()) {
            Entry::Occupied(_) => {
                warn!("order already in progress");
                Err(AppError::AlreadyInProgress(identity.to_string()))
            }
            Entry::Vacant(slot) => {
                slot.insert(order);
                info!("order started");
                Ok(())
            }
        }
    }

    /// The order in progress for `identity`, if any.
    pub fn get(&self, identity: &str) -> Option<Order> {
        self.lock().get(identity).cloned()
    }

    /// Whether `identity` has an order in progress.
    pub fn contains(&self, identity: &str) -> bool {
        self.lock().contains_key(identity)
    }

    /// Drops the order for `identity`. Ending an absent order is a no-op.
    #[instrument(skip(self))]
    pub fn end(&self, identity: &str) -> Option<Order> {
        let removed = self.lock().remove(identity);
        if removed.is_some() {
            info!("order ended");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
