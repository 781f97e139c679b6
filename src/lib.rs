//! Pizza Order Service
//!
//! Places the first steps of a Domino's delivery order without the platform's own
//! client: find a store that can deliver to an address, read its menu, and keep
//! one in-progress order per customer.
//!
//! # Architecture
//!
//! ## Core Components
//!
//! * `address` - Delivery address and the two locator query lines derived from it
//! * `store` - Locator response model and delivery-eligibility filter
//! * `menu` - Structured menu model and code lookups
//! * `decode` - Tolerant field decoding for the platform's loose JSON
//! * `client` - HTTP client for the store-locator and menu endpoints
//! * `order` - Customers, orders and the in-memory order registry
//! * `api` - RESTful API endpoints using Axum framework
//! * `config` - Environment configuration
//! * `error` - Error handling and HTTP response mapping
//!
//! ## Design
//!
//! ### Platform Client (`client.rs`)
//! - `reqwest` based, one GET per call, no retries or timeouts
//! - Store-locator results keep the platform's ranking; the first store that is
//!   online, open and delivering wins
//! - Missing or odd fields decode to zero values; only unparsable JSON fails
//!
//! ### Order Registry (`order.rs`)
//! - Lock-guarded map from customer identity to order
//! - At most one order per identity, `begin` is an atomic check-and-insert
//! - Held in memory only, lost on restart
//!
//! # Environment Configuration
//!
//! ```bash
//! HOST=127.0.0.1                                # Server host
//! PORT=3000                                     # Server port
//! DOMINOS_API_URL=https://order.dominos.com/power   # Platform base URL
//! RUST_LOG=info                                 # Logging level
//! ```
//!
//! # Error Handling
//!
//! `AppError` distinguishes:
//! - Network failures reaching the platform (502)
//! - Unparsable platform responses (502)
//! - No deliverable store near the address (404)
//! - Malformed store ids (400)
//! - A second order for the same customer (409)
//! - Missing orders and invalid input (404 / 400)
//!
//! # API Endpoints
//!
//! ## POST /orders/:identity
//! Begins an order for a customer. Rejected with 409 if one is already in progress.
//!
//! ### Request
//! ```json
//! {
//!   "name": "string",        // 2-45 characters
//!   "street": "string",      // 2-45 characters
//!   "city": "string",        // 2-45 characters
//!   "region": "string",      // 2-45 characters
//!   "postalCode": "string"   // must be a whole number
//! }
//! ```
//!
//! ### Response (201)
//! ```json
//! {
//!   "orderId": "string"
//! }
//! ```
//!
//! ## GET /orders/:identity
//! Returns the order in progress, or 404.
//!
//! ## DELETE /orders/:identity
//! Drops the order in progress, if any. Always 204.
//!
//! ## GET /orders/:identity/store
//! Returns the nearest store able to deliver to the order's address.
//!
//! ## GET /stores/:store_id/menu
//! Returns the decoded structured menu of a store.
//!
//! # Example Usage
//!
//! ```no_run
//! use pizza_order::address::Address;
//! use pizza_order::client::{DominosClient, DEFAULT_API_URL};
//!
//! async fn example() -> Result<(), pizza_order::error::AppError> {
//!     let client = DominosClient::new(DEFAULT_API_URL)?;
//!     let address = Address::new("1600 Pennsylvania Ave NW", "Washington", "DC", 20500);
//!
//!     let store = client.nearest_store(&address).await?;
//!     let menu = client.fetch_menu(&store.store_id).await?;
//!
//!     let mut products = menu.product_codes();
//!     products.sort_unstable();
//!     println!("{} sells {:?}", store.store_id, products);
//!     Ok(())
//! }
//! ```

pub mod address;
pub mod api;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod menu;
pub mod order;
pub mod store;
