//! Taproom: REST backend for beer and customer resources.

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use bootstrap::load_seed_data;
pub use error::{AppError, FieldViolation};
pub use model::{Beer, BeerStyle, Customer};
pub use routes::{api_routes, common_routes};
pub use service::{BeerService, CustomerService};
pub use state::AppState;
pub use store::postgres::{ensure_database_exists, ensure_tables};
