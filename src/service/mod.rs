//! CRUD services over injected stores: create defaults, full replace,
//! partial merge.

mod beer;
mod customer;
pub mod validation;

pub use beer::BeerService;
pub use customer::CustomerService;
