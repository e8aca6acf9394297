//! Resource records and request bodies. Wire keys are camelCase.

mod beer;
mod customer;

pub use beer::{Beer, BeerPatch, BeerStyle, BeerUpsert};
pub use customer::{Customer, CustomerPatch, CustomerUpsert};
