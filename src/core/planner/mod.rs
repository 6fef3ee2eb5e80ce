//! Shopping-list planning from a design description

pub mod parse;
pub mod prompt;
pub mod service;
pub mod types;

pub use service::PlannerService;
pub use types::{PlanRequest, ShoppingItem, ShoppingList};
