//! The /dishes resource: model, validation chains, and handlers

pub mod handlers;
pub mod model;
pub mod validate;

pub use model::Dish;
