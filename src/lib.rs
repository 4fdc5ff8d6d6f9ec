//! # Mealdrop
//!
//! A small food-delivery REST backend built on axum: dishes and orders served
//! from in-memory collections, with every mutation guarded by an ordered
//! validation chain.
//!
//! ## Features
//!
//! - **Validation chains**: each operation runs an explicit, ordered list of
//!   checks; the first failure halts the request with a structured error
//! - **Repository abstraction**: the backing collections are injected behind
//!   a trait, so the pipeline is testable without global state
//! - **Envelope protocol**: requests and responses use a `{ "data": ... }`
//!   wrapper; errors render as `{ "error": "<message>" }`
//! - **Typed errors**: every failure maps to an HTTP status plus message,
//!   rendered by the transport layer
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use mealdrop::prelude::*;
//! use std::sync::Arc;
//!
//! let state = AppState {
//!     dishes: Arc::new(InMemoryRepository::with_records(seed::dishes())),
//!     orders: Arc::new(InMemoryRepository::with_records(seed::orders())),
//! };
//! serve("127.0.0.1:5000", state).await?;
//! ```

pub mod config;
pub mod core;
pub mod dishes;
pub mod orders;
pub mod seed;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ApiError, ApiResult},
        payload::Envelope,
        store::{Keyed, Repository},
        validate::Chain,
    };

    // === Resources ===
    pub use crate::dishes::model::Dish;
    pub use crate::orders::model::{Order, OrderLine, OrderStatus};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server & storage ===
    pub use crate::seed;
    pub use crate::server::{AppState, build_router, serve};
    pub use crate::storage::InMemoryRepository;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::{
        Json, Router,
        extract::{Path, State},
        http::StatusCode,
    };
}
