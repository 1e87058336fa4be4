//! Web layer for the subway network.
//!
//! Provides HTTP endpoints for managing stations and lines and for
//! querying shortest paths.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
