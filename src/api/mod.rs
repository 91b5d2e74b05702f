//! HTTP API module for the Cost & Reward Allocation Engine.
//!
//! This module provides the REST API endpoint for running the settlement
//! pipeline over an input snapshot.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SettlementRequest;
pub use response::ApiError;
pub use state::AppState;
