//! REST surface for the Vestor chat pipeline.
//!
//! Exposes the turn orchestrator over HTTP: one endpoint to submit a
//! message and a read-only view of sessions and their histories. Any
//! front end (or curl) is the rendering collaborator.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
