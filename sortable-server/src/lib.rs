//! Demo host for the sortable tags: an axum app serving one HTML table whose
//! headers toggle the page's sort order.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
