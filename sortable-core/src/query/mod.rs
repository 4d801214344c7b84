//! Request-side model: the page path plus its ordered query parameters.

pub mod params;
pub mod request;

pub use params::QueryParams;
pub use request::RequestState;
