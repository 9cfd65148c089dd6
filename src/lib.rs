//! A minimal in-memory URL shortener.
//!
//! [`store::LinkStore`] owns the identifier → URL mapping and
//! [`api::router`] exposes it over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod state;
pub mod store;
pub mod types;
pub mod utils;

pub use error::{LinkError, Result};
pub use state::AppState;
pub use store::{LinkRecord, LinkStore};
