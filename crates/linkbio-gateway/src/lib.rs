//! HTTP/JSON gateway for the linkbio service.
//!
//! Translates requests under `/api/links` into [`LinkRepository`] calls and
//! repository outcomes back into status codes and JSON bodies.
//!
//! [`LinkRepository`]: linkbio_core::LinkRepository

pub mod app;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
