//! Core types shared by Rampart crates.
//!
//! - [`HeaderMap`]: ordered, case-insensitive header storage
//! - [`HttpRequest`] / [`HttpResponse`]: the values header writers act on
//! - [`logging`]: `tracing` subscriber setup
//! - [`Error`]: core error type

pub mod error;
pub mod headers;
pub mod http;
pub mod logging;

pub use error::{Error, Result};
pub use headers::HeaderMap;
pub use http::{HttpRequest, HttpResponse};
