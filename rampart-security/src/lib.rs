//! Security response header writers for Rampart.
//!
//! Each writer sets one security header on outgoing responses; a
//! [`CompositeHeaderWriter`] runs several of them in order.
//!
//! # Example
//!
//! ```
//! use rampart_core::{HttpRequest, HttpResponse};
//! use rampart_security::{CrossOriginResourcePolicy, HeaderWriter, SecurityHeadersConfig};
//!
//! let writers = SecurityHeadersConfig::new()
//!     .with_cross_origin_resource_policy(CrossOriginResourcePolicy::SameOrigin)
//!     .build_writer();
//!
//! let request = HttpRequest::new("GET", "/static/app.js");
//! let mut response = HttpResponse::ok();
//! writers.write_headers(&request, &mut response);
//!
//! assert_eq!(response.header("Cross-Origin-Resource-Policy"), Some("same-origin"));
//! ```
//!
//! Configuration can also come from a file or the environment:
//!
//! ```no_run
//! use rampart_security::SecurityHeadersConfig;
//!
//! # fn main() -> Result<(), rampart_security::SecurityError> {
//! let from_file = SecurityHeadersConfig::from_file("security.toml")?;
//! let from_env = SecurityHeadersConfig::from_env()?; // RAMPART_CROSS_ORIGIN_RESOURCE_POLICY
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod cross_origin_resource_policy;
pub mod error;
pub mod header_writer;

pub use config::{FileFormat, SecurityHeadersConfig};
pub use cross_origin_resource_policy::{
    CrossOriginResourcePolicy, CrossOriginResourcePolicyHeaderWriter,
};
pub use error::{SecurityError, SecurityResult};
pub use header_writer::{CompositeHeaderWriter, HeaderWriter};
