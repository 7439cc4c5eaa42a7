// Rampart - security response headers for Rust HTTP services
//
// Facade over the Rampart crates: core request/response values and logging,
// plus the security header writers behind the `security` feature.

// Re-export core functionality
pub use rampart_core::*;

#[cfg(feature = "security")]
pub use rampart_security;

// Prelude for common imports
pub mod prelude {
    pub use crate::{HeaderMap, HttpRequest, HttpResponse};

    #[cfg(feature = "security")]
    pub use rampart_security::{
        CompositeHeaderWriter, CrossOriginResourcePolicy, CrossOriginResourcePolicyHeaderWriter,
        HeaderWriter, SecurityError, SecurityHeadersConfig,
    };
}
