//! Cross-Origin-Resource-Policy (CORP)
//!
//! Tells browsers which origins may load a resource in no-cors mode
//! (`<img>`, `<script>`, ...). See
//! <https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Cross-Origin-Resource-Policy>.

use crate::error::{SecurityError, SecurityResult};
use crate::header_writer::HeaderWriter;
use rampart_core::{HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace, warn};

/// Cross-Origin-Resource-Policy values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossOriginResourcePolicy {
    /// Only requests from the same site may load the resource
    SameSite,
    /// Only requests from the same origin (scheme, host and port)
    SameOrigin,
    /// Any origin may load the resource
    CrossOrigin,
}

impl CrossOriginResourcePolicy {
    /// Every policy, in declaration order
    pub const ALL: [Self; 3] = [Self::SameSite, Self::SameOrigin, Self::CrossOrigin];

    /// The header value sent on the wire
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SameSite => "same-site",
            Self::SameOrigin => "same-origin",
            Self::CrossOrigin => "cross-origin",
        }
    }

    /// Find the policy whose wire value is exactly `value`.
    ///
    /// Returns `None` for anything else, including differently cased input.
    /// Use [`str::parse`] when an unknown value should be an error.
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|policy| policy.as_str() == value)
    }
}

impl fmt::Display for CrossOriginResourcePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse: unknown values are [`SecurityError::UnknownPolicy`]
impl FromStr for CrossOriginResourcePolicy {
    type Err = SecurityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire(s).ok_or_else(|| SecurityError::unknown_policy(s))
    }
}

/// Writes `Cross-Origin-Resource-Policy` unless the response already has one.
///
/// Does nothing until a policy is configured.
///
/// ```rust
/// use rampart_core::{HttpRequest, HttpResponse};
/// use rampart_security::{
///     CrossOriginResourcePolicy, CrossOriginResourcePolicyHeaderWriter, HeaderWriter,
/// };
///
/// let writer =
///     CrossOriginResourcePolicyHeaderWriter::with_policy(CrossOriginResourcePolicy::SameSite);
/// let mut response = HttpResponse::ok();
/// writer.write_headers(&HttpRequest::new("GET", "/logo.png"), &mut response);
///
/// assert_eq!(response.header("Cross-Origin-Resource-Policy"), Some("same-site"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossOriginResourcePolicyHeaderWriter {
    policy: Option<CrossOriginResourcePolicy>,
}

impl CrossOriginResourcePolicyHeaderWriter {
    /// Name of the header this writer sets
    pub const HEADER_NAME: &'static str = "Cross-Origin-Resource-Policy";

    /// Create a writer with no policy; it writes nothing until configured.
    pub const fn new() -> Self {
        Self { policy: None }
    }

    /// Create a writer for `policy`.
    pub const fn with_policy(policy: CrossOriginResourcePolicy) -> Self {
        Self {
            policy: Some(policy),
        }
    }

    /// Configure the policy.
    ///
    /// Takes `&mut self`: a writer already shared between request handlers
    /// needs external synchronization to be reconfigured.
    ///
    /// # Errors
    ///
    /// [`SecurityError::InvalidArgument`] when `policy` is `None`; the current
    /// policy is left unchanged.
    pub fn set_policy(
        &mut self,
        policy: impl Into<Option<CrossOriginResourcePolicy>>,
    ) -> SecurityResult<()> {
        let Some(policy) = policy.into() else {
            warn!("Rejected absent Cross-Origin-Resource-Policy");
            return Err(SecurityError::invalid_argument(
                "resource policy cannot be absent",
            ));
        };

        debug!(policy = %policy, "Cross-Origin-Resource-Policy configured");
        self.policy = Some(policy);
        Ok(())
    }

    /// Get the configured policy, if any
    pub fn policy(&self) -> Option<CrossOriginResourcePolicy> {
        self.policy
    }
}

impl HeaderWriter for CrossOriginResourcePolicyHeaderWriter {
    fn write_headers(&self, _request: &HttpRequest, response: &mut HttpResponse) {
        let Some(policy) = self.policy else {
            trace!("No Cross-Origin-Resource-Policy configured, skipping");
            return;
        };

        if response.contains_header(Self::HEADER_NAME) {
            trace!("Cross-Origin-Resource-Policy already present, leaving it");
            return;
        }

        debug!(policy = %policy, "Cross-Origin-Resource-Policy written");
        response.add_header(Self::HEADER_NAME, policy.as_str());
    }
}
