//! Header writer capability
//!
//! A [`HeaderWriter`] sets one response header (or a small related group).
//! Writers are configured once at startup and then shared across request
//! handlers, so they are `Send + Sync` and write through `&self`.
//!
//! [`CompositeHeaderWriter`] runs several writers in order. Writers that only
//! set a header when it is absent therefore yield to whatever an earlier writer
//! (or the handler) already put on the response.

use rampart_core::{HttpRequest, HttpResponse};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Writes security headers onto a response.
pub trait HeaderWriter: Send + Sync {
    /// Add this writer's header(s) to `response`.
    fn write_headers(&self, request: &HttpRequest, response: &mut HttpResponse);
}

impl<F> HeaderWriter for F
where
    F: Fn(&HttpRequest, &mut HttpResponse) + Send + Sync,
{
    fn write_headers(&self, request: &HttpRequest, response: &mut HttpResponse) {
        self(request, response)
    }
}

/// Runs a list of writers in insertion order.
///
/// ```rust
/// use rampart_core::{HttpRequest, HttpResponse};
/// use rampart_security::{
///     CompositeHeaderWriter, CrossOriginResourcePolicy, CrossOriginResourcePolicyHeaderWriter,
///     HeaderWriter,
/// };
///
/// let writers = CompositeHeaderWriter::new()
///     .with_writer(|_: &HttpRequest, res: &mut HttpResponse| {
///         res.add_header("X-Content-Type-Options", "nosniff");
///     })
///     .with_writer(CrossOriginResourcePolicyHeaderWriter::with_policy(
///         CrossOriginResourcePolicy::SameOrigin,
///     ));
///
/// let mut response = HttpResponse::ok();
/// writers.write_headers(&HttpRequest::new("GET", "/"), &mut response);
///
/// assert_eq!(response.header("Cross-Origin-Resource-Policy"), Some("same-origin"));
/// assert_eq!(response.headers.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct CompositeHeaderWriter {
    writers: Vec<Arc<dyn HeaderWriter>>,
}

impl CompositeHeaderWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from already shared writers
    pub fn from_writers(writers: Vec<Arc<dyn HeaderWriter>>) -> Self {
        Self { writers }
    }

    /// Append a writer (builder style)
    pub fn with_writer<W: HeaderWriter + 'static>(mut self, writer: W) -> Self {
        self.add_writer(writer);
        self
    }

    /// Append a writer
    pub fn add_writer<W: HeaderWriter + 'static>(&mut self, writer: W) {
        self.writers.push(Arc::new(writer));
    }

    /// Append a writer that is also held elsewhere
    pub fn add_shared(&mut self, writer: Arc<dyn HeaderWriter>) {
        self.writers.push(writer);
    }

    pub fn len(&self) -> usize {
        self.writers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writers.is_empty()
    }
}

impl HeaderWriter for CompositeHeaderWriter {
    fn write_headers(&self, request: &HttpRequest, response: &mut HttpResponse) {
        trace!(
            writer_count = self.writers.len(),
            path = %request.path,
            "Writing security headers"
        );
        for writer in &self.writers {
            writer.write_headers(request, response);
        }
    }
}

impl fmt::Debug for CompositeHeaderWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeHeaderWriter")
            .field("writers", &self.writers.len())
            .finish()
    }
}
