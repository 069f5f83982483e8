//! String sanitization collaborator used by the pipeline.
//!
//! The pipeline treats the sanitizer as an opaque pure function: it replaces
//! each string-valued field with whatever the sanitizer returns and does not
//! inspect the output. The trait is fallible so foreign implementations can
//! report failure; the orchestrator wraps any such error as a pipeline
//! failure.

use std::error::Error as StdError;

/// Boxed error type a sanitizer may return.
pub type SanitizeError = Box<dyn StdError + Send + Sync>;

/// Rewrites one string value into its sanitized form.
///
/// Implementations must be deterministic. [`StripSanitizer`] is the shipped
/// default; callers can inject their own policy through
/// [`crate::pipeline::ProcessOptions`].
pub trait Sanitizer: Send + Sync {
    /// Sanitize one string value.
    fn sanitize(&self, input: &str) -> Result<String, SanitizeError>;
}

/// Default sanitizer: drops control characters and the markup-dangerous
/// characters `<`, `>`, `"`, `'`, `` ` `` and `&`, then trims surrounding
/// whitespace. Never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct StripSanitizer;

impl Sanitizer for StripSanitizer {
    fn sanitize(&self, input: &str) -> Result<String, SanitizeError> {
        let stripped: String = input
            .chars()
            .filter(|c| !c.is_control() && !matches!(c, '<' | '>' | '"' | '\'' | '`' | '&'))
            .collect();
        Ok(stripped.trim().to_string())
    }
}
