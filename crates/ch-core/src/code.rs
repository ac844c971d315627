//! Project-code extraction from event titles.

use regex::Regex;
use thiserror::Error;

/// The default title pattern: a literal `#` at the start of the title
/// followed by the code token, which runs to the first whitespace.
pub const DEFAULT_CODE_PATTERN: &str = r"^#(\S+)";

/// Errors building a [`CodeExtractor`] from a configured pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern is not a valid regular expression.
    #[error("invalid project-code pattern: {0}")]
    Invalid(#[from] regex::Error),

    /// The pattern has no capture group for the code token.
    #[error("project-code pattern must contain one capture group for the code")]
    MissingCaptureGroup,
}

/// Extracts project codes from event titles.
///
/// The pattern is injected configuration rather than an ambient constant so
/// the pipeline can be exercised with alternative tagging conventions. Group
/// 1 of the pattern is the code token.
#[derive(Debug, Clone)]
pub struct CodeExtractor {
    pattern: Regex,
}

impl CodeExtractor {
    /// Compiles an extractor from a pattern whose first capture group is the
    /// code token.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let pattern = Regex::new(pattern)?;
        if pattern.captures_len() < 2 {
            return Err(PatternError::MissingCaptureGroup);
        }
        Ok(Self { pattern })
    }

    /// Returns the project code for a title, or `None` if the title carries
    /// no code.
    ///
    /// With the default pattern only a `#token` at position 0 qualifies; a
    /// mid-title `#token` or a bare `#` yields `None`.
    pub fn extract<'t>(&self, title: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(title)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|code| !code.is_empty())
    }
}

impl Default for CodeExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_PATTERN).expect("default pattern is valid")
    }
}
