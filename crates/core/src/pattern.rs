//! Full-string field patterns.

use once_cell::sync::OnceCell;
use regex::Regex;

/// A case-sensitive pattern that must match a field value in its entirety.
///
/// The source is written without anchors; they are added on first use. The
/// compiled regex is cached, so a `FieldPattern` can live in a `static`.
#[derive(Debug)]
pub struct FieldPattern {
    source: &'static str,
    compiled: OnceCell<Regex>,
}

impl FieldPattern {
    pub const fn new(source: &'static str) -> Self {
        Self {
            source,
            compiled: OnceCell::new(),
        }
    }

    /// The unanchored pattern source.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Whether `value` matches the whole pattern (no partial matches).
    pub fn is_full_match(&self, value: &str) -> bool {
        self.regex().is_match(value)
    }

    fn regex(&self) -> &Regex {
        self.compiled.get_or_init(|| {
            Regex::new(&format!("^(?:{})$", self.source)).expect("field pattern must compile")
        })
    }
}
