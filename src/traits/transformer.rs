use crate::document::Document;
use crate::errors::HasherError;

/// Why a transformer left a document untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The kind discriminator did not match
    WrongKind,
    /// The opt-in annotation is absent or parses to false
    NotOptedIn,
    /// The opt-in annotation is present but is not a boolean literal
    InvalidOptIn(String),
}

/// Result of a successful transform of a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped(SkipReason),
    Renamed { from: String, to: String },
}

impl Outcome {
    pub fn is_renamed(&self) -> bool {
        matches!(self, Outcome::Renamed { .. })
    }
}

/// A stateless, in-place transform applied to one document at a time.
pub trait Transformer {
    fn transform<D: Document>(&self, doc: &mut D) -> Result<Outcome, HasherError>;

    fn name(&self) -> &'static str;
}
