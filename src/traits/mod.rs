pub mod transformer;

pub use crate::document::Document;
pub use transformer::{Outcome, SkipReason, Transformer};
