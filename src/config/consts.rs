/// Kind discriminator of the documents eligible for renaming
pub const DEFAULT_TARGET_KIND: &str = "Job";
/// Annotation key that opts a document into renaming
pub const DEFAULT_OPT_IN_ANNOTATION: &str = "job-hasher";
/// Field path of the sub-structure whose content is hashed
pub const DEFAULT_HASHED_FIELD: &str = "spec";
/// Number of hex characters of the digest appended to the name
pub const DEFAULT_SUFFIX_LENGTH: usize = 10;
/// Width of a hex-rendered SHA-256 digest - upper bound for the suffix
pub const MAX_SUFFIX_LENGTH: usize = 64;
