// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::HasherConfig;
use crate::document::Document;
use crate::errors::HasherError;
use crate::observability::messages::{hasher::*, StructuredLog};
use crate::traits::{Outcome, SkipReason, Transformer};
use crate::utils::{parse_bool, short_hash};

/// Job Hasher - appends a content hash of `spec` to the name of opted-in Jobs.
///
/// A document is renamed only when its kind matches exactly and its opt-in
/// annotation parses to true. The suffix is a prefix of the lowercase hex
/// SHA-256 of the canonical JSON of the hashed field.
///
/// The canonical form sorts keys, so reordering a spec does not change the
/// suffix. Running the transform twice appends a second suffix; callers must
/// not feed renamed output back in.
pub struct JobHasher {
    config: HasherConfig,
}

impl JobHasher {
    pub fn new(config: HasherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HasherConfig {
        &self.config
    }

    fn skip<D: Document>(&self, doc: &D, reason: SkipReason) -> Outcome {
        let name = doc.name();
        let text = match &reason {
            SkipReason::WrongKind => format!("kind is not '{}'", self.config.kind),
            SkipReason::NotOptedIn => format!("'{}' annotation is not true", self.config.annotation),
            SkipReason::InvalidOptIn(value) => {
                InvalidOptInAnnotation {
                    name: &name,
                    annotation: &self.config.annotation,
                    value,
                }
                .log();
                format!("'{}' annotation is not a boolean", self.config.annotation)
            }
        };
        DocumentSkipped {
            name: &name,
            kind: doc.kind(),
            reason: &text,
        }
        .log();
        Outcome::Skipped(reason)
    }

    fn fail(&self, name: &str, error: HasherError) -> HasherError {
        HashingFailed {
            name,
            field: &self.config.field,
            error: &error,
        }
        .log();
        error
    }
}

impl Default for JobHasher {
    fn default() -> Self {
        Self::new(HasherConfig::default())
    }
}

impl Transformer for JobHasher {
    fn transform<D: Document>(&self, doc: &mut D) -> Result<Outcome, HasherError> {
        if doc.kind() != Some(self.config.kind.as_str()) {
            return Ok(self.skip(doc, SkipReason::WrongKind));
        }

        let opted_in = match doc.annotation(&self.config.annotation) {
            None => false,
            Some(value) => match parse_bool(&value) {
                Ok(flag) => flag,
                Err(_) if value.is_empty() => false,
                Err(_) => return Ok(self.skip(doc, SkipReason::InvalidOptIn(value))),
            },
        };
        if !opted_in {
            return Ok(self.skip(doc, SkipReason::NotOptedIn));
        }

        let name = doc.name();

        let spec = match doc.lookup(&self.config.field) {
            Ok(spec) => spec,
            Err(source) => {
                let error = HasherError::Extraction {
                    source,
                    document: doc.dump(),
                };
                return Err(self.fail(&name, error));
            }
        };

        let bytes = match D::canonical_bytes(spec) {
            Ok(bytes) => bytes,
            Err(source) => {
                let error = HasherError::Serialization {
                    source: Box::new(source),
                    document: doc.dump(),
                };
                return Err(self.fail(&name, error));
            }
        };

        let hash = short_hash(&bytes, self.config.effective_suffix_length());
        let renamed = format!("{name}-{hash}");
        doc.set_name(&renamed);

        DocumentRenamed {
            from: &name,
            to: &renamed,
        }
        .log();

        Ok(Outcome::Renamed {
            from: name,
            to: renamed,
        })
    }

    fn name(&self) -> &'static str {
        "job_hasher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::YamlDocument;
    use crate::utils::content_hash;

    fn doc(text: &str) -> YamlDocument {
        YamlDocument::parse(text).unwrap()
    }

    fn job(annotation: &str, spec: &str) -> YamlDocument {
        doc(&format!(
            "apiVersion: batch/v1\nkind: Job\nmetadata:\n  name: build\n  annotations:\n    job-hasher: {annotation}\n{spec}"
        ))
    }

    #[test]
    fn test_concrete_example() {
        let mut d = job("\"true\"", "spec:\n  image: x\n");
        let outcome = JobHasher::default().transform(&mut d).unwrap();

        let expected = format!("build-{}", &content_hash(br#"{"image":"x"}"#)[..10]);
        assert_eq!(expected, "build-ae2690ffaf");
        assert_eq!(d.name(), expected);
        assert_eq!(
            outcome,
            Outcome::Renamed {
                from: "build".to_string(),
                to: expected,
            }
        );
    }

    #[test]
    fn test_non_job_untouched() {
        for kind in ["Deployment", "job", "JOB", "Jobs", "CronJob"] {
            let text = format!(
                "kind: {kind}\nmetadata:\n  name: build\n  annotations:\n    job-hasher: \"true\"\nspec:\n  image: x\n"
            );
            let mut d = doc(&text);
            let before = d.clone();

            let outcome = JobHasher::default().transform(&mut d).unwrap();
            assert_eq!(outcome, Outcome::Skipped(SkipReason::WrongKind), "kind {kind}");
            assert_eq!(d, before);
            assert_eq!(d.dump(), before.dump());
        }
    }

    #[test]
    fn test_missing_kind_untouched() {
        let mut d = doc("metadata:\n  name: build\nspec:\n  image: x\n");
        let outcome = JobHasher::default().transform(&mut d).unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::WrongKind));
        assert_eq!(d.name(), "build");
    }

    #[test]
    fn test_opted_out_job_untouched() {
        for annotation in ["\"false\"", "\"0\"", "\"F\"", "\"\"", "false"] {
            let mut d = job(annotation, "spec:\n  image: x\n");
            let outcome = JobHasher::default().transform(&mut d).unwrap();
            assert_eq!(outcome, Outcome::Skipped(SkipReason::NotOptedIn), "{annotation}");
            assert_eq!(d.name(), "build");
        }
    }

    #[test]
    fn test_missing_annotation_untouched() {
        let mut d = doc("kind: Job\nmetadata:\n  name: build\nspec:\n  image: x\n");
        let outcome = JobHasher::default().transform(&mut d).unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::NotOptedIn));
        assert_eq!(d.name(), "build");
    }

    #[test]
    fn test_unparsable_annotation_untouched() {
        for annotation in ["\"yes\"", "\"on\"", "\"tRuE\"", "\" true\""] {
            let mut d = job(annotation, "spec:\n  image: x\n");
            let outcome = JobHasher::default().transform(&mut d).unwrap();
            assert!(
                matches!(outcome, Outcome::Skipped(SkipReason::InvalidOptIn(_))),
                "{annotation}"
            );
            assert_eq!(d.name(), "build");
        }
    }

    #[test]
    fn test_truthy_annotations_rename() {
        for annotation in ["\"1\"", "\"t\"", "\"T\"", "\"TRUE\"", "\"True\"", "true", "1"] {
            let mut d = job(annotation, "spec:\n  image: x\n");
            let outcome = JobHasher::default().transform(&mut d).unwrap();
            assert!(outcome.is_renamed(), "{annotation}");
            assert_eq!(d.name(), "build-ae2690ffaf");
        }
    }

    #[test]
    fn test_identical_specs_identical_suffix() {
        let mut a = job("\"true\"", "spec:\n  image: x\n  args: [a, b]\n");
        let mut b = job("\"true\"", "spec:\n  image: x\n  args: [a, b]\n");
        let hasher = JobHasher::default();
        hasher.transform(&mut a).unwrap();
        hasher.transform(&mut b).unwrap();
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_spec_change_changes_suffix() {
        let hasher = JobHasher::default();
        let mut a = job("\"true\"", "spec:\n  image: x\n");
        let mut b = job("\"true\"", "spec:\n  image: y\n");
        hasher.transform(&mut a).unwrap();
        hasher.transform(&mut b).unwrap();
        assert_ne!(a.name(), b.name());
    }

    #[test]
    fn test_metadata_change_keeps_suffix() {
        let hasher = JobHasher::default();
        let mut a = job("\"true\"", "spec:\n  image: x\n");
        let mut b = doc(
            "kind: Job\nmetadata:\n  name: build\n  labels:\n    team: infra\n  annotations:\n    job-hasher: \"true\"\n    other: value\nspec:\n  image: x\n",
        );
        hasher.transform(&mut a).unwrap();
        hasher.transform(&mut b).unwrap();
        assert_eq!(a.name(), b.name());
    }

    #[test]
    fn test_reordered_spec_same_suffix() {
        let hasher = JobHasher::default();
        let mut a = job("\"true\"", "spec:\n  restart: Never\n  image: x\n");
        let mut b = job("\"true\"", "spec:\n  image: x\n  restart: Never\n");
        hasher.transform(&mut a).unwrap();
        hasher.transform(&mut b).unwrap();

        // sha256 of {"image":"x","restart":"Never"}
        assert_eq!(a.name(), "build-5651e3d170");
        assert_eq!(b.name(), "build-5651e3d170");
    }

    #[test]
    fn test_nested_spec_suffix() {
        let mut d = job(
            "\"true\"",
            "spec:\n  template:\n    spec:\n      restartPolicy: Never\n      containers:\n        - name: a\n          image: x\n  backoffLimit: 3\n",
        );
        JobHasher::default().transform(&mut d).unwrap();

        // sha256 of {"backoffLimit":3,"template":{"spec":{"containers":[{"image":"x","name":"a"}],"restartPolicy":"Never"}}}
        assert_eq!(d.name(), "build-03969f821c");
    }

    #[test]
    fn test_shell_command_suffix() {
        let mut d = job("\"true\"", "spec:\n  command: [sh, -c, \"a && b\"]\n");
        JobHasher::default().transform(&mut d).unwrap();

        // sha256 of {"command":["sh","-c","a \u0026\u0026 b"]}
        assert_eq!(d.name(), "build-2f642c5b6d");
    }

    #[test]
    fn test_integral_float_suffix() {
        let mut d = job("\"true\"", "spec:\n  replicas: 1.0\n  ratio: 0.5\n");
        JobHasher::default().transform(&mut d).unwrap();

        // sha256 of {"ratio":0.5,"replicas":1}
        assert_eq!(d.name(), "build-43ef81b0fc");
    }

    #[test]
    fn test_sequence_spec_suffix() {
        let mut d = job("\"true\"", "spec: [a, b]\n");
        JobHasher::default().transform(&mut d).unwrap();
        assert_eq!(d.name(), "build-0473ef2dc0");
    }

    #[test]
    fn test_null_spec_hashes_as_empty_object() {
        let mut d = job("\"true\"", "spec:\n");
        JobHasher::default().transform(&mut d).unwrap();
        assert_eq!(d.name(), "build-44136fa355");
    }

    #[test]
    fn test_scalar_spec_is_serialization_error() {
        let mut d = job("\"true\"", "spec: just-a-string\n");
        let err = JobHasher::default().transform(&mut d).unwrap_err();
        assert!(matches!(err, HasherError::Serialization { .. }));
        assert!(err.to_string().contains("name: build"));
        assert_eq!(d.name(), "build");
    }

    #[test]
    fn test_rerun_appends_second_suffix() {
        let hasher = JobHasher::default();
        let mut d = job("\"true\"", "spec:\n  image: x\n");
        hasher.transform(&mut d).unwrap();
        hasher.transform(&mut d).unwrap();
        assert_eq!(d.name(), "build-ae2690ffaf-ae2690ffaf");
    }

    #[test]
    fn test_missing_spec_is_extraction_error() {
        let mut d = job("\"true\"", "");
        let err = JobHasher::default().transform(&mut d).unwrap_err();
        match &err {
            HasherError::Extraction { source, document } => {
                assert_eq!(source.to_string(), "field 'spec' not found");
                assert!(document.contains("name: build"));
            }
            other => panic!("expected extraction error, got {other:?}"),
        }
        assert!(err.to_string().starts_with("field 'spec' not found: "));
        assert_eq!(d.name(), "build");
    }

    #[test]
    fn test_unserializable_spec_is_serialization_error() {
        let mut d = job("\"true\"", "spec:\n  ? [a, b]\n  : c\n");
        let err = JobHasher::default().transform(&mut d).unwrap_err();
        assert!(matches!(err, HasherError::Serialization { .. }));
        assert!(err.to_string().starts_with("failed to marshal spec for hashing: "));
        assert_eq!(d.name(), "build");
    }

    #[test]
    fn test_missing_name_gets_bare_suffix() {
        let mut d = doc("kind: Job\nmetadata:\n  annotations:\n    job-hasher: \"true\"\nspec:\n  image: x\n");
        JobHasher::default().transform(&mut d).unwrap();
        assert_eq!(d.name(), "-ae2690ffaf");
    }

    #[test]
    fn test_custom_config() {
        let config = HasherConfig {
            kind: "CronJob".to_string(),
            annotation: "example.com/hash".to_string(),
            field: "spec.jobTemplate".to_string(),
            suffix_length: 6,
        };
        let hasher = JobHasher::new(config);
        let mut d = doc(
            "kind: CronJob\nmetadata:\n  name: nightly\n  annotations:\n    example.com/hash: \"true\"\nspec:\n  schedule: \"@daily\"\n  jobTemplate:\n    image: x\n",
        );
        hasher.transform(&mut d).unwrap();
        assert_eq!(d.name(), "nightly-ae2690");
    }
}
