use crate::config::HasherConfig;
use crate::document::{Document, YamlDocument};
use crate::engine::{run_pipeline, run_stream};
use crate::errors::{HasherError, StreamError};
use crate::processors::JobHasher;
use crate::traits::{Outcome, SkipReason};

/// End-to-end passes of the job hasher over document sequences
#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<YamlDocument> {
        texts.iter().map(|t| YamlDocument::parse(t).unwrap()).collect()
    }

    const OPTED_IN: &str =
        "kind: Job\nmetadata:\n  name: build\n  annotations:\n    job-hasher: \"true\"\nspec:\n  image: x\n";
    const OPTED_OUT: &str =
        "kind: Job\nmetadata:\n  name: lint\n  annotations:\n    job-hasher: \"false\"\nspec:\n  image: x\n";
    const SERVICE: &str = "kind: Service\nmetadata:\n  name: web\n  annotations:\n    job-hasher: \"true\"\n";
    const NO_SPEC: &str = "kind: Job\nmetadata:\n  name: broken\n  annotations:\n    job-hasher: \"true\"\n";

    #[test]
    fn test_pipeline_preserves_order_and_outcomes() {
        let mut documents = docs(&[SERVICE, OPTED_IN, OPTED_OUT]);
        let report = run_pipeline(&JobHasher::default(), &mut documents).unwrap();

        assert_eq!(report.outcomes.len(), 3);
        assert_eq!(report.outcomes[0], Outcome::Skipped(SkipReason::WrongKind));
        assert!(report.outcomes[1].is_renamed());
        assert_eq!(report.outcomes[2], Outcome::Skipped(SkipReason::NotOptedIn));
        assert_eq!(report.renamed_count(), 1);

        let names: Vec<String> = documents.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["web", "build-ae2690ffaf", "lint"]);
    }

    #[test]
    fn test_pipeline_stops_at_first_error() {
        let mut documents = docs(&[OPTED_IN, NO_SPEC, OPTED_IN]);
        let err = run_pipeline(&JobHasher::default(), &mut documents).unwrap_err();

        assert!(matches!(err, HasherError::Extraction { .. }));
        assert_eq!(documents[0].name(), "build-ae2690ffaf");
        assert_eq!(documents[1].name(), "broken");
        // Later documents are never visited
        assert_eq!(documents[2].name(), "build");
    }

    #[test]
    fn test_empty_sequence() {
        let mut documents: Vec<YamlDocument> = Vec::new();
        let report = run_pipeline(&JobHasher::default(), &mut documents).unwrap();
        assert!(report.outcomes.is_empty());
    }

    #[test]
    fn test_stream_resource_list() {
        let input = r#"
apiVersion: config.kubernetes.io/v1
kind: ResourceList
items:
  - apiVersion: batch/v1
    kind: Job
    metadata:
      name: build
      annotations:
        job-hasher: "true"
    spec:
      image: x
  - apiVersion: v1
    kind: Service
    metadata:
      name: web
"#;
        let output = run_stream(&JobHasher::default(), input).unwrap();
        let reparsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(reparsed["kind"], serde_yaml::Value::from("ResourceList"));
        assert_eq!(
            reparsed["items"][0]["metadata"]["name"],
            serde_yaml::Value::from("build-ae2690ffaf")
        );
        assert_eq!(reparsed["items"][1]["metadata"]["name"], serde_yaml::Value::from("web"));
    }

    #[test]
    fn test_stream_multi_document() {
        let input = format!("{OPTED_IN}---\n{SERVICE}");
        let output = run_stream(&JobHasher::default(), &input).unwrap();
        assert!(output.contains("name: build-ae2690ffaf"));
        assert!(output.contains("name: web"));
        assert_eq!(output.matches("---").count(), 1);
    }

    #[test]
    fn test_stream_error_produces_no_output() {
        let input = format!("{OPTED_IN}---\n{NO_SPEC}---\n{SERVICE}");
        let result = run_stream(&JobHasher::default(), &input);
        match result {
            Err(StreamError::Transform(HasherError::Extraction { document, .. })) => {
                assert!(document.contains("name: broken"));
            }
            other => panic!("expected extraction failure, got {other:?}"),
        }
    }

    #[test]
    fn test_stream_with_custom_config() {
        let config = HasherConfig {
            suffix_length: 4,
            ..HasherConfig::default()
        };
        let output = run_stream(&JobHasher::new(config), OPTED_IN).unwrap();
        assert!(output.contains("name: build-ae26\n"));
    }
}
