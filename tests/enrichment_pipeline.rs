//! Orchestrator behavior with stubbed providers: totality, tag precedence
//! and degradation to the rule-based classifier.

use dsa_log::metadata::fallback;
use dsa_log::metadata::infer::{InferenceError, MetadataInferenceService, parse_payload};
use dsa_log::metadata::lookup::CompanyTagSource;
use dsa_log::metadata::{MetadataEnricher, ProblemMetadata};

struct StubTags(Option<Vec<String>>);

impl CompanyTagSource for StubTags {
    fn company_tags(&self, _title: &str) -> Option<Vec<String>> {
        self.0.clone()
    }
}

/// Mirrors the real adapter contract: a canned body goes through the same
/// payload parsing; no body simulates an upstream outage.
struct StubInference(Option<String>);

impl MetadataInferenceService for StubInference {
    fn infer(
        &self,
        _title: &str,
        known_tags: Option<&[String]>,
    ) -> Result<ProblemMetadata, InferenceError> {
        match &self.0 {
            Some(body) => parse_payload(body, known_tags),
            None => Err(InferenceError::Upstream("connection refused".to_string())),
        }
    }
}

fn enricher(tags: Option<Vec<String>>, body: Option<&str>) -> MetadataEnricher {
    MetadataEnricher::new(
        Box::new(StubTags(tags)),
        Box::new(StubInference(body.map(str::to_string))),
    )
}

const GOOD_BODY: &str = r#"{"topic": "Greedy", "logic": "Scan once keeping the best",
    "time": "O(n)", "space": "O(1)", "company": "ModelGuess"}"#;

#[test]
fn success_path_returns_the_parsed_metadata() {
    let meta = enricher(None, Some(GOOD_BODY)).generate_metadata("Gas Station");
    assert_eq!(meta.topic, "Greedy");
    assert_eq!(meta.logic, "Scan once keeping the best");
    assert_eq!(meta.company_tags, "ModelGuess");
}

#[test]
fn scraped_tags_outrank_the_model_on_success() {
    let tags = vec!["Amazon".to_string(), "Google".to_string()];
    let meta = enricher(Some(tags), Some(GOOD_BODY)).generate_metadata("Gas Station");
    assert_eq!(meta.company_tags, "Amazon, Google");
}

#[test]
fn upstream_failure_degrades_to_the_classifier() {
    let title = "Invert Binary Tree";
    let meta = enricher(None, None).generate_metadata(title);
    assert_eq!(meta, fallback::classify(title));
}

#[test]
fn scraped_tags_outrank_the_classifier_on_fallback() {
    let title = "Invert Binary Tree";
    let meta = enricher(Some(vec!["Uber".to_string()]), None).generate_metadata(title);

    let mut expected = fallback::classify(title);
    expected.company_tags = "Uber".to_string();
    assert_eq!(meta, expected);
}

#[test]
fn unparseable_body_degrades_to_the_classifier() {
    let title = "Course Schedule";
    let meta = enricher(None, Some("I could not find that problem.")).generate_metadata(title);
    assert_eq!(meta, fallback::classify(title));
}

#[test]
fn every_field_is_populated_on_every_path() {
    let cases = [
        enricher(None, Some(GOOD_BODY)),
        enricher(Some(vec!["Adobe".to_string()]), Some(GOOD_BODY)),
        enricher(None, None),
        enricher(Some(vec!["Adobe".to_string()]), None),
        enricher(None, Some("not json")),
    ];
    for pipeline in cases {
        let meta = pipeline.generate_metadata("Median of Two Sorted Arrays");
        for field in [
            &meta.topic,
            &meta.logic,
            &meta.time_complexity,
            &meta.space_complexity,
            &meta.company_tags,
        ] {
            assert!(!field.trim().is_empty(), "field left empty: {:?}", meta);
        }
    }
}
