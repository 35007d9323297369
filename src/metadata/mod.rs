//! Metadata enrichment pipeline for logged problems.
//!
//! Three tiers in decreasing accuracy and increasing availability: scraped
//! company tags, generative inference, rule-based classification. The
//! orchestrator always returns a complete record — enrichment failures are
//! logged, never surfaced to the caller.

pub mod fallback;
pub mod infer;
pub mod lookup;

use crate::config::Config;
use infer::{MetadataInferenceService, OpenAiInference};
use lookup::{CompanyTagSource, GfgCompanyTags};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Classification metadata attached to every logged problem. All five
/// fields are always present and trimmed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemMetadata {
    pub topic: String,
    pub logic: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub company_tags: String,
}

/// Orchestrates the three enrichment tiers behind one total operation.
pub struct MetadataEnricher {
    tags: Box<dyn CompanyTagSource>,
    inference: Box<dyn MetadataInferenceService>,
}

impl MetadataEnricher {
    pub fn new(
        tags: Box<dyn CompanyTagSource>,
        inference: Box<dyn MetadataInferenceService>,
    ) -> Self {
        Self { tags, inference }
    }

    /// Wire up the real scrape + completion providers from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            Box::new(GfgCompanyTags::new(config)?),
            Box::new(OpenAiInference::new(config)?),
        ))
    }

    /// Produce metadata for a title. Total: every failure path ends in the
    /// rule-based classifier, with scraped company tags overlaid when the
    /// lookup succeeded.
    pub fn generate_metadata(&self, title: &str) -> ProblemMetadata {
        let known_tags = self.tags.company_tags(title);

        match self.inference.infer(title, known_tags.as_deref()) {
            Ok(meta) => meta,
            Err(e) => {
                warn!("inference failed, using rule-based classification: {}", e);
                let mut meta = fallback::classify(title);
                if let Some(tags) = known_tags.filter(|t| !t.is_empty()) {
                    meta.company_tags = tags.join(", ");
                }
                meta
            }
        }
    }
}
