//! Rule-based classifier: the terminal tier of the enrichment pipeline.
//!
//! Pure keyword matching over the title, no I/O, cannot fail. The rule table
//! is deliberately coarse — it only has to produce something usable when both
//! the scrape and the completion service are unavailable.

use crate::metadata::ProblemMetadata;

struct Rule {
    keywords: &'static [&'static str],
    topic: &'static str,
    logic: &'static str,
    time: &'static str,
    space: &'static str,
    companies: &'static str,
}

// Priority order matters: the first rule with a keyword hit wins.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["stock", "buy"],
        topic: "Greedy",
        logic: "Track min price and max profit",
        time: "O(n)",
        space: "O(1)",
        companies: "Amazon, Google",
    },
    Rule {
        keywords: &["tree"],
        topic: "Binary Tree",
        logic: "Use DFS or BFS traversal",
        time: "O(n)",
        space: "O(h)",
        companies: "Facebook, Microsoft",
    },
    Rule {
        keywords: &["matrix"],
        topic: "Matrix Traversal",
        logic: "Use nested loops or DFS/BFS",
        time: "O(m*n)",
        space: "O(1)",
        companies: "Google, Adobe",
    },
];

/// Classify a problem title into canned metadata. Matching is
/// case-insensitive; titles with no keyword hit get the generic template.
pub fn classify(title: &str) -> ProblemMetadata {
    let title = title.to_lowercase();
    for rule in RULES {
        if rule.keywords.iter().any(|kw| title.contains(kw)) {
            return ProblemMetadata {
                topic: rule.topic.to_string(),
                logic: rule.logic.to_string(),
                time_complexity: rule.time.to_string(),
                space_complexity: rule.space.to_string(),
                company_tags: rule.companies.to_string(),
            };
        }
    }
    ProblemMetadata {
        topic: "General DSA".to_string(),
        logic: "Based on problem statement".to_string(),
        time_complexity: "Varies".to_string(),
        space_complexity: "Varies".to_string(),
        company_tags: "Various".to_string(),
    }
}
