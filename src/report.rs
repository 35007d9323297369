//! Progress reporting: CSV export, per-topic/day/month breakdowns and
//! progress against a target count or date.

use crate::error::{DsaLogError, Result};
use crate::storage::{DATE_FMT, ProblemLog};
use chrono::{Datelike, NaiveDate};
use prettytable::{Table, row};
use std::collections::BTreeMap;
use std::path::Path;

/// Export the full log as CSV.
pub fn write_csv(entries: &[ProblemLog], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| DsaLogError::Report {
            message: format!("failed to create {}: {}", parent.display(), e),
        })?;
    }
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "id",
        "title",
        "difficulty",
        "platform",
        "date",
        "tags",
        "topic",
        "logic",
        "time_complexity",
        "space_complexity",
        "company_tags",
    ])?;
    for e in entries {
        writer.write_record([
            e.id.to_string().as_str(),
            &e.title,
            &e.difficulty.to_string(),
            &e.platform,
            &e.date.format(DATE_FMT).to_string(),
            &e.tags,
            &e.metadata.topic,
            &e.metadata.logic,
            &e.metadata.time_complexity,
            &e.metadata.space_complexity,
            &e.metadata.company_tags,
        ])?;
    }
    writer.flush().map_err(|e| DsaLogError::Report {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Solved-problem counts per topic, most common first.
pub fn topic_breakdown(entries: &[ProblemLog]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for e in entries {
        *counts.entry(e.metadata.topic.as_str()).or_default() += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(topic, n)| (topic.to_string(), n))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// Problems solved per day.
pub fn daily_counts(entries: &[ProblemLog]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for e in entries {
        *counts.entry(e.date).or_default() += 1;
    }
    counts
}

/// Problems solved per calendar month, keyed `YYYY-MM`.
pub fn monthly_counts(entries: &[ProblemLog]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for e in entries {
        let key = format!("{:04}-{:02}", e.date.year(), e.date.month());
        *counts.entry(key).or_default() += 1;
    }
    counts
}

/// Progress against an optional problem-count target and deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSummary {
    pub solved: usize,
    /// Problems still to solve to hit the count target
    pub remaining: Option<u64>,
    /// Days until the target date; negative when it has passed
    pub days_left: Option<i64>,
}

impl TargetSummary {
    pub fn compute(
        solved: usize,
        target_count: Option<u64>,
        target_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Self {
        Self {
            solved,
            remaining: target_count.map(|t| t.saturating_sub(solved as u64)),
            days_left: target_date.map(|d| (d - today).num_days()),
        }
    }
}

/// Print the report tables to the terminal.
pub fn render_report(entries: &[ProblemLog], summary: &TargetSummary) {
    let mut topics = Table::new();
    topics.add_row(row!["Topic", "Solved"]);
    for (topic, count) in topic_breakdown(entries) {
        topics.add_row(row![topic, count]);
    }
    println!("Topic breakdown:");
    topics.printstd();

    let mut daily = Table::new();
    daily.add_row(row!["Day", "Solved"]);
    for (day, count) in daily_counts(entries) {
        daily.add_row(row![day.format(DATE_FMT), count]);
    }
    println!("Daily stats:");
    daily.printstd();

    let mut monthly = Table::new();
    monthly.add_row(row!["Month", "Solved"]);
    for (month, count) in monthly_counts(entries) {
        monthly.add_row(row![month, count]);
    }
    println!("Monthly stats:");
    monthly.printstd();

    println!("Problems solved: {}", summary.solved);
    if let Some(remaining) = summary.remaining {
        println!("Problems left to reach target: {}", remaining);
    }
    if let Some(days) = summary.days_left {
        println!("Days left until target date: {}", days);
    }
}

/// Print log entries as a table (used by `list` and `search`).
pub fn render_entries(entries: &[ProblemLog]) {
    let mut table = Table::new();
    table.add_row(row![
        "ID", "Title", "Difficulty", "Platform", "Date", "Tags", "Topic", "Time", "Space",
        "Companies"
    ]);
    for e in entries {
        table.add_row(row![
            e.id,
            e.title,
            e.difficulty,
            e.platform,
            e.date.format(DATE_FMT),
            e.tags,
            e.metadata.topic,
            e.metadata.time_complexity,
            e.metadata.space_complexity,
            e.metadata.company_tags,
        ]);
    }
    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_math_saturates_at_zero() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let summary = TargetSummary::compute(12, Some(10), None, today);
        assert_eq!(summary.remaining, Some(0));
        assert_eq!(summary.days_left, None);
    }

    #[test]
    fn days_left_can_go_negative() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let deadline = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let summary = TargetSummary::compute(0, None, Some(deadline), today);
        assert_eq!(summary.days_left, Some(-9));
    }
}
