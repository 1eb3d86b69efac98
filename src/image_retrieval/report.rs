//! Query reporting: class labels and percent-correct summaries.
//!
//! Reference and query images follow a grouped naming convention: each file
//! name embeds a 1-based image number, and images are grouped into classes
//! of ten (1-10 form one class, 11-20 the next, and so on).

use std::fmt;

use crate::image_retrieval::similarity::{RankedResult, ScoredCandidate};

/// Extracts the class label from an identifier.
///
/// The first run of ASCII digits in the identifier is read as the image
/// number N; the label is `(N - 1) / 10`, which places every multiple of
/// ten in the preceding group. Returns `None` when the identifier embeds no
/// number.
pub fn class_label(identifier: &str) -> Option<u32> {
    let digits: String = identifier
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    let number: u32 = digits.parse().ok()?;
    Some(number.saturating_sub(1) / 10)
}

/// Percent-correct summary for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSummary {
    /// Metric name as shown in the report.
    pub metric: &'static str,
    /// The ranked candidates the summary was computed over.
    pub matches: Vec<ScoredCandidate>,
    /// Candidates sharing the query's class label.
    pub hits: usize,
    /// Integer percentage of hits, rounded down.
    pub percent: u32,
}

/// Report for a single query image.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryReport {
    pub query: String,
    pub color: MetricSummary,
    pub texture: MetricSummary,
    pub combined: MetricSummary,
}

/// Builds the per-metric summaries for one query.
pub fn build_report(query: &str, result: &RankedResult) -> QueryReport {
    QueryReport {
        query: query.to_string(),
        color: summarize("color", query, &result.color),
        texture: summarize("texture", query, &result.texture),
        combined: summarize("color+texture", query, &result.combined),
    }
}

fn summarize(metric: &'static str, query: &str, matches: &[ScoredCandidate]) -> MetricSummary {
    let query_label = class_label(query);
    let hits = matches
        .iter()
        .filter(|candidate| {
            query_label.is_some() && class_label(&candidate.identifier) == query_label
        })
        .count();
    let percent = if matches.is_empty() {
        0
    } else {
        (100 * hits as u32) / matches.len() as u32
    };

    MetricSummary {
        metric,
        matches: matches.to_vec(),
        hits,
        percent,
    }
}

impl fmt::Display for QueryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Query image : {}", self.query)?;
        for summary in [&self.color, &self.texture, &self.combined] {
            writeln!(f, "{} compare", summary.metric.to_uppercase())?;
            for (position, candidate) in summary.matches.iter().enumerate() {
                writeln!(
                    f,
                    "  {}. {} (distance {:.4})",
                    position + 1,
                    candidate.identifier,
                    candidate.score
                )?;
            }
            writeln!(
                f,
                "  {} success : {}%",
                summary.metric.to_uppercase(),
                summary.percent
            )?;
        }
        Ok(())
    }
}
