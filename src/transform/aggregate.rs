//! Aggregations performed client-side on already-aggregated payloads

use crate::api::{Dimension, InstitutionalComparison, QuestionPriority, DimensionScore};

/// Mean score per dimension across every institution except `subject`.
///
/// Only strictly positive scores count: a zero or missing score is left out
/// of both the sum and the divisor. A dimension nobody scored stays `None`.
pub fn competitor_average(comparison: &InstitutionalComparison, subject: &str) -> DimensionScore {
    let mut average = DimensionScore::default();

    for dimension in Dimension::ALL {
        let (sum, count) = comparison
            .iter()
            .filter(|(institution, _)| institution.as_str() != subject)
            .filter_map(|(_, scores)| scores.get(dimension))
            .filter(|score| *score > 0.0)
            .fold((0.0, 0usize), |(sum, count), score| (sum + score, count + 1));

        if count > 0 {
            average.set(dimension, Some(sum / count as f64));
        }
    }

    average
}

/// Head of the backend-ordered priority list for the summary view
pub fn summary_priorities(priorities: &[QuestionPriority], limit: usize) -> &[QuestionPriority] {
    &priorities[..priorities.len().min(limit)]
}

/// Head of the backend-ordered priority list for the detail table
pub fn table_priorities(priorities: &[QuestionPriority], limit: usize) -> &[QuestionPriority] {
    &priorities[..priorities.len().min(limit)]
}
