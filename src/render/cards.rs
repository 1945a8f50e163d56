//! Card-list builders: summary stats, priority list, extremes

use super::spec::{ExtremeCard, PriorityCard, SummaryStat, Tone};
use crate::api::{ExtremesResult, QuestionPriority, Summary};
use crate::transform::{
    fmt_score, fmt_signed, fmt_thousands, priority_dimension, question_dimension,
};

pub fn summary_stats(summary: &Summary) -> Vec<SummaryStat> {
    vec![
        SummaryStat {
            value: fmt_thousands(summary.total_courses),
            label: "Total de Cursos".to_string(),
        },
        SummaryStat {
            value: summary.unifor_courses.to_string(),
            label: "Cursos UNIFOR".to_string(),
        },
        SummaryStat {
            value: summary.unifor_areas.to_string(),
            label: "Áreas UNIFOR".to_string(),
        },
    ]
}

/// Short list of priorities, already truncated by the caller
pub fn priority_cards(priorities: &[QuestionPriority]) -> Vec<PriorityCard> {
    priorities
        .iter()
        .enumerate()
        .map(|(idx, p)| PriorityCard {
            rank: idx + 1,
            question: p.question.clone(),
            dimension: priority_dimension(&p.dimension, &p.question).into_owned(),
            score: fmt_score(Some(p.unifor_score), 3),
            gap: fmt_signed(p.gap(), 3),
            tone: Tone::of_difference(p.gap()),
        })
        .collect()
}

fn format_entries(entries: &[(String, f64)]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|(institution, score)| (institution.clone(), format!("{:.2}", score)))
        .collect()
}

/// Cards for highlighted questions present on both sides, in highlight order
pub fn extreme_cards(extremes: &ExtremesResult, highlighted: &[String]) -> Vec<ExtremeCard> {
    highlighted
        .iter()
        .filter_map(|question| {
            let lowest = extremes.menores.get(question)?;
            let highest = extremes.maiores.get(question)?;
            Some(ExtremeCard {
                question: question.clone(),
                dimension: question_dimension(question),
                lowest: format_entries(lowest),
                highest: format_entries(highest),
            })
        })
        .collect()
}
