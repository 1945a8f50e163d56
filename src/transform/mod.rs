//! Transforms - pure functions from payloads to display-ready values

mod aggregate;
mod classify;
mod format;

pub use aggregate::{competitor_average, summary_priorities, table_priorities};
pub use classify::{
    dimension_label, dimension_name, dimension_title, priority_dimension, question_dimension,
    question_dimension_of, question_number, sort_questions, GENERIC_QUESTION_LABEL, NAC_QUESTIONS,
    NFC_QUESTIONS, NOC_QUESTIONS,
};
pub use format::{fmt_score, fmt_signed, fmt_thousands, MISSING};
