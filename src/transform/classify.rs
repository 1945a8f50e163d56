//! Static lookup tables for dimensions and questions

use crate::api::Dimension;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Organização Didático-Pedagógica
pub const NOC_QUESTIONS: &[&str] = &[
    "Q27", "Q29", "Q30", "Q31", "Q33", "Q34", "Q35", "Q36", "Q37", "Q38", "Q42", "Q49", "Q56",
];

/// Infraestrutura e Instalações Físicas
pub const NFC_QUESTIONS: &[&str] = &[
    "Q55", "Q58", "Q59", "Q60", "Q61", "Q62", "Q63", "Q64", "Q65", "Q66", "Q68",
];

/// Oportunidades de Ampliação da Formação
pub const NAC_QUESTIONS: &[&str] = &["Q43", "Q44", "Q45", "Q46", "Q47", "Q52", "Q53", "Q67"];

/// Label for questions outside every table
pub const GENERIC_QUESTION_LABEL: &str = "Questão";

/// Short chart label of a dimension
pub fn dimension_label(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Noc => "Organização Didático-Pedagógica",
        Dimension::Nfc => "Infraestrutura e Instalações",
        Dimension::Nac => "Oportunidades de Ampliação",
        Dimension::Geral => "Média Geral",
    }
}

/// Human-readable name for a dimension code; unknown codes pass through
pub fn dimension_name(code: &str) -> Cow<'_, str> {
    match Dimension::from_code(code) {
        Some(dimension) => Cow::Borrowed(dimension_label(dimension)),
        None => Cow::Borrowed(code),
    }
}

/// Dimension a question belongs to, if any
pub fn question_dimension_of(question: &str) -> Option<Dimension> {
    if NOC_QUESTIONS.contains(&question) {
        Some(Dimension::Noc)
    } else if NFC_QUESTIONS.contains(&question) {
        Some(Dimension::Nfc)
    } else if NAC_QUESTIONS.contains(&question) {
        Some(Dimension::Nac)
    } else {
        None
    }
}

/// Full dimension title, used wherever a question is labeled
pub fn dimension_title(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Noc => "Organização Didático-Pedagógica",
        Dimension::Nfc => "Infraestrutura e Instalações Físicas",
        Dimension::Nac => "Oportunidades de Ampliação da Formação",
        Dimension::Geral => "Média Geral",
    }
}

/// Full dimension title shown next to a question
pub fn question_dimension(question: &str) -> &'static str {
    match question_dimension_of(question) {
        Some(dimension) => dimension_title(dimension),
        None => GENERIC_QUESTION_LABEL,
    }
}

/// Dimension column of a priority: the backend code when given, else the
/// question's table. Both paths use the full titles.
pub fn priority_dimension<'a>(code: &'a str, question: &str) -> Cow<'a, str> {
    if code.is_empty() {
        return Cow::Borrowed(question_dimension(question));
    }
    match Dimension::from_code(code) {
        Some(dimension) => Cow::Borrowed(dimension_title(dimension)),
        None => Cow::Borrowed(code),
    }
}

fn question_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^Q(\d{1,3})$").expect("static regex"))
}

/// Numeric part of a `Q<n>` question id
pub fn question_number(question: &str) -> Option<u32> {
    question_id_regex()
        .captures(question)
        .and_then(|cap| cap[1].parse().ok())
}

/// Sort question ids by number; malformed ids go last in lexical order
pub fn sort_questions(questions: &mut [String]) {
    questions.sort_by(|a, b| match (question_number(a), question_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.cmp(b),
    });
}
