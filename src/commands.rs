//! One-shot commands: text report, area list, metadata and course detail

use crate::api::{ApiClient, Areas, CourseDetail, Dimension, InstitutionLevel, Metadata};
use crate::config::Config;
use crate::loader::{fetch, Request};
use crate::render::{begin_selection, present, text::render_report};
use crate::state::AppState;
use crate::transform::{
    dimension_label, dimension_name, fmt_score, fmt_thousands, question_dimension, sort_questions,
};
use crate::Result;
use std::fmt::Write;

/// Fetch every widget of a selection once and render it as text.
///
/// Failed requests show up as placeholders in the output; only client
/// construction errors are returned.
pub async fn report(config: &Config, area: Option<&str>) -> Result<String> {
    let client = ApiClient::new(config)?;
    let mut state = AppState::new();
    begin_selection(&mut state, area);

    let requests = report_requests(area);

    for request in &requests {
        let result = fetch(&client, request).await;
        present(&mut state, config, request, result);
    }

    Ok(render_report(&state))
}

/// Requests behind a report. An area report also loads the aggregate first
/// so every widget is filled; the area comparison then overwrites its chart
/// and the detail table.
fn report_requests(area: Option<&str>) -> Vec<Request> {
    let mut requests = vec![Request::Areas];
    if area.is_some() {
        requests.push(Request::Dashboard);
    }
    requests.extend(Request::for_selection(area));
    requests
}

pub fn format_areas(areas: &Areas, all: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Áreas UNIFOR ({}):", areas.unifor_areas.len());
    for area in &areas.unifor_areas {
        let _ = writeln!(out, "  {}", area);
    }
    if all {
        let _ = writeln!(out, "Todas as áreas ({}):", areas.all_areas.len());
        for area in &areas.all_areas {
            let _ = writeln!(out, "  {}", area);
        }
    }
    out
}

pub fn format_metadata(metadata: &Metadata) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Cursos avaliados: {}", fmt_thousands(metadata.total_courses));
    let _ = writeln!(out, "Cursos UNIFOR: {}", fmt_thousands(metadata.unifor_courses));
    let _ = writeln!(out, "Áreas: {}", metadata.course_areas.len());
    let _ = writeln!(out, "Áreas UNIFOR: {}", metadata.unifor_areas.len());

    for (code, info) in &metadata.dimensions {
        let mut questions = info.questions.clone();
        sort_questions(&mut questions);
        let name = if info.name.is_empty() {
            dimension_name(code).into_owned()
        } else {
            info.name.clone()
        };
        let _ = writeln!(out, "{} - {}", code, name);
        let _ = writeln!(out, "  {}", questions.join(", "));
    }
    out
}

/// Course record with every question classified by dimension
pub fn format_course(detail: &CourseDetail) -> String {
    let course = &detail.course;
    let mut out = String::new();
    let _ = writeln!(out, "{}", course.area);
    if let Some(code) = course.codigo {
        let _ = writeln!(out, "Código: {}", code);
    }
    let _ = writeln!(out, "Participantes: {}", fmt_score(course.participantes, 0));
    let _ = writeln!(
        out,
        "Participação: {}%",
        fmt_score(course.percentual_participacao, 1)
    );
    let _ = writeln!(out, "Média geral: {}", fmt_score(course.media_geral, 2));

    let _ = writeln!(out, "\nDimensões");
    for dimension in Dimension::ALL {
        let _ = writeln!(
            out,
            "  {:<34} {}",
            dimension_label(dimension),
            fmt_score(course.scores.get(dimension), 2)
        );
    }

    let _ = writeln!(out, "\nComparação ({})", Dimension::Geral.code());
    for level in InstitutionLevel::ALL {
        let _ = writeln!(
            out,
            "  {:<10} {}",
            level.code(),
            fmt_score(detail.comparison.get(level).geral, 2)
        );
    }

    let mut questions: Vec<String> = course.questions.keys().cloned().collect();
    sort_questions(&mut questions);
    let _ = writeln!(out, "\nQuestões");
    for question in &questions {
        let score = course.questions.get(question).copied();
        let _ = writeln!(
            out,
            "  {:<5} {:>5}  {}",
            question,
            fmt_score(score, 2),
            question_dimension(question)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{DimensionInfo, UniforCourse};
    use std::collections::BTreeMap;

    #[test]
    fn test_area_report_loads_aggregate_before_comparison() {
        let requests = report_requests(Some("DIREITO"));
        let dashboard = requests.iter().position(|r| *r == Request::Dashboard).unwrap();
        let comparison = requests
            .iter()
            .position(|r| *r == Request::Comparisons("DIREITO".to_string()))
            .unwrap();
        assert!(dashboard < comparison);

        let overview = report_requests(None);
        assert_eq!(overview.iter().filter(|r| **r == Request::Dashboard).count(), 1);
    }

    #[test]
    fn test_format_areas_all_flag() {
        let areas = Areas {
            all_areas: vec!["DIREITO".to_string(), "MEDICINA".to_string()],
            unifor_areas: vec!["DIREITO".to_string()],
        };
        let short = format_areas(&areas, false);
        assert!(short.contains("Áreas UNIFOR (1)"));
        assert!(!short.contains("MEDICINA"));
        assert!(format_areas(&areas, true).contains("MEDICINA"));
    }

    #[test]
    fn test_format_metadata_sorts_questions() {
        let mut dimensions = BTreeMap::new();
        dimensions.insert(
            "NOC".to_string(),
            DimensionInfo {
                name: String::new(),
                questions: vec!["Q10".to_string(), "Q2".to_string()],
            },
        );
        let metadata = Metadata {
            total_courses: 8571,
            dimensions,
            ..Metadata::default()
        };

        let out = format_metadata(&metadata);
        assert!(out.contains("Cursos avaliados: 8.571"));
        assert!(out.contains("NOC - Organização Didático-Pedagógica"));
        assert!(out.contains("Q2, Q10"));
    }

    #[test]
    fn test_format_course_classifies_questions() {
        let mut questions = BTreeMap::new();
        questions.insert("Q55".to_string(), 4.1);
        questions.insert("Q3".to_string(), 4.8);
        let detail = CourseDetail {
            course: UniforCourse {
                area: "DIREITO".to_string(),
                media_geral: Some(4.25),
                questions,
                ..UniforCourse::default()
            },
            ..CourseDetail::default()
        };

        let out = format_course(&detail);
        assert!(out.contains("Média geral: 4.25"));
        assert!(out.contains("Participantes: N/A"));
        let q3 = out.find("Q3 ").unwrap();
        let q55 = out.find("Q55").unwrap();
        assert!(q3 < q55);
        assert!(out.contains("Infraestrutura e Instalações Físicas"));
    }
}
