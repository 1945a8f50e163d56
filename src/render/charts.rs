//! Chart builders - payloads to chart specs
//!
//! Missing scores become 0 in chart data.

use super::spec::{ChartKind, ChartSpec, Dataset};
use crate::api::{CourseRecord, Dimension, InstitutionLevel, LevelComparison, SCORE_MAX};
use crate::transform::dimension_label;
use ratatui::style::Color;

const LEVEL_COLORS: [Color; 4] = [
    Color::Rgb(0x66, 0x7e, 0xea),
    Color::Rgb(0x76, 0x4b, 0xa2),
    Color::Rgb(0xf0, 0x93, 0xfb),
    Color::Rgb(0xf5, 0x57, 0x6c),
];

const DIMENSION_COLORS: [Color; 3] = [
    Color::Rgb(0x66, 0x7e, 0xea),
    Color::Rgb(0x76, 0x4b, 0xa2),
    Color::Rgb(0x38, 0x8e, 0x3c),
];

const SLICE_COLORS: [Color; 10] = [
    Color::Rgb(0x66, 0x7e, 0xea),
    Color::Rgb(0x76, 0x4b, 0xa2),
    Color::Rgb(0xf0, 0x93, 0xfb),
    Color::Rgb(0xf5, 0x57, 0x6c),
    Color::Rgb(0x4f, 0xac, 0xfe),
    Color::Rgb(0x00, 0xf2, 0xfe),
    Color::Rgb(0x43, 0xe9, 0x7b),
    Color::Rgb(0x38, 0xf9, 0xd7),
    Color::Rgb(0xff, 0xec, 0xd2),
    Color::Rgb(0xfc, 0xb6, 0x9f),
];

/// Bar chart: one group per dimension, one bar per institution level
pub fn comparison_chart(comparison: &LevelComparison) -> ChartSpec {
    let datasets = InstitutionLevel::ALL
        .iter()
        .zip(LEVEL_COLORS)
        .map(|(level, color)| Dataset {
            label: level.code().to_string(),
            data: Dimension::ALL
                .iter()
                .map(|dim| comparison.get(*level).get(*dim).unwrap_or(0.0))
                .collect(),
            colors: vec![color],
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Bar,
        title: "Comparação por Dimensão".to_string(),
        labels: Dimension::ALL
            .iter()
            .map(|dim| dimension_label(*dim).to_string())
            .collect(),
        datasets,
        max: Some(SCORE_MAX),
        decimals: 3,
    }
}

/// Radar chart: NOC/NFC/NAC per course area
pub fn dimension_chart(courses: &[CourseRecord]) -> ChartSpec {
    let datasets = Dimension::SCORED
        .iter()
        .zip(DIMENSION_COLORS)
        .map(|(dim, color)| Dataset {
            label: dimension_label(*dim).to_string(),
            data: courses.iter().map(|c| c.score(*dim).unwrap_or(0.0)).collect(),
            colors: vec![color],
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Radar,
        title: "Dimensões por Curso".to_string(),
        labels: courses.iter().map(|c| c.area.clone()).collect(),
        datasets,
        max: Some(SCORE_MAX),
        decimals: 3,
    }
}

/// Doughnut chart: overall mean per course area
pub fn courses_chart(courses: &[CourseRecord]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        title: "Média Geral por Curso".to_string(),
        labels: courses.iter().map(|c| c.area.clone()).collect(),
        datasets: vec![Dataset {
            label: "Média Geral".to_string(),
            data: courses.iter().map(|c| c.media_geral.unwrap_or(0.0)).collect(),
            colors: SLICE_COLORS.to_vec(),
        }],
        max: None,
        decimals: 3,
    }
}
