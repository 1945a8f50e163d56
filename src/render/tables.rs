//! Table builders
//!
//! Text cells show "N/A" for missing scores; scores print with 3 decimals.

use super::spec::{Cell, TableSpec, Tone};
use crate::api::{
    ComprehensiveAnalysis, Dimension, DimensionScore, InstitutionLevel, InstitutionalComparison,
    LevelComparison, QuestionPriority,
};
use crate::transform::{
    competitor_average, dimension_label, fmt_score, fmt_signed, priority_dimension, MISSING,
};

const DECIMALS: usize = 3;

fn difference_cell(ours: Option<f64>, theirs: Option<f64>) -> Cell {
    match (ours, theirs) {
        (Some(a), Some(b)) => Cell::toned(fmt_signed(a - b, DECIMALS), Tone::of_difference(a - b)),
        _ => Cell::toned(MISSING, Tone::Muted),
    }
}

/// Dimension × level table with the subject's difference to the national level
pub fn detail_table(comparison: &LevelComparison) -> TableSpec {
    let mut headers = vec!["Dimensão".to_string()];
    headers.extend(InstitutionLevel::ALL.iter().map(|l| l.code().to_string()));
    headers.push("Diferença".to_string());

    let rows = Dimension::ALL
        .iter()
        .map(|dim| {
            let mut row = vec![Cell::new(dimension_label(*dim))];
            for level in InstitutionLevel::ALL {
                let text = fmt_score(comparison.get(level).get(*dim), DECIMALS);
                let tone = if level == InstitutionLevel::Unifor {
                    Tone::Strong
                } else {
                    Tone::Normal
                };
                row.push(Cell::toned(text, tone));
            }
            row.push(difference_cell(comparison.unifor.get(*dim), comparison.brasil.get(*dim)));
            row
        })
        .collect();

    TableSpec {
        title: "Detalhamento por Dimensão".to_string(),
        headers,
        rows,
    }
}

/// Improvement priorities, already truncated by the caller
pub fn priority_table(priorities: &[QuestionPriority]) -> TableSpec {
    let headers = [
        "#",
        "Questão",
        "Dimensão",
        "UNIFOR",
        "Média Nacional",
        "Diferença",
        "Percentil",
        "Melhor Desempenho",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();

    let rows = priorities
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            let dimension = priority_dimension(&p.dimension, &p.question).into_owned();
            let top = p
                .top_performer
                .as_ref()
                .map(|t| format!("{} ({:.3})", t.institution, t.score))
                .unwrap_or_else(|| MISSING.to_string());

            vec![
                Cell::toned((idx + 1).to_string(), Tone::Muted),
                Cell::toned(p.question.clone(), Tone::Strong),
                Cell::new(dimension),
                Cell::new(fmt_score(Some(p.unifor_score), DECIMALS)),
                Cell::new(fmt_score(Some(p.national_mean), DECIMALS)),
                Cell::toned(fmt_signed(p.gap(), DECIMALS), Tone::of_difference(p.gap())),
                Cell::new(fmt_score(p.percentile_rank, 1)),
                Cell::new(top),
            ]
        })
        .collect();

    TableSpec {
        title: "Prioridades de Melhoria".to_string(),
        headers,
        rows,
    }
}

fn score_row(name: &str, scores: &DimensionScore, tone: Tone) -> Vec<Cell> {
    let mut row = vec![Cell::toned(name, tone)];
    row.extend(
        Dimension::ALL
            .iter()
            .map(|dim| Cell::toned(fmt_score(scores.get(*dim), DECIMALS), tone)),
    );
    row
}

/// One row per institution, subject highlighted, competitor mean last
pub fn institutions_table(comparison: &InstitutionalComparison, subject: &str) -> TableSpec {
    let mut headers = vec!["Instituição".to_string()];
    headers.extend(Dimension::ALL.iter().map(|d| d.code().to_string()));

    let mut rows: Vec<Vec<Cell>> = comparison
        .iter()
        .map(|(institution, scores)| {
            let tone = if institution == subject {
                Tone::Strong
            } else {
                Tone::Normal
            };
            score_row(institution, scores, tone)
        })
        .collect();

    rows.push(score_row(
        "Média dos concorrentes",
        &competitor_average(comparison, subject),
        Tone::Muted,
    ));

    TableSpec {
        title: "Comparação Institucional".to_string(),
        headers,
        rows,
    }
}

/// Subject scores against the competitor mean for the analysed scope
pub fn analysis_table(analysis: &ComprehensiveAnalysis, subject: &str) -> TableSpec {
    let competitors = competitor_average(&analysis.institutional_comparison, subject);
    let ours = &analysis.unifor_analysis.scores;

    let rows = Dimension::ALL
        .iter()
        .map(|dim| {
            vec![
                Cell::new(dimension_label(*dim)),
                Cell::toned(fmt_score(ours.get(*dim), DECIMALS), Tone::Strong),
                Cell::new(fmt_score(competitors.get(*dim), DECIMALS)),
                difference_cell(ours.get(*dim), competitors.get(*dim)),
            ]
        })
        .collect();

    TableSpec {
        title: format!(
            "Análise Abrangente ({} cursos, {} prioridades)",
            analysis.unifor_analysis.courses.len(),
            analysis.improvement_priorities.len()
        ),
        headers: ["Dimensão", "UNIFOR", "Média dos Concorrentes", "Diferença"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TopPerformer;
    use std::collections::BTreeMap;

    fn scores(noc: f64, geral: f64) -> DimensionScore {
        DimensionScore {
            noc: Some(noc),
            nfc: None,
            nac: Some(noc),
            geral: Some(geral),
        }
    }

    #[test]
    fn test_detail_table_difference_sign() {
        let comparison = LevelComparison {
            unifor: scores(4.2, 4.0),
            ceara: scores(3.9, 3.9),
            nordeste: scores(3.8, 3.8),
            brasil: scores(3.8, 4.1),
        };

        let table = detail_table(&comparison);
        assert_eq!(table.headers.len(), 6);
        assert_eq!(table.rows.len(), 4);

        let noc = &table.rows[0];
        assert_eq!(noc[1].text, "4.200");
        assert_eq!(noc[1].tone, Tone::Strong);
        assert_eq!(noc[5].text, "+0.400");
        assert_eq!(noc[5].tone, Tone::Positive);

        let nfc = &table.rows[1];
        assert_eq!(nfc[1].text, "N/A");
        assert_eq!(nfc[5].text, "N/A");

        let geral = &table.rows[3];
        assert_eq!(geral[5].text, "-0.100");
        assert_eq!(geral[5].tone, Tone::Negative);
    }

    #[test]
    fn test_priority_table_rows() {
        let priorities = vec![QuestionPriority {
            question: "Q55".to_string(),
            dimension: "NFC".to_string(),
            unifor_score: 4.2,
            national_mean: 3.8,
            gap_to_mean: Some(0.4),
            percentile_rank: Some(88.0),
            top_performer: Some(TopPerformer {
                institution: "IES X".to_string(),
                score: 5.5,
            }),
        }];

        let table = priority_table(&priorities);
        let row = &table.rows[0];
        assert_eq!(row[0].text, "1");
        assert_eq!(row[2].text, "Infraestrutura e Instalações Físicas");
        assert_eq!(row[5].text, "+0.400");
        assert_eq!(row[6].text, "88.0");
        assert_eq!(row[7].text, "IES X (5.500)");
    }

    #[test]
    fn test_priority_table_falls_back_to_classifier() {
        let priorities = vec![QuestionPriority {
            question: "Q43".to_string(),
            dimension: String::new(),
            unifor_score: 3.0,
            national_mean: 3.2,
            gap_to_mean: None,
            percentile_rank: None,
            top_performer: None,
        }];

        let row = &priority_table(&priorities).rows[0];
        assert_eq!(row[2].text, "Oportunidades de Ampliação da Formação");
        assert_eq!(row[6].text, "N/A");
        assert_eq!(row[7].text, "N/A");
    }

    #[test]
    fn test_institutions_table_footer() {
        let mut map = BTreeMap::new();
        map.insert("UNIFOR".to_string(), scores(5.0, 5.0));
        map.insert("IES A".to_string(), scores(3.0, 3.0));
        map.insert("IES B".to_string(), scores(0.0, 5.0));

        let table = institutions_table(&InstitutionalComparison(map), "UNIFOR");
        assert_eq!(table.rows.len(), 4);

        let subject = table.rows.iter().find(|r| r[0].text == "UNIFOR").unwrap();
        assert_eq!(subject[0].tone, Tone::Strong);

        let footer = table.rows.last().unwrap();
        assert_eq!(footer[0].text, "Média dos concorrentes");
        assert_eq!(footer[1].text, "3.000");
        assert_eq!(footer[2].text, "N/A");
        assert_eq!(footer[4].text, "4.000");
    }
}
