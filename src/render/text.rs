//! Plain-text rendering used by the `report` command

use super::registry::ChartSlot;
use super::spec::{ChartKind, ChartSpec, TableSpec};
use crate::state::{AppState, WidgetContent};
use std::fmt::Write;

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

/// Column-aligned table
pub fn table_to_text(table: &TableSpec) -> String {
    let columns = table.headers.len();
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.chars().count()).collect();
    for row in &table.rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(cell.text.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = table
        .headers
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad(h, *w))
        .collect();
    let _ = writeln!(out, "{}", header.join("  ").trim_end());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));

    for row in &table.rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| pad(&cell.text, *w))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }
    out
}

/// Chart as label/value lines
pub fn chart_to_text(chart: &ChartSpec) -> String {
    let mut out = String::new();
    match chart.kind {
        ChartKind::Doughnut => {
            for entry in chart.legend_entries(2) {
                let _ = writeln!(out, "  {}", entry);
            }
        }
        ChartKind::Bar | ChartKind::Radar => {
            for (i, label) in chart.labels.iter().enumerate() {
                let values: Vec<String> = chart
                    .datasets
                    .iter()
                    .map(|ds| {
                        let value = ds.data.get(i).copied().unwrap_or(0.0);
                        format!("{} {:.*}", ds.label, chart.decimals, value)
                    })
                    .collect();
                let _ = writeln!(out, "  {}: {}", label, values.join(" | "));
            }
        }
    }
    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n== {} ==", title);
}

fn widget<T>(out: &mut String, content: &WidgetContent<T>, body: impl FnOnce(&mut String, &T)) {
    match content {
        WidgetContent::Loading => {
            let _ = writeln!(out, "(carregando)");
        }
        WidgetContent::Failed(message) => {
            let _ = writeln!(out, "{}", message);
        }
        WidgetContent::Ready(value) => body(out, value),
    }
}

/// Every widget of the state, in dashboard order
pub fn render_report(state: &AppState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ENADE - {}", state.selection_label());
    if let Some(at) = state.last_updated {
        let _ = writeln!(out, "Atualizado em {}", at.format("%Y-%m-%d %H:%M:%S"));
    }

    section(&mut out, "Áreas");
    widget(&mut out, &state.areas, |out, areas| {
        let _ = writeln!(out, "{}", areas.join(", "));
    });

    section(&mut out, "Resumo");
    widget(&mut out, &state.summary, |out, stats| {
        for stat in stats {
            let _ = writeln!(out, "{}: {}", stat.label, stat.value);
        }
    });

    for slot in ChartSlot::ALL {
        if let Some(instance) = state.charts.get(slot) {
            section(&mut out, &instance.spec.title);
            out.push_str(&chart_to_text(&instance.spec));
        } else if let Some(message) = state.chart_placeholders.get(&slot) {
            section(&mut out, &format!("Gráfico {}", slot));
            let _ = writeln!(out, "{}", message);
        }
    }

    section(&mut out, "Detalhamento por Dimensão");
    widget(&mut out, &state.detail_table, |out, table| out.push_str(&table_to_text(table)));

    if let Some(extremes) = &state.extremes {
        section(&mut out, &format!("Extremos - {}", extremes.area));
        widget(&mut out, &extremes.cards, |out, cards| {
            if cards.is_empty() {
                let _ = writeln!(out, "Nenhuma questão destacada disponível");
            }
            for card in cards {
                let _ = writeln!(out, "{} - {}", card.question, card.dimension);
                let _ = writeln!(out, "  Menores valores:");
                for (institution, score) in &card.lowest {
                    let _ = writeln!(out, "    {}  {}", score, institution);
                }
                let _ = writeln!(out, "  Maiores valores:");
                for (institution, score) in &card.highest {
                    let _ = writeln!(out, "    {}  {}", score, institution);
                }
            }
        });
    }

    section(&mut out, "Análise Abrangente");
    widget(&mut out, &state.analysis, |out, table| {
        let _ = writeln!(out, "{}", table.title);
        out.push_str(&table_to_text(table));
    });

    section(&mut out, "Principais Prioridades");
    widget(&mut out, &state.priority_list, |out, cards| {
        for card in cards {
            let _ = writeln!(
                out,
                "{:>2}. {} ({}) {} [{}]",
                card.rank, card.question, card.dimension, card.score, card.gap
            );
        }
    });

    section(&mut out, "Prioridades de Melhoria");
    widget(&mut out, &state.priority_table, |out, table| out.push_str(&table_to_text(table)));

    section(&mut out, "Comparação Institucional");
    widget(&mut out, &state.institutions, |out, table| out.push_str(&table_to_text(table)));

    section(&mut out, "Instituições Similares");
    widget(&mut out, &state.similar, |out, names| {
        for name in names {
            let _ = writeln!(out, "- {}", name);
        }
    });

    out
}
