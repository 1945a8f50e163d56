//! Overview - summary stats, level comparison chart and detail table

use super::render_chart_slot;
use crate::app::App;
use crate::render::ChartSlot;
use crate::ui::widgets::{render_content, table_widget};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Summary
            Constraint::Min(12),    // Comparison chart
            Constraint::Length(1),  // Legend
            Constraint::Length(8),  // Detail table
        ])
        .split(area);

    render_content(f, chunks[0], "Resumo", &app.state.summary, |f, area, stats| {
        let mut spans = Vec::new();
        for stat in stats {
            spans.push(Span::styled(
                format!(" {} ", stat.value),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!("{}   ", stat.label)));
        }
        let summary = Paragraph::new(Line::from(spans))
            .block(Block::default().borders(Borders::ALL).title("Resumo"));
        f.render_widget(summary, area);
    });

    render_chart_slot(f, app, ChartSlot::Comparison, chunks[1], Some(chunks[2]));

    render_content(
        f,
        chunks[3],
        "Detalhamento por Dimensão",
        &app.state.detail_table,
        |f, area, table| f.render_widget(table_widget(table), area),
    );
}
