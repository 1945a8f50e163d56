//! UI Views - Overview, Courses, Extremes, Priorities, Institutions

mod courses;
mod extremes;
mod institutions;
mod overview;
mod priorities;

use super::widgets::{chart_legend, chart_widget, placeholder};
use crate::app::{App, View};
use crate::render::{ChartSlot, Tone};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

/// Render the whole dashboard for the current app state
pub fn render_dashboard(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Body
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_tabs(f, app, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(40)])
        .split(chunks[2]);

    render_area_selector(f, app, body[0]);

    match app.view {
        View::Overview => overview::render(f, app, body[1]),
        View::Courses => courses::render(f, app, body[1]),
        View::Extremes => extremes::render(f, app, body[1]),
        View::Priorities => priorities::render(f, app, body[1]),
        View::Institutions => institutions::render(f, app, body[1]),
    }

    render_footer(f, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let updated = app
        .state
        .last_updated
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let pending = app.pending();
    let status = if pending > 0 {
        format!(" | Carregando: {}", pending)
    } else {
        String::new()
    };

    let text = format!(
        "📊 ENADE - {} | Atualizado: {}{}",
        app.state.selection_label(),
        updated,
        status
    );

    let header = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Cyan));

    f.render_widget(header, area);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, v)| Line::from(format!("{} {}", i + 1, v.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(app.view.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}

fn render_area_selector(f: &mut Frame, app: &App, area: Rect) {
    if let Some(message) = app.state.areas.placeholder() {
        placeholder(f, area, "Áreas", message, Tone::Negative);
        return;
    }

    let selected = app.state.selected_area.as_deref();
    let items: Vec<ListItem> = app
        .state
        .area_options()
        .into_iter()
        .enumerate()
        .map(|(idx, option)| {
            let is_current = crate::state::AppState::area_from_option(&option).as_deref() == selected;
            let label = if idx == 0 {
                crate::state::OVERVIEW_LABEL.to_string()
            } else {
                option
            };
            let marker = if is_current { "● " } else { "  " };

            let mut style = Style::default();
            if idx == app.cursor {
                style = style.bg(Color::DarkGray);
            }
            if is_current {
                style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
            }
            ListItem::new(Line::from(format!("{}{}", marker, label))).style(style)
        })
        .collect();

    let title = if app.state.areas.is_loading() {
        "Áreas (carregando)"
    } else {
        "Áreas (↑↓ Enter)"
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn slot_title(slot: ChartSlot) -> &'static str {
    match slot {
        ChartSlot::Comparison => "Comparação por Dimensão",
        ChartSlot::Dimension => "Dimensões por Curso",
        ChartSlot::Courses => "Média Geral por Curso",
    }
}

/// Live chart of a slot, or the slot's placeholder
pub(super) fn render_chart_slot(f: &mut Frame, app: &App, slot: ChartSlot, area: Rect, legend: Option<Rect>) {
    match app.state.charts.get(slot) {
        Some(instance) => {
            f.render_widget(chart_widget(&instance.spec), area);
            if let Some(legend_area) = legend {
                f.render_widget(Paragraph::new(chart_legend(&instance.spec)), legend_area);
            }
        }
        None => {
            let (message, tone) = match app.state.chart_placeholders.get(&slot) {
                Some(message) => (message.as_str(), Tone::Negative),
                None => ("Carregando...", Tone::Muted),
            };
            placeholder(f, area, slot_title(slot), message, tone);
        }
    }
}

fn render_footer(f: &mut Frame, area: Rect) {
    let help_text = "q: Sair │ ↑↓: Área │ Enter: Selecionar │ r: Atualizar │ Tab/1-5: Visão";

    let footer = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::DarkGray));

    f.render_widget(footer, area);
}
