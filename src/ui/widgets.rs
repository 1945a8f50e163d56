//! Conversions from render specs to ratatui widgets

use crate::render::{ChartKind, ChartSpec, TableSpec, Tone};
use crate::state::WidgetContent;
use ratatui::{
    layout::{Constraint, Direction, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

/// Bars hold integers; scores are scaled to keep three decimals
const BAR_SCALE: f64 = 1000.0;

pub fn tone_style(tone: Tone) -> Style {
    let style = Style::default().fg(tone.color());
    match tone {
        Tone::Strong => style.add_modifier(Modifier::BOLD),
        _ => style,
    }
}

fn scaled(value: f64) -> u64 {
    (value.max(0.0) * BAR_SCALE).round() as u64
}

/// Grouped vertical bars for bar and radar specs, horizontal bars for doughnuts
pub fn chart_widget(spec: &ChartSpec) -> BarChart<'static> {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(spec.title.clone());

    let mut chart = match spec.kind {
        ChartKind::Doughnut => {
            let bars: Vec<Bar> = spec
                .datasets
                .first()
                .map(|ds| {
                    spec.labels
                        .iter()
                        .zip(&ds.data)
                        .enumerate()
                        .map(|(i, (label, value))| {
                            Bar::default()
                                .value(scaled(*value))
                                .text_value(format!("{:.2}", value))
                                .label(Line::from(label.clone()))
                                .style(Style::default().fg(ds.color_at(i)))
                        })
                        .collect()
                })
                .unwrap_or_default();

            BarChart::default()
                .direction(Direction::Horizontal)
                .bar_width(1)
                .bar_gap(0)
                .data(BarGroup::default().bars(&bars))
        }
        ChartKind::Bar | ChartKind::Radar => {
            let mut chart = BarChart::default().bar_width(6).bar_gap(1).group_gap(3);
            for (i, label) in spec.labels.iter().enumerate() {
                let bars: Vec<Bar> = spec
                    .datasets
                    .iter()
                    .map(|ds| {
                        let value = ds.data.get(i).copied().unwrap_or(0.0);
                        Bar::default()
                            .value(scaled(value))
                            .text_value(format!("{:.*}", spec.decimals, value))
                            .style(Style::default().fg(ds.color_at(0)))
                    })
                    .collect();
                chart = chart.data(BarGroup::default().label(Line::from(label.clone())).bars(&bars));
            }
            chart
        }
    };

    if let Some(max) = spec.max {
        chart = chart.max(scaled(max));
    }
    chart.block(block)
}

/// Colored dataset names for multi-series charts
pub fn chart_legend(spec: &ChartSpec) -> Line<'static> {
    let mut spans = Vec::new();
    for ds in &spec.datasets {
        spans.push(Span::styled("■ ", Style::default().fg(ds.color_at(0))));
        spans.push(Span::raw(format!("{}  ", ds.label)));
    }
    Line::from(spans)
}

pub fn table_widget(spec: &TableSpec) -> Table<'static> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(
        spec.headers
            .iter()
            .map(|h| Cell::from(h.clone()).style(bold))
            .collect::<Vec<_>>(),
    )
    .height(1);

    let mut widths: Vec<usize> = spec.headers.iter().map(|h| h.chars().count()).collect();
    for row in &spec.rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.text.chars().count());
        }
    }

    let rows: Vec<Row> = spec
        .rows
        .iter()
        .map(|row| {
            Row::new(
                row.iter()
                    .map(|c| Cell::from(c.text.clone()).style(tone_style(c.tone)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let constraints: Vec<Constraint> = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            if i == 0 {
                Constraint::Min(*w as u16)
            } else {
                Constraint::Length(*w as u16 + 1)
            }
        })
        .collect();

    Table::new(rows, constraints)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(spec.title.clone()))
}

/// Message box standing in for a widget
pub fn placeholder(f: &mut Frame, area: Rect, title: &str, message: &str, tone: Tone) {
    let paragraph = Paragraph::new(message.to_string())
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .style(tone_style(tone))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Draw `content` with `draw`, or its loading/failed placeholder
pub fn render_content<T>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    content: &WidgetContent<T>,
    draw: impl FnOnce(&mut Frame, Rect, &T),
) {
    match content {
        WidgetContent::Loading => placeholder(f, area, title, "Carregando...", Tone::Muted),
        WidgetContent::Failed(message) => placeholder(f, area, title, message, Tone::Negative),
        WidgetContent::Ready(value) => draw(f, area, value),
    }
}
