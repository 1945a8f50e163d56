//! Extremes - lowest and highest scoring institutions per highlighted question

use crate::app::App;
use crate::render::{ExtremeCard, Tone};
use crate::ui::widgets::{placeholder, render_content, tone_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const COLUMNS: usize = 2;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let Some(section) = &app.state.extremes else {
        placeholder(
            f,
            area,
            "Extremos",
            "Selecione uma área para ver os extremos",
            Tone::Muted,
        );
        return;
    };

    let title = format!("Extremos - {}", section.area);
    render_content(f, area, &title, &section.cards, |f, area, cards| {
        if cards.is_empty() {
            placeholder(f, area, &title, "Nenhuma questão destacada disponível", Tone::Muted);
            return;
        }
        render_grid(f, area, cards);
    });
}

fn render_grid(f: &mut Frame, area: Rect, cards: &[ExtremeCard]) {
    let row_count = cards.len().div_ceil(COLUMNS);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(area);

    for (row_area, chunk) in rows.iter().zip(cards.chunks(COLUMNS)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);
        for (col_area, card) in cols.iter().zip(chunk) {
            f.render_widget(card_widget(card), *col_area);
        }
    }
}

fn card_widget(card: &ExtremeCard) -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(
        "Menores notas",
        tone_style(Tone::Negative).add_modifier(Modifier::BOLD),
    ))];
    lines.extend(entries(&card.lowest, Tone::Negative));
    lines.push(Line::from(Span::styled(
        "Maiores notas",
        tone_style(Tone::Positive).add_modifier(Modifier::BOLD),
    )));
    lines.extend(entries(&card.highest, Tone::Positive));

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} - {}", card.question, card.dimension)),
        )
        .wrap(Wrap { trim: true })
}

fn entries(items: &[(String, String)], tone: Tone) -> Vec<Line<'static>> {
    items
        .iter()
        .map(|(name, score)| {
            Line::from(vec![
                Span::raw(format!("  {} ", name)),
                Span::styled(score.clone(), tone_style(tone)),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    #[test]
    fn test_entries_keep_order() {
        let items = vec![
            ("IES A".to_string(), "2.10".to_string()),
            ("IES B".to_string(), "2.50".to_string()),
        ];
        let lines = entries(&items, Tone::Negative);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[1].content, "2.10");
        assert_eq!(lines[1].spans[0].content, "  IES B ");
        assert_eq!(lines[0].spans[1].style, Style::default().fg(Tone::Negative.color()));
    }
}
