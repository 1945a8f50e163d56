//! Priorities - analysis by dimension, ranked questions and priority table

use crate::app::App;
use crate::render::PriorityCard;
use crate::ui::widgets::{render_content, table_widget, tone_style};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(6)])
        .split(area);

    render_content(
        f,
        chunks[0],
        "Análise por Dimensão",
        &app.state.analysis,
        |f, area, table| f.render_widget(table_widget(table), area),
    );

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    render_content(
        f,
        lower[0],
        "Prioridades de Melhoria",
        &app.state.priority_list,
        |f, area, cards| {
            let items: Vec<ListItem> = cards.iter().map(card_item).collect();
            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Prioridades de Melhoria"),
            );
            f.render_widget(list, area);
        },
    );

    render_content(
        f,
        lower[1],
        "Questões Prioritárias",
        &app.state.priority_table,
        |f, area, table| f.render_widget(table_widget(table), area),
    );
}

fn card_item(card: &PriorityCard) -> ListItem<'static> {
    let head = Line::from(vec![
        Span::styled(
            format!("#{} ", card.rank),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(card.question.clone(), tone_style(card.tone)),
        Span::raw(format!(" {}", card.dimension)),
    ]);
    let detail = Line::from(vec![
        Span::raw(format!("   Nota {} ", card.score)),
        Span::styled(format!("Gap {}", card.gap), tone_style(card.tone)),
    ]);
    ListItem::new(vec![head, detail])
}
