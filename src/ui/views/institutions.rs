//! Institutions - question scores across institutions and similar institutions

use crate::app::App;
use crate::ui::widgets::{render_content, table_widget};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    render_content(
        f,
        chunks[0],
        "Comparação Institucional",
        &app.state.institutions,
        |f, area, table| f.render_widget(table_widget(table), area),
    );

    render_content(
        f,
        chunks[1],
        "Instituições Similares",
        &app.state.similar,
        |f, area, names| {
            let items: Vec<ListItem> = if names.is_empty() {
                vec![ListItem::new(Line::from("Nenhuma instituição similar"))]
            } else {
                names
                    .iter()
                    .map(|name| ListItem::new(Line::from(format!("• {}", name))))
                    .collect()
            };
            let list = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Instituições Similares"),
            );
            f.render_widget(list, area);
        },
    );
}
