//! Courses - dimension scores per area and overall mean per area

use super::render_chart_slot;
use crate::app::App;
use crate::render::ChartSlot;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(55),
            Constraint::Length(1),
            Constraint::Min(6),
        ])
        .split(area);

    render_chart_slot(f, app, ChartSlot::Dimension, chunks[0], Some(chunks[1]));
    render_chart_slot(f, app, ChartSlot::Courses, chunks[2], None);
}
