//! Render layer - writes transformed payloads into the application state
//!
//! Each `render_*` function replaces the widgets its payload feeds. Charts
//! go through the registry, so redrawing a slot disposes the old instance.

mod cards;
mod charts;
mod registry;
mod spec;
mod tables;
pub mod text;

pub use cards::{extreme_cards, priority_cards, summary_stats};
pub use charts::{comparison_chart, courses_chart, dimension_chart};
pub use registry::{ChartInstance, ChartRegistry, ChartSlot};
pub use spec::{
    Cell, ChartKind, ChartSpec, Dataset, ExtremeCard, PriorityCard, SummaryStat, TableSpec, Tone,
};
pub use tables::{analysis_table, detail_table, institutions_table, priority_table};

use crate::api::{
    Areas, ComprehensiveAnalysis, DashboardData, ExtremesResult, InstitutionalComparison,
    LevelComparison, PrioritiesResponse, SimilarInstitutions,
};
use crate::config::Config;
use crate::error::FetchResult;
use crate::loader::{Payload, Request};
use crate::state::{AppState, ExtremesSection, Widget, WidgetContent};
use crate::transform::{summary_priorities, table_priorities};

fn draw_chart(state: &mut AppState, slot: ChartSlot, spec: ChartSpec) {
    state.chart_placeholders.remove(&slot);
    state.charts.draw(slot, spec);
}

pub fn render_areas(state: &mut AppState, areas: &Areas) {
    state.areas = WidgetContent::Ready(areas.unifor_areas.clone());
    state.all_areas = areas.all_areas.clone();
}

/// Overview: summary, the three charts and the detail table
pub fn render_dashboard(state: &mut AppState, data: &DashboardData) {
    state.summary = WidgetContent::Ready(summary_stats(&data.summary));
    draw_chart(state, ChartSlot::Comparison, comparison_chart(&data.comparison_chart));
    draw_chart(state, ChartSlot::Dimension, dimension_chart(&data.unifor_performance));
    draw_chart(state, ChartSlot::Courses, courses_chart(&data.unifor_performance));
    state.detail_table = WidgetContent::Ready(detail_table(&data.comparison_chart));
}

/// Area comparison: redraws the comparison chart and the detail table only
pub fn render_comparison(state: &mut AppState, comparison: &LevelComparison) {
    draw_chart(state, ChartSlot::Comparison, comparison_chart(comparison));
    state.detail_table = WidgetContent::Ready(detail_table(comparison));
}

pub fn show_extremes(state: &mut AppState, area: &str, extremes: &ExtremesResult, highlighted: &[String]) {
    state.extremes = Some(ExtremesSection {
        area: area.to_string(),
        cards: WidgetContent::Ready(extreme_cards(extremes, highlighted)),
    });
}

pub fn hide_extremes(state: &mut AppState) {
    state.extremes = None;
}

/// Put the widgets of a new selection into their loading state
pub fn begin_selection(state: &mut AppState, area: Option<&str>) {
    state.selected_area = area.map(str::to_string);
    state.mark_loading();
    match area {
        None => hide_extremes(state),
        Some(area) => {
            state.extremes = Some(ExtremesSection {
                area: area.to_string(),
                cards: WidgetContent::Loading,
            });
        }
    }
}

pub fn render_priorities(state: &mut AppState, response: &PrioritiesResponse, config: &Config) {
    let list = summary_priorities(&response.priorities, config.summary_priority_limit);
    let table = table_priorities(&response.priorities, config.table_priority_limit);
    state.priority_list = WidgetContent::Ready(priority_cards(list));
    state.priority_table = WidgetContent::Ready(priority_table(table));
}

pub fn render_institutions(state: &mut AppState, comparison: &InstitutionalComparison, config: &Config) {
    state.institutions =
        WidgetContent::Ready(institutions_table(comparison, &config.subject_institution));
}

pub fn render_similar(state: &mut AppState, similar: &SimilarInstitutions) {
    state.similar = WidgetContent::Ready(similar.institutions.clone());
}

pub fn render_analysis(state: &mut AppState, analysis: &ComprehensiveAnalysis, config: &Config) {
    state.analysis = WidgetContent::Ready(analysis_table(analysis, &config.subject_institution));
}

/// Replace the widgets fed by a failed request with its placeholder
pub fn render_failure(state: &mut AppState, widgets: &[Widget], message: &str) {
    for widget in widgets {
        match widget {
            Widget::AreaSelector => state.areas = WidgetContent::Failed(message.to_string()),
            Widget::Summary => state.summary = WidgetContent::Failed(message.to_string()),
            Widget::Chart(slot) => {
                state.charts.dispose(*slot);
                state.chart_placeholders.insert(*slot, message.to_string());
            }
            Widget::DetailTable => state.detail_table = WidgetContent::Failed(message.to_string()),
            Widget::Extremes => {
                if let Some(section) = &mut state.extremes {
                    section.cards = WidgetContent::Failed(message.to_string());
                }
            }
            Widget::PriorityList => state.priority_list = WidgetContent::Failed(message.to_string()),
            Widget::PriorityTable => state.priority_table = WidgetContent::Failed(message.to_string()),
            Widget::Institutions => state.institutions = WidgetContent::Failed(message.to_string()),
            Widget::Similar => state.similar = WidgetContent::Failed(message.to_string()),
            Widget::Analysis => state.analysis = WidgetContent::Failed(message.to_string()),
        }
    }
}

/// Apply a fetch outcome to the state
pub fn present(state: &mut AppState, config: &Config, request: &Request, result: FetchResult<Payload>) {
    let payload = match result {
        Ok(payload) => payload,
        Err(e) => {
            log::warn!("{}: {}", request.placeholder(), e);
            render_failure(state, request.widgets(), request.placeholder());
            return;
        }
    };

    match &payload {
        Payload::Areas(areas) => render_areas(state, areas),
        Payload::Dashboard(data) => render_dashboard(state, data),
        Payload::Comparisons(comparison) => render_comparison(state, comparison),
        Payload::Extremes { area, data } => {
            show_extremes(state, area, data, &config.highlighted_questions)
        }
        Payload::Analysis(analysis) => render_analysis(state, analysis, config),
        Payload::Priorities(response) => render_priorities(state, response, config),
        Payload::Institutions(comparison) => render_institutions(state, comparison, config),
        Payload::Similar(similar) => render_similar(state, similar),
    }
    state.touch();
}
