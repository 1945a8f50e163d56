//! Application state owned by the controller
//!
//! Holds the last applied snapshot of every widget and the chart registry.
//! Only the UI loop mutates it.

use crate::render::{ChartRegistry, ChartSlot, ExtremeCard, PriorityCard, SummaryStat, TableSpec};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;

/// Selector value meaning "all areas"
pub const OVERVIEW_AREA: &str = "geral";
/// Selector label for [`OVERVIEW_AREA`]
pub const OVERVIEW_LABEL: &str = "Visão Geral";

/// What a widget currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetContent<T> {
    Loading,
    Ready(T),
    /// Placeholder message replacing the widget after a failed fetch
    Failed(String),
}

impl<T> Default for WidgetContent<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> WidgetContent<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Individually replaceable parts of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Widget {
    AreaSelector,
    Summary,
    Chart(ChartSlot),
    DetailTable,
    Extremes,
    PriorityList,
    PriorityTable,
    Institutions,
    Similar,
    Analysis,
}

/// Extremes section, shown only while an area is selected
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremesSection {
    pub area: String,
    pub cards: WidgetContent<Vec<ExtremeCard>>,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub areas: WidgetContent<Vec<String>>,
    pub all_areas: Vec<String>,
    /// `None` is the overview
    pub selected_area: Option<String>,
    /// Generation of the loads whose results may still be applied
    pub generation: u64,
    pub summary: WidgetContent<Vec<SummaryStat>>,
    pub detail_table: WidgetContent<TableSpec>,
    pub extremes: Option<ExtremesSection>,
    pub priority_list: WidgetContent<Vec<PriorityCard>>,
    pub priority_table: WidgetContent<TableSpec>,
    pub institutions: WidgetContent<TableSpec>,
    pub similar: WidgetContent<Vec<String>>,
    pub analysis: WidgetContent<TableSpec>,
    pub charts: ChartRegistry,
    pub chart_placeholders: BTreeMap<ChartSlot, String>,
    pub last_updated: Option<DateTime<Local>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector entries: the overview first, then every area
    pub fn area_options(&self) -> Vec<String> {
        let mut options = vec![OVERVIEW_AREA.to_string()];
        if let Some(areas) = self.areas.ready() {
            options.extend(areas.iter().cloned());
        }
        options
    }

    /// Display label of the current selection
    pub fn selection_label(&self) -> &str {
        self.selected_area.as_deref().unwrap_or(OVERVIEW_LABEL)
    }

    /// Normalize a selector value; the overview maps to `None`
    pub fn area_from_option(option: &str) -> Option<String> {
        if option == OVERVIEW_AREA {
            None
        } else {
            Some(option.to_string())
        }
    }

    /// Reset area-scoped widgets to loading before a new generation lands
    pub fn mark_loading(&mut self) {
        self.priority_list = WidgetContent::Loading;
        self.priority_table = WidgetContent::Loading;
        self.institutions = WidgetContent::Loading;
        self.similar = WidgetContent::Loading;
        self.analysis = WidgetContent::Loading;
        if let Some(section) = &mut self.extremes {
            section.cards = WidgetContent::Loading;
        }
    }

    pub fn touch(&mut self) {
        self.last_updated = Some(Local::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_options_start_with_overview() {
        let mut state = AppState::new();
        assert_eq!(state.area_options(), vec!["geral"]);

        state.areas = WidgetContent::Ready(vec!["DIREITO".to_string(), "MEDICINA".to_string()]);
        assert_eq!(state.area_options(), vec!["geral", "DIREITO", "MEDICINA"]);
    }

    #[test]
    fn test_area_from_option() {
        assert_eq!(AppState::area_from_option("geral"), None);
        assert_eq!(AppState::area_from_option("DIREITO"), Some("DIREITO".to_string()));
    }

    #[test]
    fn test_widget_content_accessors() {
        let failed: WidgetContent<u8> = WidgetContent::Failed("Erro".to_string());
        assert_eq!(failed.placeholder(), Some("Erro"));
        assert!(failed.ready().is_none());
        assert!(WidgetContent::<u8>::default().is_loading());
    }
}
