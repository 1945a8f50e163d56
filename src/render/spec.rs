//! Display models produced by the render layer and drawn by the UI

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Radar,
    Doughnut,
}

/// One series of a chart. Single-color series carry one color; doughnut
/// slices carry one per point.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub colors: Vec<Color>,
}

impl Dataset {
    /// Color of the point at `index`, cycling through the palette
    pub fn color_at(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            Color::Reset
        } else {
            self.colors[index % self.colors.len()]
        }
    }
}

/// Chart configuration, library-agnostic
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    /// Upper bound of the value axis
    pub max: Option<f64>,
    /// Decimals used in tooltips and bar labels
    pub decimals: usize,
}

impl ChartSpec {
    /// Legend entries `label: value` for the first dataset (doughnut legend)
    pub fn legend_entries(&self, decimals: usize) -> Vec<String> {
        let Some(dataset) = self.datasets.first() else {
            return Vec::new();
        };
        self.labels
            .iter()
            .zip(&dataset.data)
            .map(|(label, value)| format!("{}: {:.*}", label, decimals, value))
            .collect()
    }
}

/// Visual emphasis of a table cell or card value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Strong,
    Positive,
    Negative,
    Muted,
}

impl Tone {
    /// Positive for values at or above zero, negative otherwise
    pub fn of_difference(value: f64) -> Self {
        if value >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Normal => Color::White,
            Self::Strong => Color::Cyan,
            Self::Positive => Color::Green,
            Self::Negative => Color::Red,
            Self::Muted => Color::DarkGray,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Normal,
        }
    }

    pub fn toned(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// Generated table: header plus rows of cells
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStat {
    pub value: String,
    pub label: String,
}

/// Entry of the short improvement-priority list
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityCard {
    pub rank: usize,
    pub question: String,
    pub dimension: String,
    pub score: String,
    pub gap: String,
    pub tone: Tone,
}

/// Lowest and highest institutions for one question
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremeCard {
    pub question: String,
    pub dimension: &'static str,
    pub lowest: Vec<(String, String)>,
    pub highest: Vec<(String, String)>,
}
