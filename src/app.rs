//! Application controller and key handling

use crate::api::ApiClient;
use crate::config::Config;
use crate::loader::{LoadEvent, Loader, Request};
use crate::render::{begin_selection, present};
use crate::state::AppState;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Dashboard page shown in the main pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Overview,
    Courses,
    Extremes,
    Priorities,
    Institutions,
}

impl View {
    pub const ALL: [View; 5] = [
        Self::Overview,
        Self::Courses,
        Self::Extremes,
        Self::Priorities,
        Self::Institutions,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Visão Geral",
            Self::Courses => "Cursos",
            Self::Extremes => "Extremos",
            Self::Priorities => "Prioridades",
            Self::Institutions => "Instituições",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// Application state plus the machinery that feeds it
pub struct App {
    pub config: Config,
    pub state: AppState,
    loader: Loader,
    event_rx: mpsc::UnboundedReceiver<LoadEvent>,
    pub should_quit: bool,
    /// Highlighted entry of the area selector
    pub cursor: usize,
    pub view: View,
}

impl App {
    /// Create a new app; nothing is fetched until [`App::start`]
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(&config)?;
        let (loader, event_rx) = Loader::new(client);

        Ok(Self {
            config,
            state: AppState::new(),
            loader,
            event_rx,
            should_quit: false,
            cursor: 0,
            view: View::Overview,
        })
    }

    /// Initial load: area list plus the overview
    pub fn start(&mut self) {
        self.refresh();
    }

    /// Reload the area list and the current selection
    pub fn refresh(&mut self) {
        log::info!("Refreshing {}", self.state.selection_label());
        let area = self.state.selected_area.clone();
        self.select_area(area);
        self.loader.spawn(self.state.generation, Request::Areas);
    }

    /// Switch selection; results of earlier selections are dropped
    pub fn select_area(&mut self, area: Option<String>) {
        self.state.generation += 1;
        let generation = self.state.generation;
        self.loader.cancel_stale(generation);

        log::info!(
            "Selected {} (generation {})",
            area.as_deref().unwrap_or("overview"),
            generation
        );

        begin_selection(&mut self.state, area.as_deref());

        for request in Request::for_selection(area.as_deref()) {
            self.loader.spawn(generation, request);
        }
    }

    /// Apply one load result if it belongs to the current generation
    pub fn apply(&mut self, event: LoadEvent) -> bool {
        if event.generation != self.state.generation {
            log::debug!(
                "Discarding stale {:?} (generation {} < {})",
                event.request,
                event.generation,
                self.state.generation
            );
            return false;
        }

        present(&mut self.state, &self.config, &event.request, event.result);
        true
    }

    /// Drain finished loads (non-blocking)
    pub fn process_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.apply(event);
        }

        let options = self.state.area_options().len();
        if self.cursor >= options {
            self.cursor = options.saturating_sub(1);
        }
    }

    /// Requests still running
    pub fn pending(&self) -> usize {
        self.loader.in_flight()
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                log::info!("Manual refresh requested");
                self.refresh();
            }
            KeyCode::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            KeyCode::Down => {
                if self.cursor + 1 < self.state.area_options().len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(option) = self.state.area_options().get(self.cursor) {
                    let area = AppState::area_from_option(option);
                    if area != self.state.selected_area {
                        self.select_area(area);
                    }
                }
            }
            KeyCode::Tab => {
                self.view = self.view.next();
            }
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.view = View::ALL[idx];
            }
            _ => {}
        }
    }

    /// Check if we should poll for input
    pub fn should_poll_input(timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    /// Get keyboard event
    pub fn read_event() -> Result<Event> {
        Ok(event::read()?)
    }

    /// Stop outstanding loads
    pub fn shutdown(&mut self) {
        self.loader.abort_all();
    }
}
