//! UI layer - TUI and views

mod views;
mod widgets;

pub use views::render_dashboard;

use crate::app::App;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Main TUI controller
pub struct TUI {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TUI {
    /// Create a new TUI
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal })
    }

    /// Get mutable reference to terminal
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<io::Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TUI {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive dashboard until the user quits
pub async fn run(mut app: App) -> Result<()> {
    let mut tui = TUI::new()?;
    app.start();

    while !app.should_quit {
        app.process_events();
        tui.terminal().draw(|f| render_dashboard(f, &app))?;

        let tick = app.config.tick_rate();
        let ready = tokio::task::block_in_place(|| App::should_poll_input(tick))?;
        if ready {
            if let Event::Key(key) = App::read_event()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    app.shutdown();
    log::info!("Dashboard closed");
    Ok(())
}
