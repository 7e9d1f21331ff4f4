pub mod app;
pub mod canvas_surface;
pub mod ui;

use std::{io, time::Duration};

use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use rewards_core::{AppConfig, RandomSource};
use tracing::info;

use crate::tui::app::DashboardApp;

pub fn run(config: &AppConfig, today: NaiveDate) -> Result<()> {
    let mut app = DashboardApp::new(config, today);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(range = %app.range(), "dashboard started");
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: Backend, R: RandomSource>(terminal: &mut Terminal<B>, app: &mut DashboardApp<R>) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| anyhow::anyhow!("draw failed: {}", e))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Left | KeyCode::Char('h') => app.previous_range(),
                    KeyCode::Right | KeyCode::Char('l') => app.next_range(),
                    KeyCode::Char(c @ '1'..='5') => app.select_preset(c as usize - '1' as usize),
                    KeyCode::Char('o') => app.toggle_overlay(),
                    KeyCode::Char('r') => app.refresh(),
                    _ => {}
                }
            }
        }
    }
}
