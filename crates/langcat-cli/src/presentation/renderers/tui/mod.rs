//! TUI Renderer for the catalog viewer
//!
//! Sets up the terminal, then loops: draw the current `App` state, wait for
//! input (bounded by the tick rate and any pending debounced search), apply
//! the load outcome once it arrives, and fire due searches.
//!
//! ## Design:
//! - `App` owns all state; the renderer only drives it
//! - The catalog load runs on the loader thread and arrives via `LoadHandle`
//! - The terminal is restored even when the loop fails

mod app;
mod ui;

pub use app::{App, LoadPhase, SEARCH_PLACEHOLDER};

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use langcat_runtime::LoadHandle;
use ratatui::{Terminal, backend::CrosstermBackend};

pub struct TuiRenderer {
    tick_rate: Duration,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(50),
        }
    }

    pub fn run(self, app: App, loader: LoadHandle) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, app, loader);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut app: App,
        mut loader: LoadHandle,
    ) -> Result<()> {
        while !app.should_quit() {
            terminal.draw(|f| ui::draw(f, &mut app))?;

            let timeout = app.next_timeout(Instant::now(), self.tick_rate);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => app.handle_key(key, Instant::now()),
                    Event::Mouse(mouse) => app.handle_mouse(mouse),
                    _ => {}
                }
            }

            if let Some(load_event) = loader.try_recv() {
                app.on_load(load_event);
            }

            app.on_tick(Instant::now());
        }

        Ok(())
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use langcat_runtime::LoadEvent;
    use langcat_types::{Catalog, Item};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 36)).unwrap();
        terminal.draw(|f| ui::draw(f, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn loaded() -> App {
        let mut app = App::new(9, Duration::from_millis(300), "data.json");
        app.on_load(LoadEvent::Loaded(Catalog::new(vec![
            Item::new("Go", "systems", 10.0).with_release_year(2009),
            Item::new("Rust", "safe systems", 20.0)
                .with_release_year(2015)
                .with_link("https://www.rust-lang.org"),
        ])));
        app
    }

    #[test]
    fn test_draw_loading_state() {
        let mut app = App::new(9, Duration::from_millis(300), "data.json");
        let text = draw(&mut app);
        assert!(text.contains("Languages (loading)"));
        assert!(text.contains("Loading catalog from data.json"));
        assert!(text.contains(SEARCH_PLACEHOLDER));
    }

    #[test]
    fn test_draw_cards_and_chart() {
        let mut app = loaded();
        let text = draw(&mut app);
        assert!(text.contains("Languages (2)"));
        assert!(text.contains("Release year: 2015"));
        assert!(text.contains("Popularity"));
        assert!(text.contains("Showing 2 of 2"));
    }

    #[test]
    fn test_draw_empty_results() {
        let mut app = loaded();
        let now = Instant::now();
        for c in "/zzz".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), now);
        }
        app.submit_search();

        let text = draw(&mut app);
        assert!(text.contains("No results found."));
        assert!(!text.contains("Release year"));
    }

    #[test]
    fn test_draw_load_error() {
        let mut app = App::new(9, Duration::from_millis(300), "missing.json");
        app.on_load(LoadEvent::Failed(langcat_runtime::Error::Load(
            "missing.json not found".to_string(),
        )));

        let text = draw(&mut app);
        assert!(text.contains("An error occurred while loading the information."));
        assert!(text.contains("Failed to load missing.json"));
    }

    #[test]
    fn test_draw_modal() {
        let mut app = loaded();
        app.handle_key(
            KeyEvent::new(KeyCode::Right, KeyModifiers::NONE),
            Instant::now(),
        );
        app.open_selected();

        let text = draw(&mut app);
        assert!(text.contains("Official documentation: https://www.rust-lang.org"));
        assert!(text.contains("[x]"));
    }
}
