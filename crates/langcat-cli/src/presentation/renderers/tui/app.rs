//! Interactive viewer state.
//!
//! `App` owns the catalog, the search query and its debouncer, the current
//! card-grid view model and the modal controller. Input handlers mutate
//! this state; `screen()` turns it into a `ScreenViewModel` for drawing.
//! The last drawn layout is kept so mouse clicks can be hit-tested.

use std::time::{Duration, Instant};

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use langcat_engine::{Debouncer, ModalController, ModalInput, popularity_chart, search_catalog};
use langcat_runtime::{Config, LoadEvent};
use langcat_types::{Catalog, Item};
use ratatui::layout::Position;

use crate::presentation::presenters::{
    present_cards, present_chart, present_load_error, present_modal, present_skeleton,
};
use crate::presentation::view_models::{
    CardGridViewModel, ChartViewModel, Focus, ScreenViewModel, SearchBarViewModel, StatusBarViewModel,
    StatusLevel,
};
use crate::presentation::views::tui::{GridLayout, ModalLayout, SearchBarLayout};

pub const SEARCH_PLACEHOLDER: &str = "Type to filter by name or description";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Default)]
struct HitAreas {
    grid: Option<GridLayout>,
    search: Option<SearchBarLayout>,
    modal: Option<ModalLayout>,
}

pub struct App {
    catalog: Catalog,
    phase: LoadPhase,
    source: String,
    query: String,
    search: Debouncer<String>,
    grid: CardGridViewModel,
    chart: Option<ChartViewModel>,
    modal: ModalController,
    focus: Focus,
    selected: usize,
    first_row: usize,
    columns: usize,
    show_chart: bool,
    should_quit: bool,
    ticks: u64,
    hit: HitAreas,
}

impl App {
    pub fn new(skeleton_count: usize, search_debounce: Duration, source: impl Into<String>) -> Self {
        Self {
            catalog: Catalog::default(),
            phase: LoadPhase::Loading,
            source: source.into(),
            query: String::new(),
            search: Debouncer::new(search_debounce),
            grid: present_skeleton(skeleton_count),
            chart: None,
            modal: ModalController::new(),
            focus: Focus::Grid,
            selected: 0,
            first_row: 0,
            columns: 1,
            show_chart: true,
            should_quit: false,
            ticks: 0,
            hit: HitAreas::default(),
        }
    }

    pub fn from_config(config: &Config, source: impl Into<String>) -> Self {
        Self::new(config.skeleton_count, config.search_debounce(), source)
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn grid(&self) -> &CardGridViewModel {
        &self.grid
    }

    pub fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn first_row(&self) -> usize {
        self.first_row
    }

    pub fn show_chart(&self) -> bool {
        self.show_chart
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Alternates every few ticks; drives the skeleton pulse
    pub fn pulse(&self) -> bool {
        (self.ticks / 4) % 2 == 0
    }

    /// How long the event loop may block before the next `on_tick`
    pub fn next_timeout(&self, now: Instant, tick_rate: Duration) -> Duration {
        match self.search.time_until_due(now) {
            Some(due) => due.min(tick_rate),
            None => tick_rate,
        }
    }

    // ---- load ----

    pub fn on_load(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Loaded(catalog) => {
                tracing::info!(items = catalog.len(), source = %self.source, "catalog ready");
                self.catalog = catalog;
                self.phase = LoadPhase::Ready;
                self.chart = Some(present_chart(&popularity_chart(&self.catalog)));
                let items = self.catalog.items().to_vec();
                self.render_items(&items);
            }
            LoadEvent::Failed(err) => {
                tracing::error!(error = %err, source = %self.source, "catalog load failed");
                self.phase = LoadPhase::Failed;
                self.grid = present_load_error();
            }
        }
    }

    // ---- search ----

    pub fn on_tick(&mut self, now: Instant) {
        self.ticks = self.ticks.wrapping_add(1);
        if let Some(query) = self.search.poll(now) {
            self.run_search(&query);
        }
    }

    fn edit_query(&mut self, now: Instant) {
        self.search.trigger(self.query.clone(), now);
    }

    /// Run the current query immediately, dropping any pending debounce
    pub fn submit_search(&mut self) {
        self.search.cancel();
        let query = self.query.clone();
        self.run_search(&query);
    }

    /// Empty the query and show the full catalog again
    pub fn clear_search(&mut self) {
        self.query.clear();
        self.search.cancel();
        let items = self.catalog.items().to_vec();
        self.render_items(&items);
        self.focus = Focus::Grid;
    }

    fn run_search(&mut self, query: &str) {
        let items = search_catalog(query, &self.catalog);
        tracing::debug!(query, matches = items.len(), "search");
        self.render_items(&items);
    }

    /// Replace the grid with cards for `items`
    fn render_items(&mut self, items: &[Item]) {
        self.grid = present_cards(items);
        self.selected = 0;
        self.first_row = 0;
    }

    // ---- selection & modal ----

    fn card_count(&self) -> usize {
        self.grid.cards().len()
    }

    fn move_selection(&mut self, delta: isize) {
        let count = self.card_count();
        if count == 0 {
            return;
        }
        let target = self.selected as isize + delta;
        if (0..count as isize).contains(&target) {
            self.selected = target as usize;
        }
    }

    pub fn open_selected(&mut self) {
        if let Some(card) = self.grid.cards().get(self.selected) {
            self.modal.open(card.item.clone());
        }
    }

    /// Keep the selected card inside the visible rows
    pub fn sync_viewport(&mut self, columns: usize, rows_visible: usize) {
        self.columns = columns.max(1);
        let rows_visible = rows_visible.max(1);
        let row = self.selected / self.columns;
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + rows_visible {
            self.first_row = row + 1 - rows_visible;
        }
    }

    pub fn record_layout(
        &mut self,
        grid: GridLayout,
        search: SearchBarLayout,
        modal: Option<ModalLayout>,
    ) {
        self.hit = HitAreas {
            grid: Some(grid),
            search: Some(search),
            modal,
        };
    }

    // ---- input ----

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('u') if !self.modal.is_visible() => self.clear_search(),
                _ => {}
            }
            return;
        }

        if self.modal.is_visible() {
            match key.code {
                KeyCode::Esc => {
                    self.modal.handle(ModalInput::Escape);
                }
                KeyCode::Char('x') => {
                    self.modal.handle(ModalInput::CloseButton);
                }
                _ => {}
            }
            return;
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key, now),
            Focus::Grid => self.handle_grid_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char(c) => {
                self.query.push(c);
                self.edit_query(now);
            }
            KeyCode::Backspace => {
                if self.query.pop().is_some() {
                    self.edit_query(now);
                }
            }
            KeyCode::Enter => self.submit_search(),
            KeyCode::Esc | KeyCode::Tab | KeyCode::Down => self.focus = Focus::Grid,
            _ => {}
        }
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        let columns = self.columns as isize;
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('/') | KeyCode::Tab => self.focus = Focus::Search,
            KeyCode::Char('c') => self.show_chart = !self.show_chart,
            KeyCode::Right | KeyCode::Char('l') => self.move_selection(1),
            KeyCode::Left | KeyCode::Char('h') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(columns),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-columns),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.card_count().saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.open_selected(),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {}
            MouseEventKind::ScrollDown if !self.modal.is_visible() => {
                self.move_selection(self.columns as isize);
                return;
            }
            MouseEventKind::ScrollUp if !self.modal.is_visible() => {
                self.move_selection(-(self.columns as isize));
                return;
            }
            _ => return,
        }

        if self.modal.is_visible() {
            let input = match &self.hit.modal {
                Some(layout) if layout.on_close_button(column, row) => ModalInput::CloseButton,
                Some(layout) if layout.in_content(column, row) => ModalInput::ContentClick,
                _ => ModalInput::BackdropClick,
            };
            self.modal.handle(input);
            return;
        }

        let position = Position::new(column, row);
        if let Some(search) = &self.hit.search {
            if search.clear_button.contains(position) {
                self.clear_search();
                return;
            }
            if search.input.contains(position) {
                self.focus = Focus::Search;
                return;
            }
        }

        let tile = self
            .hit
            .grid
            .as_ref()
            .and_then(|grid| grid.tile_at(column, row));
        if let Some(index) = tile
            && index < self.card_count()
        {
            self.focus = Focus::Grid;
            self.selected = index;
            self.open_selected();
        }
    }

    // ---- view model ----

    fn status_bar(&self) -> StatusBarViewModel {
        let (status_message, status_level) = match self.phase {
            LoadPhase::Loading => (
                format!("Loading catalog from {}…", self.source),
                StatusLevel::Info,
            ),
            LoadPhase::Failed => (format!("Failed to load {}", self.source), StatusLevel::Error),
            LoadPhase::Ready if self.search.is_pending() => {
                ("Searching…".to_string(), StatusLevel::Info)
            }
            LoadPhase::Ready if !self.query.is_empty() && self.card_count() == 0 => (
                format!("No match for \"{}\"", self.query),
                StatusLevel::Warning,
            ),
            LoadPhase::Ready if self.query.is_empty() => (
                format!("Loaded {} languages", self.catalog.len()),
                StatusLevel::Success,
            ),
            LoadPhase::Ready => (format!("Filter: \"{}\"", self.query), StatusLevel::Info),
        };

        StatusBarViewModel {
            shown: self.card_count(),
            total: self.catalog.len(),
            status_message,
            status_level,
        }
    }

    pub fn screen(&self) -> ScreenViewModel {
        let selected = match &self.grid {
            CardGridViewModel::Cards { .. } if self.focus == Focus::Grid => Some(self.selected),
            _ => None,
        };

        ScreenViewModel {
            search_bar: SearchBarViewModel {
                query: self.query.clone(),
                placeholder: SEARCH_PLACEHOLDER.to_string(),
                focused: self.focus == Focus::Search,
                pending: self.search.is_pending(),
            },
            grid: self.grid.clone(),
            selected,
            chart: if self.show_chart {
                self.chart.clone()
            } else {
                None
            },
            modal: self.modal.item().map(present_modal),
            status_bar: self.status_bar(),
        }
    }
}
