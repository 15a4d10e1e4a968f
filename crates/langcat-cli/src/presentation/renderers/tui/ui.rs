use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app::App;
use crate::presentation::views::tui::card_grid::{CARD_HEIGHT, columns_for, grid_block};
use crate::presentation::views::tui::{
    CardGridView, ChartView, ModalView, SearchBarView, StatusBarView, layout_grid, layout_modal,
    layout_search_bar,
};

/// Draw one frame and remember where things landed for mouse hit-testing
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Layout: [Search bar | Cards + Chart | Status bar]
    let [search_area, body, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(CARD_HEIGHT + 2),
        Constraint::Length(3),
    ])
    .areas(size);

    let screen = app.screen();

    let (grid_area, chart_area) = match &screen.chart {
        Some(_) => {
            let [grid, chart] =
                Layout::horizontal([Constraint::Percentage(62), Constraint::Percentage(38)])
                    .areas(body);
            (grid, Some(chart))
        }
        None => (body, None),
    };

    let grid_inner = grid_block(&screen.grid).inner(grid_area);
    app.sync_viewport(
        columns_for(grid_inner.width),
        (grid_inner.height / CARD_HEIGHT).max(1) as usize,
    );
    let grid_layout = layout_grid(grid_inner, screen.grid.tile_count(), app.first_row());

    f.render_widget(SearchBarView::new(&screen.search_bar), search_area);

    f.render_widget(
        CardGridView::new(&screen.grid, &grid_layout)
            .selected(screen.selected)
            .pulse(app.pulse()),
        grid_area,
    );

    if let (Some(chart), Some(area)) = (&screen.chart, chart_area) {
        f.render_widget(ChartView::new(chart), area);
    }

    f.render_widget(StatusBarView::new(&screen.status_bar), status_area);

    let modal_layout = screen.modal.as_ref().map(|modal| {
        f.render_widget(ModalView::new(modal), size);
        layout_modal(size)
    });

    app.record_layout(grid_layout, layout_search_bar(search_area), modal_layout);
}
