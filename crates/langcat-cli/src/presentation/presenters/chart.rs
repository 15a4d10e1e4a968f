use langcat_engine::{ChartSeries, Orientation};

use crate::presentation::view_models::{BarViewModel, ChartViewModel};

pub fn present_chart(series: &ChartSeries) -> ChartViewModel {
    let bars = series
        .points()
        .map(|(label, value)| BarViewModel {
            label: label.to_string(),
            value,
            value_text: format!("{}", value),
        })
        .collect();

    ChartViewModel {
        title: "Popularity".to_string(),
        bars,
        axis_max: series.axis_max(),
        horizontal: series.config.orientation == Orientation::Horizontal,
        show_legend: series.config.show_legend,
        legend: series.config.dataset_label.clone(),
    }
}
