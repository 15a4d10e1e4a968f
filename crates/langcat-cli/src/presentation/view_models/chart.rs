use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarViewModel {
    pub label: String,
    pub value: f64,
    pub value_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartViewModel {
    pub title: String,
    pub bars: Vec<BarViewModel>,
    pub axis_max: f64,
    pub horizontal: bool,
    pub show_legend: bool,
    pub legend: String,
}
