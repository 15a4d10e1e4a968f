pub mod browse;
pub mod chart;
pub mod list;
pub mod show;
