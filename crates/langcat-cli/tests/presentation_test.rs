use langcat::presentation::presenters::{EMPTY_MESSAGE, present_cards, present_chart};
use langcat::presentation::view_models::CardGridViewModel;
use langcat_engine::{popularity_chart, search_catalog};
use langcat_testing::fixtures::sample_catalog;

#[test]
fn test_search_then_present_keeps_catalog_order() {
    let catalog = sample_catalog();
    let grid = present_cards(&search_catalog("system", &catalog));

    let titles: Vec<&str> = grid.cards().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Go", "Rust"]);
}

#[test]
fn test_presenting_no_matches_yields_message() {
    let catalog = sample_catalog();
    let grid = present_cards(&search_catalog("haskell", &catalog));

    assert_eq!(
        grid,
        CardGridViewModel::Empty {
            message: EMPTY_MESSAGE.to_string()
        }
    );
}

#[test]
fn test_chart_is_built_from_full_catalog() {
    let catalog = sample_catalog();
    let chart = present_chart(&popularity_chart(&catalog));

    let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Python", "Rust", "Go"]);
    assert_eq!(chart.axis_max, 30.0);
}
