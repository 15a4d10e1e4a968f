use langcat_testing::TestWorld;
use langcat_testing::assertions::assert_bars_descending;

#[test]
fn test_chart_json_sorted_by_popularity_with_stable_ties() {
    let world = TestWorld::new();
    let result = world.run(&["--format", "json", "chart"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    let json = result.json().unwrap();
    assert_bars_descending(&json).unwrap();

    let labels: Vec<&str> = json["bars"]
        .as_array()
        .unwrap()
        .iter()
        .map(|bar| bar["label"].as_str().unwrap())
        .collect();
    // Java and Go tie; Java comes first in the catalog
    assert_eq!(labels, vec!["JavaScript", "Python", "Java", "Go"]);
    assert_eq!(json["horizontal"], true);
    assert_eq!(json["show_legend"], false);
    assert_eq!(json["legend"], "Popularity (%)");
}

#[test]
fn test_chart_ignores_search_order_of_cards() {
    let world = TestWorld::new();

    let chart = world.run(&["--format", "csv", "chart"]).unwrap();
    let list = world.run(&["--format", "json", "list"]).unwrap();

    assert!(chart.success());
    let lines: Vec<&str> = chart.stdout.lines().collect();
    assert_eq!(lines[0], "label,value");
    assert_eq!(lines[1], "JavaScript,30.2");

    // Cards keep insertion order
    assert_eq!(list.json().unwrap()[0]["name"], "Python");
}

#[test]
fn test_chart_plain_fits_width() {
    let world = TestWorld::new();
    let result = world.run(&["chart", "--width", "40"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines[0], "Popularity");
    assert!(lines[1].starts_with("JavaScript │"));
    assert!(lines[1].ends_with("30.2"));
    for line in &lines[1..] {
        assert_eq!(line.chars().count(), 40, "line: {:?}", line);
    }
}
