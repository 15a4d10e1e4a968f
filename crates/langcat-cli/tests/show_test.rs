use langcat_testing::TestWorld;

#[test]
fn test_show_matches_name_case_insensitively() {
    let world = TestWorld::new();
    let result = world.run(&["show", "javascript"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr);
    assert!(result.stdout.starts_with("JavaScript\n"));
    assert!(result.stdout.contains("Image: img/js.png"));
    assert!(result.stdout.contains("Release year: 1995"));
    assert!(
        result
            .stdout
            .contains("Official documentation: https://developer.mozilla.org/docs/Web/JavaScript")
    );
}

#[test]
fn test_show_is_exact_match() {
    let world = TestWorld::new();
    let result = world.run(&["show", "Jav"]).unwrap();

    assert!(!result.success());
    assert!(
        result
            .stderr
            .contains("Error: Language 'Jav' not found in catalog"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn test_show_json() {
    let world = TestWorld::new();
    let result = world.run(&["--format", "json", "show", "Go"]).unwrap();

    assert!(result.success());
    let json = result.json().unwrap();
    assert_eq!(json["name"], "Go");
    assert_eq!(json["link"], "https://go.dev");
    assert_eq!(json["popularity"], 15.5);
}
