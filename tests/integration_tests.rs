use pattern_demos::{DemoError, DemoKind, DemoRunner, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn run(config: TomlConfig, kind: DemoKind) -> String {
    let mut runner = DemoRunner::new(config, Vec::new());
    runner.run(kind).unwrap();
    String::from_utf8(runner.into_inner()).unwrap()
}

#[test]
fn test_end_to_end_default_demo() {
    let output = run(TomlConfig::default(), DemoKind::All);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "Price for item list: [soap] is Rs.66");
    assert_eq!(lines[1], "Price for item list: [soap, handwash, perfume] is Rs.451");
    assert_eq!(
        lines[2],
        "Price for item list: [soap, handwash, perfume, watch] is Rs.3201"
    );
    assert_eq!(lines[3], "----VEG MENU----");
    assert_eq!(lines[4], "Breakfast - Tea, Samosa, Sandwich");
    assert_eq!(lines[8], "----NON-VEG MENU----");
    assert_eq!(lines[11], "Dinner - NonVegPizza, MuttonThali, NonVegLasgna");
}

#[test]
fn test_end_to_end_from_config_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[pricing]
markup_percent = 0

[menu.non_veg]
breakfast = ["Keema Pav"]
lunch = ["Biryani"]
dinner = ["Fish Curry", "Rice"]

[[showcase]]
label = "stationery"

[showcase.item]
kind = "box"
items = [
    { kind = "product", name = "pen", retail_price = 10 },
    { kind = "product", name = "notebook", retail_price = 45 },
]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let config = TomlConfig::from_file(temp_file.path()).unwrap();
    let output = run(config, DemoKind::All);

    assert!(output.starts_with("Price for item list: [pen, notebook] is Rs.55\n"));
    assert!(output.contains("Breakfast - Tea, Samosa, Sandwich"));
    assert!(output.contains("Dinner - Fish Curry, Rice"));
}

#[test]
fn test_json_report_shape() {
    let mut runner = DemoRunner::new(TomlConfig::default(), Vec::new());
    runner.write_json_report().unwrap();
    let output = String::from_utf8(runner.into_inner()).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["label"], "soap");
    assert_eq!(entries[0]["selling_price"], 66);
    assert_eq!(entries[1]["names"], serde_json::json!(["soap", "handwash", "perfume"]));
}

#[test]
fn test_missing_config_file() {
    let result = TomlConfig::from_file("/definitely/not/here/pattern-demos.toml");
    assert!(matches!(result, Err(DemoError::IoError(_))));
}
