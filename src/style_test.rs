use super::*;

#[test]
fn px_formats_whole_and_fractional() {
    assert_eq!(px(300.0), "300px");
    assert_eq!(px(12.5), "12.5px");
}

#[test]
fn set_replaces_previous_value() {
    let mut s = StyleMap::new();
    s.set("height", "10px").set("height", "auto");
    assert_eq!(s.get("height"), Some("auto"));
    assert_eq!(s.len(), 1);
}

#[test]
fn set_px_appends_unit() {
    let mut s = StyleMap::new();
    s.set_px("width", 42.0);
    assert_eq!(s.get("width"), Some("42px"));
}

#[test]
fn serializes_as_plain_object() {
    let s: StyleMap = [("transform", "translate(1px, 2px)")].into_iter().collect();
    assert_eq!(serde_json::to_string(&s).unwrap(), r#"{"transform":"translate(1px, 2px)"}"#);
}

#[test]
fn empty_map() {
    let s = StyleMap::new();
    assert!(s.is_empty());
    assert_eq!(s.iter().count(), 0);
}
