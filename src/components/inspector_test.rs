use serde_json::json;

use super::*;

#[test]
fn strings_are_quoted() {
	assert_eq!(scalar_text(&json!("STRING")), "\"STRING\"");
}

#[test]
fn strings_are_escaped_like_json() {
	assert_eq!(scalar_text(&json!("say \"hi\"")), r#""say \"hi\"""#);
	assert_eq!(scalar_text(&json!("a\\b")), r#""a\\b""#);
}

#[test]
fn other_scalars_print_as_json() {
	assert_eq!(scalar_text(&json!(3)), "3");
	assert_eq!(scalar_text(&json!(0.5)), "0.5");
	assert_eq!(scalar_text(&json!(true)), "true");
	assert_eq!(scalar_text(&Value::Null), "null");
}

#[test]
fn size_label_pluralizes() {
	assert_eq!(size_label(0), "0 items");
	assert_eq!(size_label(1), "1 item");
	assert_eq!(size_label(4), "4 items");
}
