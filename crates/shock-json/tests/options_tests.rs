use super::*;

#[test]
fn test_default_is_compact() {
    let options = FormatOptions::default();
    assert!(options.is_compact());
    assert_eq!(options.indent_unit(), "");
    assert_eq!(options, FormatOptions::compact());
}

#[test]
fn test_spaces_are_capped() {
    assert_eq!(FormatOptions::spaces(2).indent_unit(), "  ");
    assert_eq!(FormatOptions::spaces(40).indent_unit(), " ".repeat(10));
}

#[test]
fn test_text_is_truncated() {
    assert_eq!(FormatOptions::text("\t").indent_unit(), "\t");
    assert_eq!(
        FormatOptions::text("--------------------").indent_unit(),
        "----------"
    );
    assert!(FormatOptions::text("").is_compact());
}

#[test]
fn test_deserialize_number_or_string() {
    let spaces: FormatOptions = serde_json::from_str(r#"{"indent": 4}"#).unwrap();
    assert_eq!(spaces, FormatOptions::spaces(4));

    let tab: FormatOptions = serde_json::from_str(r#"{"indent": "\t"}"#).unwrap();
    assert_eq!(tab, FormatOptions::text("\t"));

    let missing: FormatOptions = serde_json::from_str("{}").unwrap();
    assert!(missing.is_compact());
}

#[test]
fn test_deserialize_rejects_bad_config() {
    assert!(serde_json::from_str::<FormatOptions>(r#"{"indent": -1}"#).is_err());
    assert!(serde_json::from_str::<FormatOptions>(r#"{"indent": true}"#).is_err());
    assert!(serde_json::from_str::<FormatOptions>(r#"{"indnet": 2}"#).is_err());
}
