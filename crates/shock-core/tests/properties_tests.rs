//! End-to-end behaviour of declared types and bounded integers.

use shock_core::{
    ConstantSpecInput, DeclarationMarkers, Int32, Int64, UInt32, UInt64, Value, ValueError,
    define_enum, define_flags_enum, normalize_constant_name, parse, serialize,
};

#[test]
fn test_lookup_round_trips_every_constant() {
    let status = define_enum("Status", ["OK", "NOT_FOUND", "SERVER_ERROR"]).unwrap();
    for constant in status.values() {
        let by_name = status.lookup(constant.name()).unwrap();
        assert!(by_name.equals(&constant).unwrap());
        assert_eq!(status.lookup(constant.number()).unwrap(), constant);
    }
}

#[test]
fn test_numeric_collision_returns_first_declared() {
    let status =
        define_enum("Status", [("OK", 0_i64), ("SUCCESS", 0_i64), ("FAIL", 1_i64)]).unwrap();
    let zero = status.lookup(0).unwrap();
    assert_eq!(zero.name(), "ok");
    assert!(status.lookup("success").unwrap().equals("ok").unwrap());
}

#[test]
fn test_name_normalization() {
    assert_eq!(normalize_constant_name("MAX_RETRY_COUNT"), "maxRetryCount");
    assert_eq!(normalize_constant_name("OK"), "ok");
    assert_eq!(normalize_constant_name("A__B"), "aB");
}

#[test]
fn test_flags_composition() {
    let rgb = define_flags_enum("Rgb", ["RED", "GREEN", "BLUE"]).unwrap();
    let purple = rgb.lookup("blue,red").unwrap();
    assert!(purple.has("red").unwrap());
    assert_eq!(purple.mask(), 5);
    assert_eq!(purple.to_string(), "red,blue");
}

#[test]
fn test_exclude_removes_only_shared_bits() {
    let rgb = define_flags_enum("Rgb", ["RED", "GREEN", "BLUE"]).unwrap();
    let gb = rgb.value_of(0b110);
    assert_eq!(gb.exclude(0b001_u32).unwrap(), gb);
    assert_eq!(gb.exclude(0b011_u32).unwrap(), rgb.value_of(0b100));
}

#[test]
fn test_saturation() {
    assert_eq!(Int32::MAX_VALUE.add(1), Int32::MAX_VALUE);
    assert_eq!(UInt32::new(0).subtract(1), UInt32::new(0));
    assert_eq!(Int64::MIN_VALUE.subtract(1), Int64::MIN_VALUE);
    assert_eq!(UInt64::MAX_VALUE.add(1).value(), u64::MAX);
}

#[test]
fn test_division_by_zero_is_reported() {
    let err = Int64::new(10).divide(0).unwrap_err();
    assert_eq!(err.to_string(), "Division by zero in Int64");
}

#[test]
fn test_serialization_is_idempotent() {
    for value in [
        Value::from(42),
        Value::from("s"),
        Value::from(true),
        Value::Null,
        Value::from(vec![1, 2, 3]),
    ] {
        let once = serialize(&value).unwrap();
        let twice = serialize(&parse(&once).unwrap()).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_enum_serializes_as_code() {
    let color = define_enum("Color", [("RED", 3_i64), ("GREEN", 9_i64)]).unwrap();
    let red = color.constant("RED").unwrap();
    assert_eq!(serialize(&Value::from(&red)).unwrap(), "3");
}

#[test]
fn test_auto_numbering() {
    let plain = define_enum("Plain", ["A", "B", "C"]).unwrap();
    let codes: Vec<i64> = plain.values().map(|v| v.number()).collect();
    assert_eq!(codes, vec![0, 1, 2]);

    let flags = define_flags_enum("Bits", ["A", "B", "C"]).unwrap();
    let masks: Vec<u32> = flags.values().map(|v| v.mask()).collect();
    assert_eq!(masks, vec![1, 2, 4]);
}

#[test]
fn test_declaration_markers() {
    let plain = define_enum("Plain", ["A"]).unwrap();
    let flags = define_flags_enum("Bits", ["A"]).unwrap();
    assert_eq!(plain.markers(), DeclarationMarkers::ENUM);
    assert!(flags.markers().contains(DeclarationMarkers::ENUM | DeclarationMarkers::FLAGS_ENUM));
}

#[test]
fn test_declarations_load_from_json() {
    let inputs: Vec<ConstantSpecInput> =
        serde_json::from_str(r#"["LOW", ["HIGH", 10], ["TOP", "peak"]]"#).unwrap();
    let level = define_enum("Level", inputs).unwrap();
    let codes: Vec<(String, i64)> = level
        .values()
        .map(|v| (v.name().to_string(), v.number()))
        .collect();
    assert_eq!(
        codes,
        vec![
            ("low".to_string(), 0),
            ("high".to_string(), 10),
            ("peak".to_string(), 11)
        ]
    );
}

#[test]
fn test_invalid_declaration_fails_whole_define() {
    let inputs: Vec<ConstantSpecInput> =
        serde_json::from_str(r#"["A", ["B", 5], {"bad": true}]"#).unwrap();
    let err = define_enum("Broken", inputs).unwrap_err();
    assert!(matches!(err, ValueError::InvalidConstantSpec { index: 2, .. }));
}
