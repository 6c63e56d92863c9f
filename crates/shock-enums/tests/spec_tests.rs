use super::*;

fn list(items: Vec<SpecItem>) -> ConstantSpecInput {
    ConstantSpecInput::List(items)
}

#[test]
fn test_bare_name_uses_counter_and_normalized_name() {
    let spec = ConstantSpecInput::from("SOME_CONST").resolve(7).expect("valid");
    assert_eq!(
        spec,
        ConstantSpec {
            property_key: "SOME_CONST".into(),
            display_name: "someConst".into(),
            value: 7,
        }
    );
}

#[test]
fn test_name_override() {
    let spec = ConstantSpecInput::from(("RED", "crimson")).resolve(0).expect("valid");
    assert_eq!(spec.display_name, "crimson");
    assert_eq!(spec.value, 0);
}

#[test]
fn test_value_override() {
    let spec = ConstantSpecInput::from(("RED", 9_i64)).resolve(0).expect("valid");
    assert_eq!(spec.display_name, "red");
    assert_eq!(spec.value, 9);
}

#[test]
fn test_overrides_in_either_order() {
    let a = ConstantSpecInput::from(("RED", "r", 4_i64)).resolve(0).expect("valid");
    let b = ConstantSpecInput::from(("RED", 4_i64, "r")).resolve(0).expect("valid");
    assert_eq!(a, b);
    assert_eq!(a.display_name, "r");
    assert_eq!(a.value, 4);
}

#[test]
fn test_nested_overrides() {
    let input = list(vec!["RED".into(), vec![SpecItem::from(4), "r".into()].into()]);
    let spec = input.resolve(0).expect("valid");
    assert_eq!(spec.display_name, "r");
    assert_eq!(spec.value, 4);
}

#[test]
fn test_first_override_of_each_kind_wins() {
    let input = list(vec![
        "RED".into(),
        "first".into(),
        SpecItem::from(1),
        "second".into(),
        SpecItem::from(2),
    ]);
    let spec = input.resolve(0).expect("valid");
    assert_eq!(spec.display_name, "first");
    assert_eq!(spec.value, 1);
}

#[test]
fn test_list_with_only_key() {
    let spec = list(vec!["GREEN_LIGHT".into()]).resolve(3).expect("valid");
    assert_eq!(spec.display_name, "greenLight");
    assert_eq!(spec.value, 3);
}

#[test]
fn test_invalid_shapes() {
    assert!(list(vec![]).resolve(0).is_none());
    assert!(list(vec![SpecItem::from(1), "x".into()]).resolve(0).is_none());
    assert!(ConstantSpecInput::Other(serde_json::json!(true)).resolve(0).is_none());
}

#[test]
fn test_deserialize_declarations_from_json() {
    let specs: Vec<ConstantSpecInput> =
        serde_json::from_str(r#"["A", ["B", "bee"], ["C", 10], ["D", ["dee", 20]], 3.5]"#)
            .expect("valid json");
    let resolved: Vec<_> = specs.iter().map(|s| s.resolve(0)).collect();
    assert_eq!(resolved[1].as_ref().map(|s| s.display_name.as_str()), Some("bee"));
    assert_eq!(resolved[2].as_ref().map(|s| s.value), Some(10));
    assert_eq!(resolved[3].as_ref().map(|s| (s.display_name.as_str(), s.value)), Some(("dee", 20)));
    assert!(resolved[4].is_none());
}

#[test]
fn test_integral_float_overrides_are_used() {
    let specs: Vec<ConstantSpecInput> =
        serde_json::from_str(r#"[["A", 3.0], ["B", 1e3, "bee"], ["C", -2.0]]"#)
            .expect("valid json");
    let values: Vec<Option<i64>> = specs.iter().map(|s| s.resolve(99).map(|c| c.value)).collect();
    assert_eq!(values, vec![Some(3), Some(1000), Some(-2)]);
    assert_eq!(specs[1].resolve(0).expect("valid").display_name, "bee");
}

#[test]
fn test_fractional_override_is_invalid() {
    let specs: Vec<ConstantSpecInput> =
        serde_json::from_str(r#"[["A", 2.5], ["B", 1e30], ["C", 0.5, 7]]"#).expect("valid json");
    for spec in &specs {
        assert!(spec.resolve(0).is_none(), "{spec:?}");
    }
    assert!(list(vec!["D".into(), SpecItem::from(f64::NAN)]).resolve(0).is_none());
}

#[test]
fn test_repeated_display_name_is_rejected() {
    let inputs: Vec<ConstantSpecInput> = vec![("A", "x").into(), "B".into(), ("C", "x").into()];
    let err = resolve_declarations("Dup", inputs, 0, |v| v + 1).unwrap_err();
    assert!(matches!(err, ValueError::InvalidConstantSpec { index: 2, .. }));

    // A derived name colliding with an explicit one counts too.
    let inputs: Vec<ConstantSpecInput> = vec![("A", "b").into(), "B".into()];
    assert!(resolve_declarations("Dup", inputs, 0, |v| v + 1).is_err());
}

#[test]
fn test_resolve_declarations_advances_counter() {
    let resolved = resolve_declarations("T", ["A", "B"], 0, |v| v + 1).expect("valid");
    assert_eq!(resolved.iter().map(|s| s.value).collect::<Vec<_>>(), vec![0, 1]);

    let inputs: Vec<ConstantSpecInput> = vec!["A".into(), ("B", 10_i64).into(), "C".into()];
    let resolved = resolve_declarations("T", inputs, 1, |v| v * 2).expect("valid");
    assert_eq!(resolved.iter().map(|s| s.value).collect::<Vec<_>>(), vec![1, 10, 20]);
}

#[test]
fn test_resolve_declarations_reports_position() {
    let inputs = vec![ConstantSpecInput::from("A"), list(vec![])];
    let err = resolve_declarations("Broken", inputs, 0, |v| v + 1).unwrap_err();
    match err {
        ValueError::InvalidConstantSpec { type_name, index } => {
            assert_eq!(type_name, "Broken");
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
