use convkit::{to_xml, to_yaml, value, ConvertOptions, Map, Number, Value};

#[test]
fn test_value_macro_scalars() {
    assert_eq!(value!(null), Value::Null);
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(-123), Value::Number(Number::Integer(-123)));
    assert_eq!(value!(0.25), Value::Number(Number::Float(0.25)));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_arrays() {
    assert_eq!(value!([]), Value::Array(vec![]));

    let mixed = value!([1, "hello", true, null]);
    assert_eq!(
        mixed,
        Value::Array(vec![
            Value::Number(Number::Integer(1)),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_value_macro_objects_keep_order() {
    assert_eq!(value!({}), Value::Object(Map::new()));

    let obj = value!({ "zeta": 1, "alpha": 2, "mid": 3 });
    let keys: Vec<&str> = obj
        .as_object()
        .map(|o| o.keys().map(String::as_str).collect())
        .unwrap_or_default();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_value_macro_nested() {
    let nested = value!({
        "user": { "id": 123, "name": "Bob", "active": true },
        "tags": ["admin", "developer"],
        "count": 42
    });

    match nested {
        Value::Object(ref obj) => {
            assert_eq!(obj.len(), 3);

            if let Some(Value::Object(user)) = obj.get("user") {
                assert_eq!(user.get("id"), Some(&Value::Number(Number::Integer(123))));
                assert_eq!(user.get("active"), Some(&Value::Bool(true)));
            } else {
                panic!("Expected user to be an object");
            }

            if let Some(Value::Array(tags)) = obj.get("tags") {
                assert_eq!(tags[1], Value::String("developer".to_string()));
            } else {
                panic!("Expected tags to be an array");
            }
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_kind_names() {
    let kinds: Vec<&str> = [
        value!(null),
        value!(false),
        value!(1),
        value!("s"),
        value!([]),
        value!({}),
    ]
    .iter()
    .map(Value::kind_name)
    .collect();
    assert_eq!(kinds, vec!["null", "boolean", "number", "string", "array", "object"]);
}

#[test]
fn test_macro_tree_through_emitters() {
    let v = value!({ "server": { "host": "example.org", "ports": [80, 443] } });
    let opts = ConvertOptions::default();

    assert_eq!(
        to_yaml(&v, &opts),
        "server:\n  host: \"example.org\"\n  ports:\n    - 80\n    - 443\n"
    );
    assert_eq!(
        to_xml(&v, &opts).unwrap(),
        "<server>\n  <host>example.org</host>\n  <ports>\n    <0 type=\"number\">80</0>\n    <1 type=\"number\">443</1>\n  </ports>\n</server>\n"
    );
}

#[test]
fn test_display_is_compact_json() {
    let v = value!({ "a": [1, "x"], "b": null });
    assert_eq!(v.to_string(), r#"{"a":[1,"x"],"b":null}"#);
}
