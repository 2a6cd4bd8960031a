/// Builds a [`Value`](crate::Value) from JSON-like literal syntax.
///
/// ```rust
/// use convkit::value;
///
/// let v = value!({
///     "name": "Alice",
///     "tags": ["a", "b"],
///     "extra": null
/// });
/// assert!(v.is_object());
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything else goes through `From`
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
