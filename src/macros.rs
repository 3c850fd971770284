/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use lightconf::{lightconf, parse, Value};
///
/// let expected = lightconf!({
///     "rack": { "size": 4, "label": "left" }
/// });
/// assert_eq!(Value::from(parse("rack { size: 4; label: left }")), expected);
/// ```
#[macro_export]
macro_rules! lightconf {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Boolean(true)
    };

    (false) => {
        $crate::Value::Boolean(false)
    };

    ({}) => {
        $crate::Value::Mapping($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut mapping = $crate::Map::new();
        $(
            mapping.insert($key.to_string(), $crate::lightconf!($value));
        )*
        $crate::Value::Mapping(mapping)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Value};

    #[test]
    fn test_lightconf_macro_scalars() {
        assert_eq!(lightconf!(null), Value::Null);
        assert_eq!(lightconf!(true), Value::Boolean(true));
        assert_eq!(lightconf!(42), Value::Integer(42));
        assert_eq!(lightconf!(3.5), Value::Float(3.5));
        assert_eq!(lightconf!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_lightconf_macro_mappings() {
        assert_eq!(lightconf!({}), Value::Mapping(Map::new()));

        let value = lightconf!({
            "name": "wash",
            "nested": { "level": 0.5, "on": false },
        });

        let map = value.as_mapping().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("name"), Some(&Value::String("wash".to_string())));
        assert_eq!(
            map.get("nested").and_then(|v| v.as_mapping()).and_then(|m| m.get("level")),
            Some(&Value::Float(0.5))
        );
    }
}
