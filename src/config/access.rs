//! Recursive get/set over nested tables.
//!
//! Tables are containers; every other value is a leaf. A walk stops at the
//! first leaf it meets, ignoring any keys left over.

use toml::{Table, Value};

/// Finds the value addressed by `keys`, outermost key first.
///
/// Returns `None` when a key is missing at any depth, or when `keys` is empty.
pub fn get_value<'a>(table: &'a Table, keys: &[&str]) -> Option<&'a Value> {
    let (first, rest) = keys.split_first()?;
    let value = table.get(*first)?;

    match value {
        Value::Table(nested) if !rest.is_empty() => get_value(nested, rest),
        _ => Some(value),
    }
}

/// Overwrites the value addressed by `keys` with `new_value`.
///
/// Only existing entries are replaced: a missing key anywhere along the walk
/// returns `false` and leaves the table untouched. When the last key names a
/// table, the whole table is replaced.
pub fn set_value(table: &mut Table, keys: &[&str], new_value: Value) -> bool {
    let Some((first, rest)) = keys.split_first() else {
        return false;
    };
    let Some(slot) = table.get_mut(*first) else {
        return false;
    };

    if !rest.is_empty() {
        if let Value::Table(nested) = &mut *slot {
            return set_value(nested, rest, new_value);
        }
    }

    *slot = new_value;
    true
}

/// Whether `get` hands a found value back instead of the caller's default.
///
/// Zero, `0.0`, `false`, `""`, `"0"` and empty arrays or tables are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Integer(i) => *i != 0,
        Value::Float(f) => *f != 0.0,
        Value::Boolean(b) => *b,
        Value::Array(items) => !items.is_empty(),
        Value::Table(table) => !table.is_empty(),
        Value::Datetime(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(toml_str: &str) -> Table {
        toml::from_str(toml_str).unwrap()
    }

    fn database() -> Table {
        make_table(
            r#"
            encoding = "UTF8"
            ports = [3306, 3307]

            [drivers.mysql]
            drive = "mysql"
            host = "localhost"
            persistent_connection = true
            "#,
        )
    }

    #[test]
    fn test_get_leaf() {
        let table = database();
        assert_eq!(
            get_value(&table, &["encoding"]),
            Some(&Value::String("UTF8".into()))
        );
        assert_eq!(
            get_value(&table, &["drivers", "mysql", "host"]).and_then(Value::as_str),
            Some("localhost")
        );
    }

    #[test]
    fn test_get_container() {
        let table = database();
        let drivers = get_value(&table, &["drivers"]).unwrap();
        assert!(drivers.is_table());
        assert!(drivers["mysql"].is_table());
    }

    #[test]
    fn test_get_stops_at_first_leaf() {
        let table = database();
        assert_eq!(
            get_value(&table, &["encoding", "anything", "else"]).and_then(Value::as_str),
            Some("UTF8")
        );
    }

    #[test]
    fn test_arrays_are_leaves() {
        let table = database();
        let ports = get_value(&table, &["ports", "first"]).unwrap();
        assert_eq!(ports.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_get_missing_key() {
        let table = database();
        assert!(get_value(&table, &["engine"]).is_none());
        assert!(get_value(&table, &["drivers", "oracle", "host"]).is_none());
        assert!(get_value(&table, &[]).is_none());
    }

    #[test]
    fn test_set_leaf() {
        let mut table = database();
        assert!(set_value(
            &mut table,
            &["drivers", "mysql", "host"],
            Value::String("10.0.0.1".into())
        ));
        assert_eq!(table["drivers"]["mysql"]["host"].as_str(), Some("10.0.0.1"));
    }

    #[test]
    fn test_set_replaces_whole_container() {
        let mut table = database();
        assert!(set_value(
            &mut table,
            &["drivers"],
            Value::String("no drivers".into())
        ));
        assert_eq!(table["drivers"].as_str(), Some("no drivers"));
    }

    #[test]
    fn test_set_leaf_ignores_remaining_keys() {
        let mut table = database();
        assert!(set_value(
            &mut table,
            &["encoding", "charset"],
            Value::String("latin1".into())
        ));
        assert_eq!(table["encoding"].as_str(), Some("latin1"));
    }

    #[test]
    fn test_set_never_creates_keys() {
        let mut table = database();
        let before = table.clone();

        assert!(!set_value(
            &mut table,
            &["drivers", "oracle"],
            Value::String("oracle11i".into())
        ));
        assert!(!set_value(
            &mut table,
            &["cache", "redis", "host"],
            Value::String("localhost".into())
        ));
        assert!(!set_value(&mut table, &[], Value::Integer(1)));

        assert_eq!(table, before);
    }

    #[test]
    fn test_truthiness() {
        for falsy in [
            Value::Integer(0),
            Value::Float(0.0),
            Value::Boolean(false),
            Value::String(String::new()),
            Value::String("0".into()),
            Value::Array(Vec::new()),
            Value::Table(Table::new()),
        ] {
            assert!(!is_truthy(&falsy), "{falsy:?} should be falsy");
        }

        for truthy in [
            Value::Integer(-1),
            Value::Float(0.5),
            Value::Boolean(true),
            Value::String("false".into()),
            Value::String("00".into()),
            Value::Array(vec![Value::Integer(0)]),
            Value::Table(make_table("a = 0")),
        ] {
            assert!(is_truthy(&truthy), "{truthy:?} should be truthy");
        }
    }
}
