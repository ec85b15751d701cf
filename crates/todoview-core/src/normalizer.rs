//! Normalizer — turns an untrusted JSON payload into a list of [`Todo`] records.
//!
//! Two top-level shapes are accepted: a bare array, or an object whose
//! `todos` key holds an array. Anything else is a [`ShapeError`] for the
//! whole payload. Inside the array, non-object elements are dropped and
//! malformed fields fall back to defaults, so a single bad record never
//! fails the call.
//!
//! # Field coercion
//!
//! | Field       | Rule |
//! |-------------|------|
//! | `id`        | string as-is, number as JSON text, bool as `True`/`False`, null/absent → [`MISSING_ID`], array/object as compact JSON |
//! | `task`      | string as-is, anything else → `""` |
//! | `completed` | [`truthy`] table, absent → `false` |

use crate::error::{RefreshError, ShapeError};
use crate::types::{Todo, MISSING_ID};
use serde_json::{Map, Value};

/// Name of the JSON tag of a value, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl std::fmt::Display for JsonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonKind::Null => write!(f, "null"),
            JsonKind::Bool => write!(f, "boolean"),
            JsonKind::Number => write!(f, "number"),
            JsonKind::String => write!(f, "string"),
            JsonKind::Array => write!(f, "array"),
            JsonKind::Object => write!(f, "object"),
        }
    }
}

/// Normalise a parsed payload into todos, preserving input order.
pub fn normalize(parsed: &Value) -> Result<Vec<Todo>, ShapeError> {
    let items = todo_list(parsed)?;

    let todos: Vec<Todo> = items
        .iter()
        .filter_map(|item| item.as_object().map(todo_from_object))
        .collect();

    tracing::debug!(
        kept = todos.len(),
        skipped = items.len() - todos.len(),
        "normalized todo payload"
    );
    Ok(todos)
}

/// Decode a response body into a JSON value. A leading byte-order mark is
/// ignored. Numbers keep their literal digits, so oversized ids survive.
pub fn parse_payload(text: &str) -> Result<Value, RefreshError> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    Ok(serde_json::from_str(text)?)
}

/// [`parse_payload`] followed by [`normalize`].
pub fn normalize_str(text: &str) -> Result<Vec<Todo>, RefreshError> {
    Ok(normalize(&parse_payload(text)?)?)
}

/// Locate the working list inside the payload.
fn todo_list(parsed: &Value) -> Result<&Vec<Value>, ShapeError> {
    match parsed {
        Value::Object(map) => {
            let todos = map
                .get("todos")
                .ok_or(ShapeError::TopLevel(JsonKind::Object))?;
            todos
                .as_array()
                .ok_or(ShapeError::TodosField(JsonKind::of(todos)))
        }
        Value::Array(items) => Ok(items),
        other => Err(ShapeError::TopLevel(JsonKind::of(other))),
    }
}

fn todo_from_object(obj: &Map<String, Value>) -> Todo {
    Todo {
        id: id_text(obj.get("id")),
        task: match obj.get("task") {
            Some(Value::String(s)) => s.clone(),
            _ => String::new(),
        },
        completed: obj.get("completed").is_some_and(truthy),
    }
}

fn id_text(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => MISSING_ID.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(true)) => "True".to_string(),
        Some(Value::Bool(false)) => "False".to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Boolean coercion for `completed`.
///
/// | Tag    | Result |
/// |--------|--------|
/// | Bool   | itself |
/// | Number | nonzero |
/// | String | non-empty |
/// | Null   | false |
/// | Array / Object | true |
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n
            .as_f64()
            .map_or_else(|| has_nonzero_digit(&n.to_string()), |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Zero test on the literal digits of a number too large for `f64`.
/// Only the mantissa counts; `0e999` is still zero.
fn has_nonzero_digit(number: &str) -> bool {
    number
        .split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn mixed_array_drops_non_objects() {
        let input = json!([
            {"id": 1, "task": "Buy milk", "completed": true},
            {"id": "x2", "task": "Clean"},
            "not-an-object",
            {}
        ]);
        assert_eq!(
            normalize(&input).unwrap(),
            vec![
                Todo::new("1", "Buy milk", true),
                Todo::new("x2", "Clean", false),
                Todo::new(MISSING_ID, "", false),
            ]
        );
    }

    #[test]
    fn wrapped_list_matches_bare_list() {
        let items = json!([{"id": 3, "task": "a"}, 4, {"id": 5}]);
        let wrapped = json!({ "todos": items.clone(), "count": 2 });
        assert_eq!(normalize(&wrapped).unwrap(), normalize(&items).unwrap());
    }

    #[test]
    fn empty_wrapped_list_is_ok() {
        assert_eq!(normalize(&json!({"todos": []})).unwrap(), vec![]);
    }

    #[rstest]
    #[case::number(json!(3), JsonKind::Number)]
    #[case::string(json!("todos"), JsonKind::String)]
    #[case::boolean(json!(true), JsonKind::Bool)]
    #[case::null(json!(null), JsonKind::Null)]
    #[case::object_without_todos(json!({"count": 3}), JsonKind::Object)]
    fn top_level_shape_errors(#[case] input: Value, #[case] kind: JsonKind) {
        assert_eq!(normalize(&input), Err(ShapeError::TopLevel(kind)));
    }

    #[rstest]
    #[case::object(json!({"todos": {"id": 1}}), JsonKind::Object)]
    #[case::null(json!({"todos": null}), JsonKind::Null)]
    #[case::string(json!({"todos": "[]"}), JsonKind::String)]
    fn todos_field_must_be_array(#[case] input: Value, #[case] kind: JsonKind) {
        assert_eq!(normalize(&input), Err(ShapeError::TodosField(kind)));
    }

    #[rstest]
    #[case::int(json!(1), "1")]
    #[case::negative(json!(-12), "-12")]
    #[case::float(json!(1.5), "1.5")]
    #[case::string(json!("abc"), "abc")]
    #[case::empty_string(json!(""), "")]
    #[case::bool_true(json!(true), "True")]
    #[case::bool_false(json!(false), "False")]
    #[case::null(json!(null), MISSING_ID)]
    #[case::array(json!([1, 2]), "[1,2]")]
    fn id_conversion(#[case] raw: Value, #[case] expected: &str) {
        let todos = normalize(&json!([{ "id": raw }])).unwrap();
        assert_eq!(todos[0].id, expected);
    }

    #[rstest]
    #[case::absent(json!({}), "")]
    #[case::null(json!({"task": null}), "")]
    #[case::number(json!({"task": 42}), "")]
    #[case::object(json!({"task": {"title": "x"}}), "")]
    #[case::string(json!({"task": "Walk dog"}), "Walk dog")]
    fn task_defaults_when_not_string(#[case] raw: Value, #[case] expected: &str) {
        let todos = normalize(&json!([raw])).unwrap();
        assert_eq!(todos[0].task, expected);
    }

    #[rstest]
    #[case::absent(json!({}), false)]
    #[case::one(json!({"completed": 1}), true)]
    #[case::zero(json!({"completed": 0}), false)]
    #[case::float_zero(json!({"completed": 0.0}), false)]
    #[case::null(json!({"completed": null}), false)]
    #[case::empty_string(json!({"completed": ""}), false)]
    #[case::string(json!({"completed": "no"}), true)]
    #[case::empty_array(json!({"completed": []}), true)]
    #[case::object(json!({"completed": {}}), true)]
    #[case::bool_false(json!({"completed": false}), false)]
    fn completed_truthiness(#[case] raw: Value, #[case] expected: bool) {
        let todos = normalize(&json!([raw])).unwrap();
        assert_eq!(todos[0].completed, expected);
    }

    #[rstest]
    #[case::past_u64("18446744073709551616", "18446744073709551616")]
    #[case::past_i64("-9223372036854775809", "-9223372036854775809")]
    #[case::huge("12345678901234567890123", "12345678901234567890123")]
    #[case::decimal_text("1.0", "1.0")]
    fn oversized_ids_keep_their_digits(#[case] raw: &str, #[case] expected: &str) {
        let todos = normalize_str(&format!("[{{\"id\": {raw}}}]")).unwrap();
        assert_eq!(todos[0].id, expected);
    }

    #[rstest]
    #[case::overflow("1e400", true)]
    #[case::negative_overflow("-1e400", true)]
    #[case::huge_int("18446744073709551616", true)]
    #[case::zero_mantissa("0e400", false)]
    #[case::negative_zero("-0.0", false)]
    fn out_of_range_completed_does_not_fail_the_list(#[case] raw: &str, #[case] expected: bool) {
        let text = format!("[{{\"id\": 1, \"completed\": {raw}}}, {{\"id\": 2}}]");
        let todos = normalize_str(&text).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].completed, expected);
    }

    #[test]
    fn parse_payload_strips_bom() {
        assert_eq!(parse_payload("\u{FEFF}[1]").unwrap(), json!([1]));
    }

    #[test]
    fn normalize_str_rejects_bad_json() {
        let err = normalize_str("[{\"id\": 1,").unwrap_err();
        assert_eq!(err.kind(), "decode");
    }

    #[test]
    fn normalize_str_tolerates_bom() {
        let todos = normalize_str("\u{FEFF}[{\"id\": 9}]").unwrap();
        assert_eq!(todos, vec![Todo::new("9", "", false)]);
    }

    #[test]
    fn normalize_str_surfaces_shape_errors() {
        assert_eq!(
            normalize_str("{\"count\": 3}"),
            Err(RefreshError::Shape(ShapeError::TopLevel(JsonKind::Object)))
        );
    }
}
