//! Static payload corpora used across harnesses.

/// The worked example: mixed id types, a missing task, a non-object element,
/// and an empty object.
pub const MIXED_PAYLOAD: &str = r#"[
    {"id": 1, "task": "Buy milk", "completed": true},
    {"id": "x2", "task": "Clean"},
    "not-an-object",
    {}
]"#;

/// Same items as [`MIXED_PAYLOAD`] inside the `todos` envelope.
pub const MIXED_PAYLOAD_WRAPPED: &str = r#"{"todos": [
    {"id": 1, "task": "Buy milk", "completed": true},
    {"id": "x2", "task": "Clean"},
    "not-an-object",
    {}
]}"#;

/// Well-formed JSON that is not a todo list.
pub const WRONG_SHAPE_PAYLOADS: &[&str] = &[
    "42",
    r#""todos""#,
    "true",
    "null",
    r#"{"count": 3}"#,
    r#"{"todos": {"id": 1}}"#,
    r#"{"todos": null}"#,
];

/// Bodies that are not JSON at all.
pub const MALFORMED_PAYLOADS: &[&str] = &[
    "",
    "<html><body>502 Bad Gateway</body></html>",
    r#"[{"id": 1,"#,
    "[1, 2,]",
];

/// `completed` values paired with the flag they normalize to.
pub const COMPLETED_TRUTHINESS: &[(&str, bool)] = &[
    ("true", true),
    ("false", false),
    ("1", true),
    ("0", false),
    ("0.0", false),
    ("-3", true),
    (r#""yes""#, true),
    (r#""false""#, true),
    (r#""""#, false),
    ("null", false),
    ("[]", true),
    ("{}", true),
];
