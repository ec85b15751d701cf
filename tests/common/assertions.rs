//! Domain-specific assertion macros for todoview harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that point at the
//! record that diverged rather than dumping two whole lists.

/// Assert that two todo lists are equal, reporting the first differing row.
///
/// ```rust
/// assert_todos_eq!(normalize(&payload).unwrap(), expected);
/// ```
#[macro_export]
macro_rules! assert_todos_eq {
    ($actual:expr, $expected:expr) => {{
        let actual: &[todoview_core::Todo] = &$actual;
        let expected: &[todoview_core::Todo] = &$expected;
        for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            pretty_assertions::assert_eq!(a, e, "assert_todos_eq! failed at row {}", i);
        }
        if actual.len() != expected.len() {
            panic!(
                "assert_todos_eq! failed: expected {} rows, got {}",
                expected.len(),
                actual.len()
            );
        }
    }};
}

/// Assert that a refresh result failed with the given error kind
/// (`"transport"`, `"http_status"`, `"decode"`, `"shape"`, `"unexpected"`).
#[macro_export]
macro_rules! assert_refresh_err {
    ($result:expr, $kind:expr) => {{
        match $result {
            Ok(todos) => panic!(
                "assert_refresh_err! failed: expected {} error, got {} todos",
                $kind,
                todos.len()
            ),
            Err(e) => {
                let e: todoview_core::RefreshError = e;
                assert_eq!(
                    e.kind(),
                    $kind,
                    "assert_refresh_err! failed: wrong error kind for {:?}",
                    e
                );
                e
            }
        }
    }};
}
