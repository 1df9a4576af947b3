//! Domain-specific assertion macros for jsearch harnesses.
//!
//! These add context-rich failure messages that make it clear *which* record
//! and *which* key violated an expectation.

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert that a record has a field with an expected value.
///
/// ```rust
/// assert_field!(row, "name", "Francisca Rasmussen");
/// assert_field!(row, "organizations", [{"organization_name": "zendesk"}]);
/// ```
#[macro_export]
macro_rules! assert_field {
    ($record:expr, $key:expr, $($value:tt)+) => {{
        let record: &jsearch::Record = &$record;
        let key: &str = $key;
        let expected = serde_json::json!($($value)+);
        match record.get(key) {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "assert_field! failed:\n  record[{:?}]\n  expected: {}\n  actual:   {}",
                key, expected, actual
            ),
            None => panic!(
                "assert_field! failed: field {:?} not found.\n  Available fields: {:?}",
                key,
                record.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that a record carries no key at all for a relationship (as opposed
/// to an empty list).
#[macro_export]
macro_rules! assert_no_key {
    ($record:expr, $key:expr) => {{
        let record: &jsearch::Record = &$record;
        let key: &str = $key;
        if let Some(actual) = record.get(key) {
            panic!(
                "assert_no_key! failed: expected no {:?} key, found {}",
                key, actual
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Result set assertions
// ---------------------------------------------------------------------------

/// Assert that a result set holds exactly the records with these `_id`s, in
/// this order.
///
/// ```rust
/// assert_ids!(rows, ["71", "72"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($results:expr, [$($id:expr),* $(,)?]) => {{
        let results: &[jsearch::Record] = &$results;
        let actual: Vec<serde_json::Value> = results
            .iter()
            .map(|r| r.get("_id").cloned().unwrap_or(serde_json::Value::Null))
            .collect();
        let expected: Vec<serde_json::Value> = vec![$(serde_json::json!($id)),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_ids! failed");
    }};
}
