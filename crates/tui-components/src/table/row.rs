//! Field access for table rows.

use super::cell::CellContent;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// A row a [`Table`](super::Table) can read cells from by column key.
///
/// Implement this for your own row types, or use JSON objects and maps.
pub trait TableRow {
    /// Content of the field named `key`, if the row has one.
    fn field(&self, key: &str) -> Option<CellContent>;
}

impl TableRow for Value {
    fn field(&self, key: &str) -> Option<CellContent> {
        self.get(key).map(CellContent::from)
    }
}

impl TableRow for HashMap<String, CellContent> {
    fn field(&self, key: &str) -> Option<CellContent> {
        self.get(key).cloned()
    }
}

impl TableRow for BTreeMap<String, CellContent> {
    fn field(&self, key: &str) -> Option<CellContent> {
        self.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_row() {
        let row = json!({ "name": "Ada", "age": 36, "email": null });
        assert_eq!(row.field("name"), Some(CellContent::text("Ada")));
        assert_eq!(row.field("age"), Some(CellContent::number(36.0)));
        assert_eq!(row.field("email"), Some(CellContent::Empty));
        assert_eq!(row.field("missing"), None);
    }

    #[test]
    fn test_json_non_object_has_no_fields() {
        assert_eq!(json!([1, 2]).field("0"), None);
    }

    #[test]
    fn test_map_rows() {
        let mut row = BTreeMap::new();
        row.insert("status".to_string(), CellContent::text("open"));
        assert_eq!(row.field("status"), Some(CellContent::text("open")));
    }
}
