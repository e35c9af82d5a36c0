//! Sort-order state for table headers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction for columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Toggle the sort direction.
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header glyph for a column sorted in this direction.
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }

    /// Short name: `asc` or `desc`.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(&self, ord: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Ascending => ord,
            Self::Descending => ord.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Glyph for an orderable column that is not the sorted one.
pub const UNSORTED_ARROW: &str = "⇅";

/// Which column a table is ordered by, and in which direction.
///
/// This is a pure state machine: it never touches row data. Callers sort
/// their own rows when the order changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableOrder {
    /// Key of the sorted column.
    pub order_by: Option<String>,
    /// Direction, meaningful only when `order_by` is set.
    #[serde(default)]
    pub direction: SortDirection,
}

impl TableOrder {
    /// Unsorted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorted by `key` in `direction`.
    pub fn by(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            order_by: Some(key.into()),
            direction,
        }
    }

    /// Next state after the header of `key` is activated.
    ///
    /// Non-orderable columns yield `None`. A new column starts ascending, the
    /// current column flips between ascending and descending.
    pub fn on_header_activate(&self, key: &str, orderable: bool) -> Option<TableOrder> {
        if !orderable {
            return None;
        }
        let direction = match self.order_by.as_deref() {
            Some(current) if current == key => self.direction.toggle(),
            _ => SortDirection::Ascending,
        };
        Some(Self::by(key, direction))
    }

    /// Apply a header activation in place. Returns whether the state changed.
    pub fn activate(&mut self, key: &str, orderable: bool) -> bool {
        match self.on_header_activate(key, orderable) {
            Some(next) => {
                tracing::debug!(column = key, direction = %next.direction, "table order changed");
                *self = next;
                true
            }
            None => false,
        }
    }

    /// Whether the table is sorted by `key`.
    pub fn is_sorted_by(&self, key: &str) -> bool {
        self.order_by.as_deref() == Some(key)
    }

    /// Direction for `key`, if it is the sorted column.
    pub fn direction_for(&self, key: &str) -> Option<SortDirection> {
        self.is_sorted_by(key).then_some(self.direction)
    }

    /// Header glyph for a column.
    pub fn glyph_for(&self, key: &str, orderable: bool) -> Option<&'static str> {
        if !orderable {
            return None;
        }
        Some(
            self.direction_for(key)
                .map_or(UNSORTED_ARROW, |d| d.arrow()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_direction_toggle() {
        assert_eq!(SortDirection::Ascending.toggle(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.toggle(), SortDirection::Ascending);
    }

    #[test]
    fn test_non_orderable_is_ignored() {
        let order = TableOrder::by("name", SortDirection::Descending);
        assert_eq!(order.on_header_activate("email", false), None);

        let mut order = order;
        assert!(!order.activate("email", false));
        assert_eq!(order, TableOrder::by("name", SortDirection::Descending));
    }

    #[test]
    fn test_new_column_starts_ascending() {
        let order = TableOrder::by("name", SortDirection::Descending);
        assert_eq!(
            order.on_header_activate("age", true),
            Some(TableOrder::by("age", SortDirection::Ascending))
        );
        assert_eq!(
            TableOrder::new().on_header_activate("age", true),
            Some(TableOrder::by("age", SortDirection::Ascending))
        );
    }

    #[test]
    fn test_same_column_cycles() {
        let mut order = TableOrder::new();
        order.activate("name", true);
        assert_eq!(order.direction_for("name"), Some(SortDirection::Ascending));
        order.activate("name", true);
        assert_eq!(order.direction_for("name"), Some(SortDirection::Descending));
        order.activate("name", true);
        assert_eq!(order.direction_for("name"), Some(SortDirection::Ascending));
        assert_eq!(order.direction_for("age"), None);
    }

    #[test]
    fn test_glyphs() {
        let order = TableOrder::by("name", SortDirection::Descending);
        assert_eq!(order.glyph_for("name", true), Some("▼"));
        assert_eq!(order.glyph_for("age", true), Some("⇅"));
        assert_eq!(order.glyph_for("email", false), None);
    }

    #[test]
    fn test_serde_roundtrip_names() {
        let order = TableOrder::by("date", SortDirection::Descending);
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"{"order_by":"date","direction":"descending"}"#);
    }

    proptest! {
        #[test]
        fn test_activation_never_unsorts(keys in proptest::collection::vec(0u8..4, 1..30)) {
            let mut order = TableOrder::new();
            for k in keys {
                let key = format!("col{k}");
                let before = order.clone();
                order.activate(&key, true);
                prop_assert!(order.is_sorted_by(&key));
                if before.is_sorted_by(&key) {
                    prop_assert_eq!(order.direction, before.direction.toggle());
                } else {
                    prop_assert_eq!(order.direction, SortDirection::Ascending);
                }
            }
        }
    }
}
