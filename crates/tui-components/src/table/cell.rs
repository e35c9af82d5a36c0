//! Cell content types for tables.

use ratatui::style::Color;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// Content that can be displayed in a table cell.
#[derive(Debug, Clone)]
pub enum CellContent {
    /// Plain text
    Text(String),
    /// Numeric value (for sorting)
    Number(f64),
    /// Badge with label and color
    Badge { label: String, color: Color },
    /// Nothing to show
    Empty,
}

impl CellContent {
    /// Create a text cell.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Create a number cell.
    pub fn number(n: f64) -> Self {
        Self::Number(n)
    }

    /// Create a badge cell.
    pub fn badge(label: impl Into<String>, color: Color) -> Self {
        Self::Badge {
            label: label.into(),
            color,
        }
    }

    /// Whether the cell has nothing to show. A NaN number counts as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Number(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Foreground override for this cell.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Badge { color, .. } => Some(*color),
            _ => None,
        }
    }

    /// Get the sortable value for comparison.
    fn sort_key(&self) -> SortKey {
        match self {
            Self::Text(s) => SortKey::Text(s.to_lowercase()),
            Self::Number(n) if n.is_nan() => SortKey::Empty,
            // Adding zero folds -0.0 into 0.0
            Self::Number(n) => SortKey::Number(*n + 0.0),
            Self::Badge { label, .. } => SortKey::Text(label.to_lowercase()),
            Self::Empty => SortKey::Empty,
        }
    }
}

#[derive(Debug, PartialEq)]
enum SortKey {
    Number(f64),
    Text(String),
    Empty,
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for SortKey {}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Empty, SortKey::Empty) => Ordering::Equal,
            (SortKey::Empty, _) => Ordering::Greater,
            (_, SortKey::Empty) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
        }
    }
}

impl PartialEq for CellContent {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for CellContent {}

impl PartialOrd for CellContent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellContent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for CellContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) if n.is_nan() => Ok(()),
            Self::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{:.2}", n)
                }
            }
            Self::Badge { label, .. } => write!(f, "{}", label),
            Self::Empty => Ok(()),
        }
    }
}

impl From<String> for CellContent {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for CellContent {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for CellContent {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CellContent {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl<T: Into<CellContent>> From<Option<T>> for CellContent {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

impl From<&Value> for CellContent {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Bool(b) => Self::Text(b.to_string()),
            Value::Number(n) => n.as_f64().map_or(Self::Empty, Self::Number),
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }
}
