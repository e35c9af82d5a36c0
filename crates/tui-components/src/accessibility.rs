//! Basic labeling for assistive output.
//!
//! Terminals have no accessibility tree, so widgets only expose a role and a
//! label that an application can show in a status line or speak.

/// Widgets that can describe themselves.
pub trait Accessible {
    /// ARIA-like role, e.g. "button", "grid", "dialog", "status".
    fn aria_role(&self) -> &str;

    /// Human-readable label.
    fn aria_label(&self) -> String;

    /// Current value or state, if the widget has one.
    fn aria_value(&self) -> Option<String> {
        None
    }
}

/// `role: label`, plus the value when there is one.
pub fn describe(widget: &dyn Accessible) -> String {
    match widget.aria_value() {
        Some(value) => format!("{}: {} ({})", widget.aria_role(), widget.aria_label(), value),
        None => format!("{}: {}", widget.aria_role(), widget.aria_label()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Switch(bool);

    impl Accessible for Switch {
        fn aria_role(&self) -> &str {
            "switch"
        }

        fn aria_label(&self) -> String {
            "Dark mode".to_string()
        }

        fn aria_value(&self) -> Option<String> {
            Some(if self.0 { "on" } else { "off" }.to_string())
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(&Switch(true)), "switch: Dark mode (on)");
    }
}
