//! Size and corner-rounding keys shared across widget families.

use crate::descriptor::BorderType;
use crate::key::style_key;
use ratatui::widgets::Padding;

style_key! {
    /// Size option for buttons, inputs, alerts, toasts, tooltips, dialogs and loaders.
    pub enum Size("size") {
        /// Dense
        Small => "small",
        /// Default
        Medium => "medium",
        /// Roomy
        Large => "large",
    }
    default = Medium;
}

impl Size {
    /// Padding for inline widgets such as buttons and tooltips.
    pub fn inline_padding(self) -> Padding {
        match self {
            Self::Small => Padding::horizontal(1),
            Self::Medium => Padding::horizontal(2),
            Self::Large => Padding::new(3, 3, 1, 1),
        }
    }

    /// Padding for boxed widgets such as alerts, toasts and dialogs.
    pub fn container_padding(self) -> Padding {
        match self {
            Self::Small => Padding::ZERO,
            Self::Medium => Padding::horizontal(1),
            Self::Large => Padding::new(2, 2, 1, 1),
        }
    }

    /// Minimum width in cells for a widget of this size.
    pub fn min_width(self) -> u16 {
        match self {
            Self::Small => 6,
            Self::Medium => 10,
            Self::Large => 14,
        }
    }
}

style_key! {
    /// Corner rounding option.
    ///
    /// Terminals only distinguish square from rounded corners, so every
    /// non-zero rounding renders the same.
    pub enum Rounded("rounded") {
        Full => "full",
        None => "none",
        Sm => "sm",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
        Xl3 => "3xl",
        Xl4 => "4xl",
        Xl5 => "5xl",
    }
    default = Md;
}

impl Rounded {
    /// Border type to draw for this rounding.
    pub fn border_type(self) -> BorderType {
        match self {
            Self::None => BorderType::Plain,
            _ => BorderType::Rounded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StyleKey;

    #[test]
    fn test_default_size() {
        assert_eq!(Size::default(), Size::Medium);
    }

    #[test]
    fn test_padding_grows_with_size() {
        assert!(Size::Small.inline_padding().left < Size::Medium.inline_padding().left);
        assert!(Size::Medium.inline_padding().left < Size::Large.inline_padding().left);
    }

    #[test]
    fn test_rounded_names() {
        assert_eq!(Rounded::from_name("2xl"), Rounded::Xl2);
        assert_eq!(Rounded::from_name("huge"), Rounded::Md);
        assert_eq!(Rounded::None.border_type(), BorderType::Plain);
        assert_eq!(Rounded::Full.border_type(), BorderType::Rounded);
    }
}
