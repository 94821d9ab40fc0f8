use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Login form field holding input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveField {
    #[default]
    None,
    Username,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn background(self) -> Color {
        match self {
            Self::Dark => Color::from_rgb8(0x0a, 0x05, 0x10),
            Self::Light => Color::from_rgb8(0xf5, 0xf5, 0xf0),
        }
    }
}

/// Pointer position normalized to `[-1, 1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Normalizes a window-space pointer position.
    ///
    /// Returns the centered position for a degenerate window size.
    #[must_use]
    pub fn from_window(client_x: f64, client_y: f64, width: f64, height: f64) -> Self {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let normalize = |value: f64, extent: f64| {
            if value.is_finite() {
                ((value / extent - 0.5) * 2.0).clamp(-1.0, 1.0)
            } else {
                0.0
            }
        };
        Self {
            x: normalize(client_x, width),
            y: normalize(client_y, height),
        }
    }
}

/// Immutable per-frame snapshot of UI state.
///
/// Borrowed from the session that owns the form and passed by reference to
/// every animated element; elements never write back through it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState<'a> {
    pub active_field: ActiveField,
    pub username: &'a str,
    pub password: &'a str,
    pub password_revealed: bool,
    pub assembled: bool,
    pub has_error: bool,
    pub theme: Theme,
    pub pointer: PointerPosition,
}

impl FrameState<'_> {
    #[must_use]
    pub fn username_len(&self) -> usize {
        self.username.chars().count()
    }

    #[must_use]
    pub fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    #[must_use]
    pub fn is_focused(&self, field: ActiveField) -> bool {
        self.active_field == field
    }
}

impl Default for FrameState<'_> {
    fn default() -> Self {
        Self {
            active_field: ActiveField::None,
            username: "",
            password: "",
            password_revealed: false,
            assembled: false,
            has_error: false,
            theme: Theme::Dark,
            pointer: PointerPosition::default(),
        }
    }
}

/// Latin-to-rune transliteration shown under the focused username field.
///
/// Letters map case-insensitively; everything else passes through.
#[must_use]
pub fn to_runes(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'a' => 'ᚨ',
            'b' => 'ᛒ',
            'c' | 'k' | 'q' => 'ᚲ',
            'd' => 'ᛞ',
            'e' => 'ᛖ',
            'f' => 'ᚠ',
            'g' => 'ᚷ',
            'h' => 'ᚺ',
            'i' => 'ᛁ',
            'j' => 'ᛃ',
            'l' => 'ᛚ',
            'm' => 'ᛗ',
            'n' => 'ᚾ',
            'o' => 'ᛟ',
            'p' => 'ᛈ',
            'r' => 'ᚱ',
            's' => 'ᛊ',
            't' => 'ᛏ',
            'u' => 'ᚢ',
            'v' | 'w' => 'ᚹ',
            'x' | 'z' => 'ᛉ',
            'y' => 'ᛇ',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{PointerPosition, to_runes};

    #[test]
    fn runes_ignore_case_and_keep_other_characters() {
        assert_eq!(to_runes("Ab-9"), "ᚨᛒ-9");
    }

    #[test]
    fn pointer_is_centered_for_degenerate_window() {
        assert_eq!(
            PointerPosition::from_window(10.0, 10.0, 0.0, 100.0),
            PointerPosition::default()
        );
        let corner = PointerPosition::from_window(0.0, 200.0, 200.0, 200.0);
        assert_eq!((corner.x, corner.y), (-1.0, 1.0));
    }
}
