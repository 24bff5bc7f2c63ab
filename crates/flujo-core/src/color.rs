//! Color handling for Flujo diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor`
//! type from the color crate, providing convenience methods for working with
//! colors in the Flujo project.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#0074D9", "rgb(255, 0, 0)", "white", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use flujo_core::color::Color;
    ///
    /// let node_fill = Color::new("#0074D9").unwrap();
    /// let text = Color::new("white").unwrap();
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns a sanitized, ID-safe string representation of this color.
    ///
    /// Converts the color to a string suitable for use as an SVG ID attribute
    /// (e.g., in arrow marker definitions). The result contains only
    /// alphanumeric characters and underscores, with a letter prefix
    /// guaranteed.
    pub fn to_id_safe_string(self) -> String {
        let color_str = self.to_string();
        // Replace invalid ID characters with underscores
        let mut sanitized = color_str
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';'], "_");

        // Ensure the ID starts with a letter (required for valid SVG IDs)
        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            sanitized = format!("c_{sanitized}");
        }

        sanitized
    }

}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let blue = Color::new("#0074D9");
        assert!(blue.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_default() {
        let color = Color::default();
        assert_eq!(color.to_string(), "black");
    }

    #[test]
    fn test_color_to_id_safe_string() {
        let color = Color::new("#555").unwrap();
        let safe_id = color.to_id_safe_string();
        assert!(safe_id.chars().all(|c| c.is_alphanumeric() || c == '_'));
        assert!(!safe_id.contains('#'));
    }

    #[test]
    fn test_color_eq_hash() {
        use std::collections::HashSet;

        let color1 = Color::new("red").unwrap();
        let color2 = Color::new("red").unwrap();
        let color3 = Color::new("blue").unwrap();

        assert_eq!(color1, color2);
        assert_ne!(color1, color3);

        let mut set = HashSet::new();
        set.insert(color1);
        assert!(set.contains(&color2));
        assert!(!set.contains(&color3));
    }
}
