//! Color handling for Gantry diagrams.
//!
//! This module provides the [`Color`] type, a validated color string. Parsing
//! goes through the `color` crate so that typos fail at model-construction
//! time, but the original spelling is preserved: the rendering backend
//! (Graphviz) receives color names and hex values verbatim.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A validated color, stored as the string it was written as.
///
/// Accepts CSS color strings such as `"blue"`, `"#ff8000"` or
/// `"rgb(255, 0, 0)"`. The spelling is kept as-is for the layout engine.
///
/// # Examples
///
/// ```
/// use gantry_core::color::Color;
///
/// let blue = Color::new("blue").unwrap();
/// assert_eq!(blue.as_str(), "blue");
///
/// assert!(Color::new("not-a-color").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    name: String,
}

impl Color {
    /// Create a new `Color` from a string, validating it as a CSS color.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(_) => Ok(Self {
                name: color_str.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// The color exactly as it was written.
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        assert!(Color::new("#ff0000").is_ok());
        assert!(Color::new("orange").is_ok());
        assert!(Color::new("not-a-color").is_err());
    }

    #[test]
    fn test_spelling_preserved() {
        let color = Color::new("#FF8000").unwrap();
        assert_eq!(color.as_str(), "#FF8000");
        assert_eq!(color.to_string(), "#FF8000");
    }

    #[test]
    fn test_eq_hash() {
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
