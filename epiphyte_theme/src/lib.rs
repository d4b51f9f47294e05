// Copyright 2026 the Epiphyte Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Epiphyte Theme: named viewer themes and canvas color lookup.
//!
//! The overlay engine only ever asks a theme one question: what is the
//! canvas background color? This crate provides that lookup:
//!
//! - [`Theme`]: an immutable, cheaply clonable bundle of theme colors.
//! - [`ThemeBuilder`]: builder-style construction.
//! - [`ThemeRegistry`]: lookup by theme name, seeded with the built-in
//!   `dark` and `light` themes.
//!
//! ## Example
//!
//! ```rust
//! use epiphyte_theme::ThemeRegistry;
//!
//! let themes = ThemeRegistry::builtin();
//! let dark = themes.lookup("dark").unwrap();
//! assert!(dark.canvas_background().components[0] < 0.5);
//! assert!(themes.lookup("sepia").is_none());
//! ```

use std::rc::Rc;

use hashbrown::HashMap;
use peniko::Color;

/// An immutable collection of themed colors.
///
/// Cloning is cheap: the data is behind an `Rc`.
#[derive(Clone, Debug)]
pub struct Theme {
    inner: Rc<ThemeData>,
}

#[derive(Debug)]
struct ThemeData {
    canvas_background: Color,
}

impl Theme {
    /// Returns the canvas background color.
    #[must_use]
    pub fn canvas_background(&self) -> Color {
        self.inner.canvas_background
    }
}

/// Builder for [`Theme`] instances.
///
/// # Example
///
/// ```rust
/// use epiphyte_theme::ThemeBuilder;
/// use peniko::Color;
///
/// let theme = ThemeBuilder::new()
///     .canvas_background(Color::from_rgb8(0x26, 0x29, 0x30))
///     .build();
/// ```
#[derive(Debug)]
pub struct ThemeBuilder {
    canvas_background: Color,
}

impl ThemeBuilder {
    /// Creates a builder with a black canvas background.
    #[must_use]
    pub fn new() -> Self {
        Self {
            canvas_background: Color::BLACK,
        }
    }

    /// Sets the canvas background color.
    #[must_use]
    pub fn canvas_background(mut self, color: Color) -> Self {
        self.canvas_background = color;
        self
    }

    /// Builds the theme.
    #[must_use]
    pub fn build(self) -> Theme {
        Theme {
            inner: Rc::new(ThemeData {
                canvas_background: self.canvas_background,
            }),
        }
    }
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lookup of [`Theme`]s by name.
#[derive(Clone, Debug)]
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
}

impl ThemeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            themes: HashMap::new(),
        }
    }

    /// Creates a registry seeded with the built-in `dark` and `light` themes.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(
            "dark",
            ThemeBuilder::new()
                .canvas_background(Color::from_rgb8(0x26, 0x29, 0x30))
                .build(),
        );
        registry.register(
            "light",
            ThemeBuilder::new()
                .canvas_background(Color::from_rgb8(0xff, 0xff, 0xff))
                .build(),
        );
        registry
    }

    /// Registers a theme under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, theme: Theme) {
        self.themes.insert(name.into(), theme);
    }

    /// Looks up a theme by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_are_present() {
        let themes = ThemeRegistry::builtin();
        assert!(themes.lookup("dark").is_some());
        assert!(themes.lookup("light").is_some());
        assert!(themes.lookup("unknown").is_none());
    }

    #[test]
    fn light_canvas_is_white() {
        let themes = ThemeRegistry::builtin();
        let light = themes.lookup("light").unwrap();
        assert_eq!(light.canvas_background(), Color::from_rgb8(0xff, 0xff, 0xff));
    }

    #[test]
    fn register_replaces_existing_theme() {
        let mut themes = ThemeRegistry::builtin();
        themes.register(
            "dark",
            ThemeBuilder::new().canvas_background(Color::BLACK).build(),
        );
        let dark = themes.lookup("dark").unwrap();
        assert_eq!(dark.canvas_background(), Color::BLACK);
    }

    #[test]
    fn theme_clone_shares_data() {
        let theme = ThemeBuilder::new().canvas_background(Color::WHITE).build();
        let clone = theme.clone();
        assert!(Rc::ptr_eq(&theme.inner, &clone.inner));
    }
}
