use indexmap::IndexMap;

use crate::render::Color;

/// Named slice-color registry with deterministic iteration order.
///
/// Slices without an explicit color are assigned `color_for(index)`, which
/// cycles through the registry in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: IndexMap<String, Color>,
}

impl Default for Palette {
    fn default() -> Self {
        let mut palette = Self::empty();
        palette.insert("azure", Color::rgb(0.20, 0.47, 0.83));
        palette.insert("amber", Color::rgb(0.95, 0.61, 0.07));
        palette.insert("emerald", Color::rgb(0.18, 0.64, 0.39));
        palette.insert("crimson", Color::rgb(0.83, 0.22, 0.25));
        palette.insert("violet", Color::rgb(0.52, 0.33, 0.72));
        palette.insert("slate", Color::rgb(0.42, 0.47, 0.54));
        palette
    }
}

impl Palette {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Color) {
        self.entries.insert(name.into(), color);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries.get(name).copied()
    }

    /// Color for the slice at `index`, cycling through the registry.
    /// An empty palette falls back to mid gray.
    #[must_use]
    pub fn color_for(&self, index: usize) -> Color {
        if self.entries.is_empty() {
            return Color::rgb(0.5, 0.5, 0.5);
        }
        match self.entries.get_index(index % self.entries.len()) {
            Some((_, color)) => *color,
            None => Color::rgb(0.5, 0.5, 0.5),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
