//! The menu: a fixed, read-only table of named recipes.

use crate::error::{PizzaError, Result};
use crate::recipe::{Kind, Recipe, Size};
use serde::Serialize;

/// A registered recipe and the variant it was built from.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub kind: Kind,
    pub recipe: Recipe,
}

/// One menu row as exported with `menu --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub name: &'static str,
    pub emoji: String,
    pub size: Size,
    pub ingredients: Vec<String>,
}

/// Name-to-recipe lookup table, built once and never mutated.
#[derive(Debug, Clone)]
pub struct Registry {
    items: Vec<MenuItem>,
}

impl Registry {
    /// Every variant at the default size, in menu order.
    pub fn standard() -> Self {
        Self {
            items: Kind::ALL
                .into_iter()
                .map(|kind| MenuItem {
                    kind,
                    recipe: Recipe::of(kind, Size::default()),
                })
                .collect(),
        }
    }

    /// Case-insensitive lookup by recipe name.
    pub fn get(&self, name: &str) -> Result<&MenuItem> {
        let key = name.to_lowercase();
        self.items
            .iter()
            .find(|item| item.kind.key() == key)
            .ok_or_else(|| PizzaError::InvalidPizzaName(name.to_string()))
    }

    /// `(name, item)` pairs in menu order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &MenuItem)> {
        self.items.iter().map(|item| (item.kind.key(), item))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Width of the longest registered name, used to align the menu.
    fn name_width(&self) -> usize {
        self.iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0)
    }

    /// Printable menu, one 1-indexed line per recipe.
    ///
    /// Example: `1 - Margherita 🧀: tomato sauce, mozzarella, tomatoes`
    pub fn menu_lines(&self) -> Vec<String> {
        let width = self.name_width();
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                format!(
                    "{} - {:<width$} {}: {}",
                    i + 1,
                    item.kind.name(),
                    item.recipe.emoji(),
                    item.recipe.ingredients().join(", "),
                    width = width
                )
            })
            .collect()
    }

    pub fn entries(&self) -> Vec<MenuEntry> {
        self.items
            .iter()
            .map(|item| MenuEntry {
                name: item.kind.name(),
                emoji: item.recipe.emoji().to_string(),
                size: item.recipe.size(),
                ingredients: item.recipe.ingredients().to_vec(),
            })
            .collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}
