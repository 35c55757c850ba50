//! Pizza recipes: composition, size validation, and lifecycle flags.

use crate::error::{PizzaError, Result};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::str::FromStr;

/// Pizza size. Only `L` and `XL` are baked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Size {
    #[default]
    L,
    XL,
}

impl Size {
    pub fn as_str(self) -> &'static str {
        match self {
            Size::L => "L",
            Size::XL => "XL",
        }
    }
}

impl FromStr for Size {
    type Err = PizzaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "L" => Ok(Size::L),
            "XL" => Ok(Size::XL),
            other => Err(PizzaError::InvalidSize(other.to_string())),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed recipe shapes on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Margherita,
    Pepperoni,
    Hawaiian,
}

impl Kind {
    /// Menu order.
    pub const ALL: [Kind; 3] = [Kind::Margherita, Kind::Pepperoni, Kind::Hawaiian];

    /// Display name, e.g. `Margherita`.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Margherita => "Margherita",
            Kind::Pepperoni => "Pepperoni",
            Kind::Hawaiian => "Hawaiian",
        }
    }

    /// Lowercase lookup key, e.g. `margherita`.
    pub fn key(self) -> &'static str {
        match self {
            Kind::Margherita => "margherita",
            Kind::Pepperoni => "pepperoni",
            Kind::Hawaiian => "hawaiian",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Kind::Margherita => "🧀",
            Kind::Pepperoni => "🍕",
            Kind::Hawaiian => "🍍",
        }
    }

    pub fn ingredients(self) -> &'static [&'static str] {
        match self {
            Kind::Margherita => &["tomato sauce", "mozzarella", "tomatoes"],
            Kind::Pepperoni => &["tomato sauce", "mozzarella", "pepperoni"],
            Kind::Hawaiian => &["tomato sauce", "mozzarella", "chicken", "pineapples"],
        }
    }

    /// Build this variant from a size string such as `"XL"`.
    pub fn recipe(self, size: &str) -> Result<Recipe> {
        Recipe::new(self.ingredients().iter().copied(), size, self.emoji())
    }
}

/// A pizza's composition plus where it is in its lifecycle.
///
/// Ingredients, size and emoji are fixed at construction. The lifecycle flags
/// are independent: nothing stops a pizza from being both delivered and
/// picked up, or baked twice.
#[derive(Clone)]
pub struct Recipe {
    ingredients: Vec<String>,
    size: Size,
    emoji: String,
    is_baked: bool,
    is_delivered: bool,
    is_picked_up: bool,
}

/// The `(size, ingredients)` view of a recipe, as serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub size: Size,
    pub ingredients: Vec<String>,
}

impl Recipe {
    /// Create a recipe, rejecting any size other than `L` or `XL`.
    pub fn new<I, S>(ingredients: I, size: &str, emoji: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let size: Size = size.parse()?;
        Ok(Self::with_size(ingredients, size, emoji))
    }

    /// Create a large recipe with no emoji.
    pub fn from_ingredients<I, S>(ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_size(ingredients, Size::default(), "")
    }

    /// Create a variant at an already-validated size.
    pub fn of(kind: Kind, size: Size) -> Self {
        Self::with_size(kind.ingredients().iter().copied(), size, kind.emoji())
    }

    fn with_size<I, S>(ingredients: I, size: Size, emoji: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            size,
            emoji: emoji.to_string(),
            is_baked: false,
            is_delivered: false,
            is_picked_up: false,
        }
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn is_baked(&self) -> bool {
        self.is_baked
    }

    pub fn is_delivered(&self) -> bool {
        self.is_delivered
    }

    pub fn is_picked_up(&self) -> bool {
        self.is_picked_up
    }

    pub fn bake(&mut self) {
        self.is_baked = true;
    }

    pub fn deliver(&mut self) {
        self.is_delivered = true;
    }

    pub fn pickup(&mut self) {
        self.is_picked_up = true;
    }

    /// Compare against an arbitrary value.
    ///
    /// Two recipes are equal when size and ingredients (in order) match.
    /// Anything that is not a [`Recipe`] is an error rather than `false`.
    pub fn equals<T: Any>(&self, other: &T) -> Result<bool> {
        match (other as &dyn Any).downcast_ref::<Recipe>() {
            Some(other) => Ok(self == other),
            None => Err(PizzaError::InvalidComparison(
                std::any::type_name::<T>().to_string(),
            )),
        }
    }

    /// `"{size} pizza with {ingredients}"`
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// `"Pizza({size}, [...])"`
    pub fn to_debug_string(&self) -> String {
        format!("{:?}", self)
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            size: self.size,
            ingredients: self.ingredients.clone(),
        }
    }
}

impl PartialEq for Recipe {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.ingredients == other.ingredients
    }
}

impl Eq for Recipe {}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pizza with {}", self.size, self.ingredients.join(", "))
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted: Vec<String> = self
            .ingredients
            .iter()
            .map(|i| format!("'{}'", i))
            .collect();
        write!(f, "Pizza({}, [{}])", self.size, quoted.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== construction ====================

    #[test]
    fn test_every_variant_accepts_both_sizes() {
        for kind in Kind::ALL {
            assert_eq!(kind.recipe("L").unwrap().size(), Size::L);
            assert_eq!(kind.recipe("XL").unwrap().size(), Size::XL);
        }
    }

    #[test]
    fn test_invalid_size_rejected() {
        for bad in ["M", "l", "xl", "", "XXL", " L"] {
            let err = Kind::Margherita.recipe(bad).unwrap_err();
            assert_eq!(err, PizzaError::InvalidSize(bad.to_string()));
        }
    }

    #[test]
    fn test_custom_recipe_invalid_size() {
        let result = Recipe::new(["dough"], "S", "");
        assert!(matches!(result, Err(PizzaError::InvalidSize(s)) if s == "S"));
    }

    #[test]
    fn test_default_size_is_large() {
        assert_eq!(Size::default(), Size::L);
        let pizza = Recipe::from_ingredients(["dough", "olive oil"]);
        assert_eq!(pizza.size(), Size::L);
        assert_eq!(pizza.emoji(), "");
        assert_eq!(pizza.to_string(), "L pizza with dough, olive oil");
    }

    #[test]
    fn test_fresh_recipe_has_no_flags_set() {
        for kind in Kind::ALL {
            let pizza = Recipe::of(kind, Size::L);
            assert!(!pizza.is_baked());
            assert!(!pizza.is_delivered());
            assert!(!pizza.is_picked_up());
        }
    }

    #[test]
    fn test_variant_composition() {
        let pizza = Recipe::of(Kind::Hawaiian, Size::XL);
        assert_eq!(pizza.emoji(), "🍍");
        assert_eq!(
            pizza.ingredients(),
            ["tomato sauce", "mozzarella", "chicken", "pineapples"]
        );
    }

    // ==================== lifecycle ====================

    #[test]
    fn test_bake_then_deliver() {
        let mut pizza = Recipe::of(Kind::Margherita, Size::L);
        pizza.bake();
        pizza.deliver();
        assert!(pizza.is_baked());
        assert!(pizza.is_delivered());
        assert!(!pizza.is_picked_up());
    }

    #[test]
    fn test_transitions_are_unguarded() {
        let mut pizza = Recipe::of(Kind::Pepperoni, Size::L);
        pizza.pickup();
        pizza.bake();
        pizza.bake();
        pizza.deliver();
        assert!(pizza.is_baked() && pizza.is_delivered() && pizza.is_picked_up());
    }

    // ==================== equality ====================

    #[test]
    fn test_equal_by_size_and_ingredients() {
        let a = Recipe::of(Kind::Margherita, Size::L);
        assert!(a.equals(&Recipe::of(Kind::Margherita, Size::L)).unwrap());
        assert!(!a.equals(&Recipe::of(Kind::Margherita, Size::XL)).unwrap());
        assert!(!a.equals(&Recipe::of(Kind::Pepperoni, Size::L)).unwrap());
    }

    #[test]
    fn test_equality_ignores_emoji_and_flags() {
        let mut baked = Recipe::of(Kind::Margherita, Size::L);
        baked.bake();
        let plain = Recipe::new(["tomato sauce", "mozzarella", "tomatoes"], "L", "").unwrap();
        assert_eq!(baked, plain);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = Recipe::new(["mozzarella", "tomato sauce"], "L", "").unwrap();
        let b = Recipe::new(["tomato sauce", "mozzarella"], "L", "").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_compare_with_non_recipe_fails() {
        let pizza = Recipe::of(Kind::Margherita, Size::L);
        let err = pizza.equals(&"not a pizza").unwrap_err();
        assert!(matches!(err, PizzaError::InvalidComparison(ref t) if t.contains("str")));
        assert!(pizza.equals(&42u8).is_err());
    }

    // ==================== rendering ====================

    #[test]
    fn test_display_string() {
        let pizza = Recipe::of(Kind::Pepperoni, Size::XL);
        assert_eq!(
            pizza.to_display_string(),
            "XL pizza with tomato sauce, mozzarella, pepperoni"
        );
    }

    #[test]
    fn test_debug_string() {
        let pizza = Recipe::of(Kind::Margherita, Size::L);
        assert_eq!(
            pizza.to_debug_string(),
            "Pizza(L, ['tomato sauce', 'mozzarella', 'tomatoes'])"
        );
    }

    #[test]
    fn test_summary_serializes_size_and_ingredients() {
        let pizza = Recipe::of(Kind::Margherita, Size::XL);
        let json = serde_json::to_value(pizza.summary()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "size": "XL",
                "ingredients": ["tomato sauce", "mozzarella", "tomatoes"],
            })
        );
    }
}
