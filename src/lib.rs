//! Command-line pizza ordering simulator
//!
//! A small fixed menu of recipes, each of which can be baked and then either
//! delivered or picked up. Every lifecycle step is a *timed action*: after the
//! step completes, a status line with a simulated duration of 1 to 5 seconds
//! is emitted.
//!
//! # Example
//!
//! ```
//! use pizza_order::{Fulfillment, Registry, place_order};
//! use rand::SeedableRng;
//!
//! let registry = Registry::standard();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let mut lines: Vec<String> = Vec::new();
//!
//! let pizza = place_order(&registry, "Margherita", Fulfillment::Delivery, None, &mut rng, &mut lines)?;
//! assert!(pizza.is_baked() && pizza.is_delivered());
//! assert!(lines[0].starts_with("🍕 Baked in "));
//! assert!(lines[1].starts_with("🛵 Delivered in "));
//! # Ok::<(), pizza_order::PizzaError>(())
//! ```
//!
//! # Menu
//!
//! - `margherita` 🧀 - tomato sauce, mozzarella, tomatoes
//! - `pepperoni` 🍕 - tomato sauce, mozzarella, pepperoni
//! - `hawaiian` 🍍 - tomato sauce, mozzarella, chicken, pineapples
//!
//! Recipes come in two sizes, `L` (default) and `XL`.

pub mod core;
mod error;
pub mod order;
pub mod recipe;
pub mod registry;
pub mod timed;

pub use crate::core::output;
pub use error::{PizzaError, Result};
pub use order::{Fulfillment, place_order};
pub use recipe::{Kind, Recipe, RecipeSummary, Size};
pub use registry::{MenuEntry, MenuItem, Registry};
pub use timed::{StatusSink, Template, timed};
