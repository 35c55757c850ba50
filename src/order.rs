//! Order flow
//!
//! An order walks one pizza through its lifecycle:
//! 1. bake() - always
//! 2. deliver() or pickup() - depending on how the customer collects it
//!
//! Each step is a timed action, so a status line follows every transition.

use crate::error::Result;
use crate::recipe::{Recipe, Size};
use crate::registry::Registry;
use crate::timed::{StatusSink, Template, timed};
use rand::Rng;

pub const BAKED: &str = "🍕 Baked in {} sec!";
pub const DELIVERED: &str = "🛵 Delivered in {} sec!";
pub const PICKED_UP: &str = "🏠 Pickup in {} sec!";

/// How the customer gets the pizza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fulfillment {
    Delivery,
    #[default]
    Pickup,
}

impl Fulfillment {
    pub fn from_delivery_flag(delivery: bool) -> Self {
        if delivery {
            Fulfillment::Delivery
        } else {
            Fulfillment::Pickup
        }
    }
}

/// Bakes a pizza
pub fn bake(pizza: &mut Recipe) -> Result<()> {
    log::debug!("baking {}", pizza);
    pizza.bake();
    Ok(())
}

/// Delivers a pizza
pub fn deliver(pizza: &mut Recipe) -> Result<()> {
    log::debug!("delivering {}", pizza);
    pizza.deliver();
    Ok(())
}

/// Hands a pizza over for pickup
pub fn pickup(pizza: &mut Recipe) -> Result<()> {
    log::debug!("handing over {}", pizza);
    pizza.pickup();
    Ok(())
}

/// Look up `name`, bake it, then deliver it or hand it over.
///
/// The registry is left untouched: the order works on its own copy, resized
/// when `size` is given. Nothing is emitted if the name is unknown.
pub fn place_order<R, S>(
    registry: &Registry,
    name: &str,
    fulfillment: Fulfillment,
    size: Option<Size>,
    rng: &mut R,
    sink: &mut S,
) -> Result<Recipe>
where
    R: Rng + ?Sized,
    S: StatusSink + ?Sized,
{
    let item = registry.get(name)?;
    let mut pizza = match size {
        Some(size) => Recipe::of(item.kind, size),
        None => item.recipe.clone(),
    };
    log::debug!("order: {} ({:?})", pizza, fulfillment);

    timed(Template::parse(BAKED)?, bake, &mut *rng, &mut *sink)(&mut pizza)?;

    match fulfillment {
        Fulfillment::Delivery => {
            timed(Template::parse(DELIVERED)?, deliver, &mut *rng, &mut *sink)(&mut pizza)?
        }
        Fulfillment::Pickup => {
            timed(Template::parse(PICKED_UP)?, pickup, &mut *rng, &mut *sink)(&mut pizza)?
        }
    }

    Ok(pizza)
}
