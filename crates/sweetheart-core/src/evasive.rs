//! The button that runs away.
//!
//! On hover or touch the target jumps to a random spot inside the viewport,
//! kept `margin` pixels away from every edge, and is pinned there with
//! fixed positioning so it can leave its original container.

use rand::Rng;

use crate::error::{PageError, PageResult};
use crate::render::{Rect, RenderTarget, Viewport};

/// New top-left corner for the evasive element, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
}

/// Pick a random placement for an element of `element`'s size.
///
/// With `r` uniform in `[0, 1)`, `x = margin + r * (viewport.width - width - 2 * margin)`.
/// A viewport smaller than the element plus margins yields coordinates
/// below `margin`, possibly negative.
pub fn choose_placement<R: Rng>(rng: &mut R, element: Rect, viewport: Viewport, margin: f64) -> Placement {
    let free_x = viewport.width - element.width - 2.0 * margin;
    let free_y = viewport.height - element.height - 2.0 * margin;

    Placement {
        x: rng.random::<f64>() * free_x + margin,
        y: rng.random::<f64>() * free_y + margin,
    }
}

/// Evasive-target controller.
#[derive(Debug, Clone, Copy)]
pub struct Evader {
    margin: f64,
}

impl Evader {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Move `target` somewhere else on screen.
    ///
    /// Fails when the target has not been laid out yet.
    pub fn evade<T, R>(&self, target: &mut T, viewport: Viewport, rng: &mut R) -> PageResult<Placement>
    where
        T: RenderTarget,
        R: Rng,
    {
        let rect = target
            .bounding_box()
            .ok_or_else(|| PageError::MissingElement("evasive button layout".to_string()))?;

        let placement = choose_placement(rng, rect, viewport, self.margin);
        target.set_style("position", "fixed");
        target.set_style("left", &format!("{}px", placement.x));
        target.set_style("top", &format!("{}px", placement.y));

        tracing::debug!(x = placement.x, y = placement.y, "Evasive button relocated");
        Ok(placement)
    }

    /// Put the target back into normal flow.
    pub fn reset<T: RenderTarget>(&self, target: &mut T) {
        target.set_style("position", "static");
    }
}

impl Default for Evader {
    fn default() -> Self {
        Self::new(20.0)
    }
}
