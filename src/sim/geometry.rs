//! Geometry and physics primitives
//!
//! Circle and axis-aligned rectangle types plus the motion and
//! reflection helpers the simulation is built from. Everything here is
//! a pure function of its inputs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circle by center and radius
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// An axis-aligned rectangle by top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Point containment, edges inclusive
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Advance a position by one velocity step
#[inline]
pub fn advance(position: Vec2, velocity: Vec2, dt: f32) -> Vec2 {
    position + velocity * dt
}

/// True circle-vs-rectangle intersection via the closest point on the
/// rectangle to the circle center.
///
/// Note: the brick hit test deliberately does NOT use this; it checks
/// only the ball center against the brick rectangle (the defined
/// behavior, which can miss edge grazes).
pub fn circle_intersects_rect(circle: Circle, rect: Rect) -> bool {
    let closest = Vec2::new(
        circle.center.x.clamp(rect.left(), rect.right()),
        circle.center.y.clamp(rect.top(), rect.bottom()),
    );
    (circle.center - closest).length_squared() <= circle.radius * circle.radius
}

/// Negate the horizontal velocity component
#[inline]
pub fn reflect_x(velocity: Vec2) -> Vec2 {
    Vec2::new(-velocity.x, velocity.y)
}

/// Negate the vertical velocity component
#[inline]
pub fn reflect_y(velocity: Vec2) -> Vec2 {
    Vec2::new(velocity.x, -velocity.y)
}
