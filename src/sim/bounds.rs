//! Axis-aligned bounding boxes
//!
//! Every entity is reduced to a box centered on its position: rectangles by
//! their half-size, the ball by its radius (a square of side `2 * radius`).
//! Edges are recomputed from the current position on every query.

use glam::Vec2;

/// Edge queries shared by every collidable shape
pub trait Bounds {
    /// Center of the shape
    fn center(&self) -> Vec2;

    /// Half width and half height of the bounding box
    fn half_extents(&self) -> Vec2;

    #[inline]
    fn x(&self) -> f32 {
        self.center().x
    }

    #[inline]
    fn y(&self) -> f32 {
        self.center().y
    }

    #[inline]
    fn left(&self) -> f32 {
        self.x() - self.half_extents().x
    }

    #[inline]
    fn right(&self) -> f32 {
        self.x() + self.half_extents().x
    }

    #[inline]
    fn top(&self) -> f32 {
        self.y() - self.half_extents().y
    }

    #[inline]
    fn bottom(&self) -> f32 {
        self.y() + self.half_extents().y
    }
}

/// A bare box, handy for probing and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self {
            center,
            half: size / 2.0,
        }
    }
}

impl Bounds for Aabb {
    fn center(&self) -> Vec2 {
        self.center
    }

    fn half_extents(&self) -> Vec2 {
        self.half
    }
}

/// Check whether two boxes overlap on both axes
///
/// Touching edges count as an overlap.
#[inline]
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: Bounds + ?Sized,
    B: Bounds + ?Sized,
{
    a.right() >= b.left() && a.left() <= b.right() && a.bottom() >= b.top() && a.top() <= b.bottom()
}
