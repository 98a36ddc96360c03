//!
//! flat_collide is a small 2D geometry crate dedicated to collision queries between simple
//! convex shapes: segments, rectangles (rotated or axis-aligned), triangles and circles.
//!
//! Every shape is a plain `Copy` value and every query is a pure function, so the crate can be
//! called from any number of threads without synchronization.
//!
//! Queries come in two flavours:
//! - boolean tests (`intersects`, `contains`) through the [`Intersect`] trait or the free
//!   functions of [`contain`], [`intersect`] and [`overlap`],
//! - resolution queries returning a minimum translation vector (MTV) through the
//!   [`Penetrate`] trait or the free functions of [`sat`] and [`overlap`].
//!
//! An MTV is always the translation to apply to the *first* shape to push it out of the second.
//!
//! ```rust
//! use flat_collide::{OrientedRect, Penetrate};
//!
//! let a = OrientedRect::new([0.0, 0.0], 10.0, 10.0, 0.0);
//! let b = OrientedRect::new([5.0, 0.0], 10.0, 10.0, 0.0);
//!
//! let mtv = a.penetration(b).unwrap();
//! assert_eq!(mtv, [-5.0, 0.0].into());
//! ```
//!
//! Only the pairs that have an implementation can be asked: there is no triangle-triangle or
//! general polygon-polygon test, and trying to call one is a compile error.

pub mod contain;
pub mod error;
pub mod intersect;
#[cfg(feature = "parry2d")]
pub mod interop;
pub mod overlap;
pub mod sat;
pub mod shape;
mod vec2;

pub use error::ShapeError;
pub use intersect::RectCrossings;
pub use shape::{AARect, Circle, Intersect, OrientedRect, Penetrate, Segment, Shape, Triangle};
pub use vec2::Vec2;

/// Below this absolute cross product two directions are considered parallel.
pub const EPSILON: f32 = 1e-6;

/// Added to every penetration depth computed by the separating axis tests.
/// A positive value makes touching shapes overlap, a negative one gives them some slack.
pub const PENETRATION_DEPTH_OFFSET: f32 = 0.0;

/// Default tolerance for [`Segment::contains_point`].
pub const POINT_ON_SEGMENT_TOLERANCE: f32 = 1e-5;
