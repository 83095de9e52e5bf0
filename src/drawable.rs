// src/drawable.rs

//! Capabilities implemented by objects that know how to draw themselves.
//!
//! The `Canvas` only dispatches to these traits. It never inspects the
//! concrete type, and any clipping happens through the drawable's own calls
//! back into `Canvas::set_pixel` and friends.

use crate::canvas::Canvas;

/// Something that can render itself with its top-left corner at `(x, y)`.
pub trait Renderable {
    fn render(&self, canvas: &mut Canvas, x: i32, y: i32);
}

/// Something that can render itself at `(x, y)` rotated about a pivot.
///
/// The pivot is given relative to the object's own top-left corner, and the
/// angle is in whole degrees.
pub trait Rotatable {
    fn rotated_render(
        &self,
        canvas: &mut Canvas,
        x: i32,
        y: i32,
        pivot_x: i32,
        pivot_y: i32,
        angle_degrees: i32,
    );
}
