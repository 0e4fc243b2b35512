//! Transforms between grid cells and screen pixels.

use eframe::egui::{Pos2, Rect};

/// A 2D transform consisting of per-axis scale and translation.
///
/// World space puts column `c` of a grid at `x` in `c..c + 1` and row `r` at `y` in `r..r + 1`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transform {
    scale_x: f32,
    scale_y: f32,
    offset_x: f32,
    offset_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Transform {
    /// Creates a new `Transform` that maps the rect `(src_p1, src_p2)` inside `(dst_p1, dst_p2)`,
    /// adding padding/letterboxing so that the src rect fits inside the dst rect while preserving
    /// its aspect ratio.
    pub fn new_letterboxed(src_p1: Pos2, src_p2: Pos2, dst_p1: Pos2, dst_p2: Pos2) -> Self {
        // Compare the aspect ratios to determine the letterboxing direction.
        let src_width = (src_p1.x - src_p2.x).abs();
        let src_height = (src_p1.y - src_p2.y).abs();
        let dst_width = (dst_p1.x - dst_p2.x).abs();
        let dst_height = (dst_p1.y - dst_p2.y).abs();
        if src_height * dst_width > dst_height * src_width {
            // src is "taller" than dst; pad left and right
            Self::new_horizontal_padded(src_p1, src_p2, dst_p1, dst_p2)
        } else {
            // src is "wider" than dst; pad above and below
            fn tr(p: Pos2) -> Pos2 {
                Pos2::new(p.y, p.x)
            }
            Self::new_horizontal_padded(tr(src_p1), tr(src_p2), tr(dst_p1), tr(dst_p2)).transpose()
        }
    }

    /// Fits a square grid of `size` cells into `rect`, centered.
    pub fn for_grid(size: usize, rect: Rect) -> Self {
        let size = size as f32;
        Self::new_letterboxed(
            Pos2::new(0.0, 0.0),
            Pos2::new(size, size),
            rect.left_top(),
            rect.right_bottom(),
        )
    }

    fn new_horizontal_padded(src_p1: Pos2, src_p2: Pos2, dst_p1: Pos2, dst_p2: Pos2) -> Self {
        let scale_y = (dst_p1.y - dst_p2.y) / (src_p1.y - src_p2.y);
        let offset_y = dst_p1.y - src_p1.y * scale_y;
        let scale_x = scale_y.copysign((src_p2.x - src_p1.x) * (dst_p2.x - dst_p1.x));
        let src_x_middle = (src_p1.x + src_p2.x) / 2.0;
        let dst_x_middle = (dst_p1.x + dst_p2.x) / 2.0;
        let offset_x = dst_x_middle - src_x_middle * scale_x;
        Self {
            scale_x,
            scale_y,
            offset_x,
            offset_y,
        }
    }

    /// Swaps the X and Y components of this `Transform`.
    pub fn transpose(&self) -> Self {
        Self {
            scale_x: self.scale_y,
            scale_y: self.scale_x,
            offset_x: self.offset_y,
            offset_y: self.offset_x,
        }
    }

    /// Returns the inverse `Transform`, or `None` if a scale is zero (an empty screen area)
    pub fn inverse(&self) -> Option<Self> {
        if self.scale_x == 0.0 || self.scale_y == 0.0 {
            return None;
        }
        Some(Self {
            scale_x: self.scale_x.recip(),
            scale_y: self.scale_y.recip(),
            offset_x: -self.offset_x / self.scale_x,
            offset_y: -self.offset_y / self.scale_y,
        })
    }

    /// Applies the transformation to a point.
    pub fn map_point(&self, p: Pos2) -> Pos2 {
        Pos2::new(
            p.x * self.scale_x + self.offset_x,
            p.y * self.scale_y + self.offset_y,
        )
    }

    /// Scales a world distance to screen pixels, along x
    pub fn map_dist(&self, dist: f32) -> f32 {
        dist * self.scale_x.abs()
    }

    /// The screen rect covered by the grid cell at `(row, col)`
    pub fn map_cell(&self, row: usize, col: usize) -> Rect {
        let top_left = Pos2::new(col as f32, row as f32);
        let bottom_right = Pos2::new(col as f32 + 1.0, row as f32 + 1.0);
        Rect::from_two_pos(self.map_point(top_left), self.map_point(bottom_right))
    }

    /// The `(row, col)` of the grid cell under a screen point, if it is inside a grid of `size`
    pub fn cell_at(&self, p: Pos2, size: usize) -> Option<(usize, usize)> {
        let world = self.inverse()?.map_point(p);
        if world.x < 0.0 || world.y < 0.0 {
            return None;
        }
        let (row, col) = (world.y.floor() as usize, world.x.floor() as usize);
        (row < size && col < size).then_some((row, col))
    }
}
