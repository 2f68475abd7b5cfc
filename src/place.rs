//! Index-grid to placement translation.

use alloc::vec::Vec;

use glam::Vec2;

use crate::grid::IndexGrid;
use crate::mapping::PlacementMapping;

/// The engine's output unit: which object type to construct and where.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementRecord<T> {
    pub object_type: T,
    /// `mapping.offset + (x * pixel_size.x, y * pixel_size.y)`.
    pub position: Vec2,
}

/// Translate a decoded grid into placement records.
///
/// Cells are visited row by row from the top, x varying fastest, and the
/// output preserves that traversal order exactly; for a fixed grid and
/// mapping the result is reproducible call over call, so consumers may diff
/// successive runs. Cells whose index is outside the mapping's slot range,
/// or whose slot is unassigned, produce no record.
pub fn place<T: Clone>(grid: &IndexGrid, mapping: &PlacementMapping<T>) -> Vec<PlacementRecord<T>> {
    placements(grid, mapping).collect()
}

/// Lazy form of [`place`]: yields records in the same guaranteed order
/// without building the full list.
pub fn placements<'a, T>(
    grid: &'a IndexGrid,
    mapping: &'a PlacementMapping<T>,
) -> Placements<'a, T> {
    Placements {
        grid,
        mapping,
        x: 0,
        y: 0,
    }
}

/// Iterator over the placements produced by a grid and mapping.
///
/// Borrows both inputs; neither is mutated.
pub struct Placements<'a, T> {
    grid: &'a IndexGrid,
    mapping: &'a PlacementMapping<T>,
    x: usize,
    y: usize,
}

impl<T: Clone> Iterator for Placements<'_, T> {
    type Item = PlacementRecord<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.y < self.grid.height() {
            let (x, y) = (self.x, self.y);
            self.x += 1;
            if self.x >= self.grid.width() {
                self.x = 0;
                self.y += 1;
            }

            let index = self.grid.get(x, y)?;
            if let Some(object_type) = self.mapping.slot(usize::from(index)) {
                return Some(PlacementRecord {
                    object_type: object_type.clone(),
                    position: self.mapping.offset
                        + Vec2::new(x as f32, y as f32) * self.mapping.pixel_size,
                });
            }
        }
        None
    }
}
