//! User-authored index-to-object mapping configuration.

use alloc::vec::Vec;

use glam::Vec2;

/// Slot count of a default-sized mapping table, one slot per 4-bit palette
/// index.
pub const DEFAULT_SLOT_COUNT: usize = 16;

/// Maps palette indices to object types and grid cells to world positions.
///
/// `T` is whatever identifier the host resolves to a constructible object
/// (a prefab path, an enum, an asset id). The slot table has a fixed length
/// after construction; an unassigned slot means the matching palette index
/// places nothing.
///
/// Built by pure construction and treated as read-only input from then on:
///
/// ```
/// use bmpscene::{PlacementMapping, Vec2};
///
/// let mapping = PlacementMapping::new(Vec2::ZERO, Vec2::new(16.0, 16.0))
///     .assign(0, "wall")
///     .assign(2, "spawner");
/// assert_eq!(mapping.slot(2), Some(&"spawner"));
/// assert_eq!(mapping.slot(1), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementMapping<T> {
    /// World-space position of grid cell (0, 0).
    pub offset: Vec2,
    /// World-space distance covered by one pixel along each axis.
    pub pixel_size: Vec2,
    slots: Vec<Option<T>>,
}

impl<T> PlacementMapping<T> {
    /// A mapping with [`DEFAULT_SLOT_COUNT`] unassigned slots.
    pub fn new(offset: Vec2, pixel_size: Vec2) -> Self {
        Self::with_slot_count(offset, pixel_size, DEFAULT_SLOT_COUNT)
    }

    /// A mapping with `slot_count` unassigned slots, for hosts that key
    /// 8-bit layouts beyond the default table.
    pub fn with_slot_count(offset: Vec2, pixel_size: Vec2, slot_count: usize) -> Self {
        Self {
            offset,
            pixel_size,
            slots: (0..slot_count).map(|_| None).collect(),
        }
    }

    /// Assign an object type to a palette slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside the table; the table length is fixed at
    /// construction.
    pub fn assign(mut self, slot: usize, object_type: T) -> Self {
        assert!(
            slot < self.slots.len(),
            "slot {slot} out of range for a {}-slot mapping",
            self.slots.len()
        );
        self.slots[slot] = Some(object_type);
        self
    }

    /// The object type assigned to `index`, or `None` when the index is
    /// out of range or the slot is unassigned.
    pub fn slot(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }
}
