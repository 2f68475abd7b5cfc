//! # bmpscene
//!
//! Turn palettized BMP level layouts into 2D object placements.
//!
//! Designers paint a level as a 4- or 8-bit indexed bitmap; this crate
//! decodes the file (header, color table, bit-packed pixel indices) and maps
//! every pixel whose palette index has an assigned object type to a
//! world-space placement record. Instantiating the records into a live scene
//! is the host's job — the crate produces in-memory data only.
//!
//! ## Supported input
//!
//! - Uncompressed BMP, 4 or 8 bits per pixel, bottom-up row order
//! - Color tables of up to 256 (B,G,R,reserved) entries
//!
//! Compressed files, other bit depths, and non-indexed color formats are
//! rejected with [`ConvertError::UnsupportedFormat`].
//!
//! ## Usage
//!
//! ```no_run
//! use bmpscene::{ConvertRequest, PlacementMapping, Unstoppable, Vec2};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Inspect the palette without decoding pixel data
//! let palette = ConvertRequest::new(data).palette()?;
//!
//! // Map palette slots to the host's object identifiers and convert
//! let mapping = PlacementMapping::new(Vec2::ZERO, Vec2::new(16.0, 16.0))
//!     .assign(0, "wall")
//!     .assign(1, "enemy");
//! let records = ConvertRequest::new(data).convert(&mapping, &Unstoppable)?;
//! for record in &records {
//!     println!("{} at {}", record.object_type, record.position);
//! }
//! # Ok::<(), bmpscene::ConvertError>(())
//! ```
//!
//! ## Cancellation
//!
//! Pixel decoding checks an [`enough::Stop`] between rows, so a host running
//! conversions on a worker can cancel cooperatively. Pass [`Unstoppable`]
//! when cancellation is not needed; correctness never depends on the check
//! being observed.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bmp;
mod convert;
mod error;
mod grid;
mod limits;
mod mapping;
mod place;

// Re-exports
pub use bmp::BitmapHeader;
pub use convert::{ConvertRequest, DecodedBitmap};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::ConvertError;
pub use glam::Vec2;
pub use grid::IndexGrid;
pub use limits::Limits;
pub use mapping::{DEFAULT_SLOT_COUNT, PlacementMapping};
pub use place::{PlacementRecord, Placements, place, placements};
pub use rgb::RGBA8;
