//! Color-table extraction.

use alloc::vec::Vec;

use rgb::RGBA8;

use super::cursor::Cursor;
use super::header::{BitmapHeader, FILE_HEADER_SIZE};
use crate::error::ConvertError;

/// Read the color table that follows the DIB header.
///
/// Entries are stored on disk as (blue, green, red, reserved) quadruplets
/// and come back reordered to RGB with full opacity. The returned length
/// equals the header's resolved entry count, which may be 0 for an 8-bit
/// file that declares no colors.
pub(crate) fn read_color_table(
    data: &[u8],
    header: &BitmapHeader,
) -> Result<Vec<RGBA8>, ConvertError> {
    let mut cur = Cursor::new(data);
    cur.set_position(FILE_HEADER_SIZE + header.dib_header_size as usize)?;

    let count = header.color_table_entry_count as usize;
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        let [b, g, r, _reserved] = cur.read_fixed_bytes::<4>()?;
        entries.push(RGBA8::new(r, g, b, 255));
    }
    Ok(entries)
}
