//! File header and DIB header interpretation.

use super::cursor::Cursor;
use crate::error::ConvertError;

/// Size of the BMP file header preceding the DIB header.
pub(crate) const FILE_HEADER_SIZE: usize = 14;

/// Absolute offset of the `colorsUsed` DIB field (14 + 32).
const COLORS_USED_OFFSET: usize = 46;

/// The header fields of an indexed BMP needed for decoding.
///
/// Parsed once per input and immutable afterwards. Only uncompressed 4- and
/// 8-bit files with positive dimensions pass validation; everything the
/// decoder does not consume (planes, resolution, image size) is skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapHeader {
    /// Byte offset of the packed pixel rows, from the start of the file.
    pub pixel_data_offset: u32,
    /// Size of the DIB header; the color table starts right after it.
    pub dib_header_size: u32,
    /// Width in pixels. Always positive.
    pub width: i32,
    /// Height in pixels. Always positive; rows are stored bottom-up.
    pub height: i32,
    /// Bit depth, 4 or 8.
    pub bits_per_pixel: u16,
    /// Compression scheme. Always 0 (uncompressed).
    pub compression: u32,
    /// Resolved color-table length: the on-disk `colorsUsed` value, with 0
    /// replaced by 16 for 4-bit files (the default-palette convention).
    pub color_table_entry_count: u32,
}

impl BitmapHeader {
    /// Row byte width of the packed pixel data, rounded up to a 4-byte
    /// boundary.
    pub fn row_size_bytes(&self) -> usize {
        (self.width as usize * usize::from(self.bits_per_pixel)).div_ceil(32) * 4
    }
}

pub(crate) fn parse_header(data: &[u8]) -> Result<BitmapHeader, ConvertError> {
    let mut cur = Cursor::new(data);

    // Signature, file size, and reserved fields carry nothing the decoder
    // needs.
    cur.skip(10)?;
    let pixel_data_offset = cur.get_u32_le()?;
    let dib_header_size = cur.get_u32_le()?;
    let width = cur.get_i32_le()?;
    let height = cur.get_i32_le()?;
    cur.skip(2)?; // color planes
    let bits_per_pixel = cur.get_u16_le()?;
    let compression = cur.get_u32_le()?;

    if compression != 0 {
        return Err(ConvertError::UnsupportedFormat(alloc::format!(
            "compressed bitmap (compression scheme {compression})"
        )));
    }
    if bits_per_pixel != 4 && bits_per_pixel != 8 {
        return Err(ConvertError::UnsupportedFormat(alloc::format!(
            "{bits_per_pixel} bits per pixel, expected 4 or 8"
        )));
    }
    if width <= 0 {
        return Err(ConvertError::InvalidHeader(alloc::format!(
            "width must be positive, got {width}"
        )));
    }
    if height <= 0 {
        return Err(ConvertError::InvalidHeader(alloc::format!(
            "height must be positive, got {height} (top-down storage is not supported)"
        )));
    }

    // `colorsUsed` exists only in DIB headers large enough to contain it.
    let colors_used = if dib_header_size >= 36 {
        cur.set_position(COLORS_USED_OFFSET)?;
        cur.get_u32_le()?
    } else {
        0
    };

    let color_table_entry_count = if colors_used == 0 && bits_per_pixel == 4 {
        16
    } else {
        colors_used
    };

    let max_entries = 1u32 << bits_per_pixel;
    if color_table_entry_count > max_entries {
        return Err(ConvertError::InvalidHeader(alloc::format!(
            "color table of {color_table_entry_count} entries exceeds the {max_entries} \
             expressible at {bits_per_pixel} bits per pixel"
        )));
    }

    Ok(BitmapHeader {
        pixel_data_offset,
        dib_header_size,
        width,
        height,
        bits_per_pixel,
        compression,
        color_table_entry_count,
    })
}
