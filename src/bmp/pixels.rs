//! Bit-packed pixel-index decoding.

use alloc::vec;

use enough::Stop;

use super::cursor::Cursor;
use super::header::BitmapHeader;
use crate::error::ConvertError;
use crate::grid::IndexGrid;

/// Decode the packed pixel rows into a top-left-origin index grid.
///
/// Rows are stored bottom-to-top on disk, so disk row `i` lands in grid row
/// `height - 1 - i`. Index values are taken verbatim; whether an index has a
/// palette entry or a mapping slot is the placement step's concern.
pub(crate) fn decode_index_grid(
    data: &[u8],
    header: &BitmapHeader,
    stop: &dyn Stop,
) -> Result<IndexGrid, ConvertError> {
    let width = header.width as usize;
    let height = header.height as usize;

    let mut cur = Cursor::new(data);
    cur.set_position(header.pixel_data_offset as usize)?;

    let mut grid = IndexGrid::alloc(width, height)?;
    let mut row_buf = vec![0u8; header.row_size_bytes()];

    for disk_row in 0..height {
        stop.check()?;
        cur.read_exact_bytes(&mut row_buf)?;
        let row = grid.row_mut(height - 1 - disk_row);
        match header.bits_per_pixel {
            8 => row.copy_from_slice(&row_buf[..width]),
            4 => unpack_nibbles(&row_buf, row),
            d => {
                return Err(ConvertError::UnsupportedFormat(alloc::format!(
                    "{d} bits per pixel, expected 4 or 8"
                )));
            }
        }
    }

    Ok(grid)
}

/// Split packed nibbles into one index per output byte, in increasing x
/// order: the high nibble is the even-x pixel, the low nibble the odd-x
/// pixel. Trailing padding bytes in `packed` are ignored.
fn unpack_nibbles(packed: &[u8], out: &mut [u8]) {
    let mut bytes = packed.iter();
    let mut pairs = out.chunks_exact_mut(2);

    (&mut pairs).zip(&mut bytes).for_each(|(pair, byte)| {
        pair[0] = byte >> 4;
        pair[1] = byte & 0x0F;
    });

    // Odd width leaves a final pixel in the high nibble of the next byte.
    if let [last] = pairs.into_remainder() {
        if let Some(byte) = bytes.next() {
            *last = byte >> 4;
        }
    }
}
