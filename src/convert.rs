//! High-level conversion entry points.

use alloc::vec::Vec;

use enough::Stop;
use rgb::RGBA8;

use crate::bmp::{self, BitmapHeader};
use crate::error::ConvertError;
use crate::grid::IndexGrid;
use crate::limits::Limits;
use crate::mapping::PlacementMapping;
use crate::place::{PlacementRecord, place};

/// A single conversion over one borrowed input buffer.
///
/// Each call is independent and reads only the buffer it was given, so a
/// host converting a batch of files may run one request per file on any
/// threads it likes with no coordination.
#[derive(Clone, Copy, Debug)]
pub struct ConvertRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> ConvertRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Parse the file header without touching palette or pixel data.
    pub fn probe(&self) -> Result<BitmapHeader, ConvertError> {
        bmp::header::parse_header(self.data)
    }

    /// Read the color table without decoding pixel data, for hosts that
    /// preview a layout's colors next to its mapping.
    pub fn palette(&self) -> Result<Vec<RGBA8>, ConvertError> {
        let header = bmp::header::parse_header(self.data)?;
        bmp::palette::read_color_table(self.data, &header)
    }

    /// Decode the header, color table, and pixel indices.
    ///
    /// Returns the complete decoded bitmap or fails as a whole; a truncated
    /// input never yields a partial grid.
    pub fn decode(&self, stop: &dyn Stop) -> Result<DecodedBitmap, ConvertError> {
        let header = bmp::header::parse_header(self.data)?;
        if let Some(limits) = self.limits {
            limits.check_dimensions(header.width as u32, header.height as u32)?;
        }
        stop.check()?;
        let palette = bmp::palette::read_color_table(self.data, &header)?;
        let grid = bmp::pixels::decode_index_grid(self.data, &header, stop)?;
        Ok(DecodedBitmap {
            header,
            palette,
            grid,
        })
    }

    /// Decode and translate to placement records in one call.
    pub fn convert<T: Clone>(
        &self,
        mapping: &PlacementMapping<T>,
        stop: &dyn Stop,
    ) -> Result<Vec<PlacementRecord<T>>, ConvertError> {
        let decoded = self.decode(stop)?;
        stop.check()?;
        let records = place(&decoded.grid, mapping);
        if let Some(limits) = self.limits {
            limits.check_placements(records.len())?;
        }
        Ok(records)
    }
}

/// Everything decoded from one bitmap: header fields, the color table, and
/// the index grid. All value data; nothing here refers back to the input
/// buffer.
#[derive(Clone, Debug)]
pub struct DecodedBitmap {
    pub header: BitmapHeader,
    pub palette: Vec<RGBA8>,
    pub grid: IndexGrid,
}

impl DecodedBitmap {
    /// Run placement against this bitmap, e.g. to re-place after the host
    /// edits a mapping without re-decoding the file.
    pub fn place<T: Clone>(&self, mapping: &PlacementMapping<T>) -> Vec<PlacementRecord<T>> {
        place(&self.grid, mapping)
    }
}
