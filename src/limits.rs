/// Resource limits for a conversion.
///
/// All fields default to `None` (no limit). Dimension limits are checked
/// right after the header is parsed, before any pixel data is read;
/// `max_placements` is checked against the finished placement list.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum number of emitted placement records.
    pub max_placements: Option<u64>,
}

impl Limits {
    pub(crate) fn check_dimensions(&self, width: u32, height: u32) -> Result<(), crate::ConvertError> {
        if let Some(max_w) = self.max_width {
            if width > max_w {
                return Err(crate::ConvertError::LimitExceeded(alloc::format!(
                    "width {width} exceeds limit {max_w}"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if height > max_h {
                return Err(crate::ConvertError::LimitExceeded(alloc::format!(
                    "height {height} exceeds limit {max_h}"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(crate::ConvertError::LimitExceeded(alloc::format!(
                    "pixel count {pixels} exceeds limit {max_px}"
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn check_placements(&self, count: usize) -> Result<(), crate::ConvertError> {
        if let Some(max) = self.max_placements {
            if count as u64 > max {
                return Err(crate::ConvertError::LimitExceeded(alloc::format!(
                    "{count} placements exceed limit {max}"
                )));
            }
        }
        Ok(())
    }
}
