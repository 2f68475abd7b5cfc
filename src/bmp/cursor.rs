//! Bounds-checked little-endian byte cursor.

use crate::error::ConvertError;

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Seek to an absolute byte offset. Seeking past the end of the input
    /// is a truncation error, not a deferred one.
    pub(crate) fn set_position(&mut self, pos: usize) -> Result<(), ConvertError> {
        if pos > self.data.len() {
            return Err(ConvertError::TruncatedInput);
        }
        self.pos = pos;
        Ok(())
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), ConvertError> {
        let new_pos = self.pos.checked_add(n).ok_or(ConvertError::TruncatedInput)?;
        if new_pos > self.data.len() {
            return Err(ConvertError::TruncatedInput);
        }
        self.pos = new_pos;
        Ok(())
    }

    pub(crate) fn get_u16_le(&mut self) -> Result<u16, ConvertError> {
        Ok(u16::from_le_bytes(self.read_fixed_bytes::<2>()?))
    }

    pub(crate) fn get_u32_le(&mut self) -> Result<u32, ConvertError> {
        Ok(u32::from_le_bytes(self.read_fixed_bytes::<4>()?))
    }

    pub(crate) fn get_i32_le(&mut self) -> Result<i32, ConvertError> {
        Ok(i32::from_le_bytes(self.read_fixed_bytes::<4>()?))
    }

    pub(crate) fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], ConvertError> {
        if self.pos + N > self.data.len() {
            return Err(ConvertError::TruncatedInput);
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }

    pub(crate) fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ConvertError> {
        let n = buf.len();
        if self.pos + n > self.data.len() {
            return Err(ConvertError::TruncatedInput);
        }
        buf.copy_from_slice(&self.data[self.pos..self.pos + n]);
        self.pos += n;
        Ok(())
    }
}
