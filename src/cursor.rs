//! Bounds-checked reader over the input bytes.
//!
//! [`ByteCursor`] is a view over caller-owned memory. It only moves forward
//! and never reads past the end of the input: every read is checked before
//! the position changes, and a failed read leaves the position untouched.
use crate::error::BufferError;

/// Forward-only reader over a fixed input slice.
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> ByteCursor<'a> {
    /// New cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Position of the next byte to be read.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Length of the whole input.
    pub fn total_len(&self) -> usize {
        self.data.len()
    }

    /// Number of bytes not yet read.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    fn out_of_bounds(&self, position: usize, requested: usize) -> BufferError {
        BufferError::OutOfBounds {
            position,
            requested,
            total_length: self.data.len(),
        }
    }

    /// Next `n` bytes, position is not changed.
    pub fn peek(&self, n: usize) -> Result<&'a [u8], BufferError> {
        let data: &'a [u8] = self.data;
        data.get(self.position..)
            .and_then(|rest| rest.get(..n))
            .ok_or_else(|| self.out_of_bounds(self.position, n))
    }

    /// Next `n` bytes, position moves past them.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8], BufferError> {
        let slice = self.peek(n)?;
        self.position += n;
        Ok(slice)
    }

    pub fn peek_byte(&self) -> Result<u8, BufferError> {
        Ok(self.peek(1)?[0])
    }

    pub fn take_byte(&mut self) -> Result<u8, BufferError> {
        Ok(self.take(1)?[0])
    }

    /// Next `N` bytes as an array, position moves past them.
    pub fn take_array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let mut out = [0; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// `n` bytes starting `distance` bytes before the input end, position is
    /// not changed.
    ///
    /// Allows looking into fixed-size trailing data before the variable-size
    /// part in front of it is decoded.
    pub fn peek_from_end(&self, distance: usize, n: usize) -> Result<&'a [u8], BufferError> {
        let data: &'a [u8] = self.data;
        let start = match data.len().checked_sub(distance) {
            Some(a) if a >= self.position => a,
            _ => return Err(self.out_of_bounds(self.position, distance)),
        };
        data.get(start..)
            .and_then(|rest| rest.get(..n))
            .ok_or_else(|| self.out_of_bounds(start, n))
    }
}
