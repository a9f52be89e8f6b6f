use crate::{Config, Error, Result};
use tracing::warn;

/// Dense `width x height` field of cells packed 8 per byte.
///
/// Cell `(row, col)` has linear index `row * width + col` and is stored in
/// byte `idx / 8` at bit `idx % 8`, least significant bit first. Padding bits
/// of the last byte are zero after construction and never touched afterwards.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct BitGrid {
    bits: Vec<u8>,
    width: u32,
    height: u32,
    area: usize,
}

impl BitGrid {
    const CELLS_IN_CHUNK: usize = u8::BITS as usize;

    /// Creates a field filled with dead cells.
    pub fn blank(width: u32, height: u32) -> Result<Self> {
        let area = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n != 0)
            .ok_or(Error::InvalidDimensions { width, height })?;
        Ok(Self {
            bits: vec![0; area.div_ceil(Self::CELLS_IN_CHUNK)],
            width,
            height,
            area,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells, `width * height`.
    pub fn area(&self) -> usize {
        self.area
    }

    /// Linear index of `(row, col)`.
    pub fn index(&self, row: u32, col: u32) -> Result<usize> {
        if row >= self.height || col >= self.width {
            warn!(
                row,
                col,
                width = self.width,
                height = self.height,
                "cell is outside the field"
            );
            return Err(Error::OutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row as usize * self.width as usize + col as usize)
    }

    pub fn get(&self, row: u32, col: u32) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.bit(idx))
    }

    pub fn set(&mut self, row: u32, col: u32, alive: bool) -> Result<()> {
        let idx = self.index(row, col)?;
        self.put(idx, alive);
        Ok(())
    }

    /// Flips a single cell; only the byte holding it is written.
    pub fn toggle(&mut self, row: u32, col: u32) -> Result<()> {
        let idx = self.index(row, col)?;
        self.bits[idx / Self::CELLS_IN_CHUNK] ^= 1 << (idx % Self::CELLS_IN_CHUNK);
        Ok(())
    }

    pub fn get_index(&self, idx: usize) -> Result<bool> {
        self.check_index(idx)?;
        Ok(self.bit(idx))
    }

    pub fn set_index(&mut self, idx: usize, alive: bool) -> Result<()> {
        self.check_index(idx)?;
        self.put(idx, alive);
        Ok(())
    }

    fn check_index(&self, idx: usize) -> Result<()> {
        if idx >= self.area {
            return Err(Error::IndexOutOfRange {
                idx,
                len: self.area,
            });
        }
        Ok(())
    }

    /// `idx` must be below `area()`.
    pub(crate) fn bit(&self, idx: usize) -> bool {
        (self.bits[idx / Self::CELLS_IN_CHUNK] >> (idx % Self::CELLS_IN_CHUNK)) & 1 != 0
    }

    /// `idx` must be below `area()`.
    pub(crate) fn put(&mut self, idx: usize, alive: bool) {
        let pos = idx / Self::CELLS_IN_CHUNK;
        let mask = 1 << (idx % Self::CELLS_IN_CHUNK);
        if alive {
            self.bits[pos] |= mask;
        } else {
            self.bits[pos] &= !mask;
        }
    }

    /// Sets every cell to `f(idx)`.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize) -> bool) {
        for idx in 0..self.area {
            self.put(idx, f(idx));
        }
    }

    /// Loads row-major `states`, one per cell.
    pub fn fill_from(&mut self, states: &[bool]) -> Result<()> {
        if states.len() != self.area {
            return Err(Error::LengthMismatch {
                expected: self.area,
                actual: states.len(),
            });
        }
        self.fill_with(|idx| states[idx]);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Backing bytes, `ceil(width * height / 8)` of them.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Cell states in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.area).map(|idx| self.bit(idx))
    }

    /// Total number of alive cells.
    pub fn population(&self) -> u64 {
        self.bits.iter().map(|b| b.count_ones() as u64).sum()
    }
}

impl std::fmt::Display for BitGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let w = self.width as usize;
        for (i, alive) in self.iter().enumerate() {
            if i != 0 && i % w == 0 {
                writeln!(f)?;
            }
            let glyph = if alive {
                Config::ALIVE_GLYPH
            } else {
                Config::DEAD_GLYPH
            };
            write!(f, "{}", glyph)?;
        }
        Ok(())
    }
}
