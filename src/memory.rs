/// Read-only window onto the engine's current cell buffer.
///
/// Byte `i`, bit `j` (least significant first) holds cell `i * 8 + j`.
/// The view borrows the engine, so it cannot outlive the next `tick`.
/// Hosts that take the raw parts across an FFI boundary must re-acquire them
/// after every `tick`: the buffer behind the pointer swaps roles with the
/// scratch buffer. `toggle_cell` keeps the pointer valid.
#[derive(Clone, Copy, Debug)]
pub struct MemoryView<'a> {
    bytes: &'a [u8],
    cells: usize,
}

impl<'a> MemoryView<'a> {
    pub(crate) fn new(bytes: &'a [u8], cells: usize) -> Self {
        Self { bytes, cells }
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.bytes.as_ptr()
    }

    /// Length in bytes, `ceil(cells / 8)`.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of cells covered by the buffer.
    pub fn cells(&self) -> usize {
        self.cells
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Whether cell `idx` is alive, `None` past the last cell.
    pub fn is_alive(&self, idx: usize) -> Option<bool> {
        (idx < self.cells).then(|| (self.bytes[idx / 8] >> (idx % 8)) & 1 != 0)
    }

    pub fn into_raw_parts(self) -> (*const u8, usize) {
        (self.bytes.as_ptr(), self.bytes.len())
    }
}
