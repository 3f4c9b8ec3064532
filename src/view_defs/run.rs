/// A contiguous run of bits, `[start, start + length)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub start: usize,
    pub length: usize,
}

impl Run {
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// One past the last bit of the run
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}
