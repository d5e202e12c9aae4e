//! Carousel index over the project table.

/// Index into a fixed-length sequence that wraps in both directions.
///
/// An empty sequence is tolerated: the index stays at 0 and every operation
/// is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Starts at the first item of a sequence of `len` items.
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Starts at `index`, clamped into range.
    pub fn starting_at(len: usize, index: usize) -> Self {
        let mut carousel = Self::new(len);
        carousel.go_to(index);
        carousel
    }

    /// Current index.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of items.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True when there is nothing to rotate through.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advances by one, wrapping from the last item to the first.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Steps back by one, wrapping from the first item to the last.
    pub fn previous(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jumps to `index`, clamping past-the-end values to the last item.
    pub fn go_to(&mut self, index: usize) -> usize {
        self.index = index.min(self.len.saturating_sub(1));
        self.index
    }

    /// The item at the current index, derived from `items` on every call.
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}
