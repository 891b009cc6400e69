/// Repetition bounds. `max: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Repeat {
    pub min: usize,
    pub max: Option<usize>,
}

impl Repeat {
    #[must_use]
    pub const fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    /// Returns true if another repetition may be attempted after `count`.
    #[must_use]
    pub fn allows_more(self, count: usize) -> bool {
        self.max.is_none_or(|max| count < max)
    }
}
