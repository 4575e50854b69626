//! Slide index for the home page product preview.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use std::time::Duration;

/// Time between automatic slide advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(3000);

/// Position within a fixed number of slides. Movement wraps at both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub len: usize,
}

impl CarouselState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }
}
