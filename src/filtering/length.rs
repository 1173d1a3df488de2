//! comment length filtering
use super::Filter;

/// Simple length filter.
/// Returns `false` if provided comment is less than `min_size` unicode codepoints.
///
/// `min_size` is 0 by default, which keeps everything.
#[derive(Debug, Clone, Default)]
pub struct Length {
    min_size: usize,
}

impl Length {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }
}

impl Filter<&str> for Length {
    fn detect(&self, comment: &str) -> bool {
        comment.chars().count() >= self.min_size
    }
}
