//! Group a flat list of values into fixed-size chunks

use crate::errors::ActionError;

/// Splits values into contiguous groups of `size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunks {
    size: usize,
}

impl Chunks {
    /// Create a chunker for groups of `size` values
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `size` is zero
    pub fn new(size: usize) -> Result<Self, ActionError> {
        if size == 0 {
            return Err(ActionError::invalid("Chunk size must be at least 1"));
        }
        Ok(Self { size })
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Partition `values` into groups, preserving order
    ///
    /// # Errors
    /// Returns `InvalidArgument` naming `dest` when the number of values is not
    /// a multiple of the chunk size
    pub fn apply<T>(&self, dest: &str, values: Vec<T>) -> Result<Vec<Vec<T>>, ActionError> {
        if values.len() % self.size != 0 {
            return Err(ActionError::invalid(format!(
                "\"{dest}\" args must be a multiple of {}",
                self.size
            )));
        }

        let mut groups = Vec::with_capacity(values.len() / self.size);
        let mut values = values.into_iter();
        loop {
            let group: Vec<T> = values.by_ref().take(self.size).collect();
            if group.is_empty() {
                break;
            }
            groups.push(group);
        }
        Ok(groups)
    }
}
