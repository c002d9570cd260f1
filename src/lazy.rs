//! Fetch-once cell for related collections that are loaded on demand.

use std::fmt;

use once_cell::sync::OnceCell;

/// Holds a value that is fetched on first read and memoized afterwards.
///
/// Concurrent first reads block until one fetch finishes. A failed fetch
/// leaves the cell empty, so the next read tries again.
pub struct FetchOnce<T> {
    cell: OnceCell<T>,
}

impl<T> FetchOnce<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Return the cached value, if one has been fetched.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_fetched(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Return the cached value, or run `fetch` and cache its result.
    pub fn get_or_try_fetch<E, F>(&self, fetch: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.cell.get_or_try_init(fetch)
    }
}

impl<T> Default for FetchOnce<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for FetchOnce<T> {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FetchOnce<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(value) => f.debug_tuple("Fetched").field(value).finish(),
            None => f.write_str("Unfetched"),
        }
    }
}
