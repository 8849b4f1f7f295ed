//! Directory listing capability.

use crate::error::ListError;

/// Lists the immediate children of one remote path as raw text lines.
///
/// Paths handed to a lister by the crawler always end with `/`. Listing is
/// blocking; any timeout is the implementation's concern.
pub trait DirectoryLister {
    /// Return one raw line per child entry, in server order.
    fn list(&mut self, path: &str) -> Result<Vec<String>, ListError>;
}

impl<F> DirectoryLister for F
where
    F: FnMut(&str) -> Result<Vec<String>, ListError>,
{
    fn list(&mut self, path: &str) -> Result<Vec<String>, ListError> {
        self(path)
    }
}
