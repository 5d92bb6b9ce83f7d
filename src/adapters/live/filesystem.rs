//! Live filesystem adapter using `std::fs`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::ports::filesystem::{FileSystem, PathError};

/// Live filesystem adapter backed by real disk I/O.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read(&self, path: &Path) -> Result<Vec<u8>, PathError> {
        let mut file = File::open(path).map_err(|e| PathError::new("open", path, e))?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| PathError::new("read", path, e))?;
        Ok(contents)
    }
}
