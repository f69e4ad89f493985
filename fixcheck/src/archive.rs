use std::{
    fmt,
    io::{Cursor, Read as _},
};

use zip::ZipArchive;

use crate::error::Error;

/// Predicate over archive entry names.
#[derive(Debug, Clone)]
pub enum NamePredicate {
    /// Entry name contains the fragment anywhere.
    Contains(String),
    /// Entry name matches exactly.
    Exact(String),
}

impl NamePredicate {
    #[must_use]
    pub fn contains(fragment: impl Into<String>) -> Self {
        Self::Contains(fragment.into())
    }

    #[must_use]
    pub fn exact(name: impl Into<String>) -> Self {
        Self::Exact(name.into())
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Contains(fragment) => name.contains(fragment.as_str()),
            Self::Exact(expected) => name == expected,
        }
    }
}

impl fmt::Display for NamePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contains(fragment) => write!(f, "name containing {fragment:?}"),
            Self::Exact(expected) => write!(f, "name {expected:?}"),
        }
    }
}

/// One named sub-stream read out of a ZIP fixture.
///
/// Entries are transient: the verifier consumes each one at most once and
/// does not retain it past the check.
#[derive(Debug)]
pub struct ArchiveEntry {
    name: String,
    bytes: Vec<u8>,
}

impl ArchiveEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Finite, single-pass sequence of `(name, bytes)` pairs over a ZIP fixture.
///
/// Directory entries are skipped. The sequence is not restartable; build a
/// new one from the fixture bytes to scan again.
pub struct Entries {
    archive: ZipArchive<Cursor<Vec<u8>>>,
    index: usize,
}

impl Entries {
    /// Open the archive held in `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Zip` when the bytes are not a readable ZIP container.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Error> {
        Ok(Self {
            archive: ZipArchive::new(Cursor::new(bytes))?,
            index: 0,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }
}

impl fmt::Debug for Entries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries")
            .field("len", &self.archive.len())
            .field("index", &self.index)
            .finish()
    }
}

impl Iterator for Entries {
    type Item = Result<ArchiveEntry, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.archive.len() {
            let index = self.index;
            self.index += 1;
            match self.archive.by_index(index) {
                Ok(mut file) => {
                    if !file.is_file() {
                        continue;
                    }
                    let name = file.name().to_owned();
                    let mut bytes = Vec::new();
                    if let Err(error) = file.read_to_end(&mut bytes) {
                        return Some(Err(error.into()));
                    }
                    return Some(Ok(ArchiveEntry { name, bytes }));
                }
                Err(error) => return Some(Err(error.into())),
            }
        }
        None
    }
}
