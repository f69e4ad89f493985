use std::fmt;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("fixture not found: {0}")]
    ResourceMissing(String),

    #[error("archive decode error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("CSV decode error: {0}")]
    Csv(#[from] csv::Error),

    #[error("spreadsheet decode error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    #[error("PDF decode error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{check}: expected {expected}, got {actual}")]
    Assertion {
        check: String,
        expected: String,
        actual: String,
    },

    #[error("check failed for archive entry {entry}: {source}")]
    Entry {
        entry: String,
        source: Box<Error>,
    },

    #[error("no entry in {archive} matched {predicate}")]
    NoMatchingEntry { archive: String, predicate: String },
}

impl Error {
    /// Helper for creating expected-vs-actual assertion failures.
    #[must_use]
    pub(crate) fn assertion(
        check: &str,
        expected: &dyn fmt::Debug,
        actual: &dyn fmt::Debug,
    ) -> Self {
        Self::Assertion {
            check: check.to_owned(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }

    /// Helper for assertion failures whose sides are already rendered text.
    ///
    /// Unlike [`Error::assertion`] this does not Debug-format the sides, so
    /// callers that build their own descriptions avoid a second layer of
    /// quoting.
    #[must_use]
    pub(crate) fn assertion_text(
        check: &str,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::Assertion {
            check: check.to_owned(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Attach the archive entry name a failure happened in.
    #[must_use]
    pub(crate) fn in_entry(self, entry: &str) -> Self {
        Self::Entry {
            entry: entry.to_owned(),
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_resource_missing_display() {
        let error = Error::ResourceMissing("testData.json".to_owned());
        assert_eq!(format!("{error}"), "fixture not found: testData.json");
    }

    #[test]
    fn test_error_assertion_display() {
        let error = Error::assertion("row count", &3, &2);
        assert_eq!(format!("{error}"), "row count: expected 3, got 2");
    }

    #[test]
    fn test_error_entry_wraps_source() {
        let error = Error::assertion("sheet count", &2, &1).in_entry("testXLSX.xlsx");
        assert_eq!(
            format!("{error}"),
            "check failed for archive entry testXLSX.xlsx: sheet count: expected 2, got 1"
        );
    }

    #[test]
    fn test_error_no_matching_entry_display() {
        let error = Error::NoMatchingEntry {
            archive: "testZIP.zip".to_owned(),
            predicate: "name containing \"csv\"".to_owned(),
        };
        assert_eq!(
            format!("{error}"),
            "no entry in testZIP.zip matched name containing \"csv\""
        );
    }
}
