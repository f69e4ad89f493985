//! Fixture-driven content verification.
//!
//! For a named fixture (a standalone file or an entry inside a ZIP archive),
//! obtain its bytes from a [`FixtureStore`], hand them to a format-specific
//! decoder, and check literal expectations against the decoded document.
//! Format parsing is delegated entirely to external crates (`zip`, `csv`,
//! `calamine`, `lopdf`, `serde_json`); this crate only wires store, decoder,
//! and expectations together.
//!
//! ```no_run
//! use fixcheck::{
//!     expect_eq, verify_archive_entries, CsvDocument, FixtureStore, NamePredicate,
//! };
//!
//! # fn main() -> Result<(), fixcheck::Error> {
//! let store = FixtureStore::default();
//! verify_archive_entries(
//!     &store,
//!     "testZIP.zip",
//!     &NamePredicate::contains("csv"),
//!     CsvDocument::from_bytes,
//!     |doc| expect_eq("row count", &3, &doc.row_count()),
//! )?;
//! # Ok(())
//! # }
//! ```

mod archive;
mod decode;
mod error;
mod model;
mod store;
mod verify;

pub use archive::{ArchiveEntry, Entries, NamePredicate};
pub use decode::{from_json_slice, CsvDocument, PdfDocument, Workbook};
pub use error::Error;
pub use model::{AdditionalInfo, Instrument};
pub use store::FixtureStore;
pub use verify::{
    expect_absent, expect_contains, expect_eq, expect_member, expect_true, require,
    verify_archive_entries, verify_document,
};
