//! Verifier operations and expectation helpers.
//!
//! Each verification is a single linear pass: open, iterate/decode, assert,
//! close. Failures are fatal to the enclosing check; there is no retry and
//! no partial-success reporting beyond the first violated expectation.

use std::fmt;

use tracing::instrument;

use crate::{
    archive::{Entries, NamePredicate},
    error::Error,
    store::FixtureStore,
};

/// Scan a ZIP fixture and check every entry whose name matches `predicate`.
///
/// Entries are produced as a lazy single-pass sequence, filtered by the name
/// predicate, and each surviving entry is decoded and handed to `check`.
/// Iteration does not stop at the first match: when the fixture holds several
/// matching entries, every one of them is checked.
///
/// Returns the number of matched entries, so callers can assert stronger
/// cardinality when the fixture guarantees uniqueness.
///
/// # Errors
///
/// - `Error::ResourceMissing` when the archive fixture cannot be located.
/// - `Error::Zip` when the fixture is not a readable ZIP container.
/// - `Error::Entry` wrapping the decode or assertion failure of a matching
///   entry, tagged with the entry name.
/// - `Error::NoMatchingEntry` when no entry name matched the predicate. A
///   scan over zero entries is a failed check, not a silent pass.
#[instrument(skip(store, decode, check), fields(predicate = %predicate))]
pub fn verify_archive_entries<D>(
    store: &FixtureStore,
    archive_name: &str,
    predicate: &NamePredicate,
    decode: impl Fn(&[u8]) -> Result<D, Error>,
    check: impl Fn(&D) -> Result<(), Error>,
) -> Result<usize, Error> {
    let bytes = store.read(archive_name)?;
    let mut matched = 0;
    for entry in Entries::from_bytes(bytes)? {
        let entry = entry?;
        if !predicate.matches(entry.name()) {
            continue;
        }
        let document = decode(entry.bytes()).map_err(|error| {
            tracing::error!(entry = entry.name(), %error, "entry decode failed");
            error.in_entry(entry.name())
        })?;
        check(&document).map_err(|error| {
            tracing::error!(entry = entry.name(), %error, "entry check failed");
            error.in_entry(entry.name())
        })?;
        matched += 1;
    }
    if matched == 0 {
        tracing::error!(archive = archive_name, "no archive entry matched");
        return Err(Error::NoMatchingEntry {
            archive: archive_name.to_owned(),
            predicate: predicate.to_string(),
        });
    }
    Ok(matched)
}

/// Decode a whole standalone fixture body and run `check` against it.
///
/// # Errors
///
/// - `Error::ResourceMissing` when the fixture cannot be located.
/// - The decode error when the body does not parse as the expected format.
/// - The check's own failure, unchanged.
#[instrument(skip(store, decode, check))]
pub fn verify_document<D>(
    store: &FixtureStore,
    fixture_name: &str,
    decode: impl Fn(&[u8]) -> Result<D, Error>,
    check: impl Fn(&D) -> Result<(), Error>,
) -> Result<(), Error> {
    let bytes = store.read(fixture_name)?;
    let document = decode(&bytes).map_err(|error| {
        tracing::error!(fixture = fixture_name, %error, "fixture decode failed");
        error
    })?;
    check(&document)
}

/// Expect two values to compare equal.
///
/// # Errors
///
/// Returns `Error::Assertion` carrying the Debug renderings of both sides.
pub fn expect_eq<T>(check: &str, expected: &T, actual: &T) -> Result<(), Error>
where
    T: PartialEq + fmt::Debug + ?Sized,
{
    if expected == actual {
        Ok(())
    } else {
        Err(Error::assertion(check, &expected, &actual))
    }
}

/// Expect a condition to hold.
///
/// # Errors
///
/// Returns `Error::Assertion` when `actual` is false.
pub fn expect_true(check: &str, actual: bool) -> Result<(), Error> {
    expect_eq(check, &true, &actual)
}

/// Expect `needle` to appear somewhere in `haystack`.
///
/// # Errors
///
/// Returns `Error::Assertion` naming the missing substring.
pub fn expect_contains(check: &str, haystack: &str, needle: &str) -> Result<(), Error> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(Error::assertion_text(
            check,
            format!("text containing {needle:?}"),
            "text without it",
        ))
    }
}

/// Expect `needle` to appear nowhere in `haystack`.
///
/// # Errors
///
/// Returns `Error::Assertion` naming the forbidden substring.
pub fn expect_absent(check: &str, haystack: &str, needle: &str) -> Result<(), Error> {
    if haystack.contains(needle) {
        Err(Error::assertion_text(
            check,
            format!("no occurrence of {needle:?}"),
            "text containing it",
        ))
    } else {
        Ok(())
    }
}

/// Expect an unordered collection to contain `expected`.
///
/// # Errors
///
/// Returns `Error::Assertion` listing the actual members.
pub fn expect_member<'a, I>(check: &str, members: I, expected: &str) -> Result<(), Error>
where
    I: IntoIterator<Item = &'a String>,
{
    let members: Vec<&str> = members.into_iter().map(String::as_str).collect();
    if members.contains(&expected) {
        Ok(())
    } else {
        Err(Error::assertion_text(
            check,
            format!("member {expected:?}"),
            format!("{members:?}"),
        ))
    }
}

/// Turn an absent optional value into an assertion failure.
///
/// # Errors
///
/// Returns `Error::Assertion` when `value` is `None`.
pub fn require<T>(check: &str, value: Option<T>) -> Result<T, Error> {
    value.ok_or_else(|| Error::assertion_text(check, "a present value", "nothing"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expect_eq_reports_both_sides() {
        let error = expect_eq("row count", &3, &2).err();
        assert!(matches!(
            error,
            Some(Error::Assertion { check, expected, actual })
                if check == "row count" && expected == "3" && actual == "2"
        ));
    }

    #[test]
    fn test_expect_eq_passes_on_equal_values() {
        assert!(expect_eq("name", "GOOGL", "GOOGL").is_ok());
    }

    #[test]
    fn test_expect_contains_and_absent_are_duals() {
        assert!(expect_contains("text", "hello world", "world").is_ok());
        assert!(expect_contains("text", "hello world", "mars").is_err());
        assert!(expect_absent("text", "hello world", "mars").is_ok());
        assert!(expect_absent("text", "hello world", "world").is_err());
    }

    #[test]
    fn test_expect_member_lists_actual_members_on_failure() {
        let members = vec!["NASDAQ".to_owned(), "TSE".to_owned()];
        assert!(expect_member("exchanges", &members, "NASDAQ").is_ok());
        let error = expect_member("exchanges", &members, "LSE").err();
        assert!(matches!(
            error,
            Some(Error::Assertion { expected, .. }) if expected == "member \"LSE\""
        ));
    }

    #[test]
    fn test_failure_messages_quote_literals_only_once() {
        let members = vec!["NASDAQ".to_owned(), "TSE".to_owned()];
        let message = expect_member("exchanges", &members, "LSE")
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();
        assert_eq!(
            message,
            "exchanges: expected member \"LSE\", got [\"NASDAQ\", \"TSE\"]"
        );

        let message = expect_contains("pdf text", "hello world", "mars")
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();
        assert_eq!(
            message,
            "pdf text: expected text containing \"mars\", got text without it"
        );

        let message = expect_absent("pdf text", "secret word", "secret")
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();
        assert_eq!(
            message,
            "pdf text: expected no occurrence of \"secret\", got text containing it"
        );

        let message = require::<i64>("cell A1", None)
            .err()
            .map(|error| error.to_string())
            .unwrap_or_default();
        assert_eq!(message, "cell A1: expected a present value, got nothing");
    }

    #[test]
    fn test_require_fails_on_none() {
        assert!(require("cell A1", Some(1)).is_ok());
        assert!(require::<i64>("cell A1", None).is_err());
    }
}
