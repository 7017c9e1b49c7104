//! Path segment encoding for identifiers interpolated into path templates.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::{Error, Result};

/// Characters escaped inside a single path segment.
///
/// Unreserved characters (`A-Z a-z 0-9 - . _ ~`) pass through.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// One identifier, percent-encoded for use as a path segment.
///
/// # Errors
///
/// Returns [`Error::InvalidRequest`] for an empty identifier, `.` or `..`:
/// URL resolution would collapse them and address another resource.
///
/// # Example
///
/// ```
/// use lockstep_core::segment;
///
/// let path = format!("/api/v1/Payments/{}", segment("abc 123/x")?);
/// assert_eq!(path, "/api/v1/Payments/abc%20123%2Fx");
/// assert!(segment("..").is_err());
/// # Ok::<(), lockstep_core::Error>(())
/// ```
pub fn segment(value: &str) -> Result<Segment<'_>> {
    match value {
        "" | "." | ".." => Err(Error::invalid_request(format!(
            "identifier {value:?} cannot be used as a path segment"
        ))),
        _ => Ok(Segment(value)),
    }
}

/// Display adapter returned by [`segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a>(&'a str);

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&utf8_percent_encode(self.0, PATH_SEGMENT_ENCODE_SET), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(value: &str) -> String {
        segment(value).expect("usable identifier").to_string()
    }

    #[test]
    fn plain_identifiers_pass_through() {
        assert_eq!(
            encoded("3fa85f64-5717-4562-b3fc-2c963f66afa6"),
            "3fa85f64-5717-4562-b3fc-2c963f66afa6"
        );
        assert_eq!(encoded("USD"), "USD");
    }

    #[test]
    fn separators_are_escaped() {
        assert_eq!(encoded("a/b"), "a%2Fb");
        assert_eq!(encoded("a?b#c"), "a%3Fb%23c");
        assert_eq!(encoded("100%"), "100%25");
        assert_eq!(encoded("{id}"), "%7Bid%7D");
        assert_eq!(encoded("%2e%2e"), "%252e%252e");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(encoded("café"), "caf%C3%A9");
    }

    #[test]
    fn dot_segments_and_empty_identifiers_are_rejected() {
        for value in ["", ".", ".."] {
            let err = segment(value).expect_err("rejected");
            assert!(matches!(err, Error::InvalidRequest(_)), "{value:?}: {err}");
        }
        assert_eq!(encoded("..."), "...");
        assert_eq!(encoded(".hidden"), ".hidden");
    }

    #[test]
    fn rejected_identifiers_would_escape_the_resource() {
        let base = url::Url::parse("https://api.lockstep.io/").expect("base");
        let joined = base.join("api/v1/Payments/..").expect("join");
        assert_eq!(joined.path(), "/api/v1/");
    }
}
