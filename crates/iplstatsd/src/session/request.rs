//! Restricted-grammar request parsing.
//!
//! Requests are flat JSON objects of string keys to string values. The
//! grammar is deliberately narrower than JSON: no nesting, no arrays, no
//! numeric or boolean literals, no escaped quotes. A line is stripped of its
//! outer braces, split on commas into pairs, and each pair split on its first
//! colon; every part is trimmed and then has all double-quote characters
//! removed. Commas embedded inside values therefore corrupt parsing. These
//! failure modes are part of the protocol contract and must not be "fixed"
//! by swapping in a full JSON parser.

use std::collections::HashMap;

use thiserror::Error;

/// Parsed request: a flat map of string fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    fields: HashMap<String, String>,
}

/// Errors surfaced while decoding a request line.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RequestParseError {
    /// The line is not brace-delimited.
    #[error("line is not a flat JSON object")]
    NotAnObject,
    /// A comma-separated pair had no colon separator.
    #[error("pair is missing a colon separator")]
    MalformedPair,
}

impl Request {
    /// Decodes one line using the restricted grammar.
    ///
    /// An empty object (`{}`) parses successfully to zero fields; whether a
    /// `command` field is present is the dispatcher's concern, not the
    /// parser's. Duplicate keys keep the last value.
    ///
    /// # Errors
    ///
    /// Returns [`RequestParseError`] when the line is not brace-delimited or
    /// any pair lacks a colon. A malformed pair invalidates the whole line;
    /// there are no partial results.
    pub fn parse(line: &str) -> Result<Self, RequestParseError> {
        let trimmed = line.trim();
        let inner = trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or(RequestParseError::NotAnObject)?
            .trim();

        let mut fields = HashMap::new();
        if inner.is_empty() {
            return Ok(Self { fields });
        }

        for pair in inner.split(',') {
            let (key, value) = pair
                .split_once(':')
                .ok_or(RequestParseError::MalformedPair)?;
            fields.insert(strip_part(key), strip_part(value));
        }
        Ok(Self { fields })
    }

    /// The `command` field, when present.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        self.field("command")
    }

    /// Looks up an arbitrary field.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// Trims a pair fragment and removes every double-quote character.
fn strip_part(part: &str) -> String {
    part.trim().replace('"', "")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn parses_a_minimal_request() {
        let request = Request::parse(r#"{"command":"getTeams"}"#).expect("parse request");
        assert_eq!(request.command(), Some("getTeams"));
    }

    #[test]
    fn parses_multiple_fields() {
        let request =
            Request::parse(r#"{"command":"getPlayer","name":"Dhoni"}"#).expect("parse request");
        assert_eq!(request.command(), Some("getPlayer"));
        assert_eq!(request.field("name"), Some("Dhoni"));
    }

    #[test]
    fn empty_object_has_no_fields() {
        let request = Request::parse("{ }").expect("parse empty object");
        assert_eq!(request.command(), None);
    }

    #[test]
    fn trims_surrounding_whitespace_and_quotes() {
        let request = Request::parse("  { \"command\" : \"exit\" }  ").expect("parse request");
        assert_eq!(request.command(), Some("exit"));
    }

    #[test]
    fn duplicate_keys_keep_the_last_value() {
        let request =
            Request::parse(r#"{"command":"first","command":"second"}"#).expect("parse request");
        assert_eq!(request.command(), Some("second"));
    }

    #[test]
    fn value_embedded_colon_survives_the_first_colon_split() {
        let request =
            Request::parse(r#"{"command":"getPlayer","name":"a:b"}"#).expect("parse request");
        assert_eq!(request.field("name"), Some("a:b"));
    }

    #[test]
    fn value_embedded_comma_corrupts_the_line() {
        // The grammar splits on every comma, so the fragment after the
        // embedded one has no colon and invalidates the whole line.
        let result = Request::parse(r#"{"command":"getPlayer","name":"a,b"}"#);
        assert_eq!(result, Err(RequestParseError::MalformedPair));
    }

    #[rstest]
    #[case::plain_text("not json")]
    #[case::missing_open_brace(r#""command":"exit"}"#)]
    #[case::missing_close_brace(r#"{"command":"exit""#)]
    #[case::lone_brace("{")]
    fn rejects_lines_that_are_not_objects(#[case] line: &str) {
        assert_eq!(Request::parse(line), Err(RequestParseError::NotAnObject));
    }

    #[rstest]
    #[case::no_colon(r#"{"command"}"#)]
    #[case::trailing_comma(r#"{"command":"exit",}"#)]
    fn rejects_pairs_without_a_colon(#[case] line: &str) {
        assert_eq!(Request::parse(line), Err(RequestParseError::MalformedPair));
    }
}
