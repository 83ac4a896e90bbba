use crate::node::{SourcePosition, Span};
use crate::tag_name::TagName;
use crate::token::TokenKind;
use crate::tree_builder::InsertionMode;

/// A recoverable diagnostic produced during parsing.
///
/// Diagnostics never stop the parse (short of the `stop_on_first_error`
/// option); they accumulate on the output in source order. Rendering into
/// human-readable text, caret lines included, is a consumer concern — the
/// record carries the position, the offending source span, and a
/// kind-specific payload, which is everything a formatter needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub position: SourcePosition,

    /// The source text the diagnostic refers to.
    pub original_text: Span,

    pub error: ErrorType,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorType {
    /// A byte sequence that is not valid UTF-8; carries the rejected byte.
    Utf8Invalid { code_point: u32 },

    /// Input ended in the middle of a UTF-8 sequence.
    Utf8Truncated { code_point: u32 },

    /// A code point on the HTML5 parse-error list (controls,
    /// noncharacters); replaced with U+FFFD.
    InvalidCodePoint { code_point: u32 },

    /// `&#` or `&#x` with nothing after it.
    NumericCharRefNoDigits { code_point: u32 },

    NumericCharRefWithoutSemicolon { code_point: u32 },

    /// A numeric reference naming a forbidden or replaced code point.
    NumericCharRefInvalid { code_point: u32 },

    /// A legacy named reference consumed without its semicolon; the span
    /// payload covers the matched name.
    NamedCharRefWithoutSemicolon { text: Span },

    /// `&name;` that looks like a reference but names nothing.
    NamedCharRefInvalid { text: Span },

    /// The same attribute name appeared twice on one tag; the first
    /// occurrence wins.
    DuplicateAttribute {
        name: Box<str>,
        original_index: usize,
        new_index: usize,
    },

    /// A token the tree constructor had to ignore or route through a
    /// fallback; the payload snapshots where the parser stood.
    Parser {
        insertion_mode: InsertionMode,
        token_kind: TokenKind,
        open_tags: Vec<TagName>,
    },

    /// A self-closing flag on a tag where it has no effect.
    UnacknowledgedSelfClosingTag,

    /// Catchall for tokenizer states which report generic parse errors.
    Tokenizer,
}

impl From<&ErrorType> for &str {
    fn from(val: &ErrorType) -> Self {
        match val {
            ErrorType::Utf8Invalid { .. } => "utf8-invalid",
            ErrorType::Utf8Truncated { .. } => "utf8-truncated",
            ErrorType::InvalidCodePoint { .. } => "invalid-codepoint",
            ErrorType::NumericCharRefNoDigits { .. } => "numeric-char-ref-no-digits",
            ErrorType::NumericCharRefWithoutSemicolon { .. } => {
                "numeric-char-ref-without-semicolon"
            }
            ErrorType::NumericCharRefInvalid { .. } => "numeric-char-ref-invalid",
            ErrorType::NamedCharRefWithoutSemicolon { .. } => "named-char-ref-without-semicolon",
            ErrorType::NamedCharRefInvalid { .. } => "named-char-ref-invalid",
            ErrorType::DuplicateAttribute { .. } => "duplicate-attribute",
            ErrorType::Parser { .. } => "parser",
            ErrorType::UnacknowledgedSelfClosingTag => "unacknowledged-self-closing-tag",
            ErrorType::Tokenizer => "tokenizer",
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind: &str = (&self.error).into();
        write!(
            f,
            "@{}:{}: {}.",
            self.position.line, self.position.column, kind
        )
    }
}

/// Returns the full source line containing a position, for caret rendering.
///
/// The returned slice excludes the line terminator.
pub fn source_line<'a>(html: &'a [u8], position: &SourcePosition) -> &'a [u8] {
    let at = position.offset.min(html.len());
    let line_start = memchr::memrchr(b'\n', &html[..at]).map_or(0, |nl| nl + 1);
    let line_end = memchr::memchr(b'\n', &html[at..]).map_or(html.len(), |nl| at + nl);
    let line = &html[line_start..line_end];
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Collects diagnostics subject to the configured limits.
///
/// Once `max_errors` is reached further diagnostics are dropped while
/// parsing continues; `stop_on_first_error` instead raises the `stopped`
/// flag, which the driver polls to abandon the parse.
#[derive(Debug, Default)]
pub(crate) struct ErrorSink {
    errors: Vec<ParseError>,
    max_errors: Option<usize>,
    stop_on_first_error: bool,
    pub(crate) stopped: bool,
}

impl ErrorSink {
    pub fn new(max_errors: Option<usize>, stop_on_first_error: bool) -> Self {
        Self {
            errors: Vec::new(),
            max_errors,
            stop_on_first_error,
            stopped: false,
        }
    }

    pub fn record(&mut self, error: ParseError) {
        if self
            .max_errors
            .map_or(false, |limit| self.errors.len() >= limit)
        {
            return;
        }

        self.errors.push(error);

        if self.stop_on_first_error {
            self.stopped = true;
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn error_at(offset: usize) -> ParseError {
        ParseError {
            position: SourcePosition {
                line: 1,
                column: (offset + 1) as u32,
                offset,
            },
            original_text: Span::new(offset, 1),
            error: ErrorType::Tokenizer,
        }
    }

    #[test]
    fn sink_caps_recorded_errors() {
        let mut sink = ErrorSink::new(Some(2), false);
        for at in 0..5 {
            sink.record(error_at(at));
        }
        assert_eq!(sink.len(), 2);
        assert!(!sink.stopped);
    }

    #[test]
    fn sink_stops_on_first_error_when_asked() {
        let mut sink = ErrorSink::new(None, true);
        sink.record(error_at(0));
        assert!(sink.stopped);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn source_line_spans_the_containing_line() {
        let html = b"first line\nsecond line\r\nthird";
        let position = SourcePosition {
            line: 2,
            column: 3,
            offset: 13,
        };
        assert_eq!(source_line(html, &position), b"second line");
    }

    #[test]
    fn kebab_case_kind_names() {
        let name: &str = (&ErrorType::NamedCharRefWithoutSemicolon {
            text: Span::new(0, 0),
        })
            .into();
        assert_eq!(name, "named-char-ref-without-semicolon");
    }
}
