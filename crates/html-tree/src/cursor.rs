use crate::errors::{ErrorType, ParseError};
use crate::node::{SourcePosition, Span};

const UTF8_ACCEPT: u8 = 0;
const UTF8_REJECT: u8 = 12;

/// Character-class table of the incremental UTF-8 decoder.
///
/// Bytes are mapped to one of twelve classes so the transition table below
/// stays small; the class value doubles as the bit mask selector for the
/// payload bits of a leading byte.
static UTF8_CHAR_CLASSES: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut b = 0x80;
    while b <= 0x8F {
        table[b] = 1;
        b += 1;
    }
    while b <= 0x9F {
        table[b] = 9;
        b += 1;
    }
    while b <= 0xBF {
        table[b] = 7;
        b += 1;
    }
    table[0xC0] = 8;
    table[0xC1] = 8;
    let mut b = 0xC2;
    while b <= 0xDF {
        table[b] = 2;
        b += 1;
    }
    table[0xE0] = 10;
    let mut b = 0xE1;
    while b <= 0xEC {
        table[b] = 3;
        b += 1;
    }
    table[0xED] = 4;
    table[0xEE] = 3;
    table[0xEF] = 3;
    table[0xF0] = 11;
    table[0xF1] = 6;
    table[0xF2] = 6;
    table[0xF3] = 6;
    table[0xF4] = 5;
    let mut b = 0xF5;
    while b <= 0xFF {
        table[b] = 8;
        b += 1;
    }
    table
};

/// State-transition table: rows are DFA states (multiples of 12), columns
/// are character classes. State 0 accepts, state 12 rejects.
static UTF8_TRANSITIONS: [u8; 108] = [
    0, 12, 24, 36, 60, 96, 84, 12, 12, 12, 48, 72, //
    12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, //
    12, 0, 12, 12, 12, 12, 12, 0, 12, 0, 12, 12, //
    12, 24, 12, 12, 12, 12, 12, 24, 12, 24, 12, 12, //
    12, 12, 12, 12, 12, 12, 12, 24, 12, 12, 12, 12, //
    12, 24, 12, 12, 12, 12, 12, 12, 12, 24, 12, 12, //
    12, 12, 12, 12, 12, 12, 12, 36, 12, 36, 12, 12, //
    12, 36, 12, 12, 12, 12, 12, 36, 12, 36, 12, 12, //
    12, 36, 12, 12, 12, 12, 12, 12, 12, 12, 12, 12, //
];

const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Code points the parser reports and replaces on sight.
///
/// C0 controls other than NUL, TAB, LF, and FF (CR never reaches this check
/// because newline normalization has already run), DEL through the C1
/// range, the FDD0 noncharacter block, and the two final code points of
/// every plane. NUL is deliberately excluded: the tokenizer has dedicated
/// handling for null characters and must see them.
fn is_invalid_code_point(c: u32) -> bool {
    (1..=0x08).contains(&c)
        || c == 0x0B
        || (0x0E..=0x1F).contains(&c)
        || (0x7F..=0x9F).contains(&c)
        || (0xFDD0..=0xFDEF).contains(&c)
        || (c & 0xFFFE) == 0xFFFE
}

#[derive(Clone, Copy)]
struct Mark {
    offset: usize,
    width: usize,
    current: Option<char>,
    line: u32,
    column: u32,
}

/// Decoding cursor over the input buffer.
///
/// Delivers one code point at a time with its source position, after UTF-8
/// validation, newline normalization, and parse-error code point
/// replacement. The offset always reports the original byte index: a CR/LF
/// pair is delivered as one `\n` that spans two bytes.
pub(crate) struct InputCursor<'a> {
    input: &'a [u8],
    tab_stop: u32,

    /// Byte offset of the current code point in the original input.
    offset: usize,

    /// Bytes the current code point spans, a skipped LF included.
    width: usize,

    current: Option<char>,
    line: u32,
    column: u32,

    mark: Option<Mark>,

    /// Offsets below this were already decoded once; decoding them again
    /// after a reset must not duplicate their diagnostics.
    reported_until: usize,

    errors: Vec<ParseError>,
}

impl<'a> InputCursor<'a> {
    pub fn new(input: &'a [u8], tab_stop: u32) -> Self {
        let mut cursor = Self {
            input,
            tab_stop: tab_stop.max(1),
            offset: 0,
            width: 0,
            current: None,
            line: 1,
            column: 1,
            mark: None,
            reported_until: 0,
            errors: Vec::new(),
        };
        cursor.decode_current();
        cursor
    }

    /// The current code point, or `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Position of the current code point.
    pub fn position(&self) -> SourcePosition {
        SourcePosition {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The undecoded input from the current code point onward.
    pub fn rest(&self) -> &'a [u8] {
        &self.input[self.offset.min(self.input.len())..]
    }

    /// Source span from a starting offset up to (excluding) the current
    /// code point.
    pub fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.offset - start)
    }

    /// Moves to the next code point.
    pub fn advance(&mut self) {
        match self.current {
            None => return,
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some('\t') => {
                self.column = ((self.column - 1) / self.tab_stop + 1) * self.tab_stop + 1;
            }
            Some(_) => self.column += 1,
        }
        self.offset += self.width;
        self.decode_current();
    }

    /// Advances over a run of bytes known to be one-byte code points.
    pub fn advance_bytes(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// Compares the upcoming input against an ASCII prefix, consuming it
    /// only on a match. On success the cursor rests on the first code
    /// point after the prefix; on a mismatch the mark/reset slot restores
    /// the starting point.
    pub fn lookahead_matches(&mut self, prefix: &[u8], case_sensitive: bool) -> bool {
        self.mark();
        for &expected in prefix {
            let expected = expected as char;
            let matched = self.current().map_or(false, |c| {
                if case_sensitive {
                    c == expected
                } else {
                    c.eq_ignore_ascii_case(&expected)
                }
            });
            if !matched {
                self.reset();
                return false;
            }
            self.advance();
        }
        true
    }

    /// Saves the cursor state. Only one slot exists; a second mark
    /// overwrites the first.
    pub fn mark(&mut self) {
        self.mark = Some(Mark {
            offset: self.offset,
            width: self.width,
            current: self.current,
            line: self.line,
            column: self.column,
        });
    }

    /// Restores the cursor to the marked state.
    pub fn reset(&mut self) {
        if let Some(mark) = self.mark {
            self.offset = mark.offset;
            self.width = mark.width;
            self.current = mark.current;
            self.line = mark.line;
            self.column = mark.column;
        }
    }

    /// Hands over the diagnostics produced by decoding so far.
    pub fn take_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.errors)
    }

    fn record(&mut self, error: ErrorType, span: Span) {
        // Positions revisited after a reset were already reported.
        if span.start < self.reported_until {
            return;
        }
        self.reported_until = span.start + 1;

        self.errors.push(ParseError {
            position: self.position(),
            original_text: span,
            error,
        });
    }

    fn decode_current(&mut self) {
        self.current = None;
        self.width = 0;

        if self.offset >= self.input.len() {
            return;
        }

        let mut state = UTF8_ACCEPT;
        let mut code_point = 0u32;
        let mut at = self.offset;

        loop {
            if at >= self.input.len() {
                // Input ended inside a multi-byte sequence.
                self.width = self.input.len() - self.offset;
                self.record(
                    ErrorType::Utf8Truncated { code_point },
                    Span::new(self.offset, self.width),
                );
                self.current = Some(REPLACEMENT_CHAR);
                return;
            }

            let byte = self.input[at];
            let class = UTF8_CHAR_CLASSES[byte as usize];
            code_point = if state != UTF8_ACCEPT {
                (byte as u32 & 0x3F) | (code_point << 6)
            } else {
                (0xFF >> class) as u32 & byte as u32
            };
            state = UTF8_TRANSITIONS[state as usize + class as usize];
            at += 1;

            if state == UTF8_ACCEPT {
                break;
            }

            if state == UTF8_REJECT {
                /*
                 * Replace only the first byte of the rejected sequence and
                 * resume decoding at the next byte: a valid code point that
                 * merely follows a stray lead byte should survive.
                 */
                self.record(
                    ErrorType::Utf8Invalid {
                        code_point: self.input[self.offset] as u32,
                    },
                    Span::new(self.offset, 1),
                );
                self.width = 1;
                self.current = Some(REPLACEMENT_CHAR);
                return;
            }
        }

        self.width = at - self.offset;

        /*
         * Normalize newlines. A lone CR becomes LF; a CR/LF pair becomes a
         * single LF whose width covers both bytes, keeping the reported
         * offsets aligned with the original input.
         */
        if code_point == 0x0D {
            code_point = 0x0A;
            if at < self.input.len() && self.input[at] == b'\n' {
                self.width += 1;
            }
        }

        if is_invalid_code_point(code_point) {
            self.record(
                ErrorType::InvalidCodePoint { code_point },
                Span::new(self.offset, self.width),
            );
            code_point = REPLACEMENT_CHAR as u32;
        }

        self.current = char::from_u32(code_point);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn collect(input: &[u8]) -> (Vec<char>, Vec<ParseError>) {
        let mut cursor = InputCursor::new(input, 8);
        let mut chars = Vec::new();
        while let Some(c) = cursor.current() {
            chars.push(c);
            cursor.advance();
        }
        (chars, cursor.take_errors())
    }

    #[test]
    fn decodes_multi_byte_sequences() {
        let (chars, errors) = collect("a€𝄞".as_bytes());
        assert_eq!(chars, vec!['a', '€', '𝄞']);
        assert!(errors.is_empty());
    }

    #[test]
    fn positions_track_lines_columns_and_offsets() {
        let mut cursor = InputCursor::new(b"ab\ncd", 8);
        assert_eq!(cursor.position(), SourcePosition { line: 1, column: 1, offset: 0 });
        cursor.advance();
        assert_eq!(cursor.position(), SourcePosition { line: 1, column: 2, offset: 1 });
        cursor.advance(); // the newline
        cursor.advance();
        assert_eq!(cursor.position(), SourcePosition { line: 2, column: 1, offset: 3 });
    }

    #[test]
    fn tabs_advance_to_the_next_stop() {
        let mut cursor = InputCursor::new(b"\tx", 8);
        cursor.advance();
        assert_eq!(cursor.position().column, 9);

        let mut cursor = InputCursor::new(b"ab\tx", 4);
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position().column, 5);
    }

    #[test]
    fn crlf_collapses_without_losing_offsets() {
        let (chars, errors) = collect(b"a\r\nb\rc");
        assert_eq!(chars, vec!['a', '\n', 'b', '\n', 'c']);
        assert!(errors.is_empty());

        let mut cursor = InputCursor::new(b"a\r\nb", 8);
        cursor.advance(); // onto the CR/LF
        assert_eq!(cursor.offset(), 1);
        cursor.advance(); // past both bytes
        assert_eq!(cursor.offset(), 3);
        assert_eq!(cursor.position().line, 2);
    }

    #[test]
    fn invalid_sequences_are_replaced_byte_by_byte() {
        let (chars, errors) = collect(b"a\xC0b");
        assert_eq!(chars, vec!['a', '\u{FFFD}', 'b']);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].error,
            ErrorType::Utf8Invalid { code_point: 0xC0 }
        );
        assert_eq!(errors[0].original_text, Span::new(1, 1));

        // A stray lead byte must not eat the valid character after it.
        let (chars, _) = collect(b"\xE2(x");
        assert_eq!(chars, vec!['\u{FFFD}', '(', 'x']);
    }

    #[test]
    fn truncated_sequence_at_eof() {
        let (chars, errors) = collect(b"ok\xE2\x82");
        assert_eq!(chars, vec!['o', 'k', '\u{FFFD}']);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0].error, ErrorType::Utf8Truncated { .. }));
    }

    #[test]
    fn control_characters_are_replaced_and_reported() {
        let (chars, errors) = collect(b"a\x0Bb");
        assert_eq!(chars, vec!['a', '\u{FFFD}', 'b']);
        assert_eq!(
            errors[0].error,
            ErrorType::InvalidCodePoint { code_point: 0x0B }
        );

        // NUL passes through; the tokenizer owns its handling.
        let (chars, errors) = collect(b"a\x00b");
        assert_eq!(chars, vec!['a', '\0', 'b']);
        assert!(errors.is_empty());
    }

    #[test]
    fn lookahead_consumes_only_on_match() {
        let mut cursor = InputCursor::new(b"DOCTYPE html", 8);
        assert!(!cursor.lookahead_matches(b"html", true));
        assert_eq!(cursor.offset(), 0);

        assert!(cursor.lookahead_matches(b"doctype", false));
        assert_eq!(cursor.offset(), 7);
        assert_eq!(cursor.current(), Some(' '));
    }

    #[test]
    fn mark_and_reset_restore_the_cursor() {
        let mut cursor = InputCursor::new(b"abcdef", 8);
        cursor.advance();
        cursor.mark();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current(), Some('d'));

        cursor.reset();
        assert_eq!(cursor.current(), Some('b'));
        assert_eq!(cursor.offset(), 1);
        assert_eq!(cursor.position().column, 2);
    }

    #[test]
    fn reset_does_not_duplicate_diagnostics() {
        let mut cursor = InputCursor::new(b"a\x0Bc", 8);
        cursor.mark();
        cursor.advance(); // decodes the control character, reporting it
        cursor.advance();
        cursor.reset();
        cursor.advance(); // decodes it again after the rewind
        assert_eq!(cursor.take_errors().len(), 1);
    }
}
