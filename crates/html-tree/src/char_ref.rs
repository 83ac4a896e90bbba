use crate::cursor::InputCursor;
use crate::errors::{ErrorSink, ErrorType, ParseError};
use crate::node::Span;
use entities::NumericStatus;

/// Outcome of attempting to consume a character reference.
#[derive(Debug, PartialEq)]
pub(crate) enum CharRef {
    /// The ampersand does not begin a reference (or context rules forbade
    /// consuming it); it stands for itself and only the `&` was consumed.
    /// Whatever follows streams through the tokenizer unchanged.
    Literal,

    /// A reference was consumed; up to two code points replace it.
    Chars { first: char, second: Option<char> },
}

/// Consumes a character reference at the cursor, which must rest on `&`.
///
/// Handles numeric and named forms, the legacy-reference rules, and the
/// attribute-context restriction:
///
/// > If the character reference was consumed as part of an attribute, and
/// > the last character matched is not a U+003B SEMICOLON character (;),
/// > and the next input character is either a U+003D EQUALS SIGN character
/// > (=) or an ASCII alphanumeric, then, for historical reasons, flush
/// > code points consumed as a character reference and switch to the
/// > return state.
///
/// On return the cursor rests on the first code point after whatever was
/// consumed. Diagnostics land in the sink with the span of the full
/// reference text.
///
/// @see https://html.spec.whatwg.org/#character-reference-state
pub(crate) fn resolve(
    cursor: &mut InputCursor,
    in_attribute: bool,
    errors: &mut ErrorSink,
) -> CharRef {
    let position = cursor.position();
    let start = cursor.offset();
    let rest = cursor.rest();
    debug_assert_eq!(rest.first(), Some(&b'&'));
    let after_ampersand = &rest[1..];

    // Numeric form: `&#…` or `&#x…`.
    if let Some(numeric) = entities::decode_numeric(after_ampersand) {
        if numeric.status == NumericStatus::NoDigits {
            /*
             * `&#` or `&#x` with no digits: report it, then let the
             * ampersand and its trailing characters stream out as text.
             */
            errors.record(ParseError {
                position,
                original_text: Span::new(start, 1 + numeric.length),
                error: ErrorType::NumericCharRefNoDigits { code_point: 0 },
            });
            cursor.advance();
            return CharRef::Literal;
        }

        cursor.advance_bytes(1 + numeric.length);
        let span = Span::new(start, 1 + numeric.length);

        if !numeric.has_semicolon {
            errors.record(ParseError {
                position,
                original_text: span,
                error: ErrorType::NumericCharRefWithoutSemicolon {
                    code_point: numeric.code_point,
                },
            });
        }
        if numeric.status == NumericStatus::Invalid {
            errors.record(ParseError {
                position,
                original_text: span,
                error: ErrorType::NumericCharRefInvalid {
                    code_point: numeric.code_point,
                },
            });
        }

        let first = char::from_u32(numeric.code_point).unwrap_or('\u{FFFD}');
        return CharRef::Chars {
            first,
            second: None,
        };
    }

    // Named form.
    if let Some(entry) = entities::lookup_named(after_ampersand) {
        let matched_length = entry.name.len();

        if entry.is_legacy() && in_attribute {
            let next = after_ampersand.get(matched_length);
            if matches!(next, Some(b'=')) || next.map_or(false, |b| b.is_ascii_alphanumeric()) {
                // Historical carve-out: `&not=1` keeps its ampersand.
                cursor.advance();
                return CharRef::Literal;
            }
        }

        cursor.advance_bytes(1 + matched_length);

        if entry.is_legacy() {
            errors.record(ParseError {
                position,
                original_text: Span::new(start, 1 + matched_length),
                error: ErrorType::NamedCharRefWithoutSemicolon {
                    text: Span::new(start, 1 + matched_length),
                },
            });
        }

        let first = char::from_u32(entry.codepoints[0]).unwrap_or('\u{FFFD}');
        let second = match entry.codepoints[1] {
            0 => None,
            code_point => char::from_u32(code_point),
        };
        return CharRef::Chars { first, second };
    }

    /*
     * No reference matched. When the text still has the shape of one —
     * alphanumerics terminated by a semicolon — call it out; either way
     * the ampersand is literal.
     */
    let run = after_ampersand
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric())
        .count();
    if run > 0 && after_ampersand.get(run) == Some(&b';') {
        errors.record(ParseError {
            position,
            original_text: Span::new(start, 1 + run + 1),
            error: ErrorType::NamedCharRefInvalid {
                text: Span::new(start, 1 + run + 1),
            },
        });
    }

    cursor.advance();
    CharRef::Literal
}

#[cfg(test)]
mod test {
    use super::*;

    fn resolve_at(input: &[u8], in_attribute: bool) -> (CharRef, usize, Vec<ParseError>) {
        let mut cursor = InputCursor::new(input, 8);
        let mut errors = ErrorSink::new(None, false);
        let result = resolve(&mut cursor, in_attribute, &mut errors);
        (result, cursor.offset(), errors.into_errors())
    }

    #[test]
    fn named_with_semicolon() {
        let (result, consumed, errors) = resolve_at(b"&amp;rest", false);
        assert_eq!(
            result,
            CharRef::Chars {
                first: '&',
                second: None
            }
        );
        assert_eq!(consumed, 5);
        assert!(errors.is_empty());
    }

    #[test]
    fn legacy_named_reports_missing_semicolon() {
        let (result, consumed, errors) = resolve_at(b"&notavalidentity;", false);
        assert_eq!(
            result,
            CharRef::Chars {
                first: '\u{00AC}',
                second: None
            }
        );
        assert_eq!(consumed, 4); // just "&not"
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0].error,
            ErrorType::NamedCharRefWithoutSemicolon { text } if text == Span::new(0, 4)
        ));
    }

    #[test]
    fn attribute_context_suppresses_legacy_match() {
        // Followed by `=`: not a reference at all.
        let (result, consumed, errors) = resolve_at(b"&not=1", true);
        assert_eq!(result, CharRef::Literal);
        assert_eq!(consumed, 1);
        assert!(errors.is_empty());

        // Followed by an alphanumeric that extends no known name.
        let (result, _, _) = resolve_at(b"&copyzzz", true);
        assert_eq!(result, CharRef::Literal);

        // Outside attributes the legacy match is taken.
        let (result, _, errors) = resolve_at(b"&not=1", false);
        assert_eq!(
            result,
            CharRef::Chars {
                first: '\u{00AC}',
                second: None
            }
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn unknown_reference_with_semicolon_is_diagnosed() {
        let (result, consumed, errors) = resolve_at(b"&bogus;", false);
        assert_eq!(result, CharRef::Literal);
        assert_eq!(consumed, 1);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0].error,
            ErrorType::NamedCharRefInvalid { text } if text == Span::new(0, 7)
        ));
    }

    #[test]
    fn unknown_reference_without_semicolon_is_silent() {
        let (result, _, errors) = resolve_at(b"&qqq and more", false);
        assert_eq!(result, CharRef::Literal);
        assert!(errors.is_empty());
    }

    #[test]
    fn numeric_references() {
        let (result, consumed, errors) = resolve_at(b"&#x41;", false);
        assert_eq!(
            result,
            CharRef::Chars {
                first: 'A',
                second: None
            }
        );
        assert_eq!(consumed, 6);
        assert!(errors.is_empty());

        let (_, _, errors) = resolve_at(b"&#65 ", false);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0].error,
            ErrorType::NumericCharRefWithoutSemicolon { code_point: 0x41 }
        ));

        let (result, _, errors) = resolve_at(b"&#xD800;", false);
        assert_eq!(
            result,
            CharRef::Chars {
                first: '\u{FFFD}',
                second: None
            }
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn numeric_with_no_digits() {
        let (result, consumed, errors) = resolve_at(b"&#x;", false);
        assert_eq!(result, CharRef::Literal);
        assert_eq!(consumed, 1);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0].error,
            ErrorType::NumericCharRefNoDigits { .. }
        ));
    }

    #[test]
    fn two_code_point_expansion() {
        let (result, _, _) = resolve_at(b"&NotEqualTilde;", false);
        assert_eq!(
            result,
            CharRef::Chars {
                first: '\u{2242}',
                second: Some('\u{0338}')
            }
        );
    }
}
