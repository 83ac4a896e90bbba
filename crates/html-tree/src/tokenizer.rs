use std::collections::VecDeque;

use crate::char_ref::{self, CharRef};
use crate::cursor::InputCursor;
use crate::errors::{ErrorSink, ErrorType, ParseError};
use crate::node::{Attribute, AttributeNamespace, SourcePosition, Span};
use crate::tag_name::TagName;
use crate::token::{DoctypeData, TagData, Token, TokenData};

/// States of the tokenizer state machine.
///
/// The character-reference sub-machine is factored into the resolver in
/// `char_ref`; every other state of the specification's tokenizer appears
/// here under its spec name.
///
/// @see https://html.spec.whatwg.org/#tokenization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenizerState {
    Data,
    Rcdata,
    Rawtext,
    ScriptData,
    Plaintext,
    TagOpen,
    EndTagOpen,
    TagName,
    RcdataLessThanSign,
    RcdataEndTagOpen,
    RcdataEndTagName,
    RawtextLessThanSign,
    RawtextEndTagOpen,
    RawtextEndTagName,
    ScriptDataLessThanSign,
    ScriptDataEndTagOpen,
    ScriptDataEndTagName,
    ScriptDataEscapeStart,
    ScriptDataEscapeStartDash,
    ScriptDataEscaped,
    ScriptDataEscapedDash,
    ScriptDataEscapedDashDash,
    ScriptDataEscapedLessThanSign,
    ScriptDataEscapedEndTagOpen,
    ScriptDataEscapedEndTagName,
    ScriptDataDoubleEscapeStart,
    ScriptDataDoubleEscaped,
    ScriptDataDoubleEscapedDash,
    ScriptDataDoubleEscapedDashDash,
    ScriptDataDoubleEscapedLessThanSign,
    ScriptDataDoubleEscapeEnd,
    BeforeAttributeName,
    AttributeName,
    AfterAttributeName,
    BeforeAttributeValue,
    AttributeValueDoubleQuoted,
    AttributeValueSingleQuoted,
    AttributeValueUnquoted,
    AfterAttributeValueQuoted,
    SelfClosingStartTag,
    BogusComment,
    MarkupDeclarationOpen,
    CommentStart,
    CommentStartDash,
    Comment,
    CommentLessThanSign,
    CommentLessThanSignBang,
    CommentLessThanSignBangDash,
    CommentLessThanSignBangDashDash,
    CommentEndDash,
    CommentEnd,
    CommentEndBang,
    Doctype,
    BeforeDoctypeName,
    DoctypeName,
    AfterDoctypeName,
    AfterDoctypePublicKeyword,
    BeforeDoctypePublicIdentifier,
    DoctypePublicIdentifierDoubleQuoted,
    DoctypePublicIdentifierSingleQuoted,
    AfterDoctypePublicIdentifier,
    BetweenDoctypePublicAndSystemIdentifiers,
    AfterDoctypeSystemKeyword,
    BeforeDoctypeSystemIdentifier,
    DoctypeSystemIdentifierDoubleQuoted,
    DoctypeSystemIdentifierSingleQuoted,
    AfterDoctypeSystemIdentifier,
    BogusDoctype,
    CdataSection,
    CdataSectionBracket,
    CdataSectionEnd,
}

/// A character set aside for possible re-emission, with where it came from.
#[derive(Debug, Clone, Copy)]
struct BufferedChar {
    c: char,
    position: SourcePosition,
    offset: usize,
}

#[derive(Debug)]
struct AttrAccumulator {
    name: String,
    name_start: usize,
    name_position: SourcePosition,
    name_end: usize,
    value: String,
    value_start: usize,
    value_position: SourcePosition,
    value_end: usize,

    /// Set when the name matched an earlier attribute on the same tag; the
    /// whole attribute is parsed and then dropped.
    duplicate: bool,
}

#[derive(Debug)]
struct TagAccumulator {
    position: SourcePosition,
    start: usize,
    is_end_tag: bool,
    name: String,
    attributes: Vec<Attribute>,
    self_closing: bool,
    attr: Option<AttrAccumulator>,
}

impl TagAccumulator {
    fn new(position: SourcePosition, start: usize, is_end_tag: bool) -> Self {
        Self {
            position,
            start,
            is_end_tag,
            name: String::new(),
            attributes: Vec::new(),
            self_closing: false,
            attr: None,
        }
    }
}

#[derive(Debug)]
struct CommentAccumulator {
    position: SourcePosition,
    start: usize,
    text: String,
}

#[derive(Debug)]
struct DoctypeAccumulator {
    position: SourcePosition,
    start: usize,
    name: String,
    has_name: bool,
    public_identifier: String,
    has_public_identifier: bool,
    system_identifier: String,
    has_system_identifier: bool,
    force_quirks: bool,
}

impl DoctypeAccumulator {
    fn new(position: SourcePosition, start: usize) -> Self {
        Self {
            position,
            start,
            name: String::new(),
            has_name: false,
            public_identifier: String::new(),
            has_public_identifier: false,
            system_identifier: String::new(),
            has_system_identifier: false,
            force_quirks: false,
        }
    }
}

/// The tokenizer: a pull-based lexer over the preprocessed input.
///
/// Each call to `next_token` runs the state machine until at least one
/// token is complete and hands tokens out in order. The tree constructor
/// reaches back in through `set_state` and `set_last_start_tag` when an
/// element changes how its content must be lexed, and through
/// `set_foreign_content` to gate real CDATA sections.
pub(crate) struct Tokenizer<'a> {
    cursor: InputCursor<'a>,
    state: TokenizerState,
    pub(crate) errors: ErrorSink,
    pending: VecDeque<Token>,

    /// Position and offset of the `<` (or other opener) of the construct
    /// currently being lexed.
    token_start: SourcePosition,
    token_start_offset: usize,

    tag: Option<TagAccumulator>,
    comment: Option<CommentAccumulator>,
    doctype: Option<DoctypeAccumulator>,

    /// The spec's temporary buffer, with source locations retained so
    /// characters flushed from it keep their true positions.
    temp_buffer: Vec<BufferedChar>,

    /// Name of the last start tag emitted, for "appropriate end tag"
    /// checks in the RCDATA, RAWTEXT, and script-data end-tag states.
    last_start_tag: Option<Box<str>>,

    /// Whether the tree constructor's adjusted current node sits in
    /// foreign content; only then is `<![CDATA[` a real CDATA section.
    foreign_content: bool,

    eof_emitted: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a [u8], tab_stop: u32, errors: ErrorSink) -> Self {
        Self {
            cursor: InputCursor::new(input, tab_stop),
            state: TokenizerState::Data,
            errors,
            pending: VecDeque::new(),
            token_start: SourcePosition::default(),
            token_start_offset: 0,
            tag: None,
            comment: None,
            doctype: None,
            temp_buffer: Vec::new(),
            last_start_tag: None,
            foreign_content: false,
            eof_emitted: false,
        }
    }

    /// Forces the machine into a content state. Used by tree construction
    /// after elements like `<script>`, `<style>`, `<textarea>`, and
    /// `<plaintext>` whose content is not parsed as markup.
    pub fn set_state(&mut self, state: TokenizerState) {
        self.state = state;
    }

    pub fn set_last_start_tag(&mut self, name: &str) {
        self.last_start_tag = Some(name.into());
    }

    pub fn set_foreign_content(&mut self, foreign: bool) {
        self.foreign_content = foreign;
    }

    /// Runs the machine until the next token is ready.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.drain_cursor_errors();
            if let Some(token) = self.pending.pop_front() {
                return token;
            }
            if self.eof_emitted {
                // The driver stops at EOF; keep returning it if asked again.
                return self.eof_token();
            }
            self.step();
        }
    }

    fn drain_cursor_errors(&mut self) {
        for error in self.cursor.take_errors() {
            self.errors.record(error);
        }
    }

    // ------------------------------------------------------------------
    // Emission helpers
    // ------------------------------------------------------------------

    fn push_char_at(&mut self, c: char, position: SourcePosition, span: Span) {
        let data = match c {
            '\0' => TokenData::NullCharacter,
            '\t' | '\n' | '\x0C' | ' ' => TokenData::Whitespace(c),
            _ => TokenData::Character(c),
        };
        self.pending.push_back(Token {
            position,
            original_text: span,
            data,
        });
    }

    /// Consumes the current code point and emits it (or a substitute) as a
    /// character-class token.
    fn emit_current(&mut self, c: char) {
        let position = self.cursor.position();
        let start = self.cursor.offset();
        self.cursor.advance();
        let span = self.cursor.span_from(start);
        self.push_char_at(c, position, span);
    }

    fn emit_current_cdata(&mut self, c: char) {
        let position = self.cursor.position();
        let start = self.cursor.offset();
        self.cursor.advance();
        let span = self.cursor.span_from(start);
        self.pending.push_back(Token {
            position,
            original_text: span,
            data: TokenData::CdataCharacter(c),
        });
    }

    /// Emits a character known to occupy one byte at a known location,
    /// without touching the cursor. Used for re-emitted `<`, `/`, and
    /// buffered characters.
    fn push_ascii_at(&mut self, c: char, position: SourcePosition, offset: usize) {
        self.push_char_at(c, position, Span::new(offset, 1));
    }

    /// Emits the `<` which opened the current construct.
    fn emit_token_start_less_than(&mut self) {
        self.push_ascii_at('<', self.token_start, self.token_start_offset);
    }

    /// Emits `</` from the current construct opener.
    fn emit_token_start_close_pair(&mut self) {
        self.push_ascii_at('<', self.token_start, self.token_start_offset);
        self.push_ascii_at(
            '/',
            position_after(self.token_start, 1),
            self.token_start_offset + 1,
        );
    }

    fn flush_temp_buffer_as_chars(&mut self) {
        for buffered in std::mem::take(&mut self.temp_buffer) {
            self.push_ascii_at(buffered.c, buffered.position, buffered.offset);
        }
    }

    fn flush_temp_buffer_as_cdata(&mut self) {
        for buffered in std::mem::take(&mut self.temp_buffer) {
            self.pending.push_back(Token {
                position: buffered.position,
                original_text: Span::new(buffered.offset, 1),
                data: TokenData::CdataCharacter(buffered.c),
            });
        }
    }

    fn buffer_current(&mut self, c: char) {
        self.temp_buffer.push(BufferedChar {
            c,
            position: self.cursor.position(),
            offset: self.cursor.offset(),
        });
        self.cursor.advance();
    }

    fn temp_buffer_is(&self, word: &str) -> bool {
        self.temp_buffer.len() == word.len()
            && self
                .temp_buffer
                .iter()
                .zip(word.chars())
                .all(|(buffered, expected)| buffered.c.to_ascii_lowercase() == expected)
    }

    fn eof_token(&self) -> Token {
        Token {
            position: self.cursor.position(),
            original_text: Span::new(self.cursor.offset(), 0),
            data: TokenData::Eof,
        }
    }

    fn emit_eof(&mut self) {
        let token = self.eof_token();
        self.pending.push_back(token);
        self.eof_emitted = true;
    }

    /// Records a generic tokenizer-kind diagnostic at the current input
    /// position.
    fn error_here(&mut self) {
        let position = self.cursor.position();
        let width = self.cursor.rest().len().min(1);
        self.errors.record(ParseError {
            position,
            original_text: Span::new(self.cursor.offset(), width),
            error: ErrorType::Tokenizer,
        });
    }

    /// Records a generic tokenizer-kind diagnostic spanning the construct
    /// being lexed when the input ended inside it.
    fn error_eof_in_construct(&mut self) {
        self.errors.record(ParseError {
            position: self.token_start,
            original_text: Span::new(
                self.token_start_offset,
                self.cursor.offset() - self.token_start_offset,
            ),
            error: ErrorType::Tokenizer,
        });
    }

    // ------------------------------------------------------------------
    // Tag helpers
    // ------------------------------------------------------------------

    fn start_tag_accumulator(&mut self, is_end_tag: bool) {
        self.tag = Some(TagAccumulator::new(
            self.token_start,
            self.token_start_offset,
            is_end_tag,
        ));
    }

    fn tag_mut(&mut self) -> &mut TagAccumulator {
        self.tag.as_mut().expect("a tag is being lexed")
    }

    fn start_attribute(&mut self) {
        let position = self.cursor.position();
        let start = self.cursor.offset();
        let tag = self.tag_mut();
        tag.attr = Some(AttrAccumulator {
            name: String::new(),
            name_start: start,
            name_position: position,
            name_end: start,
            value: String::new(),
            value_start: start,
            value_position: position,
            value_end: start,
            duplicate: false,
        });
    }

    /// Runs when the machine leaves the attribute-name state: fixes the
    /// name span, defaults the value span, and performs the first-wins
    /// duplicate check.
    fn finish_attribute_name(&mut self) {
        let name_end = self.cursor.offset();
        let tag = self.tag.as_mut().expect("a tag is being lexed");
        let attr = tag.attr.as_mut().expect("an attribute is being lexed");
        attr.name_end = name_end;
        attr.value_start = name_end;
        attr.value_end = name_end;
        attr.value_position = attr.name_position;

        if let Some(original_index) = tag
            .attributes
            .iter()
            .position(|existing| existing.name.as_ref() == attr.name)
        {
            attr.duplicate = true;
            let error = ParseError {
                position: attr.name_position,
                original_text: Span::new(attr.name_start, attr.name_end - attr.name_start),
                error: ErrorType::DuplicateAttribute {
                    name: attr.name.clone().into(),
                    original_index,
                    new_index: tag.attributes.len(),
                },
            };
            self.errors.record(error);
        }
    }

    fn finish_attribute(&mut self) {
        let tag = self.tag.as_mut().expect("a tag is being lexed");
        if let Some(attr) = tag.attr.take() {
            if attr.duplicate {
                return;
            }
            tag.attributes.push(Attribute {
                name: attr.name.into(),
                value: attr.value.into(),
                namespace: AttributeNamespace::None,
                original_name: Span::new(attr.name_start, attr.name_end - attr.name_start),
                original_value: Span::new(
                    attr.value_start,
                    attr.value_end.saturating_sub(attr.value_start),
                ),
                name_position: attr.name_position,
                value_position: attr.value_position,
            });
        }
    }

    /// Completes the current tag token. The cursor must already be past
    /// the closing `>`.
    fn finish_tag(&mut self) {
        self.finish_attribute();
        let tag = self.tag.take().expect("a tag is being lexed");
        let span = self.cursor.span_from(tag.start);

        let data = TagData {
            tag: TagName::from_bytes(tag.name.as_bytes()),
            attributes: tag.attributes,
            self_closing: tag.self_closing,
        };

        let data = if tag.is_end_tag {
            // End tags carry neither attributes nor the self-closing flag.
            if !data.attributes.is_empty() || data.self_closing {
                self.errors.record(ParseError {
                    position: tag.position,
                    original_text: span,
                    error: ErrorType::Tokenizer,
                });
            }
            TokenData::EndTag(data)
        } else {
            self.last_start_tag = Some(tag.name.as_str().into());
            TokenData::StartTag(data)
        };

        self.pending.push_back(Token {
            position: tag.position,
            original_text: span,
            data,
        });
    }

    /// Whether the end tag being lexed matches the last start tag, making
    /// it able to close an RCDATA / RAWTEXT / script-data region.
    fn is_appropriate_end_tag(&self) -> bool {
        match (&self.tag, &self.last_start_tag) {
            (Some(tag), Some(last)) => tag.name.as_str() == last.as_ref(),
            _ => false,
        }
    }

    /// Shared "anything else" exit for the three *-end-tag-name states:
    /// re-emit `</` and the buffered name, abandon the tag.
    fn abandon_end_tag(&mut self, return_state: TokenizerState) {
        self.tag = None;
        self.emit_token_start_close_pair();
        self.flush_temp_buffer_as_chars();
        self.state = return_state;
    }

    /// Drives one of the three *-end-tag-name states, which differ only in
    /// their return state.
    fn step_content_end_tag_name(&mut self, return_state: TokenizerState) {
        match self.cursor.current() {
            Some('\t' | '\n' | '\x0C' | ' ') if self.is_appropriate_end_tag() => {
                self.cursor.advance();
                self.state = TokenizerState::BeforeAttributeName;
            }
            Some('/') if self.is_appropriate_end_tag() => {
                self.cursor.advance();
                self.state = TokenizerState::SelfClosingStartTag;
            }
            Some('>') if self.is_appropriate_end_tag() => {
                self.cursor.advance();
                self.temp_buffer.clear();
                self.finish_tag();
                self.state = TokenizerState::Data;
            }
            Some(c) if c.is_ascii_alphabetic() => {
                self.tag_mut().name.push(c.to_ascii_lowercase());
                self.buffer_current(c);
            }
            _ => self.abandon_end_tag(return_state),
        }
    }

    // ------------------------------------------------------------------
    // Character references
    // ------------------------------------------------------------------

    /// Consumes a reference in data/RCDATA context and emits the decoded
    /// code points (or the literal ampersand) as character tokens.
    fn consume_char_ref_in_data(&mut self) {
        let position = self.cursor.position();
        let start = self.cursor.offset();
        match char_ref::resolve(&mut self.cursor, false, &mut self.errors) {
            CharRef::Literal => self.push_char_at('&', position, Span::new(start, 1)),
            CharRef::Chars { first, second } => {
                let span = self.cursor.span_from(start);
                self.push_char_at(first, position, span);
                if let Some(second) = second {
                    self.push_char_at(second, position, span);
                }
            }
        }
    }

    /// Consumes a reference inside an attribute value, appending the
    /// decoded code points to the value buffer.
    fn consume_char_ref_in_attribute(&mut self) {
        match char_ref::resolve(&mut self.cursor, true, &mut self.errors) {
            CharRef::Literal => {
                let tag = self.tag_mut();
                if let Some(attr) = tag.attr.as_mut() {
                    attr.value.push('&');
                }
            }
            CharRef::Chars { first, second } => {
                let tag = self.tag_mut();
                if let Some(attr) = tag.attr.as_mut() {
                    attr.value.push(first);
                    if let Some(second) = second {
                        attr.value.push(second);
                    }
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Comment / DOCTYPE helpers
    // ------------------------------------------------------------------

    fn start_comment(&mut self, initial_text: &str) {
        self.comment = Some(CommentAccumulator {
            position: self.token_start,
            start: self.token_start_offset,
            text: initial_text.into(),
        });
    }

    fn comment_mut(&mut self) -> &mut String {
        &mut self
            .comment
            .as_mut()
            .expect("a comment is being lexed")
            .text
    }

    fn emit_comment(&mut self) {
        let comment = self.comment.take().expect("a comment is being lexed");
        let span = self.cursor.span_from(comment.start);
        self.pending.push_back(Token {
            position: comment.position,
            original_text: span,
            data: TokenData::Comment(comment.text.into()),
        });
    }

    fn start_doctype(&mut self) {
        self.doctype = Some(DoctypeAccumulator::new(
            self.token_start,
            self.token_start_offset,
        ));
    }

    fn doctype_mut(&mut self) -> &mut DoctypeAccumulator {
        self.doctype.as_mut().expect("a DOCTYPE is being lexed")
    }

    fn emit_doctype(&mut self) {
        let doctype = self.doctype.take().expect("a DOCTYPE is being lexed");
        let span = self.cursor.span_from(doctype.start);
        self.pending.push_back(Token {
            position: doctype.position,
            original_text: span,
            data: TokenData::Doctype(DoctypeData {
                name: doctype.has_name.then(|| doctype.name.into()),
                public_identifier: doctype
                    .has_public_identifier
                    .then(|| doctype.public_identifier.into()),
                system_identifier: doctype
                    .has_system_identifier
                    .then(|| doctype.system_identifier.into()),
                force_quirks: doctype.force_quirks,
            }),
        });
    }

    /// EOF inside a DOCTYPE: force quirks, emit what was gathered, then
    /// the end-of-file token.
    fn eof_in_doctype(&mut self) {
        self.error_eof_in_construct();
        self.doctype_mut().force_quirks = true;
        self.emit_doctype();
        self.emit_eof();
    }

    // ------------------------------------------------------------------
    // The state machine
    // ------------------------------------------------------------------

    fn step(&mut self) {
        match self.state {
            TokenizerState::Data => match self.cursor.current() {
                Some('&') => self.consume_char_ref_in_data(),
                Some('<') => {
                    self.token_start = self.cursor.position();
                    self.token_start_offset = self.cursor.offset();
                    self.cursor.advance();
                    self.state = TokenizerState::TagOpen;
                }
                Some('\0') => {
                    self.error_here();
                    self.emit_current('\0');
                }
                Some(c) => self.emit_current(c),
                None => self.emit_eof(),
            },

            TokenizerState::Rcdata => match self.cursor.current() {
                Some('&') => self.consume_char_ref_in_data(),
                Some('<') => {
                    self.token_start = self.cursor.position();
                    self.token_start_offset = self.cursor.offset();
                    self.cursor.advance();
                    self.state = TokenizerState::RcdataLessThanSign;
                }
                Some('\0') => {
                    self.error_here();
                    self.emit_current('\u{FFFD}');
                }
                Some(c) => self.emit_current(c),
                None => self.emit_eof(),
            },

            TokenizerState::Rawtext => match self.cursor.current() {
                Some('<') => {
                    self.token_start = self.cursor.position();
                    self.token_start_offset = self.cursor.offset();
                    self.cursor.advance();
                    self.state = TokenizerState::RawtextLessThanSign;
                }
                Some('\0') => {
                    self.error_here();
                    self.emit_current('\u{FFFD}');
                }
                Some(c) => self.emit_current(c),
                None => self.emit_eof(),
            },

            TokenizerState::ScriptData => match self.cursor.current() {
                Some('<') => {
                    self.token_start = self.cursor.position();
                    self.token_start_offset = self.cursor.offset();
                    self.cursor.advance();
                    self.state = TokenizerState::ScriptDataLessThanSign;
                }
                Some('\0') => {
                    self.error_here();
                    self.emit_current('\u{FFFD}');
                }
                Some(c) => self.emit_current(c),
                None => self.emit_eof(),
            },

            TokenizerState::Plaintext => match self.cursor.current() {
                Some('\0') => {
                    self.error_here();
                    self.emit_current('\u{FFFD}');
                }
                Some(c) => self.emit_current(c),
                None => self.emit_eof(),
            },

            TokenizerState::TagOpen => match self.cursor.current() {
                Some('!') => {
                    self.cursor.advance();
                    self.state = TokenizerState::MarkupDeclarationOpen;
                }
                Some('/') => {
                    self.cursor.advance();
                    self.state = TokenizerState::EndTagOpen;
                }
                Some(c) if c.is_ascii_alphabetic() => {
                    self.start_tag_accumulator(false);
                    self.state = TokenizerState::TagName;
                }
                Some('?') => {
                    self.error_here();
                    self.start_comment("");
                    self.state = TokenizerState::BogusComment;
                }
                None => {
                    self.error_eof_in_construct();
                    self.emit_token_start_less_than();
                    self.emit_eof();
                }
                Some(_) => {
                    self.error_here();
                    self.emit_token_start_less_than();
                    self.state = TokenizerState::Data;
                }
            },

            TokenizerState::EndTagOpen => match self.cursor.current() {
                Some(c) if c.is_ascii_alphabetic() => {
                    self.start_tag_accumulator(true);
                    self.state = TokenizerState::TagName;
                }
                Some('>') => {
                    // > This is a missing-end-tag-name parse error.
                    self.error_here();
                    self.cursor.advance();
                    self.state = TokenizerState::Data;
                }
                None => {
                    self.error_eof_in_construct();
                    self.emit_token_start_close_pair();
                    self.emit_eof();
                }
                Some(_) => {
                    self.error_here();
                    self.start_comment("");
                    self.state = TokenizerState::BogusComment;
                }
            },

            TokenizerState::TagName => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => {
                    self.cursor.advance();
                    self.state = TokenizerState::BeforeAttributeName;
                }
                Some('/') => {
                    self.cursor.advance();
                    self.state = TokenizerState::SelfClosingStartTag;
                }
                Some('>') => {
                    self.cursor.advance();
                    self.finish_tag();
                    self.state = TokenizerState::Data;
                }
                Some('\0') => {
                    self.error_here();
                    self.cursor.advance();
                    self.tag_mut().name.push('\u{FFFD}');
                }
                Some(c) => {
                    self.cursor.advance();
                    self.tag_mut().name.push(c.to_ascii_lowercase());
                }
                None => {
                    // > This is an eof-in-tag parse error.
                    self.error_eof_in_construct();
                    self.tag = None;
                    self.emit_eof();
                }
            },

            TokenizerState::RcdataLessThanSign => match self.cursor.current() {
                Some('/') => {
                    self.temp_buffer.clear();
                    self.cursor.advance();
                    self.state = TokenizerState::RcdataEndTagOpen;
                }
                _ => {
                    self.emit_token_start_less_than();
                    self.state = TokenizerState::Rcdata;
                }
            },

            TokenizerState::RcdataEndTagOpen => match self.cursor.current() {
                Some(c) if c.is_ascii_alphabetic() => {
                    self.start_tag_accumulator(true);
                    self.state = TokenizerState::RcdataEndTagName;
                }
                _ => {
                    self.emit_token_start_close_pair();
                    self.state = TokenizerState::Rcdata;
                }
            },

            TokenizerState::RcdataEndTagName => {
                self.step_content_end_tag_name(TokenizerState::Rcdata)
            }

            TokenizerState::RawtextLessThanSign => match self.cursor.current() {
                Some('/') => {
                    self.temp_buffer.clear();
                    self.cursor.advance();
                    self.state = TokenizerState::RawtextEndTagOpen;
                }
                _ => {
                    self.emit_token_start_less_than();
                    self.state = TokenizerState::Rawtext;
                }
            },

            TokenizerState::RawtextEndTagOpen => match self.cursor.current() {
                Some(c) if c.is_ascii_alphabetic() => {
                    self.start_tag_accumulator(true);
                    self.state = TokenizerState::RawtextEndTagName;
                }
                _ => {
                    self.emit_token_start_close_pair();
                    self.state = TokenizerState::Rawtext;
                }
            },

            TokenizerState::RawtextEndTagName => {
                self.step_content_end_tag_name(TokenizerState::Rawtext)
            }

            TokenizerState::ScriptDataLessThanSign => match self.cursor.current() {
                Some('/') => {
                    self.temp_buffer.clear();
                    self.cursor.advance();
                    self.state = TokenizerState::ScriptDataEndTagOpen;
                }
                Some('!') => {
                    self.emit_token_start_less_than();
                    let position = self.cursor.position();
                    let offset = self.cursor.offset();
                    self.cursor.advance();
                    self.push_ascii_at('!', position, offset);
                    self.state = TokenizerState::ScriptDataEscapeStart;
                }
                _ => {
                    self.emit_token_start_less_than();
                    self.state = TokenizerState::ScriptData;
                }
            },

            TokenizerState::ScriptDataEndTagOpen => match self.cursor.current() {
                Some(c) if c.is_ascii_alphabetic() => {
                    self.start_tag_accumulator(true);
                    self.state = TokenizerState::ScriptDataEndTagName;
                }
                _ => {
                    self.emit_token_start_close_pair();
                    self.state = TokenizerState::ScriptData;
                }
            },

            TokenizerState::ScriptDataEndTagName => {
                self.step_content_end_tag_name(TokenizerState::ScriptData)
            }

            TokenizerState::ScriptDataEscapeStart => match self.cursor.current() {
                Some('-') => {
                    self.emit_current('-');
                    self.state = TokenizerState::ScriptDataEscapeStartDash;
                }
                _ => self.state = TokenizerState::ScriptData,
            },

            TokenizerState::ScriptDataEscapeStartDash => match self.cursor.current() {
                Some('-') => {
                    self.emit_current('-');
                    self.state = TokenizerState::ScriptDataEscapedDashDash;
                }
                _ => self.state = TokenizerState::ScriptData,
            },

            TokenizerState::ScriptDataEscaped => match self.cursor.current() {
                Some('-') => {
                    self.emit_current('-');
                    self.state = TokenizerState::ScriptDataEscapedDash;
                }
                Some('<') => {
                    self.token_start = self.cursor.position();
                    self.token_start_offset = self.cursor.offset();
                    self.cursor.advance();
                    self.state = TokenizerState::ScriptDataEscapedLessThanSign;
                }
                Some('\0') => {
                    self.error_here();
                    self.emit_current('\u{FFFD}');
                }
                Some(c) => self.emit_current(c),
                None => {
                    // > This is an eof-in-script-html-comment-like-text parse error.
                    self.error_eof_in_construct();
                    self.emit_eof();
                }
            },

            TokenizerState::ScriptDataEscapedDash => match self.cursor.current() {
                Some('-') => {
                    self.emit_current('-');
                    self.state = TokenizerState::ScriptDataEscapedDashDash;
                }
                Some('<') => {
                    self.token_start = self.cursor.position();
                    self.token_start_offset = self.cursor.offset();
                    self.cursor.advance();
                    self.state = TokenizerState::ScriptDataEscapedLessThanSign;
                }
                Some('\0') => {
                    self.error_here();
                    self.emit_current('\u{FFFD}');
                    self.state = TokenizerState::ScriptDataEscaped;
                }
                Some(c) => {
                    self.emit_current(c);
                    self.state = TokenizerState::ScriptDataEscaped;
                }
                None => {
                    self.error_eof_in_construct();
                    self.emit_eof();
                }
            },

            TokenizerState::ScriptDataEscapedDashDash => match self.cursor.current() {
                Some('-') => self.emit_current('-'),
                Some('<') => {
                    self.token_start = self.cursor.position();
                    self.token_start_offset = self.cursor.offset();
                    self.cursor.advance();
                    self.state = TokenizerState::ScriptDataEscapedLessThanSign;
                }
                Some('>') => {
                    self.emit_current('>');
                    self.state = TokenizerState::ScriptData;
                }
                Some('\0') => {
                    self.error_here();
                    self.emit_current('\u{FFFD}');
                    self.state = TokenizerState::ScriptDataEscaped;
                }
                Some(c) => {
                    self.emit_current(c);
                    self.state = TokenizerState::ScriptDataEscaped;
                }
                None => {
                    self.error_eof_in_construct();
                    self.emit_eof();
                }
            },

            TokenizerState::ScriptDataEscapedLessThanSign => match self.cursor.current() {
                Some('/') => {
                    self.temp_buffer.clear();
                    self.cursor.advance();
                    self.state = TokenizerState::ScriptDataEscapedEndTagOpen;
                }
                Some('a'..='z' | 'A'..='Z') => {
                    self.temp_buffer.clear();
                    self.emit_token_start_less_than();
                    self.state = TokenizerState::ScriptDataDoubleEscapeStart;
                }
                _ => {
                    self.emit_token_start_less_than();
                    self.state = TokenizerState::ScriptDataEscaped;
                }
            },

            TokenizerState::ScriptDataEscapedEndTagOpen => match self.cursor.current() {
                Some(c) if c.is_ascii_alphabetic() => {
                    self.start_tag_accumulator(true);
                    self.state = TokenizerState::ScriptDataEscapedEndTagName;
                }
                _ => {
                    self.emit_token_start_close_pair();
                    self.state = TokenizerState::ScriptDataEscaped;
                }
            },

            TokenizerState::ScriptDataEscapedEndTagName => {
                self.step_content_end_tag_name(TokenizerState::ScriptDataEscaped)
            }

            TokenizerState::ScriptDataDoubleEscapeStart => match self.cursor.current() {
                Some(c @ ('\t' | '\n' | '\x0C' | ' ' | '/' | '>')) => {
                    self.state = if self.temp_buffer_is("script") {
                        TokenizerState::ScriptDataDoubleEscaped
                    } else {
                        TokenizerState::ScriptDataEscaped
                    };
                    self.flush_temp_buffer_as_chars();
                    self.emit_current(c);
                }
                Some(c) if c.is_ascii_alphabetic() => {
                    self.buffer_current(c);
                }
                _ => {
                    self.flush_temp_buffer_as_chars();
                    self.state = TokenizerState::ScriptDataEscaped;
                }
            },

            TokenizerState::ScriptDataDoubleEscaped => match self.cursor.current() {
                Some('-') => {
                    self.emit_current('-');
                    self.state = TokenizerState::ScriptDataDoubleEscapedDash;
                }
                Some('<') => {
                    self.token_start = self.cursor.position();
                    self.token_start_offset = self.cursor.offset();
                    self.emit_current('<');
                    self.state = TokenizerState::ScriptDataDoubleEscapedLessThanSign;
                }
                Some('\0') => {
                    self.error_here();
                    self.emit_current('\u{FFFD}');
                }
                Some(c) => self.emit_current(c),
                None => {
                    self.error_eof_in_construct();
                    self.emit_eof();
                }
            },

            TokenizerState::ScriptDataDoubleEscapedDash => match self.cursor.current() {
                Some('-') => {
                    self.emit_current('-');
                    self.state = TokenizerState::ScriptDataDoubleEscapedDashDash;
                }
                Some('<') => {
                    self.emit_current('<');
                    self.state = TokenizerState::ScriptDataDoubleEscapedLessThanSign;
                }
                Some('\0') => {
                    self.error_here();
                    self.emit_current('\u{FFFD}');
                    self.state = TokenizerState::ScriptDataDoubleEscaped;
                }
                Some(c) => {
                    self.emit_current(c);
                    self.state = TokenizerState::ScriptDataDoubleEscaped;
                }
                None => {
                    self.error_eof_in_construct();
                    self.emit_eof();
                }
            },

            TokenizerState::ScriptDataDoubleEscapedDashDash => match self.cursor.current() {
                Some('-') => self.emit_current('-'),
                Some('<') => {
                    self.emit_current('<');
                    self.state = TokenizerState::ScriptDataDoubleEscapedLessThanSign;
                }
                Some('>') => {
                    self.emit_current('>');
                    self.state = TokenizerState::ScriptData;
                }
                Some('\0') => {
                    self.error_here();
                    self.emit_current('\u{FFFD}');
                    self.state = TokenizerState::ScriptDataDoubleEscaped;
                }
                Some(c) => {
                    self.emit_current(c);
                    self.state = TokenizerState::ScriptDataDoubleEscaped;
                }
                None => {
                    self.error_eof_in_construct();
                    self.emit_eof();
                }
            },

            TokenizerState::ScriptDataDoubleEscapedLessThanSign => match self.cursor.current() {
                Some('/') => {
                    self.temp_buffer.clear();
                    self.emit_current('/');
                    self.state = TokenizerState::ScriptDataDoubleEscapeEnd;
                }
                _ => self.state = TokenizerState::ScriptDataDoubleEscaped,
            },

            TokenizerState::ScriptDataDoubleEscapeEnd => match self.cursor.current() {
                Some(c @ ('\t' | '\n' | '\x0C' | ' ' | '/' | '>')) => {
                    self.state = if self.temp_buffer_is("script") {
                        TokenizerState::ScriptDataEscaped
                    } else {
                        TokenizerState::ScriptDataDoubleEscaped
                    };
                    self.flush_temp_buffer_as_chars();
                    self.emit_current(c);
                }
                Some(c) if c.is_ascii_alphabetic() => {
                    self.buffer_current(c);
                }
                _ => {
                    self.flush_temp_buffer_as_chars();
                    self.state = TokenizerState::ScriptDataDoubleEscaped;
                }
            },

            TokenizerState::BeforeAttributeName => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => self.cursor.advance(),
                Some('/' | '>') | None => self.state = TokenizerState::AfterAttributeName,
                Some('=') => {
                    // > This is an unexpected-equals-sign-before-attribute-name
                    // > parse error.
                    self.error_here();
                    self.start_attribute();
                    let tag = self.tag_mut();
                    tag.attr.as_mut().expect("just started").name.push('=');
                    self.cursor.advance();
                    self.state = TokenizerState::AttributeName;
                }
                Some(_) => {
                    self.start_attribute();
                    self.state = TokenizerState::AttributeName;
                }
            },

            TokenizerState::AttributeName => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ' | '/' | '>') | None => {
                    self.finish_attribute_name();
                    self.state = TokenizerState::AfterAttributeName;
                }
                Some('=') => {
                    self.finish_attribute_name();
                    self.cursor.advance();
                    self.state = TokenizerState::BeforeAttributeValue;
                }
                Some('\0') => {
                    self.error_here();
                    self.cursor.advance();
                    self.attr_name_push('\u{FFFD}');
                }
                Some(c @ ('"' | '\'' | '<')) => {
                    // > This is an unexpected-character-in-attribute-name
                    // > parse error.
                    self.error_here();
                    self.cursor.advance();
                    self.attr_name_push(c);
                }
                Some(c) => {
                    self.cursor.advance();
                    self.attr_name_push(c.to_ascii_lowercase());
                }
            },

            TokenizerState::AfterAttributeName => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => self.cursor.advance(),
                Some('/') => {
                    self.cursor.advance();
                    self.state = TokenizerState::SelfClosingStartTag;
                }
                Some('=') => {
                    self.cursor.advance();
                    self.state = TokenizerState::BeforeAttributeValue;
                }
                Some('>') => {
                    self.cursor.advance();
                    self.finish_tag();
                    self.state = TokenizerState::Data;
                }
                None => {
                    self.error_eof_in_construct();
                    self.tag = None;
                    self.emit_eof();
                }
                Some(_) => {
                    self.finish_attribute();
                    self.start_attribute();
                    self.state = TokenizerState::AttributeName;
                }
            },

            TokenizerState::BeforeAttributeValue => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => self.cursor.advance(),
                Some('"') => {
                    self.cursor.advance();
                    self.begin_attribute_value();
                    self.state = TokenizerState::AttributeValueDoubleQuoted;
                }
                Some('\'') => {
                    self.cursor.advance();
                    self.begin_attribute_value();
                    self.state = TokenizerState::AttributeValueSingleQuoted;
                }
                Some('>') => {
                    // > This is a missing-attribute-value parse error.
                    self.error_here();
                    self.cursor.advance();
                    self.finish_tag();
                    self.state = TokenizerState::Data;
                }
                _ => {
                    self.begin_attribute_value();
                    self.state = TokenizerState::AttributeValueUnquoted;
                }
            },

            TokenizerState::AttributeValueDoubleQuoted => match self.cursor.current() {
                Some('"') => {
                    self.end_attribute_value();
                    self.cursor.advance();
                    self.state = TokenizerState::AfterAttributeValueQuoted;
                }
                Some('&') => self.consume_char_ref_in_attribute(),
                Some('\0') => {
                    self.error_here();
                    self.cursor.advance();
                    self.attr_value_push('\u{FFFD}');
                }
                Some(c) => {
                    self.cursor.advance();
                    self.attr_value_push(c);
                }
                None => {
                    self.error_eof_in_construct();
                    self.tag = None;
                    self.emit_eof();
                }
            },

            TokenizerState::AttributeValueSingleQuoted => match self.cursor.current() {
                Some('\'') => {
                    self.end_attribute_value();
                    self.cursor.advance();
                    self.state = TokenizerState::AfterAttributeValueQuoted;
                }
                Some('&') => self.consume_char_ref_in_attribute(),
                Some('\0') => {
                    self.error_here();
                    self.cursor.advance();
                    self.attr_value_push('\u{FFFD}');
                }
                Some(c) => {
                    self.cursor.advance();
                    self.attr_value_push(c);
                }
                None => {
                    self.error_eof_in_construct();
                    self.tag = None;
                    self.emit_eof();
                }
            },

            TokenizerState::AttributeValueUnquoted => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => {
                    self.end_attribute_value();
                    self.cursor.advance();
                    self.state = TokenizerState::BeforeAttributeName;
                }
                Some('&') => self.consume_char_ref_in_attribute(),
                Some('>') => {
                    self.end_attribute_value();
                    self.cursor.advance();
                    self.finish_tag();
                    self.state = TokenizerState::Data;
                }
                Some('\0') => {
                    self.error_here();
                    self.cursor.advance();
                    self.attr_value_push('\u{FFFD}');
                }
                Some(c @ ('"' | '\'' | '<' | '=' | '`')) => {
                    // > This is an unexpected-character-in-unquoted-attribute-value
                    // > parse error.
                    self.error_here();
                    self.cursor.advance();
                    self.attr_value_push(c);
                }
                Some(c) => {
                    self.cursor.advance();
                    self.attr_value_push(c);
                }
                None => {
                    self.error_eof_in_construct();
                    self.tag = None;
                    self.emit_eof();
                }
            },

            TokenizerState::AfterAttributeValueQuoted => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => {
                    self.cursor.advance();
                    self.state = TokenizerState::BeforeAttributeName;
                }
                Some('/') => {
                    self.cursor.advance();
                    self.state = TokenizerState::SelfClosingStartTag;
                }
                Some('>') => {
                    self.cursor.advance();
                    self.finish_tag();
                    self.state = TokenizerState::Data;
                }
                None => {
                    self.error_eof_in_construct();
                    self.tag = None;
                    self.emit_eof();
                }
                Some(_) => {
                    // > This is a missing-whitespace-between-attributes
                    // > parse error.
                    self.error_here();
                    self.state = TokenizerState::BeforeAttributeName;
                }
            },

            TokenizerState::SelfClosingStartTag => match self.cursor.current() {
                Some('>') => {
                    self.tag_mut().self_closing = true;
                    self.cursor.advance();
                    self.finish_tag();
                    self.state = TokenizerState::Data;
                }
                None => {
                    self.error_eof_in_construct();
                    self.tag = None;
                    self.emit_eof();
                }
                Some(_) => {
                    // > This is an unexpected-solidus-in-tag parse error.
                    self.error_here();
                    self.state = TokenizerState::BeforeAttributeName;
                }
            },

            TokenizerState::BogusComment => match self.cursor.current() {
                Some('>') => {
                    self.cursor.advance();
                    self.emit_comment();
                    self.state = TokenizerState::Data;
                }
                Some('\0') => {
                    self.error_here();
                    self.cursor.advance();
                    self.comment_mut().push('\u{FFFD}');
                }
                Some(c) => {
                    self.cursor.advance();
                    self.comment_mut().push(c);
                }
                None => {
                    self.emit_comment();
                    self.emit_eof();
                }
            },

            TokenizerState::MarkupDeclarationOpen => {
                if self.cursor.lookahead_matches(b"--", true) {
                    self.start_comment("");
                    self.state = TokenizerState::CommentStart;
                } else if self.cursor.lookahead_matches(b"DOCTYPE", false) {
                    self.state = TokenizerState::Doctype;
                } else if self.cursor.lookahead_matches(b"[CDATA[", true) {
                    if self.foreign_content {
                        self.state = TokenizerState::CdataSection;
                    } else {
                        // > This is a cdata-in-html-content parse error.
                        self.error_here();
                        self.start_comment("[CDATA[");
                        self.state = TokenizerState::BogusComment;
                    }
                } else {
                    // > This is an incorrectly-opened-comment parse error.
                    self.error_here();
                    self.start_comment("");
                    self.state = TokenizerState::BogusComment;
                }
            }

            TokenizerState::CommentStart => match self.cursor.current() {
                Some('-') => {
                    self.cursor.advance();
                    self.state = TokenizerState::CommentStartDash;
                }
                Some('>') => {
                    // > This is an abrupt-closing-of-empty-comment parse error.
                    self.error_here();
                    self.cursor.advance();
                    self.emit_comment();
                    self.state = TokenizerState::Data;
                }
                _ => self.state = TokenizerState::Comment,
            },

            TokenizerState::CommentStartDash => match self.cursor.current() {
                Some('-') => {
                    self.cursor.advance();
                    self.state = TokenizerState::CommentEnd;
                }
                Some('>') => {
                    self.error_here();
                    self.cursor.advance();
                    self.emit_comment();
                    self.state = TokenizerState::Data;
                }
                None => {
                    self.error_eof_in_construct();
                    self.emit_comment();
                    self.emit_eof();
                }
                Some(_) => {
                    self.comment_mut().push('-');
                    self.state = TokenizerState::Comment;
                }
            },

            TokenizerState::Comment => match self.cursor.current() {
                Some('<') => {
                    self.cursor.advance();
                    self.comment_mut().push('<');
                    self.state = TokenizerState::CommentLessThanSign;
                }
                Some('-') => {
                    self.cursor.advance();
                    self.state = TokenizerState::CommentEndDash;
                }
                Some('\0') => {
                    self.error_here();
                    self.cursor.advance();
                    self.comment_mut().push('\u{FFFD}');
                }
                Some(c) => {
                    self.cursor.advance();
                    self.comment_mut().push(c);
                }
                None => {
                    // > This is an eof-in-comment parse error.
                    self.error_eof_in_construct();
                    self.emit_comment();
                    self.emit_eof();
                }
            },

            TokenizerState::CommentLessThanSign => match self.cursor.current() {
                Some('!') => {
                    self.cursor.advance();
                    self.comment_mut().push('!');
                    self.state = TokenizerState::CommentLessThanSignBang;
                }
                Some('<') => {
                    self.cursor.advance();
                    self.comment_mut().push('<');
                }
                _ => self.state = TokenizerState::Comment,
            },

            TokenizerState::CommentLessThanSignBang => match self.cursor.current() {
                Some('-') => {
                    self.cursor.advance();
                    self.state = TokenizerState::CommentLessThanSignBangDash;
                }
                _ => self.state = TokenizerState::Comment,
            },

            TokenizerState::CommentLessThanSignBangDash => match self.cursor.current() {
                Some('-') => {
                    self.cursor.advance();
                    self.state = TokenizerState::CommentLessThanSignBangDashDash;
                }
                _ => self.state = TokenizerState::CommentEndDash,
            },

            TokenizerState::CommentLessThanSignBangDashDash => match self.cursor.current() {
                Some('>') | None => self.state = TokenizerState::CommentEnd,
                Some(_) => {
                    // > This is a nested-comment parse error.
                    self.error_here();
                    self.state = TokenizerState::CommentEnd;
                }
            },

            TokenizerState::CommentEndDash => match self.cursor.current() {
                Some('-') => {
                    self.cursor.advance();
                    self.state = TokenizerState::CommentEnd;
                }
                None => {
                    self.error_eof_in_construct();
                    self.emit_comment();
                    self.emit_eof();
                }
                Some(_) => {
                    self.comment_mut().push('-');
                    self.state = TokenizerState::Comment;
                }
            },

            TokenizerState::CommentEnd => match self.cursor.current() {
                Some('>') => {
                    self.cursor.advance();
                    self.emit_comment();
                    self.state = TokenizerState::Data;
                }
                Some('!') => {
                    self.cursor.advance();
                    self.state = TokenizerState::CommentEndBang;
                }
                Some('-') => {
                    self.cursor.advance();
                    self.comment_mut().push('-');
                }
                None => {
                    self.error_eof_in_construct();
                    self.emit_comment();
                    self.emit_eof();
                }
                Some(_) => {
                    self.comment_mut().push_str("--");
                    self.state = TokenizerState::Comment;
                }
            },

            TokenizerState::CommentEndBang => match self.cursor.current() {
                Some('-') => {
                    self.cursor.advance();
                    self.comment_mut().push_str("--!");
                    self.state = TokenizerState::CommentEndDash;
                }
                Some('>') => {
                    // > This is an incorrectly-closed-comment parse error.
                    self.error_here();
                    self.cursor.advance();
                    self.emit_comment();
                    self.state = TokenizerState::Data;
                }
                None => {
                    self.error_eof_in_construct();
                    self.emit_comment();
                    self.emit_eof();
                }
                Some(_) => {
                    self.comment_mut().push_str("--!");
                    self.state = TokenizerState::Comment;
                }
            },

            TokenizerState::Doctype => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => {
                    self.cursor.advance();
                    self.state = TokenizerState::BeforeDoctypeName;
                }
                Some('>') => self.state = TokenizerState::BeforeDoctypeName,
                None => {
                    self.start_doctype();
                    self.eof_in_doctype();
                }
                Some(_) => {
                    // > This is a missing-whitespace-before-doctype-name
                    // > parse error.
                    self.error_here();
                    self.state = TokenizerState::BeforeDoctypeName;
                }
            },

            TokenizerState::BeforeDoctypeName => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => self.cursor.advance(),
                Some('>') => {
                    // > This is a missing-doctype-name parse error.
                    self.error_here();
                    self.cursor.advance();
                    self.start_doctype();
                    self.doctype_mut().force_quirks = true;
                    self.emit_doctype();
                    self.state = TokenizerState::Data;
                }
                Some('\0') => {
                    self.error_here();
                    self.cursor.advance();
                    self.start_doctype();
                    let doctype = self.doctype_mut();
                    doctype.has_name = true;
                    doctype.name.push('\u{FFFD}');
                    self.state = TokenizerState::DoctypeName;
                }
                Some(c) => {
                    self.cursor.advance();
                    self.start_doctype();
                    let doctype = self.doctype_mut();
                    doctype.has_name = true;
                    doctype.name.push(c.to_ascii_lowercase());
                    self.state = TokenizerState::DoctypeName;
                }
                None => {
                    self.start_doctype();
                    self.eof_in_doctype();
                }
            },

            TokenizerState::DoctypeName => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => {
                    self.cursor.advance();
                    self.state = TokenizerState::AfterDoctypeName;
                }
                Some('>') => {
                    self.cursor.advance();
                    self.emit_doctype();
                    self.state = TokenizerState::Data;
                }
                Some('\0') => {
                    self.error_here();
                    self.cursor.advance();
                    self.doctype_mut().name.push('\u{FFFD}');
                }
                Some(c) => {
                    self.cursor.advance();
                    self.doctype_mut().name.push(c.to_ascii_lowercase());
                }
                None => self.eof_in_doctype(),
            },

            TokenizerState::AfterDoctypeName => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => self.cursor.advance(),
                Some('>') => {
                    self.cursor.advance();
                    self.emit_doctype();
                    self.state = TokenizerState::Data;
                }
                None => self.eof_in_doctype(),
                Some(_) => {
                    if self.cursor.lookahead_matches(b"PUBLIC", false) {
                        self.state = TokenizerState::AfterDoctypePublicKeyword;
                    } else if self.cursor.lookahead_matches(b"SYSTEM", false) {
                        self.state = TokenizerState::AfterDoctypeSystemKeyword;
                    } else {
                        // > This is an invalid-character-sequence-after-doctype-name
                        // > parse error.
                        self.error_here();
                        self.doctype_mut().force_quirks = true;
                        self.state = TokenizerState::BogusDoctype;
                    }
                }
            },

            TokenizerState::AfterDoctypePublicKeyword => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => {
                    self.cursor.advance();
                    self.state = TokenizerState::BeforeDoctypePublicIdentifier;
                }
                Some('"') => {
                    self.error_here();
                    self.cursor.advance();
                    self.doctype_mut().has_public_identifier = true;
                    self.state = TokenizerState::DoctypePublicIdentifierDoubleQuoted;
                }
                Some('\'') => {
                    self.error_here();
                    self.cursor.advance();
                    self.doctype_mut().has_public_identifier = true;
                    self.state = TokenizerState::DoctypePublicIdentifierSingleQuoted;
                }
                Some('>') => {
                    // > This is a missing-doctype-public-identifier parse error.
                    self.error_here();
                    self.cursor.advance();
                    self.doctype_mut().force_quirks = true;
                    self.emit_doctype();
                    self.state = TokenizerState::Data;
                }
                None => self.eof_in_doctype(),
                Some(_) => {
                    self.error_here();
                    self.doctype_mut().force_quirks = true;
                    self.state = TokenizerState::BogusDoctype;
                }
            },

            TokenizerState::BeforeDoctypePublicIdentifier => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => self.cursor.advance(),
                Some('"') => {
                    self.cursor.advance();
                    self.doctype_mut().has_public_identifier = true;
                    self.state = TokenizerState::DoctypePublicIdentifierDoubleQuoted;
                }
                Some('\'') => {
                    self.cursor.advance();
                    self.doctype_mut().has_public_identifier = true;
                    self.state = TokenizerState::DoctypePublicIdentifierSingleQuoted;
                }
                Some('>') => {
                    self.error_here();
                    self.cursor.advance();
                    self.doctype_mut().force_quirks = true;
                    self.emit_doctype();
                    self.state = TokenizerState::Data;
                }
                None => self.eof_in_doctype(),
                Some(_) => {
                    self.error_here();
                    self.doctype_mut().force_quirks = true;
                    self.state = TokenizerState::BogusDoctype;
                }
            },

            TokenizerState::DoctypePublicIdentifierDoubleQuoted
            | TokenizerState::DoctypePublicIdentifierSingleQuoted => {
                let closer = if self.state == TokenizerState::DoctypePublicIdentifierDoubleQuoted
                {
                    '"'
                } else {
                    '\''
                };
                match self.cursor.current() {
                    Some(c) if c == closer => {
                        self.cursor.advance();
                        self.state = TokenizerState::AfterDoctypePublicIdentifier;
                    }
                    Some('\0') => {
                        self.error_here();
                        self.cursor.advance();
                        self.doctype_mut().public_identifier.push('\u{FFFD}');
                    }
                    Some('>') => {
                        // > This is an abrupt-doctype-public-identifier parse error.
                        self.error_here();
                        self.cursor.advance();
                        self.doctype_mut().force_quirks = true;
                        self.emit_doctype();
                        self.state = TokenizerState::Data;
                    }
                    Some(c) => {
                        self.cursor.advance();
                        self.doctype_mut().public_identifier.push(c);
                    }
                    None => self.eof_in_doctype(),
                }
            }

            TokenizerState::AfterDoctypePublicIdentifier => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => {
                    self.cursor.advance();
                    self.state = TokenizerState::BetweenDoctypePublicAndSystemIdentifiers;
                }
                Some('>') => {
                    self.cursor.advance();
                    self.emit_doctype();
                    self.state = TokenizerState::Data;
                }
                Some('"') => {
                    self.error_here();
                    self.cursor.advance();
                    self.doctype_mut().has_system_identifier = true;
                    self.state = TokenizerState::DoctypeSystemIdentifierDoubleQuoted;
                }
                Some('\'') => {
                    self.error_here();
                    self.cursor.advance();
                    self.doctype_mut().has_system_identifier = true;
                    self.state = TokenizerState::DoctypeSystemIdentifierSingleQuoted;
                }
                None => self.eof_in_doctype(),
                Some(_) => {
                    self.error_here();
                    self.doctype_mut().force_quirks = true;
                    self.state = TokenizerState::BogusDoctype;
                }
            },

            TokenizerState::BetweenDoctypePublicAndSystemIdentifiers => {
                match self.cursor.current() {
                    Some('\t' | '\n' | '\x0C' | ' ') => self.cursor.advance(),
                    Some('>') => {
                        self.cursor.advance();
                        self.emit_doctype();
                        self.state = TokenizerState::Data;
                    }
                    Some('"') => {
                        self.cursor.advance();
                        self.doctype_mut().has_system_identifier = true;
                        self.state = TokenizerState::DoctypeSystemIdentifierDoubleQuoted;
                    }
                    Some('\'') => {
                        self.cursor.advance();
                        self.doctype_mut().has_system_identifier = true;
                        self.state = TokenizerState::DoctypeSystemIdentifierSingleQuoted;
                    }
                    None => self.eof_in_doctype(),
                    Some(_) => {
                        self.error_here();
                        self.doctype_mut().force_quirks = true;
                        self.state = TokenizerState::BogusDoctype;
                    }
                }
            }

            TokenizerState::AfterDoctypeSystemKeyword => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => {
                    self.cursor.advance();
                    self.state = TokenizerState::BeforeDoctypeSystemIdentifier;
                }
                Some('"') => {
                    self.error_here();
                    self.cursor.advance();
                    self.doctype_mut().has_system_identifier = true;
                    self.state = TokenizerState::DoctypeSystemIdentifierDoubleQuoted;
                }
                Some('\'') => {
                    self.error_here();
                    self.cursor.advance();
                    self.doctype_mut().has_system_identifier = true;
                    self.state = TokenizerState::DoctypeSystemIdentifierSingleQuoted;
                }
                Some('>') => {
                    // > This is a missing-doctype-system-identifier parse error.
                    self.error_here();
                    self.cursor.advance();
                    self.doctype_mut().force_quirks = true;
                    self.emit_doctype();
                    self.state = TokenizerState::Data;
                }
                None => self.eof_in_doctype(),
                Some(_) => {
                    self.error_here();
                    self.doctype_mut().force_quirks = true;
                    self.state = TokenizerState::BogusDoctype;
                }
            },

            TokenizerState::BeforeDoctypeSystemIdentifier => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => self.cursor.advance(),
                Some('"') => {
                    self.cursor.advance();
                    self.doctype_mut().has_system_identifier = true;
                    self.state = TokenizerState::DoctypeSystemIdentifierDoubleQuoted;
                }
                Some('\'') => {
                    self.cursor.advance();
                    self.doctype_mut().has_system_identifier = true;
                    self.state = TokenizerState::DoctypeSystemIdentifierSingleQuoted;
                }
                Some('>') => {
                    self.error_here();
                    self.cursor.advance();
                    self.doctype_mut().force_quirks = true;
                    self.emit_doctype();
                    self.state = TokenizerState::Data;
                }
                None => self.eof_in_doctype(),
                Some(_) => {
                    self.error_here();
                    self.doctype_mut().force_quirks = true;
                    self.state = TokenizerState::BogusDoctype;
                }
            },

            TokenizerState::DoctypeSystemIdentifierDoubleQuoted
            | TokenizerState::DoctypeSystemIdentifierSingleQuoted => {
                let closer = if self.state == TokenizerState::DoctypeSystemIdentifierDoubleQuoted
                {
                    '"'
                } else {
                    '\''
                };
                match self.cursor.current() {
                    Some(c) if c == closer => {
                        self.cursor.advance();
                        self.state = TokenizerState::AfterDoctypeSystemIdentifier;
                    }
                    Some('\0') => {
                        self.error_here();
                        self.cursor.advance();
                        self.doctype_mut().system_identifier.push('\u{FFFD}');
                    }
                    Some('>') => {
                        // > This is an abrupt-doctype-system-identifier parse error.
                        self.error_here();
                        self.cursor.advance();
                        self.doctype_mut().force_quirks = true;
                        self.emit_doctype();
                        self.state = TokenizerState::Data;
                    }
                    Some(c) => {
                        self.cursor.advance();
                        self.doctype_mut().system_identifier.push(c);
                    }
                    None => self.eof_in_doctype(),
                }
            }

            TokenizerState::AfterDoctypeSystemIdentifier => match self.cursor.current() {
                Some('\t' | '\n' | '\x0C' | ' ') => self.cursor.advance(),
                Some('>') => {
                    self.cursor.advance();
                    self.emit_doctype();
                    self.state = TokenizerState::Data;
                }
                None => self.eof_in_doctype(),
                Some(_) => {
                    // > This is an unexpected-character-after-doctype-system-identifier
                    // > parse error… This does not set the current DOCTYPE
                    // > token's force-quirks flag to on.
                    self.error_here();
                    self.state = TokenizerState::BogusDoctype;
                }
            },

            TokenizerState::BogusDoctype => match self.cursor.current() {
                Some('>') => {
                    self.cursor.advance();
                    self.emit_doctype();
                    self.state = TokenizerState::Data;
                }
                Some('\0') => {
                    self.error_here();
                    self.cursor.advance();
                }
                Some(_) => self.cursor.advance(),
                None => {
                    self.emit_doctype();
                    self.emit_eof();
                }
            },

            TokenizerState::CdataSection => match self.cursor.current() {
                Some(']') => {
                    self.temp_buffer.clear();
                    self.buffer_current(']');
                    self.state = TokenizerState::CdataSectionBracket;
                }
                Some(c) => self.emit_current_cdata(c),
                None => {
                    // > This is an eof-in-cdata parse error.
                    self.error_eof_in_construct();
                    self.emit_eof();
                }
            },

            TokenizerState::CdataSectionBracket => match self.cursor.current() {
                Some(']') => {
                    self.buffer_current(']');
                    self.state = TokenizerState::CdataSectionEnd;
                }
                _ => {
                    self.flush_temp_buffer_as_cdata();
                    self.state = TokenizerState::CdataSection;
                }
            },

            TokenizerState::CdataSectionEnd => match self.cursor.current() {
                Some(']') => {
                    // Emit the oldest bracket; the two most recent may
                    // still close the section.
                    let oldest = self.temp_buffer.remove(0);
                    self.pending.push_back(Token {
                        position: oldest.position,
                        original_text: Span::new(oldest.offset, 1),
                        data: TokenData::CdataCharacter(']'),
                    });
                    self.buffer_current(']');
                }
                Some('>') => {
                    self.temp_buffer.clear();
                    self.cursor.advance();
                    self.state = TokenizerState::Data;
                }
                _ => {
                    self.flush_temp_buffer_as_cdata();
                    self.state = TokenizerState::CdataSection;
                }
            },
        }
    }

    fn attr_name_push(&mut self, c: char) {
        if let Some(attr) = self.tag_mut().attr.as_mut() {
            attr.name.push(c);
        }
    }

    fn attr_value_push(&mut self, c: char) {
        if let Some(attr) = self.tag_mut().attr.as_mut() {
            attr.value.push(c);
        }
    }

    /// Marks where the current attribute's value text begins.
    fn begin_attribute_value(&mut self) {
        let position = self.cursor.position();
        let start = self.cursor.offset();
        if let Some(attr) = self.tag_mut().attr.as_mut() {
            attr.value_position = position;
            attr.value_start = start;
            attr.value_end = start;
        }
    }

    /// Marks where the current attribute's value text ends (before any
    /// closing quote).
    fn end_attribute_value(&mut self) {
        let end = self.cursor.offset();
        if let Some(attr) = self.tag_mut().attr.as_mut() {
            attr.value_end = end;
        }
    }
}

/// A position a fixed number of one-byte, non-newline characters later.
fn position_after(position: SourcePosition, bytes: u32) -> SourcePosition {
    SourcePosition {
        line: position.line,
        column: position.column + bytes,
        offset: position.offset + bytes as usize,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::token::TokenKind;

    fn tokenize(input: &[u8]) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new(input, 8, ErrorSink::new(None, false));
        let mut tokens = Vec::new();
        loop {
            let token = tokenizer.next_token();
            let is_eof = token.data == TokenData::Eof;
            tokens.push(token);
            if is_eof {
                return tokens;
            }
        }
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind()).collect()
    }

    fn text_of(tokens: &[Token]) -> String {
        tokens
            .iter()
            .filter_map(|t| match &t.data {
                TokenData::Character(c)
                | TokenData::Whitespace(c)
                | TokenData::CdataCharacter(c) => Some(*c),
                TokenData::NullCharacter => Some('\0'),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn simple_tag_and_text() {
        let tokens = tokenize(b"<p>Hi</p>");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::StartTag,
                TokenKind::Character,
                TokenKind::Character,
                TokenKind::EndTag,
                TokenKind::Eof,
            ]
        );

        match &tokens[0].data {
            TokenData::StartTag(tag) => assert_eq!(tag.tag, TagName::P),
            other => panic!("expected start tag, got {:?}", other),
        }
        assert_eq!(tokens[0].original_text, Span::new(0, 3));
        assert_eq!(tokens[3].original_text, Span::new(5, 4));
    }

    #[test]
    fn tag_names_are_lowercased() {
        let tokens = tokenize(b"<DiV CLASS=a>");
        match &tokens[0].data {
            TokenData::StartTag(tag) => {
                assert_eq!(tag.tag, TagName::DIV);
                assert_eq!(tag.attributes[0].name.as_ref(), "class");
                assert_eq!(tag.attributes[0].value.as_ref(), "a");
            }
            other => panic!("expected start tag, got {:?}", other),
        }
    }

    #[test]
    fn attribute_quoting_styles() {
        let tokens = tokenize(br#"<a href="x" title='y' data-z=w disabled>"#);
        match &tokens[0].data {
            TokenData::StartTag(tag) => {
                let values: Vec<(&str, &str)> = tag
                    .attributes
                    .iter()
                    .map(|a| (a.name.as_ref(), a.value.as_ref()))
                    .collect();
                assert_eq!(
                    values,
                    vec![("href", "x"), ("title", "y"), ("data-z", "w"), ("disabled", "")]
                );

                // Quoted value spans exclude their quotes.
                assert_eq!(tag.attributes[0].original_value, Span::new(9, 1));
            }
            other => panic!("expected start tag, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_attributes_first_wins() {
        let mut tokenizer = Tokenizer::new(b"<a id=1 id=2>", 8, ErrorSink::new(None, false));
        let token = tokenizer.next_token();
        match token.data {
            TokenData::StartTag(tag) => {
                assert_eq!(tag.attributes.len(), 1);
                assert_eq!(tag.attributes[0].value.as_ref(), "1");
            }
            other => panic!("expected start tag, got {:?}", other),
        }
        let errors = tokenizer.errors.into_errors();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0].error,
            ErrorType::DuplicateAttribute { name, original_index: 0, new_index: 1 }
                if name.as_ref() == "id"
        ));
    }

    #[test]
    fn self_closing_flag() {
        let tokens = tokenize(b"<br/>");
        match &tokens[0].data {
            TokenData::StartTag(tag) => assert!(tag.self_closing),
            other => panic!("expected start tag, got {:?}", other),
        }
    }

    #[test]
    fn lone_less_than_is_text() {
        let tokens = tokenize(b"<\n");
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Character, TokenKind::Whitespace, TokenKind::Eof]
        );
        assert_eq!(text_of(&tokens), "<\n");
        assert_eq!(
            tokens[0].position,
            SourcePosition { line: 1, column: 1, offset: 0 }
        );
    }

    #[test]
    fn character_references_in_data() {
        let tokens = tokenize(b"A&amp;B");
        assert_eq!(text_of(&tokens), "A&B");

        // The decoded token spans the whole reference.
        assert_eq!(tokens[1].original_text, Span::new(1, 5));
    }

    #[test]
    fn character_references_in_attributes() {
        let tokens = tokenize(b"<a href='a&amp;b&not!'>");
        match &tokens[0].data {
            TokenData::StartTag(tag) => {
                // `&not` is a legacy reference; `!` does not suppress it.
                assert_eq!(tag.attributes[0].value.as_ref(), "a&b\u{00AC}!");
            }
            other => panic!("expected start tag, got {:?}", other),
        }

        // Followed by an alphanumeric, the legacy match is refused and the
        // ampersand stays literal.
        let tokens = tokenize(b"<a href='a&notit'>");
        match &tokens[0].data {
            TokenData::StartTag(tag) => {
                assert_eq!(tag.attributes[0].value.as_ref(), "a&notit");
            }
            other => panic!("expected start tag, got {:?}", other),
        }
    }

    #[test]
    fn comments() {
        let tokens = tokenize(b"<!-- hello -->");
        match &tokens[0].data {
            TokenData::Comment(text) => assert_eq!(text.as_ref(), " hello "),
            other => panic!("expected comment, got {:?}", other),
        }
        assert_eq!(tokens[0].original_text, Span::new(0, 14));

        // Bogus comment from a processing-instruction lookalike.
        let tokens = tokenize(b"<?pi data?>");
        match &tokens[0].data {
            TokenData::Comment(text) => assert_eq!(text.as_ref(), "?pi data?"),
            other => panic!("expected comment, got {:?}", other),
        }
    }

    #[test]
    fn doctype_with_identifiers() {
        let tokens =
            tokenize(br#"<!DOCTYPE html PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://x">"#);
        match &tokens[0].data {
            TokenData::Doctype(doctype) => {
                assert_eq!(doctype.name.as_deref(), Some("html"));
                assert_eq!(
                    doctype.public_identifier.as_deref(),
                    Some("-//W3C//DTD HTML 4.01//EN")
                );
                assert_eq!(doctype.system_identifier.as_deref(), Some("http://x"));
                assert!(!doctype.force_quirks);
            }
            other => panic!("expected doctype, got {:?}", other),
        }
    }

    #[test]
    fn rcdata_treats_markup_as_text() {
        let mut tokenizer =
            Tokenizer::new(b"<textarea><p>x</textarea>", 8, ErrorSink::new(None, false));
        let first = tokenizer.next_token();
        assert_eq!(first.kind(), TokenKind::StartTag);
        tokenizer.set_state(TokenizerState::Rcdata);

        let mut text = String::new();
        loop {
            let token = tokenizer.next_token();
            match token.data {
                TokenData::Character(c) | TokenData::Whitespace(c) => text.push(c),
                TokenData::EndTag(tag) => {
                    assert_eq!(tag.tag, TagName::TEXTAREA);
                    break;
                }
                other => panic!("unexpected token {:?}", other),
            }
        }
        assert_eq!(text, "<p>x");
    }

    #[test]
    fn script_data_escaped_end_tag() {
        let mut tokenizer = Tokenizer::new(
            b"<script>if (a < b) { c(); } // </not-it> \n</script>",
            8,
            ErrorSink::new(None, false),
        );
        let first = tokenizer.next_token();
        assert_eq!(first.kind(), TokenKind::StartTag);
        tokenizer.set_state(TokenizerState::ScriptData);

        let mut text = String::new();
        loop {
            let token = tokenizer.next_token();
            match token.data {
                TokenData::Character(c) | TokenData::Whitespace(c) => text.push(c),
                TokenData::EndTag(tag) => {
                    assert_eq!(tag.tag, TagName::SCRIPT);
                    break;
                }
                other => panic!("unexpected token {:?}", other),
            }
        }
        assert_eq!(text, "if (a < b) { c(); } // </not-it> \n");
    }

    #[test]
    fn cdata_only_in_foreign_content() {
        // In HTML content the section is a bogus comment.
        let tokens = tokenize(b"<![CDATA[x]]>");
        assert_eq!(kinds(&tokens), vec![TokenKind::Comment, TokenKind::Eof]);
        match &tokens[0].data {
            TokenData::Comment(text) => assert_eq!(text.as_ref(), "[CDATA[x]]"),
            other => panic!("expected comment, got {:?}", other),
        }

        // In foreign content it yields CDATA characters.
        let mut tokenizer = Tokenizer::new(b"<![CDATA[a]b]]>", 8, ErrorSink::new(None, false));
        tokenizer.set_foreign_content(true);
        let mut text = String::new();
        loop {
            let token = tokenizer.next_token();
            match token.data {
                TokenData::CdataCharacter(c) => text.push(c),
                TokenData::Eof => break,
                other => panic!("unexpected token {:?}", other),
            }
        }
        assert_eq!(text, "a]b");
    }

    #[test]
    fn eof_inside_tag_discards_it() {
        let tokens = tokenize(b"<div class=");
        assert_eq!(kinds(&tokens), vec![TokenKind::Eof]);
    }

    #[test]
    fn eof_inside_comment_emits_partial() {
        let tokens = tokenize(b"<!-- unfinished");
        assert_eq!(kinds(&tokens), vec![TokenKind::Comment, TokenKind::Eof]);
        match &tokens[0].data {
            TokenData::Comment(text) => assert_eq!(text.as_ref(), " unfinished"),
            other => panic!("expected comment, got {:?}", other),
        }
    }

    #[test]
    fn null_character_token_in_data() {
        let tokens = tokenize(b"a\x00b");
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Character,
                TokenKind::NullCharacter,
                TokenKind::Character,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn token_positions_are_monotonic() {
        let tokens = tokenize(
            b"<!DOCTYPE html><html><body class=x><!-- c --><p>text &amp; more</p></body></html>",
        );
        for pair in tokens.windows(2) {
            assert!(
                pair[0].position.offset <= pair[1].position.offset,
                "positions went backwards: {:?} then {:?}",
                pair[0].position,
                pair[1].position
            );
        }
    }
}
