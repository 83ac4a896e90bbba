use crate::node::{Attribute, SourcePosition, Span};
use crate::tag_name::TagName;

/// One token handed from the tokenizer to the tree constructor.
///
/// Every token carries the position of its first code point and the span of
/// source text it was lexed from. Character-class tokens cover a single
/// code point each — a decoded character reference yields one token per
/// resulting code point, all sharing the reference's source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub position: SourcePosition,
    pub original_text: Span,
    pub data: TokenData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenData {
    Doctype(DoctypeData),
    StartTag(TagData),
    EndTag(TagData),
    Comment(Box<str>),

    /// Any character that is not whitespace, NUL, or CDATA content.
    Character(char),

    /// TAB, LF, FF, or SPACE; split out because nearly every insertion
    /// mode treats whitespace differently from other text.
    Whitespace(char),

    /// A U+0000 in the source; several modes drop it, foreign content
    /// replaces it.
    NullCharacter,

    /// A character inside a real `<![CDATA[…]]>` section.
    CdataCharacter(char),

    Eof,
}

/// > DOCTYPE tokens have a name, a public identifier, a system identifier,
/// > and a force-quirks flag. When a DOCTYPE token is created, its name,
/// > public identifier, and system identifier must be marked as missing
/// > (which is a distinct state from the empty string), and the
/// > force-quirks flag must be set to off.
///
/// @see https://html.spec.whatwg.org/#tokenization
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DoctypeData {
    pub name: Option<Box<str>>,
    pub public_identifier: Option<Box<str>>,
    pub system_identifier: Option<Box<str>>,
    pub force_quirks: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagData {
    pub tag: TagName,
    pub attributes: Vec<Attribute>,
    pub self_closing: bool,
}

impl TagData {
    pub fn named(tag: TagName) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            self_closing: false,
        }
    }
}

/// Kind discriminant of a token, used in diagnostic payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Doctype,
    StartTag,
    EndTag,
    Comment,
    Character,
    Whitespace,
    NullCharacter,
    CdataSection,
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match &self.data {
            TokenData::Doctype(_) => TokenKind::Doctype,
            TokenData::StartTag(_) => TokenKind::StartTag,
            TokenData::EndTag(_) => TokenKind::EndTag,
            TokenData::Comment(_) => TokenKind::Comment,
            TokenData::Character(_) => TokenKind::Character,
            TokenData::Whitespace(_) => TokenKind::Whitespace,
            TokenData::NullCharacter => TokenKind::NullCharacter,
            TokenData::CdataCharacter(_) => TokenKind::CdataSection,
            TokenData::Eof => TokenKind::Eof,
        }
    }
}

impl From<&TokenKind> for &str {
    fn from(val: &TokenKind) -> Self {
        match val {
            TokenKind::Doctype => "#doctype",
            TokenKind::StartTag => "#start-tag",
            TokenKind::EndTag => "#end-tag",
            TokenKind::Comment => "#comment",
            TokenKind::Character => "#character",
            TokenKind::Whitespace => "#whitespace",
            TokenKind::NullCharacter => "#null",
            TokenKind::CdataSection => "#cdata-section",
            TokenKind::Eof => "#eof",
        }
    }
}
