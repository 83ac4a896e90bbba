use crate::arena::NodeId;
use crate::tag_name::TagName;

/// A byte window into the original input buffer.
///
/// Spans never own text. They index into the `html` buffer retained on the
/// output, so `original_*` fields survive for as long as the parse result
/// does without copying the input around.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Resolves the span against the buffer it indexes.
    pub fn of<'a>(&self, html: &'a [u8]) -> &'a [u8] {
        &html[self.start..self.start + self.length]
    }
}

/// A position in the original input.
///
/// Lines and columns are 1-based. The offset is the byte index of the
/// position in the original buffer; newline normalization never rewinds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

/// Document compatibility mode, as indicated by the DOCTYPE declaration.
///
/// > In no-quirks mode, the behavior is (hopefully) the desired behavior
/// > described by the modern HTML and CSS specifications.
///
/// > In quirks mode, layout emulates behavior in Navigator 4 and Internet
/// > Explorer 5. This is essential in order to support websites that were
/// > built before the widespread adoption of web standards.
///
/// @see https://developer.mozilla.org/en-US/docs/Web/HTML/Quirks_Mode_and_Standards_Mode
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum CompatMode {
    #[default]
    NoQuirks,
    Quirks,
    LimitedQuirks,
}

impl From<&CompatMode> for &str {
    fn from(val: &CompatMode) -> Self {
        match val {
            CompatMode::NoQuirks => "no-quirks",
            CompatMode::Quirks => "quirks",
            CompatMode::LimitedQuirks => "limited-quirks",
        }
    }
}

/// Namespace of an element, determining which parsing rules applied to it.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ParsingNamespace {
    #[default]
    Html,
    Svg,
    MathML,
}

impl From<&ParsingNamespace> for &str {
    fn from(val: &ParsingNamespace) -> Self {
        match val {
            ParsingNamespace::Html => "html",
            ParsingNamespace::Svg => "svg",
            ParsingNamespace::MathML => "math",
        }
    }
}

/// Namespace of an attribute after foreign-content adjustment.
///
/// Attributes on HTML elements always carry `None`. Inside SVG and MathML,
/// the `xlink:*`, `xml:*`, and `xmlns` attribute families are assigned
/// their proper namespaces.
///
/// @see https://html.spec.whatwg.org/#adjust-foreign-attributes
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum AttributeNamespace {
    #[default]
    None,
    XLink,
    Xml,
    Xmlns,
}

/// A single parsed attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name, ASCII-lowercased by the tokenizer (then possibly
    /// case-corrected by foreign-content adjustment).
    pub name: Box<str>,

    /// Attribute value with character references decoded.
    pub value: Box<str>,

    pub namespace: AttributeNamespace,

    /// The name as it appeared in the source, original casing included.
    pub original_name: Span,

    /// The value as it appeared in the source, without surrounding quotes.
    pub original_value: Span,

    pub name_position: SourcePosition,
    pub value_position: SourcePosition,
}

/// Records how an element ended up in the tree.
///
/// A normal element parsed off matching source tags has no flags set.
/// Everything the parser invents or relocates is marked, so consumers can
/// distinguish markup the author wrote from structure the algorithm
/// required.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseFlags(u32);

impl ParseFlags {
    /// Element was not in the input; the parser synthesized it.
    pub const INSERTION_BY_PARSER: ParseFlags = ParseFlags(1 << 0);

    /// Element closed without a matching end tag in the input.
    pub const IMPLICIT_END_TAG: ParseFlags = ParseFlags(1 << 1);

    /// Element was implied by context (html, head, body, tbody, …).
    pub const IMPLIED: ParseFlags = ParseFlags(1 << 2);

    /// A stray end tag was converted into this start tag (`</br>`).
    pub const CONVERTED_FROM_END_TAG: ParseFlags = ParseFlags(1 << 3);

    /// An `<image>` start tag was rewritten into this `<img>` element.
    pub const FROM_IMAGE: ParseFlags = ParseFlags(1 << 4);

    /// Element was recreated from the list of active formatting elements.
    pub const RECONSTRUCTED_FORMATTING_ELEMENT: ParseFlags = ParseFlags(1 << 5);

    /// Element is the clone created by the adoption agency algorithm.
    pub const ADOPTION_AGENCY_CLONED: ParseFlags = ParseFlags(1 << 6);

    /// Element was reparented by the adoption agency algorithm.
    pub const ADOPTION_AGENCY_MOVED: ParseFlags = ParseFlags(1 << 7);

    /// Element was redirected out of a table by foster parenting.
    pub const FOSTER_PARENTED: ParseFlags = ParseFlags(1 << 8);

    pub fn insert(&mut self, flag: ParseFlags) {
        self.0 |= flag.0;
    }

    pub fn contains(&self, flag: ParseFlags) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

/// One node of the produced document tree.
///
/// Every node other than the document root keeps a back-reference to its
/// parent along with its own index in the parent's child sequence; both are
/// maintained by the tree constructor and stay in agreement with the
/// parent's `children` at all times.
#[derive(Debug)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub index_within_parent: usize,
    pub kind: NodeKind,
}

#[derive(Debug)]
pub enum NodeKind {
    Document(DocumentData),
    Element(ElementData),
    Text(TextData),
    Whitespace(TextData),
    CdataSection(TextData),
    Comment(TextData),
}

#[derive(Debug, Default)]
pub struct DocumentData {
    pub children: Vec<NodeId>,
    pub has_doctype: bool,
    pub name: Box<str>,
    pub public_identifier: Box<str>,
    pub system_identifier: Box<str>,
    pub compat_mode: CompatMode,
}

#[derive(Debug)]
pub struct ElementData {
    pub tag: TagName,
    pub namespace: ParsingNamespace,
    pub attributes: Vec<Attribute>,
    pub children: Vec<NodeId>,

    /// Source of the start tag, `<` through `>` inclusive. Zero-length for
    /// parser-inserted elements.
    pub original_tag: Span,

    /// Source of the matching end tag, or zero-length when the element was
    /// closed implicitly.
    pub original_end_tag: Span,

    pub start_position: SourcePosition,
    pub end_position: SourcePosition,

    pub parse_flags: ParseFlags,
}

/// Payload shared by text, whitespace, CDATA, and comment nodes.
#[derive(Debug)]
pub struct TextData {
    /// Decoded text: character references resolved, newlines normalized.
    pub text: Box<str>,

    pub original_text: Span,

    pub start_position: SourcePosition,
}

impl Node {
    pub fn children(&self) -> &[NodeId] {
        match &self.kind {
            NodeKind::Document(document) => &document.children,
            NodeKind::Element(element) => &element.children,
            _ => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<NodeId> {
        match &mut self.kind {
            NodeKind::Document(document) => &mut document.children,
            NodeKind::Element(element) => &mut element.children,
            _ => unreachable!("only documents and elements have children"),
        }
    }

    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.kind {
            NodeKind::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&DocumentData> {
        match &self.kind {
            NodeKind::Document(document) => Some(document),
            _ => None,
        }
    }

    pub(crate) fn as_document_mut(&mut self) -> Option<&mut DocumentData> {
        match &mut self.kind {
            NodeKind::Document(document) => Some(document),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextData> {
        match &self.kind {
            NodeKind::Text(text)
            | NodeKind::Whitespace(text)
            | NodeKind::CdataSection(text)
            | NodeKind::Comment(text) => Some(text),
            _ => None,
        }
    }
}

impl ElementData {
    /// Finds an attribute by its lowercase name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name.as_ref() == name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_flags_combine() {
        let mut flags = ParseFlags::default();
        assert!(flags.is_empty());

        flags.insert(ParseFlags::IMPLIED);
        flags.insert(ParseFlags::INSERTION_BY_PARSER);
        assert!(flags.contains(ParseFlags::IMPLIED));
        assert!(flags.contains(ParseFlags::INSERTION_BY_PARSER));
        assert!(!flags.contains(ParseFlags::FOSTER_PARENTED));
    }

    #[test]
    fn span_resolves_against_buffer() {
        let html = b"<p>Hello</p>";
        let span = Span::new(3, 5);
        assert_eq!(span.of(html), b"Hello");
        assert_eq!(span.end(), 8);
    }

    #[test]
    fn compat_mode_names() {
        let name: &str = (&CompatMode::LimitedQuirks).into();
        assert_eq!(name, "limited-quirks");
    }
}
