//! An HTML5 parser producing an immutable document tree.
//!
//! One call to [`parse`] (or [`parse_with_options`]) turns a UTF-8 byte
//! buffer into a rooted tree of [`Node`]s plus a list of recoverable
//! diagnostics. Parsing follows the HTML5 parsing algorithm: a preprocessed
//! input cursor feeds an ~80-state tokenizer, whose tokens drive the
//! insertion-mode tree constructor with its open-element stack, active
//! formatting elements, adoption agency algorithm, and foster parenting.
//!
//! The tree, every interned string, and the diagnostics are owned by the
//! returned [`Output`]; dropping it releases everything at once.

#![allow(non_camel_case_types)]

mod arena;
mod attributes;
mod char_ref;
mod cursor;
mod doctype;
mod errors;
mod foreign;
mod node;
mod tag_name;
mod token;
mod tokenizer;
mod tree_builder;

pub use arena::{NodeArena, NodeId};
pub use errors::{source_line, ErrorType, ParseError};
pub use node::{
    Attribute, AttributeNamespace, CompatMode, DocumentData, ElementData, Node, NodeKind,
    ParseFlags, ParsingNamespace, SourcePosition, Span, TextData,
};
pub use tag_name::TagName;
pub use token::TokenKind;
pub use tree_builder::InsertionMode;

use tree_builder::TreeBuilder;

/// Configuration for a parse.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Tab stop width used for column tracking when the input contains
    /// TAB characters.
    pub tab_stop: u32,

    /// Abandon the parse after the first recorded diagnostic. The partial
    /// tree built so far is still returned.
    pub stop_on_first_error: bool,

    /// Cap on recorded diagnostics; further diagnostics are dropped while
    /// parsing continues. `None` records everything.
    pub max_errors: Option<usize>,

    /// Serialization hint recorded on the output for consumers; neither
    /// tokenization nor tree construction consults it.
    pub use_xhtml_rules: bool,

    /// Reserved for fragment parsing, which this parser does not perform;
    /// a non-default value is recorded but has no effect.
    pub fragment_context: Option<TagName>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            tab_stop: 8,
            stop_on_first_error: false,
            max_errors: None,
            use_xhtml_rules: false,
            fragment_context: None,
        }
    }
}

/// Result of a parse: the document tree, the diagnostics, and the arena
/// that owns every node. Dropping the output releases all of it.
#[derive(Debug)]
pub struct Output {
    /// The original input, retained so `Span` fields stay resolvable for
    /// the lifetime of the tree.
    pub html: Box<[u8]>,

    pub arena: NodeArena,

    /// The document node; always present and always a `Document`.
    pub document: NodeId,

    /// The `<html>` element: the first element child of the document.
    pub root: Option<NodeId>,

    /// Diagnostics in source order, subject to `max_errors`.
    pub errors: Vec<ParseError>,

    /// Whether `stop_on_first_error` ended the parse before the input was
    /// exhausted.
    pub stopped_early: bool,

    /// Echo of [`ParseOptions::use_xhtml_rules`].
    pub use_xhtml_rules: bool,
}

impl Output {
    pub fn node(&self, id: NodeId) -> &Node {
        &self.arena[id]
    }

    pub fn document_data(&self) -> &DocumentData {
        self.arena[self.document]
            .as_document()
            .expect("the document node is a Document")
    }
}

/// Parses a UTF-8 HTML document with default options.
pub fn parse(html: &[u8]) -> Output {
    parse_with_options(&ParseOptions::default(), html)
}

/// Parses a UTF-8 HTML document.
///
/// Parsing always succeeds in the sense of producing a tree: malformed
/// input yields diagnostics on the output, never a failure.
pub fn parse_with_options(options: &ParseOptions, html: &[u8]) -> Output {
    let mut builder = TreeBuilder::new(options, html);
    let stopped_early = builder.run();
    builder.into_output(html, options, stopped_early)
}
