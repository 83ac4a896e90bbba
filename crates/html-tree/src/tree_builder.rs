mod active_formatting_elements;
mod insertion_mode;
mod stack_of_open_elements;

pub use insertion_mode::InsertionMode;

use crate::arena::{NodeArena, NodeId};
use crate::attributes::adjust_foreign_attributes;
use crate::doctype::indicated_compat_mode;
use crate::errors::{ErrorSink, ErrorType, ParseError};
use crate::foreign::{
    is_html_breakout_tag, is_html_integration_point, is_mathml_text_integration_point,
    svg_tag_case,
};
use crate::node::{
    CompatMode, DocumentData, ElementData, Node, NodeKind, ParseFlags, ParsingNamespace,
    SourcePosition, Span, TextData,
};
use crate::tag_name::TagName;
use crate::token::{Token, TokenData};
use crate::tokenizer::{Tokenizer, TokenizerState};
use crate::{Output, ParseOptions};

use active_formatting_elements::{tag_data_of, ActiveFormattingElements, FormattingEntry};
use stack_of_open_elements::{Scope, StackOfOpenElements};

/// Kind of text node a run of character tokens will become.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TextKind {
    Whitespace,
    Text,
    Cdata,
}

/// Pending run of character tokens, gathered into one text node.
#[derive(Debug)]
struct TextAccumulator {
    text: String,
    kind: TextKind,
    position: SourcePosition,
    start_offset: usize,
    end_offset: usize,
}

/// The tree constructor: drives the tokenizer, maintains the open-element
/// stack and the list of active formatting elements, and materializes the
/// document tree in the arena.
///
/// @see https://html.spec.whatwg.org/#tree-construction
pub(crate) struct TreeBuilder<'a> {
    tokenizer: Tokenizer<'a>,
    arena: NodeArena,
    document: NodeId,
    html_element: Option<NodeId>,

    insertion_mode: InsertionMode,

    /// Mode to return to after a `TEXT` or `IN_TABLE_TEXT` excursion.
    original_insertion_mode: InsertionMode,

    open_elements: StackOfOpenElements,
    active_formatting_elements: ActiveFormattingElements,

    head_element: Option<NodeId>,
    form_element: Option<NodeId>,

    /// Never enabled here: the parser does not execute script, so
    /// `<noscript>` content is parsed as markup.
    scripting_enabled: bool,

    frameset_ok: bool,
    foster_parenting: bool,

    /// Drops the newline immediately following `<pre>`, `<listing>`, and
    /// `<textarea>`.
    ignore_next_linefeed: bool,

    pending_table_character_tokens: Vec<Token>,

    text: Option<TextAccumulator>,

    /// Position of the token currently being processed, for implicit
    /// end-tag accounting.
    current_position: SourcePosition,

    self_closing_acknowledged: bool,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(options: &ParseOptions, html: &'a [u8]) -> Self {
        let errors = ErrorSink::new(options.max_errors, options.stop_on_first_error);
        let tokenizer = Tokenizer::new(html, options.tab_stop, errors);

        let mut arena = NodeArena::new();
        let document = arena.insert(Node {
            parent: None,
            index_within_parent: 0,
            kind: NodeKind::Document(DocumentData::default()),
        });

        Self {
            tokenizer,
            arena,
            document,
            html_element: None,
            insertion_mode: InsertionMode::INITIAL,
            original_insertion_mode: InsertionMode::INITIAL,
            open_elements: StackOfOpenElements::new(),
            active_formatting_elements: ActiveFormattingElements::new(),
            head_element: None,
            form_element: None,
            scripting_enabled: false,
            frameset_ok: true,
            foster_parenting: false,
            ignore_next_linefeed: false,
            pending_table_character_tokens: Vec::new(),
            text: None,
            current_position: SourcePosition::default(),
            self_closing_acknowledged: false,
        }
    }

    /// Runs the parse to completion.
    pub fn run(&mut self) -> bool {
        loop {
            let foreign = self.adjusted_current_node_is_foreign();
            self.tokenizer.set_foreign_content(foreign);

            let token = self.tokenizer.next_token();
            if self.tokenizer.errors.stopped {
                self.finish_parse();
                return true;
            }

            let is_eof = matches!(token.data, TokenData::Eof);
            self.process_token(&token);

            if self.tokenizer.errors.stopped {
                self.finish_parse();
                return true;
            }
            if is_eof {
                self.finish_parse();
                return false;
            }
        }
    }

    pub fn into_output(self, html: &[u8], options: &ParseOptions, stopped_early: bool) -> Output {
        let root = self.arena[self.document]
            .as_document()
            .expect("document node")
            .children
            .iter()
            .copied()
            .find(|&child| self.arena[child].as_element().is_some());

        Output {
            html: html.into(),
            arena: self.arena,
            document: self.document,
            root,
            errors: self.tokenizer.errors.into_errors(),
            stopped_early,
            use_xhtml_rules: options.use_xhtml_rules,
        }
    }

    // ------------------------------------------------------------------
    // Token processing
    // ------------------------------------------------------------------

    fn process_token(&mut self, token: &Token) {
        self.current_position = token.position;

        if self.ignore_next_linefeed {
            self.ignore_next_linefeed = false;
            if matches!(token.data, TokenData::Whitespace('\n')) {
                return;
            }
        }

        let expects_acknowledgment =
            matches!(&token.data, TokenData::StartTag(tag) if tag.self_closing);
        self.self_closing_acknowledged = false;

        // Character runs accumulate; anything else completes the run.
        if !matches!(
            token.data,
            TokenData::Character(_)
                | TokenData::Whitespace(_)
                | TokenData::NullCharacter
                | TokenData::CdataCharacter(_)
        ) && self.insertion_mode != InsertionMode::IN_TABLE_TEXT
        {
            self.flush_text();
        }

        self.dispatch(token);

        if expects_acknowledgment && !self.self_closing_acknowledged {
            self.tokenizer.errors.record(ParseError {
                position: token.position,
                original_text: token.original_text,
                error: ErrorType::UnacknowledgedSelfClosingTag,
            });
        }
    }

    /// The tree construction dispatcher: routes the token either to the
    /// current insertion mode or to the rules for foreign content.
    ///
    /// @see https://html.spec.whatwg.org/#tree-construction-dispatcher
    fn dispatch(&mut self, token: &Token) {
        let use_current_mode = match self.open_elements.current_node() {
            None => true,
            Some(current) => {
                let element = self.arena[current].as_element().expect("stack of elements");
                let namespace = element.namespace;
                let tag = element.tag.clone();
                let is_start_tag = matches!(token.data, TokenData::StartTag(_));
                let is_character = matches!(
                    token.data,
                    TokenData::Character(_)
                        | TokenData::Whitespace(_)
                        | TokenData::NullCharacter
                );

                namespace == ParsingNamespace::Html
                    || (is_mathml_text_integration_point(&tag, namespace)
                        && ((is_start_tag
                            && !matches!(
                                &token.data,
                                TokenData::StartTag(t)
                                    if matches!(t.tag, TagName::MGLYPH | TagName::MALIGNMARK)
                            ))
                            || is_character))
                    || (namespace == ParsingNamespace::MathML
                        && tag == TagName::ANNOTATION_XML
                        && matches!(
                            &token.data,
                            TokenData::StartTag(t) if t.tag == TagName::SVG
                        ))
                    || (is_html_integration_point(
                        &tag,
                        namespace,
                        &self.arena[current].as_element().expect("element").attributes,
                    ) && (is_start_tag || is_character))
                    || matches!(token.data, TokenData::Eof)
            }
        };

        if use_current_mode {
            self.step(token);
        } else {
            self.step_in_foreign_content(token);
        }
    }

    fn step(&mut self, token: &Token) {
        match self.insertion_mode {
            InsertionMode::INITIAL => self.step_initial(token),
            InsertionMode::BEFORE_HTML => self.step_before_html(token),
            InsertionMode::BEFORE_HEAD => self.step_before_head(token),
            InsertionMode::IN_HEAD => self.step_in_head(token),
            InsertionMode::IN_HEAD_NOSCRIPT => self.step_in_head_noscript(token),
            InsertionMode::AFTER_HEAD => self.step_after_head(token),
            InsertionMode::IN_BODY => self.step_in_body(token),
            InsertionMode::TEXT => self.step_text(token),
            InsertionMode::IN_TABLE => self.step_in_table(token),
            InsertionMode::IN_TABLE_TEXT => self.step_in_table_text(token),
            InsertionMode::IN_CAPTION => self.step_in_caption(token),
            InsertionMode::IN_COLUMN_GROUP => self.step_in_column_group(token),
            InsertionMode::IN_TABLE_BODY => self.step_in_table_body(token),
            InsertionMode::IN_ROW => self.step_in_row(token),
            InsertionMode::IN_CELL => self.step_in_cell(token),
            InsertionMode::IN_SELECT => self.step_in_select(token),
            InsertionMode::IN_SELECT_IN_TABLE => self.step_in_select_in_table(token),
            InsertionMode::AFTER_BODY => self.step_after_body(token),
            InsertionMode::IN_FRAMESET => self.step_in_frameset(token),
            InsertionMode::AFTER_FRAMESET => self.step_after_frameset(token),
            InsertionMode::AFTER_AFTER_BODY => self.step_after_after_body(token),
            InsertionMode::AFTER_AFTER_FRAMESET => self.step_after_after_frameset(token),
        }
    }

    // ------------------------------------------------------------------
    // Node plumbing
    // ------------------------------------------------------------------

    fn append_node(&mut self, parent: NodeId, child: NodeId, before: Option<usize>) {
        match before {
            None => {
                let index = self.arena[parent].children().len();
                self.arena[parent].children_mut().push(child);
                let node = &mut self.arena[child];
                node.parent = Some(parent);
                node.index_within_parent = index;
            }
            Some(index) => {
                self.arena[parent].children_mut().insert(index, child);
                self.reindex_children(parent, index);
                self.arena[child].parent = Some(parent);
            }
        }
    }

    fn detach_node(&mut self, node: NodeId) {
        if let Some(parent) = self.arena[node].parent {
            let index = self.arena[node].index_within_parent;
            self.arena[parent].children_mut().remove(index);
            self.reindex_children(parent, index);
            let node = &mut self.arena[node];
            node.parent = None;
            node.index_within_parent = 0;
        }
    }

    fn reindex_children(&mut self, parent: NodeId, from: usize) {
        let children: Vec<NodeId> = self.arena[parent].children()[from..].to_vec();
        for (offset, child) in children.into_iter().enumerate() {
            self.arena[child].index_within_parent = from + offset;
        }
    }

    /// The appropriate place for inserting a node: the current node, or a
    /// foster-parenting location around the deepest table.
    ///
    /// @see https://html.spec.whatwg.org/#appropriate-place-for-inserting-a-node
    fn appropriate_insertion_place(&self, override_target: Option<NodeId>) -> (NodeId, Option<usize>) {
        let target = override_target
            .or_else(|| self.open_elements.current_node())
            .unwrap_or(self.document);

        if self.foster_parenting {
            let target_is_table_like = self.arena[target].as_element().map_or(false, |element| {
                element.namespace == ParsingNamespace::Html
                    && matches!(
                        element.tag,
                        TagName::TABLE
                            | TagName::TBODY
                            | TagName::TFOOT
                            | TagName::THEAD
                            | TagName::TR
                    )
            });

            if target_is_table_like {
                if let Some(table) = self
                    .open_elements
                    .topmost_with_tag(&self.arena, &TagName::TABLE)
                {
                    if let Some(table_parent) = self.arena[table].parent {
                        // > …insert immediately before last table.
                        return (table_parent, Some(self.arena[table].index_within_parent));
                    }
                    // > …insert inside previous element, after its last child.
                    let table_index = self
                        .open_elements
                        .index_of(table)
                        .expect("table is open");
                    return (self.open_elements.stack[table_index - 1], None);
                }
            }
        }

        (target, None)
    }

    /// Creates (but does not insert) an element node for a start-tag token.
    fn create_element_for_token(
        &mut self,
        token: &Token,
        namespace: ParsingNamespace,
        extra_flags: ParseFlags,
    ) -> NodeId {
        let tag_data = tag_data_of(token);
        let mut attributes = tag_data.attributes.clone();
        adjust_foreign_attributes(&mut attributes, namespace);

        let mut tag = tag_data.tag.clone();
        if namespace == ParsingNamespace::Svg {
            // Unknown SVG names regain their camelCase form.
            if let TagName::Arbitrary(name) = &tag {
                if let Some(corrected) = svg_tag_case(name) {
                    tag = TagName::Arbitrary(corrected.into());
                }
            }
        }

        let mut parse_flags = extra_flags;
        if self.foster_parenting {
            parse_flags.insert(ParseFlags::FOSTER_PARENTED);
        }

        self.arena.insert(Node {
            parent: None,
            index_within_parent: 0,
            kind: NodeKind::Element(ElementData {
                tag,
                namespace,
                attributes,
                children: Vec::new(),
                original_tag: token.original_text,
                original_end_tag: Span::new(token.original_text.end(), 0),
                start_position: token.position,
                end_position: token.position,
                parse_flags,
            }),
        })
    }

    /// Inserts an element for a token at the appropriate place and pushes
    /// it onto the stack of open elements.
    fn insert_element(
        &mut self,
        token: &Token,
        namespace: ParsingNamespace,
        extra_flags: ParseFlags,
    ) -> NodeId {
        self.flush_text();
        let element = self.create_element_for_token(token, namespace, extra_flags);
        let (parent, before) = self.appropriate_insertion_place(None);
        self.append_node(parent, element, before);
        self.open_elements.push(element);
        element
    }

    /// Inserts an element the parser invented, with no corresponding
    /// source tag.
    fn insert_phantom_element(&mut self, tag: TagName) -> NodeId {
        self.flush_text();
        let position = self.current_position;
        let mut flags = ParseFlags::default();
        flags.insert(ParseFlags::INSERTION_BY_PARSER);
        flags.insert(ParseFlags::IMPLIED);

        let element = self.arena.insert(Node {
            parent: None,
            index_within_parent: 0,
            kind: NodeKind::Element(ElementData {
                tag,
                namespace: ParsingNamespace::Html,
                attributes: Vec::new(),
                children: Vec::new(),
                original_tag: Span::new(position.offset, 0),
                original_end_tag: Span::new(position.offset, 0),
                start_position: position,
                end_position: position,
                parse_flags: flags,
            }),
        });
        let (parent, before) = self.appropriate_insertion_place(None);
        self.append_node(parent, element, before);
        self.open_elements.push(element);
        element
    }

    /// Inserts a void-content element: on the stack only for the duration
    /// of the insertion, then immediately closed.
    fn insert_void_element(&mut self, token: &Token, extra_flags: ParseFlags) -> NodeId {
        let element = self.insert_element(token, ParsingNamespace::Html, extra_flags);
        self.open_elements.pop();
        self.acknowledge_self_closing();
        element
    }

    fn acknowledge_self_closing(&mut self) {
        self.self_closing_acknowledged = true;
    }

    /// Pops the current node to close it against a matching end tag.
    fn pop_with_end_tag(&mut self, token: &Token) -> Option<NodeId> {
        let popped = self.open_elements.pop()?;
        if let Some(element) = self.arena[popped].as_element_mut() {
            element.end_position = token.position;
            element.original_end_tag = token.original_text;
        }
        Some(popped)
    }

    /// Pops the current node without a matching end tag in the source.
    /// Void elements never expect one, so only the rest are flagged.
    fn pop_implicit(&mut self) -> Option<NodeId> {
        let position = self.current_position;
        let popped = self.open_elements.pop()?;
        if let Some(element) = self.arena[popped].as_element_mut() {
            element.end_position = position;
            element.original_end_tag = Span::new(position.offset, 0);
            if !is_void(&element.tag) {
                element.parse_flags.insert(ParseFlags::IMPLICIT_END_TAG);
            }
        }
        Some(popped)
    }

    /// Pops elements until an HTML element with the given tag has been
    /// popped; that element gets the end tag's source, the ones above it
    /// close implicitly.
    fn pop_until_tag(&mut self, tag: &TagName, token: Option<&Token>) {
        while let Some(current) = self.open_elements.current_node() {
            let matches = {
                let element = self.arena[current].as_element().expect("stack of elements");
                element.namespace == ParsingNamespace::Html && element.tag == *tag
            };
            if matches {
                match token {
                    Some(token) => self.pop_with_end_tag(token),
                    None => self.pop_implicit(),
                };
                return;
            }
            self.pop_implicit();
        }
    }

    fn pop_until_node(&mut self, node: NodeId, token: Option<&Token>) {
        while let Some(current) = self.open_elements.current_node() {
            if current == node {
                match token {
                    Some(token) => self.pop_with_end_tag(token),
                    None => self.pop_implicit(),
                };
                return;
            }
            self.pop_implicit();
        }
    }

    fn current_tag_is(&self, tag: &TagName) -> bool {
        self.open_elements.current_node().map_or(false, |current| {
            let element = self.arena[current].as_element().expect("stack of elements");
            element.namespace == ParsingNamespace::Html && element.tag == *tag
        })
    }

    fn current_tag(&self) -> Option<TagName> {
        self.open_elements.current_node().map(|current| {
            self.arena[current]
                .as_element()
                .expect("stack of elements")
                .tag
                .clone()
        })
    }

    // ------------------------------------------------------------------
    // Text accumulation
    // ------------------------------------------------------------------

    fn insert_character(&mut self, token: &Token) {
        let (c, kind) = match &token.data {
            TokenData::Whitespace(c) => (*c, TextKind::Whitespace),
            TokenData::Character(c) => (*c, TextKind::Text),
            TokenData::NullCharacter => ('\0', TextKind::Text),
            TokenData::CdataCharacter(c) => (*c, TextKind::Cdata),
            other => unreachable!("not a character token: {:?}", other),
        };

        let accumulator = self.text.get_or_insert_with(|| TextAccumulator {
            text: String::new(),
            kind: TextKind::Whitespace,
            position: token.position,
            start_offset: token.original_text.start,
            end_offset: token.original_text.start,
        });

        accumulator.text.push(c);
        accumulator.end_offset = token.original_text.end();
        match kind {
            TextKind::Whitespace => {}
            other => accumulator.kind = other,
        }
    }

    /// Completes the pending character run into a text node at the
    /// appropriate insertion place.
    fn flush_text(&mut self) {
        let Some(accumulator) = self.text.take() else {
            return;
        };

        let data = TextData {
            text: accumulator.text.into(),
            original_text: Span::new(
                accumulator.start_offset,
                accumulator.end_offset - accumulator.start_offset,
            ),
            start_position: accumulator.position,
        };
        let kind = match accumulator.kind {
            TextKind::Whitespace => NodeKind::Whitespace(data),
            TextKind::Text => NodeKind::Text(data),
            TextKind::Cdata => NodeKind::CdataSection(data),
        };

        let node = self.arena.insert(Node {
            parent: None,
            index_within_parent: 0,
            kind,
        });
        let (parent, before) = self.appropriate_insertion_place(None);
        self.append_node(parent, node, before);
    }

    fn insert_comment(&mut self, token: &Token, parent: Option<NodeId>) {
        self.flush_text();
        let text = match &token.data {
            TokenData::Comment(text) => text.clone(),
            other => unreachable!("not a comment token: {:?}", other),
        };
        let node = self.arena.insert(Node {
            parent: None,
            index_within_parent: 0,
            kind: NodeKind::Comment(TextData {
                text,
                original_text: token.original_text,
                start_position: token.position,
            }),
        });
        let (parent, before) = match parent {
            Some(parent) => (parent, None),
            None => self.appropriate_insertion_place(None),
        };
        self.append_node(parent, node, before);
    }

    // ------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------

    /// Records a tree-construction mismatch with a snapshot of where the
    /// parser stood.
    fn parse_error(&mut self, token: &Token) {
        let open_tags = self
            .open_elements
            .stack
            .iter()
            .map(|&id| {
                self.arena[id]
                    .as_element()
                    .expect("stack of elements")
                    .tag
                    .clone()
            })
            .collect();
        self.tokenizer.errors.record(ParseError {
            position: token.position,
            original_text: token.original_text,
            error: ErrorType::Parser {
                insertion_mode: self.insertion_mode,
                token_kind: token.kind(),
                open_tags,
            },
        });
    }

    // ------------------------------------------------------------------
    // Spec algorithms
    // ------------------------------------------------------------------

    /// @see https://html.spec.whatwg.org/#generate-implied-end-tags
    fn generate_implied_end_tags(&mut self, except: Option<&TagName>) {
        loop {
            let Some(tag) = self.current_tag() else { return };
            let closeable = matches!(
                tag,
                TagName::DD
                    | TagName::DT
                    | TagName::LI
                    | TagName::OPTGROUP
                    | TagName::OPTION
                    | TagName::P
                    | TagName::RB
                    | TagName::RP
                    | TagName::RT
                    | TagName::RTC
            );
            if !closeable || except == Some(&tag) {
                return;
            }
            self.pop_implicit();
        }
    }

    /// @see https://html.spec.whatwg.org/#generate-all-implied-end-tags-thoroughly
    fn generate_implied_end_tags_thoroughly(&mut self) {
        loop {
            let Some(tag) = self.current_tag() else { return };
            let closeable = matches!(
                tag,
                TagName::CAPTION
                    | TagName::COLGROUP
                    | TagName::DD
                    | TagName::DT
                    | TagName::LI
                    | TagName::OPTGROUP
                    | TagName::OPTION
                    | TagName::P
                    | TagName::RB
                    | TagName::RP
                    | TagName::RT
                    | TagName::RTC
                    | TagName::TBODY
                    | TagName::TD
                    | TagName::TFOOT
                    | TagName::TH
                    | TagName::THEAD
                    | TagName::TR
            );
            if !closeable {
                return;
            }
            self.pop_implicit();
        }
    }

    /// @see https://html.spec.whatwg.org/#close-a-p-element
    fn close_a_p_element(&mut self, token: &Token) {
        self.flush_text();
        self.generate_implied_end_tags(Some(&TagName::P));
        if !self.current_tag_is(&TagName::P) {
            self.parse_error(token);
        }
        self.pop_until_tag(&TagName::P, None);
    }

    fn close_p_if_in_button_scope(&mut self, token: &Token) {
        if self
            .open_elements
            .has_element_in_scope(&self.arena, &TagName::P, Scope::Button)
        {
            self.close_a_p_element(token);
        }
    }

    /// @see https://html.spec.whatwg.org/#reconstruct-the-active-formatting-elements
    fn reconstruct_active_formatting_elements(&mut self) {
        // > If there are no entries… there is nothing to reconstruct.
        if self.active_formatting_elements.entries.is_empty() {
            return;
        }

        // > If the last entry is a marker or an open element, do nothing.
        let last_index = self.active_formatting_elements.entries.len() - 1;
        match &self.active_formatting_elements.entries[last_index] {
            FormattingEntry::Marker => return,
            FormattingEntry::Element { node, .. } => {
                if self.open_elements.contains(*node) {
                    return;
                }
            }
        }

        // > Rewind: let entry be the last entry for which the element is
        // > neither a marker nor in the stack of open elements.
        let mut index = last_index;
        loop {
            if index == 0 {
                break;
            }
            let stop = match &self.active_formatting_elements.entries[index - 1] {
                FormattingEntry::Marker => true,
                FormattingEntry::Element { node, .. } => self.open_elements.contains(*node),
            };
            if stop {
                break;
            }
            index -= 1;
        }

        // > Advance: create an element for each remaining entry and
        // > replace the entry's element with the new one.
        while index < self.active_formatting_elements.entries.len() {
            let (old_node, token) = match &self.active_formatting_elements.entries[index] {
                FormattingEntry::Element { node, token } => (*node, token.clone()),
                FormattingEntry::Marker => unreachable!("rewind stops before markers"),
            };

            let mut flags = ParseFlags::default();
            flags.insert(ParseFlags::RECONSTRUCTED_FORMATTING_ELEMENT);
            let new_node = {
                self.flush_text();
                let element = self.create_element_for_token(&token, ParsingNamespace::Html, flags);
                let (parent, before) = self.appropriate_insertion_place(None);
                self.append_node(parent, element, before);
                self.open_elements.push(element);
                element
            };
            self.active_formatting_elements.replace_node(old_node, new_node);
            index += 1;
        }
    }

    /// @see https://html.spec.whatwg.org/#reset-the-insertion-mode-appropriately
    fn reset_insertion_mode_appropriately(&mut self) {
        for (depth, &node) in self.open_elements.stack.iter().enumerate().rev() {
            let last = depth == 0;
            let element = self.arena[node].as_element().expect("stack of elements");
            if element.namespace != ParsingNamespace::Html {
                continue;
            }

            match element.tag {
                TagName::SELECT => {
                    // > If node is a select element… let ancestor be node…
                    let mut mode = InsertionMode::IN_SELECT;
                    for &ancestor in self.open_elements.stack[..depth].iter().rev() {
                        let ancestor = self.arena[ancestor]
                            .as_element()
                            .expect("stack of elements");
                        if ancestor.namespace == ParsingNamespace::Html
                            && ancestor.tag == TagName::TABLE
                        {
                            mode = InsertionMode::IN_SELECT_IN_TABLE;
                            break;
                        }
                    }
                    self.insertion_mode = mode;
                    return;
                }
                TagName::TD | TagName::TH if !last => {
                    self.insertion_mode = InsertionMode::IN_CELL;
                    return;
                }
                TagName::TR => {
                    self.insertion_mode = InsertionMode::IN_ROW;
                    return;
                }
                TagName::TBODY | TagName::THEAD | TagName::TFOOT => {
                    self.insertion_mode = InsertionMode::IN_TABLE_BODY;
                    return;
                }
                TagName::CAPTION => {
                    self.insertion_mode = InsertionMode::IN_CAPTION;
                    return;
                }
                TagName::COLGROUP => {
                    self.insertion_mode = InsertionMode::IN_COLUMN_GROUP;
                    return;
                }
                TagName::TABLE => {
                    self.insertion_mode = InsertionMode::IN_TABLE;
                    return;
                }
                TagName::HEAD if !last => {
                    self.insertion_mode = InsertionMode::IN_HEAD;
                    return;
                }
                TagName::BODY => {
                    self.insertion_mode = InsertionMode::IN_BODY;
                    return;
                }
                TagName::FRAMESET => {
                    self.insertion_mode = InsertionMode::IN_FRAMESET;
                    return;
                }
                TagName::HTML => {
                    self.insertion_mode = if self.head_element.is_none() {
                        InsertionMode::BEFORE_HEAD
                    } else {
                        InsertionMode::AFTER_HEAD
                    };
                    return;
                }
                _ => {}
            }

            if last {
                self.insertion_mode = InsertionMode::IN_BODY;
                return;
            }
        }
        self.insertion_mode = InsertionMode::IN_BODY;
    }

    /// The adoption agency algorithm, which untangles mis-nested
    /// formatting elements.
    ///
    /// @see https://html.spec.whatwg.org/#adoption-agency-algorithm
    fn run_adoption_agency_algorithm(&mut self, token: &Token, subject: &TagName) {
        self.flush_text();

        /*
         * > If the current node is an HTML element whose tag name is
         * > subject, and the current node is not in the list of active
         * > formatting elements, then pop the current node off the stack
         * > of open elements and return.
         */
        if let Some(current) = self.open_elements.current_node() {
            if self.current_tag_is(subject) && !self.active_formatting_elements.contains(current)
            {
                self.pop_with_end_tag(token);
                return;
            }
        }

        let mut outer_loop_counter = 0;
        loop {
            // > If outer loop counter is greater than or equal to 8, return.
            if outer_loop_counter >= 8 {
                return;
            }
            outer_loop_counter += 1;

            /*
             * > Let formatting element be the last element in the list of
             * > active formatting elements that is between the end of the
             * > list and the last marker… and has the tag name subject.
             */
            let Some((formatting_index, formatting_element)) = self
                .active_formatting_elements
                .last_with_tag(&self.arena, subject)
            else {
                // > …act as described in the "any other end tag" entry.
                self.any_other_end_tag_in_body(token);
                return;
            };

            // > If formatting element is not in the stack of open elements…
            let Some(formatting_stack_index) = self.open_elements.index_of(formatting_element)
            else {
                self.parse_error(token);
                self.active_formatting_elements.entries.remove(formatting_index);
                return;
            };

            // > …but the element is not in scope…
            if !self
                .open_elements
                .has_node_in_scope(&self.arena, formatting_element, Scope::Default)
            {
                self.parse_error(token);
                return;
            }

            // > If formatting element is not the current node…
            if Some(formatting_element) != self.open_elements.current_node() {
                // (parse error; do not return)
                self.parse_error(token);
            }

            /*
             * > Let furthest block be the topmost node in the stack of open
             * > elements that is lower in the stack than formatting
             * > element, and is an element in the special category.
             */
            let furthest_block = self.open_elements.stack[formatting_stack_index + 1..]
                .iter()
                .copied()
                .find(|&candidate| {
                    let element = self.arena[candidate]
                        .as_element()
                        .expect("stack of elements");
                    is_special(&element.tag, element.namespace)
                });

            /*
             * > If there is no furthest block, then the UA must… pop all
             * > the nodes from the current node up to and including
             * > formatting element, then remove formatting element from
             * > the list of active formatting elements.
             */
            let Some(furthest_block) = furthest_block else {
                self.pop_until_node(formatting_element, Some(token));
                self.active_formatting_elements
                    .remove_node(formatting_element);
                return;
            };

            // > Let common ancestor be the element immediately above
            // > formatting element.
            let common_ancestor = self.open_elements.stack[formatting_stack_index - 1];

            // > Let a bookmark note the position of formatting element.
            let mut bookmark = formatting_index;

            /*
             * Inner loop. `node_stack_position` tracks where the node was
             * in the stack even after entries are removed.
             */
            let mut node_stack_position = self
                .open_elements
                .index_of(furthest_block)
                .expect("furthest block is open");
            let mut last_node = furthest_block;
            let mut inner_loop_counter = 0;

            loop {
                inner_loop_counter += 1;
                node_stack_position -= 1;
                let node = self.open_elements.stack[node_stack_position];

                // > If node is formatting element, then break.
                if node == formatting_element {
                    break;
                }

                /*
                 * > If inner loop counter is greater than 3 and node is in
                 * > the list of active formatting elements, then remove
                 * > node from the list…
                 */
                if inner_loop_counter > 3 && self.active_formatting_elements.contains(node) {
                    self.active_formatting_elements.remove_node(node);
                }

                // > If node is not in the list… remove node from the stack
                // > and continue.
                if !self.active_formatting_elements.contains(node) {
                    self.open_elements.remove(node);
                    continue;
                }

                /*
                 * > Create an element for the token for which the element
                 * > node was created… replace the entry for node in the
                 * > list… and in the stack… with the new element.
                 */
                let entry_index = self
                    .active_formatting_elements
                    .index_of(node)
                    .expect("node is in the list");
                let entry_token = self.active_formatting_elements.token_of(entry_index).clone();
                let mut flags = ParseFlags::default();
                flags.insert(ParseFlags::ADOPTION_AGENCY_CLONED);
                let clone = self.create_element_for_token(&entry_token, ParsingNamespace::Html, flags);

                self.active_formatting_elements.replace_node(node, clone);
                self.open_elements.replace(node, clone);

                /*
                 * > If last node is furthest block, then move the… bookmark
                 * > to be immediately after the new node in the list…
                 */
                if last_node == furthest_block {
                    bookmark = self
                        .active_formatting_elements
                        .index_of(clone)
                        .expect("clone was just inserted")
                        + 1;
                }

                // > Append last node to node (the new clone).
                self.detach_node(last_node);
                self.append_node(clone, last_node, None);

                last_node = clone;
            }

            /*
             * > Insert whatever last node ended up being… at the
             * > appropriate place for inserting a node, but using common
             * > ancestor as the override target.
             */
            self.detach_node(last_node);
            let (parent, before) = self.appropriate_insertion_place(Some(common_ancestor));
            self.append_node(parent, last_node, before);
            if let Some(element) = self.arena[last_node].as_element_mut() {
                element.parse_flags.insert(ParseFlags::ADOPTION_AGENCY_MOVED);
            }

            /*
             * > Create an element for the token for which formatting
             * > element was created… Take all of the child nodes of
             * > furthest block and append them to the new element. Append
             * > that new element to furthest block.
             */
            let formatting_token = self
                .active_formatting_elements
                .token_of(
                    self.active_formatting_elements
                        .index_of(formatting_element)
                        .expect("formatting element is listed"),
                )
                .clone();
            let mut flags = ParseFlags::default();
            flags.insert(ParseFlags::ADOPTION_AGENCY_CLONED);
            let new_element =
                self.create_element_for_token(&formatting_token, ParsingNamespace::Html, flags);

            let children = std::mem::take(self.arena[furthest_block].children_mut());
            for child in children {
                self.arena[child].parent = None;
                self.append_node(new_element, child, None);
            }
            self.append_node(furthest_block, new_element, None);

            /*
             * > Remove formatting element from the list of active
             * > formatting elements, and insert the new element into the
             * > list… at the position of the aforementioned bookmark.
             */
            let removed_index = self
                .active_formatting_elements
                .index_of(formatting_element)
                .expect("formatting element is listed");
            self.active_formatting_elements.entries.remove(removed_index);
            if removed_index < bookmark {
                bookmark -= 1;
            }
            self.active_formatting_elements.entries.insert(
                bookmark.min(self.active_formatting_elements.entries.len()),
                FormattingEntry::Element {
                    node: new_element,
                    token: formatting_token,
                },
            );

            /*
             * > Remove formatting element from the stack of open elements,
             * > and insert the new element… immediately below the position
             * > of furthest block.
             */
            self.open_elements.remove(formatting_element);
            if let Some(element) = self.arena[formatting_element].as_element_mut() {
                element.end_position = token.position;
                element.original_end_tag = token.original_text;
            }
            let furthest_block_index = self
                .open_elements
                .index_of(furthest_block)
                .expect("furthest block is open");
            self.open_elements
                .insert_at(furthest_block_index + 1, new_element);
        }
    }

    /// The in-body "any other end tag" walk.
    fn any_other_end_tag_in_body(&mut self, token: &Token) {
        let TokenData::EndTag(tag_data) = &token.data else {
            unreachable!("end-tag handling requires an end tag");
        };
        let subject = tag_data.tag.clone();

        for index in (0..self.open_elements.len()).rev() {
            let node = self.open_elements.stack[index];
            let (matches, special) = {
                let element = self.arena[node].as_element().expect("stack of elements");
                (
                    element.namespace == ParsingNamespace::Html && element.tag == subject,
                    is_special(&element.tag, element.namespace),
                )
            };

            if matches {
                self.flush_text();
                self.generate_implied_end_tags(Some(&subject));
                if Some(node) != self.open_elements.current_node() {
                    self.parse_error(token);
                }
                self.pop_until_node(node, Some(token));
                return;
            }

            if special {
                // > Parse error; ignore the token.
                self.parse_error(token);
                return;
            }
        }
    }

    /// @see https://html.spec.whatwg.org/#close-the-cell
    fn close_the_cell(&mut self, token: &Token) {
        self.flush_text();
        self.generate_implied_end_tags(None);
        if !self.current_tag_is(&TagName::TD) && !self.current_tag_is(&TagName::TH) {
            self.parse_error(token);
        }
        while let Some(current) = self.open_elements.current_node() {
            let is_cell = {
                let element = self.arena[current].as_element().expect("stack of elements");
                element.namespace == ParsingNamespace::Html
                    && matches!(element.tag, TagName::TD | TagName::TH)
            };
            self.pop_implicit();
            if is_cell {
                break;
            }
        }
        self.active_formatting_elements.clear_up_to_last_marker();
        self.insertion_mode = InsertionMode::IN_ROW;
    }

    /// @see https://html.spec.whatwg.org/#clear-the-stack-back-to-a-table-context
    fn clear_stack_to_table_context(&mut self) {
        while let Some(tag) = self.current_tag() {
            if matches!(tag, TagName::TABLE | TagName::HTML) {
                return;
            }
            self.pop_implicit();
        }
    }

    fn clear_stack_to_table_body_context(&mut self) {
        while let Some(tag) = self.current_tag() {
            if matches!(
                tag,
                TagName::TBODY | TagName::TFOOT | TagName::THEAD | TagName::HTML
            ) {
                return;
            }
            self.pop_implicit();
        }
    }

    fn clear_stack_to_table_row_context(&mut self) {
        while let Some(tag) = self.current_tag() {
            if matches!(tag, TagName::TR | TagName::HTML) {
                return;
            }
            self.pop_implicit();
        }
    }

    /// Switches the tokenizer for an element whose content is raw text or
    /// RCDATA, and enters the TEXT mode.
    ///
    /// @see https://html.spec.whatwg.org/#generic-raw-text-element-parsing-algorithm
    fn parse_generic_text(&mut self, token: &Token, state: TokenizerState) {
        let element = self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
        let name = self.arena[element]
            .as_element()
            .expect("just inserted")
            .tag
            .canonical_name()
            .to_owned();
        self.tokenizer.set_last_start_tag(&name);
        self.tokenizer.set_state(state);
        self.original_insertion_mode = self.insertion_mode;
        self.insertion_mode = InsertionMode::TEXT;
    }

    /// Copies attributes from a token onto an existing element, skipping
    /// names already present.
    fn merge_attributes_into(&mut self, token: &Token, element: NodeId) {
        let tag_data = tag_data_of(token);
        for attribute in &tag_data.attributes {
            let element_data = self.arena[element].as_element().expect("element");
            if element_data
                .attributes
                .iter()
                .any(|existing| existing.name == attribute.name)
            {
                continue;
            }
            self.arena[element]
                .as_element_mut()
                .expect("element")
                .attributes
                .push(attribute.clone());
        }
    }

    fn adjusted_current_node_is_foreign(&self) -> bool {
        self.open_elements.current_node().map_or(false, |current| {
            self.arena[current]
                .as_element()
                .expect("stack of elements")
                .namespace
                != ParsingNamespace::Html
        })
    }

    /// Pops whatever remains open at the end of the parse.
    fn finish_parse(&mut self) {
        self.flush_text();
        while self.open_elements.current_node().is_some() {
            self.pop_implicit();
        }
    }

    // ------------------------------------------------------------------
    // Insertion modes
    // ------------------------------------------------------------------

    /// @see https://html.spec.whatwg.org/#the-initial-insertion-mode
    fn step_initial(&mut self, token: &Token) {
        match &token.data {
            /*
             * > A character token that is one of U+0009 CHARACTER
             * > TABULATION, U+000A LINE FEED (LF), U+000C FORM FEED (FF),
             * > U+000D CARRIAGE RETURN (CR), or U+0020 SPACE
             *
             * Ignore the token.
             */
            TokenData::Whitespace(_) => {}

            TokenData::Comment(_) => self.insert_comment(token, Some(self.document)),

            TokenData::Doctype(doctype) => {
                let compat_mode = indicated_compat_mode(doctype);

                /*
                 * Anything beyond the plain `<!DOCTYPE html>` (with an
                 * optional about:legacy-compat system identifier) is a
                 * parse error, even when it still selects no-quirks mode.
                 */
                let normative = doctype.name.as_deref() == Some("html")
                    && doctype.public_identifier.is_none()
                    && match doctype.system_identifier.as_deref() {
                        None => true,
                        Some(system) => system == "about:legacy-compat",
                    };
                if !normative {
                    self.parse_error(token);
                }

                let document = self.arena[self.document]
                    .as_document_mut()
                    .expect("document node");
                document.has_doctype = true;
                document.name = doctype.name.clone().unwrap_or_default();
                document.public_identifier =
                    doctype.public_identifier.clone().unwrap_or_default();
                document.system_identifier =
                    doctype.system_identifier.clone().unwrap_or_default();
                document.compat_mode = compat_mode;

                // > Then, switch the insertion mode to "before html".
                self.insertion_mode = InsertionMode::BEFORE_HTML;
            }

            /*
             * > Anything else
             *
             * A document without a DOCTYPE renders in quirks mode but is
             * otherwise parsed normally; no diagnostic is recorded for the
             * missing declaration. Switch the insertion mode to "before
             * html" and reprocess the token.
             */
            _ => {
                self.arena[self.document]
                    .as_document_mut()
                    .expect("document node")
                    .compat_mode = CompatMode::Quirks;
                self.insertion_mode = InsertionMode::BEFORE_HTML;
                self.dispatch(token);
            }
        }
    }

    /// @see https://html.spec.whatwg.org/#the-before-html-insertion-mode
    fn step_before_html(&mut self, token: &Token) {
        match &token.data {
            // > A DOCTYPE token: parse error, ignore.
            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::Comment(_) => self.insert_comment(token, Some(self.document)),

            TokenData::Whitespace(_) => {}

            // > A start tag whose tag name is "html"
            TokenData::StartTag(tag) if tag.tag == TagName::HTML => {
                let element =
                    self.create_element_for_token(token, ParsingNamespace::Html, ParseFlags::default());
                self.append_node(self.document, element, None);
                self.open_elements.push(element);
                self.html_element = Some(element);
                self.insertion_mode = InsertionMode::BEFORE_HEAD;
            }

            // > Any other end tag that is not "head", "body", "html", "br":
            // > parse error, ignore.
            TokenData::EndTag(tag)
                if !matches!(
                    tag.tag,
                    TagName::HEAD | TagName::BODY | TagName::HTML | TagName::BR
                ) =>
            {
                self.parse_error(token)
            }

            /*
             * > Anything else: create an html element whose node document
             * > is the Document object. Append it to the Document object.
             * > Put this element in the stack of open elements… Switch the
             * > insertion mode to "before head", then reprocess the token.
             */
            _ => {
                let element = self.arena.insert(Node {
                    parent: None,
                    index_within_parent: 0,
                    kind: NodeKind::Element(ElementData {
                        tag: TagName::HTML,
                        namespace: ParsingNamespace::Html,
                        attributes: Vec::new(),
                        children: Vec::new(),
                        original_tag: Span::new(token.position.offset, 0),
                        original_end_tag: Span::new(token.position.offset, 0),
                        start_position: token.position,
                        end_position: token.position,
                        parse_flags: {
                            let mut flags = ParseFlags::default();
                            flags.insert(ParseFlags::INSERTION_BY_PARSER);
                            flags.insert(ParseFlags::IMPLIED);
                            flags
                        },
                    }),
                });
                self.append_node(self.document, element, None);
                self.open_elements.push(element);
                self.html_element = Some(element);
                self.insertion_mode = InsertionMode::BEFORE_HEAD;
                self.dispatch(token);
            }
        }
    }

    /// @see https://html.spec.whatwg.org/#the-before-head-insertion-mode
    fn step_before_head(&mut self, token: &Token) {
        match &token.data {
            TokenData::Whitespace(_) => {}

            TokenData::Comment(_) => self.insert_comment(token, None),

            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::StartTag(tag) if tag.tag == TagName::HTML => self.step_in_body(token),

            // > A start tag whose tag name is "head"
            TokenData::StartTag(tag) if tag.tag == TagName::HEAD => {
                let head = self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.head_element = Some(head);
                self.insertion_mode = InsertionMode::IN_HEAD;
            }

            TokenData::EndTag(tag)
                if !matches!(
                    tag.tag,
                    TagName::HEAD | TagName::BODY | TagName::HTML | TagName::BR
                ) =>
            {
                self.parse_error(token)
            }

            // > Anything else: insert an HTML element for a "head" start
            // > tag token with no attributes.
            _ => {
                let head = self.insert_phantom_element(TagName::HEAD);
                self.head_element = Some(head);
                self.insertion_mode = InsertionMode::IN_HEAD;
                self.dispatch(token);
            }
        }
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-inhead
    fn step_in_head(&mut self, token: &Token) {
        match &token.data {
            TokenData::Whitespace(_) => self.insert_character(token),

            TokenData::Comment(_) => self.insert_comment(token, None),

            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::StartTag(tag) => match tag.tag {
                TagName::HTML => self.step_in_body(token),

                // > A start tag whose tag name is one of: "base",
                // > "basefont", "bgsound", "link", "meta"
                TagName::BASE
                | TagName::BASEFONT
                | TagName::BGSOUND
                | TagName::LINK
                | TagName::META => {
                    self.insert_void_element(token, ParseFlags::default());
                }

                // > A start tag whose tag name is "title": follow the
                // > generic RCDATA element parsing algorithm.
                TagName::TITLE => self.parse_generic_text(token, TokenizerState::Rcdata),

                /*
                 * > A start tag whose tag name is "noscript", if the
                 * > scripting flag is enabled; a start tag whose tag name
                 * > is one of: "noframes", "style"
                 */
                TagName::NOFRAMES | TagName::STYLE => {
                    self.parse_generic_text(token, TokenizerState::Rawtext)
                }
                TagName::NOSCRIPT if self.scripting_enabled => {
                    self.parse_generic_text(token, TokenizerState::Rawtext)
                }

                // > A start tag whose tag name is "noscript", if the
                // > scripting flag is disabled
                TagName::NOSCRIPT => {
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                    self.insertion_mode = InsertionMode::IN_HEAD_NOSCRIPT;
                }

                TagName::SCRIPT => self.parse_generic_text(token, TokenizerState::ScriptData),

                // > A start tag whose tag name is "head": parse error,
                // > ignore.
                TagName::HEAD => self.parse_error(token),

                _ => self.in_head_anything_else(token),
            },

            TokenData::EndTag(tag) => match tag.tag {
                // > An end tag whose tag name is "head"
                TagName::HEAD => {
                    self.pop_with_end_tag(token);
                    self.insertion_mode = InsertionMode::AFTER_HEAD;
                }

                // > An end tag whose tag name is one of: "body", "html", "br"
                TagName::BODY | TagName::HTML | TagName::BR => {
                    self.in_head_anything_else(token)
                }

                // > Any other end tag: parse error, ignore.
                _ => self.parse_error(token),
            },

            _ => self.in_head_anything_else(token),
        }
    }

    /// > Pop the current node (which will be the head element) off the
    /// > stack of open elements. Switch the insertion mode to "after
    /// > head". Reprocess the token.
    fn in_head_anything_else(&mut self, token: &Token) {
        self.pop_implicit();
        self.insertion_mode = InsertionMode::AFTER_HEAD;
        self.dispatch(token);
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-inheadnoscript
    fn step_in_head_noscript(&mut self, token: &Token) {
        match &token.data {
            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::StartTag(tag) if tag.tag == TagName::HTML => self.step_in_body(token),

            // > An end tag whose tag name is "noscript"
            TokenData::EndTag(tag) if tag.tag == TagName::NOSCRIPT => {
                self.pop_with_end_tag(token);
                self.insertion_mode = InsertionMode::IN_HEAD;
            }

            /*
             * > A character token that is whitespace…, a comment token, or
             * > a start tag whose tag name is one of: "basefont",
             * > "bgsound", "link", "meta", "noframes", "style"
             *
             * Process using the rules for the "in head" insertion mode.
             */
            TokenData::Whitespace(_) | TokenData::Comment(_) => self.step_in_head(token),
            TokenData::StartTag(tag)
                if matches!(
                    tag.tag,
                    TagName::BASEFONT
                        | TagName::BGSOUND
                        | TagName::LINK
                        | TagName::META
                        | TagName::NOFRAMES
                        | TagName::STYLE
                ) =>
            {
                self.step_in_head(token)
            }

            // > A start tag whose tag name is one of: "head", "noscript";
            // > any other end tag: parse error, ignore.
            TokenData::StartTag(tag)
                if matches!(tag.tag, TagName::HEAD | TagName::NOSCRIPT) =>
            {
                self.parse_error(token)
            }
            TokenData::EndTag(tag) if tag.tag != TagName::BR => self.parse_error(token),

            /*
             * > Anything else: parse error. Pop the current node (which
             * > will be a noscript element)… switch… to "in head"…
             * > reprocess.
             */
            _ => {
                self.parse_error(token);
                self.pop_implicit();
                self.insertion_mode = InsertionMode::IN_HEAD;
                self.dispatch(token);
            }
        }
    }

    /// @see https://html.spec.whatwg.org/#the-after-head-insertion-mode
    fn step_after_head(&mut self, token: &Token) {
        match &token.data {
            TokenData::Whitespace(_) => self.insert_character(token),

            TokenData::Comment(_) => self.insert_comment(token, None),

            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::StartTag(tag) => match tag.tag {
                TagName::HTML => self.step_in_body(token),

                // > A start tag whose tag name is "body"
                TagName::BODY => {
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                    self.frameset_ok = false;
                    self.insertion_mode = InsertionMode::IN_BODY;
                }

                // > A start tag whose tag name is "frameset"
                TagName::FRAMESET => {
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                    self.insertion_mode = InsertionMode::IN_FRAMESET;
                }

                /*
                 * > A start tag whose tag name is one of: "base",
                 * > "basefont", "bgsound", "link", "meta", "noframes",
                 * > "script", "style", "title"
                 *
                 * > Parse error. Push the node pointed to by the head
                 * > element pointer onto the stack of open elements.
                 * > Process the token using the rules for the "in head"
                 * > insertion mode. Remove the node pointed to by the head
                 * > element pointer from the stack of open elements.
                 */
                TagName::BASE
                | TagName::BASEFONT
                | TagName::BGSOUND
                | TagName::LINK
                | TagName::META
                | TagName::NOFRAMES
                | TagName::SCRIPT
                | TagName::STYLE
                | TagName::TITLE => {
                    self.parse_error(token);
                    let head = self.head_element.expect("head was opened before after-head");
                    self.open_elements.push(head);
                    self.step_in_head(token);
                    self.open_elements.remove(head);
                }

                TagName::HEAD => self.parse_error(token),

                _ => self.after_head_anything_else(token),
            },

            TokenData::EndTag(tag) => match tag.tag {
                TagName::BODY | TagName::HTML | TagName::BR => {
                    self.after_head_anything_else(token)
                }
                _ => self.parse_error(token),
            },

            _ => self.after_head_anything_else(token),
        }
    }

    /// > Insert an HTML element for a "body" start tag token with no
    /// > attributes. Switch the insertion mode to "in body". Reprocess.
    fn after_head_anything_else(&mut self, token: &Token) {
        self.insert_phantom_element(TagName::BODY);
        self.insertion_mode = InsertionMode::IN_BODY;
        self.dispatch(token);
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-inbody
    fn step_in_body(&mut self, token: &Token) {
        match &token.data {
            // > A character token that is U+0000 NULL: parse error, ignore.
            TokenData::NullCharacter => self.parse_error(token),

            // > A character token that is whitespace
            TokenData::Whitespace(_) => {
                self.reconstruct_active_formatting_elements();
                self.insert_character(token);
            }

            // > Any other character token
            TokenData::Character(_) | TokenData::CdataCharacter(_) => {
                self.reconstruct_active_formatting_elements();
                self.insert_character(token);
                self.frameset_ok = false;
            }

            TokenData::Comment(_) => self.insert_comment(token, None),

            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::Eof => {
                /*
                 * > If the stack of open elements has a node that is not
                 * > either a dd, dt, li, optgroup, option, p, rb, rp, rt,
                 * > rtc, tbody, td, tfoot, th, thead, tr element, a body
                 * > element, or an html element, then this is a parse
                 * > error.
                 */
                if self.has_unclosed_body_content() {
                    self.parse_error(token);
                }
                // Stop parsing; the driver closes remaining elements.
            }

            TokenData::StartTag(tag) => self.step_in_body_start_tag(token, &tag.tag.clone()),
            TokenData::EndTag(tag) => self.step_in_body_end_tag(token, &tag.tag.clone()),
        }
    }

    fn has_unclosed_body_content(&self) -> bool {
        self.open_elements.stack.iter().any(|&node| {
            let element = self.arena[node].as_element().expect("stack of elements");
            element.namespace != ParsingNamespace::Html
                || !matches!(
                    element.tag,
                    TagName::DD
                        | TagName::DT
                        | TagName::LI
                        | TagName::OPTGROUP
                        | TagName::OPTION
                        | TagName::P
                        | TagName::RB
                        | TagName::RP
                        | TagName::RT
                        | TagName::RTC
                        | TagName::TBODY
                        | TagName::TD
                        | TagName::TFOOT
                        | TagName::TH
                        | TagName::THEAD
                        | TagName::TR
                        | TagName::BODY
                        | TagName::HTML
                )
        })
    }

    fn step_in_body_start_tag(&mut self, token: &Token, tag: &TagName) {
        match tag {
            /*
             * > A start tag whose tag name is "html": parse error… for
             * > each attribute, if the element does not already have one
             * > with that name, add it.
             */
            TagName::HTML => {
                self.parse_error(token);
                if let Some(html) = self.html_element {
                    self.merge_attributes_into(token, html);
                }
            }

            /*
             * > A start tag whose tag name is one of: "base", "basefont",
             * > "bgsound", "link", "meta", "noframes", "script", "style",
             * > "title": process using the rules for "in head".
             */
            TagName::BASE
            | TagName::BASEFONT
            | TagName::BGSOUND
            | TagName::LINK
            | TagName::META
            | TagName::NOFRAMES
            | TagName::SCRIPT
            | TagName::STYLE
            | TagName::TITLE => self.step_in_head(token),

            /*
             * > A start tag whose tag name is "body": parse error. If the
             * > second element on the stack of open elements is not a body
             * > element… ignore. Otherwise, set the frameset-ok flag to
             * > "not ok"; then, for each attribute… add the attribute.
             */
            TagName::BODY => {
                self.parse_error(token);
                if let Some(&body) = self.open_elements.stack.get(1) {
                    let is_body = self.arena[body]
                        .as_element()
                        .map_or(false, |element| element.tag == TagName::BODY);
                    if is_body {
                        self.frameset_ok = false;
                        self.merge_attributes_into(token, body);
                    }
                }
            }

            /*
             * > A start tag whose tag name is "frameset": parse error.
             * > If the second element… is not a body element… ignore.
             * > If the frameset-ok flag is set to "not ok", ignore.
             * > Otherwise: remove the second element… from its parent…
             * > pop all the nodes from the bottom… down to the root html
             * > element… insert… switch to "in frameset".
             */
            TagName::FRAMESET => {
                self.parse_error(token);
                let body = self.open_elements.stack.get(1).copied();
                let body_ok = body.map_or(false, |body| {
                    self.arena[body]
                        .as_element()
                        .map_or(false, |element| element.tag == TagName::BODY)
                });
                if body_ok && self.frameset_ok {
                    let body = body.expect("checked above");
                    self.flush_text();
                    self.detach_node(body);
                    while self.open_elements.len() > 1 {
                        self.pop_implicit();
                    }
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                    self.insertion_mode = InsertionMode::IN_FRAMESET;
                }
            }

            /*
             * > A start tag whose tag name is one of: "address",
             * > "article", "aside", "blockquote", "center", "details",
             * > "dialog", "dir", "div", "dl", "fieldset", "figcaption",
             * > "figure", "footer", "header", "hgroup", "main", "menu",
             * > "nav", "ol", "p", "section", "summary", "ul"
             */
            TagName::ADDRESS
            | TagName::ARTICLE
            | TagName::ASIDE
            | TagName::BLOCKQUOTE
            | TagName::CENTER
            | TagName::DETAILS
            | TagName::DIALOG
            | TagName::DIR
            | TagName::DIV
            | TagName::DL
            | TagName::FIELDSET
            | TagName::FIGCAPTION
            | TagName::FIGURE
            | TagName::FOOTER
            | TagName::HEADER
            | TagName::HGROUP
            | TagName::MAIN
            | TagName::MENU
            | TagName::NAV
            | TagName::OL
            | TagName::P
            | TagName::SECTION
            | TagName::SUMMARY
            | TagName::UL => {
                self.close_p_if_in_button_scope(token);
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
            }

            /*
             * > A start tag whose tag name is one of: "h1"–"h6": …if the
             * > current node is an HTML element whose tag name is one of
             * > "h1"–"h6", then this is a parse error; pop the current
             * > node off the stack of open elements.
             */
            TagName::H1 | TagName::H2 | TagName::H3 | TagName::H4 | TagName::H5 | TagName::H6 => {
                self.close_p_if_in_button_scope(token);
                if self.current_tag().map_or(false, |tag| tag.is_heading()) {
                    self.parse_error(token);
                    self.pop_implicit();
                }
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
            }

            /*
             * > A start tag whose tag name is one of: "pre", "listing":
             * > …if the next token is a LINE FEED… ignore that token…
             * > set the frameset-ok flag to "not ok".
             */
            TagName::PRE | TagName::LISTING => {
                self.close_p_if_in_button_scope(token);
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.ignore_next_linefeed = true;
                self.frameset_ok = false;
            }

            /*
             * > A start tag whose tag name is "form": if the form element
             * > pointer is not null… parse error, ignore.
             */
            TagName::FORM => {
                if self.form_element.is_some() {
                    self.parse_error(token);
                } else {
                    self.close_p_if_in_button_scope(token);
                    let form =
                        self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                    self.form_element = Some(form);
                }
            }

            // > A start tag whose tag name is "li"
            TagName::LI => {
                self.frameset_ok = false;
                self.list_item_start_tag(token, &[TagName::LI]);
                self.close_p_if_in_button_scope(token);
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
            }

            // > A start tag whose tag name is one of: "dd", "dt"
            TagName::DD | TagName::DT => {
                self.frameset_ok = false;
                self.list_item_start_tag(token, &[TagName::DD, TagName::DT]);
                self.close_p_if_in_button_scope(token);
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
            }

            // > A start tag whose tag name is "plaintext"
            TagName::PLAINTEXT => {
                self.close_p_if_in_button_scope(token);
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.tokenizer.set_state(TokenizerState::Plaintext);
            }

            /*
             * > A start tag whose tag name is "button": if the stack of
             * > open elements has a button element in scope… parse error;
             * > generate implied end tags; pop… until a button element has
             * > been popped.
             */
            TagName::BUTTON => {
                if self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::BUTTON, Scope::Default)
                {
                    self.parse_error(token);
                    self.flush_text();
                    self.generate_implied_end_tags(None);
                    self.pop_until_tag(&TagName::BUTTON, None);
                }
                self.reconstruct_active_formatting_elements();
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.frameset_ok = false;
            }

            /*
             * > A start tag whose tag name is "a": if the list of active
             * > formatting elements contains an a element between the end
             * > of the list and the last marker… parse error; run the
             * > adoption agency algorithm… then remove that element…
             */
            TagName::A => {
                if let Some((_, existing)) = self
                    .active_formatting_elements
                    .last_with_tag(&self.arena, &TagName::A)
                {
                    self.parse_error(token);
                    self.run_adoption_agency_algorithm(token, &TagName::A);
                    self.active_formatting_elements.remove_node(existing);
                    self.open_elements.remove(existing);
                }
                self.reconstruct_active_formatting_elements();
                let element =
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.active_formatting_elements
                    .push(&self.arena, element, token.clone());
            }

            /*
             * > A start tag whose tag name is one of: "b", "big", "code",
             * > "em", "font", "i", "s", "small", "strike", "strong",
             * > "tt", "u"
             */
            TagName::B
            | TagName::BIG
            | TagName::CODE
            | TagName::EM
            | TagName::FONT
            | TagName::I
            | TagName::S
            | TagName::SMALL
            | TagName::STRIKE
            | TagName::STRONG
            | TagName::TT
            | TagName::U => {
                self.reconstruct_active_formatting_elements();
                let element =
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.active_formatting_elements
                    .push(&self.arena, element, token.clone());
            }

            /*
             * > A start tag whose tag name is "nobr": …if the stack of
             * > open elements has a nobr element in scope, then this is a
             * > parse error; run the adoption agency algorithm… then once
             * > again reconstruct…
             */
            TagName::NOBR => {
                self.reconstruct_active_formatting_elements();
                if self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::NOBR, Scope::Default)
                {
                    self.parse_error(token);
                    self.run_adoption_agency_algorithm(token, &TagName::NOBR);
                    self.reconstruct_active_formatting_elements();
                }
                let element =
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.active_formatting_elements
                    .push(&self.arena, element, token.clone());
            }

            /*
             * > A start tag whose tag name is one of: "applet",
             * > "marquee", "object": insert… insert a marker at the end of
             * > the list of active formatting elements…
             */
            TagName::APPLET | TagName::MARQUEE | TagName::OBJECT => {
                self.reconstruct_active_formatting_elements();
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.active_formatting_elements.insert_marker();
                self.frameset_ok = false;
            }

            /*
             * > A start tag whose tag name is "table": if the Document is
             * > not set to quirks mode, and the stack of open elements has
             * > a p element in button scope, then close a p element.
             */
            TagName::TABLE => {
                let quirks = self.arena[self.document]
                    .as_document()
                    .expect("document node")
                    .compat_mode
                    == CompatMode::Quirks;
                if !quirks {
                    self.close_p_if_in_button_scope(token);
                }
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.frameset_ok = false;
                self.insertion_mode = InsertionMode::IN_TABLE;
            }

            /*
             * > A start tag whose tag name is one of: "area", "br",
             * > "embed", "img", "keygen", "wbr"
             */
            TagName::AREA
            | TagName::BR
            | TagName::EMBED
            | TagName::IMG
            | TagName::KEYGEN
            | TagName::WBR => {
                self.reconstruct_active_formatting_elements();
                self.insert_void_element(token, ParseFlags::default());
                self.frameset_ok = false;
            }

            /*
             * > A start tag whose tag name is "input": …if the token does
             * > not have an attribute with the name "type", or if it does,
             * > but that attribute's value is not an ASCII
             * > case-insensitive match for the string "hidden", then: set
             * > the frameset-ok flag to "not ok".
             */
            TagName::INPUT => {
                self.reconstruct_active_formatting_elements();
                self.insert_void_element(token, ParseFlags::default());
                let hidden = tag_data_of(token).attributes.iter().any(|attribute| {
                    attribute.name.as_ref() == "type"
                        && attribute.value.eq_ignore_ascii_case("hidden")
                });
                if !hidden {
                    self.frameset_ok = false;
                }
            }

            // > A start tag whose tag name is one of: "param", "source",
            // > "track"
            TagName::PARAM | TagName::SOURCE | TagName::TRACK => {
                self.insert_void_element(token, ParseFlags::default());
            }

            // > A start tag whose tag name is "hr"
            TagName::HR => {
                self.close_p_if_in_button_scope(token);
                self.insert_void_element(token, ParseFlags::default());
                self.frameset_ok = false;
            }

            /*
             * > A start tag whose tag name is "image": parse error.
             * > Change the token's tag name to "img" and reprocess it.
             * > (Don't ask.)
             */
            TagName::IMAGE => {
                self.parse_error(token);
                let mut retagged = token.clone();
                if let TokenData::StartTag(tag) = &mut retagged.data {
                    tag.tag = TagName::IMG;
                }
                self.reconstruct_active_formatting_elements();
                let mut flags = ParseFlags::default();
                flags.insert(ParseFlags::FROM_IMAGE);
                self.insert_element(&retagged, ParsingNamespace::Html, flags);
                self.open_elements.pop();
                self.acknowledge_self_closing();
                self.frameset_ok = false;
            }

            /*
             * > A start tag whose tag name is "textarea": …switch the
             * > tokenizer to the RCDATA state… if the next token is a LINE
             * > FEED… ignore that token…
             */
            TagName::TEXTAREA => {
                self.parse_generic_text(token, TokenizerState::Rcdata);
                self.ignore_next_linefeed = true;
                self.frameset_ok = false;
            }

            // > A start tag whose tag name is "xmp"
            TagName::XMP => {
                self.close_p_if_in_button_scope(token);
                self.reconstruct_active_formatting_elements();
                self.frameset_ok = false;
                self.parse_generic_text(token, TokenizerState::Rawtext);
            }

            // > A start tag whose tag name is "iframe"
            TagName::IFRAME => {
                self.frameset_ok = false;
                self.parse_generic_text(token, TokenizerState::Rawtext);
            }

            // > A start tag whose tag name is "noembed" (and "noscript"
            // > with scripting enabled)
            TagName::NOEMBED => self.parse_generic_text(token, TokenizerState::Rawtext),
            TagName::NOSCRIPT if self.scripting_enabled => {
                self.parse_generic_text(token, TokenizerState::Rawtext)
            }

            // > A start tag whose tag name is "select"
            TagName::SELECT => {
                self.reconstruct_active_formatting_elements();
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.frameset_ok = false;
                self.insertion_mode = match self.insertion_mode {
                    InsertionMode::IN_TABLE
                    | InsertionMode::IN_CAPTION
                    | InsertionMode::IN_TABLE_BODY
                    | InsertionMode::IN_ROW
                    | InsertionMode::IN_CELL => InsertionMode::IN_SELECT_IN_TABLE,
                    _ => InsertionMode::IN_SELECT,
                };
            }

            // > A start tag whose tag name is one of: "optgroup", "option"
            TagName::OPTGROUP | TagName::OPTION => {
                if self.current_tag_is(&TagName::OPTION) {
                    self.pop_implicit();
                }
                self.reconstruct_active_formatting_elements();
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
            }

            // > A start tag whose tag name is one of: "rb", "rtc"
            TagName::RB | TagName::RTC => {
                if self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::RUBY, Scope::Default)
                {
                    self.flush_text();
                    self.generate_implied_end_tags(None);
                    if !self.current_tag_is(&TagName::RUBY) {
                        self.parse_error(token);
                    }
                }
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
            }

            // > A start tag whose tag name is one of: "rp", "rt"
            TagName::RP | TagName::RT => {
                if self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::RUBY, Scope::Default)
                {
                    self.flush_text();
                    self.generate_implied_end_tags(Some(&TagName::RTC));
                    if !self.current_tag_is(&TagName::RUBY) && !self.current_tag_is(&TagName::RTC)
                    {
                        self.parse_error(token);
                    }
                }
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
            }

            // > A start tag whose tag name is "math"
            TagName::MATH => {
                self.reconstruct_active_formatting_elements();
                self.insert_element(token, ParsingNamespace::MathML, ParseFlags::default());
                if tag_data_of(token).self_closing {
                    self.open_elements.pop();
                    self.acknowledge_self_closing();
                }
            }

            // > A start tag whose tag name is "svg"
            TagName::SVG => {
                self.reconstruct_active_formatting_elements();
                self.insert_element(token, ParsingNamespace::Svg, ParseFlags::default());
                if tag_data_of(token).self_closing {
                    self.open_elements.pop();
                    self.acknowledge_self_closing();
                }
            }

            /*
             * > A start tag whose tag name is one of: "caption", "col",
             * > "colgroup", "frame", "head", "tbody", "td", "tfoot",
             * > "th", "thead", "tr": parse error, ignore.
             */
            TagName::CAPTION
            | TagName::COL
            | TagName::COLGROUP
            | TagName::FRAME
            | TagName::HEAD
            | TagName::TBODY
            | TagName::TD
            | TagName::TFOOT
            | TagName::TH
            | TagName::THEAD
            | TagName::TR => self.parse_error(token),

            // > Any other start tag
            _ => {
                self.reconstruct_active_formatting_elements();
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
            }
        }
    }

    /// The shared stack walk for `li`, `dd`, and `dt` start tags.
    fn list_item_start_tag(&mut self, token: &Token, closeable: &[TagName]) {
        for index in (0..self.open_elements.len()).rev() {
            let node = self.open_elements.stack[index];
            let (tag, namespace) = {
                let element = self.arena[node].as_element().expect("stack of elements");
                (element.tag.clone(), element.namespace)
            };

            if namespace == ParsingNamespace::Html && closeable.contains(&tag) {
                self.flush_text();
                self.generate_implied_end_tags(Some(&tag));
                if !self.current_tag_is(&tag) {
                    self.parse_error(token);
                }
                self.pop_until_tag(&tag, None);
                return;
            }

            /*
             * > If node is in the special category, but is not an address,
             * > div, or p element, then jump to the step labeled done.
             */
            if is_special(&tag, namespace)
                && !(namespace == ParsingNamespace::Html
                    && matches!(tag, TagName::ADDRESS | TagName::DIV | TagName::P))
            {
                return;
            }
        }
    }

    fn step_in_body_end_tag(&mut self, token: &Token, tag: &TagName) {
        match tag {
            /*
             * > An end tag whose tag name is "body": if the stack of open
             * > elements does not have a body element in scope, this is a
             * > parse error; ignore the token.
             */
            TagName::BODY => {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::BODY, Scope::Default)
                {
                    self.parse_error(token);
                    return;
                }
                if self.has_unclosed_body_content() {
                    self.parse_error(token);
                }
                self.flush_text();
                if let Some(body) = self
                    .open_elements
                    .topmost_with_tag(&self.arena, &TagName::BODY)
                {
                    if let Some(element) = self.arena[body].as_element_mut() {
                        element.end_position = token.position;
                        element.original_end_tag = token.original_text;
                    }
                }
                self.insertion_mode = InsertionMode::AFTER_BODY;
            }

            // > An end tag whose tag name is "html": act as above, then
            // > reprocess.
            TagName::HTML => {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::BODY, Scope::Default)
                {
                    self.parse_error(token);
                    return;
                }
                if self.has_unclosed_body_content() {
                    self.parse_error(token);
                }
                self.insertion_mode = InsertionMode::AFTER_BODY;
                self.dispatch(token);
            }

            /*
             * > An end tag whose tag name is one of: "address",
             * > "article", "aside", "blockquote", "button", "center",
             * > "details", "dialog", "dir", "div", "dl", "fieldset",
             * > "figcaption", "figure", "footer", "header", "hgroup",
             * > "listing", "main", "menu", "nav", "ol", "pre", "section",
             * > "summary", "ul"
             */
            TagName::ADDRESS
            | TagName::ARTICLE
            | TagName::ASIDE
            | TagName::BLOCKQUOTE
            | TagName::BUTTON
            | TagName::CENTER
            | TagName::DETAILS
            | TagName::DIALOG
            | TagName::DIR
            | TagName::DIV
            | TagName::DL
            | TagName::FIELDSET
            | TagName::FIGCAPTION
            | TagName::FIGURE
            | TagName::FOOTER
            | TagName::HEADER
            | TagName::HGROUP
            | TagName::LISTING
            | TagName::MAIN
            | TagName::MENU
            | TagName::NAV
            | TagName::OL
            | TagName::PRE
            | TagName::SECTION
            | TagName::SUMMARY
            | TagName::UL => {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, tag, Scope::Default)
                {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.generate_implied_end_tags(None);
                if !self.current_tag_is(tag) {
                    self.parse_error(token);
                }
                self.pop_until_tag(tag, Some(token));
            }

            /*
             * > An end tag whose tag name is "form": let node be the
             * > element that the form element pointer is set to, and set
             * > the form element pointer to null…
             */
            TagName::FORM => {
                let node = self.form_element.take();
                let Some(node) = node else {
                    self.parse_error(token);
                    return;
                };
                if !self
                    .open_elements
                    .has_node_in_scope(&self.arena, node, Scope::Default)
                {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.generate_implied_end_tags(None);
                if Some(node) != self.open_elements.current_node() {
                    self.parse_error(token);
                }
                // > Remove node from the stack of open elements.
                self.open_elements.remove(node);
                if let Some(element) = self.arena[node].as_element_mut() {
                    element.end_position = token.position;
                    element.original_end_tag = token.original_text;
                }
            }

            /*
             * > An end tag whose tag name is "p": if the stack of open
             * > elements does not have a p element in button scope, then
             * > this is a parse error; insert an HTML element for a "p"
             * > start tag token with no attributes.
             */
            TagName::P => {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::P, Scope::Button)
                {
                    self.parse_error(token);
                    self.insert_phantom_element(TagName::P);
                }
                self.flush_text();
                self.generate_implied_end_tags(Some(&TagName::P));
                if !self.current_tag_is(&TagName::P) {
                    self.parse_error(token);
                }
                self.pop_until_tag(&TagName::P, Some(token));
            }

            // > An end tag whose tag name is "li"
            TagName::LI => {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::LI, Scope::ListItem)
                {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.generate_implied_end_tags(Some(&TagName::LI));
                if !self.current_tag_is(&TagName::LI) {
                    self.parse_error(token);
                }
                self.pop_until_tag(&TagName::LI, Some(token));
            }

            // > An end tag whose tag name is one of: "dd", "dt"
            TagName::DD | TagName::DT => {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, tag, Scope::Default)
                {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.generate_implied_end_tags(Some(tag));
                if !self.current_tag_is(tag) {
                    self.parse_error(token);
                }
                self.pop_until_tag(tag, Some(token));
            }

            // > An end tag whose tag name is one of: "h1"–"h6"
            TagName::H1 | TagName::H2 | TagName::H3 | TagName::H4 | TagName::H5 | TagName::H6 => {
                if !self.open_elements.has_heading_in_scope(&self.arena, Scope::Default) {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.generate_implied_end_tags(None);
                if !self.current_tag_is(tag) {
                    self.parse_error(token);
                }
                // > …until an HTML element whose tag name is one of
                // > "h1"–"h6" has been popped.
                while let Some(current) = self.current_tag() {
                    if current.is_heading() {
                        self.pop_with_end_tag(token);
                        break;
                    }
                    self.pop_implicit();
                }
            }

            /*
             * > An end tag whose tag name is one of: "a", "b", "big",
             * > "code", "em", "font", "i", "nobr", "s", "small",
             * > "strike", "strong", "tt", "u": run the adoption agency
             * > algorithm.
             */
            TagName::A
            | TagName::B
            | TagName::BIG
            | TagName::CODE
            | TagName::EM
            | TagName::FONT
            | TagName::I
            | TagName::NOBR
            | TagName::S
            | TagName::SMALL
            | TagName::STRIKE
            | TagName::STRONG
            | TagName::TT
            | TagName::U => self.run_adoption_agency_algorithm(token, tag),

            /*
             * > An end tag token whose tag name is one of: "applet",
             * > "marquee", "object"
             */
            TagName::APPLET | TagName::MARQUEE | TagName::OBJECT => {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, tag, Scope::Default)
                {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.generate_implied_end_tags(None);
                if !self.current_tag_is(tag) {
                    self.parse_error(token);
                }
                self.pop_until_tag(tag, Some(token));
                self.active_formatting_elements.clear_up_to_last_marker();
            }

            /*
             * > An end tag whose tag name is "br": parse error; drop the
             * > attributes and act as described for a "br" start tag.
             */
            TagName::BR => {
                self.parse_error(token);
                self.reconstruct_active_formatting_elements();
                self.flush_text();
                let position = token.position;
                let mut flags = ParseFlags::default();
                flags.insert(ParseFlags::CONVERTED_FROM_END_TAG);
                let element = self.arena.insert(Node {
                    parent: None,
                    index_within_parent: 0,
                    kind: NodeKind::Element(ElementData {
                        tag: TagName::BR,
                        namespace: ParsingNamespace::Html,
                        attributes: Vec::new(),
                        children: Vec::new(),
                        original_tag: token.original_text,
                        original_end_tag: Span::new(token.original_text.end(), 0),
                        start_position: position,
                        end_position: position,
                        parse_flags: flags,
                    }),
                });
                let (parent, before) = self.appropriate_insertion_place(None);
                self.append_node(parent, element, before);
                self.frameset_ok = false;
            }

            // > Any other end tag
            _ => self.any_other_end_tag_in_body(token),
        }
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-incdata
    fn step_text(&mut self, token: &Token) {
        match &token.data {
            TokenData::Character(_)
            | TokenData::Whitespace(_)
            | TokenData::NullCharacter
            | TokenData::CdataCharacter(_) => self.insert_character(token),

            /*
             * > An end-of-file token: parse error… pop the current node…
             * > switch the insertion mode to the original insertion mode
             * > and reprocess the token.
             */
            TokenData::Eof => {
                self.parse_error(token);
                self.flush_text();
                self.pop_implicit();
                self.insertion_mode = self.original_insertion_mode;
                self.dispatch(token);
            }

            // > Any other end tag: pop the current node… switch to the
            // > original insertion mode.
            TokenData::EndTag(_) => {
                self.flush_text();
                self.pop_with_end_tag(token);
                self.insertion_mode = self.original_insertion_mode;
            }

            other => unreachable!("no {:?} token can reach the text mode", other),
        }
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-intable
    fn step_in_table(&mut self, token: &Token) {
        match &token.data {
            /*
             * > A character token, if the current node is table, tbody,
             * > tfoot, thead, or tr element: …let the pending table
             * > character tokens be an empty list… switch to
             * > "in table text" and reprocess.
             */
            TokenData::Character(_) | TokenData::Whitespace(_) | TokenData::NullCharacter => {
                let current_is_table_like = self.current_tag().map_or(false, |tag| {
                    matches!(
                        tag,
                        TagName::TABLE
                            | TagName::TBODY
                            | TagName::TFOOT
                            | TagName::THEAD
                            | TagName::TR
                    )
                });
                if current_is_table_like {
                    self.pending_table_character_tokens.clear();
                    self.original_insertion_mode = self.insertion_mode;
                    self.insertion_mode = InsertionMode::IN_TABLE_TEXT;
                    self.dispatch(token);
                } else {
                    self.in_table_anything_else(token);
                }
            }

            TokenData::Comment(_) => self.insert_comment(token, None),

            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::StartTag(tag) => match tag.tag {
                // > A start tag whose tag name is "caption"
                TagName::CAPTION => {
                    self.flush_text();
                    self.clear_stack_to_table_context();
                    self.active_formatting_elements.insert_marker();
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                    self.insertion_mode = InsertionMode::IN_CAPTION;
                }

                // > A start tag whose tag name is "colgroup"
                TagName::COLGROUP => {
                    self.flush_text();
                    self.clear_stack_to_table_context();
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                    self.insertion_mode = InsertionMode::IN_COLUMN_GROUP;
                }

                // > A start tag whose tag name is "col"
                TagName::COL => {
                    self.flush_text();
                    self.clear_stack_to_table_context();
                    self.insert_phantom_element(TagName::COLGROUP);
                    self.insertion_mode = InsertionMode::IN_COLUMN_GROUP;
                    self.dispatch(token);
                }

                // > A start tag whose tag name is one of: "tbody",
                // > "tfoot", "thead"
                TagName::TBODY | TagName::TFOOT | TagName::THEAD => {
                    self.flush_text();
                    self.clear_stack_to_table_context();
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                    self.insertion_mode = InsertionMode::IN_TABLE_BODY;
                }

                // > A start tag whose tag name is one of: "td", "th", "tr"
                TagName::TD | TagName::TH | TagName::TR => {
                    self.flush_text();
                    self.clear_stack_to_table_context();
                    self.insert_phantom_element(TagName::TBODY);
                    self.insertion_mode = InsertionMode::IN_TABLE_BODY;
                    self.dispatch(token);
                }

                /*
                 * > A start tag whose tag name is "table": parse error…
                 * > if the stack of open elements does not have a table
                 * > element in table scope, ignore. Otherwise pop…
                 * > reset the insertion mode… reprocess.
                 */
                TagName::TABLE => {
                    self.parse_error(token);
                    if self
                        .open_elements
                        .has_element_in_scope(&self.arena, &TagName::TABLE, Scope::Table)
                    {
                        self.flush_text();
                        self.pop_until_tag(&TagName::TABLE, None);
                        self.reset_insertion_mode_appropriately();
                        self.dispatch(token);
                    }
                }

                // > A start tag whose tag name is one of: "style", "script"
                TagName::STYLE | TagName::SCRIPT => self.step_in_head(token),

                /*
                 * > A start tag whose tag name is "input", if the token
                 * > has a type attribute set to "hidden": parse error;
                 * > insert the element; pop it immediately.
                 */
                TagName::INPUT => {
                    let hidden = tag.attributes.iter().any(|attribute| {
                        attribute.name.as_ref() == "type"
                            && attribute.value.eq_ignore_ascii_case("hidden")
                    });
                    if hidden {
                        self.parse_error(token);
                        self.insert_void_element(token, ParseFlags::default());
                    } else {
                        self.in_table_anything_else(token);
                    }
                }

                /*
                 * > A start tag whose tag name is "form": parse error…
                 * > if the form element pointer is not null, ignore.
                 * > Otherwise insert… set the form element pointer…
                 * > pop that form element immediately.
                 */
                TagName::FORM => {
                    self.parse_error(token);
                    if self.form_element.is_none() {
                        let form = self.insert_element(
                            token,
                            ParsingNamespace::Html,
                            ParseFlags::default(),
                        );
                        self.form_element = Some(form);
                        self.pop_implicit();
                    }
                }

                _ => self.in_table_anything_else(token),
            },

            TokenData::EndTag(tag) => match tag.tag {
                // > An end tag whose tag name is "table"
                TagName::TABLE => {
                    if !self
                        .open_elements
                        .has_element_in_scope(&self.arena, &TagName::TABLE, Scope::Table)
                    {
                        self.parse_error(token);
                        return;
                    }
                    self.flush_text();
                    self.pop_until_tag(&TagName::TABLE, Some(token));
                    self.reset_insertion_mode_appropriately();
                }

                /*
                 * > An end tag whose tag name is one of: "body",
                 * > "caption", "col", "colgroup", "html", "tbody", "td",
                 * > "tfoot", "th", "thead", "tr": parse error, ignore.
                 */
                TagName::BODY
                | TagName::CAPTION
                | TagName::COL
                | TagName::COLGROUP
                | TagName::HTML
                | TagName::TBODY
                | TagName::TD
                | TagName::TFOOT
                | TagName::TH
                | TagName::THEAD
                | TagName::TR => self.parse_error(token),

                _ => self.in_table_anything_else(token),
            },

            // > An end-of-file token: process using the rules for "in body".
            TokenData::Eof => self.step_in_body(token),

            _ => self.in_table_anything_else(token),
        }
    }

    /// > Anything else: parse error. Enable foster parenting, process the
    /// > token using the rules for the "in body" insertion mode, and then
    /// > disable foster parenting.
    fn in_table_anything_else(&mut self, token: &Token) {
        self.parse_error(token);
        self.foster_parenting = true;
        self.step_in_body(token);
        self.flush_text();
        self.foster_parenting = false;
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-intabletext
    fn step_in_table_text(&mut self, token: &Token) {
        match &token.data {
            // > A character token that is U+0000 NULL: parse error, ignore.
            TokenData::NullCharacter => self.parse_error(token),

            TokenData::Character(_) | TokenData::Whitespace(_) => {
                self.pending_table_character_tokens.push(token.clone());
            }

            /*
             * > Anything else: if any of the tokens in the pending table
             * > character tokens list are character tokens that are not
             * > ASCII whitespace, then this is a parse error: reprocess
             * > the character tokens… using the rules given in the
             * > "anything else" entry in the "in table" insertion mode.
             * > Otherwise, insert the characters…
             */
            _ => {
                let pending = std::mem::take(&mut self.pending_table_character_tokens);
                let has_non_whitespace = pending
                    .iter()
                    .any(|pending| matches!(pending.data, TokenData::Character(_)));

                if has_non_whitespace {
                    self.parse_error(token);
                    self.foster_parenting = true;
                    for pending_token in &pending {
                        self.reconstruct_active_formatting_elements();
                        self.insert_character(pending_token);
                        if matches!(pending_token.data, TokenData::Character(_)) {
                            self.frameset_ok = false;
                        }
                    }
                    self.flush_text();
                    self.foster_parenting = false;
                } else {
                    for pending_token in &pending {
                        self.insert_character(pending_token);
                    }
                    self.flush_text();
                }

                self.insertion_mode = self.original_insertion_mode;
                self.dispatch(token);
            }
        }
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-incaption
    fn step_in_caption(&mut self, token: &Token) {
        let close_caption_and_reprocess = match &token.data {
            // > An end tag whose tag name is "caption"
            TokenData::EndTag(tag) if tag.tag == TagName::CAPTION => {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::CAPTION, Scope::Table)
                {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.generate_implied_end_tags(None);
                if !self.current_tag_is(&TagName::CAPTION) {
                    self.parse_error(token);
                }
                self.pop_until_tag(&TagName::CAPTION, Some(token));
                self.active_formatting_elements.clear_up_to_last_marker();
                self.insertion_mode = InsertionMode::IN_TABLE;
                return;
            }

            /*
             * > A start tag whose tag name is one of: "caption", "col",
             * > "colgroup", "tbody", "td", "tfoot", "th", "thead", "tr",
             * > or an end tag whose tag name is "table"
             */
            TokenData::StartTag(tag) => matches!(
                tag.tag,
                TagName::CAPTION
                    | TagName::COL
                    | TagName::COLGROUP
                    | TagName::TBODY
                    | TagName::TD
                    | TagName::TFOOT
                    | TagName::TH
                    | TagName::THEAD
                    | TagName::TR
            ),
            TokenData::EndTag(tag) if tag.tag == TagName::TABLE => true,

            /*
             * > An end tag whose tag name is one of: "body", "col",
             * > "colgroup", "html", "tbody", "td", "tfoot", "th",
             * > "thead", "tr": parse error, ignore.
             */
            TokenData::EndTag(tag) => {
                if matches!(
                    tag.tag,
                    TagName::BODY
                        | TagName::COL
                        | TagName::COLGROUP
                        | TagName::HTML
                        | TagName::TBODY
                        | TagName::TD
                        | TagName::TFOOT
                        | TagName::TH
                        | TagName::THEAD
                        | TagName::TR
                ) {
                    self.parse_error(token);
                    return;
                }
                false
            }

            _ => false,
        };

        if close_caption_and_reprocess {
            self.parse_error(token);
            if !self
                .open_elements
                .has_element_in_scope(&self.arena, &TagName::CAPTION, Scope::Table)
            {
                return;
            }
            self.flush_text();
            self.generate_implied_end_tags(None);
            self.pop_until_tag(&TagName::CAPTION, None);
            self.active_formatting_elements.clear_up_to_last_marker();
            self.insertion_mode = InsertionMode::IN_TABLE;
            self.dispatch(token);
            return;
        }

        // > Anything else: process using the rules for "in body".
        self.step_in_body(token);
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-incolgroup
    fn step_in_column_group(&mut self, token: &Token) {
        match &token.data {
            TokenData::Whitespace(_) => self.insert_character(token),

            TokenData::Comment(_) => self.insert_comment(token, None),

            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::StartTag(tag) if tag.tag == TagName::HTML => self.step_in_body(token),

            // > A start tag whose tag name is "col"
            TokenData::StartTag(tag) if tag.tag == TagName::COL => {
                self.insert_void_element(token, ParseFlags::default());
            }

            // > An end tag whose tag name is "colgroup"
            TokenData::EndTag(tag) if tag.tag == TagName::COLGROUP => {
                if !self.current_tag_is(&TagName::COLGROUP) {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.pop_with_end_tag(token);
                self.insertion_mode = InsertionMode::IN_TABLE;
            }

            // > An end tag whose tag name is "col": parse error, ignore.
            TokenData::EndTag(tag) if tag.tag == TagName::COL => self.parse_error(token),

            TokenData::Eof => self.step_in_body(token),

            // > Anything else: if the current node is not a colgroup
            // > element, parse error, ignore. Otherwise pop… and reprocess.
            _ => {
                if !self.current_tag_is(&TagName::COLGROUP) {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.pop_implicit();
                self.insertion_mode = InsertionMode::IN_TABLE;
                self.dispatch(token);
            }
        }
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-intbody
    fn step_in_table_body(&mut self, token: &Token) {
        match &token.data {
            // > A start tag whose tag name is "tr"
            TokenData::StartTag(tag) if tag.tag == TagName::TR => {
                self.flush_text();
                self.clear_stack_to_table_body_context();
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.insertion_mode = InsertionMode::IN_ROW;
            }

            // > A start tag whose tag name is one of: "th", "td": parse
            // > error… insert an implied "tr"… reprocess.
            TokenData::StartTag(tag) if matches!(tag.tag, TagName::TH | TagName::TD) => {
                self.parse_error(token);
                self.flush_text();
                self.clear_stack_to_table_body_context();
                self.insert_phantom_element(TagName::TR);
                self.insertion_mode = InsertionMode::IN_ROW;
                self.dispatch(token);
            }

            // > An end tag whose tag name is one of: "tbody", "tfoot",
            // > "thead"
            TokenData::EndTag(tag)
                if matches!(tag.tag, TagName::TBODY | TagName::TFOOT | TagName::THEAD) =>
            {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, &tag.tag, Scope::Table)
                {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.clear_stack_to_table_body_context();
                self.pop_with_end_tag(token);
                self.insertion_mode = InsertionMode::IN_TABLE;
            }

            /*
             * > A start tag whose tag name is one of: "caption", "col",
             * > "colgroup", "tbody", "tfoot", "thead", or an end tag
             * > whose tag name is "table"
             */
            TokenData::StartTag(tag)
                if matches!(
                    tag.tag,
                    TagName::CAPTION
                        | TagName::COL
                        | TagName::COLGROUP
                        | TagName::TBODY
                        | TagName::TFOOT
                        | TagName::THEAD
                ) =>
            {
                self.in_table_body_close_and_reprocess(token)
            }
            TokenData::EndTag(tag) if tag.tag == TagName::TABLE => {
                self.in_table_body_close_and_reprocess(token)
            }

            /*
             * > An end tag whose tag name is one of: "body", "caption",
             * > "col", "colgroup", "html", "td", "th", "tr": parse error,
             * > ignore.
             */
            TokenData::EndTag(tag)
                if matches!(
                    tag.tag,
                    TagName::BODY
                        | TagName::CAPTION
                        | TagName::COL
                        | TagName::COLGROUP
                        | TagName::HTML
                        | TagName::TD
                        | TagName::TH
                        | TagName::TR
                ) =>
            {
                self.parse_error(token)
            }

            // > Anything else: process using the rules for "in table".
            _ => self.step_in_table(token),
        }
    }

    /// > If the stack of open elements does not have a tbody, thead, or
    /// > tfoot element in table scope, this is a parse error; ignore.
    /// > Otherwise… pop the current node… switch to "in table"… reprocess.
    fn in_table_body_close_and_reprocess(&mut self, token: &Token) {
        let has_section = [TagName::TBODY, TagName::THEAD, TagName::TFOOT]
            .iter()
            .any(|section| {
                self.open_elements
                    .has_element_in_scope(&self.arena, section, Scope::Table)
            });
        if !has_section {
            self.parse_error(token);
            return;
        }
        self.flush_text();
        self.clear_stack_to_table_body_context();
        self.pop_implicit();
        self.insertion_mode = InsertionMode::IN_TABLE;
        self.dispatch(token);
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-intr
    fn step_in_row(&mut self, token: &Token) {
        match &token.data {
            // > A start tag whose tag name is one of: "th", "td"
            TokenData::StartTag(tag) if matches!(tag.tag, TagName::TH | TagName::TD) => {
                self.flush_text();
                self.clear_stack_to_table_row_context();
                self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                self.insertion_mode = InsertionMode::IN_CELL;
                self.active_formatting_elements.insert_marker();
            }

            // > An end tag whose tag name is "tr"
            TokenData::EndTag(tag) if tag.tag == TagName::TR => {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::TR, Scope::Table)
                {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.clear_stack_to_table_row_context();
                self.pop_with_end_tag(token);
                self.insertion_mode = InsertionMode::IN_TABLE_BODY;
            }

            /*
             * > A start tag whose tag name is one of: "caption", "col",
             * > "colgroup", "tbody", "tfoot", "thead", "tr", or an end
             * > tag whose tag name is "table"
             */
            TokenData::StartTag(tag)
                if matches!(
                    tag.tag,
                    TagName::CAPTION
                        | TagName::COL
                        | TagName::COLGROUP
                        | TagName::TBODY
                        | TagName::TFOOT
                        | TagName::THEAD
                        | TagName::TR
                ) =>
            {
                self.in_row_close_and_reprocess(token)
            }
            TokenData::EndTag(tag) if tag.tag == TagName::TABLE => {
                self.in_row_close_and_reprocess(token)
            }

            // > An end tag whose tag name is one of: "tbody", "tfoot",
            // > "thead"
            TokenData::EndTag(tag)
                if matches!(tag.tag, TagName::TBODY | TagName::TFOOT | TagName::THEAD) =>
            {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, &tag.tag, Scope::Table)
                {
                    self.parse_error(token);
                    return;
                }
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::TR, Scope::Table)
                {
                    return;
                }
                self.flush_text();
                self.clear_stack_to_table_row_context();
                self.pop_implicit();
                self.insertion_mode = InsertionMode::IN_TABLE_BODY;
                self.dispatch(token);
            }

            /*
             * > An end tag whose tag name is one of: "body", "caption",
             * > "col", "colgroup", "html", "td", "th": parse error,
             * > ignore.
             */
            TokenData::EndTag(tag)
                if matches!(
                    tag.tag,
                    TagName::BODY
                        | TagName::CAPTION
                        | TagName::COL
                        | TagName::COLGROUP
                        | TagName::HTML
                        | TagName::TD
                        | TagName::TH
                ) =>
            {
                self.parse_error(token)
            }

            // > Anything else: process using the rules for "in table".
            _ => self.step_in_table(token),
        }
    }

    fn in_row_close_and_reprocess(&mut self, token: &Token) {
        if !self
            .open_elements
            .has_element_in_scope(&self.arena, &TagName::TR, Scope::Table)
        {
            self.parse_error(token);
            return;
        }
        self.flush_text();
        self.clear_stack_to_table_row_context();
        self.pop_implicit();
        self.insertion_mode = InsertionMode::IN_TABLE_BODY;
        self.dispatch(token);
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-intd
    fn step_in_cell(&mut self, token: &Token) {
        match &token.data {
            // > An end tag whose tag name is one of: "td", "th"
            TokenData::EndTag(tag) if matches!(tag.tag, TagName::TD | TagName::TH) => {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, &tag.tag, Scope::Table)
                {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.generate_implied_end_tags(None);
                if !self.current_tag_is(&tag.tag) {
                    self.parse_error(token);
                }
                self.pop_until_tag(&tag.tag, Some(token));
                self.active_formatting_elements.clear_up_to_last_marker();
                self.insertion_mode = InsertionMode::IN_ROW;
            }

            /*
             * > A start tag whose tag name is one of: "caption", "col",
             * > "colgroup", "tbody", "td", "tfoot", "th", "thead", "tr":
             * > …close the cell and reprocess.
             */
            TokenData::StartTag(tag)
                if matches!(
                    tag.tag,
                    TagName::CAPTION
                        | TagName::COL
                        | TagName::COLGROUP
                        | TagName::TBODY
                        | TagName::TD
                        | TagName::TFOOT
                        | TagName::TH
                        | TagName::THEAD
                        | TagName::TR
                ) =>
            {
                let has_cell = self
                    .open_elements
                    .has_element_in_scope(&self.arena, &TagName::TD, Scope::Table)
                    || self
                        .open_elements
                        .has_element_in_scope(&self.arena, &TagName::TH, Scope::Table);
                if !has_cell {
                    self.parse_error(token);
                    return;
                }
                self.close_the_cell(token);
                self.dispatch(token);
            }

            /*
             * > An end tag whose tag name is one of: "body", "caption",
             * > "col", "colgroup", "html": parse error, ignore.
             */
            TokenData::EndTag(tag)
                if matches!(
                    tag.tag,
                    TagName::BODY
                        | TagName::CAPTION
                        | TagName::COL
                        | TagName::COLGROUP
                        | TagName::HTML
                ) =>
            {
                self.parse_error(token)
            }

            /*
             * > An end tag whose tag name is one of: "table", "tbody",
             * > "tfoot", "thead", "tr": if the stack… does not have an
             * > element in table scope that is an HTML element with the
             * > same tag name… parse error, ignore. Otherwise close the
             * > cell and reprocess.
             */
            TokenData::EndTag(tag)
                if matches!(
                    tag.tag,
                    TagName::TABLE
                        | TagName::TBODY
                        | TagName::TFOOT
                        | TagName::THEAD
                        | TagName::TR
                ) =>
            {
                if !self
                    .open_elements
                    .has_element_in_scope(&self.arena, &tag.tag, Scope::Table)
                {
                    self.parse_error(token);
                    return;
                }
                self.close_the_cell(token);
                self.dispatch(token);
            }

            // > Anything else: process using the rules for "in body".
            _ => self.step_in_body(token),
        }
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-inselect
    fn step_in_select(&mut self, token: &Token) {
        match &token.data {
            TokenData::NullCharacter => self.parse_error(token),

            TokenData::Character(_) | TokenData::Whitespace(_) => self.insert_character(token),

            TokenData::Comment(_) => self.insert_comment(token, None),

            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::StartTag(tag) => match tag.tag {
                TagName::HTML => self.step_in_body(token),

                // > A start tag whose tag name is "option"
                TagName::OPTION => {
                    if self.current_tag_is(&TagName::OPTION) {
                        self.flush_text();
                        self.pop_implicit();
                    }
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                }

                // > A start tag whose tag name is "optgroup"
                TagName::OPTGROUP => {
                    self.flush_text();
                    if self.current_tag_is(&TagName::OPTION) {
                        self.pop_implicit();
                    }
                    if self.current_tag_is(&TagName::OPTGROUP) {
                        self.pop_implicit();
                    }
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                }

                /*
                 * > A start tag whose tag name is "select": parse error…
                 * > treated as an end tag.
                 */
                TagName::SELECT => {
                    self.parse_error(token);
                    if self
                        .open_elements
                        .has_element_in_scope(&self.arena, &TagName::SELECT, Scope::Select)
                    {
                        self.flush_text();
                        self.pop_until_tag(&TagName::SELECT, None);
                        self.reset_insertion_mode_appropriately();
                    }
                }

                /*
                 * > A start tag whose tag name is one of: "input",
                 * > "keygen", "textarea": parse error… if the stack does
                 * > not have a select element in select scope, ignore.
                 * > Otherwise pop until select… reset… reprocess.
                 */
                TagName::INPUT | TagName::KEYGEN | TagName::TEXTAREA => {
                    self.parse_error(token);
                    if self
                        .open_elements
                        .has_element_in_scope(&self.arena, &TagName::SELECT, Scope::Select)
                    {
                        self.flush_text();
                        self.pop_until_tag(&TagName::SELECT, None);
                        self.reset_insertion_mode_appropriately();
                        self.dispatch(token);
                    }
                }

                TagName::SCRIPT => self.step_in_head(token),

                _ => self.parse_error(token),
            },

            TokenData::EndTag(tag) => match tag.tag {
                // > An end tag whose tag name is "optgroup"
                TagName::OPTGROUP => {
                    self.flush_text();
                    if self.current_tag_is(&TagName::OPTION) && self.open_elements.len() >= 2 {
                        let above = self.open_elements.stack[self.open_elements.len() - 2];
                        let above_is_optgroup =
                            self.arena[above].as_element().map_or(false, |element| {
                                element.tag == TagName::OPTGROUP
                            });
                        if above_is_optgroup {
                            self.pop_implicit();
                        }
                    }
                    if self.current_tag_is(&TagName::OPTGROUP) {
                        self.pop_with_end_tag(token);
                    } else {
                        self.parse_error(token);
                    }
                }

                // > An end tag whose tag name is "option"
                TagName::OPTION => {
                    if self.current_tag_is(&TagName::OPTION) {
                        self.flush_text();
                        self.pop_with_end_tag(token);
                    } else {
                        self.parse_error(token);
                    }
                }

                // > An end tag whose tag name is "select"
                TagName::SELECT => {
                    if !self
                        .open_elements
                        .has_element_in_scope(&self.arena, &TagName::SELECT, Scope::Select)
                    {
                        self.parse_error(token);
                        return;
                    }
                    self.flush_text();
                    self.pop_until_tag(&TagName::SELECT, Some(token));
                    self.reset_insertion_mode_appropriately();
                }

                _ => self.parse_error(token),
            },

            TokenData::Eof => self.step_in_body(token),

            _ => self.parse_error(token),
        }
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-inselectintable
    fn step_in_select_in_table(&mut self, token: &Token) {
        let table_tags = |tag: &TagName| {
            matches!(
                tag,
                TagName::CAPTION
                    | TagName::TABLE
                    | TagName::TBODY
                    | TagName::TFOOT
                    | TagName::THEAD
                    | TagName::TR
                    | TagName::TD
                    | TagName::TH
            )
        };

        match &token.data {
            // > A start tag whose tag name is one of the table tags:
            // > parse error; pop until select; reset; reprocess.
            TokenData::StartTag(tag) if table_tags(&tag.tag) => {
                self.parse_error(token);
                self.flush_text();
                self.pop_until_tag(&TagName::SELECT, None);
                self.reset_insertion_mode_appropriately();
                self.dispatch(token);
            }

            /*
             * > An end tag whose tag name is one of the table tags: parse
             * > error; if the stack does not have an element in table
             * > scope that is an HTML element with the same tag name,
             * > ignore. Otherwise pop until select; reset; reprocess.
             */
            TokenData::EndTag(tag) if table_tags(&tag.tag) => {
                self.parse_error(token);
                if self
                    .open_elements
                    .has_element_in_scope(&self.arena, &tag.tag, Scope::Table)
                {
                    self.flush_text();
                    self.pop_until_tag(&TagName::SELECT, None);
                    self.reset_insertion_mode_appropriately();
                    self.dispatch(token);
                }
            }

            _ => self.step_in_select(token),
        }
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-afterbody
    fn step_after_body(&mut self, token: &Token) {
        match &token.data {
            TokenData::Whitespace(_) => self.step_in_body(token),

            // > A comment token: insert… as the last child of the first
            // > element in the stack of open elements (the html element).
            TokenData::Comment(_) => {
                let html = self.html_element.expect("html exists after body");
                self.insert_comment(token, Some(html));
            }

            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::StartTag(tag) if tag.tag == TagName::HTML => self.step_in_body(token),

            // > An end tag whose tag name is "html"
            TokenData::EndTag(tag) if tag.tag == TagName::HTML => {
                if let Some(html) = self.html_element {
                    if let Some(element) = self.arena[html].as_element_mut() {
                        element.end_position = token.position;
                        element.original_end_tag = token.original_text;
                    }
                }
                self.insertion_mode = InsertionMode::AFTER_AFTER_BODY;
            }

            TokenData::Eof => {}

            // > Anything else: parse error; switch to "in body"; reprocess.
            _ => {
                self.parse_error(token);
                self.insertion_mode = InsertionMode::IN_BODY;
                self.dispatch(token);
            }
        }
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-inframeset
    fn step_in_frameset(&mut self, token: &Token) {
        match &token.data {
            TokenData::Whitespace(_) => self.insert_character(token),

            TokenData::Comment(_) => self.insert_comment(token, None),

            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::StartTag(tag) => match tag.tag {
                TagName::HTML => self.step_in_body(token),

                TagName::FRAMESET => {
                    self.insert_element(token, ParsingNamespace::Html, ParseFlags::default());
                }

                TagName::FRAME => {
                    self.insert_void_element(token, ParseFlags::default());
                }

                TagName::NOFRAMES => self.step_in_head(token),

                _ => self.parse_error(token),
            },

            // > An end tag whose tag name is "frameset"
            TokenData::EndTag(tag) if tag.tag == TagName::FRAMESET => {
                if self.current_tag_is(&TagName::HTML) {
                    self.parse_error(token);
                    return;
                }
                self.flush_text();
                self.pop_with_end_tag(token);
                if !self.current_tag_is(&TagName::FRAMESET) {
                    self.insertion_mode = InsertionMode::AFTER_FRAMESET;
                }
            }

            TokenData::Eof => {
                if !self.current_tag_is(&TagName::HTML) {
                    self.parse_error(token);
                }
            }

            _ => self.parse_error(token),
        }
    }

    /// @see https://html.spec.whatwg.org/#parsing-main-afterframeset
    fn step_after_frameset(&mut self, token: &Token) {
        match &token.data {
            TokenData::Whitespace(_) => self.insert_character(token),

            TokenData::Comment(_) => self.insert_comment(token, None),

            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::StartTag(tag) if tag.tag == TagName::HTML => self.step_in_body(token),

            TokenData::EndTag(tag) if tag.tag == TagName::HTML => {
                if let Some(html) = self.html_element {
                    if let Some(element) = self.arena[html].as_element_mut() {
                        element.end_position = token.position;
                        element.original_end_tag = token.original_text;
                    }
                }
                self.insertion_mode = InsertionMode::AFTER_AFTER_FRAMESET;
            }

            TokenData::StartTag(tag) if tag.tag == TagName::NOFRAMES => self.step_in_head(token),

            TokenData::Eof => {}

            _ => self.parse_error(token),
        }
    }

    /// @see https://html.spec.whatwg.org/#the-after-after-body-insertion-mode
    fn step_after_after_body(&mut self, token: &Token) {
        match &token.data {
            TokenData::Comment(_) => self.insert_comment(token, Some(self.document)),

            TokenData::Doctype(_) | TokenData::Whitespace(_) => self.step_in_body(token),
            TokenData::StartTag(tag) if tag.tag == TagName::HTML => self.step_in_body(token),

            TokenData::Eof => {}

            // > Anything else: parse error; switch to "in body"; reprocess.
            _ => {
                self.parse_error(token);
                self.insertion_mode = InsertionMode::IN_BODY;
                self.dispatch(token);
            }
        }
    }

    /// @see https://html.spec.whatwg.org/#the-after-after-frameset-insertion-mode
    fn step_after_after_frameset(&mut self, token: &Token) {
        match &token.data {
            TokenData::Comment(_) => self.insert_comment(token, Some(self.document)),

            TokenData::Doctype(_) | TokenData::Whitespace(_) => self.step_in_body(token),
            TokenData::StartTag(tag) if tag.tag == TagName::HTML => self.step_in_body(token),
            TokenData::StartTag(tag) if tag.tag == TagName::NOFRAMES => self.step_in_head(token),

            TokenData::Eof => {}

            _ => self.parse_error(token),
        }
    }

    /// The rules for parsing tokens in foreign content.
    ///
    /// @see https://html.spec.whatwg.org/#parsing-main-inforeign
    fn step_in_foreign_content(&mut self, token: &Token) {
        match &token.data {
            // > A character token that is U+0000 NULL: parse error; insert
            // > a U+FFFD REPLACEMENT CHARACTER.
            TokenData::NullCharacter => {
                self.parse_error(token);
                let replacement = Token {
                    position: token.position,
                    original_text: token.original_text,
                    data: TokenData::Character('\u{FFFD}'),
                };
                self.insert_character(&replacement);
            }

            TokenData::Whitespace(_) | TokenData::CdataCharacter(_) => {
                self.insert_character(token)
            }

            TokenData::Character(_) => {
                self.insert_character(token);
                self.frameset_ok = false;
            }

            TokenData::Comment(_) => self.insert_comment(token, None),

            TokenData::Doctype(_) => self.parse_error(token),

            TokenData::StartTag(tag) => {
                /*
                 * > If the token is one of the HTML breakout tags… parse
                 * > error: pop elements from the stack of open elements
                 * > until the current node is a MathML text integration
                 * > point, an HTML integration point, or an element in the
                 * > HTML namespace; then reprocess.
                 */
                if is_html_breakout_tag(&tag.tag, &tag.attributes) {
                    self.parse_error(token);
                    self.flush_text();
                    loop {
                        let Some(current) = self.open_elements.current_node() else {
                            break;
                        };
                        let element = self.arena[current].as_element().expect("stack");
                        let tag = element.tag.clone();
                        let namespace = element.namespace;
                        if namespace == ParsingNamespace::Html
                            || is_mathml_text_integration_point(&tag, namespace)
                            || is_html_integration_point(&tag, namespace, &element.attributes)
                        {
                            break;
                        }
                        self.pop_implicit();
                    }
                    self.dispatch(token);
                    return;
                }

                /*
                 * > Any other start tag: …in the same namespace as the
                 * > adjusted current node, with its tag name and
                 * > attributes adjusted.
                 */
                let namespace = self
                    .open_elements
                    .current_node()
                    .map(|current| {
                        self.arena[current]
                            .as_element()
                            .expect("stack of elements")
                            .namespace
                    })
                    .unwrap_or(ParsingNamespace::Html);
                self.insert_element(token, namespace, ParseFlags::default());

                // > If the token has its self-closing flag set… pop…
                // > and acknowledge the token's self-closing flag.
                if tag.self_closing {
                    self.open_elements.pop();
                    self.acknowledge_self_closing();
                }
            }

            TokenData::EndTag(tag) => {
                /*
                 * > …if node's tag name, converted to ASCII lowercase, is
                 * > not the same as the tag name of the token, then this
                 * > is a parse error.
                 */
                let subject = tag.tag.canonical_name().to_ascii_lowercase();
                let current_matches = self.current_tag().map_or(false, |current| {
                    current.canonical_name().to_ascii_lowercase() == subject
                });
                if !current_matches {
                    self.parse_error(token);
                }

                // > Loop through the stack from the current node upward.
                for index in (0..self.open_elements.len()).rev() {
                    let node = self.open_elements.stack[index];
                    let (name_matches, is_html) = {
                        let element = self.arena[node].as_element().expect("stack");
                        (
                            element.tag.canonical_name().to_ascii_lowercase() == subject,
                            element.namespace == ParsingNamespace::Html,
                        )
                    };

                    if is_html {
                        // > …process the token according to the rules
                        // > given in the section for parsing tokens in
                        // > HTML content.
                        self.step(token);
                        return;
                    }

                    if name_matches {
                        self.flush_text();
                        self.pop_until_node(node, Some(token));
                        return;
                    }
                }
            }

            TokenData::Eof => self.step(token),
        }
    }
}

/// Whether an element belongs to the HTML "special" category.
///
/// @see https://html.spec.whatwg.org/#special
pub(crate) fn is_special(tag: &TagName, namespace: ParsingNamespace) -> bool {
    match namespace {
        ParsingNamespace::Html => matches!(
            tag,
            TagName::ADDRESS
                | TagName::APPLET
                | TagName::AREA
                | TagName::ARTICLE
                | TagName::ASIDE
                | TagName::BASE
                | TagName::BASEFONT
                | TagName::BGSOUND
                | TagName::BLOCKQUOTE
                | TagName::BODY
                | TagName::BR
                | TagName::BUTTON
                | TagName::CAPTION
                | TagName::CENTER
                | TagName::COL
                | TagName::COLGROUP
                | TagName::DD
                | TagName::DETAILS
                | TagName::DIR
                | TagName::DIV
                | TagName::DL
                | TagName::DT
                | TagName::EMBED
                | TagName::FIELDSET
                | TagName::FIGCAPTION
                | TagName::FIGURE
                | TagName::FOOTER
                | TagName::FORM
                | TagName::FRAME
                | TagName::FRAMESET
                | TagName::H1
                | TagName::H2
                | TagName::H3
                | TagName::H4
                | TagName::H5
                | TagName::H6
                | TagName::HEAD
                | TagName::HEADER
                | TagName::HGROUP
                | TagName::HR
                | TagName::HTML
                | TagName::IFRAME
                | TagName::IMG
                | TagName::INPUT
                | TagName::ISINDEX
                | TagName::KEYGEN
                | TagName::LI
                | TagName::LINK
                | TagName::LISTING
                | TagName::MAIN
                | TagName::MARQUEE
                | TagName::MENU
                | TagName::MENUITEM
                | TagName::META
                | TagName::NAV
                | TagName::NOEMBED
                | TagName::NOFRAMES
                | TagName::NOSCRIPT
                | TagName::OBJECT
                | TagName::OL
                | TagName::P
                | TagName::PARAM
                | TagName::PLAINTEXT
                | TagName::PRE
                | TagName::SCRIPT
                | TagName::SECTION
                | TagName::SELECT
                | TagName::SOURCE
                | TagName::STYLE
                | TagName::SUMMARY
                | TagName::TABLE
                | TagName::TBODY
                | TagName::TD
                | TagName::TEMPLATE
                | TagName::TEXTAREA
                | TagName::TFOOT
                | TagName::TH
                | TagName::THEAD
                | TagName::TITLE
                | TagName::TR
                | TagName::TRACK
                | TagName::UL
                | TagName::WBR
                | TagName::XMP
        ),
        ParsingNamespace::MathML => matches!(
            tag,
            TagName::MI
                | TagName::MO
                | TagName::MN
                | TagName::MS
                | TagName::MTEXT
                | TagName::ANNOTATION_XML
        ),
        ParsingNamespace::Svg => matches!(
            tag,
            TagName::FOREIGNOBJECT | TagName::DESC | TagName::TITLE
        ),
    }
}

/// The HTML void elements, which never have content or an end tag.
///
/// > area, base, br, col, embed, hr, img, input, link, meta, source,
/// > track, wbr
///
/// @see https://html.spec.whatwg.org/#void-elements
pub(crate) fn is_void(tag: &TagName) -> bool {
    matches!(
        tag,
        TagName::AREA
            | TagName::BASE
            | TagName::BASEFONT
            | TagName::BGSOUND
            | TagName::BR
            | TagName::COL
            | TagName::EMBED
            | TagName::FRAME
            | TagName::HR
            | TagName::IMG
            | TagName::INPUT
            | TagName::KEYGEN
            | TagName::LINK
            | TagName::META
            | TagName::PARAM
            | TagName::SOURCE
            | TagName::TRACK
            | TagName::WBR
    )
}
