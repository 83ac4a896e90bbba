use crate::arena::{NodeArena, NodeId};
use crate::node::ParsingNamespace;
use crate::tag_name::TagName;

/// The five flavors of the "has an element in scope" query. Each flavor
/// differs only in which elements terminate the upward search.
///
/// @see https://html.spec.whatwg.org/#has-an-element-in-scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Default,
    ListItem,
    Button,
    Table,
    Select,
}

/// The stack of open elements. The first entry is the `html` element; the
/// last entry is the current node. Every entry is an element node in the
/// arena, and each entry is an ancestor of the one after it.
///
/// @see https://html.spec.whatwg.org/#the-stack-of-open-elements
pub(crate) struct StackOfOpenElements {
    pub stack: Vec<NodeId>,
}

impl StackOfOpenElements {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, element: NodeId) {
        self.stack.push(element);
    }

    pub fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    pub fn current_node(&self) -> Option<NodeId> {
        self.stack.last().copied()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn index_of(&self, element: NodeId) -> Option<usize> {
        self.stack.iter().position(|&entry| entry == element)
    }

    pub fn contains(&self, element: NodeId) -> bool {
        self.index_of(element).is_some()
    }

    /// Removes an element from wherever it sits in the stack.
    pub fn remove(&mut self, element: NodeId) {
        if let Some(index) = self.index_of(element) {
            self.stack.remove(index);
        }
    }

    pub fn insert_at(&mut self, index: usize, element: NodeId) {
        self.stack.insert(index, element);
    }

    /// Replaces an entry in place, keeping its depth.
    pub fn replace(&mut self, old: NodeId, new: NodeId) {
        if let Some(index) = self.index_of(old) {
            self.stack[index] = new;
        }
    }

    /// The deepest HTML element with this tag, if any.
    pub fn topmost_with_tag(&self, arena: &NodeArena, tag: &TagName) -> Option<NodeId> {
        self.stack
            .iter()
            .rev()
            .copied()
            .find(|&entry| {
                let element = arena[entry].as_element().expect("stack holds elements");
                element.namespace == ParsingNamespace::Html && element.tag == *tag
            })
    }

    /// > The stack of open elements is said to have an element target node
    /// > in a specific scope consisting of a list of element types list
    /// > when the following algorithm terminates in a match state…
    pub fn has_element_in_scope(&self, arena: &NodeArena, tag: &TagName, scope: Scope) -> bool {
        self.scope_search(arena, scope, |candidate_tag, namespace| {
            namespace == ParsingNamespace::Html && candidate_tag == tag
        })
    }

    /// Scope query for a specific node rather than a tag, as the adoption
    /// agency algorithm requires.
    pub fn has_node_in_scope(&self, arena: &NodeArena, node: NodeId, scope: Scope) -> bool {
        for &entry in self.stack.iter().rev() {
            if entry == node {
                return true;
            }
            let element = arena[entry].as_element().expect("stack holds elements");
            if blocks_scope(&element.tag, element.namespace, scope) {
                return false;
            }
        }
        false
    }

    /// Scope query for any of the six heading elements.
    pub fn has_heading_in_scope(&self, arena: &NodeArena, scope: Scope) -> bool {
        self.scope_search(arena, scope, |candidate_tag, namespace| {
            namespace == ParsingNamespace::Html && candidate_tag.is_heading()
        })
    }

    fn scope_search(
        &self,
        arena: &NodeArena,
        scope: Scope,
        matches: impl Fn(&TagName, ParsingNamespace) -> bool,
    ) -> bool {
        for &entry in self.stack.iter().rev() {
            let element = arena[entry].as_element().expect("stack holds elements");
            if matches(&element.tag, element.namespace) {
                return true;
            }
            if blocks_scope(&element.tag, element.namespace, scope) {
                return false;
            }
        }
        false
    }
}

/// Whether an element terminates an upward scope search of a given flavor.
fn blocks_scope(tag: &TagName, namespace: ParsingNamespace, scope: Scope) -> bool {
    match scope {
        /*
         * > …the following element types: applet, caption, html, table,
         * > td, th, marquee, object; MathML mi, mo, mn, ms, mtext,
         * > annotation-xml; SVG foreignObject, desc, title.
         */
        Scope::Default => in_default_scope_boundary(tag, namespace),

        // > …the same list, plus the following: ol, ul.
        Scope::ListItem => {
            in_default_scope_boundary(tag, namespace)
                || (namespace == ParsingNamespace::Html
                    && matches!(tag, TagName::OL | TagName::UL))
        }

        // > …the same list, plus the following: button.
        Scope::Button => {
            in_default_scope_boundary(tag, namespace)
                || (namespace == ParsingNamespace::Html && *tag == TagName::BUTTON)
        }

        // > …the following element types: html, table.
        Scope::Table => {
            namespace == ParsingNamespace::Html
                && matches!(tag, TagName::HTML | TagName::TABLE)
        }

        /*
         * > …consisting of all element types except the following:
         * > optgroup, option.
         */
        Scope::Select => !matches!(tag, TagName::OPTGROUP | TagName::OPTION),
    }
}

fn in_default_scope_boundary(tag: &TagName, namespace: ParsingNamespace) -> bool {
    match namespace {
        ParsingNamespace::Html => matches!(
            tag,
            TagName::APPLET
                | TagName::CAPTION
                | TagName::HTML
                | TagName::TABLE
                | TagName::TD
                | TagName::TH
                | TagName::MARQUEE
                | TagName::OBJECT
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
