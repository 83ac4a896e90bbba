use crate::arena::{NodeArena, NodeId};
use crate::node::ParsingNamespace;
use crate::tag_name::TagName;
use crate::token::{TagData, Token, TokenData};

/// One entry in the list of active formatting elements.
#[derive(Debug, Clone)]
pub(crate) enum FormattingEntry {
    /// > The markers are inserted when entering applet, object, marquee,
    /// > template, td, th, and caption elements, and are used to prevent
    /// > formatting from "leaking" into applet, object, marquee, template,
    /// > td, th, and caption elements.
    Marker,

    /// A formatting element together with the start-tag token that created
    /// it, so further elements can be recreated from that token.
    Element { node: NodeId, token: Token },
}

/// The list of active formatting elements.
///
/// > Initially, the list of active formatting elements is empty. It is
/// > used to handle mis-nested formatting element tags.
///
/// @see https://html.spec.whatwg.org/#list-of-active-formatting-elements
pub(crate) struct ActiveFormattingElements {
    pub entries: Vec<FormattingEntry>,
}

impl ActiveFormattingElements {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert_marker(&mut self) {
        self.entries.push(FormattingEntry::Marker);
    }

    /// Adds a formatting element, applying the Noah's Ark clause:
    ///
    /// > If there are already three elements in the list of active
    /// > formatting elements after the last marker, if any, or anywhere in
    /// > the list if there are no markers, that have the same tag name,
    /// > namespace, and attributes as element, then remove the earliest
    /// > such element from the list.
    ///
    /// @see https://html.spec.whatwg.org/#push-onto-the-list-of-active-formatting-elements
    pub fn push(&mut self, arena: &NodeArena, node: NodeId, token: Token) {
        let mut equal_indices = Vec::new();
        for (index, entry) in self.entries.iter().enumerate().rev() {
            match entry {
                FormattingEntry::Marker => break,
                FormattingEntry::Element { node: other, .. } => {
                    if formatting_elements_equal(arena, node, *other) {
                        equal_indices.push(index);
                    }
                }
            }
        }
        if equal_indices.len() >= 3 {
            // The earliest equal entry is the last index found walking back.
            let earliest = *equal_indices.last().expect("three entries were found");
            self.entries.remove(earliest);
        }

        self.entries.push(FormattingEntry::Element { node, token });
    }

    /// > 1. Let entry be the last (most recently added) entry in the list…
    /// > 2. Remove entry from the list…
    /// > 3. If entry was a marker, then stop the algorithm at this point.
    /// > 4. Go to step 1.
    ///
    /// @see https://html.spec.whatwg.org/#clear-the-list-of-active-formatting-elements-up-to-the-last-marker
    pub fn clear_up_to_last_marker(&mut self) {
        while let Some(entry) = self.entries.pop() {
            if matches!(entry, FormattingEntry::Marker) {
                break;
            }
        }
    }

    pub fn index_of(&self, node: NodeId) -> Option<usize> {
        self.entries.iter().position(|entry| {
            matches!(entry, FormattingEntry::Element { node: other, .. } if *other == node)
        })
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.index_of(node).is_some()
    }

    pub fn remove_node(&mut self, node: NodeId) {
        if let Some(index) = self.index_of(node) {
            self.entries.remove(index);
        }
    }

    /// Finds the most recent element entry with this tag between the end
    /// of the list and the last marker. Used to pick the adoption agency's
    /// formatting element and to enforce the "one open `a`" rule.
    pub fn last_with_tag(&self, arena: &NodeArena, tag: &TagName) -> Option<(usize, NodeId)> {
        for (index, entry) in self.entries.iter().enumerate().rev() {
            match entry {
                FormattingEntry::Marker => return None,
                FormattingEntry::Element { node, .. } => {
                    let element = arena[*node].as_element().expect("entries are elements");
                    if element.namespace == ParsingNamespace::Html && element.tag == *tag {
                        return Some((index, *node));
                    }
                }
            }
        }
        None
    }

    /// The stored start-tag token of an element entry.
    pub fn token_of(&self, index: usize) -> &Token {
        match &self.entries[index] {
            FormattingEntry::Element { token, .. } => token,
            FormattingEntry::Marker => unreachable!("markers carry no token"),
        }
    }

    /// Swaps the node of an element entry, keeping its token.
    pub fn replace_node(&mut self, old: NodeId, new: NodeId) {
        for entry in self.entries.iter_mut() {
            if let FormattingEntry::Element { node, .. } = entry {
                if *node == old {
                    *node = new;
                }
            }
        }
    }
}

/// Equality for the Noah's Ark clause: same tag, namespace, and the same
/// attributes (name, namespace, and value), order ignored.
fn formatting_elements_equal(arena: &NodeArena, left: NodeId, right: NodeId) -> bool {
    let left = arena[left].as_element().expect("formatting entry");
    let right = arena[right].as_element().expect("formatting entry");

    if left.tag != right.tag
        || left.namespace != right.namespace
        || left.attributes.len() != right.attributes.len()
    {
        return false;
    }

    left.attributes.iter().all(|attribute| {
        right.attributes.iter().any(|other| {
            attribute.name == other.name
                && attribute.namespace == other.namespace
                && attribute.value == other.value
        })
    })
}

/// Convenience for pulling the tag data out of a stored start-tag token.
pub(crate) fn tag_data_of(token: &Token) -> &TagData {
    match &token.data {
        TokenData::StartTag(tag) => tag,
        other => unreachable!("formatting tokens are start tags, got {:?}", other),
    }
}
