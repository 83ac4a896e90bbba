/// Insertion mode: the named state of the tree-construction state machine,
/// determining how the next token is interpreted.
///
/// @see https://html.spec.whatwg.org/#the-insertion-mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionMode {
    /// @see https://html.spec.whatwg.org/#the-initial-insertion-mode
    INITIAL,

    /// @see https://html.spec.whatwg.org/#the-before-html-insertion-mode
    BEFORE_HTML,

    /// @see https://html.spec.whatwg.org/#parsing-main-beforehead
    BEFORE_HEAD,

    /// @see https://html.spec.whatwg.org/#parsing-main-inhead
    IN_HEAD,

    /// @see https://html.spec.whatwg.org/#parsing-main-inheadnoscript
    IN_HEAD_NOSCRIPT,

    /// @see https://html.spec.whatwg.org/#the-after-head-insertion-mode
    AFTER_HEAD,

    /// @see https://html.spec.whatwg.org/#parsing-main-inbody
    IN_BODY,

    /// Content of script, style, title, textarea, and the other
    /// raw-text/RCDATA elements, gathered into a single text node.
    ///
    /// @see https://html.spec.whatwg.org/#parsing-main-incdata
    TEXT,

    /// @see https://html.spec.whatwg.org/#parsing-main-intable
    IN_TABLE,

    /// @see https://html.spec.whatwg.org/#parsing-main-intabletext
    IN_TABLE_TEXT,

    /// @see https://html.spec.whatwg.org/#parsing-main-incaption
    IN_CAPTION,

    /// @see https://html.spec.whatwg.org/#parsing-main-incolgroup
    IN_COLUMN_GROUP,

    /// @see https://html.spec.whatwg.org/#parsing-main-intbody
    IN_TABLE_BODY,

    /// @see https://html.spec.whatwg.org/#parsing-main-intr
    IN_ROW,

    /// @see https://html.spec.whatwg.org/#parsing-main-intd
    IN_CELL,

    /// @see https://html.spec.whatwg.org/#parsing-main-inselect
    IN_SELECT,

    /// @see https://html.spec.whatwg.org/#parsing-main-inselectintable
    IN_SELECT_IN_TABLE,

    /// @see https://html.spec.whatwg.org/#parsing-main-afterbody
    AFTER_BODY,

    /// @see https://html.spec.whatwg.org/#parsing-main-inframeset
    IN_FRAMESET,

    /// @see https://html.spec.whatwg.org/#parsing-main-afterframeset
    AFTER_FRAMESET,

    /// @see https://html.spec.whatwg.org/#the-after-after-body-insertion-mode
    AFTER_AFTER_BODY,

    /// @see https://html.spec.whatwg.org/#the-after-after-frameset-insertion-mode
    AFTER_AFTER_FRAMESET,
}
