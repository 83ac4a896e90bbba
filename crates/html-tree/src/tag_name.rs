use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Tag of an element, resolved from its source name.
///
/// The known set covers every HTML element the tree constructor dispatches
/// on plus the SVG and MathML names the foreign-content rules reference.
/// Anything else is carried as `Arbitrary` with its ASCII-lowercased name,
/// so unknown elements survive in the tree with their identity intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagName {
    HTML,
    HEAD,
    TITLE,
    BASE,
    LINK,
    META,
    STYLE,
    SCRIPT,
    NOSCRIPT,
    TEMPLATE,
    BODY,
    ARTICLE,
    SECTION,
    NAV,
    ASIDE,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    HGROUP,
    HEADER,
    FOOTER,
    ADDRESS,
    P,
    HR,
    PRE,
    BLOCKQUOTE,
    OL,
    UL,
    LI,
    DL,
    DT,
    DD,
    FIGURE,
    FIGCAPTION,
    MAIN,
    DIV,
    A,
    EM,
    STRONG,
    SMALL,
    S,
    CITE,
    Q,
    DFN,
    ABBR,
    DATA,
    TIME,
    CODE,
    VAR,
    SAMP,
    KBD,
    SUB,
    SUP,
    I,
    B,
    U,
    MARK,
    RUBY,
    RT,
    RP,
    BDI,
    BDO,
    SPAN,
    BR,
    WBR,
    INS,
    DEL,
    IMAGE,
    IMG,
    IFRAME,
    EMBED,
    OBJECT,
    PARAM,
    VIDEO,
    AUDIO,
    SOURCE,
    TRACK,
    CANVAS,
    MAP,
    AREA,
    MATH,
    MI,
    MO,
    MN,
    MS,
    MTEXT,
    MGLYPH,
    MALIGNMARK,
    ANNOTATION_XML,
    SVG,
    FOREIGNOBJECT,
    DESC,
    TABLE,
    CAPTION,
    COLGROUP,
    COL,
    TBODY,
    THEAD,
    TFOOT,
    TR,
    TD,
    TH,
    FORM,
    FIELDSET,
    LEGEND,
    LABEL,
    INPUT,
    BUTTON,
    SELECT,
    DATALIST,
    OPTGROUP,
    OPTION,
    TEXTAREA,
    KEYGEN,
    OUTPUT,
    PROGRESS,
    METER,
    DETAILS,
    SUMMARY,
    MENU,
    MENUITEM,
    APPLET,
    ACRONYM,
    BGSOUND,
    DIR,
    FRAME,
    FRAMESET,
    NOFRAMES,
    ISINDEX,
    LISTING,
    XMP,
    NEXTID,
    NOEMBED,
    PLAINTEXT,
    RB,
    RTC,
    STRIKE,
    BASEFONT,
    BIG,
    BLINK,
    CENTER,
    FONT,
    MARQUEE,
    MULTICOL,
    NOBR,
    SPACER,
    TT,
    DIALOG,

    /// A tag not in the known set; holds the ASCII-lowercased name.
    Arbitrary(Box<str>),
}

/// Every known variant, used to build the name lookup index.
static ALL_KNOWN: &[TagName] = &[
    TagName::HTML,
    TagName::HEAD,
    TagName::TITLE,
    TagName::BASE,
    TagName::LINK,
    TagName::META,
    TagName::STYLE,
    TagName::SCRIPT,
    TagName::NOSCRIPT,
    TagName::TEMPLATE,
    TagName::BODY,
    TagName::ARTICLE,
    TagName::SECTION,
    TagName::NAV,
    TagName::ASIDE,
    TagName::H1,
    TagName::H2,
    TagName::H3,
    TagName::H4,
    TagName::H5,
    TagName::H6,
    TagName::HGROUP,
    TagName::HEADER,
    TagName::FOOTER,
    TagName::ADDRESS,
    TagName::P,
    TagName::HR,
    TagName::PRE,
    TagName::BLOCKQUOTE,
    TagName::OL,
    TagName::UL,
    TagName::LI,
    TagName::DL,
    TagName::DT,
    TagName::DD,
    TagName::FIGURE,
    TagName::FIGCAPTION,
    TagName::MAIN,
    TagName::DIV,
    TagName::A,
    TagName::EM,
    TagName::STRONG,
    TagName::SMALL,
    TagName::S,
    TagName::CITE,
    TagName::Q,
    TagName::DFN,
    TagName::ABBR,
    TagName::DATA,
    TagName::TIME,
    TagName::CODE,
    TagName::VAR,
    TagName::SAMP,
    TagName::KBD,
    TagName::SUB,
    TagName::SUP,
    TagName::I,
    TagName::B,
    TagName::U,
    TagName::MARK,
    TagName::RUBY,
    TagName::RT,
    TagName::RP,
    TagName::BDI,
    TagName::BDO,
    TagName::SPAN,
    TagName::BR,
    TagName::WBR,
    TagName::INS,
    TagName::DEL,
    TagName::IMAGE,
    TagName::IMG,
    TagName::IFRAME,
    TagName::EMBED,
    TagName::OBJECT,
    TagName::PARAM,
    TagName::VIDEO,
    TagName::AUDIO,
    TagName::SOURCE,
    TagName::TRACK,
    TagName::CANVAS,
    TagName::MAP,
    TagName::AREA,
    TagName::MATH,
    TagName::MI,
    TagName::MO,
    TagName::MN,
    TagName::MS,
    TagName::MTEXT,
    TagName::MGLYPH,
    TagName::MALIGNMARK,
    TagName::ANNOTATION_XML,
    TagName::SVG,
    TagName::FOREIGNOBJECT,
    TagName::DESC,
    TagName::TABLE,
    TagName::CAPTION,
    TagName::COLGROUP,
    TagName::COL,
    TagName::TBODY,
    TagName::THEAD,
    TagName::TFOOT,
    TagName::TR,
    TagName::TD,
    TagName::TH,
    TagName::FORM,
    TagName::FIELDSET,
    TagName::LEGEND,
    TagName::LABEL,
    TagName::INPUT,
    TagName::BUTTON,
    TagName::SELECT,
    TagName::DATALIST,
    TagName::OPTGROUP,
    TagName::OPTION,
    TagName::TEXTAREA,
    TagName::KEYGEN,
    TagName::OUTPUT,
    TagName::PROGRESS,
    TagName::METER,
    TagName::DETAILS,
    TagName::SUMMARY,
    TagName::MENU,
    TagName::MENUITEM,
    TagName::APPLET,
    TagName::ACRONYM,
    TagName::BGSOUND,
    TagName::DIR,
    TagName::FRAME,
    TagName::FRAMESET,
    TagName::NOFRAMES,
    TagName::ISINDEX,
    TagName::LISTING,
    TagName::XMP,
    TagName::NEXTID,
    TagName::NOEMBED,
    TagName::PLAINTEXT,
    TagName::RB,
    TagName::RTC,
    TagName::STRIKE,
    TagName::BASEFONT,
    TagName::BIG,
    TagName::BLINK,
    TagName::CENTER,
    TagName::FONT,
    TagName::MARQUEE,
    TagName::MULTICOL,
    TagName::NOBR,
    TagName::SPACER,
    TagName::TT,
    TagName::DIALOG,
];

fn tag_index() -> &'static FxHashMap<&'static str, &'static TagName> {
    static INDEX: OnceLock<FxHashMap<&'static str, &'static TagName>> = OnceLock::new();
    INDEX.get_or_init(|| {
        ALL_KNOWN
            .iter()
            .map(|tag| (tag.canonical_name(), tag))
            .collect()
    })
}

impl TagName {
    /// Resolves a source tag name, accepting arbitrary-case ASCII.
    pub fn from_bytes(name: &[u8]) -> TagName {
        let lowered = name.to_ascii_lowercase();
        match std::str::from_utf8(&lowered) {
            Ok(lowered) => match tag_index().get(lowered) {
                Some(tag) => (*tag).clone(),
                None => TagName::Arbitrary(lowered.into()),
            },
            // The tokenizer only hands over valid UTF-8; anything else is
            // a caller error represented as an unknown tag.
            Err(_) => TagName::Arbitrary(String::from_utf8_lossy(&lowered).into()),
        }
    }

    /// The normalized lowercase name of this tag.
    pub fn canonical_name(&self) -> &str {
        match self {
            TagName::HTML => "html",
            TagName::HEAD => "head",
            TagName::TITLE => "title",
            TagName::BASE => "base",
            TagName::LINK => "link",
            TagName::META => "meta",
            TagName::STYLE => "style",
            TagName::SCRIPT => "script",
            TagName::NOSCRIPT => "noscript",
            TagName::TEMPLATE => "template",
            TagName::BODY => "body",
            TagName::ARTICLE => "article",
            TagName::SECTION => "section",
            TagName::NAV => "nav",
            TagName::ASIDE => "aside",
            TagName::H1 => "h1",
            TagName::H2 => "h2",
            TagName::H3 => "h3",
            TagName::H4 => "h4",
            TagName::H5 => "h5",
            TagName::H6 => "h6",
            TagName::HGROUP => "hgroup",
            TagName::HEADER => "header",
            TagName::FOOTER => "footer",
            TagName::ADDRESS => "address",
            TagName::P => "p",
            TagName::HR => "hr",
            TagName::PRE => "pre",
            TagName::BLOCKQUOTE => "blockquote",
            TagName::OL => "ol",
            TagName::UL => "ul",
            TagName::LI => "li",
            TagName::DL => "dl",
            TagName::DT => "dt",
            TagName::DD => "dd",
            TagName::FIGURE => "figure",
            TagName::FIGCAPTION => "figcaption",
            TagName::MAIN => "main",
            TagName::DIV => "div",
            TagName::A => "a",
            TagName::EM => "em",
            TagName::STRONG => "strong",
            TagName::SMALL => "small",
            TagName::S => "s",
            TagName::CITE => "cite",
            TagName::Q => "q",
            TagName::DFN => "dfn",
            TagName::ABBR => "abbr",
            TagName::DATA => "data",
            TagName::TIME => "time",
            TagName::CODE => "code",
            TagName::VAR => "var",
            TagName::SAMP => "samp",
            TagName::KBD => "kbd",
            TagName::SUB => "sub",
            TagName::SUP => "sup",
            TagName::I => "i",
            TagName::B => "b",
            TagName::U => "u",
            TagName::MARK => "mark",
            TagName::RUBY => "ruby",
            TagName::RT => "rt",
            TagName::RP => "rp",
            TagName::BDI => "bdi",
            TagName::BDO => "bdo",
            TagName::SPAN => "span",
            TagName::BR => "br",
            TagName::WBR => "wbr",
            TagName::INS => "ins",
            TagName::DEL => "del",
            TagName::IMAGE => "image",
            TagName::IMG => "img",
            TagName::IFRAME => "iframe",
            TagName::EMBED => "embed",
            TagName::OBJECT => "object",
            TagName::PARAM => "param",
            TagName::VIDEO => "video",
            TagName::AUDIO => "audio",
            TagName::SOURCE => "source",
            TagName::TRACK => "track",
            TagName::CANVAS => "canvas",
            TagName::MAP => "map",
            TagName::AREA => "area",
            TagName::MATH => "math",
            TagName::MI => "mi",
            TagName::MO => "mo",
            TagName::MN => "mn",
            TagName::MS => "ms",
            TagName::MTEXT => "mtext",
            TagName::MGLYPH => "mglyph",
            TagName::MALIGNMARK => "malignmark",
            TagName::ANNOTATION_XML => "annotation-xml",
            TagName::SVG => "svg",
            TagName::FOREIGNOBJECT => "foreignobject",
            TagName::DESC => "desc",
            TagName::TABLE => "table",
            TagName::CAPTION => "caption",
            TagName::COLGROUP => "colgroup",
            TagName::COL => "col",
            TagName::TBODY => "tbody",
            TagName::THEAD => "thead",
            TagName::TFOOT => "tfoot",
            TagName::TR => "tr",
            TagName::TD => "td",
            TagName::TH => "th",
            TagName::FORM => "form",
            TagName::FIELDSET => "fieldset",
            TagName::LEGEND => "legend",
            TagName::LABEL => "label",
            TagName::INPUT => "input",
            TagName::BUTTON => "button",
            TagName::SELECT => "select",
            TagName::DATALIST => "datalist",
            TagName::OPTGROUP => "optgroup",
            TagName::OPTION => "option",
            TagName::TEXTAREA => "textarea",
            TagName::KEYGEN => "keygen",
            TagName::OUTPUT => "output",
            TagName::PROGRESS => "progress",
            TagName::METER => "meter",
            TagName::DETAILS => "details",
            TagName::SUMMARY => "summary",
            TagName::MENU => "menu",
            TagName::MENUITEM => "menuitem",
            TagName::APPLET => "applet",
            TagName::ACRONYM => "acronym",
            TagName::BGSOUND => "bgsound",
            TagName::DIR => "dir",
            TagName::FRAME => "frame",
            TagName::FRAMESET => "frameset",
            TagName::NOFRAMES => "noframes",
            TagName::ISINDEX => "isindex",
            TagName::LISTING => "listing",
            TagName::XMP => "xmp",
            TagName::NEXTID => "nextid",
            TagName::NOEMBED => "noembed",
            TagName::PLAINTEXT => "plaintext",
            TagName::RB => "rb",
            TagName::RTC => "rtc",
            TagName::STRIKE => "strike",
            TagName::BASEFONT => "basefont",
            TagName::BIG => "big",
            TagName::BLINK => "blink",
            TagName::CENTER => "center",
            TagName::FONT => "font",
            TagName::MARQUEE => "marquee",
            TagName::MULTICOL => "multicol",
            TagName::NOBR => "nobr",
            TagName::SPACER => "spacer",
            TagName::TT => "tt",
            TagName::DIALOG => "dialog",
            TagName::Arbitrary(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TagName::Arbitrary(_))
    }

    /// One of the `h1` through `h6` heading tags.
    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            TagName::H1 | TagName::H2 | TagName::H3 | TagName::H4 | TagName::H5 | TagName::H6
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn resolves_arbitrary_case() {
        assert_eq!(TagName::from_bytes(b"div"), TagName::DIV);
        assert_eq!(TagName::from_bytes(b"DIV"), TagName::DIV);
        assert_eq!(TagName::from_bytes(b"dIv"), TagName::DIV);
        assert_eq!(TagName::from_bytes(b"annotation-xml"), TagName::ANNOTATION_XML);
    }

    #[test]
    fn unknown_tags_keep_their_name() {
        let tag = TagName::from_bytes(b"X-Custom-Widget");
        assert_eq!(tag, TagName::Arbitrary("x-custom-widget".into()));
        assert_eq!(tag.canonical_name(), "x-custom-widget");
        assert!(!tag.is_known());
    }

    #[test]
    fn every_known_tag_round_trips() {
        for tag in ALL_KNOWN {
            let resolved = TagName::from_bytes(tag.canonical_name().as_bytes());
            assert_eq!(&resolved, tag, "round trip failed for {:?}", tag);
        }
    }
}
