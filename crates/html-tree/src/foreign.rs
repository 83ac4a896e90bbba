use crate::node::{Attribute, ParsingNamespace};
use crate::tag_name::TagName;

/// Restores the camelCase spelling of an SVG element name.
///
/// The tokenizer lowercases every tag name; inside SVG content a fixed set
/// of element names must regain their mixed-case form. The corrected name
/// is carried on the element as an `Arbitrary` tag since the mixed-case
/// names are not part of the known-tag set.
///
/// @see https://html.spec.whatwg.org/#parsing-main-inforeign
pub(crate) fn svg_tag_case(lowercase_name: &str) -> Option<&'static str> {
    Some(match lowercase_name {
        "altglyph" => "altGlyph",
        "altglyphdef" => "altGlyphDef",
        "altglyphitem" => "altGlyphItem",
        "animatecolor" => "animateColor",
        "animatemotion" => "animateMotion",
        "animatetransform" => "animateTransform",
        "clippath" => "clipPath",
        "feblend" => "feBlend",
        "fecolormatrix" => "feColorMatrix",
        "fecomponenttransfer" => "feComponentTransfer",
        "fecomposite" => "feComposite",
        "feconvolvematrix" => "feConvolveMatrix",
        "fediffuselighting" => "feDiffuseLighting",
        "fedisplacementmap" => "feDisplacementMap",
        "fedistantlight" => "feDistantLight",
        "fedropshadow" => "feDropShadow",
        "feflood" => "feFlood",
        "fefunca" => "feFuncA",
        "fefuncb" => "feFuncB",
        "fefuncg" => "feFuncG",
        "fefuncr" => "feFuncR",
        "fegaussianblur" => "feGaussianBlur",
        "feimage" => "feImage",
        "femerge" => "feMerge",
        "femergenode" => "feMergeNode",
        "femorphology" => "feMorphology",
        "feoffset" => "feOffset",
        "fepointlight" => "fePointLight",
        "fespecularlighting" => "feSpecularLighting",
        "fespotlight" => "feSpotLight",
        "fetile" => "feTile",
        "feturbulence" => "feTurbulence",
        "foreignobject" => "foreignObject",
        "glyphref" => "glyphRef",
        "lineargradient" => "linearGradient",
        "radialgradient" => "radialGradient",
        "textpath" => "textPath",
        _ => return None,
    })
}

/// Start tags which break out of foreign content back into HTML.
///
/// > If the stack of open elements has a *font* element in scope whose
/// > attributes include "color", "face", or "size", or any of the
/// > following: …then pop elements from the stack of open elements until
/// > an HTML integration point or an element in the HTML namespace is the
/// > current node.
///
/// @see https://html.spec.whatwg.org/#parsing-main-inforeign
pub(crate) fn is_html_breakout_tag(tag: &TagName, attributes: &[Attribute]) -> bool {
    match tag {
        TagName::B
        | TagName::BIG
        | TagName::BLOCKQUOTE
        | TagName::BODY
        | TagName::BR
        | TagName::CENTER
        | TagName::CODE
        | TagName::DD
        | TagName::DIV
        | TagName::DL
        | TagName::DT
        | TagName::EM
        | TagName::EMBED
        | TagName::H1
        | TagName::H2
        | TagName::H3
        | TagName::H4
        | TagName::H5
        | TagName::H6
        | TagName::HEAD
        | TagName::HR
        | TagName::I
        | TagName::IMG
        | TagName::LI
        | TagName::LISTING
        | TagName::MENU
        | TagName::META
        | TagName::NOBR
        | TagName::OL
        | TagName::P
        | TagName::PRE
        | TagName::RUBY
        | TagName::S
        | TagName::SMALL
        | TagName::SPAN
        | TagName::STRONG
        | TagName::STRIKE
        | TagName::SUB
        | TagName::SUP
        | TagName::TABLE
        | TagName::TT
        | TagName::U
        | TagName::UL
        | TagName::VAR => true,

        TagName::FONT => attributes.iter().any(|attribute| {
            matches!(attribute.name.as_ref(), "color" | "face" | "size")
        }),

        _ => false,
    }
}

/// > A node is a MathML text integration point if it is one of the
/// > following elements: mi, mo, mn, ms, mtext (in the MathML namespace).
///
/// @see https://html.spec.whatwg.org/#mathml-text-integration-point
pub(crate) fn is_mathml_text_integration_point(
    tag: &TagName,
    namespace: ParsingNamespace,
) -> bool {
    namespace == ParsingNamespace::MathML
        && matches!(
            tag,
            TagName::MI | TagName::MO | TagName::MN | TagName::MS | TagName::MTEXT
        )
}

/// > A node is an HTML integration point if it is one of the following:
/// > an annotation-xml element whose encoding is "text/html" or
/// > "application/xhtml+xml"; an svg foreignObject, desc, or title element.
///
/// @see https://html.spec.whatwg.org/#html-integration-point
pub(crate) fn is_html_integration_point(
    tag: &TagName,
    namespace: ParsingNamespace,
    attributes: &[Attribute],
) -> bool {
    match namespace {
        ParsingNamespace::MathML => {
            *tag == TagName::ANNOTATION_XML
                && attributes.iter().any(|attribute| {
                    attribute.name.as_ref() == "encoding"
                        && (attribute.value.eq_ignore_ascii_case("text/html")
                            || attribute.value.eq_ignore_ascii_case("application/xhtml+xml"))
                })
        }
        ParsingNamespace::Svg => matches!(
            tag,
            TagName::FOREIGNOBJECT | TagName::DESC | TagName::TITLE
        ),
        ParsingNamespace::Html => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::{AttributeNamespace, SourcePosition, Span};

    fn attribute(name: &str, value: &str) -> Attribute {
        Attribute {
            name: name.into(),
            value: value.into(),
            namespace: AttributeNamespace::None,
            original_name: Span::default(),
            original_value: Span::default(),
            name_position: SourcePosition::default(),
            value_position: SourcePosition::default(),
        }
    }

    #[test]
    fn svg_element_names_regain_case() {
        assert_eq!(svg_tag_case("foreignobject"), Some("foreignObject"));
        assert_eq!(svg_tag_case("lineargradient"), Some("linearGradient"));
        assert_eq!(svg_tag_case("circle"), None);
    }

    #[test]
    fn font_breaks_out_only_with_styling_attributes() {
        assert!(!is_html_breakout_tag(&TagName::FONT, &[]));
        assert!(!is_html_breakout_tag(
            &TagName::FONT,
            &[attribute("id", "x")]
        ));
        assert!(is_html_breakout_tag(
            &TagName::FONT,
            &[attribute("color", "red")]
        ));
        assert!(is_html_breakout_tag(&TagName::P, &[]));

        let circle = TagName::Arbitrary("circle".into());
        assert!(!is_html_breakout_tag(&circle, &[]));
    }

    #[test]
    fn annotation_xml_integration_depends_on_encoding() {
        let html_encoding = [attribute("encoding", "Text/HTML")];
        assert!(is_html_integration_point(
            &TagName::ANNOTATION_XML,
            ParsingNamespace::MathML,
            &html_encoding
        ));

        let other_encoding = [attribute("encoding", "text/xml")];
        assert!(!is_html_integration_point(
            &TagName::ANNOTATION_XML,
            ParsingNamespace::MathML,
            &other_encoding
        ));

        assert!(is_html_integration_point(
            &TagName::FOREIGNOBJECT,
            ParsingNamespace::Svg,
            &[]
        ));
    }

    #[test]
    fn mathml_text_integration_points() {
        assert!(is_mathml_text_integration_point(
            &TagName::MI,
            ParsingNamespace::MathML
        ));
        assert!(!is_mathml_text_integration_point(
            &TagName::MI,
            ParsingNamespace::Html
        ));
        assert!(!is_mathml_text_integration_point(
            &TagName::MATH,
            ParsingNamespace::MathML
        ));
    }
}
