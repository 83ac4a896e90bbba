use crate::node::{Attribute, AttributeNamespace, ParsingNamespace};

/// Adjusts the attributes of a freshly created foreign element.
///
/// Inside SVG and MathML content three separate fixups apply, combining the
/// specification's "adjust SVG attributes", "adjust MathML attributes", and
/// "adjust foreign attributes" steps:
///
///  - the `xlink:*`, `xml:*`, and `xmlns` families move into their proper
///    namespaces;
///  - SVG attributes written in lowercase regain their camelCase form;
///  - MathML's `definitionurl` becomes `definitionURL`.
///
/// HTML elements are never adjusted.
///
/// @see https://html.spec.whatwg.org/#adjust-foreign-attributes
pub(crate) fn adjust_foreign_attributes(
    attributes: &mut [Attribute],
    namespace: ParsingNamespace,
) {
    if namespace == ParsingNamespace::Html {
        return;
    }

    for attribute in attributes.iter_mut() {
        let adjusted_namespace = match attribute.name.as_ref() {
            "xlink:actuate" | "xlink:arcrole" | "xlink:href" | "xlink:role" | "xlink:show"
            | "xlink:title" | "xlink:type" => Some(AttributeNamespace::XLink),
            "xml:base" | "xml:lang" | "xml:space" => Some(AttributeNamespace::Xml),
            "xmlns" | "xmlns:xlink" => Some(AttributeNamespace::Xmlns),
            _ => None,
        };
        if let Some(adjusted_namespace) = adjusted_namespace {
            attribute.namespace = adjusted_namespace;
            continue;
        }

        let corrected = match namespace {
            ParsingNamespace::MathML => match attribute.name.as_ref() {
                "definitionurl" => Some("definitionURL"),
                _ => None,
            },
            ParsingNamespace::Svg => svg_attribute_case(attribute.name.as_ref()),
            ParsingNamespace::Html => unreachable!(),
        };
        if let Some(corrected) = corrected {
            attribute.name = corrected.into();
        }
    }
}

/// Restores the camelCase spelling of an SVG attribute name, if it has one.
///
/// @see https://html.spec.whatwg.org/#adjust-svg-attributes
fn svg_attribute_case(lowercase_name: &str) -> Option<&'static str> {
    Some(match lowercase_name {
        "attributename" => "attributeName",
        "attributetype" => "attributeType",
        "basefrequency" => "baseFrequency",
        "baseprofile" => "baseProfile",
        "calcmode" => "calcMode",
        "clippathunits" => "clipPathUnits",
        "diffuseconstant" => "diffuseConstant",
        "edgemode" => "edgeMode",
        "filterunits" => "filterUnits",
        "glyphref" => "glyphRef",
        "gradienttransform" => "gradientTransform",
        "gradientunits" => "gradientUnits",
        "kernelmatrix" => "kernelMatrix",
        "kernelunitlength" => "kernelUnitLength",
        "keypoints" => "keyPoints",
        "keysplines" => "keySplines",
        "keytimes" => "keyTimes",
        "lengthadjust" => "lengthAdjust",
        "limitingconeangle" => "limitingConeAngle",
        "markerheight" => "markerHeight",
        "markerunits" => "markerUnits",
        "markerwidth" => "markerWidth",
        "maskcontentunits" => "maskContentUnits",
        "maskunits" => "maskUnits",
        "numoctaves" => "numOctaves",
        "pathlength" => "pathLength",
        "patterncontentunits" => "patternContentUnits",
        "patterntransform" => "patternTransform",
        "patternunits" => "patternUnits",
        "pointsatx" => "pointsAtX",
        "pointsaty" => "pointsAtY",
        "pointsatz" => "pointsAtZ",
        "preservealpha" => "preserveAlpha",
        "preserveaspectratio" => "preserveAspectRatio",
        "primitiveunits" => "primitiveUnits",
        "refx" => "refX",
        "refy" => "refY",
        "repeatcount" => "repeatCount",
        "repeatdur" => "repeatDur",
        "requiredextensions" => "requiredExtensions",
        "requiredfeatures" => "requiredFeatures",
        "specularconstant" => "specularConstant",
        "specularexponent" => "specularExponent",
        "spreadmethod" => "spreadMethod",
        "startoffset" => "startOffset",
        "stddeviation" => "stdDeviation",
        "stitchtiles" => "stitchTiles",
        "surfacescale" => "surfaceScale",
        "systemlanguage" => "systemLanguage",
        "tablevalues" => "tableValues",
        "targetx" => "targetX",
        "targety" => "targetY",
        "textlength" => "textLength",
        "viewbox" => "viewBox",
        "viewtarget" => "viewTarget",
        "xchannelselector" => "xChannelSelector",
        "ychannelselector" => "yChannelSelector",
        "zoomandpan" => "zoomAndPan",
        _ => return None,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::node::{SourcePosition, Span};

    fn attribute(name: &str) -> Attribute {
        Attribute {
            name: name.into(),
            value: "".into(),
            namespace: AttributeNamespace::None,
            original_name: Span::default(),
            original_value: Span::default(),
            name_position: SourcePosition::default(),
            value_position: SourcePosition::default(),
        }
    }

    #[test]
    fn xlink_attributes_gain_their_namespace() {
        let mut attributes = vec![attribute("xlink:href"), attribute("href")];
        adjust_foreign_attributes(&mut attributes, ParsingNamespace::Svg);
        assert_eq!(attributes[0].namespace, AttributeNamespace::XLink);
        assert_eq!(attributes[1].namespace, AttributeNamespace::None);
    }

    #[test]
    fn svg_camel_case_is_restored() {
        let mut attributes = vec![attribute("viewbox"), attribute("class")];
        adjust_foreign_attributes(&mut attributes, ParsingNamespace::Svg);
        assert_eq!(attributes[0].name.as_ref(), "viewBox");
        assert_eq!(attributes[1].name.as_ref(), "class");
    }

    #[test]
    fn mathml_definitionurl_is_corrected() {
        let mut attributes = vec![attribute("definitionurl")];
        adjust_foreign_attributes(&mut attributes, ParsingNamespace::MathML);
        assert_eq!(attributes[0].name.as_ref(), "definitionURL");

        // The SVG fixup must not apply the MathML rename.
        let mut attributes = vec![attribute("definitionurl")];
        adjust_foreign_attributes(&mut attributes, ParsingNamespace::Svg);
        assert_eq!(attributes[0].name.as_ref(), "definitionurl");
    }

    #[test]
    fn html_attributes_are_left_alone() {
        let mut attributes = vec![attribute("xlink:href"), attribute("viewbox")];
        adjust_foreign_attributes(&mut attributes, ParsingNamespace::Html);
        assert_eq!(attributes[0].namespace, AttributeNamespace::None);
        assert_eq!(attributes[1].name.as_ref(), "viewbox");
    }
}
