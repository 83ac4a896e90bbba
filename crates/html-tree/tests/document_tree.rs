use html_tree::{
    parse, parse_with_options, CompatMode, ErrorType, NodeId, NodeKind, Output, ParseOptions,
    SourcePosition, TagName,
};

fn element_children(output: &Output, parent: NodeId) -> Vec<NodeId> {
    output
        .node(parent)
        .children()
        .iter()
        .copied()
        .filter(|&child| output.node(child).as_element().is_some())
        .collect()
}

fn only_element_child(output: &Output, parent: NodeId, tag: TagName) -> NodeId {
    let children = element_children(output, parent);
    assert_eq!(
        children.len(),
        1,
        "expected exactly one element child, found {:?}",
        children
            .iter()
            .map(|&child| output.node(child).as_element().unwrap().tag.clone())
            .collect::<Vec<_>>()
    );
    let child = children[0];
    assert_eq!(output.node(child).as_element().unwrap().tag, tag);
    child
}

fn body_of(output: &Output) -> NodeId {
    let root = output.root.expect("an html element always exists");
    assert_eq!(output.node(root).as_element().unwrap().tag, TagName::HTML);
    *element_children(output, root)
        .iter()
        .find(|&&child| output.node(child).as_element().unwrap().tag == TagName::BODY)
        .expect("a body element always exists")
}

fn text_of(output: &Output, node: NodeId) -> String {
    output
        .node(node)
        .children()
        .iter()
        .filter_map(|&child| match &output.node(child).kind {
            NodeKind::Text(text) | NodeKind::Whitespace(text) => Some(text.text.as_ref()),
            _ => None,
        })
        .collect()
}

#[test]
fn well_formed_document() {
    let output = parse(b"<!DOCTYPE html><html><body><p>Hello</p></body></html>");

    let document = output.document_data();
    assert!(document.has_doctype);
    assert_eq!(document.name.as_ref(), "html");
    assert_eq!(document.compat_mode, CompatMode::NoQuirks);

    let body = body_of(&output);
    let p = only_element_child(&output, body, TagName::P);

    let children = output.node(p).children();
    assert_eq!(children.len(), 1);
    match &output.node(children[0]).kind {
        NodeKind::Text(text) => assert_eq!(text.text.as_ref(), "Hello"),
        other => panic!("expected a text node, got {:?}", other),
    }

    assert!(output.errors.is_empty(), "unexpected: {:?}", output.errors);
}

#[test]
fn unclosed_paragraph_closes_implicitly() {
    let output = parse(b"<p>unclosed");

    let body = body_of(&output);
    let p = only_element_child(&output, body, TagName::P);
    assert_eq!(text_of(&output, p), "unclosed");

    // The missing DOCTYPE selects quirks mode but is not a diagnostic, and
    // the implicit close of the paragraph at EOF is spec-legal.
    assert_eq!(output.document_data().compat_mode, CompatMode::Quirks);
    assert!(output.errors.is_empty(), "unexpected: {:?}", output.errors);
}

#[test]
fn table_cells_get_an_implied_tbody() {
    let output = parse(b"<table><tr><td>a<td>b</tr></table>");

    let body = body_of(&output);
    let table = only_element_child(&output, body, TagName::TABLE);
    let tbody = only_element_child(&output, table, TagName::TBODY);
    let tr = only_element_child(&output, tbody, TagName::TR);

    let cells = element_children(&output, tr);
    assert_eq!(cells.len(), 2);
    for &cell in &cells {
        assert_eq!(output.node(cell).as_element().unwrap().tag, TagName::TD);
    }
    assert_eq!(text_of(&output, cells[0]), "a");
    assert_eq!(text_of(&output, cells[1]), "b");
}

#[test]
fn adoption_agency_untangles_misnested_formatting() {
    let output = parse(b"<b>1<i>2</b>3</i>");

    let body = body_of(&output);
    let children = element_children(&output, body);
    assert_eq!(children.len(), 2);

    let b = children[0];
    assert_eq!(output.node(b).as_element().unwrap().tag, TagName::B);
    let b_children = output.node(b).children();
    assert_eq!(b_children.len(), 2);
    match &output.node(b_children[0]).kind {
        NodeKind::Text(text) => assert_eq!(text.text.as_ref(), "1"),
        other => panic!("expected text, got {:?}", other),
    }
    let inner_i = b_children[1];
    assert_eq!(output.node(inner_i).as_element().unwrap().tag, TagName::I);
    assert_eq!(text_of(&output, inner_i), "2");

    let outer_i = children[1];
    assert_eq!(output.node(outer_i).as_element().unwrap().tag, TagName::I);
    assert_eq!(text_of(&output, outer_i), "3");
}

#[test]
fn character_references_in_text() {
    let output = parse(b"A&amp;B&#x41;C&notavalidentity;D");

    let body = body_of(&output);
    let children = output.node(body).children();
    assert_eq!(children.len(), 1, "all characters join one text node");
    assert_eq!(text_of(&output, body), "A&BAC\u{00AC}avalidentity;D");

    // One diagnostic: the legacy `&not` consumed without its semicolon.
    assert_eq!(output.errors.len(), 1, "got: {:?}", output.errors);
    let error = &output.errors[0];
    assert!(matches!(
        error.error,
        ErrorType::NamedCharRefWithoutSemicolon { .. }
    ));
    assert_eq!(
        error.position,
        SourcePosition {
            line: 1,
            column: 15,
            offset: 14,
        }
    );
    assert_eq!(error.original_text.of(&output.html), b"&not");
}

#[test]
fn lone_less_than_is_literal_text() {
    let output = parse(b"<\n");

    let body = body_of(&output);
    let children = output.node(body).children();
    assert_eq!(children.len(), 1);
    match &output.node(children[0]).kind {
        NodeKind::Text(text) => {
            assert_eq!(text.text.as_ref(), "<\n");
            assert_eq!(
                text.start_position,
                SourcePosition {
                    line: 1,
                    column: 1,
                    offset: 0,
                }
            );
        }
        other => panic!("expected text, got {:?}", other),
    }
}

#[test]
fn whitespace_only_text_is_classified() {
    let output = parse(b"<div>  \n\t</div><p>x</p>");
    let body = body_of(&output);
    let div = element_children(&output, body)[0];
    let children = output.node(div).children();
    assert_eq!(children.len(), 1);
    assert!(matches!(
        output.node(children[0]).kind,
        NodeKind::Whitespace(_)
    ));
}

#[test]
fn quirks_mode_from_legacy_doctype() {
    let output = parse(b"<!DOCTYPE html PUBLIC \"-//W3C//DTD HTML 3.2 Final//EN\"><p>x");
    assert_eq!(output.document_data().compat_mode, CompatMode::Quirks);
    assert_eq!(
        output.document_data().public_identifier.as_ref(),
        "-//W3C//DTD HTML 3.2 Final//EN"
    );
}

#[test]
fn script_content_stays_raw() {
    let output = parse(b"<script>if (a<b) document.write('<p>');</script>");
    let root = output.root.unwrap();
    let head = element_children(&output, root)[0];
    let script = only_element_child(&output, head, TagName::SCRIPT);
    assert_eq!(text_of(&output, script), "if (a<b) document.write('<p>');");
}

#[test]
fn foster_parenting_moves_stray_table_text() {
    let output = parse(b"<table>oops<tr><td>x</td></tr></table>");

    let body = body_of(&output);
    let children = output.node(body).children();

    // The stray text lands before the table, not inside it.
    assert!(matches!(&output.node(children[0]).kind, NodeKind::Text(text) if text.text.as_ref() == "oops"));
    let table = children[1];
    assert_eq!(output.node(table).as_element().unwrap().tag, TagName::TABLE);

    // And the table still holds its legitimate row.
    let tbody = only_element_child(&output, table, TagName::TBODY);
    let tr = only_element_child(&output, tbody, TagName::TR);
    let td = only_element_child(&output, tr, TagName::TD);
    assert_eq!(text_of(&output, td), "x");
}

#[test]
fn foreign_content_svg() {
    let output = parse(b"<svg viewbox='0 0 1 1'><circle/><foreignObject><p>hi</p></foreignObject></svg>");

    let body = body_of(&output);
    let svg = element_children(&output, body)[0];
    let svg_element = output.node(svg).as_element().unwrap();
    assert_eq!(svg_element.tag, TagName::SVG);
    assert_eq!(
        svg_element.namespace,
        html_tree::ParsingNamespace::Svg
    );
    // The SVG attribute fixup restores camelCase.
    assert_eq!(svg_element.attributes[0].name.as_ref(), "viewBox");

    let svg_children = element_children(&output, svg);
    assert_eq!(svg_children.len(), 2);
    let circle = output.node(svg_children[0]).as_element().unwrap();
    assert_eq!(circle.tag, TagName::Arbitrary("circle".into()));

    // HTML parses normally inside the integration point.
    let foreign_object = svg_children[1];
    let p = only_element_child(&output, foreign_object, TagName::P);
    assert_eq!(text_of(&output, p), "hi");
}

#[test]
fn unknown_elements_keep_their_name() {
    let output = parse(b"<x-widget data-a=1>inside</x-widget>");
    let body = body_of(&output);
    let widget = element_children(&output, body)[0];
    let element = output.node(widget).as_element().unwrap();
    assert_eq!(element.tag, TagName::Arbitrary("x-widget".into()));
    assert_eq!(text_of(&output, widget), "inside");
}

#[test]
fn stop_on_first_error_returns_partial_tree() {
    let options = ParseOptions {
        stop_on_first_error: true,
        ..ParseOptions::default()
    };
    let output = parse_with_options(&options, b"<p>one</p><p id=1 id=2>two</p><p>three</p>");

    assert!(output.stopped_early);
    assert_eq!(output.errors.len(), 1);
}

#[test]
fn max_errors_caps_diagnostics() {
    let options = ParseOptions {
        max_errors: Some(2),
        ..ParseOptions::default()
    };
    let output = parse_with_options(
        &options,
        b"<a id=1 id=2></a><a id=1 id=2></a><a id=1 id=2></a>",
    );
    assert_eq!(output.errors.len(), 2);
    assert!(!output.stopped_early);
}

#[test]
fn original_spans_point_into_the_input() {
    let html = b"<!DOCTYPE html><body class=\"x\"><p>text &amp; more</p><!-- note -->";
    let output = parse(html);

    let mut stack = vec![output.document];
    while let Some(id) = stack.pop() {
        let node = output.node(id);
        match &node.kind {
            NodeKind::Element(element) => {
                assert!(element.original_tag.end() <= html.len());
                for attribute in &element.attributes {
                    assert!(attribute.original_name.end() <= html.len());
                    assert!(attribute.original_value.end() <= html.len());
                }
            }
            NodeKind::Text(text)
            | NodeKind::Whitespace(text)
            | NodeKind::CdataSection(text)
            | NodeKind::Comment(text) => {
                assert!(text.original_text.end() <= html.len());
            }
            NodeKind::Document(_) => {}
        }
        stack.extend(node.children().iter().copied());
    }

    let body = body_of(&output);
    let element = output.node(body).as_element().unwrap();
    assert_eq!(element.original_tag.of(html), b"<body class=\"x\">");
    assert_eq!(element.attributes[0].original_value.of(html), b"x");
}

#[test]
fn parent_child_links_agree() {
    let output = parse(
        b"<!DOCTYPE html><div><p>a</p><p>b<span>c</span></p></div><table><td>x</td></table>",
    );

    let mut stack = vec![output.document];
    while let Some(id) = stack.pop() {
        let node = output.node(id);
        for (index, &child) in node.children().iter().enumerate() {
            let child_node = output.node(child);
            assert_eq!(child_node.parent, Some(id));
            assert_eq!(child_node.index_within_parent, index);
        }
        stack.extend(node.children().iter().copied());
    }
}

mod properties {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn tree_is_consistent(output: &Output) -> bool {
        let mut stack = vec![output.document];
        while let Some(id) = stack.pop() {
            let node = output.node(id);
            for (index, &child) in node.children().iter().enumerate() {
                let child_node = output.node(child);
                if child_node.parent != Some(id) || child_node.index_within_parent != index {
                    return false;
                }
            }
            match &node.kind {
                NodeKind::Element(element) => {
                    if element.original_tag.end() > output.html.len() {
                        return false;
                    }
                }
                NodeKind::Text(text)
                | NodeKind::Whitespace(text)
                | NodeKind::CdataSection(text)
                | NodeKind::Comment(text) => {
                    if text.original_text.end() > output.html.len() {
                        return false;
                    }
                }
                NodeKind::Document(_) => {}
            }
            stack.extend(node.children().iter().copied());
        }
        true
    }

    #[quickcheck]
    fn arbitrary_text_parses_into_a_consistent_tree(input: String) -> bool {
        let output = parse(input.as_bytes());
        tree_is_consistent(&output)
    }

    #[quickcheck]
    fn arbitrary_bytes_parse_into_a_consistent_tree(input: Vec<u8>) -> bool {
        let output = parse(&input);
        tree_is_consistent(&output)
    }

    #[quickcheck]
    fn errors_never_exceed_the_cap(input: String, cap: usize) -> bool {
        let cap = cap % 8;
        let options = ParseOptions {
            max_errors: Some(cap),
            ..ParseOptions::default()
        };
        let output = parse_with_options(&options, input.as_bytes());
        output.errors.len() <= cap
    }

    #[quickcheck]
    fn parsing_is_deterministic(input: String) -> bool {
        let first = parse(input.as_bytes());
        let second = parse(input.as_bytes());
        first.arena.len() == second.arena.len() && first.errors == second.errors
    }
}
