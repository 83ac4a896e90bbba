use html_tree::{parse, NodeKind};
use std::fs;

/// Parses a file named on the command line and prints a node census with
/// any diagnostics. A quick way to eyeball the parser against real pages.
pub fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./html-standard.html".to_string());
    let html = fs::read(&path).expect("Missing input!");

    let output = parse(&html);

    let mut elements = 0u32;
    let mut text_nodes = 0u32;
    let mut comments = 0u32;
    let mut stack = vec![output.document];
    while let Some(id) = stack.pop() {
        let node = output.node(id);
        match &node.kind {
            NodeKind::Element(_) => elements += 1,
            NodeKind::Text(_) | NodeKind::Whitespace(_) | NodeKind::CdataSection(_) => {
                text_nodes += 1
            }
            NodeKind::Comment(_) => comments += 1,
            NodeKind::Document(_) => {}
        }
        stack.extend(node.children().iter().copied());
    }

    for error in &output.errors {
        println!("{error}");
    }

    println!(
        "Parsed {path}: {elements} elements, {text_nodes} text nodes, {comments} comments, {} errors",
        output.errors.len()
    );
}
