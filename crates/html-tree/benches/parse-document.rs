use html_tree::parse;

fn main() {
    divan::main();
}

/// A medium-sized synthetic document exercising tables, formatting
/// elements, character references, and raw-text content.
fn synthesize_document() -> Vec<u8> {
    let mut html = String::from(
        "<!DOCTYPE html><html><head><title>bench &amp; measure</title>\
         <style>p { color: red; }</style></head><body>",
    );
    for section in 0..50 {
        html.push_str(&format!("<section id=\"s{section}\"><h2>Section {section}</h2>"));
        for row in 0..10 {
            html.push_str(&format!(
                "<p class=\"row\">Row {row} has <b>bold <i>and italic</b> text</i> \
                 plus &copy; references.</p>"
            ));
        }
        html.push_str("<table><tr><td>a<td>b<tr><td>c<td>d</table></section>");
    }
    html.push_str("</body></html>");
    html.into_bytes()
}

#[divan::bench]
fn bench_parse_synthetic_document(bencher: divan::Bencher) {
    let input = synthesize_document();

    bencher.bench(|| {
        let output = parse(&input);
        divan::black_box(output.arena.len())
    });
}
