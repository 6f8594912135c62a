#![no_main]

use html::{Document, StructuralError};
use libfuzzer_sys::fuzz_target;

const TAGS: [&str; 6] = ["div", "span", "br", "img", "p", "meta"];

// Each input byte drives one builder step; text payloads are slices of the
// input interpreted lossily as UTF-8.
fn drive(doc: &mut Document, ops: &[u8], text: &str, depth: usize) -> Result<(), StructuralError> {
    let Some((&op, rest)) = ops.split_first() else {
        return Ok(());
    };
    match op % 5 {
        0 => {
            let el = doc.create_element(TAGS[op as usize % TAGS.len()])?;
            if depth < 64 {
                doc.within(el, |doc| drive(doc, rest, text, depth + 1))?;
                return Ok(());
            }
        }
        1 => {
            doc.add_text(text)?;
        }
        2 => {
            doc.set_attribute("data-x", text)?;
        }
        3 => {
            doc.create_element_with("a", [("title", text)], Some(text))?;
        }
        _ => {
            doc.add_raw("<!-- raw -->")?;
        }
    }
    drive(doc, rest, text, depth)
}

fuzz_target!(|data: &[u8]| {
    let split = data.len() / 2;
    let (ops, payload) = data.split_at(split);
    let text = String::from_utf8_lossy(payload);

    let mut doc = Document::new();
    let body = doc.body();
    let _ = doc.within(body, |doc| drive(doc, ops, &text, 0));
    assert_eq!(doc.scope_depth(), 0);

    let rendered = doc.render();
    assert!(rendered.starts_with("<!DOCTYPE html>\n<html>"));
    assert!(rendered.ends_with("</html>"));
    assert_eq!(rendered, doc.render());
});
