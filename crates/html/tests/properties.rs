use html::{Document, StructuralError, StyleKey, StyleTemplate, escape_html};
use proptest::prelude::*;

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

proptest! {
    #[test]
    fn escaped_text_has_no_markup_characters(text in ".*") {
        let escaped = escape_html(&text);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
        prop_assert_eq!(unescape(&escaped), text.clone());
    }

    #[test]
    fn text_without_specials_is_untouched(text in "[^&<>\"']*") {
        prop_assert_eq!(escape_html(&text), text.as_str());
    }

    #[test]
    fn text_leaf_renders_escaped(text in "[a-z<>&\"' ]{1,24}") {
        let mut doc = Document::new();
        let body = doc.body();
        let leaf = doc.within(body, |doc| doc.add_text(text.clone())).unwrap();
        let lines: Vec<_> = doc.render_lines(leaf).collect();
        prop_assert_eq!(lines.len(), 1);
        prop_assert_eq!(lines[0].0, 0);
        prop_assert_eq!(&*lines[0].1, escape_html(&text));
    }

    #[test]
    fn attribute_value_renders_escaped(value in "[a-z<>&\"' ]{0,24}") {
        let mut doc = Document::new();
        let body = doc.body();
        let el = doc
            .within(body, |doc| doc.create_element_with("p", [("title", value.as_str())], None))
            .unwrap();
        let open = doc.render_lines(el).next().unwrap().1.into_owned();
        prop_assert_eq!(open, format!("<p title=\"{}\">", escape_html(&value)));
    }

    #[test]
    fn nested_scopes_always_unwind(depth in 1usize..24, fail_at in proptest::option::of(0usize..24)) {
        fn descend(doc: &mut Document, left: usize, fail_at: Option<usize>) -> Result<(), StructuralError> {
            if left == 0 {
                return Ok(());
            }
            let tag = if fail_at == Some(left) { "br" } else { "div" };
            let el = doc.create_element(tag)?;
            doc.within(el, |doc| {
                doc.add_text("x")?;
                descend(doc, left - 1, fail_at)
            })
        }

        let mut doc = Document::new();
        let body = doc.body();
        let _ = doc.within(body, |doc| descend(doc, depth, fail_at));
        prop_assert_eq!(doc.scope_depth(), 0);
        prop_assert_eq!(doc.current_parent(), doc.root());
    }

    #[test]
    fn equal_keys_generate_once(names in proptest::collection::vec("[a-c]", 1..12)) {
        let mut doc = Document::new();
        let mut generated = 0usize;
        let mut classes = Vec::new();
        for name in &names {
            let class = doc
                .style(StyleTemplate::new(StyleKey::new("m", name.as_str()), |c| {
                    generated += 1;
                    format!(".{c} {{}}")
                }))
                .unwrap();
            classes.push(class);
        }
        let mut distinct = names.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(generated, distinct.len());
        prop_assert_eq!(doc.style_class_count(), distinct.len());
        for (i, a) in names.iter().enumerate() {
            for (j, b) in names.iter().enumerate() {
                prop_assert_eq!(a == b, classes[i] == classes[j]);
            }
        }
    }
}
