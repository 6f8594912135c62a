use html_test_support::{assert_render_eq, expected_doc};
use pdoo::{Document, DocumentConfig, StructuralError, StyleTemplate, style_key};

fn card(padding: u32) -> StyleTemplate<'static> {
    StyleTemplate::new(style_key!("card", padding), move |cls| {
        format!(
            "
            .{cls} {{
                padding: {padding}px;
                border: 1px solid #ccc;
            }}
            "
        )
    })
}

fn muted() -> StyleTemplate<'static> {
    StyleTemplate::new(style_key!("muted"), |cls| format!(".{cls} {{ color: #777; }}"))
}

fn build_page(doc: &mut Document, items: &[(&str, &str)]) -> Result<(), StructuralError> {
    let head = doc.head();
    doc.within(head, |doc| -> Result<(), StructuralError> {
        doc.create_element_with("meta", [("charset", "utf-8")], None)?;
        doc.create_text_element("title", "Notes & Links")?;
        Ok(())
    })?;

    let body = doc.body();
    let mut body = doc.enter(body);
    body.create_text_element("h1", "Notes")?;
    let list = body.create_element("ul")?;
    let mut list = body.enter(list);
    for (label, href) in items {
        let li = list.create_element("li")?;
        let mut li = list.enter(li);
        let classes = li.resolve_style_classes([card(8), muted()])?;
        li.set_attribute("class", classes)?;
        let a = li.create_text_element("a", *label)?;
        li.within(a, |doc| doc.set_attribute("href", href))?;
        li.create_element("br")?;
    }
    Ok(())
}

#[test]
fn renders_complete_page() {
    let mut doc = Document::new();
    build_page(&mut doc, &[("Rust <book>", "/book?x=1&y=2"), ("Std", "/std")])
        .expect("page");
    assert_eq!(doc.style_class_count(), 2);
    assert_render_eq(
        &expected_doc(
            r#"
            <!DOCTYPE html>
            <html>
                <head>
                    <style>
                        .cls-page-card-0 {
                            padding: 8px;
                            border: 1px solid #ccc;
                        }
                        .cls-page-muted-1 { color: #777; }
                    </style>
                    <meta charset="utf-8">
                    <title>
                        Notes &amp; Links
                    </title>
                </head>
                <body>
                    <h1>
                        Notes
                    </h1>
                    <ul>
                        <li class="cls-page-card-0 cls-page-muted-1">
                            <a href="/book?x=1&amp;y=2">
                                Rust &lt;book&gt;
                            </a>
                            <br>
                        </li>
                        <li class="cls-page-card-0 cls-page-muted-1">
                            <a href="/std">
                                Std
                            </a>
                            <br>
                        </li>
                    </ul>
                </body>
            </html>
            "#,
        ),
        &doc.render(),
    );
}

#[test]
fn failed_build_leaves_scopes_unwound() {
    let mut doc = Document::new();
    let body = doc.body();
    let result = doc.within(body, |doc| -> Result<(), StructuralError> {
        let img = doc.create_element("img")?;
        doc.within(img, |doc| doc.create_element("figcaption"))?;
        Ok(())
    });
    assert_eq!(
        result,
        Err(StructuralError::VoidElementChild {
            tag: "img".to_string()
        })
    );
    assert_eq!(doc.scope_depth(), 0);
}

#[test]
fn indent_width_comes_from_toml() {
    let config = DocumentConfig::from_toml_str("indent_width = 1").expect("config");
    let doc = Document::with_config(config);
    assert_render_eq(
        "<!DOCTYPE html>\n<html>\n <head>\n  <style>\n  </style>\n </head>\n <body>\n </body>\n</html>",
        &doc.render(),
    );
}

#[test]
fn zero_indent_renders_flush_left() {
    let doc = Document::with_indent(0);
    assert!(doc.render().lines().all(|line| !line.starts_with(' ')));
}
