//! `pdoo` builds HTML pages from ordinary imperative code: enter an element's
//! scope, create content inside it, and render the whole tree as indented,
//! escaped HTML.
//!
//! Style rules are produced by plain functions returning a
//! [`StyleTemplate`]; equal keys share one generated CSS class.
//!
//! ```
//! use pdoo::{Document, StyleTemplate, style_key};
//!
//! fn accent(weight: u32) -> StyleTemplate<'static> {
//!     StyleTemplate::new(style_key!("accent", weight), move |cls| {
//!         format!(".{cls} {{ font-weight: {weight}; }}")
//!     })
//! }
//!
//! # fn main() -> Result<(), pdoo::StructuralError> {
//! let mut doc = Document::new();
//! let body = doc.body();
//! let mut body = doc.enter(body);
//! let title = body.create_text_element("h1", "Hello")?;
//! let class = body.style(accent(700))?;
//! body.within(title, |doc| doc.set_attribute("class", class))?;
//! drop(body);
//! assert!(doc.render().starts_with("<!DOCTYPE html>\n<html>"));
//! # Ok(())
//! # }
//! ```

pub use html::{
    ConfigError, DOCTYPE, Document, DocumentConfig, Element, KeyPart, Lines, Node, NodeKey, Scope,
    StructuralError, StyleKey, StyleTemplate, VOID_ELEMENTS, escape_html, is_void_element,
    style_key,
};
