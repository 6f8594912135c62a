//! Build HTML documents with scoped, imperative calls and render them as
//! indented, escaped text.
//!
//! ```
//! use html::Document;
//!
//! # fn main() -> Result<(), html::StructuralError> {
//! let mut doc = Document::new();
//! let body = doc.body();
//! let mut body = doc.enter(body);
//! let link = body.create_text_element("a", "home")?;
//! body.within(link, |doc| doc.set_attribute("href", "/"))?;
//! drop(body);
//! assert!(doc.render().contains("<a href=\"/\">"));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod document;
pub mod entities;
pub mod render;
pub mod scope;
pub mod style;

mod arena;
mod error;
mod types;

pub use crate::config::{ConfigError, DocumentConfig};
pub use crate::document::{DOCTYPE, Document};
pub use crate::entities::escape_html;
pub use crate::error::StructuralError;
pub use crate::render::Lines;
pub use crate::scope::Scope;
pub use crate::style::{KeyPart, StyleKey, StyleTemplate};
pub use crate::types::{Element, Node, NodeKey, VOID_ELEMENTS, is_void_element};
