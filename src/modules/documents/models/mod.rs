mod document;
mod line_item;

pub use document::{Document, DocumentKind, DocumentStatus};
pub use line_item::{Advisory, LineItem, LineItemUpdate};
