//! XML to flat-map conversion.
//!
//! XML has no native nested-mapping form, so documents are rebuilt node by
//! node from a token stream. [`NodeTree`] consumes [`XmlEvent`]s, turns
//! attributes into leaf children, and resolves each node's dotted path with
//! disambiguation for repeated sibling names.

mod event;
mod tree;

pub use event::XmlEvent;
pub use tree::NodeTree;
