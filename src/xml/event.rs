//! Tokenizer-independent XML events.

/// One token of an XML document, as produced by a tokenizer.
///
/// Names and values are raw; [`NodeTree`](super::NodeTree) normalizes them.
/// End of stream is the end of the iterator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlEvent {
    /// Opening tag with its attributes in declaration order.
    Start {
        /// Local element name
        name: String,
        /// `(name, value)` pairs in declaration order
        attributes: Vec<(String, String)>,
    },
    /// Character data between tags (including CDATA sections).
    Text(String),
    /// Closing tag.
    End,
}

impl XmlEvent {
    /// Build a start event with no attributes.
    pub fn start(name: impl Into<String>) -> Self {
        Self::Start {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Build a start event carrying attributes.
    pub fn start_with<I, K, V>(name: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Start {
            name: name.into(),
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build a character-data event.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}
