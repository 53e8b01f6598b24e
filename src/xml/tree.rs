//! Arena-backed XML node tree and path resolution.

use super::XmlEvent;
use crate::normalize::{normalize_key, normalize_value};
use std::collections::HashMap;

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    name: String,
    /// Empty until character data or an attribute value is seen.
    value: String,
    parent: Option<usize>,
    children: Vec<usize>,
    /// Child name -> number of children sharing it.
    sibling_counts: HashMap<String, usize>,
    /// Rank among same-named siblings, in document order.
    id: usize,
}

/// In-memory tree rebuilt from an XML event stream.
///
/// Nodes live in an arena and refer to each other by index, so parent links
/// need no shared ownership. The first element of the document names the
/// synthetic root, which never contributes a path segment or an entry of its
/// own: `<config><port>80</port></config>` flattens to `port = 80`.
///
/// Attributes become leaf children of their element, inserted before any of
/// the element's character data:
///
/// ```rust
/// use flatmerge_config::xml::{NodeTree, XmlEvent};
///
/// let tree = NodeTree::from_events([
///     XmlEvent::start("config"),
///     XmlEvent::start_with("item", [("id", "7")]),
///     XmlEvent::text("text"),
///     XmlEvent::End,
///     XmlEvent::End,
/// ]);
///
/// let flat = tree.to_flat_map();
/// assert_eq!(flat["item.id"], "7");
/// assert_eq!(flat["item"], "text");
/// ```
#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: Vec<Node>,
    cursor: usize,
}

impl NodeTree {
    /// Create a tree holding only the unnamed root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            cursor: ROOT,
        }
    }

    /// Build a tree from a complete event stream.
    pub fn from_events<I>(events: I) -> Self
    where
        I: IntoIterator<Item = XmlEvent>,
    {
        let mut tree = Self::new();
        for event in events {
            tree.apply(event);
        }
        tree
    }

    /// Build a tree from a fallible event stream, stopping at the first error.
    pub fn try_from_events<I, E>(events: I) -> Result<Self, E>
    where
        I: IntoIterator<Item = Result<XmlEvent, E>>,
    {
        let mut tree = Self::new();
        for event in events {
            tree.apply(event?);
        }
        Ok(tree)
    }

    /// Feed a single event to the builder.
    pub fn apply(&mut self, event: XmlEvent) {
        match event {
            XmlEvent::Start { name, attributes } => {
                self.descend(normalize_key(&name));
                for (attr_name, attr_value) in attributes {
                    self.descend(normalize_key(&attr_name));
                    self.nodes[self.cursor].value = normalize_value(&attr_value);
                    self.ascend();
                }
            }
            // Fragments are not concatenated; the last chunk wins.
            XmlEvent::Text(text) => {
                self.nodes[self.cursor].value = normalize_value(&text);
            }
            XmlEvent::End => self.ascend(),
        }
    }

    /// Resolve every node's path and collect the ones carrying a value.
    ///
    /// Containers without text of their own contribute nothing; only their
    /// descendants do.
    pub fn to_flat_map(&self) -> HashMap<String, String> {
        let mut output = HashMap::new();
        let mut stack = vec![(ROOT, String::new())];

        // Preorder with children popped in document order, which matches
        // allocation order: on colliding paths the later node wins.
        while let Some((index, path)) = stack.pop() {
            let node = &self.nodes[index];
            for &child in node.children.iter().rev() {
                let child_path = self.child_path(&path, index, &self.nodes[child]);
                stack.push((child, child_path));
            }
            if index != ROOT && !node.value.is_empty() {
                output.insert(path, node.value.clone());
            }
        }

        output
    }

    fn descend(&mut self, name: String) {
        let child = self.nodes.len();
        let current = &mut self.nodes[self.cursor];
        if self.cursor == ROOT && current.name.is_empty() {
            current.name = name;
            return;
        }

        // Children are only ever appended, so the new node's rank is the
        // number of same-named siblings seen so far.
        let count = current.sibling_counts.entry(name.clone()).or_insert(0);
        let id = *count;
        *count += 1;
        current.children.push(child);

        self.nodes.push(Node {
            name,
            parent: Some(self.cursor),
            id,
            ..Node::default()
        });
        self.cursor = child;
    }

    fn ascend(&mut self) {
        if let Some(parent) = self.nodes[self.cursor].parent {
            self.cursor = parent;
        }
    }

    fn child_path(&self, parent_path: &str, parent: usize, node: &Node) -> String {
        let parent = &self.nodes[parent];
        let count = parent.sibling_counts.get(&node.name).copied().unwrap_or(0);
        if count <= 1 {
            return join(parent_path, &node.name);
        }

        // With more than one repeated name under the same parent only the
        // rank is kept, so e.g. `<a/><a/><b/><b/>` yields colliding keys.
        let repeated_names = parent.sibling_counts.values().filter(|&&c| c > 1).count();
        if repeated_names > 1 {
            join(parent_path, &node.id.to_string())
        } else {
            join(parent_path, &format!("{}.{}", node.name, node.id))
        }
    }
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}
