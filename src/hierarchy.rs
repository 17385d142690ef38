use std::collections::HashMap;

/// Stable handle to a node in a [`Hierarchy`].
///
/// Ids are only meaningful together with the hierarchy that created them;
/// lookups with a stale or foreign id return `None` rather than panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct Node {
    name: String,
    parent: Option<NodeId>,
    attributes: HashMap<String, String>,
}

/// Arena of named nodes linked upward through parent ids.
///
/// This models an externally owned location tree: the host mirrors its
/// hierarchy into the arena, and prefix resolution only reads it. Parent
/// links only ever point at earlier nodes, so they cannot form a cycle and
/// upward traversal always terminates.
///
/// # Examples
///
/// ```
/// use seqid::hierarchy::Hierarchy;
///
/// let mut tree = Hierarchy::new();
/// let region = tree.add_root("Afghanistan Delegation");
/// let hospital = tree.add_child(region, "Kaboul Central Hospital");
/// tree.set_attribute(hospital, "prefix", "AFDEL-");
///
/// assert_eq!(tree.parent(hospital), Some(region));
/// assert_eq!(tree.attribute(hospital, "prefix"), Some("AFDEL-"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    nodes: Vec<Node>,
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node with no parent and returns its id.
    pub fn add_root(&mut self, name: impl Into<String>) -> NodeId {
        self.push(name.into(), None)
    }

    /// Adds a child of `parent` and returns its id. An unknown parent id is
    /// ignored, leaving the new node parentless.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> NodeId {
        self.push(name.into(), Some(parent))
    }

    fn push(&mut self, name: String, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        // Only link parents that already exist, so no node can become its own
        // ancestor.
        let parent = parent.filter(|existing| existing.0 < id.0);
        self.nodes.push(Node {
            name,
            parent,
            attributes: HashMap::new(),
        });
        id
    }

    /// Sets a named attribute on `node`, replacing any previous value.
    /// Unknown ids are ignored.
    pub fn set_attribute(
        &mut self,
        node: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        if let Some(found) = self.nodes.get_mut(node.0) {
            found.attributes.insert(name.into(), value.into());
        }
    }

    /// Returns the value of a named attribute on `node`, if present.
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(node.0)?
            .attributes
            .get(name)
            .map(String::as_str)
    }

    /// Returns the name of `node`.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|found| found.name.as_str())
    }

    /// Returns the parent of `node`, or `None` for roots and unknown ids.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }

    /// Walks from `node` up to its root, yielding `node` itself first.
    pub fn ancestors(&self, node: NodeId) -> Ancestors<'_> {
        Ancestors {
            hierarchy: self,
            next: Some(node),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Iterator over a node and its chain of parents, nearest first.
#[derive(Debug)]
pub struct Ancestors<'a> {
    hierarchy: &'a Hierarchy,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next.take()?;
        let node = self.hierarchy.nodes.get(current.0)?;
        self.next = node.parent;
        Some(current)
    }
}
