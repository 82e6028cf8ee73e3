use std::collections::BTreeSet;
use tracing::{debug, trace};

use crate::error::{OutlineError, Result};
use crate::parser::segment;

/// A node of the path trie. Each node owns its children; sibling labels are
/// unique and kept in first-insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    label: String,
    children: Vec<TrieNode>,
    terminal: bool,
}

impl TrieNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
            terminal: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn child(&self, label: &str) -> Option<&TrieNode> {
        self.children.iter().find(|c| c.label == label)
    }

    /// True when an inserted path ends here. Childless nodes are always
    /// terminal, so this only carries information for branching nodes.
    pub fn is_terminal(&self) -> bool {
        self.terminal || self.children.is_empty()
    }

    /// Number of nodes below this one
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Length of the longest label chain below this node
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.height())
            .max()
            .unwrap_or(0)
    }

    /// Parent/child edges keyed by the label path from this node, ignoring
    /// sibling order. Two tries built from the same set of paths have equal
    /// edge sets.
    pub fn edges(&self) -> BTreeSet<(Vec<String>, String)> {
        let mut edges = BTreeSet::new();
        let mut stack: Vec<(Vec<String>, &TrieNode)> = vec![(Vec::new(), self)];

        while let Some((prefix, node)) = stack.pop() {
            for child in &node.children {
                edges.insert((prefix.clone(), child.label.clone()));
                let mut child_prefix = prefix.clone();
                child_prefix.push(child.label.clone());
                stack.push((child_prefix, child));
            }
        }

        edges
    }

    /// Label paths of every node that ends an inserted path
    pub fn terminal_paths(&self) -> BTreeSet<Vec<String>> {
        let mut paths = BTreeSet::new();
        let mut stack: Vec<(Vec<String>, &TrieNode)> = vec![(Vec::new(), self)];

        while let Some((prefix, node)) = stack.pop() {
            if node.terminal {
                paths.insert(prefix.clone());
            }
            for child in &node.children {
                let mut child_prefix = prefix.clone();
                child_prefix.push(child.label.clone());
                stack.push((child_prefix, child));
            }
        }

        paths
    }
}

/// Builds a trie rooted at the mindmap title from segmented paths.
///
/// Every insert walks from the root with its own cursor; nothing is carried
/// between inserts except the tree itself.
#[derive(Debug)]
pub struct TrieBuilder {
    root: TrieNode,
}

impl TrieBuilder {
    pub fn new(title: &str) -> Result<Self> {
        if title.trim().is_empty() {
            return Err(OutlineError::EmptyTitle);
        }
        Ok(Self {
            root: TrieNode::new(title),
        })
    }

    pub fn insert_segments<S: AsRef<str>>(&mut self, segments: &[S]) {
        let mut current = &mut self.root;

        for segment in segments {
            let segment = segment.as_ref();
            let index = match current.children.iter().position(|c| c.label == segment) {
                Some(index) => index,
                None => {
                    trace!(parent = %current.label, label = segment, "creating node");
                    current.children.push(TrieNode::new(segment));
                    current.children.len() - 1
                }
            };
            current = &mut current.children[index];
        }

        current.terminal = true;
    }

    pub fn insert_path(&mut self, path: &str) -> Result<()> {
        let segments = segment(path)?;
        self.insert_segments(&segments);
        Ok(())
    }

    /// Inserts paths in order, stopping at the first invalid one
    pub fn extend<'p, I>(&mut self, paths: I) -> Result<()>
    where
        I: IntoIterator<Item = &'p str>,
    {
        let mut inserted = 0usize;
        for path in paths {
            self.insert_path(path)?;
            inserted += 1;
        }
        debug!(
            root = %self.root.label,
            inserted,
            nodes = self.root.descendant_count(),
            "built path trie"
        );
        Ok(())
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn finish(self) -> TrieNode {
        self.root
    }
}

/// Builds the trie for a title and an ordered list of paths. Fails without
/// returning a partial tree.
pub fn build_trie<'p, I>(title: &str, paths: I) -> Result<TrieNode>
where
    I: IntoIterator<Item = &'p str>,
{
    let mut builder = TrieBuilder::new(title)?;
    builder.extend(paths)?;
    Ok(builder.finish())
}
