use serde::Deserialize;
use std::cmp::Ordering;

use crate::error::Result;

/// A single leaf of a mindmap: a slash-delimited path plus free text
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Leaf {
    #[serde(default)]
    pub id: Option<u64>,
    pub path: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl Leaf {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            id: None,
            path: path.into(),
            text: None,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// A mindmap document: the title becomes the outline root
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Mindmap {
    #[serde(default)]
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub leafs: Vec<Leaf>,
}

impl Mindmap {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            leafs: Vec::new(),
        }
    }

    pub fn with_leaf(mut self, leaf: Leaf) -> Self {
        self.leafs.push(leaf);
        self
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Leaf paths in the requested order. Sibling order in the outline
    /// follows this order, so it must be stable.
    pub fn ordered_paths(&self, order: LeafOrder) -> Vec<&str> {
        let mut leafs: Vec<&Leaf> = self.leafs.iter().collect();
        match order {
            LeafOrder::Input => {}
            LeafOrder::IdAscending => leafs.sort_by(|a, b| match (a.id, b.id) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }),
            LeafOrder::PathAscending => leafs.sort_by(|a, b| a.path.cmp(&b.path)),
            LeafOrder::PathDescending => leafs.sort_by(|a, b| b.path.cmp(&a.path)),
        }
        leafs.into_iter().map(|leaf| leaf.path.as_str()).collect()
    }
}

/// Order in which leaves are fed to the tree builder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LeafOrder {
    #[default]
    Input,
    /// Leaves without an id go last
    IdAscending,
    PathAscending,
    PathDescending,
}
