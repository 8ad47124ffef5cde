use serde::{Deserialize, Serialize};

/// A block in a document tree, as far as the block directory cares about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block type name, e.g. `"core/columns"` or `"acme/pricing-table"`.
    pub name: String,
    #[serde(default)]
    pub inner_blocks: Vec<Block>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner_blocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_inner(mut self, inner: Vec<Block>) -> Self {
        self.inner_blocks = inner;
        self
    }
}

/// A block type installed from the block directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockType {
    pub name: String,
    #[serde(default)]
    pub title: String,
}

impl BlockType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
        }
    }
}
