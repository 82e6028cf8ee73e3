use tracing::debug;

use crate::renderer::traits::*;
use crate::tree::TrieNode;

/// Renders a whole trie as an indented outline, root at depth 0
pub struct OutlineRenderer<'o> {
    options: &'o RenderOptions,
}

impl<'o> OutlineRenderer<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Self { options }
    }

    /// The blob has no leading blank line and ends with exactly one newline;
    /// any other trailing whitespace is trimmed.
    pub fn render(&self, root: &TrieNode) -> String {
        let context = RenderContext::new(self.options);
        let output = root.render(&context);

        let mut blob = output.trim_end().to_string();
        blob.push('\n');

        debug!(root = root.label(), bytes = blob.len(), "rendered outline");
        blob
    }
}
