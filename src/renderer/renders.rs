use crate::renderer::components::*;
use crate::renderer::traits::*;
use crate::tree::TrieNode;

impl Render for TrieNode {
    fn render(&self, context: &RenderContext) -> String {
        let mut output = String::new();

        let suffix = LabelSuffix::for_node(
            self.has_children(),
            self.is_terminal(),
            context.options.terminal_marker.as_deref(),
        );
        output.push_str(&format!("{}{}{}\n", context.indent(), self.label(), suffix));

        // Children in insertion order, one level deeper
        let child_context = context.with_depth(context.depth + 1);
        for child in self.children() {
            output.push_str(&child.render(&child_context));
        }

        output
    }
}
