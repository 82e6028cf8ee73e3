//! # mindmap-outline
//!
//! Turns the slash-delimited leaf paths of a mindmap into a prefix tree
//! rooted at the mindmap title and renders that tree as a tab-indented
//! outline:
//!
//! ```
//! let outline =
//!     mindmap_outline::render_outline("Sample", ["i/like/turtles", "i/eat/tomato"]).unwrap();
//! assert_eq!(outline, "Sample/\n\ti/\n\t\tlike/\n\t\t\tturtles\n\t\teat/\n\t\t\ttomato\n");
//! ```
//!
//! Every call builds and discards its own tree.

pub mod error;
pub mod parser;
pub mod renderer;
pub mod tree;

#[cfg(test)]
mod tests;

pub use error::{OutlineError, PathDefect, Result};
pub use parser::{segment, Leaf, LeafOrder, Mindmap, PathSegmenter};
pub use renderer::{Indent, OutlineRenderer, Render, RenderContext, RenderOptions};
pub use tree::{build_trie, TrieBuilder, TrieNode};

/// Renders an outline with the default options (tabs, no terminal marker)
pub fn render_outline<'p, I>(title: &str, paths: I) -> Result<String>
where
    I: IntoIterator<Item = &'p str>,
{
    render_outline_with(title, paths, &RenderOptions::default())
}

pub fn render_outline_with<'p, I>(title: &str, paths: I, options: &RenderOptions) -> Result<String>
where
    I: IntoIterator<Item = &'p str>,
{
    let root = build_trie(title, paths)?;
    Ok(OutlineRenderer::new(options).render(&root))
}

/// Renders a mindmap document, feeding its leaves to the builder in `order`
pub fn render_mindmap(mindmap: &Mindmap, order: LeafOrder, options: &RenderOptions) -> Result<String> {
    render_outline_with(&mindmap.title, mindmap.ordered_paths(order), options)
}
