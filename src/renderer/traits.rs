use crate::renderer::components::Indent;

/// Rendering configuration shared by every node of one render call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub indent: Indent,
    /// Appended after the `/` of a branching node that also ends an
    /// inserted path. `None` renders such nodes like any other branch.
    pub terminal_marker: Option<String>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_terminal_marker(mut self, marker: impl Into<String>) -> Self {
        self.terminal_marker = Some(marker.into());
        self
    }
}

/// Configuration context for rendering operations
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'o> {
    pub depth: usize,
    pub options: &'o RenderOptions,
}

impl<'o> RenderContext<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Self { depth: 0, options }
    }

    pub fn with_depth(&self, depth: usize) -> Self {
        Self {
            depth,
            options: self.options,
        }
    }

    pub fn indent(&self) -> String {
        self.options.indent.for_depth(self.depth)
    }
}

/// Core rendering trait for outline nodes
pub trait Render {
    fn render(&self, context: &RenderContext) -> String;
}
