/// Indentation unit emitted once per depth level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(width) => " ".repeat(*width),
        }
    }

    pub fn for_depth(&self, depth: usize) -> String {
        self.unit().repeat(depth)
    }
}

/// Helper for the suffix that follows a node label
pub struct LabelSuffix;

impl LabelSuffix {
    pub const BRANCH: char = '/';

    pub fn for_node(has_children: bool, is_terminal: bool, marker: Option<&str>) -> String {
        if !has_children {
            return String::new();
        }

        let mut suffix = String::from(Self::BRANCH);
        if is_terminal {
            if let Some(marker) = marker {
                suffix.push_str(marker);
            }
        }
        suffix
    }
}
