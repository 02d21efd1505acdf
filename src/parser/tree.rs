use std::fmt;

/// A parse tree node: a nonterminal expansion or a terminal leaf.
///
/// Children are ordered and exclusively owned by their parent. The
/// `Display` rendering is the textual tree format of the parse-tree
/// report, with `├──`/`└──` branch characters denoting nesting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        TreeNode {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    fn render_children(&self, prefix: &str, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, child) in self.children.iter().enumerate() {
            let (branch, extension) = if position + 1 == self.children.len() {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            write!(f, "\n{}{}{}", prefix, branch, child.label)?;
            child.render_children(&format!("{}{}", prefix, extension), f)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)?;
        self.render_children("", f)
    }
}
