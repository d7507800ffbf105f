use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyntaxNode {
    Literal(String),
    Parameter(ParameterNode),
    Directory(DirectoryNode),
    Group(GroupNode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterNode {
    pub name: String,
}

impl ParameterNode {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub children: Vec<SyntaxNode>,
    pub optional: bool,
}

impl DirectoryNode {
    pub fn new(children: Vec<SyntaxNode>, optional: bool) -> Self {
        Self { children, optional }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupNode {
    pub children: Vec<SyntaxNode>,
}

impl GroupNode {
    pub fn new(children: Vec<SyntaxNode>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
