mod analysis;
mod ast;
mod builder;

pub use analysis::{group_depth, is_static, param_names};
pub use ast::{DirectoryNode, GroupNode, ParameterNode, SyntaxNode};
pub use builder::{BuilderOptions, build, build_consumed, build_with_options};
