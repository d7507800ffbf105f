use thiserror::Error;

use crate::types::ScopeId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template has unbalanced group delimiters (depth {depth} at end of input)")]
    UnbalancedGroups { depth: ScopeId },
    #[error("template compiled partially: {consumed} of {total} tokens consumed")]
    TrailingTokens { consumed: usize, total: usize },
}
