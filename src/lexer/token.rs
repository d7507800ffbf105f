use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::types::ScopeId;

pub type TokenList = SmallVec<[Token; 8]>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    Literal(String),
    ParameterOperator,
    DirectoryOperator,
    GroupStart { scope: ScopeId },
    GroupEnd { scope: ScopeId },
}
