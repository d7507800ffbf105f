use serde::{Deserialize, Serialize};

use crate::types::ParamMap;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchCursor {
    pub index: usize,
    pub params: ParamMap,
}
