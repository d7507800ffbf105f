mod cursor;
mod matcher;
mod render;

pub use cursor::MatchCursor;
pub use matcher::{MatchOutcome, MatchResult, match_path};
pub use render::render;
