mod cursor;
mod scan;
mod token;

pub use cursor::LexerCursor;
pub use scan::{scan, tokenize};
pub use token::{Token, TokenList};
