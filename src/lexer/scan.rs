use super::cursor::LexerCursor;
use super::token::{Token, TokenList};

fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b':' | b'/' | b'{' | b'}')
}

fn consume_punctuation(input: &str, cursor: &mut LexerCursor, query: u8) -> bool {
    if input.as_bytes().get(cursor.index).copied() == Some(query) {
        cursor.index += 1;
        return true;
    }

    false
}

fn consume_literal(input: &str, cursor: &mut LexerCursor) -> Option<Token> {
    let bytes = input.as_bytes();
    let mut next = cursor.index;

    while next < bytes.len() {
        if is_delimiter(bytes[next]) {
            break;
        }

        next += 1;
    }

    if next == cursor.index {
        return None;
    }

    let segment = input[cursor.index..next].to_string();
    cursor.index = next;

    Some(Token::Literal(segment))
}

fn next_token(input: &str, cursor: &mut LexerCursor) -> Option<Token> {
    if consume_punctuation(input, cursor, b'/') {
        return Some(Token::DirectoryOperator);
    }

    // GroupStart records the scope before incrementing, GroupEnd after
    // decrementing, so a balanced pair always carries the same stamp.
    if consume_punctuation(input, cursor, b'{') {
        let scope = cursor.scope;
        cursor.scope += 1;

        return Some(Token::GroupStart { scope });
    }

    if consume_punctuation(input, cursor, b'}') {
        cursor.scope -= 1;

        return Some(Token::GroupEnd {
            scope: cursor.scope,
        });
    }

    if consume_punctuation(input, cursor, b':') {
        return Some(Token::ParameterOperator);
    }

    consume_literal(input, cursor)
}

#[tracing::instrument(level = "trace", fields(template = %input))]
pub fn scan(input: &str) -> (TokenList, LexerCursor) {
    let mut tokens = TokenList::new();
    let mut cursor = LexerCursor::default();

    while cursor.index < input.len() {
        match next_token(input, &mut cursor) {
            Some(token) => tokens.push(token),
            None => break,
        }
    }

    (tokens, cursor)
}

pub fn tokenize(input: &str) -> TokenList {
    let (tokens, _) = scan(input);
    tokens
}
