use memchr::memchr;
use serde::{Deserialize, Serialize};

use super::cursor::MatchCursor;
use crate::syntax::SyntaxNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    NoMatch,
    Partial,
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub cursor: MatchCursor,
}

#[tracing::instrument(level = "trace", skip(nodes, cursor), fields(path = %path, nodes = nodes.len() as u64))]
pub fn match_path(path: &str, nodes: &[SyntaxNode], cursor: &mut MatchCursor) -> MatchOutcome {
    let mut attempt = cursor.clone();

    for node in nodes {
        if !accepts(node, path, &mut attempt) {
            return MatchOutcome::NoMatch;
        }
    }

    // Commit only once every node accepted; a rejection above leaves the
    // caller's cursor untouched.
    *cursor = attempt;

    if cursor.index == path.len() {
        MatchOutcome::Complete
    } else {
        MatchOutcome::Partial
    }
}

fn accepts(node: &SyntaxNode, path: &str, cursor: &mut MatchCursor) -> bool {
    match node {
        SyntaxNode::Literal(text) => accepts_literal(text, path, cursor),
        SyntaxNode::Parameter(param) => accepts_parameter(&param.name, path, cursor),
        SyntaxNode::Directory(dir) => accepts_directory(dir.optional, path, cursor),
        SyntaxNode::Group(group) => accepts_group(&group.children, path, cursor),
    }
}

fn accepts_literal(text: &str, path: &str, cursor: &mut MatchCursor) -> bool {
    let rest = match path.as_bytes().get(cursor.index..) {
        Some(rest) => rest,
        None => return false,
    };

    if rest.starts_with(text.as_bytes()) {
        cursor.index += text.len();

        return true;
    }

    false
}

fn accepts_parameter(name: &str, path: &str, cursor: &mut MatchCursor) -> bool {
    let rest = match path.as_bytes().get(cursor.index..) {
        Some(rest) => rest,
        None => return false,
    };

    let end = match memchr(b'/', rest) {
        Some(offset) => cursor.index + offset,
        None => path.len(),
    };

    // Zero-length segments never bind.
    if end == cursor.index {
        return false;
    }

    let segment = match path.get(cursor.index..end) {
        Some(segment) => segment,
        None => return false,
    };

    cursor.params.insert(name.to_string(), segment.to_string());
    cursor.index = end;

    true
}

fn accepts_directory(optional: bool, path: &str, cursor: &mut MatchCursor) -> bool {
    // A trailing separator may only be skipped at end of input.
    if cursor.index == path.len() && optional {
        return true;
    }

    if path.as_bytes().get(cursor.index).copied() == Some(b'/') {
        cursor.index += 1;

        return true;
    }

    false
}

fn accepts_group(children: &[SyntaxNode], path: &str, cursor: &mut MatchCursor) -> bool {
    let mut attempt = cursor.clone();

    for child in children {
        // A group whose body does not fit is skipped rather than fatal.
        if !accepts(child, path, &mut attempt) {
            return true;
        }
    }

    *cursor = attempt;

    true
}
