use serde::{Deserialize, Serialize};

use super::ast::{DirectoryNode, GroupNode, ParameterNode, SyntaxNode};
use crate::lexer::Token;
use crate::types::ScopeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderOptions {
    pub trailing_separator_optional: bool,
}

impl Default for BuilderOptions {
    fn default() -> Self {
        Self {
            trailing_separator_optional: true,
        }
    }
}

type NodeRule = fn(&mut TreeBuilder<'_>) -> Option<SyntaxNode>;

const SEQUENCE_RULES: [NodeRule; 4] = [
    consume_directory,
    consume_group,
    consume_parameter,
    consume_literal,
];

const GROUP_RULES: [NodeRule; 4] = [
    consume_literal,
    consume_parameter,
    consume_directory,
    consume_group,
];

struct TreeBuilder<'a> {
    tokens: &'a [Token],
    index: usize,
    options: BuilderOptions,
}

impl<'a> TreeBuilder<'a> {
    fn new(tokens: &'a [Token], options: BuilderOptions) -> Self {
        Self {
            tokens,
            index: 0,
            options,
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    // The first rule whose look-ahead matches wins; when none do, the
    // remaining tokens are left unrepresented.
    fn consume_sequence(
        &mut self,
        rules: &[NodeRule],
        terminator: Option<ScopeId>,
    ) -> Vec<SyntaxNode> {
        let mut nodes = Vec::new();

        loop {
            match self.peek() {
                None => break,
                Some(Token::GroupEnd { scope }) if terminator == Some(*scope) => {
                    self.index += 1;
                    break;
                }
                Some(_) => {}
            }

            let mut matched = None;

            for rule in rules {
                if let Some(node) = rule(self) {
                    matched = Some(node);
                    break;
                }
            }

            match matched {
                Some(node) => nodes.push(node),
                None => break,
            }
        }

        nodes
    }
}

fn consume_literal(builder: &mut TreeBuilder<'_>) -> Option<SyntaxNode> {
    if let Some(Token::Literal(text)) = builder.peek() {
        let node = SyntaxNode::Literal(text.clone());
        builder.index += 1;

        return Some(node);
    }

    None
}

fn consume_parameter(builder: &mut TreeBuilder<'_>) -> Option<SyntaxNode> {
    if let Some(Token::ParameterOperator) = builder.tokens.get(builder.index)
        && let Some(Token::Literal(name)) = builder.tokens.get(builder.index + 1)
    {
        let node = SyntaxNode::Parameter(ParameterNode::new(name.clone()));
        builder.index += 2;

        return Some(node);
    }

    None
}

fn consume_directory(builder: &mut TreeBuilder<'_>) -> Option<SyntaxNode> {
    if let Some(Token::DirectoryOperator) = builder.peek() {
        builder.index += 1;

        return Some(SyntaxNode::Directory(DirectoryNode::new(
            Vec::new(),
            builder.options.trailing_separator_optional,
        )));
    }

    None
}

fn consume_group(builder: &mut TreeBuilder<'_>) -> Option<SyntaxNode> {
    let scope = match builder.peek() {
        Some(Token::GroupStart { scope }) => *scope,
        _ => return None,
    };

    builder.index += 1;

    // Children stop at the bracket stamped with the opening scope, so a
    // nested close cannot terminate an outer group early.
    let children = builder.consume_sequence(&GROUP_RULES, Some(scope));

    Some(SyntaxNode::Group(GroupNode::new(children)))
}

pub fn build(tokens: &[Token]) -> Vec<SyntaxNode> {
    build_with_options(tokens, &BuilderOptions::default()).0
}

pub fn build_consumed(tokens: &[Token]) -> (Vec<SyntaxNode>, usize) {
    build_with_options(tokens, &BuilderOptions::default())
}

#[tracing::instrument(level = "trace", skip(tokens, options), fields(tokens = tokens.len() as u64))]
pub fn build_with_options(tokens: &[Token], options: &BuilderOptions) -> (Vec<SyntaxNode>, usize) {
    let mut builder = TreeBuilder::new(tokens, *options);
    let nodes = builder.consume_sequence(&SEQUENCE_RULES, None);

    (nodes, builder.index)
}
