pub mod errors;
mod interpreter;
mod lexer;
mod syntax;
pub mod types;

pub use errors::TemplateError;
pub use interpreter::{MatchCursor, MatchOutcome, MatchResult, match_path, render};
pub use lexer::{LexerCursor, Token, TokenList, scan, tokenize};
pub use syntax::{
    BuilderOptions, DirectoryNode, GroupNode, ParameterNode, SyntaxNode, build, build_consumed,
    build_with_options, group_depth, is_static, param_names,
};
pub use types::{ParamMap, ScopeId, TemplateResult};

/// A compiled route template: built once, then shared read-only across any
/// number of match and render calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    source: String,
    nodes: Vec<SyntaxNode>,
}

impl Template {
    /// Best-effort compilation: trailing content the grammar does not
    /// recognize is dropped rather than reported.
    pub fn compile(source: &str) -> Self {
        tracing::event!(tracing::Level::TRACE, operation = "compile", template = %source);

        let tokens = lexer::tokenize(source);
        let nodes = syntax::build(&tokens);

        Self {
            source: source.to_string(),
            nodes,
        }
    }

    /// Like [`Template::compile`], but fails when any part of the template
    /// would be silently dropped.
    pub fn compile_strict(source: &str) -> TemplateResult<Self> {
        tracing::event!(tracing::Level::TRACE, operation = "compile_strict", template = %source);

        let (tokens, lexer_cursor) = lexer::scan(source);

        if !lexer_cursor.is_balanced() {
            return Err(TemplateError::UnbalancedGroups {
                depth: lexer_cursor.scope,
            });
        }

        let (nodes, consumed) = syntax::build_consumed(&tokens);

        if consumed < tokens.len() {
            return Err(TemplateError::TrailingTokens {
                consumed,
                total: tokens.len(),
            });
        }

        Ok(Self {
            source: source.to_string(),
            nodes,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn nodes(&self) -> &[SyntaxNode] {
        &self.nodes
    }

    pub fn match_path(&self, path: &str) -> MatchResult {
        let mut cursor = MatchCursor::default();
        let outcome = interpreter::match_path(path, &self.nodes, &mut cursor);

        MatchResult { outcome, cursor }
    }

    pub fn render(&self, params: &ParamMap) -> String {
        interpreter::render(&self.nodes, params)
    }

    pub fn is_static(&self) -> bool {
        syntax::is_static(&self.nodes)
    }

    pub fn param_names(&self) -> Vec<&str> {
        syntax::param_names(&self.nodes)
    }
}
