use crate::syntax::SyntaxNode;
use crate::types::ParamMap;

#[tracing::instrument(level = "trace", skip(nodes, params), fields(nodes = nodes.len() as u64, params = params.len() as u64))]
pub fn render(nodes: &[SyntaxNode], params: &ParamMap) -> String {
    let mut out = String::new();

    for node in nodes {
        render_node(node, params, &mut out);
    }

    out
}

fn render_node(node: &SyntaxNode, params: &ParamMap, out: &mut String) {
    match node {
        SyntaxNode::Literal(text) => out.push_str(text),
        SyntaxNode::Parameter(param) => match params.get(&param.name) {
            Some(value) => out.push_str(value),
            // Unbound parameters render as their own name.
            None => out.push_str(&param.name),
        },
        SyntaxNode::Directory(dir) => {
            out.push('/');

            for child in &dir.children {
                render_node(child, params, out);
            }
        }
        SyntaxNode::Group(group) => {
            for child in &group.children {
                render_node(child, params, out);
            }
        }
    }
}
