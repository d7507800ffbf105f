use hashbrown::HashSet;

use super::ast::SyntaxNode;

pub fn param_names(nodes: &[SyntaxNode]) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();

    collect_param_names(nodes, &mut seen, &mut out);

    out
}

fn collect_param_names<'a>(
    nodes: &'a [SyntaxNode],
    seen: &mut HashSet<&'a str>,
    out: &mut Vec<&'a str>,
) {
    for node in nodes {
        match node {
            SyntaxNode::Literal(_) => {}
            SyntaxNode::Parameter(param) => {
                if seen.insert(param.name.as_str()) {
                    out.push(param.name.as_str());
                }
            }
            SyntaxNode::Directory(dir) => collect_param_names(&dir.children, seen, out),
            SyntaxNode::Group(group) => collect_param_names(&group.children, seen, out),
        }
    }
}

pub fn is_static(nodes: &[SyntaxNode]) -> bool {
    nodes.iter().all(|node| match node {
        SyntaxNode::Literal(_) => true,
        SyntaxNode::Parameter(_) => false,
        SyntaxNode::Directory(dir) => is_static(&dir.children),
        SyntaxNode::Group(group) => is_static(&group.children),
    })
}

pub fn group_depth(nodes: &[SyntaxNode]) -> usize {
    nodes
        .iter()
        .map(|node| match node {
            SyntaxNode::Group(group) => 1 + group_depth(&group.children),
            SyntaxNode::Directory(dir) => group_depth(&dir.children),
            _ => 0,
        })
        .max()
        .unwrap_or(0)
}
