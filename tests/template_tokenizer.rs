use routeform::{Token, scan, tokenize};

#[test]
fn tokenizes_separators_parameters_and_literals_in_order() {
    let tokens = tokenize("/eln/:document/:section/:datum");

    assert_eq!(
        tokens.to_vec(),
        vec![
            Token::DirectoryOperator,
            Token::Literal("eln".to_string()),
            Token::DirectoryOperator,
            Token::ParameterOperator,
            Token::Literal("document".to_string()),
            Token::DirectoryOperator,
            Token::ParameterOperator,
            Token::Literal("section".to_string()),
            Token::DirectoryOperator,
            Token::ParameterOperator,
            Token::Literal("datum".to_string()),
        ]
    );
}

#[test]
fn stamps_matching_scopes_on_nested_brackets() {
    let tokens = tokenize("{a{b}c}");

    assert_eq!(
        tokens.to_vec(),
        vec![
            Token::GroupStart { scope: 0 },
            Token::Literal("a".to_string()),
            Token::GroupStart { scope: 1 },
            Token::Literal("b".to_string()),
            Token::GroupEnd { scope: 1 },
            Token::Literal("c".to_string()),
            Token::GroupEnd { scope: 0 },
        ]
    );
}

#[test]
fn literal_runs_are_maximal() {
    let tokens = tokenize("hello-world.html");

    assert_eq!(tokens.len(), 1);
    match &tokens[0] {
        Token::Literal(text) => assert_eq!(text, "hello-world.html"),
        other => panic!("expected literal token, got {other:?}"),
    }
}

#[test]
fn literal_runs_stop_at_every_delimiter() {
    let tokens = tokenize("a:b/c{d}e");

    assert_eq!(
        tokens.to_vec(),
        vec![
            Token::Literal("a".to_string()),
            Token::ParameterOperator,
            Token::Literal("b".to_string()),
            Token::DirectoryOperator,
            Token::Literal("c".to_string()),
            Token::GroupStart { scope: 0 },
            Token::Literal("d".to_string()),
            Token::GroupEnd { scope: 0 },
            Token::Literal("e".to_string()),
        ]
    );
}

#[test]
fn empty_input_produces_no_tokens() {
    let (tokens, cursor) = scan("");

    assert!(tokens.is_empty());
    assert_eq!(cursor.index, 0);
    assert!(cursor.is_balanced());
}

#[test]
fn scan_consumes_the_whole_input() {
    let input = "/eln/:document{/extra}";
    let (_, cursor) = scan(input);

    assert_eq!(cursor.index, input.len());
}

#[test]
fn unbalanced_close_leaves_a_negative_scope() {
    let (tokens, cursor) = scan("}");

    assert_eq!(tokens.to_vec(), vec![Token::GroupEnd { scope: -1 }]);
    assert!(!cursor.is_balanced());
    assert_eq!(cursor.scope, -1);
}

#[test]
fn unterminated_group_leaves_a_positive_scope() {
    let (_, cursor) = scan("{a");

    assert_eq!(cursor.scope, 1);
}

#[test]
fn multibyte_literals_stay_intact() {
    let tokens = tokenize("/café/:naïve");

    assert_eq!(
        tokens.to_vec(),
        vec![
            Token::DirectoryOperator,
            Token::Literal("café".to_string()),
            Token::DirectoryOperator,
            Token::ParameterOperator,
            Token::Literal("naïve".to_string()),
        ]
    );
}
