use expect_test::{expect, Expect};
use reckon_syntax::{parse, SyntaxError};

fn check(input: &str, expected: Expect) {
    let tree = parse(input).unwrap_or_else(|e| panic!("failed to parse {:?}: {}", input, e));
    expected.assert_eq(&tree.to_string());
}

#[test]
fn test_outline_sum() {
    check(
        "2+3",
        expect![[r#"
            Expression
              Term
                Factor
                  "2"
                B
              A
                "+"
                Term
                  Factor
                    "3"
                  B
                A
        "#]],
    );
}

#[test]
fn test_outline_product_chain() {
    check(
        "6/2*3",
        expect![[r#"
            Expression
              Term
                Factor
                  "6"
                B
                  "/"
                  Factor
                    "2"
                  B
                    "*"
                    Factor
                      "3"
                    B
              A
        "#]],
    );
}

#[test]
fn test_outline_negated_group() {
    check(
        "-(4)",
        expect![[r#"
            Expression
              Term
                Factor
                  "-"
                  Factor
                    "("
                    Expression
                      Term
                        Factor
                          "4"
                        B
                      A
                    ")"
                B
              A
        "#]],
    );
}

#[test]
fn test_outline_group_then_product() {
    check(
        "(1-2)*3",
        expect![[r#"
            Expression
              Term
                Factor
                  "("
                  Expression
                    Term
                      Factor
                        "1"
                      B
                    A
                      "-"
                      Term
                        Factor
                          "2"
                        B
                      A
                  ")"
                B
                  "*"
                  Factor
                    "3"
                  B
              A
        "#]],
    );
}

#[test]
fn test_parse_is_repeatable() {
    let input = "(2+8*5)-((5+5)*3)+2";
    assert_eq!(parse(input).unwrap(), parse(input).unwrap());
}

#[test]
fn test_lex_error_surfaces_through_parse() {
    let err = parse("2&3").unwrap_err();
    assert!(matches!(err, SyntaxError::LexError { .. }));
}
