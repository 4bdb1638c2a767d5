use pretty_assertions::assert_eq;
use proptest::prelude::*;
use treelox::{
    ast::{Expr, LiteralValue, Stmt},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::Parser,
        scanner::Scanner,
    },
    printer::AstPrinter,
};

fn token(kind: TokenKind, lexeme: &str) -> Token {
    Token::new(kind, 1, lexeme, None)
}

fn variable(name: &str) -> Expr {
    Expr::Variable { name: token(TokenKind::Identifier, name) }
}

fn reparse(source: &str) -> Expr {
    let tokens = Scanner::new(source).scan().into_result().expect("scans");
    Parser::new(&tokens).parse_expression()
                        .unwrap_or_else(|e| panic!("{source:?} does not parse: {e}"))
}

#[test]
fn prints_expressions() {
    let expr = Expr::binary(Expr::literal(13.0),
                            token(TokenKind::Plus, "+"),
                            Expr::binary(Expr::literal(2.0),
                                         token(TokenKind::Star, "*"),
                                         Expr::literal(3.5)));
    assert_eq!(AstPrinter::print_expr(&expr), "(+ 13 (* 2 3.5))");

    let assign = Expr::Assign { name:  token(TokenKind::Identifier, "foo"),
                                value: Box::new(Expr::unary(token(TokenKind::Minus, "-"),
                                                            Expr::literal(1.0))), };
    assert_eq!(AstPrinter::print_expr(&assign), "(foo = (- 1))");

    let logical = Expr::logical(Expr::literal(1.0),
                                token(TokenKind::Or, "or"),
                                Expr::logical(Expr::literal(2.0),
                                              token(TokenKind::And, "and"),
                                              Expr::literal(3.0)));
    assert_eq!(AstPrinter::print_expr(&logical), "(or 1 (and 2 3))");

    assert_eq!(AstPrinter::print_expr(&Expr::grouping(Expr::literal(123.0))), "(group 123)");
    assert_eq!(AstPrinter::print_expr(&variable("foo")), "foo");
}

#[test]
fn prints_literals() {
    assert_eq!(AstPrinter::print_expr(&Expr::literal("hi")), "hi");
    assert_eq!(AstPrinter::print_expr(&Expr::literal(true)), "true");
    assert_eq!(AstPrinter::print_expr(&Expr::literal(false)), "false");
    assert_eq!(AstPrinter::print_expr(&Expr::Literal { value: LiteralValue::Nil }), "nil");
}

fn print(expression: Expr) -> Box<Stmt> {
    Box::new(Stmt::Print { expression })
}

#[test]
fn prints_statements() {
    let condition = Expr::binary(variable("foo"),
                                 token(TokenKind::Greater, ">"),
                                 Expr::literal(0.0));

    let if_else = Stmt::If { condition:   condition.clone(),
                             then_branch: print(Expr::literal("yes")),
                             else_branch: Some(print(Expr::literal("no"))), };
    assert_eq!(AstPrinter::print_stmt(&if_else), "(if (> foo 0) (print yes) (print no))");

    let if_only = Stmt::If { condition:   Expr::literal(true),
                             then_branch: print(Expr::literal("yes")),
                             else_branch: None, };
    assert_eq!(AstPrinter::print_stmt(&if_only), "(if true (print yes))");

    let while_loop = Stmt::While { condition,
                                   body: print(variable("foo")) };
    assert_eq!(AstPrinter::print_stmt(&while_loop), "(while (> foo 0) (print foo))");

    let foo = Stmt::Var { name:        token(TokenKind::Identifier, "foo"),
                          initializer: Some(Expr::literal(true)), };
    let bar = Stmt::Var { name:        token(TokenKind::Identifier, "bar"),
                          initializer: None, };
    let block = Stmt::Block { statements: vec![Stmt::Expression { expression:
                                                                      Expr::literal(123.0) },
                                               foo,
                                               bar] };
    assert_eq!(AstPrinter::print_stmt(&block), "{ (expr 123) (var foo = true) (var bar) }");
    assert_eq!(AstPrinter::print_stmt(&Stmt::Block { statements: vec![] }), "{ }");
}

#[test]
fn to_source_keeps_groupings_and_quotes_strings() {
    let expr = Expr::binary(Expr::grouping(Expr::binary(Expr::literal(1.0),
                                                        token(TokenKind::Plus, "+"),
                                                        Expr::literal(2.0))),
                            token(TokenKind::Star, "*"),
                            Expr::literal("x"));

    assert_eq!(AstPrinter::to_source(&expr), "(1 + 2) * \"x\"");
    assert_eq!(reparse(&AstPrinter::to_source(&expr)), expr);
}

fn literal() -> impl Strategy<Value = Expr> {
    prop_oneof![Just(Expr::Literal { value: LiteralValue::Nil }),
                any::<bool>().prop_map(Expr::literal),
                (0.0..1.0e6f64).prop_map(Expr::literal),
                "[a-z ]{0,8}".prop_map(|s| Expr::literal(s.as_str())),]
}

fn unary_operator() -> impl Strategy<Value = Token> {
    prop::sample::select(vec![(TokenKind::Minus, "-"), (TokenKind::Bang, "!")])
        .prop_map(|(kind, lexeme)| token(kind, lexeme))
}

fn binary_operator() -> impl Strategy<Value = Token> {
    prop::sample::select(vec![(TokenKind::Plus, "+"),
                              (TokenKind::Minus, "-"),
                              (TokenKind::Star, "*"),
                              (TokenKind::Slash, "/"),
                              (TokenKind::EqualEqual, "=="),
                              (TokenKind::BangEqual, "!="),
                              (TokenKind::Less, "<"),
                              (TokenKind::LessEqual, "<="),
                              (TokenKind::Greater, ">"),
                              (TokenKind::GreaterEqual, ">=")])
        .prop_map(|(kind, lexeme)| token(kind, lexeme))
}

/// Wraps binary operands in a grouping, as the parser requires to build a
/// binary node below another operator.
fn operand(expr: Expr) -> Expr {
    if matches!(expr, Expr::Binary { .. }) {
        Expr::grouping(expr)
    } else {
        expr
    }
}

fn expression() -> impl Strategy<Value = Expr> {
    literal().prop_recursive(4, 32, 2, |inner| {
                 let unary = (unary_operator(), inner.clone()).prop_map(|(operator, right)| {
                                 Expr::unary(operator, operand(right))
                             });
                 let binary = (inner.clone(), binary_operator(), inner.clone()).prop_map(
                     |(left, operator, right)| Expr::binary(operand(left), operator, operand(right)),
                 );

                 prop_oneof![inner.prop_map(Expr::grouping), unary, binary]
             })
}

proptest! {
    #[test]
    fn to_source_round_trips(expr in expression()) {
        let source = AstPrinter::to_source(&expr);
        prop_assert_eq!(reparse(&source), expr, "source: {}", source);
    }
}
