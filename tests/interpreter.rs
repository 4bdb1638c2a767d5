use std::io::{self, Write};

use pretty_assertions::assert_eq;
use treelox::{
    ast::{Expr, LiteralValue, Stmt},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, ScopeId},
        evaluator::core::Interpreter,
        lexer::{Token, TokenKind},
        parser::core::Parser,
        scanner::Scanner,
        value::core::Value,
    },
};

fn ident(name: &str) -> Token {
    Token::new(TokenKind::Identifier, 1, name, None)
}

fn program(src: &str) -> Vec<Stmt> {
    let tokens = Scanner::new(src).scan().into_result().expect("scans");
    Parser::new(&tokens).parse().into_result().expect("parses")
}

fn output(interpreter: Interpreter<Vec<u8>>) -> String {
    String::from_utf8(interpreter.into_output()).expect("program output is UTF-8")
}

#[test]
fn environment_define_get_assign() {
    let mut env = Environment::new();
    env.define("a", Value::Number(1.0));

    assert_eq!(env.get(&ident("a")).unwrap(), Value::Number(1.0));

    env.assign(&ident("a"), Value::from("x")).unwrap();
    assert_eq!(env.get(&ident("a")).unwrap(), Value::from("x"));
}

#[test]
fn environment_assign_never_creates_a_binding() {
    let mut env = Environment::new();

    assert!(matches!(env.assign(&ident("missing"), Value::Nil),
                     Err(RuntimeError::UndefinedVariable { .. })));
    assert!(matches!(env.get(&ident("missing")),
                     Err(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn environment_scopes_nest_and_unwind() {
    let mut env = Environment::new();
    env.define("outer", Value::Number(1.0));

    let inner = env.push_scope();
    assert_eq!(env.current(), inner);
    assert_eq!(env.depth(), 2);

    env.define("inner", Value::Number(2.0));
    env.assign(&ident("outer"), Value::Number(3.0)).unwrap();
    assert_eq!(env.get(&ident("outer")).unwrap(), Value::Number(3.0));

    env.pop_scope();
    assert_eq!(env.current(), ScopeId::ROOT);
    assert_eq!(env.get(&ident("outer")).unwrap(), Value::Number(3.0));
    assert!(env.get(&ident("inner")).is_err());
}

#[test]
fn environment_root_scope_is_never_popped() {
    let mut env = Environment::new();
    env.define("a", Value::Nil);
    env.pop_scope();

    assert_eq!(env.depth(), 1);
    assert_eq!(env.get(&ident("a")).unwrap(), Value::Nil);
}

#[test]
fn globals_persist_across_interpret_calls() {
    let mut interpreter = Interpreter::new(Vec::new());

    interpreter.interpret(&program("var a = 1;")).unwrap();
    interpreter.interpret(&program("a = a + 1;")).unwrap();
    interpreter.interpret(&program("print a;")).unwrap();

    assert_eq!(output(interpreter), "2\n");
}

#[test]
fn interpret_returns_last_expression_statement() {
    let mut interpreter = Interpreter::new(Vec::new());

    assert_eq!(interpreter.interpret(&program("1; 2; print 3;")).unwrap(),
               Some(Value::Number(2.0)));
    assert_eq!(interpreter.interpret(&program("var x = 1;")).unwrap(), None);
    assert_eq!(interpreter.interpret(&[]).unwrap(), None);
}

#[test]
fn block_scope_is_popped_after_an_error() {
    let mut interpreter = Interpreter::new(Vec::new());

    let result = interpreter.interpret(&program("{ var a = 1; { var b = nil + 1; } }"));

    assert!(result.is_err());
    assert_eq!(interpreter.environment().depth(), 1);
    assert_eq!(interpreter.environment().current(), ScopeId::ROOT);
}

#[test]
fn evaluate_literals_and_grouping() {
    let mut interpreter = Interpreter::new(io::sink());

    assert_eq!(interpreter.evaluate(&Expr::Literal { value: LiteralValue::Nil }).unwrap(),
               Value::Nil);
    assert_eq!(interpreter.evaluate(&Expr::literal("s")).unwrap(), Value::from("s"));
    assert_eq!(interpreter.evaluate(&Expr::grouping(Expr::literal(true))).unwrap(),
               Value::Bool(true));
}

#[test]
fn runtime_errors_carry_the_line() {
    let mut interpreter = Interpreter::new(Vec::new());
    let error = interpreter.interpret(&program("var a = 1;\n\nprint -nil;")).unwrap_err();

    assert_eq!(error.line(), Some(3));
    assert_eq!(error.to_string(), "Error on line 3: Invalid operand for '-': nil.");

    let error = interpreter.interpret(&program("\"a\" < \"b\";")).unwrap_err();
    assert_eq!(error.to_string(), "Error on line 1: Invalid operand for '<': \"a\".");

    let error = interpreter.interpret(&program("\nprint nope;")).unwrap_err();
    assert_eq!(error.to_string(), "Error on line 2: Undefined variable 'nope'.");
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_failure_is_a_runtime_error() {
    let mut interpreter = Interpreter::new(FailingSink);
    let error = interpreter.interpret(&program("print 1;")).unwrap_err();

    assert!(matches!(error, RuntimeError::Output(_)));
    assert_eq!(error.line(), None);
}

#[test]
#[should_panic(expected = "eval_binary used with non binary operator")]
fn logical_operators_are_not_routed_as_binary() {
    let and = Token::new(TokenKind::And, 1, "and", None);

    let _ = Interpreter::<Vec<u8>>::eval_binary(&and, Value::Bool(true), Value::Bool(true));
}

#[test]
fn binary_operators_are_routed() {
    type Eval = Interpreter<Vec<u8>>;
    let eval = |kind, lexeme: &str, left, right| {
        Eval::eval_binary(&Token::new(kind, 1, lexeme, None), left, right).unwrap()
    };

    assert_eq!(eval(TokenKind::Slash, "/", Value::Number(1.0), Value::Number(4.0)),
               Value::Number(0.25));
    assert_eq!(eval(TokenKind::LessEqual, "<=", Value::Number(2.0), Value::Number(2.0)),
               Value::Bool(true));
    assert_eq!(eval(TokenKind::BangEqual, "!=", Value::Nil, Value::Bool(false)),
               Value::Bool(true));
}

#[test]
fn value_display() {
    assert_eq!(Value::Number(25.0).to_string(), "25");
    assert_eq!(Value::Number(-3.0).to_string(), "-3");
    assert_eq!(Value::Number(2.5).to_string(), "2.5");
    assert_eq!(Value::Number(1.0 / 0.0).to_string(), "inf");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::from("raw text").to_string(), "raw text");
}

#[test]
fn value_truthiness() {
    assert!(!Value::Nil.is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::Bool(true).is_truthy());
    assert!(Value::Number(0.0).is_truthy());
    assert!(Value::from("").is_truthy());
}

#[test]
fn value_equality_never_crosses_types() {
    assert_ne!(Value::Nil, Value::Bool(false));
    assert_ne!(Value::Number(0.0), Value::Bool(false));
    assert_ne!(Value::Number(1.0), Value::from("1"));
    assert_eq!(Value::Nil, Value::Nil);
}
