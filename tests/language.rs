use pretty_assertions::assert_eq;
use treelox::{
    error::{LoxError, RuntimeError},
    interpreter::value::core::Value,
    run,
};

fn output_of(src: &str) -> String {
    let mut out = Vec::new();
    if let Err(e) = run(src, &mut out) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(out).expect("program output is UTF-8")
}

fn assert_output(src: &str, expected: &str) {
    assert_eq!(output_of(src), expected);
}

fn assert_success(src: &str) {
    if let Err(e) = run(src, Vec::new()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> LoxError {
    match run(src, Vec::new()) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn result_of(src: &str) -> Value {
    run(src, Vec::new()).expect("script runs")
                         .expect("script ends with an expression statement")
}

#[test]
fn arithmetic() {
    assert_eq!(result_of("(2 + 3) * 5;"), Value::Number(25.0));
    assert_eq!(result_of("7 - 2;"), Value::Number(5.0));
    assert_eq!(result_of("2 - -7;"), Value::Number(9.0));
    assert_eq!(result_of("10 / 4;"), Value::Number(2.5));
    assert_eq!(result_of("1 + 2 * 3;"), Value::Number(7.0));
    assert_eq!(result_of("-2 * 3;"), Value::Number(-6.0));
}

#[test]
fn print_formats_values() {
    assert_output("print (2 + 3) * 5;", "25\n");
    assert_output("print 2.5;", "2.5\n");
    assert_output("print -3;", "-3\n");
    assert_output("print nil;", "nil\n");
    assert_output("print true;", "true\n");
    assert_output("print \"hello\";", "hello\n");
    assert_output("print 1 / 0;", "inf\n");
}

#[test]
fn truthiness() {
    assert_eq!(result_of("!0;"), Value::Bool(false));
    assert_eq!(result_of("!nil;"), Value::Bool(true));
    assert_eq!(result_of("!\"\";"), Value::Bool(false));
    assert_eq!(result_of("!!false;"), Value::Bool(false));
    assert_output("if (0) print \"zero is truthy\";", "zero is truthy\n");
}

#[test]
fn string_concatenation() {
    assert_eq!(result_of("\"h\" + \"i\";"), Value::from("hi"));
    assert_output("var a = \"foo\"; var b = \"bar\"; print a + b;", "foobar\n");

    assert!(matches!(assert_failure("1 + \"1\";"),
                     LoxError::Runtime(RuntimeError::InvalidOperand { .. })));
    assert!(matches!(assert_failure("\"1\" + 1;"),
                     LoxError::Runtime(RuntimeError::InvalidOperand { .. })));
}

#[test]
fn invalid_operand_names_the_operator() {
    let error = assert_failure("1 + nil;");
    let LoxError::Runtime(RuntimeError::InvalidOperand { operator, value }) = &error else {
        panic!("unexpected error: {error:?}");
    };
    assert_eq!(operator.lexeme, "+");
    assert_eq!(value, &Value::Nil);
    assert_eq!(error.to_string(), "Error on line 1: Invalid operand for '+': nil.");

    assert_failure("-\"x\";");
    assert_failure("\"a\" * 2;");
    assert_failure("true < 1;");
    assert_failure("nil - nil;");
}

#[test]
fn equality() {
    assert_eq!(result_of("1 == 1.0;"), Value::Bool(true));
    assert_eq!(result_of("nil == nil;"), Value::Bool(true));
    assert_eq!(result_of("nil == false;"), Value::Bool(false));
    assert_eq!(result_of("0 == false;"), Value::Bool(false));
    assert_eq!(result_of("1 == \"1\";"), Value::Bool(false));
    assert_eq!(result_of("\"a\" != \"b\";"), Value::Bool(true));
    assert_eq!(result_of("0 / 0 == 0 / 0;"), Value::Bool(false));
}

#[test]
fn comparisons() {
    assert_eq!(result_of("1 < 2;"), Value::Bool(true));
    assert_eq!(result_of("2 <= 2;"), Value::Bool(true));
    assert_eq!(result_of("1 > 2;"), Value::Bool(false));
    assert_eq!(result_of("3 >= 4;"), Value::Bool(false));
}

#[test]
fn logical_operators_short_circuit() {
    assert_output("var foo = 1; false and (foo = 2); print foo;", "1\n");
    assert_output("var foo = 1; true or (foo = 2); print foo;", "1\n");
    assert_output("var foo = 1; true and (foo = 2); print foo;", "2\n");
    assert_output("var foo = 1; false or (foo = 2); print foo;", "2\n");
}

#[test]
fn logical_operators_return_operands() {
    assert_eq!(result_of("nil or \"x\";"), Value::from("x"));
    assert_eq!(result_of("1 and 2;"), Value::Number(2.0));
    assert_eq!(result_of("nil and 2;"), Value::Nil);
    assert_eq!(result_of("\"a\" or 2;"), Value::from("a"));
}

#[test]
fn variables() {
    assert_output("var a; print a;", "nil\n");
    assert_output("var a = 1; var a = 2; print a;", "2\n");
    assert_output("var a = 1; a = a + 1; print a;", "2\n");
    assert_output("var a; var b; a = b = 3; print a; print b;", "3\n3\n");
    assert_eq!(result_of("var a = 1; a = 5;"), Value::Number(5.0));
}

#[test]
fn undefined_variables() {
    assert!(matches!(assert_failure("oops;"),
                     LoxError::Runtime(RuntimeError::UndefinedVariable { .. })));
    assert!(matches!(assert_failure("oops = 1;"),
                     LoxError::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn block_scoping() {
    assert_output("var a = \"outer\"; { var a = \"inner\"; print a; } print a;",
                  "inner\nouter\n");
    assert_output("var a = 1; { a = 2; } print a;", "2\n");
    assert_output("var a = 1; { var b = a + 1; { print a + b; } }", "3\n");
    assert_failure("{ var hidden = 1; } print hidden;");
}

#[test]
fn if_else() {
    assert_output("if (true) print 1; else print 2;", "1\n");
    assert_output("if (nil) print 1; else print 2;", "2\n");
    assert_output("if (false) print 1;", "");
    assert_output("if (true) if (false) print 1; else print 2;", "2\n");
}

#[test]
fn while_loop() {
    assert_output("var i = 0; while (i < 3) { print i; i = i + 1; }", "0\n1\n2\n");
    assert_output("while (false) print 1;", "");
}

#[test]
fn for_loop() {
    assert_output("for (var i = 0; i < 3; i = i + 1) print i;", "0\n1\n2\n");
    assert_output("var i = 10; for (i = 0; i < 2; i = i + 1) {} print i;", "2\n");
    assert_output("var i = 0; for (; i < 2;) i = i + 1; print i;", "2\n");
    assert_failure("for (var i = 0; i < 1; i = i + 1) {} print i;");
}

#[test]
fn fibonacci() {
    let src = "
        var a = 0;
        var b = 1;
        for (var i = 0; i < 10; i = i + 1) {
            print a;
            var next = a + b;
            a = b;
            b = next;
        }
    ";
    assert_output(src, "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n");
}

#[test]
fn output_before_runtime_error_is_kept() {
    let mut out = Vec::new();
    let result = run("print 1; print nil + 1; print 2;", &mut out);

    assert!(result.is_err());
    assert_eq!(out, b"1\n");
}

#[test]
fn syntax_errors_prevent_execution() {
    let mut out = Vec::new();
    let error = run("print 1; print 2", &mut out).unwrap_err();

    assert!(out.is_empty());
    assert_eq!(error.exit_code(), 65);
    assert_eq!(error.to_string(), "Error on line 1 at end: Expect ';' after value.");
}

#[test]
fn lexical_errors() {
    let error = assert_failure("#");
    assert_eq!(error.to_string(), "Error on line 1: Unexpected character '#'.");
    assert_eq!(error.exit_code(), 65);

    let error = assert_failure("print \"open;");
    assert_eq!(error.to_string(), "Error on line 1: Unterminated string.");
}

#[test]
fn runtime_error_exit_code() {
    assert_eq!(assert_failure("-nil;").exit_code(), 70);
}

#[test]
fn comments_and_whitespace() {
    assert_success("// nothing here\n\t \r\n");
    assert_output("print 1; // trailing\n// whole line\nprint 2;", "1\n2\n");
}

#[test]
fn empty_program() {
    assert_eq!(run("", Vec::new()).expect("empty program runs"), None);
}
