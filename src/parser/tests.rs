//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs
//! including:
//!
//! - Let and return statements
//! - Prefix and binary expressions with precedence/associativity
//! - Conditionals, function literals, and call expressions
//! - Error collection and statement-level recovery

use crate::ast::ast::{Expression, Program, Statement};
use crate::errors::errors::Error;

use super::parser::parse;

fn parse_valid(source: &str) -> Program {
    let (program, errors) = parse(source);
    assert!(errors.is_empty(), "unexpected syntax errors: {:?}", errors);

    program
}

fn parse_invalid(source: &str) -> (Program, Vec<Error>) {
    let (program, errors) = parse(source);
    assert!(!errors.is_empty(), "expected syntax errors for {:?}", source);

    (program, errors)
}

#[test]
fn test_parse_let_statements() {
    let program = parse_valid("let x = 5; let y = 10; let foobar = 838383;");

    assert_eq!(program.statements.len(), 3);

    let expected_names = ["x", "y", "foobar"];
    for (statement, expected) in program.statements.iter().zip(expected_names) {
        assert_eq!(statement.token_literal(), "let");

        let Statement::Let(stmt) = statement else {
            panic!("expected a let statement, got {:?}", statement);
        };
        assert_eq!(stmt.name.value, expected);
    }
}

#[test]
fn test_parse_return_statements() {
    let program = parse_valid("return 5; return 10; return add(15);");

    assert_eq!(program.statements.len(), 3);

    for statement in &program.statements {
        assert_eq!(statement.token_literal(), "return");
        assert!(matches!(statement, Statement::Return(_)));
    }
}

#[test]
fn test_parse_identifier_expression() {
    let program = parse_valid("foobar;");

    assert_eq!(program.statements.len(), 1);

    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Symbol(symbol) = &stmt.expression else {
        panic!("expected a symbol expression");
    };
    assert_eq!(symbol.value, "foobar");
}

#[test]
fn test_parse_integer_literal() {
    let program = parse_valid("5;");

    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Integer(integer) = &stmt.expression else {
        panic!("expected an integer expression");
    };
    assert_eq!(integer.value, 5);
    assert_eq!(integer.token.value, "5");
}

#[test]
fn test_parse_boolean_literals() {
    let program = parse_valid("true; false;");

    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.statements[0].to_string(), "true");
    assert_eq!(program.statements[1].to_string(), "false");
}

#[test]
fn test_parse_prefix_expressions() {
    let cases = [
        ("!5;", "(!5)"),
        ("-15;", "(-15)"),
        ("!true;", "(!true)"),
        ("!!x;", "(!(!x))"),
    ];

    for (source, expected) in cases {
        let program = parse_valid(source);
        assert_eq!(program.to_string(), expected, "source: {:?}", source);
    }
}

#[test]
fn test_operator_precedence() {
    // Structural correctness is asserted through the canonical, fully
    // parenthesized rendering of the tree.
    let cases = [
        ("-a * b", "((-a) * b)"),
        ("!-a", "(!(-a))"),
        ("a + b + c", "((a + b) + c)"),
        ("a + b - c", "((a + b) - c)"),
        ("a * b * c", "((a * b) * c)"),
        ("a * b / c", "((a * b) / c)"),
        ("a + b / c", "(a + (b / c))"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
        ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
        ),
        ("true", "true"),
        ("false", "false"),
        ("3 > 5 == false", "((3 > 5) == false)"),
        ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
        ("(5 + 5) * 2", "((5 + 5) * 2)"),
        ("(a + b) * c", "((a + b) * c)"),
        ("2 / (5 + 5)", "(2 / (5 + 5))"),
        ("-(5 + 5)", "(-(5 + 5))"),
        ("!(true == true)", "(!(true == true))"),
        ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
        (
            "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
            "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
        ),
        (
            "add(a + b + c * d / f + g)",
            "add((((a + b) + ((c * d) / f)) + g))",
        ),
    ];

    for (source, expected) in cases {
        let program = parse_valid(source);
        assert_eq!(program.to_string(), expected, "source: {:?}", source);
    }
}

#[test]
fn test_canonical_form_round_trips() {
    // Re-parsing a canonical rendering must reproduce the identical
    // rendering: parenthesization makes the tree shape unambiguous.
    let sources = [
        "a + b * c",
        "-a * b",
        "!(x == y)",
        "add(a, b * c)",
        "1 + 2 + 3 < 4 * 5",
    ];

    for source in sources {
        let first = parse_valid(source).to_string();
        let second = parse_valid(&first).to_string();

        assert_eq!(first, second, "source: {:?}", source);
    }
}

#[test]
fn test_parse_if_expression() {
    let program = parse_valid("if (x < y) { x }");

    assert_eq!(program.statements.len(), 1);

    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::If(if_expr) = &stmt.expression else {
        panic!("expected an if expression");
    };

    assert_eq!(if_expr.condition.to_string(), "(x < y)");
    assert_eq!(if_expr.consequence.statements.len(), 1);
    assert!(if_expr.alternative.is_none());
}

#[test]
fn test_parse_if_else_expression() {
    let program = parse_valid("if (x < y) { x } else { y }");

    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::If(if_expr) = &stmt.expression else {
        panic!("expected an if expression");
    };

    let alternative = if_expr.alternative.as_ref().expect("expected an else branch");
    assert_eq!(alternative.statements.len(), 1);
    assert_eq!(program.to_string(), "if(x < y) xelse y");
}

#[test]
fn test_parse_function_literal() {
    let program = parse_valid("fn(x, y) { x + y; }");

    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Fn(function) = &stmt.expression else {
        panic!("expected a function literal");
    };

    assert_eq!(function.parameters.len(), 2);
    assert_eq!(function.parameters[0].value, "x");
    assert_eq!(function.parameters[1].value, "y");
    assert_eq!(function.body.statements.len(), 1);
    assert_eq!(function.to_string(), "fn(x, y) (x + y)");
}

#[test]
fn test_parse_function_parameters() {
    let cases: [(&str, &[&str]); 3] = [
        ("fn() {};", &[]),
        ("fn(x) {};", &["x"]),
        ("fn(x, y, z) {};", &["x", "y", "z"]),
    ];

    for (source, expected) in cases {
        let program = parse_valid(source);

        let Statement::Expression(stmt) = &program.statements[0] else {
            panic!("expected an expression statement");
        };
        let Expression::Fn(function) = &stmt.expression else {
            panic!("expected a function literal");
        };

        let names = function
            .parameters
            .iter()
            .map(|parameter| parameter.value.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(names, expected, "source: {:?}", source);
    }
}

#[test]
fn test_parse_call_expression() {
    let program = parse_valid("add(1, 2 * 3, 4 + 5);");

    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Call(call) = &stmt.expression else {
        panic!("expected a call expression");
    };

    assert_eq!(call.function.to_string(), "add");
    assert_eq!(call.arguments.len(), 3);
    assert_eq!(call.arguments[0].to_string(), "1");
    assert_eq!(call.arguments[1].to_string(), "(2 * 3)");
    assert_eq!(call.arguments[2].to_string(), "(4 + 5)");
}

#[test]
fn test_parse_call_without_arguments() {
    let program = parse_valid("ping();");

    let Statement::Expression(stmt) = &program.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expression::Call(call) = &stmt.expression else {
        panic!("expected a call expression");
    };
    assert!(call.arguments.is_empty());
}

#[test]
fn test_trailing_operator_reports_error() {
    // A dangling operator must produce a collected error, never a panic.
    let (program, errors) = parse_invalid("1 + ");

    assert!(program.statements.is_empty());
    assert_eq!(errors[0].get_error_name(), "NoPrefixRule");
}

#[test]
fn test_missing_assignment_reports_error() {
    let (program, errors) = parse_invalid("let x 5;");

    assert!(program.statements.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnexpectedToken");
    assert_eq!(
        errors[0].message(),
        "expected next token to be Assignment, got Integer instead"
    );
}

#[test]
fn test_recovery_continues_past_bad_statement() {
    // The bad middle statement is reported and skipped; its neighbors still
    // parse in the same run.
    let (program, errors) = parse_invalid("let x = 5; let = 10; let z = 3;");

    assert_eq!(errors.len(), 1);
    assert_eq!(program.statements.len(), 2);
    assert_eq!(program.statements[0].to_string(), "let x = 5;");
    assert_eq!(program.statements[1].to_string(), "let z = 3;");
}

#[test]
fn test_recovery_skips_close_braces_after_error_in_block() {
    // The boundary after the bad statement sits inside the `if` body; the
    // block's closing brace must not surface as a second, spurious error.
    let (program, errors) = parse_invalid("if (x) { let = 1; } foo;");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_error_name(), "UnexpectedToken");
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0].to_string(), "foo");
}

#[test]
fn test_multiple_errors_in_one_pass() {
    let (_, errors) = parse_invalid("let x 5; let = 10; @;");

    assert_eq!(errors.len(), 3);
    assert_eq!(errors[0].get_error_name(), "UnexpectedToken");
    assert_eq!(errors[1].get_error_name(), "UnexpectedToken");
    assert_eq!(errors[2].get_error_name(), "IllegalCharacter");
}

#[test]
fn test_illegal_character_is_fatal_to_statement() {
    let (program, errors) = parse_invalid("let a = ? 2;");

    assert!(program.statements.is_empty());
    assert_eq!(errors[0].get_error_name(), "IllegalCharacter");
    assert_eq!(errors[0].message(), "illegal character \"?\"");
}

#[test]
fn test_missing_close_paren_reports_error() {
    let (_, errors) = parse_invalid("(1 + 2;");

    assert_eq!(errors[0].get_error_name(), "UnexpectedToken");
    assert_eq!(
        errors[0].message(),
        "expected next token to be CloseParen, got Semicolon instead"
    );
}

#[test]
fn test_unterminated_block_reports_error() {
    let (_, errors) = parse_invalid("if (x) { y");

    assert_eq!(errors[0].get_error_name(), "UnexpectedToken");
    assert_eq!(
        errors[0].message(),
        "expected next token to be CloseCurly, got EOF instead"
    );
}

#[test]
fn test_integer_overflow_reports_error() {
    let (program, errors) = parse_invalid("9999999999999999999999;");

    assert!(program.statements.is_empty());
    assert_eq!(errors[0].get_error_name(), "IntegerParseError");
}

#[test]
fn test_parse_empty_program() {
    let program = parse_valid("");

    assert!(program.statements.is_empty());
    assert_eq!(program.token_literal(), "");
}
