//! End-to-end tests for WHERE strings: parse, then render.

mod common;
use common::*;

use oxide_sql_expr::{LexError, ParseError, SqlValue};

// ===================================================================
// Rendering of parsed expressions
// ===================================================================

#[test]
fn single_comparison() {
    let (sql, params) = where_mysql("age >= 18");
    assert_eq!(sql, "`age` >= ?");
    assert_eq!(params, vec![SqlValue::Int(18)]);
}

#[test]
fn and_binds_tighter_than_or() {
    let (sql, params) = where_mysql("a = 1 AND b = 2 OR c = 3");
    assert_eq!(sql, "((`a` = ? AND `b` = ?) OR `c` = ?)");
    assert_eq!(
        params,
        vec![SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)]
    );

    let (sql, _) = where_mysql("a = 1 OR b = 2 AND c = 3");
    assert_eq!(sql, "(`a` = ? OR (`b` = ? AND `c` = ?))");
}

#[test]
fn parentheses_regroup() {
    let (sql, _) = where_mysql("(a = 1 OR b = 2) AND c = 3");
    assert_eq!(sql, "((`a` = ? OR `b` = ?) AND `c` = ?)");
}

#[test]
fn not_wraps_its_operand() {
    let (sql, _) = where_mysql("NOT status = 'x' AND id > 0");
    assert_eq!(sql, "(NOT (`status` = ?) AND `id` > ?)");
    let (sql, _) = where_mysql("NOT (a = 1 OR b = 2)");
    assert_eq!(sql, "NOT ((`a` = ? OR `b` = ?))");
}

#[test]
fn nested_function_call() {
    let (sql, params) = where_mysql("UPPER(TRIM(name)) = 'JOHN'");
    assert!(sql.contains("UPPER(TRIM(`name`)) = ?"), "{sql}");
    assert_eq!(params, vec![text("JOHN")]);
}

#[test]
fn function_names_are_case_insensitive() {
    let (sql, _) = where_mysql("char_length(Name) < 10");
    assert_eq!(sql, "CHAR_LENGTH(`Name`) < ?");
}

#[test]
fn aggregate_in_having_position() {
    let (sql, params) = where_mysql("SUM(amount) > 100.5");
    assert_eq!(sql, "SUM(`amount`) > ?");
    assert_eq!(params, vec![SqlValue::Float(100.5)]);
}

#[test]
fn in_list_arity() {
    let (sql, params) = where_mysql("id IN (1, 2, 3)");
    assert_eq!(sql, "`id` IN (?, ?, ?)");
    assert_eq!(
        params,
        vec![SqlValue::Int(1), SqlValue::Int(2), SqlValue::Int(3)]
    );
    let (sql, _) = where_mysql("id NOT IN ('a')");
    assert_eq!(sql, "`id` NOT IN (?)");
}

#[test]
fn null_checks_bind_nothing() {
    let (sql, params) = where_mysql("a IS NULL OR b IS NOT NULL");
    assert_eq!(sql, "(`a` IS NULL OR `b` IS NOT NULL)");
    assert!(params.is_empty());
}

#[test]
fn like_patterns() {
    let (sql, params) = where_mysql(r#"email LIKE "%@example.com" AND name NOT LIKE 'x%'"#);
    assert_eq!(sql, "(`email` LIKE ? AND `name` NOT LIKE ?)");
    assert_eq!(params, vec![text("%@example.com"), text("x%")]);
}

#[test]
fn qualified_columns_quote_each_segment() {
    let (sql, _) = where_mysql("users.id = 7");
    assert_eq!(sql, "`users`.`id` = ?");
}

#[test]
fn backtick_identifier_passes_through() {
    let (sql, _) = where_mysql("`select` = 1");
    assert_eq!(sql, "`select` = ?");
}

#[test]
fn unterminated_backtick_is_tolerated() {
    // The identifier swallows the rest of the input, so the comparison is
    // missing rather than the quote.
    let err = parse_err("`abc = 1");
    assert!(matches!(err, ParseError::UnexpectedToken { .. }), "{err:?}");
}

#[test]
fn string_escapes() {
    let (_, params) = where_mysql(r"name = 'O\'Brien'");
    assert_eq!(params, vec![text("O'Brien")]);
}

// ===================================================================
// Errors
// ===================================================================

#[test]
fn error_multi_argument_function() {
    let err = parse_err("ROUND(price, 2) = 19.99");
    assert_eq!(
        err,
        ParseError::MultiArgumentFunction {
            name: String::from("ROUND"),
            position: 0,
        }
    );
    assert!(err.to_string().contains("ROUND"));
}

#[test]
fn error_literal_first_argument() {
    let err = parse_err("ABS(-5, amount) = 5");
    assert_eq!(
        err,
        ParseError::MultiArgumentFunction {
            name: String::from("ABS"),
            position: 0,
        }
    );
    assert!(err.to_string().contains("one column argument"));

    assert!(matches!(
        parse_err("LENGTH(42) > 1"),
        ParseError::UnexpectedToken { ref expected, position: 7, .. } if expected == "a single column argument"
    ));
}

#[test]
fn error_unknown_function() {
    let err = parse_err("a = 1 AND NOW(ts) > 3");
    assert_eq!(
        err,
        ParseError::UnknownFunction {
            name: String::from("NOW"),
            position: 10,
        }
    );
}

#[test]
fn error_empty_in_list() {
    let err = parse_err("id IN ()");
    assert_eq!(err, ParseError::EmptyInList { position: 6 });
}

#[test]
fn error_like_requires_string() {
    let err = parse_err("name LIKE 5");
    assert!(matches!(err, ParseError::NonStringPattern { position: 10, .. }));
}

#[test]
fn error_unclosed_paren() {
    assert_eq!(
        parse_err("(a = 1 AND b = 2"),
        ParseError::UnclosedParen { position: 0 }
    );
    assert_eq!(
        parse_err("UPPER(name = 'x'"),
        ParseError::UnexpectedToken {
            expected: String::from("`)`"),
            found: String::from("operator `=`"),
            position: 11,
        }
    );
    assert_eq!(
        parse_err("id IN (1, 2"),
        ParseError::UnclosedParen { position: 6 }
    );
}

#[test]
fn error_missing_value() {
    let err = parse_err("a = ");
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            expected: String::from("string, number or NULL"),
            found: String::from("end of input"),
            position: 4,
        }
    );
}

#[test]
fn error_value_must_be_literal() {
    assert!(matches!(
        parse_err("a = b"),
        ParseError::UnexpectedToken { position: 4, .. }
    ));
}

#[test]
fn error_trailing_tokens() {
    let err = parse_err("a = 1 b = 2");
    assert!(
        matches!(&err, ParseError::UnexpectedToken { expected, position: 6, .. } if expected == "AND, OR or end of input"),
        "{err:?}"
    );
}

#[test]
fn error_missing_operand_after_not() {
    assert!(matches!(
        parse_err("a NOT = 1"),
        ParseError::UnexpectedToken { .. }
    ));
}

#[test]
fn error_is_requires_null() {
    assert!(matches!(
        parse_err("a IS 1"),
        ParseError::UnexpectedToken { .. }
    ));
}

#[test]
fn error_empty_input() {
    assert!(matches!(
        parse_err(""),
        ParseError::UnexpectedToken { position: 0, .. }
    ));
}

#[test]
fn error_lexer_failures_propagate() {
    assert_eq!(
        parse_err("name = 'bob"),
        ParseError::Lex(LexError::UnterminatedString { offset: 7 })
    );
    assert_eq!(
        parse_err("a = 1 * 2"),
        ParseError::Lex(LexError::UnexpectedCharacter {
            ch: '*',
            offset: 6
        })
    );
}

#[test]
fn error_messages_name_the_input() {
    let message = parse_err("name LIKE 5").to_string();
    assert_eq!(
        message,
        "LIKE pattern at position 10 must be a string, found number `5`"
    );
}
