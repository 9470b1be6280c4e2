// ABOUTME: Parser module for turning a token stream into Lisp data (Values)

use crate::error::InterpError;
use crate::token::{tokenize, Token, TokenCursor};
use crate::value::Value;

/// Parses exactly one datum from `input` (spec.md §4.2's `program := datum`
/// grammar). Trailing tokens after the datum are a syntax error, matching
/// the reference tokenizer/parser's "IsEnd after Read" check.
pub fn parse(input: &str) -> Result<Value, InterpError> {
    let tokens = tokenize(input)?;
    let mut cursor = TokenCursor::new(&tokens);

    if cursor.at_end() {
        return Err(InterpError::syntax("empty input"));
    }

    let datum = parse_datum(&mut cursor)?;

    if !cursor.at_end() {
        return Err(InterpError::syntax("unexpected trailing input after datum"));
    }

    Ok(datum)
}

/// Parses a single datum: an atom, a quoted datum, or a parenthesized list
/// (proper or dotted).
fn parse_datum(cursor: &mut TokenCursor) -> Result<Value, InterpError> {
    let token = cursor
        .advance()
        .ok_or_else(|| InterpError::syntax("unexpected end of input"))?
        .clone();

    match token {
        Token::Integer(n) => Ok(Value::Integer(n)),
        Token::Bool(b) => Ok(Value::Boolean(b)),
        Token::Symbol(name) => Ok(Value::symbol(name)),
        Token::Quote => {
            let quoted = parse_datum(cursor)?;
            Ok(Value::list(vec![Value::symbol("quote"), quoted]))
        }
        Token::Open => parse_list_tail(cursor),
        Token::Close => Err(InterpError::syntax("unexpected ')'")),
        Token::Dot => Err(InterpError::syntax("unexpected '.'")),
    }
}

/// Parses the contents of a list after the opening `(` has already been
/// consumed, producing either a proper list or an improper (dotted) pair
/// chain.
fn parse_list_tail(cursor: &mut TokenCursor) -> Result<Value, InterpError> {
    if matches!(cursor.peek(), Some(Token::Close)) {
        cursor.advance();
        return Ok(Value::EmptyList);
    }

    let mut elements = Vec::new();
    let mut tail = Value::EmptyList;

    loop {
        match cursor.peek() {
            None => return Err(InterpError::syntax("unterminated list")),
            Some(Token::Close) => {
                cursor.advance();
                break;
            }
            Some(Token::Dot) => {
                if elements.is_empty() {
                    return Err(InterpError::syntax(
                        "dot must be preceded by at least one list element",
                    ));
                }
                cursor.advance();
                tail = parse_datum(cursor)?;
                match cursor.advance() {
                    Some(Token::Close) => break,
                    _ => return Err(InterpError::syntax("malformed dotted pair")),
                }
            }
            Some(_) => {
                elements.push(parse_datum(cursor)?);
            }
        }
    }

    Ok(elements
        .into_iter()
        .rev()
        .fold(tail, |acc, item| Value::cons(item, acc)))
}
