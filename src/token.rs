// ABOUTME: Tokenizer module for turning Lisp source text into a token stream

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, multispace1, one_of},
    combinator::{opt, recognize, value},
    multi::many0,
    IResult, Parser,
};

use crate::error::InterpError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Open,
    Close,
    Quote,
    Dot,
    Bool(bool),
    Integer(i64),
    Symbol(String),
}

/// First character of a symbol: a letter, one of `<=>`, `*`, `/`, or `#`
/// followed by a non-boolean letter (the boolean literals `#t`/`#f` are
/// tokenized separately, before a bare symbol scan is attempted).
fn is_symbol_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '<' | '=' | '>' | '*' | '/' | '#')
}

/// Characters allowed after the first symbol character.
fn is_symbol_continue(c: char) -> bool {
    is_symbol_start(c) || c.is_ascii_digit() || matches!(c, '?' | '!' | '-')
}

fn ws_and_comments(input: &str) -> IResult<&str, ()> {
    many0(alt((
        value((), multispace1),
        value((), (char(';'), take_while(|c| c != '\n'))),
    )))
    .map(|_| ())
    .parse(input)
}

/// `#t`/`#f` only count as booleans when not immediately followed by more
/// symbol characters; `#foo` must fall through to `parse_symbol` instead of
/// being bitten into by the `#f` prefix.
fn parse_bool(input: &str) -> IResult<&str, Token> {
    let (rest, token) = alt((
        value(Token::Bool(true), tag("#t")),
        value(Token::Bool(false), tag("#f")),
    ))
    .parse(input)?;

    match rest.chars().next() {
        Some(c) if is_symbol_continue(c) => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
        _ => Ok((rest, token)),
    }
}

fn parse_integer(input: &str) -> IResult<&str, Token> {
    nom::combinator::map_res(recognize((opt(one_of("+-")), digit1)), |digits: &str| {
        digits.parse::<i64>().map(Token::Integer)
    })
    .parse(input)
}

fn parse_symbol(input: &str) -> IResult<&str, Token> {
    let (input, first) =
        one_of("abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ<=>*/#")(input)?;
    let (input, rest) =
        take_while::<_, _, nom::error::Error<&str>>(is_symbol_continue)(input).unwrap_or((input, ""));
    let mut name = String::new();
    name.push(first);
    name.push_str(rest);
    Ok((input, Token::Symbol(name)))
}

/// A lone `+`/`-` not followed by a digit is a symbol (spec.md §4.1).
fn parse_sign_symbol(input: &str) -> IResult<&str, Token> {
    let (input, sign) = one_of("+-")(input)?;
    Ok((input, Token::Symbol(sign.to_string())))
}

fn parse_token(input: &str) -> IResult<&str, Token> {
    alt((
        value(Token::Open, char('(')),
        value(Token::Close, char(')')),
        value(Token::Quote, char('\'')),
        parse_bool,
        parse_integer,
        parse_symbol,
        parse_sign_symbol,
        value(Token::Dot, char('.')),
    ))
    .parse(input)
}

/// Tokenizes the entire input, reporting any unrecognized character as a
/// syntax error. A bare `.` becomes `Token::Dot`, left for the parser to
/// interpret (as either an improper-list separator or a syntax error).
pub fn tokenize(input: &str) -> Result<Vec<Token>, InterpError> {
    let mut tokens = Vec::new();
    let (mut rest, _) = ws_and_comments(input).map_err(|e| InterpError::syntax(e.to_string()))?;

    while !rest.is_empty() {
        let (next, token) = parse_token(rest).map_err(|_| {
            InterpError::syntax(format!("unrecognized input near '{}'", preview(rest)))
        })?;
        tokens.push(token);

        let (next, _) = ws_and_comments(next).map_err(|e| InterpError::syntax(e.to_string()))?;
        rest = next;
    }

    Ok(tokens)
}

fn preview(input: &str) -> &str {
    let end = input.char_indices().nth(20).map(|(i, _)| i).unwrap_or(input.len());
    &input[..end]
}

/// A cursor over a token stream, used by the recursive-descent parser.
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn advance(&mut self) -> Option<&Token> {
        let tok = self.tokens.get(self.pos);
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
