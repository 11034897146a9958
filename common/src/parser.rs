//! Line parser for `$name = value` / `$name ||= value` files.

use crate::{
    error::{Error, Location, Result},
    value::Literal,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `=`
    Assign,
    /// `||=`
    AssignIfUnset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub name: String,
    pub op: Op,
    pub value: Literal,
    pub at: Location,
}

/// Parses every line of `text`, skipping blanks and comments.
///
/// Stops at the first malformed line.
pub fn parse(source: &str, text: &str) -> Result<Vec<Statement>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut statements = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let at = Location::new(source, idx + 1);
        match parse_line(raw) {
            Ok(Some((name, op, value))) => statements.push(Statement {
                name,
                op,
                value,
                at,
            }),
            Ok(None) => {}
            Err(reason) => return Err(Error::parse(at, reason)),
        }
    }
    Ok(statements)
}

/// Parses one line. `Ok(None)` for blank and comment lines.
pub fn parse_line(raw: &str) -> std::result::Result<Option<(String, Op, Literal)>, String> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let rest = line
        .strip_prefix('$')
        .ok_or_else(|| format!("expected `$name` at start of line, found `{line}`"))?;

    let name_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let (name, rest) = rest.split_at(name_len);
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format!("invalid variable name `${name}`"));
    }

    let rest = rest.trim_start();
    let (op, rest) = if let Some(r) = rest.strip_prefix("||=") {
        (Op::AssignIfUnset, r)
    } else if let Some(r) = rest.strip_prefix('=').filter(|r| !r.starts_with('=')) {
        (Op::Assign, r)
    } else {
        return Err(format!("expected `=` or `||=` after `${name}`"));
    };

    let (value, rest) = parse_literal(rest.trim_start())?;
    let rest = rest.trim_start();
    if !(rest.is_empty() || rest.starts_with('#')) {
        return Err(format!("unexpected trailing input `{rest}`"));
    }

    Ok(Some((name.to_owned(), op, value)))
}

fn parse_literal(input: &str) -> std::result::Result<(Literal, &str), String> {
    match input.chars().next() {
        None | Some('#') => Err("missing value".to_owned()),
        Some(quote @ ('"' | '\'')) => parse_string(&input[1..], quote),
        Some(_) => {
            let end = input
                .find(|c: char| c.is_whitespace() || c == '#')
                .unwrap_or(input.len());
            let (token, rest) = input.split_at(end);
            let literal = match token {
                "true" => Literal::Bool(true),
                "false" => Literal::Bool(false),
                "nil" => Literal::Nil,
                _ => Literal::Int(parse_int(token)?),
            };
            Ok((literal, rest))
        }
    }
}

/// Reads up to the closing `quote`. Double quotes understand `\\ \" \n \t`,
/// single quotes only `\\ \'`.
fn parse_string(input: &str, quote: char) -> std::result::Result<(Literal, &str), String> {
    let mut out = String::new();
    let mut chars = input.char_indices();
    while let Some((idx, c)) = chars.next() {
        match c {
            c if c == quote => return Ok((Literal::Str(out), &input[idx + 1..])),
            '\\' => match (quote, chars.next().map(|(_, c)| c)) {
                (_, Some('\\')) => out.push('\\'),
                (q, Some(c)) if c == q => out.push(c),
                ('"', Some('n')) => out.push('\n'),
                ('"', Some('t')) => out.push('\t'),
                ('\'', Some(c)) => {
                    out.push('\\');
                    out.push(c);
                }
                (_, Some(c)) => return Err(format!("unsupported escape `\\{c}`")),
                (_, None) => break,
            },
            c => out.push(c),
        }
    }
    Err(format!("unterminated string starting with {quote}"))
}

/// Integers with an optional sign and `_` between digits, e.g. `2_048`.
fn parse_int(token: &str) -> std::result::Result<String, String> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(d) => (true, d),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let well_formed = !digits.is_empty()
        && !digits.starts_with('_')
        && !digits.ends_with('_')
        && !digits.contains("__")
        && digits.chars().all(|c| c.is_ascii_digit() || c == '_');
    if !well_formed {
        return Err(format!("unrecognised value `{token}`"));
    }
    let digits = digits.replace('_', "");
    Ok(if negative { format!("-{digits}") } else { digits })
}
