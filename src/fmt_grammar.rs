//! Print format string grammar (§6.3): the compiler auto-synthesizes a
//! format string for each `print`/`println` argument list, then the same
//! grammar is what an emitted program's runtime parses back to format the
//! arguments. This module owns both directions: `synthesize` builds the
//! string from a Datatype, `parse` tokenizes one back into a specifier
//! list (used by tests and by any tool that needs to validate a
//! hand-written format string against its arguments).

use crate::datatype::{DatatypeKind, DatatypeStore};
use crate::ids::DatatypeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec {
    Bool,
    Str,
    Uint(u32),
    Int(u32),
    Hex(u32),
    Float(u32),
    Array(Box<FormatSpec>),
    Tuple(Vec<FormatSpec>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatToken {
    Literal(String),
    Spec(FormatSpec),
}

/// Auto-synthesizes the `%...` specifier for one argument's Datatype.
/// Integer widths >64 bits indicate big-integer operands to the emitted
/// runtime; widths <=64 are passed as native machine integers.
pub fn synthesize(datatypes: &DatatypeStore, datatype: DatatypeId) -> Result<FormatSpec, String> {
    match &datatypes.get(datatype).kind {
        DatatypeKind::Bool => Ok(FormatSpec::Bool),
        DatatypeKind::String => Ok(FormatSpec::Str),
        DatatypeKind::Uint(w) => Ok(FormatSpec::Uint(*w)),
        DatatypeKind::Int(w) => Ok(FormatSpec::Int(*w)),
        DatatypeKind::Float(w) => Ok(FormatSpec::Float(*w)),
        DatatypeKind::Array(elem) => Ok(FormatSpec::Array(Box::new(synthesize(datatypes, *elem)?))),
        DatatypeKind::Tuple(elems) => Ok(FormatSpec::Tuple(
            elems.iter().map(|&e| synthesize(datatypes, e)).collect::<Result<_, _>>()?,
        )),
        other => Err(format!("{other:?} has no print format specifier")),
    }
}

pub fn render_spec(spec: &FormatSpec) -> String {
    match spec {
        FormatSpec::Bool => "%b".to_string(),
        FormatSpec::Str => "%s".to_string(),
        FormatSpec::Uint(w) => format!("%u{w}"),
        FormatSpec::Int(w) => format!("%i{w}"),
        FormatSpec::Hex(w) => format!("%x{w}"),
        FormatSpec::Float(w) => format!("%f{w}"),
        FormatSpec::Array(inner) => format!("%[{}]", render_spec(inner)),
        FormatSpec::Tuple(parts) => {
            format!("%({})", parts.iter().map(render_spec).collect::<Vec<_>>().join(","))
        }
    }
}

fn unescape(ch: char) -> Option<char> {
    Some(match ch {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        'a' => '\x07',
        'b' => '\x08',
        'e' => '\x1b',
        'f' => '\x0c',
        'v' => '\x0b',
        '\\' => '\\',
        '%' => '%',
        _ => return None,
    })
}

/// Parses a synthesized (or hand-written) format string into literal/spec
/// tokens, resolving `\n \t \r \a \b \e \f \v \xHH \\ \%` escapes.
pub fn parse(input: &str) -> Result<Vec<FormatToken>, String> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escape = chars.next().ok_or("dangling escape at end of format string")?;
                if escape == 'x' {
                    let hi = chars.next().ok_or("truncated \\xHH escape")?;
                    let lo = chars.next().ok_or("truncated \\xHH escape")?;
                    let byte = u8::from_str_radix(&format!("{hi}{lo}"), 16).map_err(|e| e.to_string())?;
                    literal.push(byte as char);
                } else {
                    literal.push(unescape(escape).ok_or_else(|| format!("unknown escape \\{escape}"))?);
                }
            }
            '%' => {
                if !literal.is_empty() {
                    tokens.push(FormatToken::Literal(std::mem::take(&mut literal)));
                }
                let (spec, consumed) = parse_spec(&mut chars)?;
                let _ = consumed;
                tokens.push(FormatToken::Spec(spec));
            }
            _ => literal.push(c),
        }
    }
    if !literal.is_empty() {
        tokens.push(FormatToken::Literal(literal));
    }
    Ok(tokens)
}

fn parse_width(chars: &mut std::iter::Peekable<std::str::Chars>) -> u32 {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            digits.push(c);
            chars.next();
        } else {
            break;
        }
    }
    digits.parse().unwrap_or(0)
}

fn parse_spec(chars: &mut std::iter::Peekable<std::str::Chars>) -> Result<(FormatSpec, usize), String> {
    match chars.next() {
        Some('b') => Ok((FormatSpec::Bool, 1)),
        Some('s') => Ok((FormatSpec::Str, 1)),
        Some('u') => Ok((FormatSpec::Uint(parse_width(chars)), 1)),
        Some('i') => Ok((FormatSpec::Int(parse_width(chars)), 1)),
        Some('x') => Ok((FormatSpec::Hex(parse_width(chars)), 1)),
        Some('f') => Ok((FormatSpec::Float(parse_width(chars)), 1)),
        Some('[') => {
            let (inner, _) = parse_spec(chars)?;
            match chars.next() {
                Some(']') => Ok((FormatSpec::Array(Box::new(inner)), 1)),
                _ => Err("unterminated %[ array format specifier".to_string()),
            }
        }
        Some('(') => {
            let mut parts = Vec::new();
            loop {
                let (part, _) = parse_spec(chars)?;
                parts.push(part);
                match chars.next() {
                    Some(',') => continue,
                    Some(')') => break,
                    _ => return Err("unterminated %( tuple format specifier".to_string()),
                }
            }
            Ok((FormatSpec::Tuple(parts), 1))
        }
        Some(other) => Err(format!("unknown format specifier %{other}")),
        None => Err("dangling % at end of format string".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesizes_a_uint_specifier_from_a_datatype() {
        let mut dt = DatatypeStore::new();
        let u = dt.uint_datatype(32);
        assert_eq!(synthesize(&dt, u).unwrap(), FormatSpec::Uint(32));
        assert_eq!(render_spec(&FormatSpec::Uint(32)), "%u32");
    }

    #[test]
    fn synthesizes_nested_array_of_tuple_specifiers() {
        let mut dt = DatatypeStore::new();
        let b = dt.bool_datatype();
        let s = dt.string_datatype();
        let tuple = dt.tuple_datatype(vec![b, s]);
        let array = dt.array_datatype(tuple);
        assert_eq!(render_spec(&synthesize(&dt, array).unwrap()), "%[%(%b,%s)]");
    }

    #[test]
    fn parses_escapes_and_a_mixed_literal_spec_string() {
        let tokens = parse(r"Hello\n%s\x41").unwrap();
        assert_eq!(
            tokens,
            vec![
                FormatToken::Literal("Hello\n".to_string()),
                FormatToken::Spec(FormatSpec::Str),
                FormatToken::Literal("A".to_string()),
            ]
        );
    }

    #[test]
    fn round_trips_a_synthesized_specifier_through_parse() {
        let rendered = render_spec(&FormatSpec::Uint(16));
        let tokens = parse(&rendered).unwrap();
        assert_eq!(tokens, vec![FormatToken::Spec(FormatSpec::Uint(16))]);
    }
}
