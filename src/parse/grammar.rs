use winnow::ascii::till_line_ending;
use winnow::combinator::{alt, cut_err, opt, repeat};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::parser::{RawEntry, RawValue};

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

// -- Identifiers ------------------------------------------------------------

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

// -- Values -----------------------------------------------------------------

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = cut_err(any)
            .context(StrContext::Expected(StrContextValue::CharLiteral('"')))
            .parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = cut_err(any).parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    'n' => s.push('\n'),
                    't' => s.push('\t'),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

/// `[ "a", "b" ]`, possibly empty, trailing comma allowed.
fn string_list(input: &mut &str) -> ModalResult<Vec<String>> {
    '['.parse_next(input)?;
    let mut items = Vec::new();
    loop {
        ws.parse_next(input)?;
        if opt(']').parse_next(input)?.is_some() {
            return Ok(items);
        }
        let item = cut_err(string_literal)
            .context(StrContext::Expected(StrContextValue::Description(
                "string literal",
            )))
            .parse_next(input)?;
        items.push(item);
        ws.parse_next(input)?;
        if opt(',').parse_next(input)?.is_none() {
            ws.parse_next(input)?;
            cut_err(']')
                .context(StrContext::Expected(StrContextValue::CharLiteral(']')))
                .parse_next(input)?;
            return Ok(items);
        }
    }
}

fn value(input: &mut &str) -> ModalResult<RawValue> {
    ws.parse_next(input)?;
    alt((
        string_literal.map(RawValue::Str),
        string_list.map(RawValue::List),
    ))
    .parse_next(input)
}

// -- Entries ----------------------------------------------------------------

fn entry(input: &mut &str) -> ModalResult<RawEntry> {
    ws.parse_next(input)?;
    let name = ident.parse_next(input)?;
    let raw = opt(value).parse_next(input)?;
    Ok(RawEntry {
        name: name.to_owned(),
        value: raw.unwrap_or(RawValue::Flag),
    })
}

fn path_section(input: &mut &str) -> ModalResult<Vec<RawEntry>> {
    "path".parse_next(input)?;
    ws.parse_next(input)?;
    cut_err(':')
        .context(StrContext::Expected(StrContextValue::CharLiteral(':')))
        .parse_next(input)?;
    repeat(0.., entry).parse_next(input)
}

// -- Top-level parser -------------------------------------------------------

/// `None` when the input has no `path:` section.
pub fn parse_filter(input: &mut &str) -> ModalResult<Option<Vec<RawEntry>>> {
    ws.parse_next(input)?;
    let section = opt(path_section).parse_next(input)?;
    ws.parse_next(input)?;
    Ok(section)
}
