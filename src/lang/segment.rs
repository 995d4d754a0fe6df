use super::{Column, Error};

type Result<T> = std::result::Result<T, Error>;

/// One `;` separated piece of a source string. Every piece but the
/// last is a reference definition `name:expression`.
#[derive(Debug, PartialEq)]
pub struct Segment<'a> {
    name: Option<(Column, String)>,
    text: &'a str,
    offset: usize,
}

impl<'a> Segment<'a> {
    pub fn name(&self) -> Option<&(Column, String)> {
        self.name.as_ref()
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Character offset of `text` within the full source.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_reference(&self) -> bool {
        self.name.is_some()
    }
}

pub fn split(source: &str) -> Result<Vec<Segment<'_>>> {
    let mut pieces: Vec<(usize, &str)> = vec![];
    let mut depth: isize = 0;
    let mut start_byte = 0;
    let mut start_char = 0;
    for (char_index, (byte_index, ch)) in source.char_indices().enumerate() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            ';' if depth <= 0 => {
                pieces.push((start_char, &source[start_byte..byte_index]));
                start_byte = byte_index + 1;
                start_char = char_index + 1;
                depth = 0;
            }
            _ => {}
        }
    }
    pieces.push((start_char, &source[start_byte..]));

    let last = pieces.len() - 1;
    let mut segments = vec![];
    for (index, (offset, text)) in pieces.into_iter().enumerate() {
        if index == last {
            segments.push(Segment {
                name: None,
                text,
                offset,
            });
        } else {
            segments.push(reference(offset, text)?);
        }
    }
    Ok(segments)
}

fn reference(offset: usize, text: &str) -> Result<Segment<'_>> {
    let colon = match text.find(':') {
        Some(colon) => colon,
        None => {
            let column = offset..offset + text.chars().count();
            return Err(error!(NoReferenceSeparator, ..&column));
        }
    };
    let raw_name = &text[..colon];
    let leading = raw_name.chars().take_while(|c| c.is_whitespace()).count();
    let name = raw_name.trim();
    let name_start = offset + leading;
    let column = name_start..name_start + name.chars().count();
    if !is_name(name) {
        return Err(error!(ReferenceNameExpected, ..&column));
    }
    Ok(Segment {
        name: Some((column, name.to_string())),
        text: &text[colon + 1..],
        offset: offset + raw_name.chars().count() + 1,
    })
}

fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
