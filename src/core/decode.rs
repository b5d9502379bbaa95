//! HTML entity decoding of the fetched body, applied once before any marker
//! scanning runs.

/// Longest reference we bother scanning for a terminating `;`.
const MAX_REFERENCE_LEN: usize = 32;

/// Replaces character references (`&amp;`, `&#233;`, `&#x2014;`, ...) with
/// the characters they name. Unknown or malformed references are copied
/// through verbatim.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match decode_reference(tail) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes one reference at the start of `tail` (which begins with `&`).
/// Returns the character and the number of bytes consumed, including the
/// terminating semicolon.
fn decode_reference(tail: &str) -> Option<(char, usize)> {
    let semi = tail
        .as_bytes()
        .iter()
        .take(MAX_REFERENCE_LEN)
        .position(|&b| b == b';')
        .filter(|&pos| pos > 1)?;
    let name = &tail[1..semi];

    let ch = if let Some(digits) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        char::from_u32(u32::from_str_radix(digits, 16).ok()?)?
    } else if let Some(digits) = name.strip_prefix('#') {
        char::from_u32(digits.parse().ok()?)?
    } else {
        named_entity(name)?
    };

    Some((ch, semi + 1))
}

fn named_entity(name: &str) -> Option<char> {
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "lsquo" => '\u{2018}',
        "rsquo" => '\u{2019}',
        "ldquo" => '\u{201c}',
        "rdquo" => '\u{201d}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        _ => return None,
    };
    Some(ch)
}
