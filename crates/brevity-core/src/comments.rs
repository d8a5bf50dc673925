//! Per-line code detection.
//!
//! One forward scan over the whole file decides, for every line, whether any
//! non-whitespace byte sits outside a comment. Block comment state carries
//! across lines, so a query for any line range only has to slice the result.

use brevity_rule_abi::CommentSyntax;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    LineComment,
    Block { depth: usize },
    Str,
    RawStr { hashes: usize },
}

/// Returns one flag per line: `true` when the line carries code.
///
/// `line_count` must equal the number of `\n` bytes in `text` plus one.
pub fn code_lines(text: &str, line_count: usize, syntax: &CommentSyntax) -> Vec<bool> {
    let bytes = text.as_bytes();
    let mut code = vec![false; line_count];
    let mut line = 0;
    let mut state = State::Code;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b == b'\n' {
            line += 1;
            if state == State::LineComment {
                state = State::Code;
            }
            i += 1;
            continue;
        }

        match state {
            State::LineComment => i += 1,
            State::Block { depth } => {
                if syntax.nested_blocks && starts_with_at(bytes, i, syntax.block_open) {
                    state = State::Block { depth: depth + 1 };
                    i += syntax.block_open.len();
                } else if starts_with_at(bytes, i, syntax.block_close) {
                    state = if depth <= 1 {
                        State::Code
                    } else {
                        State::Block { depth: depth - 1 }
                    };
                    i += syntax.block_close.len();
                } else {
                    i += 1;
                }
            }
            State::Str => {
                mark(&mut code, line, b);
                if b == b'\\' && bytes.get(i + 1).is_some_and(|&next| next != b'\n') {
                    i += 2;
                } else {
                    if b == b'"' {
                        state = State::Code;
                    }
                    i += 1;
                }
            }
            State::RawStr { hashes } => {
                mark(&mut code, line, b);
                if b == b'"' && closes_raw_string(bytes, i + 1, hashes) {
                    state = State::Code;
                    i += 1 + hashes;
                } else {
                    i += 1;
                }
            }
            State::Code => {
                if starts_with_at(bytes, i, syntax.line) {
                    state = State::LineComment;
                    i += syntax.line.len();
                } else if starts_with_at(bytes, i, syntax.block_open) {
                    state = State::Block { depth: 1 };
                    i += syntax.block_open.len();
                } else if let Some((hashes, consumed)) = syntax
                    .raw_strings
                    .then(|| raw_string_open(bytes, i))
                    .flatten()
                {
                    mark(&mut code, line, b);
                    state = State::RawStr { hashes };
                    i += consumed;
                } else if b == b'"' {
                    mark(&mut code, line, b);
                    state = State::Str;
                    i += 1;
                } else if let Some(len) = syntax
                    .char_literals
                    .then(|| char_literal_len(bytes, i))
                    .flatten()
                {
                    mark(&mut code, line, b);
                    i += len;
                } else {
                    mark(&mut code, line, b);
                    i += 1;
                }
            }
        }
    }

    code
}

fn mark(code: &mut [bool], line: usize, b: u8) {
    if !b.is_ascii_whitespace()
        && let Some(slot) = code.get_mut(line)
    {
        *slot = true;
    }
}

fn starts_with_at(bytes: &[u8], i: usize, marker: &str) -> bool {
    !marker.is_empty() && bytes[i..].starts_with(marker.as_bytes())
}

const fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// `r"`, `r#"`, `br##"` ... at `i` (pointing at the `r`).
/// Returns the number of `#` and the length of the opening delimiter.
fn raw_string_open(bytes: &[u8], i: usize) -> Option<(usize, usize)> {
    if bytes[i] != b'r' {
        return None;
    }
    // `r` must start a token, or follow a lone `b` prefix.
    let prefix_ok = match i.checked_sub(1).map(|p| bytes[p]) {
        None => true,
        Some(b'b') => i.checked_sub(2).is_none_or(|p| !is_ident_byte(bytes[p])),
        Some(prev) => !is_ident_byte(prev),
    };
    if !prefix_ok {
        return None;
    }
    let hashes = bytes[i + 1..].iter().take_while(|&&b| b == b'#').count();
    (bytes.get(i + 1 + hashes) == Some(&b'"')).then_some((hashes, hashes + 2))
}

fn closes_raw_string(bytes: &[u8], from: usize, hashes: usize) -> bool {
    bytes
        .get(from..from + hashes)
        .is_some_and(|tail| tail.iter().all(|&b| b == b'#'))
}

/// Length of a char literal starting at `i`, or `None` for a lifetime/label.
fn char_literal_len(bytes: &[u8], i: usize) -> Option<usize> {
    if bytes[i] != b'\'' {
        return None;
    }
    match *bytes.get(i + 1)? {
        b'\\' => {
            // '\n', '\'', '\x7f', '\u{10FFFF}'
            let close = bytes
                .get(i + 3..)?
                .iter()
                .take(10)
                .position(|&b| b == b'\'')?;
            Some(close + 4)
        }
        b'\'' | b'\n' => None,
        lead => {
            let width = utf8_width(lead);
            (bytes.get(i + 1 + width) == Some(&b'\'')).then_some(width + 2)
        }
    }
}

const fn utf8_width(lead: u8) -> usize {
    match lead {
        0xF0..=0xFF => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}
