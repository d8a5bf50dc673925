#![warn(rust_2024_compatibility, clippy::all)]

//! Rust front-end: finds closure expressions with `syn`.
//!
//! Byte offsets come from `proc-macro2` span locations and are relative to
//! the text handed in, including any BOM or shebang line. Closures inside
//! macro invocations are invisible, since macro bodies are not expanded.

use brevity_rule_abi::{BoxClosureSource, ByteSpan, ClosureNode, ClosureSource, CommentSyntax};
use syn::spanned::Spanned;
use syn::visit::{self, Visit};

#[derive(Debug, Default, Clone, Copy)]
pub struct RustFrontEnd;

impl ClosureSource for RustFrontEnd {
    fn name(&self) -> &'static str {
        "rust"
    }

    fn supported_extensions(&self) -> Vec<String> {
        vec!["rs".to_string()]
    }

    fn comment_syntax(&self) -> CommentSyntax {
        CommentSyntax::rust()
    }

    fn closures(&self, source: &str) -> Result<Vec<ClosureNode>, String> {
        let (base, code) = split_preamble(source);
        let found = collect_closures(base, code);
        // Every span is a plain offset by now. Drop this file from
        // proc-macro2's thread-local source map so it does not keep growing.
        proc_macro2::extra::invalidate_current_thread_spans();
        found
    }
}

fn collect_closures(base: usize, code: &str) -> Result<Vec<ClosureNode>, String> {
    let file: syn::File = syn::parse_str(code).map_err(|e| {
        let at = e.span().start();
        format!("{}:{}: {e}", at.line, at.column + 1)
    })?;

    let mut collector = ClosureCollector {
        base,
        closures: Vec::new(),
    };
    collector.visit_file(&file);
    Ok(collector.closures)
}

#[must_use]
pub fn init_front_end() -> BoxClosureSource {
    Box::new(RustFrontEnd)
}

/// Split off a UTF-8 BOM and a shebang line, which `syn` cannot parse.
/// Returns the byte length removed and the remaining text.
///
/// `#!` followed by `[` is an inner attribute, not a shebang, even with
/// whitespace or comments in between.
fn split_preamble(source: &str) -> (usize, &str) {
    let mut base = 0;
    let mut rest = source;

    if let Some(stripped) = rest.strip_prefix('\u{feff}') {
        base += '\u{feff}'.len_utf8();
        rest = stripped;
    }

    if let Some(after) = rest.strip_prefix("#!")
        && !skip_trivia(after).starts_with('[')
    {
        // Keep the newline so line numbers in parse errors stay right.
        let cut = rest.find('\n').unwrap_or(rest.len());
        base += cut;
        rest = &rest[cut..];
    }

    (base, rest)
}

/// Skip whitespace and non-doc comments, as `syn::parse_file` does before
/// deciding whether `#!` opens a shebang. Doc comments are tokens and stop
/// the skip.
fn skip_trivia(mut s: &str) -> &str {
    loop {
        let trimmed = s.trim_start();
        if let Some(rest) = trimmed.strip_prefix("//")
            && !is_doc_comment(rest, '/')
        {
            s = rest.find('\n').map_or("", |nl| &rest[nl + 1..]);
        } else if let Some(rest) = trimmed.strip_prefix("/*")
            && (rest.starts_with("*/") || !is_doc_comment(rest, '*'))
        {
            match block_comment_len(rest) {
                Some(len) => s = &rest[len..],
                None => return "",
            }
        } else {
            return trimmed;
        }
    }
}

/// `rest` follows `//` or `/*`. `!` makes an inner doc comment; a single
/// extra `marker` makes an outer one (`///`, `/**`), a double one does not.
fn is_doc_comment(rest: &str, marker: char) -> bool {
    rest.starts_with('!')
        || rest
            .strip_prefix(marker)
            .is_some_and(|after| !after.starts_with(marker))
}

/// Byte length up to and including the `*/` closing a block comment whose
/// `/*` was already consumed. Block comments nest.
fn block_comment_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut depth = 1usize;
    let mut i = 0;
    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'/', b'*') => {
                depth += 1;
                i += 2;
            }
            (b'*', b'/') => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => i += 1,
        }
    }
    None
}

struct ClosureCollector {
    base: usize,
    closures: Vec<ClosureNode>,
}

impl ClosureCollector {
    fn byte_span(&self, span: proc_macro2::Span) -> ByteSpan {
        let range = span.byte_range();
        ByteSpan::new(
            self.base + range.start,
            range.end.saturating_sub(range.start),
        )
    }
}

impl<'ast> Visit<'ast> for ClosureCollector {
    fn visit_expr_closure(&mut self, node: &'ast syn::ExprClosure) {
        let whole = self.byte_span(node.span());
        let body = self.byte_span(node.body.span());
        self.closures.push(ClosureNode::new(whole.offset, body));

        // Closures nested in the body are reported on their own.
        visit::visit_expr_closure(self, node);
    }
}
