//! Reference snippets for closure_body_length.
//!
//! Every triggering snippet has exactly one offending closure, written as
//! `|toto|`, and stays under the error limit.

use std::fmt::Write;

/// Snippets that must not produce a violation with default settings.
#[must_use]
pub fn non_triggering_examples() -> Vec<String> {
    vec![
        "fn main() {\n    foo.bar(|x| x);\n}\n".to_string(),
        "fn main() {\n    let f = move || {\n        // nothing yet\n    };\n}\n".to_string(),
        call_with_closure(18, 0, 0),
        call_with_closure(18, 10, 0),
        call_with_closure(18, 0, 10),
        call_with_closure(18, 10, 10),
        call_with_block_comment(18, 40),
    ]
}

/// Snippets that must produce one warning at the `|toto|` closure.
#[must_use]
pub fn triggering_examples() -> Vec<String> {
    vec![
        call_with_closure(19, 0, 0),
        call_with_closure(19, 10, 0),
        call_with_closure(19, 0, 10),
        call_with_closure(19, 10, 10),
        call_with_block_comment(19, 5),
        nested_short_closure(19),
    ]
}

/// A closure body of `code` statements plus its opening and closing lines,
/// padded with line comments and blank lines.
fn call_with_closure(code: usize, comments: usize, blanks: usize) -> String {
    let mut src = String::from("fn main() {\n    foo.bar(|toto| {\n");
    push_statements(&mut src, code);
    for _ in 0..comments {
        src.push_str("        // toto\n");
    }
    for _ in 0..blanks {
        src.push('\n');
    }
    src.push_str("    });\n}\n");
    src
}

fn call_with_block_comment(code: usize, commented: usize) -> String {
    let mut src = String::from("fn main() {\n    foo.bar(|toto| {\n        /*\n");
    for i in 0..commented {
        let _ = writeln!(src, "        let old{i} = {i};");
    }
    src.push_str("        */\n");
    push_statements(&mut src, code);
    src.push_str("    });\n}\n");
    src
}

/// Long outer closure holding a one-line inner closure; only the outer one is too long.
fn nested_short_closure(code: usize) -> String {
    let mut src = String::from("fn main() {\n    foo.bar(|toto| {\n");
    push_statements(&mut src, code - 1);
    src.push_str("        let inc = |y: i32| y + 1;\n");
    src.push_str("    });\n}\n");
    src
}

fn push_statements(src: &mut String, count: usize) {
    for i in 0..count {
        let _ = writeln!(src, "        let a{i} = {i};");
    }
}
