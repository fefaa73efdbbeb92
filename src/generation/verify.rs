// src/generation/verify.rs — Structural fidelity checks for rewritten code
//
// A rewritten block is faithful when its executable lines are exactly the
// original's executable lines, in order. Blank lines, single-line comments
// and comment blocks are ignored on both sides.

use super::language::CommentRule;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scope {
    Code,
    Comment,
    Literal,
}

/// Iterator over the executable lines of a block.
///
/// Blank lines and single-line comments are dropped. A block delimiter
/// opens a comment block that runs to the closing line, and none of those
/// lines are executable. A multi-line string literal opened by code stays
/// executable through its closing line.
struct ExecutableLines<'a> {
    lines: std::str::Split<'a, char>,
    rule: &'a dyn CommentRule,
    scope: Scope,
}

impl<'a> ExecutableLines<'a> {
    fn new(text: &'a str, rule: &'a dyn CommentRule) -> Self {
        Self {
            lines: text.split('\n'),
            rule,
            scope: Scope::Code,
        }
    }
}

impl<'a> Iterator for ExecutableLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        for line in self.lines.by_ref() {
            if line.is_empty() {
                continue;
            }
            match self.scope {
                Scope::Comment => {
                    if self.rule.closes_block(line) {
                        self.scope = Scope::Code;
                    }
                }
                Scope::Literal => {
                    if self.rule.closes_block(line) {
                        self.scope = Scope::Code;
                    }
                    return Some(line);
                }
                Scope::Code => {
                    if self.rule.is_block_delimiter(line) {
                        self.scope = Scope::Comment;
                    } else if !self.rule.is_single_line_comment(line) {
                        if self.rule.opens_multiline_literal(line) {
                            self.scope = Scope::Literal;
                        }
                        return Some(line);
                    }
                }
            }
        }
        None
    }
}

/// Check that `candidate` keeps every executable line of `original`, in
/// order, with nothing added, removed or altered.
pub fn verify_code_correctness(original: &str, candidate: &str, rule: &dyn CommentRule) -> bool {
    let mut expected = ExecutableLines::new(original, rule);

    for line in ExecutableLines::new(candidate, rule) {
        match expected.next() {
            Some(original_line) if original_line == line => {}
            Some(original_line) => {
                tracing::debug!(
                    expected = original_line,
                    found = line,
                    "rewritten code diverges from original"
                );
                return false;
            }
            None => {
                tracing::debug!(found = line, "rewritten code has extra executable lines");
                return false;
            }
        }
    }

    match expected.next() {
        None => true,
        Some(missing) => {
            tracing::debug!(missing, "rewritten code dropped executable lines");
            false
        }
    }
}

/// Revision check for variable renames.
///
/// Renaming changes executable lines by design, so there is nothing to
/// compare line by line; every revision is accepted.
pub fn verify_revision_correctness(_original: &str, _candidate: &str) -> bool {
    true
}
