//! Unified diff rendering over a line diff.

use std::fmt::Write;

use crate::{DiffConfig, EditKind, EditOp, Sequence, Span, Unit, coalesce, compute_edits};

/// Context lines around each hunk when the caller has no preference.
pub const DEFAULT_CONTEXT: usize = 3;

const NO_NEWLINE: &str = "\\ No newline at end of file\n";

/// Renders the line diff of `old` and `new` in unified format.
///
/// Returns an empty string when the texts are equal. Hunks closer than `2 * context`
/// lines are joined.
pub fn unified(old_label: &str, new_label: &str, old: &str, new: &str, context: usize) -> String {
    let old_lines = Lines::new(old);
    let new_lines = Lines::new(new);
    let script = coalesce(&compute_edits(
        &old_lines.seq,
        &new_lines.seq,
        &DiffConfig::default(),
    ));

    let changes: Vec<EditOp> = script.changes().copied().collect();
    if changes.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "--- {old_label}");
    let _ = writeln!(out, "+++ {new_label}");
    for hunk in hunks(&changes, old_lines.seq.len(), new_lines.seq.len(), context) {
        render_hunk(&mut out, &hunk, script.ops(), &old_lines, &new_lines);
    }
    out
}

struct Lines<'a> {
    text: &'a str,
    seq: Sequence<'a>,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            seq: Sequence::from_text(text, Unit::Line),
        }
    }

    fn line(&self, index: usize) -> &'a str {
        &self.text[self.seq.byte_offset(index)..self.seq.byte_offset(index + 1)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hunk {
    old: Span,
    new: Span,
}

/// Widens each change by up to `context` lines and joins hunks whose context meets.
///
/// Context is bounded on both sides. Lines before a change are shared lines, except when an
/// earlier change sits within `context`; that hunk's trailing context then reaches this
/// change and the two merge, keeping the earlier start.
fn hunks(changes: &[EditOp], old_len: usize, new_len: usize, context: usize) -> Vec<Hunk> {
    let mut hunks: Vec<Hunk> = Vec::new();
    for change in changes {
        let lead = context.min(change.old.start).min(change.new.start);
        let trail = context
            .min(old_len - change.old.end)
            .min(new_len - change.new.end);
        let hunk = Hunk {
            old: Span::new(change.old.start - lead, change.old.end + trail),
            new: Span::new(change.new.start - lead, change.new.end + trail),
        };
        match hunks.last_mut() {
            Some(last) if hunk.old.start <= last.old.end => {
                last.old.end = hunk.old.end;
                last.new.end = hunk.new.end;
            }
            _ => hunks.push(hunk),
        }
    }
    hunks
}

fn render_hunk(out: &mut String, hunk: &Hunk, ops: &[EditOp], old: &Lines<'_>, new: &Lines<'_>) {
    let _ = writeln!(
        out,
        "@@ -{} +{} @@",
        hunk_range(hunk.old),
        hunk_range(hunk.new)
    );

    for op in ops {
        let old_span = clip(op.old, hunk.old);
        match op.kind {
            EditKind::Equal => {
                for i in old_span.range() {
                    push_line(out, ' ', old.line(i));
                }
            }
            _ if op.old.start >= hunk.old.start && op.old.end <= hunk.old.end => {
                if op.kind != EditKind::Insert {
                    for i in op.old.range() {
                        push_line(out, '-', old.line(i));
                    }
                }
                if op.kind != EditKind::Delete {
                    for i in op.new.range() {
                        push_line(out, '+', new.line(i));
                    }
                }
            }
            _ => {}
        }
    }
}

/// `start,count` with a 1-based start; an empty range names the line before it.
fn hunk_range(span: Span) -> String {
    match span.len() {
        0 => format!("{},0", span.start),
        1 => format!("{}", span.start + 1),
        len => format!("{},{}", span.start + 1, len),
    }
}

fn clip(span: Span, within: Span) -> Span {
    let start = span.start.max(within.start);
    let end = span.end.min(within.end);
    if start >= end {
        Span::empty(start)
    } else {
        Span::new(start, end)
    }
}

/// Writes one body line. Every body line ends in `\n`: a lone `\r` terminator is kept
/// and followed by one, and a missing terminator gets the no-newline marker.
fn push_line(out: &mut String, marker: char, line: &str) {
    out.push(marker);
    out.push_str(line);
    if !line.ends_with('\n') {
        out.push('\n');
        if !line.ends_with('\r') {
            out.push_str(NO_NEWLINE);
        }
    }
}
