use proptest::prelude::*;
use textdiff::unified;

/// Short lines over a tiny alphabet, with every terminator and sometimes none at the end.
fn lines() -> impl Strategy<Value = String> {
    "([ab]{0,2}(\n|\r\n|\r)){0,8}[ab]{0,1}"
}

/// Count from one side of a hunk header: `start,count` or a bare `start` for one line.
fn header_count(range: &str) -> usize {
    match range.split_once(',') {
        Some((_, count)) => count.parse().expect("numeric count"),
        None => 1,
    }
}

/// `(old, new)` counts from the header and from the body of every hunk.
fn hunk_counts(out: &str) -> Vec<((usize, usize), (usize, usize))> {
    let rows = out.split('\n').skip(2).filter(|row| !row.is_empty());
    let mut hunks = Vec::new();
    let mut current: Option<((usize, usize), (usize, usize))> = None;

    for row in rows {
        if let Some(header) = row.strip_prefix("@@ -") {
            hunks.extend(current.take());
            let header = header.trim_end_matches(" @@");
            let (old, new) = header.split_once(" +").expect("two ranges");
            current = Some(((header_count(old), header_count(new)), (0, 0)));
            continue;
        }
        let Some((_, body)) = current.as_mut() else {
            panic!("body line before the first hunk: {row:?}");
        };
        match row.chars().next() {
            Some(' ') => {
                body.0 += 1;
                body.1 += 1;
            }
            Some('-') => body.0 += 1,
            Some('+') => body.1 += 1,
            Some('\\') => {}
            other => panic!("unexpected line marker {other:?}"),
        }
    }
    hunks.extend(current);
    hunks
}

proptest! {
    #[test]
    fn headers_match_hunk_bodies(old in lines(), new in lines(), context in 0usize..4) {
        let out = unified("old", "new", &old, &new, context);
        if old == new {
            prop_assert_eq!(out, "");
            return Ok(());
        }

        prop_assert!(out.starts_with("--- old\n+++ new\n@@ -"));
        let hunks = hunk_counts(&out);
        prop_assert!(!hunks.is_empty());
        for (header, body) in hunks {
            prop_assert_eq!(header, body);
        }
    }
}
