use crate::{DiffConfig, EditKind, EditScript, Sequence, Unit, compute_edits};

/// Routes `tracing` output to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn script(old: &str, new: &str, unit: Unit) -> EditScript {
    let old = Sequence::from_text(old, unit);
    let new = Sequence::from_text(new, unit);
    compute_edits(&old, &new, &DiffConfig::exact())
}

/// Compact rendering: `=` equal, `-` delete, `+` insert, `~old>new` replace.
pub fn render(script: &EditScript, old: &str, new: &str, unit: Unit) -> String {
    let old_seq = Sequence::from_text(old, unit);
    let new_seq = Sequence::from_text(new, unit);
    let text = |seq: &Sequence<'_>, span| String::from_utf8_lossy(seq.slice(span)).into_owned();

    script
        .iter()
        .map(|op| match op.kind {
            EditKind::Equal => format!("={}", text(&old_seq, op.old)),
            EditKind::Delete => format!("-{}", text(&old_seq, op.old)),
            EditKind::Insert => format!("+{}", text(&new_seq, op.new)),
            EditKind::Replace => {
                format!("~{}>{}", text(&old_seq, op.old), text(&new_seq, op.new))
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Elements of `text` in `unit`, for comparing against reference algorithms.
pub fn elements(text: &str, unit: Unit) -> Vec<&[u8]> {
    let seq = Sequence::from_text(text, unit);
    (0..seq.len()).map(|i| seq.element(i)).collect()
}

/// Insert/delete edit distance via the O(N·M) longest-common-subsequence table.
pub fn lcs_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let (n, m) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    n + m - 2 * dp[n][m]
}

#[test]
fn test_lcs_distance() {
    assert_eq!(lcs_distance(b"kitten", b"sitting"), 5);
    assert_eq!(lcs_distance(b"", b"abc"), 3);
    assert_eq!(lcs_distance(b"abc", b"abc"), 0);
}
