use textdiff::{DiffConfig, Unit};

use crate::{EditOptions, Position, PositionEncoding, ProtocolEdit, Range, text_edits};

/// Routes `tracing` output to the test harness; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn options(unit: Unit, encoding: PositionEncoding) -> EditOptions {
    EditOptions {
        unit,
        encoding,
        diff: DiffConfig::exact(),
    }
}

/// Protocol edits with an exact diff.
pub fn edits(old: &str, new: &str, unit: Unit, encoding: PositionEncoding) -> Vec<ProtocolEdit> {
    text_edits(old, new, &options(unit, encoding))
        .expect("diffing valid text cannot fail")
        .edits
}

pub fn edit(
    (start_line, start_col): (u32, u32),
    (end_line, end_col): (u32, u32),
    new_text: &str,
) -> ProtocolEdit {
    ProtocolEdit {
        range: Range::new(
            Position::new(start_line, start_col),
            Position::new(end_line, end_col),
        ),
        new_text: new_text.to_string(),
    }
}
