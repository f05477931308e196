//! Plain-text board rendering.

use std::fmt::Write as _;

/// Renders an 81-character board string as a 9x9 grid with box separators.
///
/// Empty cells (`0`) are shown as `.`. The caller is expected to pass a
/// structurally valid board; anything shorter is rendered as far as it goes.
#[must_use]
pub fn render_grid(board: &str) -> String {
    let mut out = String::new();
    for (y, row) in board.as_bytes().chunks(9).enumerate() {
        if y == 3 || y == 6 {
            out.push_str("------+-------+------\n");
        }
        for (x, &b) in row.iter().enumerate() {
            if x == 3 || x == 6 {
                out.push_str("| ");
            }
            let cell = if b == b'0' { '.' } else { char::from(b) };
            let _ = write!(out, "{cell} ");
        }
        // Drop the trailing space on each row.
        out.pop();
        out.push('\n');
    }
    out
}
