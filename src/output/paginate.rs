//! Pagination

use crate::frame::Frame;

/// Apply offset then limit to a result frame
///
/// A non-zero offset drops that many leading rows; a limit then caps what
/// remains. Either may be absent independently. Rows are stored densely,
/// so the output is implicitly re-indexed from zero.
pub fn paginate(frame: &Frame, offset: Option<usize>, limit: Option<usize>) -> Frame {
    let offset = offset.unwrap_or(0);
    let rows: Vec<_> = frame
        .rows()
        .iter()
        .skip(offset)
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();
    Frame::from_parts(frame.columns().to_vec(), rows)
}
