//! Multi-key ordering

use std::cmp::Ordering;

use crate::frame::Frame;
use crate::query::{OrderDirection, OrderTuple};

/// Sort a result frame by an ordered list of keys
///
/// Each tuple's element resolves to its display name, which is the column
/// name already present in the aggregated frame; tuples naming a column the
/// frame does not have drop silently. The sort is stable: the first key is
/// primary and later keys only break ties, each with its own direction.
pub fn order_frame(frame: &Frame, order: Option<&[OrderTuple]>) -> Frame {
    let Some(order) = order else {
        return frame.clone();
    };

    let keys: Vec<(usize, OrderDirection)> = order
        .iter()
        .filter_map(|tuple| {
            frame
                .column_index(tuple.element.name())
                .map(|col| (col, tuple.direction))
        })
        .collect();

    if keys.is_empty() {
        return frame.clone();
    }

    frame.sorted_by(|a, b| {
        for &(col, direction) in &keys {
            let ordering = match direction {
                OrderDirection::Asc => a[col].total_cmp(&b[col]),
                OrderDirection::Desc => b[col].total_cmp(&a[col]),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    })
}
