//! Group limiting

use std::collections::BTreeSet;

use crate::aggregate::aggregate_column;
use crate::catalog::{Catalog, CatalogError};
use crate::frame::{Frame, Value};
use crate::predicate::apply_filters;
use crate::query::{GroupLimit, OrderDirection};

use super::error::GroupLimitError;

/// Check a group limit for the malformed shapes the engine rejects
pub fn validate(group_limit: &GroupLimit) -> Result<(), GroupLimitError> {
    if group_limit.dimensions.is_empty() {
        return Err(GroupLimitError::NoDimensions);
    }
    if group_limit.top == 0 {
        return Err(GroupLimitError::ZeroTop);
    }
    Ok(())
}

/// Keep only the rows of `frame` whose group-dimension combination ranks in
/// the top N
///
/// The ranking population is `frame` itself unless the limit carries its
/// own filters, in which case it is re-derived from `base` (the view's
/// original, unfiltered frame) narrowed by those filters. With a metric the
/// population is aggregated per group and ranked by the aggregate;
/// without, distinct combinations rank by the first group dimension's raw
/// value. Ranking uses a stable sort over groups pre-ordered by key, so
/// ties at the cutoff resolve toward the smaller key.
pub fn limit_groups(
    frame: &Frame,
    base: &Frame,
    group_limit: &GroupLimit,
    catalog: &Catalog,
) -> Result<Frame, CatalogError> {
    let columns: Vec<&str> = group_limit
        .dimensions
        .iter()
        .map(|d| catalog.dimension_column(d))
        .collect::<Result<_, _>>()?;

    let ranking = match &group_limit.filters {
        Some(filters) => apply_filters(base, Some(filters), catalog)?,
        None => frame.clone(),
    };

    let ranked = rank_groups(&ranking, &columns, group_limit, catalog)?;
    let kept: BTreeSet<Vec<Value>> =
        ranked.into_iter().take(group_limit.top).collect();

    let indices: Vec<usize> = columns
        .iter()
        .map(|name| {
            frame
                .column_index(name)
                .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
        })
        .collect::<Result<_, _>>()?;

    Ok(frame.filter_rows(|row| {
        let key: Vec<Value> = indices.iter().map(|&i| row[i].clone()).collect();
        kept.contains(&key)
    }))
}

/// Distinct group keys of the ranking population, best first
fn rank_groups(
    ranking: &Frame,
    columns: &[&str],
    group_limit: &GroupLimit,
    catalog: &Catalog,
) -> Result<Vec<Vec<Value>>, CatalogError> {
    let key_cols: Vec<usize> = columns
        .iter()
        .map(|name| {
            ranking
                .column_index(name)
                .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
        })
        .collect::<Result<_, _>>()?;

    let descending = group_limit.direction == OrderDirection::Desc;

    if let Some(metric) = &group_limit.metric {
        let binding = catalog.metric_binding(metric)?;
        let metric_col = ranking
            .column_index(&binding.source_column)
            .ok_or_else(|| CatalogError::MissingColumn(binding.source_column.clone()))?;

        // Group keys come out of the map sorted, which fixes tie order
        let mut groups: std::collections::BTreeMap<Vec<Value>, Vec<usize>> =
            std::collections::BTreeMap::new();
        for (i, row) in ranking.rows().iter().enumerate() {
            let key: Vec<Value> = key_cols.iter().map(|&c| row[c].clone()).collect();
            groups.entry(key).or_default().push(i);
        }

        let mut ranked: Vec<(Vec<Value>, Value)> = groups
            .into_iter()
            .map(|(key, rows)| {
                let values = rows.iter().map(|&i| &ranking.rows()[i][metric_col]);
                let rank = aggregate_column(binding.aggregation, values);
                (key, rank)
            })
            .collect();
        ranked.sort_by(|a, b| {
            let ordering = a.1.total_cmp(&b.1);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        Ok(ranked.into_iter().map(|(key, _)| key).collect())
    } else {
        let distinct = ranking.project(&key_cols).distinct();
        let mut keys: Vec<Vec<Value>> = distinct.rows().to_vec();
        keys.sort_by(|a, b| {
            let ordering = a[0].total_cmp(&b[0]);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        Ok(keys)
    }
}
