//! Filter application

use std::cmp::Ordering;

use crate::catalog::{Catalog, CatalogError};
use crate::frame::{Frame, Value};
use crate::query::{Filter, FilterValue, Operator, Predicate};

/// Apply a filter set to a frame as a conjunction
///
/// An empty or absent filter set returns the input unchanged. Filters
/// without an evaluatable predicate (`Having`, `Adhoc`) are identity
/// transforms. Predicate columns resolve through the catalog; a missing
/// binding aborts the whole request.
///
/// Null cells follow comparison conventions: they satisfy only `!=`,
/// `NOT IN`, and `IS NULL`, never `=`, ordering comparisons, or `IN`.
pub fn apply_filters(
    frame: &Frame,
    filters: Option<&[Filter]>,
    catalog: &Catalog,
) -> Result<Frame, CatalogError> {
    let Some(filters) = filters else {
        return Ok(frame.clone());
    };

    let mut current = frame.clone();
    for predicate in filters.iter().filter_map(Filter::where_predicate) {
        current = apply_predicate(&current, predicate, catalog)?;
    }
    Ok(current)
}

fn apply_predicate(
    frame: &Frame,
    predicate: &Predicate,
    catalog: &Catalog,
) -> Result<Frame, CatalogError> {
    let column = catalog.dimension_column(&predicate.column)?;
    let col = frame
        .column_index(column)
        .ok_or_else(|| CatalogError::MissingColumn(column.to_string()))?;

    Ok(frame.filter_rows(|row| evaluate(&row[col], predicate.operator, predicate.value.as_ref())))
}

fn evaluate(cell: &Value, operator: Operator, value: Option<&FilterValue>) -> bool {
    match operator {
        Operator::IsNull => cell.is_null(),
        Operator::IsNotNull => !cell.is_null(),
        Operator::Eq => matches_eq(cell, value),
        Operator::Ne => !matches_eq(cell, value),
        Operator::In => matches_in(cell, value),
        Operator::NotIn => !matches_in(cell, value),
        Operator::Gt => matches_cmp(cell, value, Ordering::Greater, false),
        Operator::Lt => matches_cmp(cell, value, Ordering::Less, false),
        Operator::Ge => matches_cmp(cell, value, Ordering::Greater, true),
        Operator::Le => matches_cmp(cell, value, Ordering::Less, true),
    }
}

fn matches_eq(cell: &Value, value: Option<&FilterValue>) -> bool {
    if cell.is_null() {
        return false;
    }
    match value.and_then(FilterValue::as_scalar) {
        Some(rhs) if !rhs.is_null() => cell == rhs,
        _ => false,
    }
}

fn matches_in(cell: &Value, value: Option<&FilterValue>) -> bool {
    if cell.is_null() {
        return false;
    }
    match value {
        Some(v) => v.as_list().into_iter().any(|rhs| !rhs.is_null() && cell == rhs),
        None => false,
    }
}

fn matches_cmp(
    cell: &Value,
    value: Option<&FilterValue>,
    wanted: Ordering,
    or_equal: bool,
) -> bool {
    if cell.is_null() {
        return false;
    }
    match value.and_then(FilterValue::as_scalar) {
        Some(rhs) if !rhs.is_null() => {
            let ordering = cell.total_cmp(rhs);
            ordering == wanted || (or_equal && ordering == Ordering::Equal)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Dimension, SemanticType};
    use crate::query::Predicate;

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_dimension(region(), "region");
        catalog.add_dimension(units(), "units");
        catalog
    }

    fn region() -> Dimension {
        Dimension::new("sales.region", "region", SemanticType::String, "")
    }

    fn units() -> Dimension {
        Dimension::new("sales.units", "units", SemanticType::Integer, "")
    }

    fn sample() -> Frame {
        Frame::from_rows(
            vec!["region".into(), "units".into()],
            vec![
                vec![Value::Str("East".into()), Value::Int(3)],
                vec![Value::Str("West".into()), Value::Int(7)],
                vec![Value::Null, Value::Int(5)],
                vec![Value::Str("North".into()), Value::Null],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_absent_filters_return_input() {
        let frame = sample();
        let out = apply_filters(&frame, None, &catalog()).unwrap();
        assert_eq!(out, frame);
    }

    #[test]
    fn test_eq_and_ne() {
        let frame = sample();
        let eq = vec![Filter::Where(Predicate::new(region(), Operator::Eq, "East"))];
        let out = apply_filters(&frame, Some(&eq), &catalog()).unwrap();
        assert_eq!(out.len(), 1);

        // != keeps the null cell, matching the original comparison behavior
        let ne = vec![Filter::Where(Predicate::new(region(), Operator::Ne, "East"))];
        let out = apply_filters(&frame, Some(&ne), &catalog()).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_ordering_comparisons_skip_nulls() {
        let frame = sample();
        let gt = vec![Filter::Where(Predicate::new(units(), Operator::Gt, 3i64))];
        let out = apply_filters(&frame, Some(&gt), &catalog()).unwrap();
        assert_eq!(out.len(), 2);

        let ge = vec![Filter::Where(Predicate::new(units(), Operator::Ge, 3i64))];
        let out = apply_filters(&frame, Some(&ge), &catalog()).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_in_accepts_scalar_and_list() {
        let frame = sample();
        let list = vec![Filter::Where(Predicate::new(
            region(),
            Operator::In,
            vec![Value::Str("East".into()), Value::Str("West".into())],
        ))];
        let out = apply_filters(&frame, Some(&list), &catalog()).unwrap();
        assert_eq!(out.len(), 2);

        let scalar = vec![Filter::Where(Predicate::new(region(), Operator::In, "West"))];
        let out = apply_filters(&frame, Some(&scalar), &catalog()).unwrap();
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_null_tests_ignore_value() {
        let frame = sample();
        let is_null = vec![Filter::Where(Predicate::unary(region(), Operator::IsNull))];
        let out = apply_filters(&frame, Some(&is_null), &catalog()).unwrap();
        assert_eq!(out.len(), 1);

        let not_null = vec![Filter::Where(Predicate::unary(region(), Operator::IsNotNull))];
        let out = apply_filters(&frame, Some(&not_null), &catalog()).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_conjunction() {
        let frame = sample();
        let filters = vec![
            Filter::Where(Predicate::new(units(), Operator::Ge, 3i64)),
            Filter::Where(Predicate::new(region(), Operator::Ne, "West")),
        ];
        let out = apply_filters(&frame, Some(&filters), &catalog()).unwrap();
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_non_where_shapes_are_identity() {
        let frame = sample();
        let filters = vec![
            Filter::Having(Predicate::new(units(), Operator::Gt, 100i64)),
            Filter::Adhoc("custom_expr > 1".into()),
        ];
        let out = apply_filters(&frame, Some(&filters), &catalog()).unwrap();
        assert_eq!(out, frame);
    }

    #[test]
    fn test_unknown_column_aborts() {
        let frame = sample();
        let unbound = Dimension::new("sales.ghost", "ghost", SemanticType::String, "");
        let filters = vec![Filter::Where(Predicate::new(unbound, Operator::Eq, "x"))];
        let err = apply_filters(&frame, Some(&filters), &catalog()).unwrap_err();
        assert_eq!(err, CatalogError::UnknownDimension("sales.ghost".into()));
    }

    #[test]
    fn test_filtering_twice_is_idempotent() {
        let frame = sample();
        let filters = vec![Filter::Where(Predicate::new(region(), Operator::Ne, "West"))];
        let once = apply_filters(&frame, Some(&filters), &catalog()).unwrap();
        let twice = apply_filters(&once, Some(&filters), &catalog()).unwrap();
        assert_eq!(once, twice);
    }
}
