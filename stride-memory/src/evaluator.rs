//! Filter evaluation over in-memory BSON documents.
//!
//! Interprets the core predicate kinds directly against a document. The
//! MongoDB backend hands the same predicates to the database; this module
//! is the reference interpretation the tests run against.

use bson::Bson;

use stride_core::{
    error::StoreError,
    query::{Filter, PredicateVisitor},
};

/// Comparable view of a BSON scalar.
///
/// Normalizes every numeric type to f64 so Int32, Int64, and Double
/// compare by value, the way the database itself would compare them.
/// Types outside the comparable set read as null and match nothing.
#[derive(Debug)]
pub(crate) enum Comparable<'a> {
    Null,
    Bool(bool),
    Number(f64),
    String(&'a str),
    Array(Vec<Comparable<'a>>),
}

impl<'a> From<&'a Bson> for Comparable<'a> {
    fn from(bson: &'a Bson) -> Self {
        match bson {
            Bson::Boolean(value) => Comparable::Bool(*value),
            Bson::Int32(value) => Comparable::Number(f64::from(*value)),
            Bson::Int64(value) => Comparable::Number(*value as f64),
            Bson::Double(value) => Comparable::Number(*value),
            Bson::String(value) => Comparable::String(value),
            Bson::Array(arr) => Comparable::Array(
                arr.iter()
                    .map(Comparable::from)
                    .collect(),
            ),
            _ => Comparable::Null,
        }
    }
}

impl PartialEq for Comparable<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparable::Null, Comparable::Null) => true,
            (Comparable::Bool(a), Comparable::Bool(b)) => a == b,
            (Comparable::Number(a), Comparable::Number(b)) => a == b,
            (Comparable::String(a), Comparable::String(b)) => a == b,
            (Comparable::Array(a), Comparable::Array(b)) => a == b,
            _ => false,
        }
    }
}

/// Evaluates filter predicates against a single document.
pub(crate) struct PredicateEvaluator<'a> {
    document: &'a bson::Document,
}

impl<'a> PredicateEvaluator<'a> {
    pub fn new(document: &'a bson::Document) -> Self {
        Self { document }
    }

    /// True when every predicate of the conjunction holds.
    ///
    /// Predicates that cannot be evaluated (missing field, type mismatch)
    /// count as non-matching rather than erroring, mirroring how the
    /// database skips documents a filter does not apply to.
    pub fn matches(&mut self, filter: &Filter) -> bool {
        filter
            .predicates()
            .iter()
            .all(|predicate| self.visit_predicate(predicate).unwrap_or(false))
    }

    fn field_value(&self, field: &str) -> Option<&'a Bson> {
        self.document.get(field)
    }
}

impl PredicateVisitor for PredicateEvaluator<'_> {
    type Output = bool;
    type Error = StoreError;

    fn visit_eq(&mut self, field: &str, value: &Bson) -> Result<Self::Output, Self::Error> {
        Ok(match self.field_value(field) {
            Some(field_value) => Comparable::from(field_value) == Comparable::from(value),
            None => false,
        })
    }

    fn visit_contains(&mut self, field: &str, value: &Bson) -> Result<Self::Output, Self::Error> {
        Ok(match self.field_value(field).map(Comparable::from) {
            Some(Comparable::Array(items)) => {
                let needle = Comparable::from(value);
                items.iter().any(|item| item == &needle)
            }
            _ => false,
        })
    }

    fn visit_range(
        &mut self,
        field: &str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self::Output, Self::Error> {
        Ok(match self.field_value(field).map(Comparable::from) {
            Some(Comparable::Number(n)) => {
                min.is_none_or(|bound| n >= bound) && max.is_none_or(|bound| n <= bound)
            }
            _ => false,
        })
    }

    fn visit_flag(&mut self, field: &str, value: bool) -> Result<Self::Output, Self::Error> {
        Ok(matches!(
            self.field_value(field),
            Some(Bson::Boolean(found)) if *found == value
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;
    use stride_core::query::Filter;

    fn product() -> bson::Document {
        doc! {
            "title": "Jordan Elite 4",
            "brand": "Jordan",
            "price": 179.0,
            "colors": ["Black", "White", "Red"],
            "sizes": [38, 39, 40, 41, 42, 43, 44],
            "is_new": false,
            "is_best_seller": true,
        }
    }

    fn matches(filter: Filter) -> bool {
        let document = product();
        PredicateEvaluator::new(&document).matches(&filter)
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(matches(Filter::new()));
    }

    #[test]
    fn eq_compares_strings_exactly() {
        assert!(matches(Filter::new().eq("brand", "Jordan")));
        assert!(!matches(Filter::new().eq("brand", "Nike")));
    }

    #[test]
    fn contains_tests_list_membership_across_numeric_widths() {
        // Sizes are stored as Int32; an Int64 probe must still match.
        assert!(matches(Filter::new().contains("sizes", 42_i64)));
        assert!(matches(Filter::new().contains("colors", "Red")));
        assert!(!matches(Filter::new().contains("colors", "Green")));
    }

    #[test]
    fn contains_on_a_scalar_field_matches_nothing() {
        assert!(!matches(Filter::new().contains("brand", "Jordan")));
    }

    #[test]
    fn range_bounds_are_inclusive_and_independently_optional() {
        assert!(matches(Filter::new().range("price", Some(179.0), None)));
        assert!(matches(Filter::new().range("price", None, Some(179.0))));
        assert!(matches(Filter::new().range("price", Some(100.0), Some(200.0))));
        assert!(!matches(Filter::new().range("price", Some(180.0), None)));
        assert!(!matches(Filter::new().range("price", None, Some(178.99))));
    }

    #[test]
    fn flag_matches_exact_boolean_only() {
        assert!(matches(Filter::new().flag("is_best_seller", true)));
        assert!(!matches(Filter::new().flag("is_best_seller", false)));
        assert!(matches(Filter::new().flag("is_new", false)));
    }

    #[test]
    fn missing_fields_match_nothing() {
        assert!(!matches(Filter::new().eq("gender", "Men")));
        assert!(!matches(Filter::new().range("popularity", Some(0.0), None)));
    }

    #[test]
    fn conjunction_requires_every_predicate() {
        assert!(matches(
            Filter::new()
                .eq("brand", "Jordan")
                .contains("sizes", 40)
                .range("price", Some(150.0), Some(200.0))
        ));
        assert!(!matches(
            Filter::new()
                .eq("brand", "Jordan")
                .contains("colors", "Green")
        ));
    }
}
