//! Translation from the core filter model to MongoDB query documents.

use bson::{Bson, Document, doc};

use stride_core::{
    error::StoreError,
    query::{Filter, PredicateVisitor},
};

/// Translates filter predicates into MongoDB's native query syntax.
///
/// The conjunction becomes an `$and` list; the empty filter is the empty
/// query document (match everything).
pub(crate) struct MongoQueryTranslator;

impl MongoQueryTranslator {
    pub(crate) fn translate(&mut self, filter: &Filter) -> Result<Document, StoreError> {
        if filter.is_empty() {
            return Ok(doc! {});
        }

        Ok(doc! {
            "$and": filter
                .predicates()
                .iter()
                .map(|predicate| self.visit_predicate(predicate))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

impl PredicateVisitor for MongoQueryTranslator {
    type Output = Document;
    type Error = StoreError;

    fn visit_eq(&mut self, field: &str, value: &Bson) -> Result<Self::Output, Self::Error> {
        Ok(doc! { field: { "$eq": value.clone() } })
    }

    fn visit_contains(&mut self, field: &str, value: &Bson) -> Result<Self::Output, Self::Error> {
        // `$in` against an array field tests element membership.
        Ok(doc! { field: { "$in": [value.clone()] } })
    }

    fn visit_range(
        &mut self,
        field: &str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self::Output, Self::Error> {
        let mut bounds = Document::new();
        if let Some(min) = min {
            bounds.insert("$gte", min);
        }
        if let Some(max) = max {
            bounds.insert("$lte", max);
        }
        if bounds.is_empty() {
            // Unbounded ranges never reach a filter; match everything.
            return Ok(doc! {});
        }

        Ok(doc! { field: bounds })
    }

    fn visit_flag(&mut self, field: &str, value: bool) -> Result<Self::Output, Self::Error> {
        Ok(doc! { field: { "$eq": value } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::query::Filter;

    fn translate(filter: Filter) -> Document {
        MongoQueryTranslator
            .translate(&filter)
            .expect("translation should succeed")
    }

    #[test]
    fn empty_filter_is_the_empty_query() {
        assert_eq!(translate(Filter::new()), doc! {});
    }

    #[test]
    fn eq_and_flag_become_dollar_eq() {
        assert_eq!(
            translate(Filter::new().eq("brand", "Gucci")),
            doc! { "$and": [ { "brand": { "$eq": "Gucci" } } ] }
        );
        assert_eq!(
            translate(Filter::new().flag("is_new", true)),
            doc! { "$and": [ { "is_new": { "$eq": true } } ] }
        );
    }

    #[test]
    fn membership_becomes_single_element_in() {
        assert_eq!(
            translate(Filter::new().contains("sizes", 42)),
            doc! { "$and": [ { "sizes": { "$in": [42] } } ] }
        );
    }

    #[test]
    fn range_keeps_only_present_bounds() {
        assert_eq!(
            translate(Filter::new().range("price", Some(100.0), Some(250.0))),
            doc! { "$and": [ { "price": { "$gte": 100.0, "$lte": 250.0 } } ] }
        );
        assert_eq!(
            translate(Filter::new().range("price", None, Some(250.0))),
            doc! { "$and": [ { "price": { "$lte": 250.0 } } ] }
        );
    }

    #[test]
    fn conjunction_preserves_predicate_order() {
        assert_eq!(
            translate(
                Filter::new()
                    .eq("brand", "Nike")
                    .contains("colors", "Red")
                    .flag("is_best_seller", false)
            ),
            doc! { "$and": [
                { "brand": { "$eq": "Nike" } },
                { "colors": { "$in": ["Red"] } },
                { "is_best_seller": { "$eq": false } },
            ] }
        );
    }
}
