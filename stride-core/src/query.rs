//! Filter construction and the query model shared by all store backends.
//!
//! Filters are a conjunction of a closed set of predicate kinds. There is
//! deliberately no disjunction, negation, or free-form operator: every read
//! path in the system is expressible as "all of these predicates hold", and
//! keeping the sum closed lets each backend translate it exhaustively.
//!
//! # Filter building
//!
//! ```ignore
//! use stride_core::query::{Filter, Query};
//!
//! let query = Query::builder()
//!     .filter(
//!         Filter::new()
//!             .eq("brand", "Nike")
//!             .contains("sizes", 42)
//!             .range("price", Some(100.0), None),
//!     )
//!     .limit(60)
//!     .build();
//! ```
//!
//! Backends interpret the predicates through [`PredicateVisitor`].

use bson::Bson;

use crate::error::StoreError;

/// A single predicate over one document field.
///
/// The four kinds cover the whole query surface of the system: exact
/// matches, list membership, numeric ranges, and boolean flags.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Field equals the value exactly.
    Eq {
        /// The field name to compare.
        field: String,
        /// The value the field must equal.
        value: Bson,
    },
    /// List-valued field contains the value.
    Contains {
        /// The field name of the list.
        field: String,
        /// The element to look for.
        value: Bson,
    },
    /// Numeric field lies within the range. Either bound may be absent,
    /// but never both: [`Filter::range`] drops an unbounded range.
    Range {
        /// The field name to compare.
        field: String,
        /// Inclusive lower bound, if any.
        min: Option<f64>,
        /// Inclusive upper bound, if any.
        max: Option<f64>,
    },
    /// Boolean field matches the flag exactly.
    ///
    /// A flag is only ever added for an explicitly supplied parameter, so
    /// "absent" means "no predicate", not "false".
    Flag {
        /// The field name to compare.
        field: String,
        /// The required flag value.
        value: bool,
    },
}

/// An ordered conjunction of predicates.
///
/// An empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    /// Creates an empty filter (matches everything).
    pub fn new() -> Self {
        Filter::default()
    }

    /// Adds an equality predicate.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.predicates.push(Predicate::Eq { field: field.into(), value: value.into() });
        self
    }

    /// Adds a list-membership predicate.
    pub fn contains(mut self, field: impl Into<String>, value: impl Into<Bson>) -> Self {
        self.predicates.push(Predicate::Contains { field: field.into(), value: value.into() });
        self
    }

    /// Adds a numeric range predicate covering whichever bounds are present.
    ///
    /// With neither bound given the filter is returned unchanged, so a
    /// caller can pass its optional min/max straight through.
    pub fn range(mut self, field: impl Into<String>, min: Option<f64>, max: Option<f64>) -> Self {
        if min.is_none() && max.is_none() {
            return self;
        }
        self.predicates.push(Predicate::Range { field: field.into(), min, max });
        self
    }

    /// Adds an exact boolean-flag predicate.
    pub fn flag(mut self, field: impl Into<String>, value: bool) -> Self {
        self.predicates.push(Predicate::Flag { field: field.into(), value });
        self
    }

    /// Returns `true` if no predicate has been added.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// The predicates of this conjunction, in insertion order.
    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }
}

/// A structured query: a filter plus an optional result cap.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    /// Conjunction of predicates documents must satisfy.
    pub filter: Filter,
    /// Maximum number of documents to return.
    pub limit: Option<usize>,
}

impl Query {
    /// Creates a query that matches every document with no cap.
    pub fn new() -> Self {
        Query::default()
    }

    /// Creates a new query builder for fluent construction.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    query: Query,
}

impl QueryBuilder {
    /// Creates a new query builder.
    pub fn new() -> Self {
        QueryBuilder { query: Query::default() }
    }

    /// Sets the filter for this query.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.query.filter = filter;
        self
    }

    /// Sets the maximum number of documents to return.
    pub fn limit(mut self, limit: usize) -> Self {
        self.query.limit = Some(limit);
        self
    }

    /// Builds and returns the final query.
    pub fn build(self) -> Query {
        self.query
    }
}

/// Visitor over the predicate kinds.
///
/// Backends implement this once per native query form; the in-memory
/// backend produces booleans, the MongoDB backend produces query documents.
pub trait PredicateVisitor {
    type Output;
    type Error: Into<StoreError>;

    fn visit_eq(&mut self, field: &str, value: &Bson) -> Result<Self::Output, Self::Error>;
    fn visit_contains(&mut self, field: &str, value: &Bson) -> Result<Self::Output, Self::Error>;
    fn visit_range(
        &mut self,
        field: &str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self::Output, Self::Error>;
    fn visit_flag(&mut self, field: &str, value: bool) -> Result<Self::Output, Self::Error>;

    fn visit_predicate(&mut self, predicate: &Predicate) -> Result<Self::Output, Self::Error> {
        match predicate {
            Predicate::Eq { field, value } => self.visit_eq(field, value),
            Predicate::Contains { field, value } => self.visit_contains(field, value),
            Predicate::Range { field, min, max } => self.visit_range(field, *min, *max),
            Predicate::Flag { field, value } => self.visit_flag(field, *value),
        }
    }
}
