//! Query model shared by every listing page.
//!
//! A [`Listing`] names the record fields that take part in free-text search and the
//! fields that back a categorical selector. Applied to a [`QueryState`] it yields a
//! [`FilteredView`]: the matching records, lazily, in their original order.
//!
//! Matching is conjunctive. A record is kept when at least one searchable field
//! contains the search text (case-insensitively) and every axis that is not set to
//! [`ALL`] equals the record's value exactly.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::errors::AppError;

/// Selector value that leaves an axis unconstrained.
pub const ALL: &str = "All";

/// Reads an optional text field from a record.
pub type FieldAccessor<T> = fn(&T) -> Option<&str>;

/// The user's current filter intent for one listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    search_text: String,
    selections: BTreeMap<String, String>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Replace the search text verbatim. Case folding happens at match time.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Selected value for an axis, [`ALL`] when the axis was never set.
    pub fn selected(&self, axis: &str) -> &str {
        self.selections.get(axis).map(String::as_str).unwrap_or(ALL)
    }

    /// Replace the selected value of one axis.
    ///
    /// Values outside the axis options are accepted and match no record; use
    /// [`Listing::validate`] to reject them instead.
    pub fn set_category(&mut self, axis: impl Into<String>, value: impl Into<String>) {
        self.selections.insert(axis.into(), value.into());
    }

    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.set_search_text(text);
        self
    }

    pub fn with_category(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_category(axis, value);
        self
    }

    /// Every axis that has been set, in axis-name order.
    pub fn selections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selections
            .iter()
            .map(|(axis, value)| (axis.as_str(), value.as_str()))
    }

    /// True when neither the text nor any axis constrains the view.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty() && self.selections.values().all(|v| v == ALL)
    }

    /// Back to empty text with every axis on [`ALL`].
    pub fn reset(&mut self) {
        self.search_text.clear();
        for value in self.selections.values_mut() {
            *value = ALL.to_string();
        }
    }
}

/// One categorical filter dimension of a listing.
pub struct CategoryAxis<T> {
    name: &'static str,
    options: &'static [&'static str],
    value: FieldAccessor<T>,
}

impl<T> CategoryAxis<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The closed set of values a selector offers, without [`ALL`].
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// Whether a selector could produce this value.
    pub fn accepts(&self, value: &str) -> bool {
        value == ALL || self.options.contains(&value)
    }
}

/// Search and filter definition for one collection of records.
pub struct Listing<T> {
    text_fields: Vec<FieldAccessor<T>>,
    axes: Vec<CategoryAxis<T>>,
}

impl<T> Default for Listing<T> {
    fn default() -> Self {
        Self {
            text_fields: Vec::new(),
            axes: Vec::new(),
        }
    }
}

impl<T> Listing<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field to free-text search. Searchable fields are OR-ed together.
    pub fn search_field(mut self, accessor: FieldAccessor<T>) -> Self {
        self.text_fields.push(accessor);
        self
    }

    /// Add a categorical axis with its closed option list.
    pub fn axis(
        mut self,
        name: &'static str,
        options: &'static [&'static str],
        value: FieldAccessor<T>,
    ) -> Self {
        self.axes.push(CategoryAxis {
            name,
            options,
            value,
        });
        self
    }

    /// Whether the page offers a search input at all.
    pub fn supports_search(&self) -> bool {
        !self.text_fields.is_empty()
    }

    pub fn axes(&self) -> &[CategoryAxis<T>] {
        &self.axes
    }

    pub fn axis_named(&self, name: &str) -> Option<&CategoryAxis<T>> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// Fresh query state for this listing: empty text, every axis on [`ALL`].
    pub fn query(&self) -> QueryState {
        let mut query = QueryState::new();
        for axis in &self.axes {
            query.set_category(axis.name, ALL);
        }
        query
    }

    /// Inclusion decision for a single record.
    pub fn matches(&self, record: &T, query: &QueryState) -> bool {
        let needle = query.search_text().to_lowercase();
        self.text_matches(record, &needle) && self.category_matches(record, query)
    }

    /// Lazily yield the records that match `query`, preserving their order.
    pub fn filter<'q, 'r>(
        &'q self,
        records: &'r [T],
        query: &'q QueryState,
    ) -> FilteredView<'q, 'r, T> {
        FilteredView {
            listing: self,
            query,
            needle: query.search_text().to_lowercase(),
            records: records.iter(),
        }
    }

    /// Selections on this listing's axes whose value no selector would offer.
    pub fn out_of_range<'q>(&self, query: &'q QueryState) -> Vec<(&'q str, &'q str)> {
        query
            .selections()
            .filter(|(axis, value)| {
                self.axis_named(axis)
                    .is_some_and(|known| !known.accepts(value))
            })
            .collect()
    }

    /// Reject selections on unknown axes or outside an axis' options.
    pub fn validate(&self, query: &QueryState) -> Result<(), AppError> {
        for (axis, value) in query.selections() {
            let Some(known) = self.axis_named(axis) else {
                return Err(AppError::Validation(format!("Unknown filter '{}'", axis)));
            };
            if !known.accepts(value) {
                return Err(AppError::Validation(format!(
                    "'{}' is not a valid {}; expected one of: {}, {}",
                    value,
                    axis,
                    ALL,
                    known.options.join(", ")
                )));
            }
        }
        Ok(())
    }

    fn text_matches(&self, record: &T, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.text_fields.iter().any(|field| {
            field(record).is_some_and(|text| text.to_lowercase().contains(needle))
        })
    }

    fn category_matches(&self, record: &T, query: &QueryState) -> bool {
        self.axes.iter().all(|axis| {
            let selected = query.selected(axis.name);
            selected == ALL || (axis.value)(record) == Some(selected)
        })
    }
}

/// Order-preserving subsequence of a record slice matching a query.
///
/// Borrows the listing and query for `'q`; yields records borrowed for `'r`.
pub struct FilteredView<'q, 'r, T> {
    listing: &'q Listing<T>,
    query: &'q QueryState,
    needle: String,
    records: std::slice::Iter<'r, T>,
}

impl<'r, T> Iterator for FilteredView<'_, 'r, T> {
    type Item = &'r T;

    fn next(&mut self) -> Option<Self::Item> {
        let listing = self.listing;
        let query = self.query;
        let needle = &self.needle;
        self.records.find(|record| {
            listing.text_matches(record, needle) && listing.category_matches(record, query)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doc {
        id: &'static str,
        title: &'static str,
        place: Option<&'static str>,
        kind: &'static str,
    }

    const KINDS: &[&str] = &["Guide", "Fund"];

    fn listing() -> Listing<Doc> {
        Listing::<Doc>::new()
            .search_field(|doc| Some(doc.title))
            .search_field(|doc| doc.place)
            .axis("kind", KINDS, |doc| Some(doc.kind))
    }

    fn docs() -> Vec<Doc> {
        vec![
            Doc { id: "a", title: "Seed Grants", place: Some("Karachi"), kind: "Fund" },
            Doc { id: "b", title: "Filing Guide", place: None, kind: "Guide" },
            Doc { id: "c", title: "Karachi Angels", place: Some("Online"), kind: "Fund" },
        ]
    }

    fn ids<'a>(view: impl Iterator<Item = &'a Doc>) -> Vec<&'static str> {
        view.map(|doc| doc.id).collect()
    }

    #[test]
    fn test_default_query_is_identity() {
        let listing = listing();
        let docs = docs();
        let query = listing.query();

        assert!(query.is_unfiltered());
        assert_eq!(query.selected("kind"), ALL);
        assert_eq!(ids(listing.filter(&docs, &query)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_searchable_fields_are_ored() {
        let listing = listing();
        let docs = docs();
        let query = listing.query().with_search_text("KARACHI");

        assert_eq!(ids(listing.filter(&docs, &query)), vec!["a", "c"]);
    }

    #[test]
    fn test_text_and_category_are_anded() {
        let listing = listing();
        let docs = docs();

        let query = listing
            .query()
            .with_search_text("guide")
            .with_category("kind", "Fund");
        assert!(ids(listing.filter(&docs, &query)).is_empty());

        let query = listing
            .query()
            .with_search_text("angels")
            .with_category("kind", "Fund");
        assert_eq!(ids(listing.filter(&docs, &query)), vec!["c"]);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let listing = listing();
        let docs = docs();
        let query = listing.query().with_category("kind", "fund");

        assert!(listing.filter(&docs, &query).next().is_none());
        assert_eq!(listing.out_of_range(&query), vec![("kind", "fund")]);
    }

    #[test]
    fn test_absent_field_never_matches_text() {
        let listing = listing();
        let docs = docs();
        let query = listing.query().with_search_text("online");

        assert_eq!(ids(listing.filter(&docs, &query)), vec!["c"]);
        assert!(!listing.matches(&docs[1], &query));
    }

    #[test]
    fn test_empty_store_yields_empty_view() {
        let listing = listing();
        let query = listing.query().with_search_text("anything");

        assert_eq!(listing.filter(&[], &query).count(), 0);
    }

    #[test]
    fn test_listing_without_fields_keeps_everything_on_empty_text() {
        let listing: Listing<Doc> = Listing::new();
        let docs = docs();

        assert!(!listing.supports_search());
        assert_eq!(listing.filter(&docs, &QueryState::new()).count(), 3);
    }

    #[test]
    fn test_reset_returns_to_all() {
        let listing = listing();
        let mut query = listing.query().with_search_text("seed").with_category("kind", "Fund");
        assert!(!query.is_unfiltered());

        query.reset();

        assert_eq!(query, listing.query());
    }

    #[test]
    fn test_validate_rejects_unknown_values_and_axes() {
        let listing = listing();

        assert!(listing.validate(&listing.query().with_category("kind", "Guide")).is_ok());

        let err = listing
            .validate(&listing.query().with_category("kind", "Loan"))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.message().contains("All, Guide, Fund"));

        let err = listing
            .validate(&QueryState::new().with_category("region", "Sindh"))
            .unwrap_err();
        assert_eq!(err.message(), "Unknown filter 'region'");
    }
}
