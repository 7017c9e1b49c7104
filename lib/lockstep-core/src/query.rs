//! Query parameter mapping.
//!
//! Every resource method hands the pipeline a [`QueryParams`] describing its
//! non-body arguments. Two rules are applied when the mapping is serialized:
//!
//! - an absent value (`None`, or an empty list) drops the key entirely, it is
//!   never sent as an empty string or as `null`;
//! - a list value is sent as repeated keys, `Buckets=0&Buckets=30`, in the
//!   order given.
//!
//! Identifiers already interpolated into the request path are recorded with
//! [`QueryParams::path`] so they stay visible for diagnostics, but they are
//! never repeated in the query string.

use std::fmt;

/// Where a recorded parameter travels in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    /// Already interpolated into the path (e.g., `/Payments/{id}`).
    Path,
    /// Serialized into the query string (e.g., `?pageSize=50`).
    Query,
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path => write!(f, "path"),
            Self::Query => write!(f, "query"),
        }
    }
}

/// A present query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A single value.
    Scalar(String),
    /// A collection, serialized as one repeated key per element.
    List(Vec<String>),
}

/// Conversion into an optional [`QueryValue`].
///
/// Returning `None` means "absent": the parameter is omitted from the request.
pub trait ToQueryValue {
    /// Convert to a query value, or `None` when absent.
    fn to_query_value(&self) -> Option<QueryValue>;
}

impl ToQueryValue for str {
    fn to_query_value(&self) -> Option<QueryValue> {
        Some(QueryValue::Scalar(self.to_string()))
    }
}

impl ToQueryValue for String {
    fn to_query_value(&self) -> Option<QueryValue> {
        self.as_str().to_query_value()
    }
}

impl ToQueryValue for bool {
    fn to_query_value(&self) -> Option<QueryValue> {
        Some(QueryValue::Scalar(if *self { "true" } else { "false" }.to_string()))
    }
}

macro_rules! display_query_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToQueryValue for $ty {
                fn to_query_value(&self) -> Option<QueryValue> {
                    Some(QueryValue::Scalar(self.to_string()))
                }
            }
        )*
    };
}

display_query_value!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl<T: ToQueryValue + ?Sized> ToQueryValue for &T {
    fn to_query_value(&self) -> Option<QueryValue> {
        (**self).to_query_value()
    }
}

impl<T: ToQueryValue> ToQueryValue for Option<T> {
    fn to_query_value(&self) -> Option<QueryValue> {
        self.as_ref().and_then(ToQueryValue::to_query_value)
    }
}

impl<T: ToQueryValue> ToQueryValue for [T] {
    fn to_query_value(&self) -> Option<QueryValue> {
        let mut values = Vec::with_capacity(self.len());
        for item in self {
            match item.to_query_value() {
                Some(QueryValue::Scalar(value)) => values.push(value),
                Some(QueryValue::List(nested)) => values.extend(nested),
                None => {}
            }
        }
        if values.is_empty() {
            None
        } else {
            Some(QueryValue::List(values))
        }
    }
}

impl<T: ToQueryValue, const N: usize> ToQueryValue for [T; N] {
    fn to_query_value(&self) -> Option<QueryValue> {
        self.as_slice().to_query_value()
    }
}

impl<T: ToQueryValue> ToQueryValue for Vec<T> {
    fn to_query_value(&self) -> Option<QueryValue> {
        self.as_slice().to_query_value()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    location: ParamLocation,
    value: Option<QueryValue>,
}

/// Ordered parameter mapping for one request.
///
/// # Example
///
/// ```
/// use lockstep_core::QueryParams;
///
/// let params = QueryParams::new()
///     .path("id", "abc123")
///     .query("include", None::<&str>);
///
/// assert!(params.pairs().is_empty());
///
/// let params = QueryParams::new()
///     .query("pageSize", 50)
///     .query("Buckets", vec![0, 30]);
///
/// assert_eq!(params.to_query_string(), "pageSize=50&Buckets=0&Buckets=30");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<Entry>,
}

impl QueryParams {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a query-string parameter. Absent values are kept in the mapping
    /// but never serialized.
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl ToQueryValue) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            location: ParamLocation::Query,
            value: value.to_query_value(),
        });
        self
    }

    /// Records an identifier the caller already interpolated into the path.
    #[must_use]
    pub fn path(mut self, name: impl Into<String>, value: impl fmt::Display) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            location: ParamLocation::Path,
            value: Some(QueryValue::Scalar(value.to_string())),
        });
        self
    }

    /// Returns `true` if nothing would be written to the query string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self
            .entries
            .iter()
            .any(|entry| entry.location == ParamLocation::Query && entry.value.is_some())
    }

    /// Location of a recorded parameter, if present.
    #[must_use]
    pub fn location(&self, name: &str) -> Option<ParamLocation> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.location)
    }

    /// Identifiers recorded with [`QueryParams::path`], in insertion order.
    pub fn path_params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|entry| match (&entry.location, &entry.value) {
            (ParamLocation::Path, Some(QueryValue::Scalar(value))) => {
                Some((entry.name.as_str(), value.as_str()))
            }
            _ => None,
        })
    }

    /// Serialized `(name, value)` pairs: absent values dropped, lists expanded
    /// into repeated keys, path identifiers excluded.
    #[must_use]
    pub fn pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for entry in &self.entries {
            if entry.location != ParamLocation::Query {
                continue;
            }
            match &entry.value {
                Some(QueryValue::Scalar(value)) => pairs.push((entry.name.clone(), value.clone())),
                Some(QueryValue::List(values)) => pairs.extend(
                    values
                        .iter()
                        .map(|value| (entry.name.clone(), value.clone())),
                ),
                None => {}
            }
        }
        pairs
    }

    /// Form-urlencoded query string, without the leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.pairs() {
            serializer.append_pair(&name, &value);
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;

    #[test]
    fn param_location_display() {
        assert_eq!(ParamLocation::Path.to_string(), "path");
        assert_eq!(ParamLocation::Query.to_string(), "query");
    }

    #[test]
    fn absent_values_are_omitted() {
        let params = QueryParams::new()
            .query("filter", None::<String>)
            .query("include", Some("Notes"))
            .query("pageSize", None::<u32>);

        check!(params.pairs() == vec![("include".to_string(), "Notes".to_string())]);
        check!(params.to_query_string() == "include=Notes");
    }

    #[test]
    fn path_identifiers_are_not_serialized() {
        let params = QueryParams::new()
            .path("id", "abc123")
            .query("include", None::<&str>);

        check!(params.is_empty());
        check!(params.to_query_string().is_empty());
        check!(params.location("id") == Some(ParamLocation::Path));
        check!(params.location("include") == Some(ParamLocation::Query));
        check!(params.path_params().collect::<Vec<_>>() == vec![("id", "abc123")]);
    }

    #[test]
    fn lists_expand_to_repeated_keys() {
        let params = QueryParams::new().query("Buckets", vec![0, 30, 60]);

        check!(params.to_query_string() == "Buckets=0&Buckets=30&Buckets=60");
    }

    #[test]
    fn empty_list_is_absent() {
        let params = QueryParams::new().query("Buckets", Vec::<i32>::new());

        check!(params.is_empty());
        check!(params.pairs().is_empty());
    }

    #[test]
    fn list_skips_absent_elements() {
        let_assert!(
            Some(QueryValue::List(values)) = [Some("a"), None, Some("b")].to_query_value()
        );
        check!(values == vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn scalars_render_like_the_platform_expects() {
        check!(true.to_query_value() == Some(QueryValue::Scalar("true".to_string())));
        check!(42_i64.to_query_value() == Some(QueryValue::Scalar("42".to_string())));
        check!(1.5_f64.to_query_value() == Some(QueryValue::Scalar("1.5".to_string())));
        check!("".to_query_value() == Some(QueryValue::Scalar(String::new())));
    }

    #[test]
    fn values_are_form_encoded() {
        let params = QueryParams::new()
            .query("filter", "status eq 'Open'")
            .query("order", "paymentDate DESC");

        check!(
            params.to_query_string()
                == "filter=status+eq+%27Open%27&order=paymentDate+DESC"
        );
    }

    #[test]
    fn insertion_order_is_preserved() {
        let params = QueryParams::new()
            .query("pageNumber", 2)
            .query("filter", "a")
            .query("pageSize", 10);

        let names: Vec<_> = params.pairs().into_iter().map(|(name, _)| name).collect();
        check!(names == vec!["pageNumber", "filter", "pageSize"]);
    }
}
