//! Typed select-query builder for the hosted table API.
//!
//! Encodes column projection, equality/range filters, ordering, and limits
//! into the query-string form the table API expects
//! (`?select=id,title&status=eq.pending&order=created_at.asc`).

use std::fmt;

/// Comparison operator for a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Op {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
        }
    }
}

/// A single column filter.
#[derive(Debug, Clone)]
struct Filter {
    column: String,
    op: Op,
    value: String,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Asc,
    Desc,
}

/// Builder for a select query against a hosted table.
///
/// # Example
///
/// ```
/// use secondxe_admin::backend::SelectQuery;
///
/// let query = SelectQuery::new()
///     .columns("created_at, total_price")
///     .eq("status", "paid")
///     .gte("created_at", "2026-07-30T00:00:00Z")
///     .order_asc("created_at");
///
/// let pairs = query.into_pairs();
/// assert_eq!(pairs[0], ("select".to_string(), "created_at,total_price".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectQuery {
    columns: Option<String>,
    filters: Vec<Filter>,
    order: Option<(String, Direction)>,
    limit: Option<u32>,
}

impl SelectQuery {
    /// Start an empty query (`select=*`, no filters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Project to a subset of columns.
    ///
    /// Accepts a comma-separated list; surrounding whitespace per column is
    /// stripped so call sites can keep lists readable.
    #[must_use]
    pub fn columns(mut self, columns: &str) -> Self {
        let cleaned = columns
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        self.columns = Some(cleaned);
        self
    }

    /// Add a filter with an explicit operator.
    #[must_use]
    pub fn filter(mut self, column: &str, op: Op, value: impl fmt::Display) -> Self {
        self.filters.push(Filter {
            column: column.to_string(),
            op,
            value: value.to_string(),
        });
        self
    }

    /// Equality filter (`column=eq.value`).
    #[must_use]
    pub fn eq(self, column: &str, value: impl fmt::Display) -> Self {
        self.filter(column, Op::Eq, value)
    }

    /// Greater-than-or-equal filter (`column=gte.value`).
    #[must_use]
    pub fn gte(self, column: &str, value: impl fmt::Display) -> Self {
        self.filter(column, Op::Gte, value)
    }

    /// Less-than-or-equal filter (`column=lte.value`).
    #[must_use]
    pub fn lte(self, column: &str, value: impl fmt::Display) -> Self {
        self.filter(column, Op::Lte, value)
    }

    /// Sort ascending by a column.
    #[must_use]
    pub fn order_asc(mut self, column: &str) -> Self {
        self.order = Some((column.to_string(), Direction::Asc));
        self
    }

    /// Sort descending by a column.
    #[must_use]
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some((column.to_string(), Direction::Desc));
        self
    }

    /// Cap the number of returned rows.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Encode the query as `(key, value)` pairs for the request URL.
    ///
    /// `select` comes first when present, then filters in insertion order,
    /// then `order` and `limit`. Filter values are passed as-is; reqwest
    /// percent-encodes them when building the URL.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 3);

        if let Some(columns) = self.columns {
            pairs.push(("select".to_string(), columns));
        }

        for filter in self.filters {
            pairs.push((filter.column, format!("{}.{}", filter.op.as_str(), filter.value)));
        }

        if let Some((column, direction)) = self.order {
            let dir = match direction {
                Direction::Asc => "asc",
                Direction::Desc => "desc",
            };
            pairs.push(("order".to_string(), format!("{column}.{dir}")));
        }

        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_has_no_pairs() {
        assert!(SelectQuery::new().into_pairs().is_empty());
    }

    #[test]
    fn test_projection_strips_whitespace() {
        let pairs = SelectQuery::new()
            .columns("id, title , brand,model")
            .into_pairs();
        assert_eq!(
            pairs,
            vec![("select".to_string(), "id,title,brand,model".to_string())]
        );
    }

    #[test]
    fn test_equality_and_range_filters() {
        let pairs = SelectQuery::new()
            .eq("status", "paid")
            .gte("created_at", "2026-07-30T00:00:00Z")
            .into_pairs();
        assert_eq!(pairs[0], ("status".to_string(), "eq.paid".to_string()));
        assert_eq!(
            pairs[1],
            (
                "created_at".to_string(),
                "gte.2026-07-30T00:00:00Z".to_string()
            )
        );
    }

    #[test]
    fn test_order_and_limit() {
        let pairs = SelectQuery::new()
            .order_asc("created_at")
            .limit(30)
            .into_pairs();
        assert_eq!(pairs[0], ("order".to_string(), "created_at.asc".to_string()));
        assert_eq!(pairs[1], ("limit".to_string(), "30".to_string()));
    }

    #[test]
    fn test_filter_order_is_preserved() {
        let pairs = SelectQuery::new()
            .columns("id")
            .eq("a", 1)
            .lte("b", 2)
            .order_desc("a")
            .into_pairs();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["select", "a", "b", "order"]);
    }
}
