//! The `field eq value` filter contract
//!
//! Remote fetches carry exactly one query capability: an equality filter on a
//! single field, rendered as an opaque string. [`build`] is the producing
//! side used by the resolver; [`parse`] and [`FilterExpr`] support consuming
//! implementations such as [`crate::storage::InMemoryClient`], which must
//! accept exactly this shape.

use serde_json::Value;

/// The only operator the filter contract supports
pub const OPERATOR: &str = "eq";

/// Build a filter string for a field/value pair
///
/// Pure string construction, no escaping beyond the conversion the caller
/// already applied to the value.
///
/// # Examples
///
/// ```
/// use stitch::core::filter;
///
/// assert_eq!(filter::build("customer_id", "42"), "customer_id eq 42");
/// ```
pub fn build(field: &str, value: &str) -> String {
    format!("{} {} {}", field, OPERATOR, value)
}

/// Render a JSON scalar as filter text
///
/// Strings are rendered without quotes, numbers and booleans via their
/// display form. Null, arrays and objects have no filter representation and
/// yield `None`.
pub fn literal(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// A parsed `field eq value` expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterExpr {
    /// The field the filter matches on
    pub field: String,

    /// The value, as filter text (see [`literal`])
    pub value: String,
}

impl FilterExpr {
    /// Check whether an entity satisfies this filter
    ///
    /// The entity's field is rendered through [`literal`] and compared as
    /// text, matching how the filter value was produced. Entities without the
    /// field, or with a non-scalar value in it, never match.
    pub fn matches(&self, entity: &Value) -> bool {
        entity
            .get(&self.field)
            .and_then(literal)
            .is_some_and(|v| v == self.value)
    }
}

/// Parse a filter string of the shape `field eq value`
///
/// Returns `None` for anything that does not match the contract. The value
/// part may contain spaces; only the first ` eq ` separates.
pub fn parse(filter: &str) -> Option<FilterExpr> {
    let separator = format!(" {} ", OPERATOR);
    let (field, value) = filter.split_once(&separator)?;
    if field.is_empty() || value.is_empty() {
        return None;
    }
    Some(FilterExpr {
        field: field.to_string(),
        value: value.to_string(),
    })
}
