//! Maps navigation routes onto filters.
//!
//! Routes look like `#/active`, `/active` or just `active`. An empty route
//! is the default route, `/all`.

use crate::types::Filter;

/// Route used when none is given
pub const DEFAULT_ROUTE: &str = "/all";

/// Resolve a route to a filter, `None` if it names no filter
#[must_use]
pub fn parse(route: &str) -> Option<Filter> {
    let route = route.trim();
    let route = route.strip_prefix('#').unwrap_or(route);
    let route = route.strip_prefix('/').unwrap_or(route);
    let token = route.trim_end_matches('/');

    if token.is_empty() {
        return Some(Filter::All);
    }
    token.parse().ok()
}

/// The route a filter link points at
#[must_use]
pub fn href(filter: Filter) -> String {
    format!("#/{filter}")
}
