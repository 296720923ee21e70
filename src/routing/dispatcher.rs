//! Request dispatch between diagnostic routes and the upstream.

use axum::http::Method;

/// Where a request is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// HTML log viewer.
    LogPage,
    /// JSON listing of recent entries.
    LogApi,
    /// Clear every entry.
    LogClear,
    /// Liveness probe.
    Health,
    /// Forward to the upstream.
    Upstream,
}

/// One dispatch rule: exact path plus an optional required method.
struct Rule {
    path: &'static str,
    method: Option<Method>,
    route: Route,
}

impl Rule {
    fn matches(&self, method: &Method, path: &str) -> bool {
        self.path == path && self.method.as_ref().map_or(true, |m| m == method)
    }
}

/// Rules in priority order.
const RULES: [Rule; 4] = [
    Rule { path: "/_logs", method: None, route: Route::LogPage },
    Rule { path: "/_logs/api", method: None, route: Route::LogApi },
    Rule { path: "/_logs/clear", method: Some(Method::POST), route: Route::LogClear },
    Rule { path: "/_health", method: None, route: Route::Health },
];

impl Route {
    /// Pick the handler for a request; anything unmatched goes upstream.
    pub fn resolve(method: &Method, path: &str) -> Route {
        RULES
            .iter()
            .find(|rule| rule.matches(method, path))
            .map_or(Route::Upstream, |rule| rule.route)
    }
}
