//! In-process paths and navigation history

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::PokemonId;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Route {
    #[default]
    Home,
    About,
    Favorites,
    Details(PokemonId),
    /// Unmatched path, kept as typed (with a leading slash)
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.trim();
        let absolute = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        let trimmed = absolute.trim_end_matches('/');

        match trimmed {
            "" => Route::Home,
            "/about" => Route::About,
            "/favorites" => Route::Favorites,
            _ => trimmed
                .strip_prefix("/pokemon/")
                .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|id| id.parse::<u16>().ok())
                .map(|id| Route::Details(PokemonId(id)))
                .unwrap_or_else(|| Route::NotFound(absolute.clone())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Favorites => "/favorites".to_string(),
            Route::Details(id) => format!("/pokemon/{id}"),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl From<&str> for Route {
    fn from(path: &str) -> Self {
        Route::parse(path)
    }
}

/// Oldest entries are dropped past this depth
pub const HISTORY_LIMIT: usize = 64;

/// Back stack of visited routes; never empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct History {
    entries: Vec<Route>,
}

impl History {
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    pub fn current(&self) -> &Route {
        // entries is never empty; fall back to Home for hand-edited snapshots
        const HOME: &Route = &Route::Home;
        self.entries.last().unwrap_or(HOME)
    }

    /// Returns false when `route` is already current.
    pub fn push(&mut self, route: Route) -> bool {
        if *self.current() == route {
            return false;
        }
        self.entries.push(route);
        if self.entries.len() > HISTORY_LIMIT {
            let excess = self.entries.len() - HISTORY_LIMIT;
            self.entries.drain(..excess);
        }
        true
    }

    /// Returns false at the root.
    pub fn back(&mut self) -> bool {
        if self.entries.len() <= 1 {
            return false;
        }
        self.entries.pop();
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Route::Home)
    }
}
