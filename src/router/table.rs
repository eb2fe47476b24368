//! Verbs and the route table

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::action::Action;
use crate::error::RouterError;

/// Supported HTTP verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Verb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl Verb {
    pub const ALL: [Self; 6] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Patch,
        Self::Delete,
        Self::Options,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
            Self::Options => "options",
        }
    }

    /// Map a request method to a verb, ignoring case
    ///
    /// `None` for methods outside the supported set (`HEAD`, `TRACE`, ...);
    /// such requests can never match a route.
    pub fn from_method(method: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|verb| verb.as_str().eq_ignore_ascii_case(method))
    }
}

impl FromStr for Verb {
    type Err = RouterError;

    /// Registration names are matched exactly: `get` is a verb, `GET` is not
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|verb| verb.as_str() == name)
            .ok_or_else(|| RouterError::UnsupportedVerb(name.to_string()))
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// verb -> exact path -> action
pub struct RouteTable<T> {
    routes: HashMap<Verb, HashMap<String, Action<T>>>,
}

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Store `action` under `(verb, path)`, returning the action it replaced
    pub fn insert(&mut self, verb: Verb, path: String, action: Action<T>) -> Option<Action<T>> {
        self.routes.entry(verb).or_default().insert(path, action)
    }

    pub fn get(&self, verb: Verb, path: &str) -> Option<&Action<T>> {
        self.routes.get(&verb).and_then(|paths| paths.get(path))
    }

    /// Registered paths for `verb`, sorted
    pub fn paths(&self, verb: Verb) -> Vec<&str> {
        let mut paths: Vec<&str> = self
            .routes
            .get(&verb)
            .map(|paths| paths.keys().map(String::as_str).collect())
            .unwrap_or_default();
        paths.sort_unstable();
        paths
    }

    pub fn len(&self) -> usize {
        self.routes.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RouteTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for verb in Verb::ALL {
            if let Some(paths) = self.routes.get(&verb) {
                map.entry(&verb.as_str(), paths);
            }
        }
        map.finish()
    }
}
