//! Client-side route table
//!
//! Routes are kept in an immutable, ordered list and resolved by first
//! match. Static segments compare case-insensitively, a single trailing
//! slash is ignored, and `:name` segments capture one non-empty path
//! segment (percent-decoded).

use std::collections::HashSet;
use std::fmt;

use crate::error::RouteError;

/// Route name of the map view
pub const HOME: &str = "home";
/// Route name of the collision log view
pub const LOGS: &str = "logs";
/// Route name of the drone list view
pub const DRONES: &str = "drones";
/// Route name of the per-drone history view
pub const DRONE_HISTORY: &str = "DroneHistory";
/// Path parameter carrying a drone serial number
pub const SERIAL_PARAM: &str = "serial";

/// The view rendered for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Map,
    Logs,
    DroneList,
    DroneHistory,
}

impl ViewKind {
    /// Page title shown for the view
    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::Map => "Airspace Map",
            ViewKind::Logs => "Collision Logs",
            ViewKind::DroneList => "Drones",
            ViewKind::DroneHistory => "Drone History",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// One segment of a route pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// A parsed path pattern such as `/drone/:serial/history`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let invalid = |reason: &str| RouteError::InvalidPattern {
            pattern: raw.to_string(),
            reason: reason.to_string(),
        };

        let parts = split_path(raw)
            .ok_or_else(|| invalid("must be an absolute path without empty segments"))?;
        let mut segments = Vec::with_capacity(parts.len());
        for part in parts {
            match part.strip_prefix(':') {
                Some("") => return Err(invalid("empty parameter name")),
                Some(name) => {
                    let duplicate = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if duplicate {
                        return Err(invalid(&format!("parameter {:?} appears twice", name)));
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Static(part.to_string())),
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the parameters captured by this pattern, in path order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    fn capture(&self, parts: &[&str]) -> Option<RouteParams> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(text) => {
                    if !text.eq_ignore_ascii_case(part) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = urlencoding::decode(part).ok()?;
                    params.insert(name, value.into_owned());
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Split an absolute path into its segments.
///
/// Query string and fragment are dropped. Returns `None` for relative paths
/// and for paths containing empty interior segments.
fn split_path(path: &str) -> Option<Vec<&str>> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let rest = path.strip_prefix('/')?;
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        return Some(Vec::new());
    }

    let parts: Vec<&str> = rest.split('/').collect();
    if parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    Some(parts)
}

/// Parameters captured from a matched path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: Vec<(String, String)>,
}

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn insert(&mut self, name: &str, value: String) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A (pattern, name, view) triple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub pattern: RoutePattern,
    pub name: String,
    pub view: ViewKind,
}

impl RouteDescriptor {
    pub fn new(pattern: &str, name: &str, view: ViewKind) -> Result<Self, RouteError> {
        Ok(Self {
            pattern: RoutePattern::parse(pattern)?,
            name: name.to_string(),
            view,
        })
    }
}

/// Result of resolving a path against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: String,
    pub view: ViewKind,
    pub params: RouteParams,
}

/// Immutable, ordered route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate route names
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouteError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !seen.insert(route.name.as_str()) {
                return Err(RouteError::DuplicateName(route.name.clone()));
            }
        }
        Ok(Self { routes })
    }

    /// The dashboard's route table: map, logs, drone list, drone history
    pub fn drone_dashboard() -> Result<Self, RouteError> {
        Self::new(vec![
            RouteDescriptor::new("/", HOME, ViewKind::Map)?,
            RouteDescriptor::new("/logs", LOGS, ViewKind::Logs)?,
            RouteDescriptor::new("/drones", DRONES, ViewKind::DroneList)?,
            RouteDescriptor::new(
                "/drone/:serial/history",
                DRONE_HISTORY,
                ViewKind::DroneHistory,
            )?,
        ])
    }

    /// Resolve a path to the first route whose pattern matches it.
    ///
    /// `path` is expected as it travels on the wire, still percent-encoded;
    /// captured parameters are decoded once here. Callers must not pass a
    /// path the router already unescaped.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let parts = split_path(path)?;
        self.routes.iter().find_map(|route| {
            route.pattern.capture(&parts).map(|params| RouteMatch {
                name: route.name.clone(),
                view: route.view,
                params,
            })
        })
    }

    /// Build the path for a named route, percent-encoding parameter values
    pub fn href(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let route = self
            .get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))?;

        let mut path = String::new();
        for segment in route.pattern.segments() {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(param) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == param.as_str())
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty())
                        .ok_or_else(|| RouteError::MissingParam {
                            route: name.to_string(),
                            param: param.clone(),
                        })?;
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }

    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().find(|r| r.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
