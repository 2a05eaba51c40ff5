//! Rail-feeder route designation.

use std::collections::BTreeSet;

use stopsync_model::RouteClass;

use crate::defaults::FEEDER_ROUTES;

/// Set of route numbers designated as rail feeders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeederRoutes {
    routes: BTreeSet<String>,
}

impl FeederRoutes {
    pub fn new<I>(routes: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            routes: routes
                .into_iter()
                .map(|route| route.as_ref().trim().to_string())
                .filter(|route| !route.is_empty())
                .collect(),
        }
    }

    /// Classify a route number. Matching is exact after trimming.
    pub fn classify(&self, route_number: &str) -> RouteClass {
        if self.routes.contains(route_number.trim()) {
            RouteClass::Feeder
        } else {
            RouteClass::Regular
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }
}

impl Default for FeederRoutes {
    fn default() -> Self {
        Self::new(FEEDER_ROUTES.iter())
    }
}
