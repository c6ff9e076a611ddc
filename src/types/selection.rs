//! Site selector values.

use std::convert::Infallible;
use std::str::FromStr;

/// Selector value used to pick all launch sites.
pub const ALL_SITES: &str = "ALL";

/// Which launch sites a view is computed for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    /// Every site in the dataset.
    #[default]
    All,
    /// A single site, by name.
    Site(String),
}

impl SiteSelection {
    /// Returns true if a record launched from `site` belongs to the
    /// selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(name) => name == site,
        }
    }
}

impl FromStr for SiteSelection {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelection::from(value))
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES),
            SiteSelection::Site(name) => f.write_str(name),
        }
    }
}
