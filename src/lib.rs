//! Launch Site Geography Library.
//! Loads historical launch records and computes the views a launch
//! dashboard displays: outcome breakdowns, payload filters, insights and
//! a map annotated with distances from the selected site to nearby
//! landmarks.

#[macro_use]
extern crate log;

pub mod config;
pub mod dataset;

/// Plain data types shared by the rest of the crate.
pub mod types {
    pub mod connector;
    pub mod launch;
    pub mod location;
    pub mod outcome;
    pub mod poi;
    pub mod selection;
}

/// Geodesic helpers and process-wide state.
pub mod utils {
    pub mod dataset_state;
    pub mod generator;
    pub mod haversine;
}

/// Computations behind the dashboard views.
pub mod algorithms {
    pub mod analytics;
    pub mod annotator;
    pub mod insights;
    pub mod map_view;
}

pub use algorithms::*;
pub use types::*;
pub use utils::*;
