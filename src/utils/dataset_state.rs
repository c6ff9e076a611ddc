//! Stores the loaded launch dataset for the lifetime of the process.
//!
//! The dataset is written once and only read afterwards, so every
//! caller can share it without locking.

use crate::config::DashboardConfig;
use crate::dataset::LaunchDataset;
use crate::haversine;
use crate::launch::LaunchSite;
use crate::location::Location;
use once_cell::sync::OnceCell;

/// The launch table shared by every view.
pub static DATASET: OnceCell<LaunchDataset> = OnceCell::new();

/// Stores `dataset` as the process-wide dataset.
pub fn init_dataset(dataset: LaunchDataset) -> Result<(), String> {
    info!("Initializing launch dataset");
    if DATASET.get().is_some() {
        return Err(
            "Dataset already initialized. Try to use the dataset instead of initializing it."
                .to_string(),
        );
    }
    DATASET
        .set(dataset)
        .map_err(|_| "Failed to initialize dataset".to_string())
}

/// Loads the CSV named in `config` and stores it.
pub fn init_dataset_from_config(config: &DashboardConfig) -> Result<(), String> {
    let dataset = LaunchDataset::from_path(&config.csv_path).map_err(|e| {
        error!("Could not load {}: {}", config.csv_path.display(), e);
        e.to_string()
    })?;
    init_dataset(dataset)
}

/// Checks if the dataset is initialized
pub fn is_dataset_initialized() -> bool {
    DATASET.get().is_some()
}

/// Get the dataset
pub fn get_dataset() -> Result<&'static LaunchDataset, String> {
    DATASET
        .get()
        .ok_or_else(|| "Dataset not initialized. Try to load some launches first.".to_string())
}

/// gets a launch site by name
pub fn get_site_by_name(name: &str) -> Result<&'static LaunchSite, String> {
    debug!("name: {}", name);
    get_dataset()?
        .site(name)
        .ok_or_else(|| "Launch site not found by name: ".to_owned() + name)
}

/// Returns the launch site closest to `location`.
pub fn get_nearest_site(location: &Location) -> Result<&'static LaunchSite, String> {
    info!("Getting nearest launch site");
    debug!("location: {:?}", location);
    let sites = get_dataset()?.sites();
    let mut nearest = sites
        .first()
        .ok_or("No launch site has a known location")?;
    let mut nearest_distance = haversine::distance(location, &nearest.location);
    for site in sites {
        let distance = haversine::distance(location, &site.location);
        debug!("{}: {} km", site.name, distance);
        if distance < nearest_distance {
            nearest_distance = distance;
            nearest = site;
        }
    }
    debug!("nearest site: {:?}", nearest);
    Ok(nearest)
}
