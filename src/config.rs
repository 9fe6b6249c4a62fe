use std::path::PathBuf;

/// One state to synchronize.
///
/// The listing section id is portal-controlled: the timestamps for a state's
/// active-fire layer live under a `div` whose id the portal picks per layer.
/// If the portal renames it, only this record needs updating.
#[derive(Debug, Clone)]
pub struct StateTarget {
    /// Short code used in the listing query and as the artifact directory name, e.g. "PB".
    pub code: String,
    /// State name exactly as the data endpoint expects it in the `state` query parameter.
    pub display_name: String,
    /// Element id of the listing-page div holding the timestamp spans.
    pub listing_section: String,
}

impl StateTarget {
    pub fn new(
        code: impl Into<String>,
        display_name: impl Into<String>,
        listing_section: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
            listing_section: listing_section.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Endpoint returning the per-state HTML listing of observation timestamps.
    pub listing_url: String,
    /// Endpoint returning the per-date KML document of fire points.
    pub data_url: String,
    /// Directory under which per-state artifact directories are created.
    pub storage_root: PathBuf,
}

impl Config {
    pub fn new(
        listing_url: impl Into<String>,
        data_url: impl Into<String>,
        storage_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            listing_url: listing_url.into(),
            data_url: data_url.into(),
            storage_root: storage_root.into(),
        }
    }

    /// Production Bhuvan portal endpoints.
    pub fn bhuvan(storage_root: impl Into<PathBuf>) -> Self {
        Self::new(
            "https://bhuvan-app1.nrsc.gov.in/state/get/layers.php",
            "https://bhuvan-app1.nrsc.gov.in/state/get/createkml_agrifirecurr.php",
            storage_root,
        )
    }
}
