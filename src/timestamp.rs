use std::fmt;

/// A date-time string scraped from the listing page, e.g. `2024-01-05 10:00:00`.
///
/// The portal reuses the string verbatim in two places with different
/// encodings: as the `date` query parameter (spaces become a literal `%20`)
/// and as the artifact file stem (colons become `_`). No parsed date-time is
/// kept; the string is an opaque token and both encodings are derived
/// independently from it.
///
/// # Examples
///
/// ```
/// use agrifire_sync::timestamp::ObservationTimestamp;
///
/// let ts = ObservationTimestamp::new("2024-01-05 10:00:00");
/// assert_eq!(ts.query_encoded(), "2024-01-05%2010:00:00");
/// assert_eq!(ts.file_stem(), "2024-01-05 10_00_00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationTimestamp(String);

impl ObservationTimestamp {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Encoding used in the data-retrieval URL: every space becomes `%20`,
    /// colons are left untouched.
    pub fn query_encoded(&self) -> String {
        self.0.replace(' ', "%20")
    }

    /// Encoding used for the artifact file name: every colon becomes `_`,
    /// spaces are left untouched.
    pub fn file_stem(&self) -> String {
        self.0.replace(':', "_")
    }
}

impl fmt::Display for ObservationTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
