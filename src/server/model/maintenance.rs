//! Maintenance script report models.

/// Read-only counts produced by the check-venues script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VenueCheckReport {
    pub unverified_hotels: u64,
    pub deactivated_hotels: u64,
    pub inactive_venues: u64,
}

impl VenueCheckReport {
    /// Whether every hotel is verified and every venue active.
    pub fn is_clean(&self) -> bool {
        self.unverified_hotels == 0 && self.deactivated_hotels == 0 && self.inactive_venues == 0
    }
}

/// Rows affected by the fix-venues script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VenueFixReport {
    pub hotels_updated: u64,
    pub venues_updated: u64,
}
