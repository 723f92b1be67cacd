//! U.S. Census sub-region lookup.
//!
//! The nine sub-regions cover the 50 states plus DC. The mapping is
//! static and immutable; state codes outside the table (territories,
//! bad data) resolve to `None` and must never abort a pipeline run.

/// One of the nine U.S. Census Bureau sub-regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Pacific,
    Mountain,
    WestSouthCentral,
    EastSouthCentral,
    SouthAtlantic,
    WestNorthCentral,
    EastNorthCentral,
    MidAtlantic,
    NewEngland,
}

impl Region {
    /// All nine regions, for iteration in table builders and tests.
    pub const ALL: [Region; 9] = [
        Region::Pacific,
        Region::Mountain,
        Region::WestSouthCentral,
        Region::EastSouthCentral,
        Region::SouthAtlantic,
        Region::WestNorthCentral,
        Region::EastNorthCentral,
        Region::MidAtlantic,
        Region::NewEngland,
    ];

    /// Display name matching the census nomenclature.
    pub fn name(self) -> &'static str {
        match self {
            Region::Pacific => "Pacific",
            Region::Mountain => "Mountain",
            Region::WestSouthCentral => "West South Central",
            Region::EastSouthCentral => "East South Central",
            Region::SouthAtlantic => "South Atlantic",
            Region::WestNorthCentral => "West North Central",
            Region::EastNorthCentral => "East North Central",
            Region::MidAtlantic => "Mid-Atlantic",
            Region::NewEngland => "New England",
        }
    }

    /// Two-letter state codes belonging to this region.
    pub fn states(self) -> &'static [&'static str] {
        match self {
            Region::Pacific => &["AK", "CA", "HI", "OR", "WA"],
            Region::Mountain => &["AZ", "CO", "ID", "MT", "NV", "NM", "UT", "WY"],
            Region::WestSouthCentral => &["AR", "LA", "OK", "TX"],
            Region::EastSouthCentral => &["AL", "KY", "MS", "TN"],
            Region::SouthAtlantic => &["DE", "DC", "FL", "GA", "MD", "NC", "SC", "VA", "WV"],
            Region::WestNorthCentral => &["IA", "KS", "MN", "MO", "NE", "ND", "SD"],
            Region::EastNorthCentral => &["IL", "IN", "MI", "OH", "WI"],
            Region::MidAtlantic => &["NJ", "NY", "PA"],
            Region::NewEngland => &["CT", "ME", "MA", "NH", "RI", "VT"],
        }
    }

    /// Looks up the region for a two-letter state code.
    ///
    /// Returns `None` for codes outside the table; callers propagate
    /// that as a missing category rather than an error.
    pub fn for_code(code: &str) -> Option<Region> {
        Region::ALL
            .into_iter()
            .find(|region| region.states().contains(&code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_covers_fifty_states_and_dc() {
        let codes: HashSet<&str> = Region::ALL
            .into_iter()
            .flat_map(|r| r.states().iter().copied())
            .collect();
        assert_eq!(codes.len(), 51);
        assert!(codes.contains("DC"));
    }

    #[test]
    fn test_each_code_maps_to_exactly_one_region() {
        let mut seen = HashSet::new();
        for region in Region::ALL {
            for code in region.states() {
                assert!(seen.insert(*code), "{code} appears in more than one region");
                assert_eq!(Region::for_code(code), Some(region));
            }
        }
    }

    #[test]
    fn test_unknown_code_is_none() {
        assert_eq!(Region::for_code("PR"), None);
        assert_eq!(Region::for_code("XX"), None);
        assert_eq!(Region::for_code(""), None);
    }

    #[test]
    fn test_known_lookups() {
        assert_eq!(Region::for_code("CA"), Some(Region::Pacific));
        assert_eq!(Region::for_code("TX"), Some(Region::WestSouthCentral));
        assert_eq!(Region::for_code("NY"), Some(Region::MidAtlantic));
        assert_eq!(Region::Pacific.name(), "Pacific");
        assert_eq!(Region::WestSouthCentral.name(), "West South Central");
    }
}
