//! Two-letter region codes for U.S. states/territories and Canadian provinces.
//!
//! Lookups are case-insensitive. Unknown codes pass through unchanged.

/// One row of the region table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEntry {
    pub full_name: &'static str,
    pub code: &'static str,
}

const fn entry(full_name: &'static str, code: &'static str) -> RegionEntry {
    RegionEntry { full_name, code }
}

// ─── U.S. states, territories, armed forces ─────────────────────

const US_REGIONS: &[RegionEntry] = &[
    entry("Alabama", "AL"),
    entry("Alaska", "AK"),
    entry("American Samoa", "AS"),
    entry("Arizona", "AZ"),
    entry("Arkansas", "AR"),
    entry("Armed Forces Americas", "AA"),
    entry("Armed Forces Europe", "AE"),
    entry("Armed Forces Pacific", "AP"),
    entry("California", "CA"),
    entry("Colorado", "CO"),
    entry("Connecticut", "CT"),
    entry("Delaware", "DE"),
    entry("District Of Columbia", "DC"),
    entry("Florida", "FL"),
    entry("Georgia", "GA"),
    entry("Guam", "GU"),
    entry("Hawaii", "HI"),
    entry("Idaho", "ID"),
    entry("Illinois", "IL"),
    entry("Indiana", "IN"),
    entry("Iowa", "IA"),
    entry("Kansas", "KS"),
    entry("Kentucky", "KY"),
    entry("Louisiana", "LA"),
    entry("Maine", "ME"),
    entry("Marshall Islands", "MH"),
    entry("Maryland", "MD"),
    entry("Massachusetts", "MA"),
    entry("Michigan", "MI"),
    entry("Minnesota", "MN"),
    entry("Mississippi", "MS"),
    entry("Missouri", "MO"),
    entry("Montana", "MT"),
    entry("Nebraska", "NE"),
    entry("Nevada", "NV"),
    entry("New Hampshire", "NH"),
    entry("New Jersey", "NJ"),
    entry("New Mexico", "NM"),
    entry("New York", "NY"),
    entry("North Carolina", "NC"),
    entry("North Dakota", "ND"),
    entry("Northern Mariana Islands", "NP"),
    entry("Ohio", "OH"),
    entry("Oklahoma", "OK"),
    entry("Oregon", "OR"),
    entry("Pennsylvania", "PA"),
    entry("Puerto Rico", "PR"),
    entry("Rhode Island", "RI"),
    entry("South Carolina", "SC"),
    entry("South Dakota", "SD"),
    entry("Tennessee", "TN"),
    entry("Texas", "TX"),
    entry("US Virgin Islands", "VI"),
    entry("Utah", "UT"),
    entry("Vermont", "VT"),
    entry("Virginia", "VA"),
    entry("Washington", "WA"),
    entry("West Virginia", "WV"),
    entry("Wisconsin", "WI"),
    entry("Wyoming", "WY"),
];

// ─── Canadian provinces and territories ─────────────────────────

// No code here collides with a U.S. one.
const CA_REGIONS: &[RegionEntry] = &[
    entry("Alberta", "AB"),
    entry("British Columbia", "BC"),
    entry("Manitoba", "MB"),
    entry("New Brunswick", "NB"),
    entry("Newfoundland", "NF"),
    entry("Northwest Territory", "NT"),
    entry("Nova Scotia", "NS"),
    entry("Nunavut", "NU"),
    entry("Ontario", "ON"),
    entry("Prince Edward Island", "PE"),
    entry("Quebec", "QC"),
    entry("Saskatchewan", "SK"),
    entry("Yukon", "YT"),
];

/// Every region, U.S. entries first.
pub fn regions() -> impl Iterator<Item = &'static RegionEntry> {
    US_REGIONS.iter().chain(CA_REGIONS.iter())
}

/// Full name for a two-letter code, or the code itself if it is not in the table.
pub fn lookup_full_name(code: &str) -> String {
    let upper = code.to_uppercase();
    regions()
        .find(|r| r.code == upper)
        .map(|r| r.full_name.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Two-letter code for a full region name.
pub fn lookup_code(full_name: &str) -> Option<&'static str> {
    regions()
        .find(|r| r.full_name.eq_ignore_ascii_case(full_name.trim()))
        .map(|r| r.code)
}

/// Expand "City, CO" into "City,Colorado".
///
/// All whitespace is stripped first, so " Miami , FL " becomes "Miami,Florida".
/// Input without a comma is returned stripped but otherwise unchanged. An
/// unknown code is kept, upper-cased.
pub fn convert_region(input: &str) -> String {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parts = stripped.split(',');
    let city = parts.next().unwrap_or_default();
    let Some(code) = parts.next() else {
        return stripped;
    };
    format!("{},{}", city, lookup_full_name(&code.to_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lookup_us_state() {
        assert_eq!(lookup_full_name("CO"), "Colorado");
        assert_eq!(lookup_full_name("WY"), "Wyoming");
    }

    #[test]
    fn test_lookup_canadian_province() {
        assert_eq!(lookup_full_name("ON"), "Ontario");
        assert_eq!(lookup_full_name("QC"), "Quebec");
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup_full_name("co"), "Colorado");
        assert_eq!(lookup_full_name("bC"), "British Columbia");
    }

    #[test]
    fn test_lookup_unknown_falls_back() {
        assert_eq!(lookup_full_name("ZZ"), "ZZ");
        assert_eq!(lookup_full_name("xy"), "xy");
        assert_eq!(lookup_full_name(""), "");
    }

    #[test]
    fn test_codes_unique() {
        let codes: HashSet<_> = regions().map(|r| r.code).collect();
        assert_eq!(codes.len(), regions().count());
        assert_eq!(regions().count(), 73);
        assert!(regions().all(|r| r.code.len() == 2 && r.code == r.code.to_uppercase()));
    }

    #[test]
    fn test_lookup_code_reverse() {
        assert_eq!(lookup_code("Colorado"), Some("CO"));
        assert_eq!(lookup_code("prince edward island"), Some("PE"));
        assert_eq!(lookup_code("Atlantis"), None);
    }

    #[test]
    fn test_convert_region() {
        assert_eq!(convert_region("Denver, CO"), "Denver,Colorado");
        assert_eq!(convert_region("Toronto, ON"), "Toronto,Ontario");
    }

    #[test]
    fn test_convert_region_strips_whitespace() {
        assert_eq!(convert_region(" Miami , FL "), "Miami,Florida");
        assert_eq!(convert_region("New York, ny"), "NewYork,New York");
    }

    #[test]
    fn test_convert_region_unknown_code() {
        assert_eq!(convert_region("Unknown, ZZ"), "Unknown,ZZ");
    }

    #[test]
    fn test_convert_region_edge_inputs() {
        assert_eq!(convert_region(",x"), ",X");
        assert_eq!(convert_region("a,"), "a,");
        assert_eq!(convert_region(",,"), ",");
        assert_eq!(convert_region("Denver CO"), "DenverCO");
    }
}
