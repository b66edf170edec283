use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

// ---------------------------------------------------------------------------
// Continent – resolved from a residence country code
// ---------------------------------------------------------------------------

/// One of the six continents covered by the salary survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Continent {
    NorthAmerica,
    SouthAmerica,
    Europe,
    Asia,
    Oceania,
    Africa,
}

impl Continent {
    /// Display name used in charts and legends.
    pub fn name(self) -> &'static str {
        match self {
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::Oceania => "Oceania",
            Continent::Africa => "Africa",
        }
    }

    /// Look up the continent for a country code.
    ///
    /// Total: codes absent from the table yield `None`, never an error.
    pub fn from_code(code: &str) -> Option<Continent> {
        CONTINENT_BY_CODE.get(code).copied()
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Static country-code table
// ---------------------------------------------------------------------------

/// Country codes as they appear in the source dataset, grouped by continent.
const COUNTRY_TABLE: &[(&str, Continent)] = &[
    // North America
    ("US", Continent::NorthAmerica),
    ("CA", Continent::NorthAmerica),
    ("MX", Continent::NorthAmerica),
    ("CR", Continent::NorthAmerica),
    ("PR", Continent::NorthAmerica),
    ("BS", Continent::NorthAmerica),
    ("CU", Continent::NorthAmerica),
    ("JM", Continent::NorthAmerica),
    ("PA", Continent::NorthAmerica),
    ("SV", Continent::NorthAmerica),
    // South America
    ("BR", Continent::SouthAmerica),
    ("AR", Continent::SouthAmerica),
    ("BO", Continent::SouthAmerica),
    ("CL", Continent::SouthAmerica),
    ("CO", Continent::SouthAmerica),
    ("EC", Continent::SouthAmerica),
    ("PE", Continent::SouthAmerica),
    ("PY", Continent::SouthAmerica),
    ("UY", Continent::SouthAmerica),
    ("VE", Continent::SouthAmerica),
    ("SR", Continent::SouthAmerica),
    // Europe
    ("DE", Continent::Europe),
    ("GB", Continent::Europe),
    ("FR", Continent::Europe),
    ("ES", Continent::Europe),
    ("CH", Continent::Europe),
    ("AT", Continent::Europe),
    ("NL", Continent::Europe),
    ("IE", Continent::Europe),
    ("DK", Continent::Europe),
    ("SE", Continent::Europe),
    ("PT", Continent::Europe),
    ("IT", Continent::Europe),
    ("PL", Continent::Europe),
    ("AD", Continent::Europe),
    ("BE", Continent::Europe),
    ("BG", Continent::Europe),
    ("CZ", Continent::Europe),
    ("EE", Continent::Europe),
    ("GR", Continent::Europe),
    ("HR", Continent::Europe),
    ("HU", Continent::Europe),
    ("LU", Continent::Europe),
    ("MD", Continent::Europe),
    ("MT", Continent::Europe),
    ("RS", Continent::Europe),
    ("RU", Continent::Europe),
    ("SI", Continent::Europe),
    ("SK", Continent::Europe),
    ("UA", Continent::Europe),
    ("CY", Continent::Europe),
    ("BA", Continent::Europe),
    ("LT", Continent::Europe),
    ("GG", Continent::Europe),
    ("MK", Continent::Europe),
    ("LV", Continent::Europe),
    ("JE", Continent::Europe),
    ("RO", Continent::Europe),
    ("SM", Continent::Europe),
    ("LI", Continent::Europe),
    // Asia
    ("IN", Continent::Asia),
    ("JP", Continent::Asia),
    ("CN", Continent::Asia),
    ("HK", Continent::Asia),
    ("ID", Continent::Asia),
    ("IL", Continent::Asia),
    ("IR", Continent::Asia),
    ("MY", Continent::Asia),
    ("PH", Continent::Asia),
    ("PK", Continent::Asia),
    ("SG", Continent::Asia),
    ("TH", Continent::Asia),
    ("TR", Continent::Asia),
    ("AE", Continent::Asia),
    ("AM", Continent::Asia),
    ("VN", Continent::Asia),
    ("AF", Continent::Asia),
    ("AZ", Continent::Asia),
    ("GE", Continent::Asia),
    ("IQ", Continent::Asia),
    ("KG", Continent::Asia),
    ("KP", Continent::Asia),
    ("KW", Continent::Asia),
    ("KZ", Continent::Asia),
    ("LA", Continent::Asia),
    ("LB", Continent::Asia),
    ("LK", Continent::Asia),
    ("MM", Continent::Asia),
    ("MN", Continent::Asia),
    ("MV", Continent::Asia),
    ("NP", Continent::Asia),
    ("OM", Continent::Asia),
    ("QA", Continent::Asia),
    ("SY", Continent::Asia),
    ("TJ", Continent::Asia),
    ("TM", Continent::Asia),
    ("YE", Continent::Asia),
    // Oceania
    ("AU", Continent::Oceania),
    ("NZ", Continent::Oceania),
    ("PG", Continent::Oceania),
    ("PW", Continent::Oceania),
    ("AS", Continent::Oceania),
    // Africa
    ("NG", Continent::Africa),
    ("GH", Continent::Africa),
    ("DZ", Continent::Africa),
    ("EG", Continent::Africa),
    ("KE", Continent::Africa),
    ("BI", Continent::Africa),
    ("BJ", Continent::Africa),
    ("BW", Continent::Africa),
    ("CF", Continent::Africa),
    ("CM", Continent::Africa),
    ("GA", Continent::Africa),
    ("LR", Continent::Africa),
    ("MW", Continent::Africa),
    ("MZ", Continent::Africa),
    ("NA", Continent::Africa),
    ("NE", Continent::Africa),
    ("RW", Continent::Africa),
    ("SD", Continent::Africa),
    ("SL", Continent::Africa),
    ("SN", Continent::Africa),
    ("SO", Continent::Africa),
    ("TG", Continent::Africa),
    ("TN", Continent::Africa),
    ("TZ", Continent::Africa),
    ("UG", Continent::Africa),
    ("ZM", Continent::Africa),
];

/// Read-only lookup built once from [`COUNTRY_TABLE`].
static CONTINENT_BY_CODE: LazyLock<HashMap<&'static str, Continent>> =
    LazyLock::new(|| COUNTRY_TABLE.iter().copied().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve_on_every_continent() {
        assert_eq!(Continent::from_code("US"), Some(Continent::NorthAmerica));
        assert_eq!(Continent::from_code("BR"), Some(Continent::SouthAmerica));
        assert_eq!(Continent::from_code("DE"), Some(Continent::Europe));
        assert_eq!(Continent::from_code("IN"), Some(Continent::Asia));
        assert_eq!(Continent::from_code("AU"), Some(Continent::Oceania));
        assert_eq!(Continent::from_code("NG"), Some(Continent::Africa));
    }

    #[test]
    fn unknown_code_yields_none() {
        assert_eq!(Continent::from_code("XX"), None);
        assert_eq!(Continent::from_code(""), None);
        // Lookup is case-sensitive, matching the source data exactly.
        assert_eq!(Continent::from_code("us"), None);
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut seen = std::collections::BTreeSet::new();
        for (code, _) in COUNTRY_TABLE {
            assert!(seen.insert(*code), "duplicate code {code}");
        }
    }

    #[test]
    fn every_table_entry_resolves_to_a_named_continent() {
        for (code, continent) in COUNTRY_TABLE {
            assert_eq!(Continent::from_code(code), Some(*continent));
            assert!(!continent.name().is_empty());
        }
    }
}
