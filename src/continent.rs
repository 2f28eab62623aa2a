//! Country -> continent resolution.
//!
//! Resolution order: curated override table, then the generic [`RegionLookup`],
//! then [`Continent::Other`]. Resolution never fails.

use crate::geo::{GeoDatabase, RegionLookup};
use crate::models::Continent;
use ahash::AHashMap;

/// Names the generic lookup gets wrong or does not know: World Bank / IMF
/// spellings, contested territories, and codes without a continent.
const BUILTIN_OVERRIDES: &[(&str, Continent)] = &[
    ("Kosovo", Continent::Europe),
    ("Taiwan", Continent::Asia),
    ("Taiwan Province of China", Continent::Asia),
    ("Hong Kong SAR", Continent::Asia),
    ("Macao SAR", Continent::Asia),
    ("West Bank and Gaza", Continent::Asia),
    ("Palestine", Continent::Asia),
    ("Timor-Leste", Continent::Asia),
    ("East Timor", Continent::Asia),
    ("Western Sahara", Continent::Africa),
    ("Korea", Continent::Asia),
    ("Korea, Rep.", Continent::Asia),
    ("Lao P.D.R.", Continent::Asia),
    ("Kyrgyz Republic", Continent::Asia),
    ("Slovak Republic", Continent::Europe),
    ("Russian Federation", Continent::Europe),
    ("Türkiye", Continent::Asia),
    ("Turkiye", Continent::Asia),
    ("Côte d'Ivoire", Continent::Africa),
    ("Cote d'Ivoire", Continent::Africa),
    ("Congo, Dem. Rep.", Continent::Africa),
    ("Democratic Republic of the Congo", Continent::Africa),
    ("Congo, Rep.", Continent::Africa),
    ("Republic of Congo", Continent::Africa),
    ("Egypt, Arab Rep.", Continent::Africa),
    ("Iran, Islamic Rep.", Continent::Asia),
    ("Venezuela, RB", Continent::SouthAmerica),
    ("Yemen, Rep.", Continent::Asia),
    ("Bahamas, The", Continent::NorthAmerica),
    ("Gambia, The", Continent::Africa),
    ("Micronesia, Fed. Sts.", Continent::Oceania),
    ("St. Kitts and Nevis", Continent::NorthAmerica),
    ("St. Lucia", Continent::NorthAmerica),
    ("St. Vincent and the Grenadines", Continent::NorthAmerica),
    ("São Tomé and Príncipe", Continent::Africa),
];

/// Canonical key: trimmed and lower-cased.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Immutable name -> continent overrides, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: AHashMap<String, Continent>,
}

impl OverrideTable {
    /// Bumped whenever [`OverrideTable::builtin`] changes.
    pub const VERSION: u32 = 1;

    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_OVERRIDES.iter().copied())
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = (&'a str, Continent)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, c)| (normalize(name), c))
                .collect(),
        }
    }

    pub fn get(&self, country: &str) -> Option<Continent> {
        self.entries.get(&normalize(country)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pure, total resolver. Safe to share across threads when `L` is.
#[derive(Debug, Clone)]
pub struct ContinentResolver<L = GeoDatabase> {
    overrides: OverrideTable,
    lookup: L,
}

impl ContinentResolver<GeoDatabase> {
    /// Built-in override table in front of the built-in [`GeoDatabase`].
    pub fn builtin() -> Self {
        Self::new(OverrideTable::builtin(), GeoDatabase::builtin())
    }
}

impl Default for ContinentResolver<GeoDatabase> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<L: RegionLookup> ContinentResolver<L> {
    pub fn new(overrides: OverrideTable, lookup: L) -> Self {
        Self { overrides, lookup }
    }

    pub fn resolve(&self, country: &str) -> Continent {
        if let Some(c) = self.overrides.get(country) {
            return c;
        }
        match self.lookup.continent_of(country) {
            Ok(c) => c,
            Err(e) => {
                log::debug!("continent lookup failed, using {}: {e}", Continent::Other);
                Continent::Other
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LookupFailed;

    struct AlwaysOceania;

    impl RegionLookup for AlwaysOceania {
        fn continent_of(&self, _country: &str) -> Result<Continent, LookupFailed> {
            Ok(Continent::Oceania)
        }
    }

    struct NeverKnows;

    impl RegionLookup for NeverKnows {
        fn continent_of(&self, country: &str) -> Result<Continent, LookupFailed> {
            Err(LookupFailed::UnknownCountry(country.to_string()))
        }
    }

    #[test]
    fn override_wins_over_lookup() {
        let r = ContinentResolver::new(OverrideTable::builtin(), AlwaysOceania);
        assert_eq!(r.resolve("Kosovo"), Continent::Europe);
        assert_eq!(r.resolve("Germany"), Continent::Oceania);
    }

    #[test]
    fn override_matching_ignores_case_and_padding() {
        let r = ContinentResolver::new(OverrideTable::builtin(), NeverKnows);
        assert_eq!(r.resolve("kosovo"), Continent::Europe);
        assert_eq!(r.resolve("  KOSOVO "), Continent::Europe);
        assert_eq!(r.resolve("Kosov"), Continent::Other);
    }

    #[test]
    fn lookup_failure_maps_to_sentinel() {
        let r = ContinentResolver::new(OverrideTable::default(), NeverKnows);
        assert_eq!(r.resolve("Germany"), Continent::Other);
    }

    #[test]
    fn builtin_resolver_covers_codes_without_continent() {
        let r = ContinentResolver::builtin();
        assert_eq!(r.resolve("Timor-Leste"), Continent::Asia);
        assert_eq!(r.resolve("Western Sahara"), Continent::Africa);
        assert_eq!(r.resolve("France"), Continent::Europe);
        assert_eq!(r.resolve("Narnia"), Continent::Other);
    }

    #[test]
    fn builtin_table_is_nonempty() {
        let t = OverrideTable::builtin();
        assert!(t.len() >= 25);
        assert_eq!(t.get("Russian Federation"), Some(Continent::Europe));
    }
}
