//! Built-in country-name database: name -> ISO 3166 alpha-2 -> continent code -> continent.
//!
//! Names follow common English short forms, plus an alias table for ISO long
//! forms and IMF / World Bank spellings. A handful of codes deliberately
//! have no continent (e.g. `TL`, `EH`); those are expected to be covered by
//! the resolver's override table.

use crate::error::LookupFailed;
use crate::models::Continent;
use ahash::AHashMap;

/// Generic name -> continent classification used behind the override table.
pub trait RegionLookup {
    fn continent_of(&self, country: &str) -> Result<Continent, LookupFailed>;
}

const COUNTRY_ALPHA2: &[(&str, &str)] = &[
    ("Afghanistan", "AF"),
    ("Albania", "AL"),
    ("Algeria", "DZ"),
    ("Andorra", "AD"),
    ("Angola", "AO"),
    ("Antigua and Barbuda", "AG"),
    ("Argentina", "AR"),
    ("Armenia", "AM"),
    ("Aruba", "AW"),
    ("Australia", "AU"),
    ("Austria", "AT"),
    ("Azerbaijan", "AZ"),
    ("Bahamas", "BS"),
    ("Bahrain", "BH"),
    ("Bangladesh", "BD"),
    ("Barbados", "BB"),
    ("Belarus", "BY"),
    ("Belgium", "BE"),
    ("Belize", "BZ"),
    ("Benin", "BJ"),
    ("Bhutan", "BT"),
    ("Bolivia", "BO"),
    ("Bosnia and Herzegovina", "BA"),
    ("Botswana", "BW"),
    ("Brazil", "BR"),
    ("Brunei Darussalam", "BN"),
    ("Bulgaria", "BG"),
    ("Burkina Faso", "BF"),
    ("Burundi", "BI"),
    ("Cabo Verde", "CV"),
    ("Cambodia", "KH"),
    ("Cameroon", "CM"),
    ("Canada", "CA"),
    ("Central African Republic", "CF"),
    ("Chad", "TD"),
    ("Chile", "CL"),
    ("China", "CN"),
    ("Colombia", "CO"),
    ("Comoros", "KM"),
    ("Congo", "CG"),
    ("Costa Rica", "CR"),
    ("Côte d'Ivoire", "CI"),
    ("Croatia", "HR"),
    ("Cuba", "CU"),
    ("Cyprus", "CY"),
    ("Czechia", "CZ"),
    ("Democratic Republic of the Congo", "CD"),
    ("Denmark", "DK"),
    ("Djibouti", "DJ"),
    ("Dominica", "DM"),
    ("Dominican Republic", "DO"),
    ("Ecuador", "EC"),
    ("Egypt", "EG"),
    ("El Salvador", "SV"),
    ("Equatorial Guinea", "GQ"),
    ("Eritrea", "ER"),
    ("Estonia", "EE"),
    ("Eswatini", "SZ"),
    ("Ethiopia", "ET"),
    ("Fiji", "FJ"),
    ("Finland", "FI"),
    ("France", "FR"),
    ("Gabon", "GA"),
    ("Gambia", "GM"),
    ("Georgia", "GE"),
    ("Germany", "DE"),
    ("Ghana", "GH"),
    ("Greece", "GR"),
    ("Grenada", "GD"),
    ("Guatemala", "GT"),
    ("Guinea", "GN"),
    ("Guinea-Bissau", "GW"),
    ("Guyana", "GY"),
    ("Haiti", "HT"),
    ("Honduras", "HN"),
    ("Hong Kong", "HK"),
    ("Hungary", "HU"),
    ("Iceland", "IS"),
    ("India", "IN"),
    ("Indonesia", "ID"),
    ("Iran", "IR"),
    ("Iraq", "IQ"),
    ("Ireland", "IE"),
    ("Israel", "IL"),
    ("Italy", "IT"),
    ("Jamaica", "JM"),
    ("Japan", "JP"),
    ("Jordan", "JO"),
    ("Kazakhstan", "KZ"),
    ("Kenya", "KE"),
    ("Kiribati", "KI"),
    ("Kuwait", "KW"),
    ("Kyrgyzstan", "KG"),
    ("Laos", "LA"),
    ("Latvia", "LV"),
    ("Lebanon", "LB"),
    ("Lesotho", "LS"),
    ("Liberia", "LR"),
    ("Libya", "LY"),
    ("Liechtenstein", "LI"),
    ("Lithuania", "LT"),
    ("Luxembourg", "LU"),
    ("Macao", "MO"),
    ("Madagascar", "MG"),
    ("Malawi", "MW"),
    ("Malaysia", "MY"),
    ("Maldives", "MV"),
    ("Mali", "ML"),
    ("Malta", "MT"),
    ("Marshall Islands", "MH"),
    ("Mauritania", "MR"),
    ("Mauritius", "MU"),
    ("Mexico", "MX"),
    ("Micronesia", "FM"),
    ("Moldova", "MD"),
    ("Monaco", "MC"),
    ("Mongolia", "MN"),
    ("Montenegro", "ME"),
    ("Morocco", "MA"),
    ("Mozambique", "MZ"),
    ("Myanmar", "MM"),
    ("Namibia", "NA"),
    ("Nauru", "NR"),
    ("Nepal", "NP"),
    ("Netherlands", "NL"),
    ("New Zealand", "NZ"),
    ("Nicaragua", "NI"),
    ("Niger", "NE"),
    ("Nigeria", "NG"),
    ("North Korea", "KP"),
    ("North Macedonia", "MK"),
    ("Norway", "NO"),
    ("Oman", "OM"),
    ("Pakistan", "PK"),
    ("Palau", "PW"),
    ("Palestine", "PS"),
    ("Panama", "PA"),
    ("Papua New Guinea", "PG"),
    ("Paraguay", "PY"),
    ("Peru", "PE"),
    ("Philippines", "PH"),
    ("Poland", "PL"),
    ("Portugal", "PT"),
    ("Puerto Rico", "PR"),
    ("Qatar", "QA"),
    ("Romania", "RO"),
    ("Russia", "RU"),
    ("Rwanda", "RW"),
    ("Saint Kitts and Nevis", "KN"),
    ("Saint Lucia", "LC"),
    ("Saint Vincent and the Grenadines", "VC"),
    ("Samoa", "WS"),
    ("San Marino", "SM"),
    ("Sao Tome and Principe", "ST"),
    ("Saudi Arabia", "SA"),
    ("Senegal", "SN"),
    ("Serbia", "RS"),
    ("Seychelles", "SC"),
    ("Sierra Leone", "SL"),
    ("Singapore", "SG"),
    ("Slovakia", "SK"),
    ("Slovenia", "SI"),
    ("Solomon Islands", "SB"),
    ("Somalia", "SO"),
    ("South Africa", "ZA"),
    ("South Korea", "KR"),
    ("South Sudan", "SS"),
    ("Spain", "ES"),
    ("Sri Lanka", "LK"),
    ("Sudan", "SD"),
    ("Suriname", "SR"),
    ("Sweden", "SE"),
    ("Switzerland", "CH"),
    ("Syria", "SY"),
    ("Taiwan", "TW"),
    ("Tajikistan", "TJ"),
    ("Tanzania", "TZ"),
    ("Thailand", "TH"),
    ("Timor-Leste", "TL"),
    ("Togo", "TG"),
    ("Tonga", "TO"),
    ("Trinidad and Tobago", "TT"),
    ("Tunisia", "TN"),
    ("Turkey", "TR"),
    ("Turkmenistan", "TM"),
    ("Tuvalu", "TV"),
    ("Uganda", "UG"),
    ("Ukraine", "UA"),
    ("United Arab Emirates", "AE"),
    ("United Kingdom", "GB"),
    ("United States", "US"),
    ("Uruguay", "UY"),
    ("Uzbekistan", "UZ"),
    ("Vanuatu", "VU"),
    ("Venezuela", "VE"),
    ("Vietnam", "VN"),
    ("Western Sahara", "EH"),
    ("Yemen", "YE"),
    ("Zambia", "ZM"),
    ("Zimbabwe", "ZW"),
];

/// Alternative spellings: long-form ISO names, IMF / World Bank forms and
/// common short names. Each maps onto a code already carried by a name above.
const NAME_ALIASES: &[(&str, &str)] = &[
    ("Bahamas, The", "BS"),
    ("The Bahamas", "BS"),
    ("Bolivia (Plurinational State of)", "BO"),
    ("Brunei", "BN"),
    ("Burma", "MM"),
    ("Cape Verde", "CV"),
    ("China, People's Republic of", "CN"),
    ("Congo, Dem. Rep.", "CD"),
    ("Congo, Dem. Rep. of the", "CD"),
    ("Congo, Democratic Republic of the", "CD"),
    ("DR Congo", "CD"),
    ("Congo, Rep.", "CG"),
    ("Congo, Rep. of", "CG"),
    ("Congo, Republic of", "CG"),
    ("Republic of the Congo", "CG"),
    ("Cote d'Ivoire", "CI"),
    ("Ivory Coast", "CI"),
    ("Czech Republic", "CZ"),
    ("Egypt, Arab Rep.", "EG"),
    ("Gambia, The", "GM"),
    ("The Gambia", "GM"),
    ("Great Britain", "GB"),
    ("Hong Kong SAR", "HK"),
    ("Hong Kong SAR, China", "HK"),
    ("Iran, Islamic Rep.", "IR"),
    ("Iran, Islamic Republic of", "IR"),
    ("Korea", "KR"),
    ("Korea, Rep.", "KR"),
    ("Korea, Republic of", "KR"),
    ("Republic of Korea", "KR"),
    ("Korea, Dem. People's Rep.", "KP"),
    ("Democratic People's Republic of Korea", "KP"),
    ("Kyrgyz Republic", "KG"),
    ("Lao P.D.R.", "LA"),
    ("Lao PDR", "LA"),
    ("Lao People's Democratic Republic", "LA"),
    ("Macau", "MO"),
    ("Macao SAR", "MO"),
    ("Macao SAR, China", "MO"),
    ("Macedonia", "MK"),
    ("Micronesia, Fed. States of", "FM"),
    ("Micronesia, Fed. Sts.", "FM"),
    ("Federated States of Micronesia", "FM"),
    ("Moldova, Republic of", "MD"),
    ("Republic of Moldova", "MD"),
    ("Russian Federation", "RU"),
    ("Slovak Republic", "SK"),
    ("St. Kitts and Nevis", "KN"),
    ("St. Lucia", "LC"),
    ("St. Vincent and the Grenadines", "VC"),
    ("São Tomé and Príncipe", "ST"),
    ("State of Palestine", "PS"),
    ("West Bank and Gaza", "PS"),
    ("Swaziland", "SZ"),
    ("Syrian Arab Republic", "SY"),
    ("Taiwan Province of China", "TW"),
    ("Tanzania, United Republic of", "TZ"),
    ("United Republic of Tanzania", "TZ"),
    ("Türkiye", "TR"),
    ("Turkiye", "TR"),
    ("United States of America", "US"),
    ("Venezuela (Bolivarian Republic of)", "VE"),
    ("Venezuela, RB", "VE"),
    ("Viet Nam", "VN"),
    ("Yemen, Rep.", "YE"),
];

const ALPHA2_CONTINENT_CODE: &[(&str, &str)] = &[
    ("AD", "EU"),
    ("AE", "AS"),
    ("AF", "AS"),
    ("AG", "NA"),
    ("AL", "EU"),
    ("AM", "AS"),
    ("AO", "AF"),
    ("AR", "SA"),
    ("AT", "EU"),
    ("AU", "OC"),
    ("AW", "NA"),
    ("AZ", "AS"),
    ("BA", "EU"),
    ("BB", "NA"),
    ("BD", "AS"),
    ("BE", "EU"),
    ("BF", "AF"),
    ("BG", "EU"),
    ("BH", "AS"),
    ("BI", "AF"),
    ("BJ", "AF"),
    ("BN", "AS"),
    ("BO", "SA"),
    ("BR", "SA"),
    ("BS", "NA"),
    ("BT", "AS"),
    ("BW", "AF"),
    ("BY", "EU"),
    ("BZ", "NA"),
    ("CA", "NA"),
    ("CD", "AF"),
    ("CF", "AF"),
    ("CG", "AF"),
    ("CH", "EU"),
    ("CI", "AF"),
    ("CL", "SA"),
    ("CM", "AF"),
    ("CN", "AS"),
    ("CO", "SA"),
    ("CR", "NA"),
    ("CU", "NA"),
    ("CV", "AF"),
    ("CY", "AS"),
    ("CZ", "EU"),
    ("DE", "EU"),
    ("DJ", "AF"),
    ("DK", "EU"),
    ("DM", "NA"),
    ("DO", "NA"),
    ("DZ", "AF"),
    ("EC", "SA"),
    ("EE", "EU"),
    ("EG", "AF"),
    ("ER", "AF"),
    ("ES", "EU"),
    ("ET", "AF"),
    ("FI", "EU"),
    ("FJ", "OC"),
    ("FM", "OC"),
    ("FR", "EU"),
    ("GA", "AF"),
    ("GB", "EU"),
    ("GD", "NA"),
    ("GE", "AS"),
    ("GH", "AF"),
    ("GM", "AF"),
    ("GN", "AF"),
    ("GQ", "AF"),
    ("GR", "EU"),
    ("GT", "NA"),
    ("GW", "AF"),
    ("GY", "SA"),
    ("HK", "AS"),
    ("HN", "NA"),
    ("HR", "EU"),
    ("HT", "NA"),
    ("HU", "EU"),
    ("ID", "AS"),
    ("IE", "EU"),
    ("IL", "AS"),
    ("IN", "AS"),
    ("IQ", "AS"),
    ("IR", "AS"),
    ("IS", "EU"),
    ("IT", "EU"),
    ("JM", "NA"),
    ("JO", "AS"),
    ("JP", "AS"),
    ("KE", "AF"),
    ("KG", "AS"),
    ("KH", "AS"),
    ("KI", "OC"),
    ("KM", "AF"),
    ("KN", "NA"),
    ("KP", "AS"),
    ("KR", "AS"),
    ("KW", "AS"),
    ("KZ", "AS"),
    ("LA", "AS"),
    ("LB", "AS"),
    ("LC", "NA"),
    ("LI", "EU"),
    ("LK", "AS"),
    ("LR", "AF"),
    ("LS", "AF"),
    ("LT", "EU"),
    ("LU", "EU"),
    ("LV", "EU"),
    ("LY", "AF"),
    ("MA", "AF"),
    ("MC", "EU"),
    ("MD", "EU"),
    ("ME", "EU"),
    ("MG", "AF"),
    ("MH", "OC"),
    ("MK", "EU"),
    ("ML", "AF"),
    ("MM", "AS"),
    ("MN", "AS"),
    ("MO", "AS"),
    ("MR", "AF"),
    ("MT", "EU"),
    ("MU", "AF"),
    ("MV", "AS"),
    ("MW", "AF"),
    ("MX", "NA"),
    ("MY", "AS"),
    ("MZ", "AF"),
    ("NA", "AF"),
    ("NE", "AF"),
    ("NG", "AF"),
    ("NI", "NA"),
    ("NL", "EU"),
    ("NO", "EU"),
    ("NP", "AS"),
    ("NR", "OC"),
    ("NZ", "OC"),
    ("OM", "AS"),
    ("PA", "NA"),
    ("PE", "SA"),
    ("PG", "OC"),
    ("PH", "AS"),
    ("PK", "AS"),
    ("PL", "EU"),
    ("PR", "NA"),
    ("PS", "AS"),
    ("PT", "EU"),
    ("PW", "OC"),
    ("PY", "SA"),
    ("QA", "AS"),
    ("RO", "EU"),
    ("RS", "EU"),
    ("RU", "EU"),
    ("RW", "AF"),
    ("SA", "AS"),
    ("SB", "OC"),
    ("SC", "AF"),
    ("SD", "AF"),
    ("SE", "EU"),
    ("SG", "AS"),
    ("SI", "EU"),
    ("SK", "EU"),
    ("SL", "AF"),
    ("SM", "EU"),
    ("SN", "AF"),
    ("SO", "AF"),
    ("SR", "SA"),
    ("SS", "AF"),
    ("ST", "AF"),
    ("SV", "NA"),
    ("SY", "AS"),
    ("SZ", "AF"),
    ("TD", "AF"),
    ("TG", "AF"),
    ("TH", "AS"),
    ("TJ", "AS"),
    ("TM", "AS"),
    ("TN", "AF"),
    ("TO", "OC"),
    ("TR", "AS"),
    ("TT", "NA"),
    ("TW", "AS"),
    ("TV", "OC"),
    ("TZ", "AF"),
    ("UA", "EU"),
    ("UG", "AF"),
    ("US", "NA"),
    ("UY", "SA"),
    ("UZ", "AS"),
    ("VC", "NA"),
    ("VE", "SA"),
    ("VN", "AS"),
    ("VU", "OC"),
    ("WS", "OC"),
    ("YE", "AS"),
    ("ZA", "AF"),
    ("ZM", "AF"),
    ("ZW", "AF"),
];

/// Map a two-letter continent code to a continent.
pub fn continent_from_code(code: &str) -> Option<Continent> {
    match code {
        "AF" => Some(Continent::Africa),
        "AN" => Some(Continent::Antarctica),
        "AS" => Some(Continent::Asia),
        "EU" => Some(Continent::Europe),
        "NA" => Some(Continent::NorthAmerica),
        "SA" => Some(Continent::SouthAmerica),
        "OC" => Some(Continent::Oceania),
        _ => None,
    }
}

/// Exact-name lookup tables. Immutable after construction.
#[derive(Debug, Clone)]
pub struct GeoDatabase {
    alpha2_by_name: AHashMap<String, String>,
    code_by_alpha2: AHashMap<String, String>,
}

impl GeoDatabase {
    /// The database compiled into the crate.
    pub fn builtin() -> Self {
        Self::from_tables(
            COUNTRY_ALPHA2.iter().chain(NAME_ALIASES).copied(),
            ALPHA2_CONTINENT_CODE.iter().copied(),
        )
    }

    pub fn from_tables<'a>(
        names: impl IntoIterator<Item = (&'a str, &'a str)>,
        continents: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            alpha2_by_name: names
                .into_iter()
                .map(|(n, a)| (n.to_string(), a.to_string()))
                .collect(),
            code_by_alpha2: continents
                .into_iter()
                .map(|(a, c)| (a.to_string(), c.to_string()))
                .collect(),
        }
    }

    pub fn alpha2(&self, country: &str) -> Option<&str> {
        self.alpha2_by_name.get(country.trim()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.alpha2_by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alpha2_by_name.is_empty()
    }
}

impl Default for GeoDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RegionLookup for GeoDatabase {
    fn continent_of(&self, country: &str) -> Result<Continent, LookupFailed> {
        let alpha2 = self
            .alpha2(country)
            .ok_or_else(|| LookupFailed::UnknownCountry(country.to_string()))?;
        let code = self
            .code_by_alpha2
            .get(alpha2)
            .ok_or_else(|| LookupFailed::UnmappedAlpha2(alpha2.to_string()))?;
        continent_from_code(code).ok_or_else(|| LookupFailed::UnmappedContinentCode(code.clone()))
    }
}
