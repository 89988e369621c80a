//! Country classification
//!
//! Maps a raw country name to the three-way residence classification used by
//! all residency rules. Canada maintains social security agreements with the
//! countries listed below; any unrecognized country is treated as having no
//! agreement.

use super::data::LivingCountry;

/// Countries with a social security agreement in force.
const AGREEMENT_COUNTRIES: &[&str] = &[
    "Antigua and Barbuda",
    "Austria",
    "Barbados",
    "Belgium",
    "Brazil",
    "Bulgaria",
    "Chile",
    "China",
    "Croatia",
    "Cyprus",
    "Czechia (Czech Republic)",
    "Denmark",
    "Dominica",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Grenada",
    "Hungary",
    "Iceland",
    "India",
    "Ireland",
    "Israel",
    "Italy",
    "Jamaica",
    "Japan",
    "Latvia",
    "Lithuania",
    "Luxembourg",
    "Malta",
    "Mexico",
    "Morocco",
    "Netherlands",
    "Norway",
    "Peru",
    "Philippines",
    "Poland",
    "Portugal",
    "Romania",
    "Saint Kitts and Nevis",
    "Saint Lucia",
    "Saint Vincent and the Grenadines",
    "Serbia",
    "Slovakia",
    "Slovenia",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Trinidad and Tobago",
    "Turkey",
    "United Kingdom",
    "United States of America",
    "Uruguay",
];

/// Classify a raw country string.
///
/// Accepts either a country name or one of the pre-classified sentinel values
/// (`Canada` / `Agreement` / `No Agreement`) that some callers send directly.
pub fn classify_country(raw: &str) -> LivingCountry {
    let name = raw.trim();
    if name.eq_ignore_ascii_case("Canada") || name.eq_ignore_ascii_case("CAN") {
        return LivingCountry::Canada;
    }
    if name.eq_ignore_ascii_case("Agreement") {
        return LivingCountry::Agreement;
    }
    if name.eq_ignore_ascii_case("No Agreement") {
        return LivingCountry::NoAgreement;
    }
    if AGREEMENT_COUNTRIES
        .iter()
        .any(|c| c.eq_ignore_ascii_case(name))
    {
        LivingCountry::Agreement
    } else {
        LivingCountry::NoAgreement
    }
}
