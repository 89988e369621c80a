//! Legislated rate constants
//!
//! The controlling authority publishes a new set of maximum entitlement
//! amounts and income ceilings every quarter. The engine consumes exactly one
//! [`RateTable`] per request; swapping quarters means constructing a different
//! table, never mutating one.

mod derived;

pub use derived::DerivedRates;

use crate::error::RateTableError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// One quarter's published constants, consumed read-only by the engine.
///
/// Monthly amounts are dollars; income ceilings are annual dollars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// First day of the quarter these rates took effect
    pub effective: NaiveDate,

    /// Maximum monthly OAS pension at 40 years of residency, claimed at 65
    pub max_oas_entitlement: f64,

    // GIS maximum monthly amounts by household situation
    pub max_gis_amount_single: f64,
    pub max_gis_amount_partner_oas: f64,
    pub max_gis_amount_partner_no_oas_no_alw: f64,
    pub max_gis_amount_partner_alw: f64,
    pub max_gis_amount_single_alw: f64,
    pub max_gis_amount_single_afs: f64,

    // GIS top-up maximum monthly amounts
    pub max_gis_topup_single: f64,
    pub max_gis_topup_partner: f64,

    // Annual income ceilings per benefit/situation
    pub max_oas_income: f64,
    pub max_gis_income_single: f64,
    pub max_gis_income_partner_oas: f64,
    pub max_gis_income_partner_no_oas_no_alw: f64,
    pub max_gis_income_partner_alw: f64,
    pub max_alw_income: f64,
    pub max_afs_income: f64,

    // OAS recovery tax ("clawback")
    pub oas_recovery_tax_income_threshold: f64,
    pub oas_recovery_tax_rate: f64,

    // OAS deferral election
    pub oas_deferral_increase_per_month: f64,
    pub oas_max_deferral_months: u32,

    /// The fixed income increment used by the GIS formula
    pub gis_increment: f64,
    /// Per-household-member income threshold below which the full top-up applies
    pub gis_topup_income_threshold: f64,
}

impl RateTable {
    /// Rates in effect for the 2022 Q2 quarter (April-June 2022).
    ///
    /// This is the reference quarter used throughout the test suite; its
    /// derived worksheet constants are documented in [`DerivedRates`].
    pub fn q2_2022() -> Self {
        Self {
            effective: NaiveDate::from_ymd_opt(2022, 4, 1).unwrap(),
            max_oas_entitlement: 648.67,
            max_gis_amount_single: 968.86,
            max_gis_amount_partner_oas: 583.20,
            max_gis_amount_partner_no_oas_no_alw: 968.86,
            max_gis_amount_partner_alw: 583.20,
            max_gis_amount_single_alw: 583.20,
            max_gis_amount_single_afs: 1468.47,
            max_gis_topup_single: 150.07,
            max_gis_topup_partner: 42.52,
            max_oas_income: 129_757.0,
            max_gis_income_single: 19_656.0,
            max_gis_income_partner_oas: 25_968.0,
            max_gis_income_partner_no_oas_no_alw: 47_136.0,
            max_gis_income_partner_alw: 36_384.0,
            max_alw_income: 36_384.0,
            max_afs_income: 26_496.0,
            oas_recovery_tax_income_threshold: 79_845.0,
            oas_recovery_tax_rate: 0.15,
            oas_deferral_increase_per_month: 0.006,
            oas_max_deferral_months: 60,
            gis_increment: 24.0,
            gis_topup_income_threshold: 2000.0,
        }
    }

    /// Load a rate table from a two-column `key,value` CSV source.
    ///
    /// The `effective` row uses `YYYY-MM-DD`; every other row is numeric.
    /// A missing or malformed constant is a hard error: the engine must not
    /// run against a partial quarter.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, RateTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);

        let mut effective: Option<NaiveDate> = None;
        let mut lookup = std::collections::HashMap::new();
        for record in csv_reader.records() {
            let record = record?;
            let key = record.get(0).unwrap_or("").trim().to_string();
            let value = record.get(1).unwrap_or("").trim().to_string();
            if key == "effective" {
                effective = NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok();
            } else {
                let parsed: f64 =
                    value
                        .parse()
                        .map_err(|_| RateTableError::InvalidConstant {
                            key: key.clone(),
                            value: value.clone(),
                        })?;
                lookup.insert(key, parsed);
            }
        }

        let get = |key: &str| -> Result<f64, RateTableError> {
            lookup
                .get(key)
                .copied()
                .ok_or_else(|| RateTableError::MissingConstant(key.to_string()))
        };

        Ok(Self {
            effective: effective.ok_or(RateTableError::MissingEffectiveDate)?,
            max_oas_entitlement: get("max_oas_entitlement")?,
            max_gis_amount_single: get("max_gis_amount_single")?,
            max_gis_amount_partner_oas: get("max_gis_amount_partner_oas")?,
            max_gis_amount_partner_no_oas_no_alw: get("max_gis_amount_partner_no_oas_no_alw")?,
            max_gis_amount_partner_alw: get("max_gis_amount_partner_alw")?,
            max_gis_amount_single_alw: get("max_gis_amount_single_alw")?,
            max_gis_amount_single_afs: get("max_gis_amount_single_afs")?,
            max_gis_topup_single: get("max_gis_topup_single")?,
            max_gis_topup_partner: get("max_gis_topup_partner")?,
            max_oas_income: get("max_oas_income")?,
            max_gis_income_single: get("max_gis_income_single")?,
            max_gis_income_partner_oas: get("max_gis_income_partner_oas")?,
            max_gis_income_partner_no_oas_no_alw: get("max_gis_income_partner_no_oas_no_alw")?,
            max_gis_income_partner_alw: get("max_gis_income_partner_alw")?,
            max_alw_income: get("max_alw_income")?,
            max_afs_income: get("max_afs_income")?,
            oas_recovery_tax_income_threshold: get("oas_recovery_tax_income_threshold")?,
            oas_recovery_tax_rate: get("oas_recovery_tax_rate")?,
            oas_deferral_increase_per_month: get("oas_deferral_increase_per_month")?,
            oas_max_deferral_months: get("oas_max_deferral_months")? as u32,
            gis_increment: get("gis_increment")?,
            gis_topup_income_threshold: get("gis_topup_income_threshold")?,
        })
    }

    /// Worksheet constants derived from this quarter's published amounts.
    pub fn derived(&self) -> DerivedRates {
        DerivedRates::from_table(self)
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::q2_2022()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_quarter() {
        let rates = RateTable::q2_2022();
        assert_eq!(rates.max_oas_entitlement, 648.67);
        assert_eq!(rates.max_gis_amount_single, 968.86);
        // The full ALW maximum is the couple-rate GIS plus a full OAS pension
        assert_eq!(
            crate::rounding::round2(rates.max_gis_amount_single_alw + rates.max_oas_entitlement),
            1231.87
        );
    }

    #[test]
    fn test_from_csv_roundtrip() {
        let rates = RateTable::q2_2022();
        let mut csv_text = String::from("effective,2022-04-01\n");
        let json = serde_json::to_value(&rates).unwrap();
        for (key, value) in json.as_object().unwrap() {
            if key != "effective" {
                csv_text.push_str(&format!("{},{}\n", key, value));
            }
        }
        let loaded = RateTable::from_csv_reader(csv_text.as_bytes()).unwrap();
        assert_eq!(loaded.max_oas_entitlement, rates.max_oas_entitlement);
        assert_eq!(loaded.max_afs_income, rates.max_afs_income);
        assert_eq!(loaded.effective, rates.effective);
    }

    #[test]
    fn test_from_csv_missing_constant() {
        let csv_text = "effective,2022-04-01\nmax_oas_entitlement,648.67\n";
        let err = RateTable::from_csv_reader(csv_text.as_bytes()).unwrap_err();
        assert!(matches!(err, RateTableError::MissingConstant(_)));
    }
}
