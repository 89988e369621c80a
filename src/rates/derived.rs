//! Constants derived from cross-situation rate differences
//!
//! The official GIS calculation worksheets use several constants that are not
//! published directly: they are derived from differences between *other*
//! situations' published maximums. They look arbitrary but are intentional,
//! and must be recomputed from the injected rate table each quarter rather
//! than hardcoded.

use super::RateTable;
use crate::rounding::{round0, round2};

/// Worksheet constants computed once per rate-table quarter.
///
/// Documented values are for the 2022 Q2 reference quarter.
#[derive(Debug, Clone, Copy)]
pub struct DerivedRates {
    /// Income offset tied to a quarter of the OAS pension, spread over the
    /// paired increment: `round(max_oas/4 + 0.5) * increment * 2`. (7824)
    ///
    /// Subtracted from income for partnered clients whose partner receives
    /// neither OAS nor ALW.
    pub single_rate_offset: f64,

    /// Income offset tied to a third of the OAS pension:
    /// `round(max_oas/3 + 0.5) * increment * 2`. (10416)
    ///
    /// The low bracket boundary for ALW and survivor claimants, and the
    /// high-bracket income offset for them.
    pub third_rate_offset: f64,

    /// Flat middle-band amount for the partner-on-ALW situation: the single
    /// maximum less the couple maximum less the pension-fraction difference,
    /// all net of top-ups. (224.11)
    pub partner_alw_static: f64,

    /// Low bracket boundary for the partner-on-ALW situation. (25632)
    pub partner_alw_low_ceiling: f64,

    /// High bracket boundary for the partner-on-ALW situation. (36384)
    pub partner_alw_high_floor: f64,

    /// High-bracket maximum for survivor claimants: the survivor maximum less
    /// the single top-up less a full OAS pension. (669.73)
    pub survivor_high_max: f64,
}

impl DerivedRates {
    pub fn from_table(rates: &RateTable) -> Self {
        let paired_increment = rates.gis_increment * 2.0;

        let quarter_pension = round0(rates.max_oas_entitlement / 4.0 + 0.5);
        let third_pension = round0(rates.max_oas_entitlement / 3.0 + 0.5);

        let single_rate_offset = quarter_pension * paired_increment;
        let third_rate_offset = third_pension * paired_increment;

        let single_net = rates.max_gis_amount_single - rates.max_gis_topup_single;
        let partner_oas_net = rates.max_gis_amount_partner_oas - rates.max_gis_topup_partner;

        let partner_alw_static =
            round2(single_net - partner_oas_net - (third_pension - quarter_pension));

        let partner_alw_low_ceiling =
            round0(single_net - 2.0 * partner_alw_static + 0.5) * paired_increment
                + single_rate_offset;

        let partner_alw_high_floor =
            third_rate_offset + round0(partner_oas_net + 0.5) * paired_increment;

        let survivor_high_max = round2(
            rates.max_gis_amount_single_afs
                - rates.max_gis_topup_single
                - rates.max_oas_entitlement,
        );

        Self {
            single_rate_offset,
            third_rate_offset,
            partner_alw_static,
            partner_alw_low_ceiling,
            partner_alw_high_floor,
            survivor_high_max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_quarter_worksheet_values() {
        // These exact values appear on the published 2022 Q2 worksheets;
        // any drift means a derivation bug, not a rate change.
        let derived = RateTable::q2_2022().derived();
        assert_eq!(derived.single_rate_offset, 7824.0);
        assert_eq!(derived.third_rate_offset, 10416.0);
        assert_eq!(derived.partner_alw_static, 224.11);
        assert_eq!(derived.partner_alw_low_ceiling, 25632.0);
        assert_eq!(derived.partner_alw_high_floor, 36384.0);
        assert_eq!(derived.survivor_high_max, 669.73);
    }

    #[test]
    fn test_derived_tracks_table_changes() {
        let mut rates = RateTable::q2_2022();
        rates.max_oas_entitlement = 700.0;
        let derived = rates.derived();
        // round(700/4 + 0.5) = 176, round(700/3 + 0.5) = 234
        assert_eq!(derived.single_rate_offset, 176.0 * 48.0);
        assert_eq!(derived.third_rate_offset, 234.0 * 48.0);
    }
}
