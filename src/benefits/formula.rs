//! The income-tested entitlement formula
//!
//! One formula covers GIS, ALW, and the survivor allowance; what differs
//! between them is the household situation, which selects the maximum amounts,
//! the income bracket boundaries, and the per-increment reduction slope. The
//! arithmetic reproduces the official calculation worksheets to the cent,
//! including their half-up rounding and integer increment counts.

use crate::input::{MaritalStatus, MaritalStatusHelper, PartnerBenefitStatusHelper};
use crate::rates::{DerivedRates, RateTable};
use crate::rounding::round2;

/// Household situation, as the worksheets distinguish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GisSituation {
    /// Single, divorced or separated
    Single,
    /// Widowed; claims the survivor allowance rates
    Afs,
    /// Partnered, partner receives OAS, client is 65+
    PartnerOas,
    /// Partnered, partner receives the Allowance
    PartnerAlw,
    /// Partnered, partner receives neither OAS nor the Allowance
    PartnerNoOas,
    /// Partnered, partner receives OAS, client is 60-64 (Allowance claim)
    Alw,
}

/// Which segment of the piecewise income schedule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IncomeBracket {
    Low,
    /// Flat middle band between the low and high boundaries
    Static,
    High,
}

/// One evaluation of the worksheet formula for a fixed situation and income.
pub struct EntitlementFormula<'a> {
    rates: &'a RateTable,
    derived: DerivedRates,
    situation: GisSituation,
    /// Household size for increment purposes: 1.0 single, 2.0 partnered
    gis_status: f64,
    income: f64,
}

impl<'a> EntitlementFormula<'a> {
    pub fn new(
        rates: &'a RateTable,
        income: f64,
        marital: &MaritalStatusHelper,
        partner: &PartnerBenefitStatusHelper,
        age: f64,
    ) -> Self {
        let situation = if marital.single() {
            if marital.value == Some(MaritalStatus::Widowed) {
                GisSituation::Afs
            } else {
                GisSituation::Single
            }
        } else if partner.any_oas() {
            if age >= 65.0 {
                GisSituation::PartnerOas
            } else {
                GisSituation::Alw
            }
        } else if partner.alw() {
            GisSituation::PartnerAlw
        } else {
            GisSituation::PartnerNoOas
        };

        let gis_status = if marital.single() { 1.0 } else { 2.0 };

        Self {
            rates,
            derived: rates.derived(),
            situation,
            gis_status,
            income,
        }
    }

    pub fn situation(&self) -> GisSituation {
        self.situation
    }

    /// The monthly entitlement before any floor at zero.
    pub fn calculate(&self) -> f64 {
        match self.bracket() {
            IncomeBracket::Static => self.static_result(),
            _ => round2(self.actual_amount() + self.actual_topup()),
        }
    }

    /// Bracket boundaries `(low, high)`; `(-1, -1)` when the schedule has no
    /// middle band and all incomes take the high path.
    fn bracket_bounds(&self) -> (f64, f64) {
        match self.situation {
            GisSituation::PartnerAlw => (
                self.derived.partner_alw_low_ceiling,
                self.derived.partner_alw_high_floor,
            ),
            GisSituation::Alw | GisSituation::Afs => (
                self.derived.third_rate_offset,
                self.derived.third_rate_offset + self.rates.gis_increment * self.gis_status,
            ),
            _ => (-1.0, -1.0),
        }
    }

    fn bracket(&self) -> IncomeBracket {
        let (low, high) = self.bracket_bounds();
        if self.income < low {
            IncomeBracket::Low
        } else if self.income >= high {
            IncomeBracket::High
        } else {
            IncomeBracket::Static
        }
    }

    /// Flat middle-band amounts. Only the three situations with a middle band
    /// can reach this; the bracket bounds make the rest impossible.
    fn static_result(&self) -> f64 {
        match self.situation {
            GisSituation::PartnerAlw => self.derived.partner_alw_static,
            GisSituation::Alw => self.actual_max_amount(),
            GisSituation::Afs => self.derived.survivor_high_max,
            _ => unreachable!("situation without a middle band classified as static"),
        }
    }

    /// Maximum monthly amount before top-up, per situation.
    fn basic_max(&self) -> f64 {
        match self.situation {
            GisSituation::Single => self.rates.max_gis_amount_single,
            GisSituation::PartnerOas => self.rates.max_gis_amount_partner_oas,
            GisSituation::PartnerNoOas => self.rates.max_gis_amount_partner_no_oas_no_alw,
            GisSituation::PartnerAlw => self.rates.max_gis_amount_partner_alw,
            GisSituation::Alw => self.rates.max_gis_amount_single_alw,
            GisSituation::Afs => self.rates.max_gis_amount_single_afs,
        }
    }

    /// Maximum monthly top-up, per situation.
    fn basic_topup(&self) -> f64 {
        match self.situation {
            GisSituation::Single | GisSituation::Afs | GisSituation::PartnerNoOas => {
                self.rates.max_gis_topup_single
            }
            GisSituation::PartnerOas | GisSituation::PartnerAlw | GisSituation::Alw => {
                self.rates.max_gis_topup_partner
            }
        }
    }

    /// The ceiling the reductions apply against, after bracket adjustments.
    fn actual_max_amount(&self) -> f64 {
        let bracket = self.bracket();
        match (self.situation, bracket) {
            (GisSituation::PartnerAlw, IncomeBracket::High) => round2(
                self.rates.max_gis_amount_single - self.rates.max_gis_topup_single,
            ),
            (GisSituation::Alw, IncomeBracket::Low) => round2(
                self.rates.max_gis_amount_partner_alw - self.rates.max_gis_topup_partner
                    + self.rates.max_oas_entitlement,
            ),
            (GisSituation::Afs, IncomeBracket::High) => self.derived.survivor_high_max,
            _ => round2(self.basic_max() - self.basic_topup()),
        }
    }

    /// Income disregarded before counting increments, per situation/bracket.
    fn sub_from_income(&self) -> f64 {
        let bracket = self.bracket();
        match self.situation {
            GisSituation::Single | GisSituation::PartnerOas => 0.0,
            GisSituation::PartnerNoOas => self.derived.single_rate_offset,
            GisSituation::PartnerAlw => match bracket {
                IncomeBracket::Low => self.derived.third_rate_offset,
                IncomeBracket::High => self.derived.single_rate_offset,
                IncomeBracket::Static => 0.0,
            },
            GisSituation::Alw | GisSituation::Afs => match bracket {
                IncomeBracket::High => self.derived.third_rate_offset,
                _ => 0.0,
            },
        }
    }

    /// Dollars of income per one-dollar monthly reduction increment.
    fn increment_multiplier(&self) -> f64 {
        match self.situation {
            GisSituation::Single => 1.0,
            GisSituation::Afs => match self.bracket() {
                IncomeBracket::High => 1.0,
                _ => 2.0,
            },
            _ => 2.0,
        }
    }

    /// Whole increments of countable income.
    fn income_differential(&self) -> f64 {
        let countable = self.income - self.sub_from_income();
        let increment = self.rates.gis_increment * self.increment_multiplier();
        (countable / increment).floor().max(0.0)
    }

    /// Base amount after the per-increment reduction. The low bracket of the
    /// allowance schedules reduces three dollars per increment because it is
    /// recovering the OAS-equivalent portion as well.
    fn actual_amount(&self) -> f64 {
        let slope = match (self.situation, self.bracket()) {
            (GisSituation::Alw | GisSituation::Afs, IncomeBracket::Low) => 3.0,
            _ => 1.0,
        };
        round2(self.actual_max_amount() - self.income_differential() * slope)
    }

    /// Top-up after its own income phase-out.
    fn actual_topup(&self) -> f64 {
        let threshold = self.rates.gis_topup_income_threshold * self.gis_status;
        if self.income < threshold {
            return self.basic_topup();
        }
        let reduction =
            ((self.income - threshold) / (self.rates.gis_increment * self.gis_status * 2.0)).floor();
        (self.basic_topup() - reduction).max(0.0)
    }
}
