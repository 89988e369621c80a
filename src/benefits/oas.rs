//! Base pension (OAS) evaluator
//!
//! The pension has no income test for eligibility below the recovery-tax
//! ceiling, prorates by residency years, and supports a voluntary deferral
//! election of up to 60 months at 0.6% per month. Amounts rise permanently by
//! 10% at age 75.

use super::result::{
    BenefitResult, DeferralOption, DetailKey, EligibilityResult, EntitlementResult,
    EntitlementType, ResultKey, ResultReason,
};
use crate::input::{FieldKey, ProcessedInput};
use crate::rates::RateTable;
use crate::rounding::round2;

/// Residency years required while living in Canada.
const YEARS_REQUIRED_IN_CANADA: f64 = 10.0;
/// Residency years required while living abroad.
const YEARS_REQUIRED_ABROAD: f64 = 20.0;
/// Permanent increase factor applied at age 75.
const AGE_75_INCREASE: f64 = 1.1;

pub struct OasBenefit<'a> {
    input: &'a ProcessedInput,
    rates: &'a RateTable,
}

impl<'a> OasBenefit<'a> {
    pub fn new(input: &'a ProcessedInput, rates: &'a RateTable) -> Self {
        Self { input, rates }
    }

    /// Fields this benefit cannot be decided without.
    pub fn missing_fields(input: &ProcessedInput) -> Vec<FieldKey> {
        let mut missing = Vec::new();
        if input.age.is_none() {
            missing.push(FieldKey::Age);
        }
        if !input.living_country.provided() {
            missing.push(FieldKey::LivingCountry);
        }
        if !input.legal_status.provided() {
            missing.push(FieldKey::LegalStatus);
        }
        if input.years_in_canada_since18.is_none() {
            missing.push(FieldKey::YearsInCanadaSince18);
        }
        missing
    }

    pub fn result(&self) -> BenefitResult {
        let eligibility = self.eligibility();
        let entitlement = self.entitlement(&eligibility);
        BenefitResult {
            eligibility,
            entitlement,
        }
    }

    fn eligibility(&self) -> EligibilityResult {
        if !Self::missing_fields(self.input).is_empty() {
            return EligibilityResult::new(
                ResultKey::MoreInfo,
                ResultReason::MoreInfo,
                DetailKey::AdditionalInfoNeeded,
            );
        }
        let age = self.input.age.unwrap_or(0.0);
        let years = self.input.years_in_canada_since18.unwrap_or(0.0);

        // Legal status first: a sponsorship or unresolved status blocks the
        // claim regardless of residency or age.
        if !self.input.legal_status.canadian() {
            let detail = if self.input.legal_status.sponsored() {
                DetailKey::DependingOnLegalSponsored
            } else {
                DetailKey::DependingOnLegal
            };
            return EligibilityResult::new(ResultKey::Unavailable, ResultReason::LegalStatus, detail);
        }

        let required = if self.input.living_country.canada() {
            YEARS_REQUIRED_IN_CANADA
        } else {
            YEARS_REQUIRED_ABROAD
        };
        if years < required {
            // Residence in or past residence in an agreement country can
            // bridge the gap, but only a manual review can settle it.
            if self.input.living_country.agreement() {
                return EligibilityResult::new(
                    ResultKey::Unavailable,
                    ResultReason::YearsInCanada,
                    DetailKey::DependingOnAgreement,
                );
            }
            if self.input.ever_lived_social_country == Some(true) {
                return EligibilityResult::new(
                    ResultKey::Unavailable,
                    ResultReason::YearsInCanada,
                    if age < 65.0 {
                        DetailKey::DependingOnAgreementWhen65
                    } else {
                        DetailKey::DependingOnAgreement
                    },
                );
            }
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::YearsInCanada,
                DetailKey::MustMeetYearReq,
            );
        }

        if age < 60.0 {
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::AgeYoung,
                DetailKey::EligibleWhen65,
            );
        }
        if age < 65.0 {
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::AgeYoung64,
                DetailKey::EligibleWhen65,
            );
        }

        let income = match self.input.income {
            Some(income) => income,
            None => {
                return EligibilityResult::new(
                    ResultKey::IncomeDependent,
                    ResultReason::IncomeMissing,
                    DetailKey::EligibleDependingOnIncome,
                )
            }
        };
        if income >= self.rates.max_oas_income {
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::Income,
                DetailKey::MustMeetIncomeReq,
            );
        }

        let reason = if age >= 70.0 {
            ResultReason::Age70AndOver
        } else {
            ResultReason::Age65To69
        };
        EligibilityResult::new(ResultKey::Eligible, reason, DetailKey::Eligible)
    }

    fn entitlement(&self, eligibility: &EligibilityResult) -> EntitlementResult {
        match eligibility.result {
            ResultKey::Eligible => {}
            ResultKey::Unavailable => return EntitlementResult::unavailable(),
            _ => return EntitlementResult::none(),
        }

        let age = self.input.age.unwrap_or(0.0);
        let years = self.input.years_in_canada_since18.unwrap_or(0.0);

        let (base, entitlement_type) = if self.input.lived_only_in_canada || years >= 40.0 {
            (self.rates.max_oas_entitlement, EntitlementType::Full)
        } else {
            (
                round2(self.rates.max_oas_entitlement * years / 40.0),
                EntitlementType::Partial,
            )
        };

        let deferred = self.deferral_amount(base, self.input.oas_age);
        let result = if age >= 75.0 {
            round2(deferred * AGE_75_INCREASE)
        } else {
            deferred
        };
        let result_at75 = if age >= 75.0 {
            result
        } else {
            round2(deferred * AGE_75_INCREASE)
        };

        EntitlementResult {
            result,
            entitlement_type,
            clawback: self.monthly_clawback(result),
            result_at75,
            deferral: self.deferral_table(base, age),
            auto_enrollment: entitlement_type == EntitlementType::Full,
        }
    }

    /// Monthly amount at a given pension start age, after the deferral bonus.
    fn deferral_amount(&self, base: f64, start_age: f64) -> f64 {
        let months = (((start_age - 65.0) * 12.0).round() as u32)
            .min(self.rates.oas_max_deferral_months);
        round2(base * (1.0 + months as f64 * self.rates.oas_deferral_increase_per_month))
    }

    /// Monthly recovery tax, capped at the full annual pension.
    fn monthly_clawback(&self, monthly: f64) -> f64 {
        let income = match self.input.income {
            Some(income) => income,
            None => return 0.0,
        };
        if income <= self.rates.oas_recovery_tax_income_threshold {
            return 0.0;
        }
        let annual_tax =
            self.rates.oas_recovery_tax_rate * (income - self.rates.oas_recovery_tax_income_threshold);
        round2(annual_tax.min(monthly * 12.0) / 12.0)
    }

    /// Amounts at each remaining deferral start age, for comparison.
    fn deferral_table(&self, base: f64, age: f64) -> Vec<DeferralOption> {
        if age >= 70.0 {
            return Vec::new();
        }
        let first = (age.ceil() as u32 + 1).max(66);
        (first..=70)
            .map(|start| DeferralOption {
                age: start,
                amount: self.deferral_amount(base, start as f64),
            })
            .collect()
    }
}
