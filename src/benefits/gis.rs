//! Income supplement (GIS) evaluator
//!
//! The supplement rides on the base pension: a client must be eligible for
//! OAS and resident in Canada or an agreement country. The amount comes from
//! the shared worksheet formula, floored at zero.

use super::formula::{EntitlementFormula, GisSituation};
use super::oas::OasBenefit;
use super::result::{
    BenefitResult, DetailKey, EligibilityResult, EntitlementResult, EntitlementType, ResultKey,
    ResultReason,
};
use crate::input::{FieldKey, ProcessedInput};
use crate::rates::RateTable;

pub struct GisBenefit<'a> {
    input: &'a ProcessedInput,
    rates: &'a RateTable,
    /// The base-pension verdict this benefit depends on
    oas: &'a EligibilityResult,
}

impl<'a> GisBenefit<'a> {
    pub fn new(
        input: &'a ProcessedInput,
        rates: &'a RateTable,
        oas: &'a EligibilityResult,
    ) -> Self {
        Self { input, rates, oas }
    }

    pub fn missing_fields(input: &ProcessedInput) -> Vec<FieldKey> {
        let mut missing = OasBenefit::missing_fields(input);
        if !input.marital.provided() {
            missing.push(FieldKey::MaritalStatus);
        }
        if input.marital.partnered() && !input.partner_benefit_status.provided() {
            missing.push(FieldKey::PartnerBenefitStatus);
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

        if !self.input.legal_status.canadian() {
            let detail = if self.input.legal_status.sponsored() {
                DetailKey::DependingOnLegalSponsored
            } else {
                DetailKey::DependingOnLegal
            };
            return EligibilityResult::new(ResultKey::Unavailable, ResultReason::LegalStatus, detail);
        }

        // The supplement is not payable outside Canada or agreement countries.
        if self.input.living_country.no_agreement() {
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::LivingCountry,
                DetailKey::MustBeInCanada,
            );
        }

        match self.oas.result {
            ResultKey::Unavailable => {
                return EligibilityResult::new(
                    ResultKey::Unavailable,
                    ResultReason::Oas,
                    DetailKey::OasUnavailable,
                )
            }
            ResultKey::Ineligible | ResultKey::MoreInfo => {
                return EligibilityResult::new(
                    ResultKey::Ineligible,
                    ResultReason::Oas,
                    DetailKey::MustBeOasEligible,
                )
            }
            ResultKey::Eligible | ResultKey::IncomeDependent => {}
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
        if income >= self.income_ceiling() {
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::Income,
                DetailKey::MustMeetIncomeReq,
            );
        }

        EligibilityResult::new(ResultKey::Eligible, ResultReason::None, DetailKey::Eligible)
    }

    /// The annual income ceiling for the client's household situation.
    fn income_ceiling(&self) -> f64 {
        let formula = EntitlementFormula::new(
            self.rates,
            0.0,
            &self.input.marital,
            &self.input.partner_benefit_status,
            self.input.age.unwrap_or(0.0),
        );
        match formula.situation() {
            GisSituation::Single | GisSituation::Afs => self.rates.max_gis_income_single,
            // A supplement claimant is 65+, so the allowance situation cannot
            // occur; it shares the partner-on-OAS ceiling regardless.
            GisSituation::PartnerOas | GisSituation::Alw => self.rates.max_gis_income_partner_oas,
            GisSituation::PartnerAlw => self.rates.max_gis_income_partner_alw,
            GisSituation::PartnerNoOas => self.rates.max_gis_income_partner_no_oas_no_alw,
        }
    }

    fn entitlement(&self, eligibility: &EligibilityResult) -> EntitlementResult {
        match eligibility.result {
            ResultKey::Eligible => {}
            ResultKey::Unavailable => return EntitlementResult::unavailable(),
            _ => return EntitlementResult::none(),
        }
        let income = match self.input.income {
            Some(income) => income,
            None => return EntitlementResult::none(),
        };

        let amount = EntitlementFormula::new(
            self.rates,
            income,
            &self.input.marital,
            &self.input.partner_benefit_status,
            self.input.age.unwrap_or(0.0),
        )
        .calculate()
        .max(0.0);

        EntitlementResult {
            result: amount,
            entitlement_type: if amount > 0.0 {
                EntitlementType::Full
            } else {
                EntitlementType::None
            },
            clawback: 0.0,
            result_at75: amount,
            deferral: Vec::new(),
            auto_enrollment: true,
        }
    }
}
