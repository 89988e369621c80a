//! Allowance (ALW) evaluator
//!
//! Payable to 60-64 year-olds whose partner receives the base pension. The
//! amount includes an OAS-equivalent portion, which is why its low-income
//! schedule reduces three dollars per increment.

use super::formula::EntitlementFormula;
use super::result::{
    BenefitResult, DetailKey, EligibilityResult, EntitlementResult, EntitlementType, ResultKey,
    ResultReason,
};
use crate::input::{FieldKey, ProcessedInput};
use crate::rates::RateTable;

const YEARS_REQUIRED: f64 = 10.0;

pub struct AlwBenefit<'a> {
    input: &'a ProcessedInput,
    rates: &'a RateTable,
}

impl<'a> AlwBenefit<'a> {
    pub fn new(input: &'a ProcessedInput, rates: &'a RateTable) -> Self {
        Self { input, rates }
    }

    pub fn missing_fields(input: &ProcessedInput) -> Vec<FieldKey> {
        let mut missing = Vec::new();
        if input.age.is_none() {
            missing.push(FieldKey::Age);
        }
        if !input.marital.provided() {
            missing.push(FieldKey::MaritalStatus);
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
        let age = self.input.age.unwrap_or(0.0);
        let years = self.input.years_in_canada_since18.unwrap_or(0.0);

        // Past the window, nothing else can rescue the claim.
        if age >= 65.0 {
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::Age,
                DetailKey::MustBe60To64,
            );
        }
        if !self.input.marital.partnered() {
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::Marital,
                DetailKey::MustBePartnered,
            );
        }
        if !self.input.partner_benefit_status.any_oas() {
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::Partner,
                DetailKey::MustHavePartnerWithOas,
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
        if years < YEARS_REQUIRED {
            let agreement_may_help = self.input.living_country.agreement()
                || self.input.ever_lived_social_country == Some(true);
            if agreement_may_help {
                if age < 60.0 {
                    return EligibilityResult::new(
                        ResultKey::Ineligible,
                        ResultReason::AgeYoung,
                        DetailKey::DependingOnAgreementWhen60,
                    );
                }
                return EligibilityResult::new(
                    ResultKey::Unavailable,
                    ResultReason::YearsInCanada,
                    DetailKey::DependingOnAgreement,
                );
            }
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::YearsInCanada,
                DetailKey::MustMeetYearReq,
            );
        }
        if age < 60.0 {
            // A 59 year-old should apply now so payments start at 60.
            let detail = if age >= 59.0 {
                DetailKey::EligibleWhen60ApplyNow
            } else {
                DetailKey::EligibleWhen60
            };
            return EligibilityResult::new(ResultKey::Ineligible, ResultReason::AgeYoung, detail);
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
        if income >= self.rates.max_alw_income {
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::Income,
                DetailKey::MustMeetIncomeReq,
            );
        }

        EligibilityResult::new(ResultKey::Eligible, ResultReason::None, DetailKey::Eligible)
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
            auto_enrollment: false,
        }
    }
}
