//! Survivor allowance (AFS) evaluator
//!
//! Payable to 60-64 year-old widowed clients. Unlike the other income-tested
//! benefits, an income at or above the ceiling leaves the client eligible in
//! principle with a zero entitlement, so the response can say "you qualify,
//! but not at this income" rather than a flat refusal.

use super::formula::EntitlementFormula;
use super::result::{
    BenefitResult, DetailKey, EligibilityResult, EntitlementResult, EntitlementType, ResultKey,
    ResultReason,
};
use crate::input::{FieldKey, ProcessedInput};
use crate::rates::RateTable;

const YEARS_REQUIRED: f64 = 10.0;

pub struct AfsBenefit<'a> {
    input: &'a ProcessedInput,
    rates: &'a RateTable,
}

impl<'a> AfsBenefit<'a> {
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
        let in_age_band = (60.0..65.0).contains(&age);

        if !self.input.marital.widowed() {
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::Marital,
                DetailKey::MustBeWidowed,
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
                if in_age_band {
                    return EligibilityResult::new(
                        ResultKey::Unavailable,
                        ResultReason::YearsInCanada,
                        DetailKey::DependingOnAgreement,
                    );
                }
                if age < 60.0 {
                    return EligibilityResult::new(
                        ResultKey::Ineligible,
                        ResultReason::AgeYoung,
                        DetailKey::DependingOnAgreementWhen60,
                    );
                }
                return EligibilityResult::new(
                    ResultKey::Ineligible,
                    ResultReason::Age,
                    DetailKey::MustBe60To64,
                );
            }
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::YearsInCanada,
                DetailKey::MustMeetYearReq,
            );
        }
        if age >= 65.0 {
            return EligibilityResult::new(
                ResultKey::Ineligible,
                ResultReason::Age,
                DetailKey::MustBe60To64,
            );
        }
        if age < 60.0 {
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
        if income >= self.rates.max_afs_income {
            // Still a valid claim; the entitlement is just zero at this income.
            return EligibilityResult::new(
                ResultKey::Eligible,
                ResultReason::Income,
                DetailKey::EligibleIncomeTooHigh,
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
        if eligibility.reason == ResultReason::Income {
            return EntitlementResult::none();
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{LegalStatus, MaritalStatus, RequestInput};

    fn evaluate(request: RequestInput) -> BenefitResult {
        let rates = RateTable::q2_2022();
        let input = ProcessedInput::from_request(&request);
        AfsBenefit::new(&input, &rates).result()
    }

    fn base_request() -> RequestInput {
        RequestInput {
            income: Some(20_000.0),
            age: Some(62.0),
            marital_status: Some(MaritalStatus::Widowed),
            living_country: Some("Canada".to_string()),
            legal_status: Some(LegalStatus::CanadianCitizen),
            lived_only_in_canada: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn test_survivor_at_20000() {
        let result = evaluate(base_request());
        assert_eq!(result.eligibility.result, ResultKey::Eligible);
        assert_eq!(result.entitlement.result, 270.73);
    }

    #[test]
    fn test_not_widowed_is_ineligible() {
        let mut request = base_request();
        request.marital_status = Some(MaritalStatus::Divorced);
        let result = evaluate(request);
        assert_eq!(result.eligibility.result, ResultKey::Ineligible);
        assert_eq!(result.eligibility.reason, ResultReason::Marital);
        assert_eq!(result.eligibility.detail, DetailKey::MustBeWidowed);
    }

    #[test]
    fn test_income_at_ceiling_stays_eligible_with_zero() {
        let mut request = base_request();
        request.income = Some(26_496.0);
        let result = evaluate(request);
        assert_eq!(result.eligibility.result, ResultKey::Eligible);
        assert_eq!(result.eligibility.reason, ResultReason::Income);
        assert_eq!(result.entitlement.result, 0.0);
        assert_eq!(result.entitlement.entitlement_type, EntitlementType::None);
    }

    #[test]
    fn test_zero_income_pays_survivor_maximum() {
        let mut request = base_request();
        request.income = Some(0.0);
        let result = evaluate(request);
        assert_eq!(result.entitlement.result, 1468.47);
    }

    #[test]
    fn test_age_65_is_out_of_band() {
        let mut request = base_request();
        request.age = Some(65.0);
        let result = evaluate(request);
        assert_eq!(result.eligibility.result, ResultKey::Ineligible);
        assert_eq!(result.eligibility.reason, ResultReason::Age);
    }

    #[test]
    fn test_short_residency_no_agreement_is_ineligible() {
        let mut request = base_request();
        request.lived_only_in_canada = Some(false);
        request.years_in_canada_since18 = Some(6.0);
        request.ever_lived_social_country = Some(false);
        let result = evaluate(request);
        assert_eq!(result.eligibility.result, ResultKey::Ineligible);
        assert_eq!(result.eligibility.reason, ResultReason::YearsInCanada);
    }
}
