//! Request normalization
//!
//! Converts a raw [`RequestInput`] into the [`ProcessedInput`] the evaluators
//! consume: country names classified, household income combined, residency
//! years resolved from shortcuts and clamped to what is actually possible.

use super::countries::classify_country;
use super::data::RequestInput;
use super::helpers::{
    LegalStatusHelper, LivingCountryHelper, MaritalStatusHelper, PartnerBenefitStatusHelper,
};

/// Full adult-life residency counts as the statutory maximum.
const FULL_RESIDENCY_YEARS: f64 = 40.0;

/// Normalized view of one request, ready for the eligibility trees.
#[derive(Debug, Clone)]
pub struct ProcessedInput {
    /// Household annual net income: personal income plus the partner's when
    /// partnered. `None` until every required income field is supplied.
    pub income: Option<f64>,
    pub age: Option<f64>,
    pub marital: MaritalStatusHelper,
    pub living_country: LivingCountryHelper,
    pub legal_status: LegalStatusHelper,
    /// Residency years since 18, after shortcut resolution and clamping
    pub years_in_canada_since18: Option<f64>,
    pub lived_only_in_canada: bool,
    pub ever_lived_social_country: Option<bool>,
    pub partner_benefit_status: PartnerBenefitStatusHelper,
    pub oas_defer: bool,
    /// Elected pension start age; 65 when not deferring
    pub oas_age: f64,
}

impl ProcessedInput {
    pub fn from_request(request: &RequestInput) -> Self {
        let marital = MaritalStatusHelper::new(request.marital_status);

        // Means tests run against household income. A partnered client with
        // no partner income supplied has an incomplete picture, so the
        // combined income stays unknown.
        let income = if marital.partnered() {
            match (request.income, request.partner_income) {
                (Some(own), Some(partner)) => Some(own + partner),
                _ => None,
            }
        } else {
            request.income
        };

        let lived_only_in_canada = request.lived_only_in_canada.unwrap_or(false);
        let years_in_canada_since18 = if lived_only_in_canada {
            Some(FULL_RESIDENCY_YEARS)
        } else {
            request.years_in_canada_since18.map(|years| {
                let mut clamped = years.min(FULL_RESIDENCY_YEARS);
                // Residency since 18 cannot exceed adult years lived.
                if let Some(age) = request.age {
                    clamped = clamped.min((age - 18.0).max(0.0));
                }
                if clamped != years {
                    log::debug!("clamped residency years {} -> {}", years, clamped);
                }
                clamped
            })
        };

        let oas_defer = request.oas_defer.unwrap_or(false);
        let oas_age = if oas_defer {
            request.oas_age.unwrap_or(65.0).clamp(65.0, 70.0)
        } else {
            65.0
        };

        Self {
            income,
            age: request.age,
            marital,
            living_country: LivingCountryHelper::new(
                request.living_country.as_deref().map(classify_country),
            ),
            legal_status: LegalStatusHelper::new(request.legal_status),
            years_in_canada_since18,
            lived_only_in_canada,
            ever_lived_social_country: request.ever_lived_social_country,
            partner_benefit_status: PartnerBenefitStatusHelper::new(request.partner_benefit_status),
            oas_defer,
            oas_age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::data::{LivingCountry, MaritalStatus};

    #[test]
    fn test_income_combines_when_partnered() {
        let request = RequestInput {
            income: Some(10_000.0),
            partner_income: Some(5_000.0),
            marital_status: Some(MaritalStatus::Married),
            ..Default::default()
        };
        let processed = ProcessedInput::from_request(&request);
        assert_eq!(processed.income, Some(15_000.0));
    }

    #[test]
    fn test_income_incomplete_without_partner_income() {
        let request = RequestInput {
            income: Some(10_000.0),
            marital_status: Some(MaritalStatus::CommonLaw),
            ..Default::default()
        };
        let processed = ProcessedInput::from_request(&request);
        assert_eq!(processed.income, None);
    }

    #[test]
    fn test_single_income_passes_through() {
        let request = RequestInput {
            income: Some(10_000.0),
            marital_status: Some(MaritalStatus::Single),
            ..Default::default()
        };
        let processed = ProcessedInput::from_request(&request);
        assert_eq!(processed.income, Some(10_000.0));
    }

    #[test]
    fn test_lived_only_in_canada_resolves_full_residency() {
        let request = RequestInput {
            lived_only_in_canada: Some(true),
            ..Default::default()
        };
        let processed = ProcessedInput::from_request(&request);
        assert_eq!(processed.years_in_canada_since18, Some(40.0));
    }

    #[test]
    fn test_residency_years_clamped() {
        let request = RequestInput {
            age: Some(65.0),
            years_in_canada_since18: Some(55.0),
            ..Default::default()
        };
        let processed = ProcessedInput::from_request(&request);
        assert_eq!(processed.years_in_canada_since18, Some(40.0));

        let request = RequestInput {
            age: Some(50.0),
            years_in_canada_since18: Some(38.0),
            ..Default::default()
        };
        let processed = ProcessedInput::from_request(&request);
        // 50 - 18 adult years caps below the claimed residency
        assert_eq!(processed.years_in_canada_since18, Some(32.0));
    }

    #[test]
    fn test_country_classification() {
        let request = RequestInput {
            living_country: Some("Italy".to_string()),
            ..Default::default()
        };
        let processed = ProcessedInput::from_request(&request);
        assert_eq!(processed.living_country.value, Some(LivingCountry::Agreement));
    }

    #[test]
    fn test_deferral_defaults() {
        let processed = ProcessedInput::from_request(&RequestInput::default());
        assert!(!processed.oas_defer);
        assert_eq!(processed.oas_age, 65.0);

        let request = RequestInput {
            oas_defer: Some(true),
            oas_age: Some(72.0),
            ..Default::default()
        };
        let processed = ProcessedInput::from_request(&request);
        assert_eq!(processed.oas_age, 70.0);
    }
}
