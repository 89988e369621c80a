//! Future eligibility projection
//!
//! Clients below the age bands want to know when they first qualify and for
//! how much. Projection assumes circumstances hold steady: residence stays in
//! the current country (so residency years accrue only in Canada), income and
//! marital status are unchanged.

use crate::benefits::{BenefitHandler, BenefitResponse};
use crate::input::{LivingCountry, RequestInput};
use crate::rates::RateTable;
use chrono::{Datelike, NaiveDate, Utc};

/// Residency years at the statutory full-pension mark.
const FULL_RESIDENCY_YEARS: f64 = 40.0;

/// When the base pension first becomes claimable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OasEligibilityProjection {
    pub age_of_eligibility: f64,
    /// Residency years accrued by that age
    pub years_of_residency: f64,
}

/// The allowance claim window, if one will exist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlwEligibilityProjection {
    pub age_of_eligibility: f64,
    pub years_of_residency: f64,
}

/// First age at which the base pension's age and residency requirements are
/// both met, or `None` if they never will be under current circumstances.
pub fn oas_eligibility(
    age: f64,
    years_in_canada: f64,
    lived_only_in_canada: bool,
    country: LivingCountry,
) -> Option<OasEligibilityProjection> {
    if lived_only_in_canada {
        return Some(OasEligibilityProjection {
            age_of_eligibility: age.max(65.0),
            years_of_residency: FULL_RESIDENCY_YEARS,
        });
    }
    match country {
        LivingCountry::Canada => {
            let age_of_eligibility = (age + (10.0 - years_in_canada).max(0.0)).max(65.0);
            let years_of_residency =
                (years_in_canada + (age_of_eligibility - age)).min(FULL_RESIDENCY_YEARS);
            Some(OasEligibilityProjection {
                age_of_eligibility,
                years_of_residency,
            })
        }
        // Abroad, residency years no longer accrue.
        _ => {
            if years_in_canada >= 20.0 {
                Some(OasEligibilityProjection {
                    age_of_eligibility: age.max(65.0),
                    years_of_residency: years_in_canada,
                })
            } else {
                None
            }
        }
    }
}

/// First age inside the 60-64 allowance window at which the residency
/// requirement is met, or `None` if the window closes first.
pub fn alw_eligibility(age: f64, years_in_canada: f64) -> Option<AlwEligibilityProjection> {
    if age >= 65.0 {
        return None;
    }
    let age_of_eligibility = (age + (10.0 - years_in_canada).max(0.0)).max(60.0);
    if age_of_eligibility >= 65.0 {
        return None;
    }
    Some(AlwEligibilityProjection {
        age_of_eligibility,
        years_of_residency: years_in_canada + (age_of_eligibility - age),
    })
}

/// Calendar date a given number of years from today.
pub fn future_date(years_from_now: u32) -> NaiveDate {
    let today = Utc::now().date_naive();
    let year = today.year() + years_from_now as i32;
    today
        .with_year(year)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(today))
}

/// One projected future evaluation.
#[derive(Debug, Clone)]
pub struct FutureEstimate {
    pub age: f64,
    pub date: NaiveDate,
    pub response: BenefitResponse,
}

/// Re-runs the engine at future ages with residency rolled forward.
pub struct FutureProjection<'a> {
    request: &'a RequestInput,
    rates: &'a RateTable,
}

impl<'a> FutureProjection<'a> {
    pub fn new(request: &'a RequestInput, rates: &'a RateTable) -> Self {
        Self { request, rates }
    }

    /// Evaluate as of a future age. `None` when the age is not in the future
    /// or the current age is unknown.
    pub fn at_age(&self, target_age: f64) -> Option<FutureEstimate> {
        let current_age = self.request.age?;
        if target_age <= current_age {
            return None;
        }
        let delta = target_age - current_age;

        let mut future = self.request.clone();
        future.age = Some(target_age);
        let in_canada = self
            .request
            .living_country
            .as_deref()
            .map(crate::input::classify_country)
            == Some(LivingCountry::Canada);
        if in_canada && self.request.lived_only_in_canada != Some(true) {
            if let Some(years) = self.request.years_in_canada_since18 {
                future.years_in_canada_since18 = Some((years + delta).min(FULL_RESIDENCY_YEARS));
            }
        }

        Some(FutureEstimate {
            age: target_age,
            date: future_date(delta.ceil() as u32),
            response: BenefitHandler::new(&future, self.rates).response(),
        })
    }

    /// The evaluation at the first age the base pension becomes claimable.
    pub fn first_oas_estimate(&self) -> Option<FutureEstimate> {
        let age = self.request.age?;
        let years = self.request.years_in_canada_since18.unwrap_or(0.0);
        let lived_only = self.request.lived_only_in_canada == Some(true);
        let country = self
            .request
            .living_country
            .as_deref()
            .map(crate::input::classify_country)
            .unwrap_or(LivingCountry::NoAgreement);
        let projection = oas_eligibility(age, years, lived_only, country)?;
        self.at_age(projection.age_of_eligibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benefits::ResultKey;
    use crate::input::{LegalStatus, MaritalStatus};

    #[test]
    fn test_oas_eligibility_in_canada_accrues_years() {
        let projection = oas_eligibility(55.0, 5.0, false, LivingCountry::Canada).unwrap();
        // Reaches 10 years at 60, but must still wait for 65
        assert_eq!(projection.age_of_eligibility, 65.0);
        assert_eq!(projection.years_of_residency, 15.0);
    }

    #[test]
    fn test_oas_eligibility_abroad_needs_twenty_years() {
        assert!(oas_eligibility(60.0, 19.0, false, LivingCountry::Agreement).is_none());
        let projection = oas_eligibility(60.0, 25.0, false, LivingCountry::NoAgreement).unwrap();
        assert_eq!(projection.age_of_eligibility, 65.0);
        assert_eq!(projection.years_of_residency, 25.0);
    }

    #[test]
    fn test_alw_window_can_close() {
        let projection = alw_eligibility(58.0, 4.0).unwrap();
        assert_eq!(projection.age_of_eligibility, 64.0);
        // Too few years to qualify before the window closes at 65
        assert!(alw_eligibility(61.0, 2.0).is_none());
        assert!(alw_eligibility(65.0, 40.0).is_none());
    }

    #[test]
    fn test_future_estimate_rolls_residency_forward() {
        let rates = RateTable::q2_2022();
        let request = RequestInput {
            income: Some(10_000.0),
            age: Some(55.0),
            marital_status: Some(MaritalStatus::Single),
            living_country: Some("Canada".to_string()),
            legal_status: Some(LegalStatus::CanadianCitizen),
            years_in_canada_since18: Some(20.0),
            lived_only_in_canada: Some(false),
            ..Default::default()
        };
        let projection = FutureProjection::new(&request, &rates);
        let estimate = projection.first_oas_estimate().unwrap();
        assert_eq!(estimate.age, 65.0);
        let oas = &estimate.response.results.oas;
        assert_eq!(oas.eligibility.result, ResultKey::Eligible);
        // 30 of 40 years by then
        assert_eq!(oas.entitlement.result, 486.5);
    }

    #[test]
    fn test_at_age_rejects_past_ages() {
        let rates = RateTable::q2_2022();
        let request = RequestInput {
            age: Some(66.0),
            ..Default::default()
        };
        let projection = FutureProjection::new(&request, &rates);
        assert!(projection.at_age(65.0).is_none());
        assert!(projection.at_age(66.0).is_none());
    }
}
