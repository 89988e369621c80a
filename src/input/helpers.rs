//! Field classification helpers
//!
//! Each helper wraps one raw field value and answers the semantic questions
//! the eligibility trees ask, so the trees never re-implement enum
//! comparisons. All helpers are pure and total: an absent value classifies as
//! "not provided" rather than erroring, because partial requests are valid.

use super::data::{LegalStatus, LivingCountry, MaritalStatus, PartnerBenefitStatus};
use serde::{Deserialize, Serialize};

/// Classifies marital status into the categories the benefit rules care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaritalStatusHelper {
    pub value: Option<MaritalStatus>,
}

impl MaritalStatusHelper {
    pub fn new(value: Option<MaritalStatus>) -> Self {
        Self { value }
    }

    /// Was any value supplied at all?
    pub fn provided(&self) -> bool {
        self.value.is_some()
    }

    /// Single-equivalent for calculation purposes: single, widowed,
    /// divorced or separated.
    pub fn single(&self) -> bool {
        matches!(
            self.value,
            Some(MaritalStatus::Single)
                | Some(MaritalStatus::Widowed)
                | Some(MaritalStatus::Divorced)
                | Some(MaritalStatus::Separated)
        )
    }

    /// Partnered-equivalent: married or common-law.
    pub fn partnered(&self) -> bool {
        matches!(
            self.value,
            Some(MaritalStatus::Married) | Some(MaritalStatus::CommonLaw)
        )
    }

    pub fn widowed(&self) -> bool {
        self.value == Some(MaritalStatus::Widowed)
    }
}

/// Classifies legal status into citizen-equivalent / sponsored / other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalStatusHelper {
    pub value: Option<LegalStatus>,
}

impl LegalStatusHelper {
    pub fn new(value: Option<LegalStatus>) -> Self {
        Self { value }
    }

    pub fn provided(&self) -> bool {
        self.value.is_some()
    }

    /// Citizen-equivalent, including permanent residents and status-card
    /// holders.
    pub fn canadian(&self) -> bool {
        matches!(
            self.value,
            Some(LegalStatus::CanadianCitizen)
                | Some(LegalStatus::PermanentResident)
                | Some(LegalStatus::IndianStatus)
        )
    }

    pub fn sponsored(&self) -> bool {
        self.value == Some(LegalStatus::Sponsored)
    }

    pub fn other(&self) -> bool {
        self.value == Some(LegalStatus::Other)
    }
}

/// Classifies the country of residence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LivingCountryHelper {
    pub value: Option<LivingCountry>,
}

impl LivingCountryHelper {
    pub fn new(value: Option<LivingCountry>) -> Self {
        Self { value }
    }

    pub fn provided(&self) -> bool {
        self.value.is_some()
    }

    pub fn canada(&self) -> bool {
        self.value == Some(LivingCountry::Canada)
    }

    pub fn agreement(&self) -> bool {
        self.value == Some(LivingCountry::Agreement)
    }

    pub fn no_agreement(&self) -> bool {
        self.value == Some(LivingCountry::NoAgreement)
    }
}

/// Classifies what the partner currently receives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PartnerBenefitStatusHelper {
    pub value: Option<PartnerBenefitStatus>,
}

impl PartnerBenefitStatusHelper {
    pub fn new(value: Option<PartnerBenefitStatus>) -> Self {
        Self { value }
    }

    pub fn provided(&self) -> bool {
        self.value.is_some()
    }

    /// Partner receives the OAS pension in any form.
    pub fn any_oas(&self) -> bool {
        matches!(
            self.value,
            Some(PartnerBenefitStatus::Oas) | Some(PartnerBenefitStatus::OasGis)
        )
    }

    /// Partner receives the Allowance.
    pub fn alw(&self) -> bool {
        self.value == Some(PartnerBenefitStatus::Alw)
    }

    pub fn none(&self) -> bool {
        self.value == Some(PartnerBenefitStatus::None)
    }

    /// Client could not answer; a human needs to follow up.
    pub fn unknown(&self) -> bool {
        self.value == Some(PartnerBenefitStatus::HelpMe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marital_classification() {
        let widowed = MaritalStatusHelper::new(Some(MaritalStatus::Widowed));
        assert!(widowed.single());
        assert!(widowed.widowed());
        assert!(!widowed.partnered());

        let married = MaritalStatusHelper::new(Some(MaritalStatus::Married));
        assert!(married.partnered());
        assert!(!married.single());

        let absent = MaritalStatusHelper::new(None);
        assert!(!absent.provided());
        assert!(!absent.single());
        assert!(!absent.partnered());
    }

    #[test]
    fn test_legal_classification() {
        assert!(LegalStatusHelper::new(Some(LegalStatus::IndianStatus)).canadian());
        assert!(LegalStatusHelper::new(Some(LegalStatus::PermanentResident)).canadian());
        assert!(LegalStatusHelper::new(Some(LegalStatus::Sponsored)).sponsored());
        assert!(!LegalStatusHelper::new(Some(LegalStatus::Other)).canadian());
    }

    #[test]
    fn test_partner_benefit_classification() {
        assert!(PartnerBenefitStatusHelper::new(Some(PartnerBenefitStatus::Oas)).any_oas());
        assert!(PartnerBenefitStatusHelper::new(Some(PartnerBenefitStatus::OasGis)).any_oas());
        assert!(!PartnerBenefitStatusHelper::new(Some(PartnerBenefitStatus::Alw)).any_oas());
        assert!(PartnerBenefitStatusHelper::new(Some(PartnerBenefitStatus::HelpMe)).unknown());
        assert!(!PartnerBenefitStatusHelper::new(None).any_oas());
    }
}
