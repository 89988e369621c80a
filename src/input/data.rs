//! Raw request fields and their enumerated values
//!
//! These are the values the validation layer hands to the engine. Field names
//! serialize in camelCase to match the public API contract.

use serde::{Deserialize, Serialize};

/// Marital status as supplied by the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaritalStatus {
    Single,
    Married,
    CommonLaw,
    Widowed,
    Divorced,
    Separated,
}

/// Legal/residency status as supplied by the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegalStatus {
    CanadianCitizen,
    PermanentResident,
    IndianStatus,
    Sponsored,
    Other,
}

/// What benefits the client's partner currently receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartnerBenefitStatus {
    /// Partner receives the OAS pension only
    Oas,
    /// Partner receives both OAS and GIS
    OasGis,
    /// Partner receives the Allowance
    Alw,
    /// Partner receives none of these benefits
    None,
    /// Client does not know; requires follow-up
    HelpMe,
}

/// Three-way classification of the country of residence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LivingCountry {
    Canada,
    /// A country with a social security agreement
    Agreement,
    /// A country without a social security agreement
    NoAgreement,
}

/// Keys for every input field the engine can require.
///
/// Returned in summary objects to tell the caller which fields are still
/// needed before a complete estimate is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    Income,
    Age,
    OasDefer,
    OasAge,
    MaritalStatus,
    LivingCountry,
    LegalStatus,
    YearsInCanadaSince18,
    EverLivedSocialCountry,
    PartnerBenefitStatus,
    PartnerIncome,
}

/// What the API layer hands to the engine after schema validation.
///
/// Every field is optional: partial requests are valid and produce
/// `MoreInfo` results rather than errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestInput {
    /// Personal annual net income
    pub income: Option<f64>,
    /// Age in years; may be fractional for month precision
    pub age: Option<f64>,
    pub marital_status: Option<MaritalStatus>,
    /// Raw country name; classified during normalization
    pub living_country: Option<String>,
    pub legal_status: Option<LegalStatus>,
    /// Free-text description, only when `legal_status` is `Other`
    pub legal_status_other: Option<String>,
    pub years_in_canada_since18: Option<f64>,
    /// Shortcut: client has resided in Canada their whole adult life
    pub lived_only_in_canada: Option<bool>,
    /// Whether the client ever lived in an agreement country; only relevant
    /// when residency years fall below the requirement
    pub ever_lived_social_country: Option<bool>,
    pub partner_benefit_status: Option<PartnerBenefitStatus>,
    /// Partner's annual net income, added to the client's when partnered
    pub partner_income: Option<f64>,
    /// Whether the client elects to defer their OAS pension
    pub oas_defer: Option<bool>,
    /// Target pension start age when deferring (65-70)
    pub oas_age: Option<f64>,
}
