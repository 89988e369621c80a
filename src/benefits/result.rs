//! Result types shared by all benefit evaluators
//!
//! Every benefit answers the same two questions: is the client eligible, and
//! if so for how much. The shapes here serialize in camelCase as part of the
//! public API contract.

use crate::input::FieldKey;
use serde::{Deserialize, Serialize};

/// Top-level eligibility verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultKey {
    Eligible,
    Ineligible,
    /// Eligibility cannot be settled by the engine (e.g. depends on an
    /// international agreement review)
    Unavailable,
    /// More fields are required before a verdict is possible
    MoreInfo,
    /// All non-income criteria pass; the verdict waits on income
    IncomeDependent,
}

/// Why the verdict came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultReason {
    /// No disqualifying reason
    None,
    /// Outside the benefit's age band
    Age,
    /// Too young; will age into the band
    AgeYoung,
    /// Still in the 60-64 window of a 65+ benefit
    AgeYoung64,
    /// Eligible at standard age
    Age65To69,
    /// Eligible past the deferral window
    Age70AndOver,
    Marital,
    Income,
    IncomeMissing,
    LegalStatus,
    LivingCountry,
    YearsInCanada,
    /// Blocked by the OAS verdict this benefit depends on
    Oas,
    /// Partner does not receive the required benefit
    Partner,
    /// Required fields are missing
    MoreInfo,
}

/// Client-facing detail message key attached to each verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DetailKey {
    Eligible,
    EligibleDependingOnIncome,
    /// Eligible in principle, but income puts the entitlement at zero
    EligibleIncomeTooHigh,
    EligibleWhen60ApplyNow,
    EligibleWhen60,
    EligibleWhen65,
    MustBe60To64,
    MustBeInCanada,
    MustBeWidowed,
    MustBePartnered,
    MustHavePartnerWithOas,
    MustMeetIncomeReq,
    MustMeetYearReq,
    MustBeOasEligible,
    DependingOnAgreement,
    DependingOnAgreementWhen60,
    DependingOnAgreementWhen65,
    DependingOnLegal,
    DependingOnLegalSponsored,
    OasUnavailable,
    AdditionalInfoNeeded,
}

/// Eligibility verdict with its reason and client-facing detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResult {
    pub result: ResultKey,
    pub reason: ResultReason,
    pub detail: DetailKey,
}

impl EligibilityResult {
    pub fn new(result: ResultKey, reason: ResultReason, detail: DetailKey) -> Self {
        Self {
            result,
            reason,
            detail,
        }
    }

    pub fn eligible(&self) -> bool {
        matches!(self.result, ResultKey::Eligible | ResultKey::IncomeDependent)
    }
}

/// How much of the maximum the entitlement represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntitlementType {
    /// No entitlement payable
    None,
    /// Prorated by residency years
    Partial,
    Full,
    /// Cannot be computed by the engine
    Unavailable,
}

/// One row of the OAS deferral comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeferralOption {
    /// Pension start age
    pub age: u32,
    /// Monthly amount at that start age
    pub amount: f64,
}

/// Monthly entitlement with its qualifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementResult {
    /// Monthly amount in dollars
    pub result: f64,
    #[serde(rename = "type")]
    pub entitlement_type: EntitlementType,
    /// Monthly recovery tax deducted from the amount (OAS only)
    pub clawback: f64,
    /// Monthly amount after the age-75 permanent increase; equals `result`
    /// once the client is 75 or older
    pub result_at75: f64,
    /// Amounts at each available deferral start age (OAS only)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub deferral: Vec<DeferralOption>,
    /// Whether enrollment happens without an application
    pub auto_enrollment: bool,
}

impl EntitlementResult {
    /// A zero entitlement with no qualifiers, for ineligible verdicts.
    pub fn none() -> Self {
        Self {
            result: 0.0,
            entitlement_type: EntitlementType::None,
            clawback: 0.0,
            result_at75: 0.0,
            deferral: Vec::new(),
            auto_enrollment: false,
        }
    }

    /// An entitlement the engine cannot compute.
    pub fn unavailable() -> Self {
        Self {
            entitlement_type: EntitlementType::Unavailable,
            ..Self::none()
        }
    }
}

/// Identifies one of the four benefits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BenefitKey {
    Oas,
    Gis,
    Alw,
    Afs,
}

/// Combined verdict and amount for one benefit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitResult {
    pub eligibility: EligibilityResult,
    pub entitlement: EntitlementResult,
}

/// Results for all four benefits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitResultsObject {
    pub oas: BenefitResult,
    pub gis: BenefitResult,
    pub alw: BenefitResult,
    pub afs: BenefitResult,
}

impl BenefitResultsObject {
    pub fn iter(&self) -> impl Iterator<Item = (BenefitKey, &BenefitResult)> {
        [
            (BenefitKey::Oas, &self.oas),
            (BenefitKey::Gis, &self.gis),
            (BenefitKey::Alw, &self.alw),
            (BenefitKey::Afs, &self.afs),
        ]
        .into_iter()
    }
}

/// Overall outcome across the four benefits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SummaryState {
    /// Required fields are missing; results are provisional
    MoreInfo,
    /// At least one verdict needs a review the engine cannot perform
    Unavailable,
    AvailableEligible,
    AvailableIneligible,
}

/// Roll-up of the per-benefit results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryObject {
    pub state: SummaryState,
    /// Sum of all positive monthly entitlements
    pub entitlement_sum: f64,
    /// True when some benefit is eligible but pays nothing at this income
    pub zero_entitlements: bool,
    /// Fields that must be supplied to complete the estimate
    pub missing_fields: Vec<FieldKey>,
}

/// Everything the engine returns for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenefitResponse {
    pub results: BenefitResultsObject,
    pub summary: SummaryObject,
}
