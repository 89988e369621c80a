//! End-to-end scenarios through the full handler, using the 2022 Q2
//! reference rates.

use approx::assert_abs_diff_eq;
use benefit_estimator::benefits::{ResultKey, ResultReason, SummaryState};
use benefit_estimator::input::{
    FieldKey, LegalStatus, MaritalStatus, PartnerBenefitStatus,
};
use benefit_estimator::{BenefitHandler, BenefitResponse, RateTable, RequestInput};

fn evaluate(request: &RequestInput) -> BenefitResponse {
    let rates = RateTable::q2_2022();
    BenefitHandler::new(request, &rates).response()
}

fn canadian_citizen() -> RequestInput {
    RequestInput {
        living_country: Some("Canada".to_string()),
        legal_status: Some(LegalStatus::CanadianCitizen),
        lived_only_in_canada: Some(true),
        ..Default::default()
    }
}

#[test]
fn single_senior_low_income() {
    let request = RequestInput {
        income: Some(10_000.0),
        age: Some(66.0),
        marital_status: Some(MaritalStatus::Single),
        ..canadian_citizen()
    };
    let response = evaluate(&request);
    assert_eq!(response.summary.state, SummaryState::AvailableEligible);
    assert_eq!(response.results.oas.entitlement.result, 648.67);
    assert_eq!(response.results.gis.entitlement.result, 402.79);
    assert_abs_diff_eq!(response.summary.entitlement_sum, 1051.46, epsilon = 1e-9);
}

#[test]
fn partial_pension_at_half_residency() {
    let request = RequestInput {
        income: Some(30_000.0),
        age: Some(67.0),
        marital_status: Some(MaritalStatus::Single),
        lived_only_in_canada: Some(false),
        years_in_canada_since18: Some(20.0),
        ..canadian_citizen()
    };
    let response = evaluate(&request);
    // Half of 40 years of residency pays half the full pension
    assert_eq!(response.results.oas.entitlement.result, 324.33);
}

#[test]
fn allowance_for_spouse_of_pensioner() {
    let request = RequestInput {
        income: Some(15_000.0),
        partner_income: Some(5_000.0),
        age: Some(62.0),
        marital_status: Some(MaritalStatus::Married),
        partner_benefit_status: Some(PartnerBenefitStatus::OasGis),
        ..canadian_citizen()
    };
    let response = evaluate(&request);
    assert_eq!(response.results.alw.eligibility.result, ResultKey::Eligible);
    assert_eq!(response.results.alw.entitlement.result, 341.68);
    // Too young for the pension or supplement
    assert_eq!(
        response.results.oas.eligibility.reason,
        ResultReason::AgeYoung64
    );
    assert_eq!(response.results.gis.eligibility.reason, ResultReason::Oas);
}

#[test]
fn survivor_allowance_for_widow() {
    let request = RequestInput {
        income: Some(20_000.0),
        age: Some(62.0),
        marital_status: Some(MaritalStatus::Widowed),
        ..canadian_citizen()
    };
    let response = evaluate(&request);
    assert_eq!(response.results.afs.eligibility.result, ResultKey::Eligible);
    assert_eq!(response.results.afs.entitlement.result, 270.73);
    assert_eq!(response.results.alw.eligibility.reason, ResultReason::Marital);
}

#[test]
fn nine_years_without_agreement_history() {
    let request = RequestInput {
        income: Some(10_000.0),
        age: Some(66.0),
        marital_status: Some(MaritalStatus::Single),
        lived_only_in_canada: Some(false),
        years_in_canada_since18: Some(9.0),
        ever_lived_social_country: Some(false),
        ..canadian_citizen()
    };
    let response = evaluate(&request);
    assert_eq!(
        response.results.oas.eligibility.result,
        ResultKey::Ineligible
    );
    assert_eq!(
        response.results.oas.eligibility.reason,
        ResultReason::YearsInCanada
    );
    assert_eq!(response.results.gis.eligibility.reason, ResultReason::Oas);
    assert_eq!(response.summary.state, SummaryState::AvailableIneligible);
}

#[test]
fn sponsored_immigrant_needs_review() {
    let request = RequestInput {
        income: Some(10_000.0),
        age: Some(66.0),
        marital_status: Some(MaritalStatus::Single),
        legal_status: Some(LegalStatus::Sponsored),
        ..canadian_citizen()
    };
    let response = evaluate(&request);
    assert_eq!(
        response.results.oas.eligibility.result,
        ResultKey::Unavailable
    );
    assert_eq!(
        response.results.oas.eligibility.reason,
        ResultReason::LegalStatus
    );
    assert_eq!(
        response.results.gis.eligibility.result,
        ResultKey::Unavailable
    );
    assert_eq!(response.summary.state, SummaryState::Unavailable);
}

#[test]
fn deferral_election_to_seventy() {
    let request = RequestInput {
        income: Some(30_000.0),
        age: Some(70.0),
        marital_status: Some(MaritalStatus::Single),
        oas_defer: Some(true),
        oas_age: Some(70.0),
        ..canadian_citizen()
    };
    let response = evaluate(&request);
    assert_eq!(response.results.oas.entitlement.result, 882.19);
}

#[test]
fn missing_income_defers_the_verdict() {
    let request = RequestInput {
        age: Some(66.0),
        marital_status: Some(MaritalStatus::Single),
        ..canadian_citizen()
    };
    let response = evaluate(&request);
    assert_eq!(
        response.results.oas.eligibility.result,
        ResultKey::IncomeDependent
    );
    assert_eq!(response.summary.state, SummaryState::MoreInfo);
    assert!(response.summary.missing_fields.contains(&FieldKey::Income));
    assert_eq!(response.summary.entitlement_sum, 0.0);
}

#[test]
fn response_serializes_in_camel_case() {
    let request = RequestInput {
        income: Some(10_000.0),
        age: Some(66.0),
        marital_status: Some(MaritalStatus::Single),
        ..canadian_citizen()
    };
    let response = evaluate(&request);
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["summary"]["state"], "availableEligible");
    assert!(json["results"]["oas"]["entitlement"]["result"].is_number());
    assert_eq!(json["results"]["gis"]["eligibility"]["result"], "eligible");
    assert!(json["summary"]["entitlementSum"].is_number());
}

#[test]
fn request_deserializes_from_camel_case() {
    let json = r#"{
        "income": 10000,
        "age": 66,
        "maritalStatus": "single",
        "livingCountry": "Canada",
        "legalStatus": "canadianCitizen",
        "livedOnlyInCanada": true
    }"#;
    let request: RequestInput = serde_json::from_str(json).unwrap();
    let response = evaluate(&request);
    assert_eq!(response.results.gis.entitlement.result, 402.79);
}
