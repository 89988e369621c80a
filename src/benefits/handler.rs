//! Request orchestration
//!
//! Runs the four evaluators in dependency order (the supplement needs the
//! pension verdict), collects which fields are still missing, and rolls the
//! per-benefit results into a single summary.

use super::afs::AfsBenefit;
use super::alw::AlwBenefit;
use super::gis::GisBenefit;
use super::oas::OasBenefit;
use super::result::{
    BenefitResponse, BenefitResultsObject, ResultKey, SummaryObject, SummaryState,
};
use crate::input::{FieldKey, ProcessedInput, RequestInput};
use crate::rates::RateTable;

pub struct BenefitHandler<'a> {
    rates: &'a RateTable,
    request: &'a RequestInput,
    input: ProcessedInput,
}

impl<'a> BenefitHandler<'a> {
    pub fn new(request: &'a RequestInput, rates: &'a RateTable) -> Self {
        Self {
            rates,
            request,
            input: ProcessedInput::from_request(request),
        }
    }

    /// Evaluate every benefit and summarize.
    pub fn response(&self) -> BenefitResponse {
        let oas = OasBenefit::new(&self.input, self.rates).result();
        let gis = GisBenefit::new(&self.input, self.rates, &oas.eligibility).result();
        let alw = AlwBenefit::new(&self.input, self.rates).result();
        let afs = AfsBenefit::new(&self.input, self.rates).result();

        let results = BenefitResultsObject { oas, gis, alw, afs };
        let summary = self.summarize(&results);
        log::debug!(
            "summary state {:?}, entitlement sum {:.2}",
            summary.state,
            summary.entitlement_sum
        );

        BenefitResponse { results, summary }
    }

    /// Every field still needed for a complete estimate, in question order.
    fn missing_fields(&self) -> Vec<FieldKey> {
        let mut missing = Vec::new();
        let mut push = |key: FieldKey| {
            if !missing.contains(&key) {
                missing.push(key);
            }
        };

        if self.request.income.is_none() {
            push(FieldKey::Income);
        }
        for key in OasBenefit::missing_fields(&self.input) {
            push(key);
        }
        for key in GisBenefit::missing_fields(&self.input) {
            push(key);
        }
        for key in AlwBenefit::missing_fields(&self.input) {
            push(key);
        }
        for key in AfsBenefit::missing_fields(&self.input) {
            push(key);
        }
        if self.input.marital.partnered() && self.request.partner_income.is_none() {
            push(FieldKey::PartnerIncome);
        }
        if self.input.oas_defer && self.request.oas_age.is_none() {
            push(FieldKey::OasAge);
        }
        missing
    }

    fn summarize(&self, results: &BenefitResultsObject) -> SummaryObject {
        let missing_fields = self.missing_fields();

        let any_eligible = results.iter().any(|(_, r)| r.eligibility.eligible());
        let any_unavailable = results
            .iter()
            .any(|(_, r)| r.eligibility.result == ResultKey::Unavailable);

        // Any outstanding field, income included, keeps the estimate
        // provisional. Per-benefit verdicts still say as much as they can
        // (income-dependent rather than a blanket "more info").
        let state = if !missing_fields.is_empty() {
            SummaryState::MoreInfo
        } else if any_eligible {
            SummaryState::AvailableEligible
        } else if any_unavailable {
            SummaryState::Unavailable
        } else {
            SummaryState::AvailableIneligible
        };

        let entitlement_sum = results
            .iter()
            .map(|(_, r)| r.entitlement.result.max(0.0))
            .sum::<f64>();
        let entitlement_sum = crate::rounding::round2(entitlement_sum);

        let zero_entitlements = results.iter().any(|(_, r)| {
            r.eligibility.result == ResultKey::Eligible && r.entitlement.result == 0.0
        });

        SummaryObject {
            state,
            entitlement_sum,
            zero_entitlements,
            missing_fields,
        }
    }
}
