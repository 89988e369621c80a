//! The four benefit evaluators, the shared entitlement formula, and the
//! request orchestrator.

mod afs;
mod alw;
mod formula;
mod gis;
mod handler;
mod oas;
mod result;

pub use afs::AfsBenefit;
pub use alw::AlwBenefit;
pub use formula::{EntitlementFormula, GisSituation};
pub use gis::GisBenefit;
pub use handler::BenefitHandler;
pub use oas::OasBenefit;
pub use result::{
    BenefitKey, BenefitResponse, BenefitResult, BenefitResultsObject, DeferralOption, DetailKey,
    EligibilityResult, EntitlementResult, EntitlementType, ResultKey, ResultReason, SummaryObject,
    SummaryState,
};
