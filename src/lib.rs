//! Benefit eligibility and entitlement estimation engine.
//!
//! Estimates eligibility and monthly entitlement amounts for four interlocking
//! means-tested retirement benefits:
//!
//! - **OAS**: the base pension (age 65+, residency-tested, deferrable to 70)
//! - **GIS**: the income-tested supplement for OAS pensioners
//! - **ALW**: the allowance for 60-64 year old spouses of OAS pensioners
//! - **ALWS**: the allowance for 60-64 year old widowed survivors
//!
//! The engine is synchronous and side-effect free: every evaluator is a pure
//! function of a [`ProcessedInput`](input::ProcessedInput) and an immutable
//! [`RateTable`](rates::RateTable) of legislated constants. Validation, HTTP
//! routing and presentation are external collaborators.

pub mod benefits;
pub mod error;
pub mod input;
pub mod projection;
pub mod rates;
pub mod rounding;

pub use benefits::{BenefitHandler, BenefitResponse, BenefitResultsObject, SummaryObject};
pub use error::RateTableError;
pub use input::{ProcessedInput, RequestInput};
pub use rates::{DerivedRates, RateTable};
pub use rounding::round2;
