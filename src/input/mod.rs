//! Request intake: raw fields, classification helpers, and normalization.

mod countries;
mod data;
mod helpers;
mod processed;

pub use countries::classify_country;
pub use data::{
    FieldKey, LegalStatus, LivingCountry, MaritalStatus, PartnerBenefitStatus, RequestInput,
};
pub use helpers::{
    LegalStatusHelper, LivingCountryHelper, MaritalStatusHelper, PartnerBenefitStatusHelper,
};
pub use processed::ProcessedInput;
