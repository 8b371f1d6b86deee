//! Validation engine: checks generated content against the governance layers.
//!
//! # Architecture
//!
//! ```text
//! raw generator output
//!   ↓  generation::validate_generation (JSON → GeneratedCopy)
//!   ├─ copy::validate_copy         per field, against the CopyContract
//!   ├─ content::validate_content   vocabulary of the PersonalityProfile
//!   ├─ content::validate_voice     forbidden terms of the BoundVoice, if any
//!   └─ claims::validate_ai_output  never_claim / never_promise / never_imply
//!   ↓
//! ValidationResult (errors block, warnings advise)
//! ```
//!
//! [`integrity`] is separate: it checks the static registry, not requests.

pub mod claims;
pub mod content;
pub mod generation;
pub mod integrity;
pub mod text;
pub mod types;

pub use claims::validate_ai_output;
pub use content::{validate_content, validate_voice};
pub use generation::{parse_generated_copy, validate_generation, GeneratedCopy};
pub use integrity::{
    check_cross_contamination, check_cross_contamination_in, registry_report, ContaminationGap,
    ContractReport, RegistryReport,
};
pub use types::{Severity, ValidationResult, Violation, ViolationKind};
