//! Copy contracts: per-archetype writing constraints and their validator.

pub mod contract;
pub mod validate;

pub use contract::{
    resolve_copy_contract, resolve_error_copy_contract, resolve_feature_copy_contract,
    resolve_hero_copy_contract, ContentArchetype, CopyContract, CopyField, NarrativeVoice,
    ALARMING_WORDS, UNIVERSAL_BLACKLIST,
};
pub use validate::{validate_copy, CopyCheck};
