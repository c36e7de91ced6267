/// Request DTO and name parsing
pub mod inputs;

/// Lookup orchestration
pub mod lookup;

/// Prompt construction
pub mod prompt;

/// Record schema requested from the model
pub mod record;

pub use inputs::MedicineQuery;
pub use lookup::{lookup, normalize, LookupResult, TEMPERATURE};
pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use record::{Dosage, MedicineRecord, SideEffects};
