pub mod enums;
pub mod record;
pub mod symptom;

pub use enums::DraftField;
pub use record::{DraftEntry, Record};
pub use symptom::{SubValueSpec, SymptomOption, SymptomOptionInfo, SYMPTOM_CATALOG};
