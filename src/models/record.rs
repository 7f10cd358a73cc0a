use serde::{Deserialize, Serialize};

use super::enums::DraftField;

/// One saved illness episode. Immutable once added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub date: String,
    pub time: String,
    pub symptom: String,
    pub medicine: String,
}

impl Record {
    /// Cells in table column order (date, time, symptom, medicine).
    pub fn cells(&self) -> [String; 4] {
        [
            self.date.clone(),
            self.time.clone(),
            self.symptom.clone(),
            self.medicine.clone(),
        ]
    }
}

/// The entry currently being edited on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftEntry {
    pub date: String,
    pub time: String,
    pub symptom: String,
    pub medicine: String,
}

impl DraftEntry {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Date => &self.date,
            DraftField::Time => &self.time,
            DraftField::Symptom => &self.symptom,
            DraftField::Medicine => &self.medicine,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Date => self.date = value,
            DraftField::Time => self.time = value,
            DraftField::Symptom => self.symptom = value,
            DraftField::Medicine => self.medicine = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Moves the draft into a record with the given id, leaving the draft empty.
    pub fn take_into_record(&mut self, id: u64) -> Record {
        let draft = std::mem::take(self);
        Record {
            id,
            date: draft.date,
            time: draft.time,
            symptom: draft.symptom,
            medicine: draft.medicine,
        }
    }
}
