//! Expense entity - a reimbursable cost

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::Record;
use crate::domain::value_objects::{
    parse_record_date, require_positive, require_text, RecordId, ValidationError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default = "RecordId::generate")]
    pub id: RecordId,
    pub date: String,
    pub amount: f64,
    pub description: String,
}

impl Expense {
    pub fn new(date: impl Into<String>, amount: f64, description: impl Into<String>) -> Self {
        Self {
            id: RecordId::generate(),
            date: date.into(),
            amount,
            description: description.into(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_record_date(&self.date).ok()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        parse_record_date(&self.date)?;
        require_positive("amount", self.amount)?;
        require_text("description", &self.description)?;
        Ok(())
    }
}

impl Record for Expense {
    const KIND: &'static str = "expense";

    fn id(&self) -> RecordId {
        self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Expense::validate(self)
    }
}
