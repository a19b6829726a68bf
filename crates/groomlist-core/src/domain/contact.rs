use crate::domain::pet_id::PetId;
use serde::Serialize;

/// One cleaned record from the export. Constructed once per surviving row
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub id: PetId,
    pub name: String,
    pub phone: String,
}

impl Contact {
    /// Output row in `id,name,phone` form. No quoting is applied: the
    /// upstream comma split means surviving values carry no commas.
    pub fn to_csv_row(&self) -> String {
        format!("{},{},{}", self.id, self.name, self.phone)
    }
}
