use sqlx::FromRow;

/// One row of the read-only `SHMDwellingInfo` directory.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DwellingRecord {
    pub dwelling_id: String,
    pub flat_number: String,
    pub address: String,
    pub city: String,
}

impl DwellingRecord {
    /// Label shown in the property selector, e.g. `2B 1 Main St, Springfield`.
    pub fn display_label(&self) -> String {
        format!("{} {}, {}", self.flat_number, self.address, self.city)
    }
}

/// One row of `SHMASTCheck`, keyed by `(dwelling_id, academic_year)`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct AstCheck {
    pub dwelling_id: String,
    pub academic_year: String,
    pub checked_by: String,
    pub comment: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertKind {
    Inserted,
    Updated,
}

impl UpsertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inserted => "inserted",
            Self::Updated => "updated",
        }
    }
}
