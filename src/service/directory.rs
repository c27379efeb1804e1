use crate::db::{Database, DwellingRecord};
use crate::error::AstError;

/// Display label -> dwelling id, in directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    /// A repeated label keeps its first position but takes the later id.
    pub fn from_records(records: impl IntoIterator<Item = DwellingRecord>) -> Self {
        let mut entries: Vec<(String, String)> = Vec::new();
        for record in records {
            let label = record.display_label();
            match entries.iter_mut().find(|(l, _)| *l == label) {
                Some(entry) => entry.1 = record.dwelling_id,
                None => entries.push((label, record.dwelling_id)),
            }
        }
        Self { entries }
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, id)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, id)| (l.as_str(), id.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read side of `SHMDwellingInfo`.
#[derive(Clone)]
pub struct DwellingDirectory {
    db: Database,
}

impl DwellingDirectory {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Errors propagate unchanged; there is no retry or fallback.
    pub async fn list_properties(&self) -> Result<PropertyMap, AstError> {
        let records = self.db.list_dwellings().await?;
        Ok(PropertyMap::from_records(records))
    }
}
