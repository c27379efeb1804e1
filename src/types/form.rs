use serde::Deserialize;

use crate::config::FormConfig;
use crate::db::AstCheck;
use crate::service::PropertyMap;

/// Stored as the dwelling id when no valid property is selected.
/// Such submissions are still written.
pub const INVALID_DWELLING_PLACEHOLDER: &str =
    "Dwelling does not exist, please check your selection.";

/// Raw field values from the AST form, as posted or as preview query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AstCheckForm {
    /// Selected display label; empty means "Select property".
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub academic_year: Option<String>,
    #[serde(default)]
    pub checked_by: Option<String>,
    #[serde(default)]
    pub comment: String,
}

/// Login form body. Carries the raw password, so no `Debug`.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
}

impl AstCheckForm {
    /// Dwelling id for the selected label, if it is in the directory.
    pub fn selected_dwelling<'a>(&self, properties: &'a PropertyMap) -> Option<&'a str> {
        if self.property.is_empty() {
            return None;
        }
        properties.get(&self.property)
    }

    pub fn academic_year<'a>(&'a self, options: &'a FormConfig) -> &'a str {
        pick(self.academic_year.as_deref(), &options.academic_years)
    }

    pub fn checked_by<'a>(&'a self, options: &'a FormConfig) -> &'a str {
        pick(self.checked_by.as_deref(), &options.staff_initials)
    }

    /// Assemble the record that a submit would write. Values are taken as
    /// posted; only the dwelling id falls back to the placeholder.
    pub fn to_check(&self, properties: &PropertyMap, options: &FormConfig) -> AstCheck {
        let dwelling_id = self
            .selected_dwelling(properties)
            .unwrap_or(INVALID_DWELLING_PLACEHOLDER);
        AstCheck {
            dwelling_id: dwelling_id.to_string(),
            academic_year: self.academic_year(options).to_string(),
            checked_by: self.checked_by(options).to_string(),
            comment: self.comment.clone(),
        }
    }
}

fn pick<'a>(value: Option<&'a str>, options: &'a [String]) -> &'a str {
    value
        .filter(|v| !v.is_empty())
        .or_else(|| options.first().map(String::as_str))
        .unwrap_or_default()
}
