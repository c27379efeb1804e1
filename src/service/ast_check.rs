use crate::db::{AstCheck, Database, UpsertKind};
use tracing::{error, info};

pub const SUCCESS_MESSAGE: &str = "Data submitted successfully!";
pub const FAILURE_MESSAGE: &str = "An error occurred while saving the AST check. Please try again.";

/// Result of one submission as seen by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(UpsertKind),
    Failed,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Saved(_))
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Saved(_) => SUCCESS_MESSAGE,
            Self::Failed => FAILURE_MESSAGE,
        }
    }
}

#[derive(Clone)]
pub struct AstCheckService {
    db: Database,
}

impl AstCheckService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Upsert one check. Failures are logged and collapsed into
    /// `SubmitOutcome::Failed`; nothing is retried.
    pub async fn record(&self, check: &AstCheck) -> SubmitOutcome {
        match self.db.upsert_ast_check(check).await {
            Ok(kind) => {
                info!(
                    dwelling_id = %check.dwelling_id,
                    academic_year = %check.academic_year,
                    checked_by = %check.checked_by,
                    outcome = kind.as_str(),
                    "AST check recorded"
                );
                SubmitOutcome::Saved(kind)
            }
            Err(e) => {
                error!(
                    dwelling_id = %check.dwelling_id,
                    academic_year = %check.academic_year,
                    error = %e,
                    "failed to record AST check"
                );
                SubmitOutcome::Failed
            }
        }
    }
}
