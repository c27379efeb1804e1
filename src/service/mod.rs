pub mod ast_check;
pub mod directory;
pub mod gate;

pub use ast_check::{AstCheckService, SubmitOutcome};
pub use directory::{DwellingDirectory, PropertyMap};
pub use gate::CredentialGate;
