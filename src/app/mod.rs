pub mod extractor;
pub mod wizard;

pub use extractor::{ExtractOutcome, Extractor};
pub use wizard::{WizardOutcome, run_wizard};
