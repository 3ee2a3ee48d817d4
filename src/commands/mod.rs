//! Command implementations

pub mod check;
pub mod generate;
pub mod show;
pub mod validate;
pub mod words;

pub use check::{CheckConfig, CheckResult, Violation, run_check};
pub use generate::{GenerateConfig, GenerateResult, run_generate};
pub use show::{ShowConfig, ShowResult, ShowSelection, run_show};
pub use validate::{ValidateConfig, ValidateResult, run_validate};
pub use words::{WordEntry, WordsConfig, WordsResult, WordsSelection, hive_from_text, run_words};
