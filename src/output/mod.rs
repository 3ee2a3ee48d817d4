//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_generate_result, print_show_result, print_validate_result,
    print_words_result,
};
