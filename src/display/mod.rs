//! Display formatting for terminal output
//!
//! Every function here returns a `String`; printing is left to the CLI
//! handlers.

pub mod account;
pub mod category;
pub mod goal;
pub mod transaction;

pub use account::format_account_list;
pub use category::format_category_list;
pub use goal::format_goal_list;
pub use transaction::{
    format_template_list, format_transaction_details, format_transaction_register,
};

/// Truncate a string to max length with ellipsis
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
