//! Account display formatting

use crate::config::Settings;
use crate::models::{Account, Money};

/// Format accounts with balances as a table, with a total row
pub fn format_account_list(accounts: &[Account], settings: &Settings) -> String {
    if accounts.is_empty() {
        return "No accounts found.".to_string();
    }

    let name_width = accounts
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>18}  {}\n",
        "Name",
        "Balance",
        "ID",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->18}  {:-<12}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for account in accounts {
        output.push_str(&format!(
            "{:<name_width$}  {:>18}  {}\n",
            account.name,
            settings.format_money(account.balance),
            account.id.short(),
            name_width = name_width,
        ));
    }

    let total: Money = accounts.iter().map(|a| a.balance).sum();
    output.push_str(&format!(
        "{:-<name_width$}  {:->18}\n",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:>18}\n",
        "TOTAL",
        settings.format_money(total),
        name_width = name_width,
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_account_list() {
        let accounts = vec![
            Account::new("Main Wallet", Money::new(150_000)),
            Account::new("BCA", Money::new(-20_000)),
        ];
        let output = format_account_list(&accounts, &Settings::default());

        assert!(output.contains("Main Wallet"));
        assert!(output.contains("-Rp 20.000"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("Rp 130.000"));
        assert!(output.contains(&accounts[1].id.short()));
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            format_account_list(&[], &Settings::default()),
            "No accounts found."
        );
    }
}
