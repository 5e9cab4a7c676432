//! Transaction and template display formatting

use super::truncate;
use crate::config::Settings;
use crate::models::{Account, AccountId, RecurringTemplate, Transaction};

fn account_label(accounts: &[Account], id: AccountId) -> String {
    accounts
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "(deleted)".to_string())
}

/// Format a single register row
pub fn format_transaction_row(txn: &Transaction, account: &str, settings: &Settings) -> String {
    format!(
        "{:<12}  {}  {:<24}  {:<14}  {:<14}  {:>16}",
        txn.id.short(),
        txn.date.format(&settings.date_format),
        truncate(&txn.description, 24),
        truncate(&txn.category, 14),
        truncate(account, 14),
        settings.format_money(txn.signed_amount()),
    )
}

/// Format a list of transactions as a register, newest first
pub fn format_transaction_register(
    transactions: &[&Transaction],
    accounts: &[Account],
    settings: &Settings,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<24}  {:<14}  {:<14}  {:>16}\n",
        "ID", "Date", "Description", "Category", "Account", "Amount"
    ));
    output.push_str(&"-".repeat(102));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(
            txn,
            &account_label(accounts, txn.account_id),
            settings,
        ));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(
    txn: &Transaction,
    accounts: &[Account],
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Date:        {}\n",
        txn.date.format(&settings.date_format)
    ));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!(
        "Account:     {}\n",
        account_label(accounts, txn.account_id)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        settings.format_money(txn.signed_amount())
    ));
    output.push_str(&format!(
        "Recorded:    {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Format saved templates
pub fn format_template_list(
    templates: &[RecurringTemplate],
    accounts: &[Account],
    settings: &Settings,
) -> String {
    if templates.is_empty() {
        return "No templates saved.".to_string();
    }

    let mut output = String::new();
    for template in templates {
        output.push_str(&format!(
            "{:<12}  {:<24}  {:<8}  {:<14}  {:<14}  {:>16}\n",
            template.id.short(),
            truncate(&template.description, 24),
            template.kind.to_string(),
            truncate(&template.category, 14),
            truncate(&account_label(accounts, template.account_id), 14),
            settings.format_money(template.amount),
        ));
    }
    output
}
