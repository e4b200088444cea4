//! Transaction CLI commands
//!
//! Implements the add, list, and delete commands. Input for add runs
//! through the transaction entry form so CLI users get the same field
//! validation and error messages as any other entry path.

use chrono::{Local, NaiveDate};
use clap::Args;
use std::io::{self, BufRead, Write};

use crate::config::settings::Settings;
use crate::display;
use crate::error::{SpendError, SpendResult};
use crate::forms::TransactionForm;
use crate::models::TransactionKind;
use crate::services::{TransactionFilter, TransactionService};
use crate::storage::Storage;

use super::parse_category;

/// Arguments for adding a transaction
#[derive(Args)]
pub struct AddArgs {
    /// Amount (e.g., "42.50")
    pub amount: String,

    /// Description (e.g., "Coffee")
    pub description: String,

    /// Category; defaults to the configured default category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Transaction date (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Record as income instead of an expense
    #[arg(long)]
    pub income: bool,
}

/// Arguments for listing transactions
#[derive(Args)]
pub struct ListArgs {
    /// Number of transactions to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,

    /// Filter by category
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for deleting a transaction
#[derive(Args)]
pub struct DeleteArgs {
    /// Transaction id (as shown by 'list')
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Handle the add command
pub fn handle_add(storage: &Storage, settings: &Settings, args: AddArgs) -> SpendResult<()> {
    let today = Local::now().date_naive();

    let mut form = TransactionForm::new(settings.default_category, today);
    form.amount = args.amount;
    form.description = args.description;

    if let Some(category) = args.category.as_deref() {
        form.category = parse_category(category)?;
    }

    if let Some(date) = args.date.as_deref() {
        form.date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
            SpendError::Validation(format!("Invalid date '{}' (expected YYYY-MM-DD)", date))
        })?;
    }

    if args.income {
        form.kind = TransactionKind::Income;
    }

    let input = match form.submit() {
        Ok(input) => input,
        Err(errors) => {
            let messages: Vec<&str> = [errors.amount, errors.description]
                .into_iter()
                .flatten()
                .collect();
            return Err(SpendError::Validation(messages.join("; ")));
        }
    };

    let service = TransactionService::new(storage);
    let txn = service.add(input)?;

    println!("Saved: {}", display::format_transaction_row(&txn));
    Ok(())
}

/// Handle the list command
pub fn handle_list(storage: &Storage, args: ListArgs) -> SpendResult<()> {
    let mut filter = TransactionFilter::new().limit(args.limit);

    if let Some(category) = args.category.as_deref() {
        filter = filter.category(parse_category(category)?);
    }

    let service = TransactionService::new(storage);
    let transactions = service.list(filter)?;

    print!("{}", display::format_transaction_register(&transactions));
    Ok(())
}

/// Handle the delete command
///
/// Deletion is irreversible, so it asks for confirmation unless --yes is
/// given. Once confirmed, the operation itself is unconditional.
pub fn handle_delete(storage: &Storage, args: DeleteArgs) -> SpendResult<()> {
    let service = TransactionService::new(storage);

    let Some(txn) = service.find(&args.id)? else {
        println!("No transaction with id {} - nothing to delete.", args.id);
        return Ok(());
    };

    if !args.yes && !confirm(&format!("Delete '{}' ({})?", txn.description, txn.amount))? {
        println!("Cancelled.");
        return Ok(());
    }

    service.delete(txn.id)?;
    println!("Deleted: {}", txn.description);
    Ok(())
}

/// Prompt the user for a yes/no answer on stdin
fn confirm(question: &str) -> SpendResult<bool> {
    print!("{} [y/N] ", question);
    io::stdout()
        .flush()
        .map_err(|e| SpendError::Io(e.to_string()))?;

    let mut answer = String::new();
    io::stdin()
        .lock()
        .read_line(&mut answer)
        .map_err(|e| SpendError::Io(e.to_string()))?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SpendPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add_args(amount: &str, description: &str) -> AddArgs {
        AddArgs {
            amount: amount.to_string(),
            description: description.to_string(),
            category: None,
            date: None,
            income: false,
        }
    }

    #[test]
    fn test_handle_add() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        handle_add(&storage, &settings, add_args("42.50", "Coffee")).unwrap();

        let service = TransactionService::new(&storage);
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_handle_add_surfaces_form_errors() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let err = handle_add(&storage, &settings, add_args("0", "")).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Amount must be a positive number"));
        assert!(message.contains("Description is required"));

        let service = TransactionService::new(&storage);
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_handle_add_rejects_bad_category() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let mut args = add_args("10", "Something");
        args.category = Some("Gadgets".to_string());
        assert!(handle_add(&storage, &settings, args).is_err());
    }

    #[test]
    fn test_handle_add_rejects_bad_date() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();

        let mut args = add_args("10", "Something");
        args.date = Some("03/05/2024".to_string());
        assert!(handle_add(&storage, &settings, args).is_err());
    }

    #[test]
    fn test_handle_delete_missing_id_is_noop() {
        let (_temp_dir, storage) = create_test_storage();

        // An unknown but well-formed id must not be an error
        let args = DeleteArgs {
            id: uuid::Uuid::new_v4().to_string(),
            yes: true,
        };
        handle_delete(&storage, args).unwrap();
    }
}
