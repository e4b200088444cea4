//! Receipt scan CLI command
//!
//! Sends a receipt photo to the extraction service and shows the pre-filled
//! transaction draft. With --save, the draft is validated and recorded as
//! an expense. A failed extraction prints a notice and changes nothing.

use chrono::Local;
use clap::Args;
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display;
use crate::error::{SpendError, SpendResult};
use crate::forms::TransactionForm;
use crate::scan::ReceiptScanner;
use crate::services::TransactionService;
use crate::storage::Storage;

/// Arguments for the scan command
#[derive(Args)]
pub struct ScanArgs {
    /// Path to a receipt photo (JPEG)
    pub image: PathBuf,

    /// Record the extracted transaction immediately
    #[arg(long)]
    pub save: bool,
}

/// Handle the scan command
pub fn handle_scan_command(
    storage: &Storage,
    settings: &Settings,
    args: ScanArgs,
) -> SpendResult<()> {
    let scanner = ReceiptScanner::from_env(settings.gemini_model.clone()).ok_or_else(|| {
        SpendError::Config("GEMINI_API_KEY is not set; receipt scanning is unavailable".into())
    })?;

    let image = std::fs::read(&args.image).map_err(|e| {
        SpendError::Io(format!("Failed to read {}: {}", args.image.display(), e))
    })?;

    println!("Scanning receipt...");

    let Some(receipt) = scanner.scan_receipt(&image) else {
        println!("Could not extract details from the receipt.");
        return Ok(());
    };

    let today = Local::now().date_naive();
    let mut form = TransactionForm::from_receipt(&receipt, today);

    println!("Extracted:");
    println!("  Amount:      {}", form.amount);
    println!("  Description: {}", form.description);
    println!("  Category:    {}", form.category);
    println!("  Date:        {}", form.date.format("%Y-%m-%d"));

    if !args.save {
        println!("Run with --save to record this as an expense.");
        return Ok(());
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
