//! Operator confirmation gates. The stdin gate prints the batch preview and
//! waits for an explicit affirmative before the commit proceeds.

use std::io::{self, Write};

use crate::domain::model::BatchPreview;
use crate::domain::ports::ConfirmGate;
use crate::utils::error::Result;

pub struct StdinConfirm;

impl ConfirmGate for StdinConfirm {
    fn confirm(&self, preview: &BatchPreview) -> Result<bool> {
        println!("\n📋 Detected columns:");
        for column in &preview.columns {
            println!("  - {}", column);
        }
        println!(
            "\n📊 {} rows read, {} valid, {} rejected",
            preview.total_rows, preview.valid, preview.rejected
        );

        if !preview.sample.is_empty() {
            println!("\n📝 First records:");
            for record in &preview.sample {
                println!("  {} <{}> [{}]", record.name, record.email, record.status);
            }
        }

        print!("\n⚠️  Import {} records? (sim/não): ", preview.valid);
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;

        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "sim" | "s" | "yes" | "y"
        ))
    }
}

/// Non-interactive gate for `--yes` runs.
pub struct AutoConfirm;

impl ConfirmGate for AutoConfirm {
    fn confirm(&self, preview: &BatchPreview) -> Result<bool> {
        tracing::info!("auto-confirming import of {} records", preview.valid);
        Ok(true)
    }
}
