use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use crate::output::OutputFormat;

pub const DEFAULT_REGION: &str = "eu-north-1";

/// Interactive questions asked when the describe command runs without
/// flags. Kept behind a trait so command logic stays testable without a
/// terminal.
pub trait Prompt {
    fn ask_region(&self) -> Result<String>;
    fn ask_filter(&self) -> Result<bool>;
    fn ask_instance_id(&self) -> Result<String>;
    fn ask_output_format(&self) -> Result<OutputFormat>;
}

pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask_region(&self) -> Result<String> {
        let region: String = Input::new()
            .with_prompt("Enter AWS region")
            .default(DEFAULT_REGION.to_string())
            .interact_text()?;
        Ok(normalize_region(&region))
    }

    fn ask_filter(&self) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt("Do you want to filter by instance ID?")
            .default(false)
            .interact()?)
    }

    fn ask_instance_id(&self) -> Result<String> {
        let instance_id: String = Input::new()
            .with_prompt("Enter instance ID")
            .allow_empty(true)
            .interact_text()?;
        Ok(instance_id.trim().to_string())
    }

    fn ask_output_format(&self) -> Result<OutputFormat> {
        let choice = Select::new()
            .with_prompt("Choose output format")
            .items(&["Pretty", "JSON"])
            .default(0)
            .interact()?;
        Ok(if choice == 1 {
            OutputFormat::Json
        } else {
            OutputFormat::Pretty
        })
    }
}

/// Trims the entered region and falls back to the default when nothing
/// is left.
pub fn normalize_region(region: &str) -> String {
    let trimmed = region.trim();
    if trimmed.is_empty() {
        DEFAULT_REGION.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_region_trims_whitespace() {
        assert_eq!(normalize_region(" eu-west-1 "), "eu-west-1");
    }

    #[test]
    fn normalize_region_falls_back_to_default() {
        assert_eq!(normalize_region(""), DEFAULT_REGION);
        assert_eq!(normalize_region("   "), DEFAULT_REGION);
    }

    #[test]
    fn normalize_region_keeps_explicit_values() {
        assert_eq!(normalize_region("ap-southeast-2"), "ap-southeast-2");
    }
}
