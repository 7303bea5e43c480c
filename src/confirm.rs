use anyhow::{Context, Result};
use std::io::{BufRead, Write};

/// Operator decision point. Advisory validation issues are surfaced
/// through one of these before the pipeline is allowed to proceed.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Interactive y/N prompt. Questions go to stderr, answers come from
/// stdin; stdout carries only the leaderboard.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        eprint!("\n{} [y/N]: ", prompt);
        std::io::stderr().flush().context("Failed to flush stderr")?;
        let mut input = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut input)
            .context("Failed to read input")?;
        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }
}

/// Non-interactive approval, backing the `--yes` flag.
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Error raised when the operator declines to continue past a checkpoint.
#[derive(Debug)]
pub struct Declined(pub String);

impl std::fmt::Display for Declined {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Aborting due to {}", self.0)
    }
}

impl std::error::Error for Declined {}

/// Surface a block of validation issues and ask whether to continue.
/// An empty issue list passes silently; declining turns the advisory
/// issues into a fatal [`Declined`] error.
pub fn checkpoint(
    heading: &str,
    issues: &[String],
    topic: &str,
    confirm: &mut dyn Confirm,
) -> Result<()> {
    if issues.is_empty() {
        return Ok(());
    }

    eprintln!("\n{}", heading);
    for issue in issues {
        eprintln!("  - {}", issue);
    }

    if !confirm.confirm(&format!("Continue despite {}?", topic))? {
        return Err(Declined(topic.to_string()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ApproveAll;
    impl Confirm for ApproveAll {
        fn confirm(&mut self, _prompt: &str) -> Result<bool> {
            Ok(true)
        }
    }

    struct DeclineAll;
    impl Confirm for DeclineAll {
        fn confirm(&mut self, _prompt: &str) -> Result<bool> {
            Ok(false)
        }
    }

    struct PanicIfAsked;
    impl Confirm for PanicIfAsked {
        fn confirm(&mut self, _prompt: &str) -> Result<bool> {
            panic!("checkpoint must not prompt when there are no issues");
        }
    }

    #[test]
    fn test_no_issues_passes_without_prompting() {
        let result = checkpoint("Issues:", &[], "anything", &mut PanicIfAsked);
        assert!(result.is_ok());
    }

    #[test]
    fn test_approved_checkpoint_continues() {
        let issues = vec!["something odd".to_string()];
        let result = checkpoint("Issues:", &issues, "odd data", &mut ApproveAll);
        assert!(result.is_ok());
    }

    #[test]
    fn test_declined_checkpoint_aborts_with_topic() {
        let issues = vec!["something odd".to_string()];
        let err = checkpoint("Issues:", &issues, "odd data", &mut DeclineAll).unwrap_err();
        assert!(err.downcast_ref::<Declined>().is_some());
        assert_eq!(err.to_string(), "Aborting due to odd data");
    }

    #[test]
    fn test_assume_yes_always_approves() {
        assert!(AssumeYes.confirm("anything?").unwrap());
    }
}
