//! Evaluate command handler
//!
//! The submit-and-wait flow: collect the idea text, submit it, print each
//! progress signal while polling, then render the analysis.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use colored::*;
use pitchscope_client::EvaluatorClient;

use crate::config::Config;
use crate::render;

/// Handle the evaluate command
///
/// # Arguments
/// * `config` - The CLI configuration
/// * `idea` - Idea text from the command line, if given
/// * `file` - File to read the idea from, if given
/// * `json` - Emit raw JSON instead of the rendered report
pub async fn handle_evaluate(
    config: &Config,
    idea: Option<String>,
    file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let raw_idea = read_idea(idea, file)?;
    let client = EvaluatorClient::new(&config.api_url);

    println!("{}", "Submitting idea for evaluation...".dimmed());

    let result = client
        .evaluate(&raw_idea, |update| {
            println!("{}", update.to_string().dimmed());
        })
        .await?;

    println!();
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render::print_result(&result);
    }

    Ok(())
}

/// Resolve the idea text from the argument, a file, or stdin
fn read_idea(idea: Option<String>, file: Option<PathBuf>) -> Result<String> {
    let text = match (idea, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read idea from {}", path.display()))?,
        (None, None) => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read idea from stdin")?;
            buffer
        }
    };

    if text.trim().is_empty() {
        bail!("Idea text is empty; describe the startup idea to evaluate");
    }

    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_idea_from_argument() {
        let idea = read_idea(Some("  A peer-to-peer camera marketplace  ".to_string()), None);
        assert_eq!(idea.unwrap(), "A peer-to-peer camera marketplace");
    }

    #[test]
    fn test_read_idea_rejects_blank_text() {
        assert!(read_idea(Some("   \n".to_string()), None).is_err());
    }

    #[test]
    fn test_read_idea_from_file() {
        let path = std::env::temp_dir().join("pitchscope-idea-test.txt");
        std::fs::write(&path, "Subscription boxes for houseplants\n").unwrap();

        let idea = read_idea(None, Some(path.clone())).unwrap();
        assert_eq!(idea, "Subscription boxes for houseplants");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_read_idea_missing_file_is_error() {
        let path = std::env::temp_dir().join("pitchscope-no-such-file.txt");
        assert!(read_idea(None, Some(path)).is_err());
    }
}
