//! Result rendering
//!
//! Turns an evaluation into the terminal report: score headline, per-metric
//! bars, and the four SWOT sections.

use colored::*;
use pitchscope_core::domain::evaluation::{EvaluationResult, SwotAnalysis};
use pitchscope_core::domain::job::JobState;

const BAR_SEGMENTS: usize = 10;

/// Print the full evaluation report
pub fn print_result(result: &EvaluationResult) {
    println!("{}", "Final Score".bold());
    println!(
        "  {}{}",
        format_score(result.final_score).green().bold(),
        "/100".dimmed()
    );

    if !result.metric_scores.is_empty() {
        println!();
        println!("{}", "Metrics".bold());

        let label_width = result
            .metric_scores
            .keys()
            .map(|name| metric_label(name).len())
            .max()
            .unwrap_or(0);

        for (name, score) in &result.metric_scores {
            println!(
                "  {:<width$}  {} {}",
                metric_label(name),
                score_bar(*score).blue(),
                format!("{}/10", format_score(*score)).bold(),
                width = label_width,
            );
        }
    }

    print_swot(&result.swot_analysis);
}

fn print_swot(swot: &SwotAnalysis) {
    if swot.is_empty() {
        return;
    }

    println!();
    println!("{}", "SWOT Analysis".bold());
    print_swot_section("Strengths", &swot.strengths, Color::Green);
    print_swot_section("Weaknesses", &swot.weaknesses, Color::Red);
    print_swot_section("Opportunities", &swot.opportunities, Color::Blue);
    print_swot_section("Threats", &swot.threats, Color::Yellow);
}

fn print_swot_section(title: &str, items: &[String], color: Color) {
    if items.is_empty() {
        return;
    }

    println!();
    println!("  {}", title.color(color).bold());
    for item in items {
        println!("    {} {}", "•".color(color), item);
    }
}

/// Colorize a job state for display
pub fn colorize_state(state: &JobState) -> colored::ColoredString {
    match state {
        JobState::Pending => "pending".yellow(),
        JobState::Processing => "processing".cyan(),
        JobState::Completed => "completed".green(),
        JobState::Failed => "failed".red(),
    }
}

/// Turn a metric key into its display label ("market_size" -> "Market Size")
pub fn metric_label(name: &str) -> String {
    name.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render a 0-10 score as a fixed-width bar
pub fn score_bar(score: f64) -> String {
    let filled = ((score / 10.0) * BAR_SEGMENTS as f64)
        .round()
        .clamp(0.0, BAR_SEGMENTS as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_SEGMENTS - filled))
}

/// Format a score without trailing zeros: 78.0 -> "78", 6.50 -> "6.5"
pub fn format_score(score: f64) -> String {
    let text = format!("{:.2}", score);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
