//! Display functions for command results

use super::formatters::{create_progress_bar, plural};
use crate::commands::{SolveResult, TournamentResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}  {}",
            turn,
            step.word,
            step.feedback.to_emoji(),
            step.mode.label().bright_black()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {}!", plural(result.guesses.len(), "guess", "guesses"))
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ Failed to solve in {}",
                plural(result.guesses.len(), "guess", "guesses")
            )
            .red()
            .bold()
        );
    }
}

/// Print the statistics of a tournament run
pub fn print_tournament_result(result: &TournamentResult) {
    let stats = &result.stats;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "TOURNAMENT RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Seed:             {}", result.seed);
    println!(
        "   Mean attempts:    {}",
        format!("{:.2}", stats.mean).bright_yellow().bold()
    );
    println!("   Median attempts:  {}", stats.median);
    println!("   Std deviation:    {:.2}", stats.std_dev);
    println!("   Best case:        {}", format!("{}", stats.min).green());
    println!("   Worst case:       {}", format!("{}", stats.max).yellow());
    if result.failures > 0 {
        println!(
            "   Failures:         {} {}",
            result.failures,
            format!("(counted as {} attempts)", result.max_attempts).red()
        );
    } else {
        println!("   Failures:         {}", "0".green());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    let languages = result.by_language();
    if languages.len() > 1 {
        println!("\n🌍 {}", "Languages:".bright_cyan().bold());
        for (lang, (games, failures)) in &languages {
            println!("   {lang}: {games:4} games, {failures} failed");
        }
    }

    let distribution = result.distribution();
    let max_count = distribution.values().copied().max().unwrap_or(0);
    if max_count > 0 {
        println!("\n📈 {}", "Distribution:".bright_cyan().bold());
        for (attempts, &count) in &distribution {
            let pct = count as f64 / result.games as f64 * 100.0;
            let bar = create_progress_bar(count as f64, max_count as f64, 40);
            println!("   {attempts:3}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    for record in &result.records {
        if let Some(error) = &record.error {
            println!("   {} {} ({}): {error}", "✗".red(), record.secret, record.lang);
        }
    }
}
