//! Display functions for command results

use super::formatters::{create_progress_bar, split_at_change};
use crate::commands::{BenchmarkResult, NeighborReport, SolveResult};
use colored::Colorize;

/// Print the result of solving a pair
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if let Some(ladder) = &result.ladder {
        let words = ladder.words();
        for (i, word) in words.iter().enumerate() {
            if i == 0 {
                println!("\n  {i:>2}: {}", word.bold());
                continue;
            }
            let (before, letter, after) = split_at_change(&words[i - 1], word);
            println!("  {i:>2}: {before}{}{after}", letter.green().bold());
        }
    }

    if verbose {
        println!("\n  Expanded:  {}", result.stats.expanded);
        println!("  Enqueued:  {}", result.stats.enqueued);
        println!("  Examined:  {}", result.stats.examined);
        println!("  Time:      {:.3}ms", result.duration.as_secs_f64() * 1000.0);
        if !result.start_indexed {
            println!("  {}", format!("'{}' is not in the dictionary", result.start).yellow());
        }
        if !result.target_indexed {
            println!("  {}", format!("'{}' is not in the dictionary", result.target).yellow());
        }
    }

    println!();
    match &result.ladder {
        Some(ladder) => println!(
            "{}",
            format!("✅ Solved in {} steps!", ladder.steps()).green().bold()
        ),
        None => println!(
            "{}",
            format!("❌ No ladder from {} to {}", result.start, result.target)
                .red()
                .bold()
        ),
    }
}

/// Print the neighbors of a word
pub fn print_neighbor_report(report: &NeighborReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NEIGHBORS:".bright_cyan().bold(),
        report.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !report.legal {
        println!("\n{}", "Word contains letters outside the alphabet".red());
        return;
    }
    if !report.indexed {
        println!("\n{}", "Word is not in the dictionary".yellow());
    }

    println!("\n📊 {} neighbors", report.neighbors.len());
    for neighbor in &report.neighbors {
        let (before, letter, after) = split_at_change(&report.word, neighbor);
        println!("   {before}{}{after}", letter.green().bold());
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.total_pairs);
    println!("   Word length:      {}", result.length);
    println!("   Seed:             {}", result.seed);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!(
        "   Unsolved:         {}",
        format!("{}", result.unsolved).yellow()
    );
    println!(
        "   Average steps:    {}",
        format!("{:.2}", result.average_steps).bright_yellow().bold()
    );
    println!("   Paths expanded:   {}", result.nodes_expanded);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    if let Some(longest) = &result.longest {
        println!("\n🪜 {}", "Longest ladder:".bright_cyan().bold());
        println!("   {longest}");
    }

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut steps: Vec<usize> = result.distribution.keys().copied().collect();
    steps.sort_unstable();
    for step in steps {
        let count = result.distribution[&step];
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {step:>2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
