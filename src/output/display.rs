//! Display functions for command results

use super::formatters::{create_progress_bar, keyboard, tile_row};
use crate::commands::{EvaluationReport, SimulationStatistics};
use crate::core::{MAX_ROWS, WORD_LENGTH};
use crate::game::{Game, Standing};
use crate::services::Definition;
use colored::Colorize;

/// Print the result of the evaluate command
pub fn print_evaluation_report(report: &EvaluationReport) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Guess {} against {}",
        report.guess.text().bright_white().bold(),
        report.target.text().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "\n  {}   {}",
        tile_row(&report.guess, &report.evaluation),
        report.evaluation.to_emoji()
    );

    let costs: Vec<String> = report.cost.costs().iter().map(u32::to_string).collect();
    println!("\n  Cost per letter:  {}", costs.join(" + "));
    println!(
        "  Row cost:         {}",
        report.cost.total().to_string().bright_red()
    );
    println!(
        "  Score after row:  {}",
        report.score.to_string().bright_yellow().bold()
    );
}

/// Print the board of the current round: submitted rows, then the guess in progress
pub fn print_board(game: &Game) {
    let round = game.round();
    for (index, row) in round.rows().iter().enumerate() {
        match (row.guess(), row.evaluation()) {
            (Some(guess), Some(evaluation)) => {
                let marker = if round.revealed_answer_row() == Some(index) {
                    " (answer)".bright_black().to_string()
                } else {
                    round
                        .score()
                        .row_score(index)
                        .map(|s| format!(" {s}").bright_black().to_string())
                        .unwrap_or_default()
                };
                println!("  {}{marker}", tile_row(guess, evaluation));
            }
            _ if index == round.current_row() && !round.is_over() => {
                let typed = format!("{:_<width$}", round.current_guess(), width = WORD_LENGTH);
                let spaced: Vec<String> = typed.chars().map(|c| format!(" {c} ")).collect();
                let line = spaced.concat();
                if round.is_invalid_guess() {
                    println!("  {}", line.red());
                } else {
                    println!("  {line}");
                }
            }
            _ => {}
        }
    }
}

/// Print the keyboard hints of the current round
pub fn print_keyboard(game: &Game) {
    for (indent, row) in keyboard(game.round().letter_states()).iter().enumerate() {
        println!("  {}{row}", " ".repeat(indent * 2));
    }
}

/// Print score and standing in one line
pub fn print_score_line(game: &Game) {
    let standing = game.standing();
    println!(
        "Score: {}  Total: {}  Streak: {}",
        game.score().to_string().bright_yellow().bold(),
        standing.total_score.to_string().bright_cyan(),
        standing.streak.to_string().bright_green()
    );
}

/// Print a definition with its senses
pub fn print_definition(definition: &Definition) {
    let phonetic = definition.phonetic.as_deref().unwrap_or_default();
    println!(
        "\n📖 {} {}",
        definition.word.bright_white().bold(),
        phonetic.bright_black()
    );
    for sense in &definition.senses {
        match &sense.part_of_speech {
            Some(part) => println!("   {} {}", part.italic().cyan(), sense.definition),
            None => println!("   {}", sense.definition),
        }
        if let Some(example) = &sense.example {
            println!("      \"{}\"", example.bright_black());
        }
    }
}

fn print_distribution(standing: &Standing) {
    let wins = standing.rounds_won;
    let max_count = standing.win_distribution.iter().copied().max().unwrap_or(0);
    for rows in 1..=MAX_ROWS {
        let count = standing.win_distribution[rows];
        let percentage = if wins > 0 {
            f64::from(count) / f64::from(wins) * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(f64::from(count), f64::from(max_count), 40);
        println!("  {rows} rows: {} {count:4} ({percentage:5.1}%)", bar.green());
    }
}

/// Print session statistics
pub fn print_standing(standing: &Standing) {
    println!("\n📊 {}", "Session".bright_cyan().bold());
    println!("  Rounds played:  {}", standing.rounds_played);
    println!(
        "  Win rate:       {}",
        format!("{:.1}%", standing.win_rate() * 100.0).green()
    );
    println!("  Total score:    {}", standing.total_score);
    println!("  Best streak:    {}", standing.best_streak);
    if standing.rounds_won > 0 {
        println!();
        print_distribution(standing);
    }
}

/// Print simulation statistics
pub fn print_simulation_result(stats: &SimulationStatistics) {
    let standing = &stats.standing;
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Rounds played:   {}", standing.rounds_played);
    println!(
        "  Rounds won:      {} {}",
        standing.rounds_won,
        format!("({:.1}%)", standing.win_rate() * 100.0).green()
    );
    println!(
        "  Average score:   {}",
        format!("{:.2}", stats.average_score).bright_yellow().bold()
    );
    println!("  Average rows:    {:.3}", stats.average_guesses);
    println!("  Total score:     {}", standing.total_score);
    println!("  Best streak:     {}", standing.best_streak);
    println!(
        "  Total time:      {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Winning Row Distribution".bright_cyan().bold());
    print_distribution(standing);

    let mut lost: Vec<_> = stats.rounds.iter().filter(|r| !r.won).collect();
    if !lost.is_empty() {
        lost.truncate(10);
        println!("\n😰 {}", "Lost Rounds".yellow().bold());
        for round in lost {
            let trail: Vec<&str> = round.guesses.iter().map(|g| g.text()).collect();
            println!("  {} ({})", round.target.text().yellow(), trail.join(" → "));
        }
    }
}
