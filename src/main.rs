use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

use podium::confirm::{AssumeYes, Confirm, Declined, StdinConfirm};
use podium::output::{format_leaderboard, should_use_colors, write_summary_csv};
use podium::scoring::{summarize, CriterionWeights};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_DECLINED: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(about = "Aggregate hackathon judge scores into a ranked leaderboard", long_about = None)]
#[command(version)]
struct Cli {
    /// Folder containing one CSV score sheet per judge
    folder: PathBuf,

    /// Number of top teams to display
    #[arg(short, long, default_value_t = 3)]
    top: usize,

    /// Minimum number of reviews required per team
    #[arg(short, long, default_value_t = 2)]
    min_reviews: usize,

    /// Path to save the full results CSV
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Answer yes at every confirmation checkpoint
    #[arg(short, long)]
    yes: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // Validate the weight table at startup
    let weights = CriterionWeights::default();
    if let Err(errors) = weights.validate() {
        eprintln!("Weight table errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INPUT);
    }

    if !cli.folder.is_dir() {
        eprintln!("Input folder not found: {}", cli.folder.display());
        std::process::exit(EXIT_INPUT);
    }

    eprintln!("Processing CSV files from {}", cli.folder.display());

    let mut stdin_confirm = StdinConfirm;
    let mut assume_yes = AssumeYes;
    let confirm: &mut dyn Confirm = if cli.yes {
        &mut assume_yes
    } else {
        &mut stdin_confirm
    };

    let corpus = match podium::corpus::assemble(&cli.folder, cli.min_reviews, confirm, cli.verbose)
    {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("{}", e);
            let code = if e.downcast_ref::<Declined>().is_some() {
                EXIT_DECLINED
            } else {
                EXIT_INPUT
            };
            std::process::exit(code);
        }
    };

    if cli.verbose {
        eprintln!("Calculating team scores for {} reviews", corpus.len());
    }
    let summaries = summarize(&corpus, &weights);

    let use_colors = should_use_colors();
    if use_colors {
        println!("\n{}", "Hackathon Results".bold());
    } else {
        println!("\nHackathon Results");
    }
    println!("{}", format_leaderboard(&summaries, cli.top));

    if let Some(output) = &cli.output {
        if let Err(e) = write_summary_csv(output, &summaries) {
            eprintln!("{}", e);
            std::process::exit(EXIT_INPUT);
        }
        eprintln!("\nDetailed results saved to {}", output.display());
    }

    std::process::exit(EXIT_SUCCESS);
}
