mod cli;
mod leaderboard;
mod source;
mod web;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command, DashboardConfig};
use leaderboard::{aggregate_questions, parse_scores, rank_models, QuestionStat, RankedModel};
use std::path::Path;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let _subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match args.command {
        Command::Serve(serve_args) => {
            serve_dashboard(serve_args).await?;
        }
        Command::Show(show_args) => {
            show_leaderboard(&show_args.file)?;
        }
        Command::Questions(questions_args) => {
            show_questions(&questions_args.file)?;
        }
        Command::Fetch(fetch_args) => {
            fetch_leaderboard(&fetch_args.url).await?;
        }
        Command::Init(init_args) => {
            generate_sample_config(init_args)?;
        }
    }

    Ok(())
}

async fn serve_dashboard(args: cli::ServeArgs) -> Result<()> {
    let mut config = match (&args.config, &args.url) {
        (Some(path), _) => {
            info!("Loading dashboard config from {:?}", path);
            DashboardConfig::load(path)?
        }
        (None, Some(url)) => DashboardConfig::for_url(url),
        (None, None) => {
            anyhow::bail!("either --config or --url is required");
        }
    };

    if let Some(url) = args.url {
        config.data_url = url;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    println!("\n╔═══════════════════════════════════════════════════════════════╗");
    println!("║                    TACBOARD Dashboard                         ║");
    println!("╠═══════════════════════════════════════════════════════════════╣");
    println!("║  Open http://localhost:{:<5} in your browser                 ║", config.port);
    println!("║                                                               ║");
    println!("║  Endpoints:                                                   ║");
    println!("║    /                 - Leaderboard dashboard                  ║");
    println!("║    /api/leaderboard  - Ranked models (JSON)                   ║");
    println!("║    /api/questions    - Per-question stats (JSON)              ║");
    println!("║                                                               ║");
    println!("║  Press Ctrl+C to stop the server                              ║");
    println!("╚═══════════════════════════════════════════════════════════════╝\n");

    web::start_server(config).await?;

    Ok(())
}

fn show_leaderboard(path: &Path) -> Result<()> {
    let Some(text) = source::read_scores_file(path)? else {
        warn!("{:?} is not a recognized YAML scores file", path);
        return Ok(());
    };

    let models = rank_models(parse_scores(&text));
    print_leaderboard(&models);

    Ok(())
}

fn show_questions(path: &Path) -> Result<()> {
    let Some(text) = source::read_scores_file(path)? else {
        warn!("{:?} is not a recognized YAML scores file", path);
        return Ok(());
    };

    let models = rank_models(parse_scores(&text));
    let questions = aggregate_questions(&models);
    print_questions(&questions);

    Ok(())
}

async fn fetch_leaderboard(url: &str) -> Result<()> {
    info!("Fetching scores from {}", url);

    let text = source::fetch_scores(url).await?;
    let models = rank_models(parse_scores(&text));
    print_leaderboard(&models);

    Ok(())
}

fn print_leaderboard(models: &[RankedModel]) {
    println!("\n{}", "=".repeat(60));
    println!("LEADERBOARD");
    println!("{}", "=".repeat(60));

    if models.is_empty() {
        println!("\nNo score records found in the document.");
        return;
    }

    println!();
    for model in models {
        println!(
            "  #{:<3} {:<42} {:>8.2}",
            model.rank, model.name, model.score
        );
        for sub in &model.sub_scores {
            match &sub.error {
                Some(error) => println!("        {:<12} {}", sub.name, error),
                None => println!("        {:<12} {:.2}", sub.name, sub.score),
            }
        }
    }
}

fn print_questions(questions: &[QuestionStat]) {
    println!("\n{}", "=".repeat(60));
    println!("QUESTIONS BY SUCCESS RATE");
    println!("{}", "=".repeat(60));

    if questions.is_empty() {
        println!("\nNo sub-test results found in the document.");
        return;
    }

    println!();
    for question in questions {
        println!(
            "  {:<12} {:>3}/{:<3} {:>6.1}%",
            question.name, question.correct_count, question.total_count, question.percentage
        );
    }
}

fn generate_sample_config(args: cli::InitArgs) -> Result<()> {
    let config = DashboardConfig::sample();

    config.save(&args.output)?;
    println!("Generated sample config at: {:?}", args.output);

    Ok(())
}
