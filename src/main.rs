// jstty: step-through terminal visualizer for JavaScript runtime concepts

mod catalog;
mod stepper;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use catalog::CONCEPTS;
use stepper::Stepper;
use ui::App;

#[derive(Parser)]
#[command(name = "jstty", about = "Step through JavaScript runtime concepts in the terminal")]
struct Cli {
    /// Concept to open (see --list)
    concept: Option<String>,

    /// List available concepts and exit
    #[arg(long)]
    list: bool,

    /// Autoplay interval in milliseconds
    #[arg(long, default_value_t = 1000)]
    interval_ms: u64,
}

fn print_concepts() {
    println!("Available concepts:");
    for concept in CONCEPTS {
        println!("  {:<12} {}", concept.slug, concept.summary);
    }
    println!();
    println!("Usage: jstty <concept>");
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let slug = match (&cli.concept, cli.list) {
        (_, true) | (None, _) => {
            print_concepts();
            return Ok(());
        }
        (Some(slug), false) => slug,
    };

    let Some(concept) = catalog::find(slug) else {
        print_concepts();
        bail!("unknown concept '{}'", slug);
    };

    let content = (concept.build)()
        .with_context(|| format!("invalid bundled content for '{}'", concept.slug))?;
    let stepper = Stepper::new(content);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(stepper, concept.title, Duration::from_millis(cli.interval_ms));
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal UI error")?;

    Ok(())
}
