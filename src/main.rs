#[macro_use]
extern crate log;

use std::error::Error;

use clap::Parser;
use eqsplit::{render_plan, PlanFormat, Splitter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    #[arg(short, long, default_value = "0")]
    begin: u64,

    #[arg(short, long)]
    end: u64,

    #[arg(short, long, default_value = "1")]
    splits: u64,

    #[arg(short, long, value_enum, default_value_t = PlanFormat::Plain)]
    format: PlanFormat,

    /// Repeat for more log output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> simplelog::LevelFilter {
    match verbose {
        0 => simplelog::LevelFilter::Info,
        1 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    simplelog::TermLogger::init(
        log_level(args.verbose),
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let splitter = Splitter::try_new(args.begin, args.end, args.splits)?;
    debug!(
        "planned {} chunks over [{}, {})",
        splitter.count(),
        splitter.begin_pos(),
        splitter.end_pos()
    );

    print!("{}", render_plan(&splitter, args.format)?);
    Ok(())
}
