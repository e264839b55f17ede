use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{info, warn};

use crate::expression::Value;
use crate::solver::Solver;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Kryptix - find every arithmetic expression that reaches a goal
#[derive(Parser, Debug)]
#[command(name = "kryptix")]
#[command(about = "Find every way to combine the given numbers with + - * / into the goal value")]
#[command(version)]
pub struct CliArgs {
    /// Goal value the expressions must reach
    #[arg(allow_negative_numbers = true)]
    pub goal: i64,

    /// Numbers to combine, each used exactly once
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    info!(
        "Searching for expressions over {:?} that equal {}",
        args.numbers, args.goal
    );

    let goal = Value::from_integer(args.goal);
    let numbers: Vec<Value> = args.numbers.iter().map(|&n| Value::from_integer(n)).collect();

    let solver = Solver::new();
    let solutions = solver.solve(goal, &numbers);

    if solutions.is_empty() {
        warn!("No matching expression found");
        println!("No solutions.");
    } else {
        for solution in &solutions {
            println!("{}", solution);
        }
        info!("{} solutions found", solutions.len());
    }

    Ok(())
}
