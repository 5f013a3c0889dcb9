use std::fmt::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use twentyfour::solver::constants::DEFAULT_TARGET;
use twentyfour::utils::{format_elapsed, format_solution_count};
use twentyfour::{Solution, Solver, SolverConfig, parse_numbers};

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

/// Twentyfour - Combine every number exactly once with + - * / to hit a target
#[derive(Parser, Debug)]
#[command(name = "twentyfour")]
#[command(about = "Find every way to combine the given numbers into the target value")]
#[command(version)]
pub struct CliArgs {
    /// Numbers to combine, each used exactly once
    #[arg(required = true, allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Target value to match exactly
    #[arg(short, long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    pub target: f64,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Search on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Also print each solution as an infix expression
    #[arg(long)]
    pub expressions: bool,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<f64>,
    pub solver: SolverConfig,
    pub log_level: LogLevel,
    pub show_expressions: bool,
}

impl CliConfig {
    /// Build a configuration from parsed arguments, validating every number
    pub fn from_args(args: CliArgs) -> Result<Self> {
        let numbers = parse_numbers(&args.numbers).context("Invalid input numbers")?;

        Ok(Self {
            numbers,
            solver: SolverConfig {
                target: args.target,
                parallel: !args.sequential,
                ..SolverConfig::default()
            },
            log_level: args.log_level,
            show_expressions: args.expressions,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliConfig::from_args(CliArgs::parse())
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
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    info!(
        "Searching for ways to combine {:?} into {}",
        config.numbers, config.solver.target
    );

    let solver = Solver::new(config.solver);
    let start = Instant::now();
    let solutions = solver
        .solve(&config.numbers)
        .context("Solver failed")?;
    let elapsed = start.elapsed();

    if solutions.is_empty() {
        warn!("No matching derivation found");
    }

    print!(
        "{}",
        render(&solutions, elapsed, config.show_expressions)?
    );
    Ok(())
}

/// Format every solution trace followed by the count and timing summary
pub fn render(solutions: &[Solution], elapsed: Duration, show_expressions: bool) -> Result<String> {
    let mut out = String::new();

    for solution in solutions {
        writeln!(out, "{}", solution)?;
        if show_expressions
            && let Some(expr) = solution.expression()
        {
            writeln!(out, "{} = {}", expr, solution.result())?;
        }
        writeln!(out, "======")?;
    }

    writeln!(
        out,
        "-=- {}, time taken {} -=-",
        format_solution_count(solutions.len()),
        format_elapsed(elapsed)
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["twentyfour", "1", "5", "5", "5"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.numbers, vec!["1", "5", "5", "5"]);
            assert_eq!(args.target, 24.0);
            assert!(matches!(args.log_level, LogLevel::Warn));
            assert!(!args.sequential);
            assert!(!args.expressions);
        }
    }

    #[test]
    fn test_cli_args_custom_target_and_negative_numbers() {
        let args = CliArgs::try_parse_from([
            "twentyfour",
            "--target",
            "-4",
            "-2",
            "2",
            "--sequential",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.target, -4.0);
            assert_eq!(args.numbers, vec!["-2", "2"]);
            assert!(args.sequential);
        }
    }

    #[test]
    fn test_cli_args_require_numbers() {
        assert!(CliArgs::try_parse_from(["twentyfour"]).is_err());
    }

    #[test]
    fn test_config_from_args() {
        let args = CliArgs {
            numbers: vec!["2".to_string(), "2".to_string()],
            target: 4.0,
            log_level: LogLevel::Info,
            sequential: true,
            expressions: true,
        };
        let config = CliConfig::from_args(args);
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.numbers, vec![2.0, 2.0]);
            assert_eq!(config.solver.target, 4.0);
            assert!(!config.solver.parallel);
            assert!(config.show_expressions);
        }
    }

    #[test]
    fn test_config_rejects_invalid_number() {
        let args = CliArgs {
            numbers: vec!["2".to_string(), "x".to_string()],
            target: 24.0,
            log_level: LogLevel::Warn,
            sequential: false,
            expressions: false,
        };
        let config = CliConfig::from_args(args);
        assert!(config.is_err());
        if let Err(err) = config {
            assert!(format!("{:#}", err).contains("'x'"));
        }
    }

    #[test]
    fn test_render_traces_and_summary() {
        let solutions = twentyfour::solve(&[2.0, 2.0], 4.0);
        assert!(solutions.is_ok());
        if let Ok(solutions) = solutions {
            let output = render(&solutions, Duration::from_millis(3), false);
            assert_eq!(
                output.ok().as_deref(),
                Some(
                    "2, 2\n2 + 2: 4\nresult: 4\n======\n\
                     2, 2\n2 * 2: 4\nresult: 4\n======\n\
                     -=- 2 solutions, time taken (milliseconds): 3 -=-\n"
                )
            );

            let output = render(&solutions[..1], Duration::from_micros(40), true);
            assert_eq!(
                output.ok().as_deref(),
                Some(
                    "2, 2\n2 + 2: 4\nresult: 4\n2 + 2 = 4\n======\n\
                     -=- 1 solution, time taken (microseconds): 40 -=-\n"
                )
            );
        }
    }

    #[test]
    fn test_render_without_solutions() {
        let output = render(&[], Duration::from_nanos(900), true);
        assert_eq!(
            output.ok().as_deref(),
            Some("-=- No solution, time taken (nanoseconds): 900 -=-\n")
        );
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
