use schedsim::config::OutputFormat;
use schedsim::console::Console;
use schedsim::metrics::ScheduleExporter;
use schedsim::report::{render_averages, render_gantt, render_table};
use schedsim::{PolicyType, SchedulerError, SimulationConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: schedsim [<batch.json> [--policy <name>] [--quantum <n>]]";

/// Batch file plus command-line overrides of its policy and quantum
#[derive(Debug, Default)]
struct BatchArgs {
    path: String,
    policy: Option<PolicyType>,
    quantum: Option<i64>,
}

fn usage(detail: impl std::fmt::Display) -> SchedulerError {
    SchedulerError::ConfigError(format!("{}\n{}", detail, USAGE))
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Option<BatchArgs>, SchedulerError> {
    let Some(path) = args.next() else {
        return Ok(None);
    };
    if path.starts_with("--") {
        return Err(usage(format!("expected a batch file before {}", path)));
    }

    let mut batch = BatchArgs {
        path,
        ..BatchArgs::default()
    };
    while let Some(flag) = args.next() {
        let value = args
            .next()
            .ok_or_else(|| usage(format!("{} needs a value", flag)))?;
        match flag.as_str() {
            "--policy" => batch.policy = Some(value.parse()?),
            "--quantum" => {
                let quantum = value
                    .parse()
                    .map_err(|_| usage(format!("invalid quantum: {}", value)))?;
                batch.quantum = Some(quantum);
            }
            _ => return Err(usage(format!("unknown option: {}", flag))),
        }
    }
    Ok(Some(batch))
}

fn run_batch(args: BatchArgs) -> Result<(), SchedulerError> {
    let mut config = SimulationConfig::from_path(&args.path)?;
    if let Some(policy) = args.policy {
        config = config.with_policy(policy);
    }
    if let Some(quantum) = args.quantum {
        config = config.with_quantum(quantum);
    }

    let (scheduler, processes) = config.build()?;
    info!("Loaded {} processes from {}", processes.len(), args.path);

    let schedule = scheduler.run(&processes);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match config.output {
        OutputFormat::Table => {
            writeln!(out, "{}", schedule.policy())?;
            write!(out, "{}", render_table(&schedule))?;
            writeln!(out, "{}", render_gantt(&schedule))?;
            writeln!(out, "{}", render_averages(&schedule))?;
        }
        OutputFormat::Json => {
            let json = ScheduleExporter::new(&schedule).export_json()?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}

fn run_console() -> Result<(), SchedulerError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock()).run()
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let result = parse_args(std::env::args().skip(1)).and_then(|batch| match batch {
        Some(args) => run_batch(args),
        None => run_console(),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("schedsim: {}", e);
            ExitCode::FAILURE
        }
    }
}
