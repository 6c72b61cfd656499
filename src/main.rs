use arhivpogodi::{AggregateError, ArhivPogodi, ArhivPogodiError, ReportMonth};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(version, about = "Builds a monthly weather report for Saint Petersburg from arhivpogodi.ru.")]
struct Cli {
    /// Month to report on (1-12)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
    month: u32,
    /// Year to report on
    year: i32,
    /// Where to write the report document
    #[arg(long, default_value = "weather_report.md")]
    out: PathBuf,
    /// Print the statistics as JSON to stdout instead of writing the document
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    // clap already bounds the month; this only catches a bad build of the
    // argument definitions.
    let Some(month) = ReportMonth::new(cli.month, cli.year) else {
        eprintln!("month must be between 1 and 12");
        return ExitCode::FAILURE;
    };

    match run(month, &cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(ArhivPogodiError::Aggregate(AggregateError::NoRecords)) => {
            println!("Погода за этот период не найдена");
            ExitCode::FAILURE
        }
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(month: ReportMonth, cli: &Cli) -> Result<(), ArhivPogodiError> {
    let client = ArhivPogodi::new()?;
    let report = client.monthly_report().month(month).call().await?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report.statistics)?;
        println!("{json}");
    } else {
        report.save_to(&cli.out)?;
    }
    Ok(())
}

fn report_error(err: &ArhivPogodiError) {
    eprintln!("error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
