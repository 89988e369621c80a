//! Batch-evaluate benefit requests from a CSV file
//!
//! Reads one request per row, evaluates all four benefits in parallel, and
//! writes either a compact CSV summary or full JSON responses (one per line).

use anyhow::{Context, Result};
use benefit_estimator::benefits::SummaryState;
use benefit_estimator::{BenefitHandler, RateTable, RequestInput};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(about = "Batch benefit eligibility and entitlement estimation")]
struct Args {
    /// CSV file of requests, one per row with camelCase headers
    #[arg(long)]
    input: PathBuf,

    /// Output file; stdout when omitted
    #[arg(long)]
    output: Option<PathBuf>,

    /// Rate table CSV; the built-in reference quarter when omitted
    #[arg(long)]
    rates: Option<PathBuf>,

    /// Emit full JSON responses, one per line, instead of the CSV summary
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SummaryRow {
    row: usize,
    state: SummaryState,
    oas: f64,
    gis: f64,
    alw: f64,
    afs: f64,
    entitlement_sum: f64,
    zero_entitlements: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rates = match &args.rates {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open rate table {}", path.display()))?;
            RateTable::from_csv_reader(file)?
        }
        None => RateTable::default(),
    };
    log::info!("rates effective {}", rates.effective);

    let start = Instant::now();
    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let mut reader = csv::Reader::from_reader(file);
    let requests: Vec<RequestInput> = reader
        .deserialize()
        .collect::<std::result::Result<_, _>>()
        .context("failed to parse request rows")?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let eval_start = Instant::now();
    let responses: Vec<_> = requests
        .par_iter()
        .map(|request| BenefitHandler::new(request, &rates).response())
        .collect();
    println!(
        "Evaluated {} requests in {:?}",
        responses.len(),
        eval_start.elapsed()
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };

    if args.json {
        for response in &responses {
            serde_json::to_writer(&mut out, response)?;
            out.write_all(b"\n")?;
        }
    } else {
        let mut writer = csv::Writer::from_writer(out);
        for (row, response) in responses.iter().enumerate() {
            writer.serialize(SummaryRow {
                row,
                state: response.summary.state,
                oas: response.results.oas.entitlement.result,
                gis: response.results.gis.entitlement.result,
                alw: response.results.alw.entitlement.result,
                afs: response.results.afs.entitlement.result,
                entitlement_sum: response.summary.entitlement_sum,
                zero_entitlements: response.summary.zero_entitlements,
            })?;
        }
        writer.flush()?;
    }

    Ok(())
}
