use anyhow::{bail, Context, Result};
use nwalign::{AlignConfig, AlignMode, AlignTask, Alignment};

const USAGE: &str = "usage: nwalign [--banded] [--radius N] [--length N] [--score-only] SEQ1 SEQ2";

fn main() -> Result<()> {
    env_logger::init();

    let mut config = AlignConfig {
        task: AlignTask::Path,
        ..AlignConfig::default()
    };
    let mut sequences = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--banded" => config.mode = AlignMode::Banded,
            "--score-only" => config.task = AlignTask::Score,
            "--radius" => {
                config.band_radius = args
                    .next()
                    .context("--radius expects a value")?
                    .parse()
                    .context("--radius expects an integer")?;
            }
            "--length" => {
                let length = args
                    .next()
                    .context("--length expects a value")?
                    .parse()
                    .context("--length expects an integer")?;
                config.align_length = Some(length);
            }
            _ => sequences.push(arg),
        }
    }

    let [seq1, seq2] = sequences.as_slice() else {
        bail!(USAGE);
    };

    let result = Alignment::run(config, seq1, seq2)?;
    match result.score {
        Some(score) => {
            println!("score: {score}");
            if let Some((aligned1, aligned2)) = result.aligned {
                println!("{aligned1}");
                println!("{aligned2}");
            }
        }
        None => println!("No alignment possible"),
    }

    Ok(())
}
