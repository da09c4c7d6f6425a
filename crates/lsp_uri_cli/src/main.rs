use anyhow::{bail, Result};
use clap::Parser;

mod args;
mod convert;
mod logging;

use args::Args;
use convert::{collect_inputs, convert, Mode};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let platform = args.platform.resolve();
    let mode = if args.encode {
        Mode::Encode
    } else if args.strict {
        Mode::DecodeStrict
    } else {
        Mode::Decode
    };
    tracing::debug!("Converting with platform={} mode={:?}", platform, mode);

    let inputs = collect_inputs(args.input.as_deref(), &args.inputs)?;
    if inputs.is_empty() {
        tracing::warn!("No inputs given");
    }

    let mut rejected = 0usize;
    for input in &inputs {
        let record = convert(input, mode, platform);
        if record.error.is_some() {
            rejected += 1;
        }

        if args.json {
            println!("{}", serde_json::to_string(&record)?);
        } else if let Some(output) = record.output(mode) {
            println!("{}", output);
        } else if let Some(error) = &record.error {
            eprintln!("{}: {}", input, error);
        }
    }

    if rejected > 0 {
        bail!("{} of {} inputs rejected", rejected, inputs.len());
    }

    Ok(())
}
