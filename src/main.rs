use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use profmap::layout::{Canvas, LayoutConfig};
use profmap::profile;
use profmap::render::colors::ColorGenerator;
use profmap::render::label::{place_label, Label, LabelStyle};
use profmap::render::{build_draw_commands, DrawCommand};

/// Lay out a function-level profile as a squarified treemap and print the
/// resulting draw commands.
#[derive(Debug, Parser)]
#[command(name = "profmap", version)]
struct Args {
    /// Profile to visualize (JSON array of entries, or "<seconds> <name>" lines)
    #[arg(value_name = "PROFILE")]
    profile: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = LayoutConfig::default().canvas.width)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = LayoutConfig::default().canvas.height)]
    height: f64,

    /// Blend factor pulling colors toward white
    #[arg(long, default_value_t = ColorGenerator::default().pastel_factor)]
    pastel: f64,

    /// Random candidates drawn per color
    #[arg(long, default_value_t = ColorGenerator::default().max_draws)]
    draws: usize,

    /// Seed for a reproducible palette
    #[arg(long, env = "PROFMAP_SEED")]
    seed: Option<u64>,

    /// Emit draw commands as JSON
    #[arg(long)]
    json: bool,

    /// Include centered label placements
    #[arg(long)]
    labels: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    command: &'a DrawCommand,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<Label>,
}

fn run(args: Args) -> Result<()> {
    let entries = profile::load_profile(&args.profile)?;
    let items = profile::into_weighted_items(&entries);

    let canvas = Canvas::new(args.width, args.height);
    let generator = ColorGenerator::new(args.pastel, args.draws);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let commands = build_draw_commands(&items, canvas, &generator, &mut rng)
        .with_context(|| format!("Failed to lay out {}", args.profile.display()))?;

    let style = LabelStyle::for_canvas(canvas);
    let outputs: Vec<Output> = commands
        .iter()
        .map(|command| Output {
            command,
            label: if args.labels { place_label(command, &style) } else { None },
        })
        .collect();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.json {
        serde_json::to_writer_pretty(&mut out, &outputs)?;
        writeln!(out)?;
    } else {
        for output in &outputs {
            let DrawCommand { name, rect: r, color } = output.command;
            write!(
                out,
                "{} {} {} {} {} {}",
                r.x as i64, r.y as i64, r.w as i64, r.h as i64, color, name
            )?;
            if let Some(label) = &output.label {
                write!(out, "\t@{},{} {:?}", label.x as i64, label.y as i64, label.text)?;
            }
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("profmap=info".parse().expect("static directive")),
        )
        .init();

    let args = Args::parse();

    if !args.profile.is_file() {
        eprintln!("Error, no such file: '{}'", args.profile.display());
        return ExitCode::FAILURE;
    }

    tracing::info!("profmap starting, profile: {:?}", args.profile);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
