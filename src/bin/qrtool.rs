use clap::{Parser, Subcommand};
use qr_forge::encoder::bitstream::{BitStreamBuilder, codeword_bits, overhead_bytes};
use qr_forge::encoder::gf256::FieldTables;
use qr_forge::encoder::mask::{MaskEvaluator, PenaltyRules};
use qr_forge::encoder::reed_solomon::ReedSolomonEncoder;
use qr_forge::encoder::tables::capacity_table;
use qr_forge::encoder::version::VersionSelector;
use qr_forge::models::ModuleMatrix;
use qr_forge::{EncoderConfig, Result, Version, generate_with};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR Forge CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and print the symbol as text
    Encode {
        #[arg(long)]
        text: String,
        #[arg(long)]
        max_version: Option<u8>,
        #[arg(long, default_value = "iso")]
        rules: PenaltyRules,
        #[arg(long, default_value_t = 4)]
        border: usize,
    },
    /// Print the capacity table for every supported version
    Capacity,
    /// Print the penalty score of all eight masks for a payload
    Masks {
        #[arg(long)]
        text: String,
        #[arg(long, default_value = "iso")]
        rules: PenaltyRules,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Encode {
            text,
            max_version,
            rules,
            border,
        } => encode_cmd(&text, max_version, rules, border),
        Command::Capacity => {
            capacity_cmd();
            Ok(())
        }
        Command::Masks { text, rules } => masks_cmd(&text, rules),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn encode_cmd(text: &str, max_version: Option<u8>, rules: PenaltyRules, border: usize) -> Result<()> {
    let config = match max_version {
        Some(v) => EncoderConfig::new(v)?,
        None => EncoderConfig::default(),
    }
    .with_penalty(rules);

    let start = Instant::now();
    let symbol = generate_with(text.as_bytes(), &config)?;
    let elapsed = start.elapsed();

    println!(
        "Version: {} ({}x{}), mask: {}, payload: {} bytes, time: {:.1?}",
        symbol.version.number(),
        symbol.size,
        symbol.size,
        symbol.mask.index(),
        text.len(),
        elapsed
    );
    print!("{}", symbol.to_text(border));
    Ok(())
}

fn capacity_cmd() {
    println!("{:>7} {:>6} {:>5} {:>5} {:>8}", "version", "size", "data", "ecc", "payload");
    for entry in capacity_table() {
        println!(
            "{:>7} {:>6} {:>5} {:>5} {:>8}",
            entry.version.number(),
            entry.version.size(),
            entry.data_bytes,
            entry.ec_bytes,
            entry.data_bytes - overhead_bytes(entry.version)
        );
    }
}

fn masks_cmd(text: &str, rules: PenaltyRules) -> Result<()> {
    let payload = text.as_bytes();
    let capacity = VersionSelector::new(Version::MAX).select(payload.len())?;
    let data = BitStreamBuilder::build(payload, &capacity)?;
    let ecc = ReedSolomonEncoder::new(FieldTables::global(), capacity.ec_bytes).encode(&data);

    let mut matrix = ModuleMatrix::new(capacity.version);
    matrix.place_structural_patterns();
    matrix.map_data(codeword_bits(data.iter().chain(ecc.iter())));

    let evaluator = MaskEvaluator::new(rules, true);
    let best = evaluator.select_best_mask(&matrix);
    println!(
        "Version {} ({:?} rules), {} payload bytes",
        capacity.version.number(),
        rules,
        payload.len()
    );
    for result in evaluator.score_all(&matrix) {
        let marker = if result.mask == best.mask { " <- selected" } else { "" };
        println!("  mask {}: {:>10.2}{}", result.mask.index(), result.score, marker);
    }
    Ok(())
}
