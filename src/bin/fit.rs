//! Fit alignment executable: the whole first sequence against any
//! contiguous stretch of the second, with an affine gap penalty and
//! optional junction-gated jumps.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pairalign::modules::io::fasta;
use pairalign::{JunctionSet, ScoringScheme};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Fit alignment of a short sequence inside a longer one, with optional jumps"
)]
struct Cli {
    /// FASTA file containing exactly two sequences. With jumps enabled the
    /// second header's description lists junction positions as p1|p2|...
    input: PathBuf,

    /// Score for a match
    #[arg(long = "match", default_value_t = 1.0, allow_negative_numbers = true)]
    match_score: f64,

    /// Penalty for a mismatch
    #[arg(long, default_value_t = -2.0, allow_negative_numbers = true)]
    mismatch: f64,

    /// Penalty for opening a gap
    #[arg(long, default_value_t = -5.0, allow_negative_numbers = true)]
    gap_open: f64,

    /// Penalty for extending a gap
    #[arg(long, default_value_t = -1.0, allow_negative_numbers = true)]
    gap_extend: f64,

    /// One-off penalty for entering the jump state
    #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
    jump_penalty: f64,

    /// Allow jumps across the junction positions declared in the input
    #[arg(long)]
    enable_jumps: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (s1, s2) = fasta::read_pair(&cli.input)?;

    let mut scheme = ScoringScheme {
        match_score: cli.match_score,
        mismatch_score: cli.mismatch,
        gap_open: cli.gap_open,
        gap_extend: cli.gap_extend,
        jump_penalty: cli.jump_penalty,
        enable_jumps: cli.enable_jumps,
        junctions: JunctionSet::new(),
    };
    if cli.enable_jumps {
        scheme.junctions = fasta::junctions_from_description(&s2)?;
    }

    let alignment = pairalign::fit_affine(s1.as_bytes(), s2.as_bytes(), &scheme)?;
    println!("score={:.6}", alignment.score);
    println!("{}", alignment.seq1_string());
    println!("{}", alignment.seq2_string());
    Ok(())
}
