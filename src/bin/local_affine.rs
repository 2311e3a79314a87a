//! Local alignment executable, affine gap penalty

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pairalign::modules::io::fasta;

#[derive(Parser, Debug)]
#[command(version, about = "Local pairwise alignment with an affine gap penalty")]
struct Cli {
    /// FASTA file containing exactly two sequences
    input: PathBuf,
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
    let alignment = pairalign::local_affine(s1.as_bytes(), s2.as_bytes())?;
    println!("score={:.6}", alignment.score);
    println!("{}", alignment.seq1_string());
    println!("{}", alignment.seq2_string());
    Ok(())
}
