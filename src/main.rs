use fips_sha256::{
    Digest, Result, Sha256Error, StderrTrace, digest_with_trace, sha256::padding::bit_length,
};

use std::{
    env,
    fs::{self, File},
    io::{self, Read},
    process,
};

struct Config {
    verbose: bool,
    check: Option<String>,
    filename: String,
}

impl Config {
    fn from_args(mut args: impl Iterator<Item = String>) -> Option<Config> {
        let mut verbose = false;
        let mut check = None;
        let mut filename = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-v" | "--verbose" => verbose = true,
                "-c" | "--check" => check = Some(args.next()?),
                _ if filename.is_none() => filename = Some(arg),
                _ => return None,
            }
        }

        Some(Config {
            verbose,
            check,
            filename: filename?,
        })
    }
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
fn main() {
    let mut args = env::args();
    let bin_name = args.next().unwrap_or_else(|| "fips_sha256".to_string());

    let Some(cfg) = Config::from_args(args) else {
        eprintln!("Usage: {bin_name} [--verbose] [--check <sha256 hex>] <filename | ->");
        process::exit(1);
    };

    match run(&cfg) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Hash the input and print it; returns false when a `--check` digest does not match
fn run(cfg: &Config) -> Result<bool> {
    let msg = read_input(&cfg.filename)?;

    let d = if cfg.verbose {
        digest_with_trace(&msg, StderrTrace)?
    } else {
        fips_sha256::digest(&msg)?
    };
    println!("{d}  {}", cfg.filename);

    match &cfg.check {
        None => Ok(true),
        Some(expected) => {
            let matched = expected.parse::<Digest>()? == d;
            println!("{}: {}", cfg.filename, if matched { "OK" } else { "FAILED" });
            Ok(matched)
        }
    }
}

fn read_input(filename: &str) -> Result<Vec<u8>> {
    if filename == "-" {
        let mut buffer = Vec::new();
        io::stdin().lock().read_to_end(&mut buffer)?;
        return Ok(buffer);
    }

    // Check file size first
    let len = input_len(fs::metadata(filename)?.len())?;

    let mut buffer = Vec::with_capacity(len);
    File::open(filename)?.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// A file of `file_size` bytes must fit both the length field and memory
fn input_len(file_size: u64) -> Result<usize> {
    bit_length(file_size)?;
    usize::try_from(file_size).map_err(|_| Sha256Error::InputTooLarge { len: file_size })
}
