// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{anyhow, bail, Context, Result};
use pcset::config::TheoryFile;
use pcset::theory::parse_pitch_classes;
use pcset::{
    aggregate, maximally_distributed, IntervalSequence, PitchClassSequence, PitchClassSet,
    PitchClasses, RescaleMode, SetInput, SetOperation, Universe,
};
use tracing::{debug, Level};

fn print_usage() {
    println!("pcset - Pitch-class set calculator");
    println!();
    println!("Usage: pcset [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("Options:");
    println!("  --config <FILE>         Load universe, mode and named sets (YAML or TOML)");
    println!("  --univ <N>              Universe size (default 12)");
    println!("  --mode <MODE>           Rescale mode: exception, drop, ceiling, round, floor");
    println!("  --verbose               Enable debug logging");
    println!("  --help                  Show this help message");
    println!();
    println!("Commands:");
    println!("  vector <SET>            Interval-class vector");
    println!("  complement <SET>        Pitch classes not in SET");
    println!("  minimize <SET>          Express SET in its smallest universe");
    println!("  rescale <SET> <N>       Rescale SET into universe N");
    println!("  transpose <SET> <T>     Transpose by T");
    println!("  invert <SET> <AXIS>     Invert around AXIS");
    println!("  multiply <SET> <M>      Multiply by M");
    println!("  op <SET> <OP> <SET>     Union (|), intersection (&), difference (-), xor (^)");
    println!("  compare <SET> <SET>     Compare across universes");
    println!("  intervals <SEQ>         Steps between consecutive pitch classes");
    println!("  melody <STEPS> <START>  Rebuild a melody from steps");
    println!("  aggregate <N>           Every pitch class of universe N");
    println!("  maxdist <K>             Maximally distributed K-note set");
    println!();
    println!("SET and SEQ are lists like \"0,4,7\", optionally suffixed with /N for");
    println!("universe N, or @name for an entry from the config file.");
}

/// Global options collected before the command
struct Options {
    file: TheoryFile,
    verbose: bool,
}

impl Options {
    fn univ(&self) -> Universe {
        self.file.theory.universe
    }

    fn mode(&self) -> RescaleMode {
        self.file.theory.rescale_mode
    }

    /// Split `"0,4,7/12"` into values and universe
    fn values(&self, arg: &str) -> Result<(Vec<i64>, Universe)> {
        let (list, univ) = match arg.rsplit_once('/') {
            Some((list, univ)) => (
                list,
                univ.parse::<Universe>()
                    .with_context(|| format!("Invalid universe in '{}'", arg))?,
            ),
            None => (arg, self.univ()),
        };
        Ok((parse_pitch_classes(list)?, univ))
    }

    fn set(&self, arg: &str) -> Result<PitchClassSet> {
        if let Some(name) = arg.strip_prefix('@') {
            return self.file.named_set(name);
        }
        let (values, univ) = self.values(arg)?;
        Ok(PitchClassSet::with_univ(values, univ)?)
    }

    fn sequence(&self, arg: &str) -> Result<PitchClassSequence> {
        if let Some(name) = arg.strip_prefix('@') {
            return self.file.named_sequence(name);
        }
        let (values, univ) = self.values(arg)?;
        Ok(PitchClassSequence::with_univ(values, univ)?)
    }
}

fn parse_int<T: std::str::FromStr>(arg: Option<&String>, what: &str) -> Result<T> {
    let arg = arg.ok_or_else(|| anyhow!("Missing {}", what))?;
    arg.parse::<T>()
        .map_err(|_| anyhow!("Invalid {}: {}", what, arg))
}

fn required<'a>(arg: Option<&'a String>, what: &str) -> Result<&'a str> {
    arg.map(String::as_str).ok_or_else(|| anyhow!("Missing {}", what))
}

fn run(command: &str, args: &[String], opts: &Options) -> Result<()> {
    let mut args = args.iter();
    match command {
        "vector" => {
            let set = opts.set(required(args.next(), "set")?)?;
            println!("{}", set.vector());
        }
        "complement" => {
            let set = opts.set(required(args.next(), "set")?)?;
            println!("{}", set.complement());
        }
        "minimize" => {
            let set = opts.set(required(args.next(), "set")?)?.minimized_univ()?;
            println!("{} (universe {})", set, set.univ());
        }
        "rescale" => {
            let set = opts.set(required(args.next(), "set")?)?;
            let univ: Universe = parse_int(args.next(), "universe")?;
            let rescaled = set.as_univ(univ, opts.mode())?;
            println!("{} (universe {})", rescaled, rescaled.univ());
        }
        "transpose" | "invert" | "multiply" => {
            let set = opts.set(required(args.next(), "set")?)?;
            let n: i64 = parse_int(args.next(), "operand")?;
            let result = match command {
                "transpose" => set.transposed(n),
                "invert" => set.inverted(n),
                _ => set.m_transformed(n),
            };
            println!("{}", result);
        }
        "op" => {
            let lhs = opts.set(required(args.next(), "set")?)?;
            let op: SetOperation = required(args.next(), "operation")?.parse()?;
            let rhs = SetInput::Set(opts.set(required(args.next(), "set")?)?);
            println!("{}", op.apply(&lhs, &rhs)?);
        }
        "compare" => {
            let a = opts.set(required(args.next(), "set")?)?;
            let b = opts.set(required(args.next(), "set")?)?;
            let symbol = match a.cmp(&b) {
                std::cmp::Ordering::Less => "<",
                std::cmp::Ordering::Equal => "==",
                std::cmp::Ordering::Greater => ">",
            };
            println!("{} {} {}", a, symbol, b);
        }
        "intervals" => {
            let seq = opts.sequence(required(args.next(), "sequence")?)?;
            println!("{}", seq.intervals());
        }
        "melody" => {
            let (steps, univ) = opts.values(required(args.next(), "steps")?)?;
            let start: i64 = parse_int(args.next(), "start pitch class")?;
            println!("{}", IntervalSequence::with_univ(steps, univ)?.melody(start));
        }
        "aggregate" => {
            let univ: Universe = parse_int(args.next(), "universe")?;
            println!("{}", aggregate(univ)?);
        }
        "maxdist" => {
            let k: Universe = parse_int(args.next(), "cardinality")?;
            println!("{}", maximally_distributed(k, opts.univ())?);
        }
        other => bail!("Unknown command: {}", other),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = Options {
        file: TheoryFile::default(),
        verbose: false,
    };
    let mut univ_override = None;
    let mut mode_override = None;

    let mut i = 0;
    while i < args.len() && args[i].starts_with("--") {
        match args[i].as_str() {
            "--help" => {
                print_usage();
                return Ok(());
            }
            "--verbose" => opts.verbose = true,
            "--config" => {
                i += 1;
                let path = required(args.get(i), "config path")?;
                opts.file = TheoryFile::load(path)?;
            }
            "--univ" => {
                i += 1;
                univ_override = Some(parse_int::<Universe>(args.get(i), "universe")?);
            }
            "--mode" => {
                i += 1;
                mode_override = Some(required(args.get(i), "mode")?.parse::<RescaleMode>()?);
            }
            other => bail!("Unknown option: {}", other),
        }
        i += 1;
    }

    if let Some(univ) = univ_override {
        opts.file.theory.universe = univ;
    }
    if let Some(mode) = mode_override {
        opts.file.theory.rescale_mode = mode;
    }
    opts.file.validate()?;

    tracing_subscriber::fmt()
        .with_max_level(if opts.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = args.get(i) else {
        print_usage();
        return Ok(());
    };
    debug!(command = %command, univ = opts.univ(), mode = %opts.mode(), "running");

    run(command, &args[i + 1..], &opts)
}
