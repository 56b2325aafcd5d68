use std::fs;

use clap::Parser;
use relset::run_script;
use tracing_subscriber::EnvFilter;

/// relset evaluates set and relation algebra over small, hand-typed sets.
///
/// Each line of the script is one command, for example `A = 1, 2, 3`,
/// `union(A, B)`, `let S = compose(R, E)` or `assert ref(R, A2)`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells relset to read the script from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Starts from the preset sets U, A, B, C, D, E, A2, B2, C2 and R.
    #[arg(short, long)]
    presets: bool,

    /// Logs more detail to stderr; repeat for more. `RUST_LOG` takes
    /// precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
                                              eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                        &args.contents);
                                              std::process::exit(1);
                                          })
    } else {
        args.contents
    };

    match run_script(&script, args.presets) {
        Ok(outcomes) => {
            for outcome in outcomes {
                println!("{outcome}");
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
