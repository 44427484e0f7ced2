use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{info, warn};
use rand::rngs::OsRng;

use passdict::PassdictError;
use passdict::config::{Config, default_dictionary};
use passdict::generator::PassphraseGenerator;
use passdict::generator::dictionary::Dictionary;
use passdict::report;

#[derive(Parser)]
#[command(
    name = "passdict",
    version,
    about = "Pick random dictionary words to use as a passphrase"
)]
struct Cli {
    /// Number of words to select
    nw: Option<usize>,

    /// Maximum number of letters per word (at least 3)
    nl: Option<usize>,

    /// Minimum total number of letters in the selected words, excluding spaces
    nmin: Option<usize>,

    /// Anything past NMIN is ignored
    #[arg(hide = true)]
    extra: Vec<String>,

    #[arg(short, long, help = "Word list, one word per line")]
    dictionary: Option<PathBuf>,

    #[arg(long, help = "Do not limit letters per word")]
    any_length: bool,

    #[arg(long, help = "Give up after this many rejected draws")]
    max_attempts: Option<usize>,

    #[arg(long, help = "Print words in lower case")]
    lowercase: bool,

    #[arg(short, long, action = ArgAction::Count, help = "More logging (-v, -vv)")]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let explicit_dictionary = cli.dictionary.is_some();
    apply_overrides(&mut config, &cli);

    if !cli.extra.is_empty() {
        println!("*** WARNING: Ignoring extra command line arguments");
        warn!("ignored arguments: {:?}", cli.extra);
    }

    let constraints = config.constraints()?;

    let mut stdout = io::stdout().lock();
    report::write_header(&mut stdout, &constraints)?;

    let dictionary = load_dictionary(&config, explicit_dictionary, constraints.max_word_length())?;
    info!("dictionary holds {} candidate words", dictionary.len());

    let mut generator = PassphraseGenerator::new(dictionary, constraints, config.max_attempts);
    let passphrase = generator.generate(&mut OsRng)?;
    info!("selection accepted after {} attempts", passphrase.selection.attempts);

    report::write_passphrase(&mut stdout, &passphrase, config.lowercase)?;
    stdout.flush()?;
    Ok(())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(nw) = cli.nw {
        config.word_count = nw;
    }
    if let Some(nl) = cli.nl {
        config.max_word_length = nl;
    }
    if let Some(nmin) = cli.nmin {
        config.min_total_length = nmin;
    }
    if let Some(path) = &cli.dictionary {
        config.dictionary = path.clone();
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.max_attempts = max_attempts;
    }
    if cli.any_length {
        config.any_length = true;
    }
    if cli.lowercase {
        config.lowercase = true;
    }
}

/// An explicitly requested word list must exist. The default one may be
/// absent, in which case the bundled list stands in.
fn load_dictionary(
    config: &Config,
    explicit: bool,
    max_word_length: Option<usize>,
) -> Result<Dictionary> {
    let path = &config.dictionary;
    if !explicit && *path == default_dictionary() && !path.exists() {
        warn!("{} not found, using the bundled word list", path.display());
        return Ok(Dictionary::bundled(max_word_length)?);
    }
    Dictionary::load(path, max_word_length)
        .with_context(|| format!("loading word list {}", path.display()))
}

fn report_error(err: &anyhow::Error) {
    match err.downcast_ref::<PassdictError>() {
        Some(PassdictError::SamplingExhausted { .. }) => {
            eprintln!("*** ERROR: Cannot satisfy requested word and/or letter count conditions.");
        }
        _ => eprintln!("*** ERROR: {err:#}"),
    }
    if let Some(remedy) = err.downcast_ref::<PassdictError>().and_then(PassdictError::remedy) {
        eprintln!("*** ERROR: {remedy}");
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("passdict").chain(args.iter().copied())).unwrap()
    }

    fn file_config() -> Config {
        let mut config = Config::default();
        config.word_count = 4;
        config.max_word_length = 6;
        config.min_total_length = 20;
        config.dictionary = PathBuf::from("/srv/words.txt");
        config
    }

    #[test]
    fn no_arguments_keep_file_settings() {
        let mut config = file_config();
        apply_overrides(&mut config, &parse(&[]));
        assert_eq!(config, file_config());
    }

    #[test]
    fn positionals_override_in_order() {
        let mut config = file_config();
        apply_overrides(&mut config, &parse(&["5", "9"]));
        assert_eq!(config.word_count, 5);
        assert_eq!(config.max_word_length, 9);
        assert_eq!(config.min_total_length, 20);
        assert_eq!(config.dictionary, PathBuf::from("/srv/words.txt"));
    }

    #[test]
    fn flags_override_file_settings() {
        let mut config = file_config();
        let cli = parse(&[
            "2", "8", "6", "-d", "mine.txt", "--any-length", "--max-attempts", "50", "--lowercase",
        ]);
        apply_overrides(&mut config, &cli);
        assert_eq!(config.min_total_length, 6);
        assert_eq!(config.dictionary, PathBuf::from("mine.txt"));
        assert_eq!(config.max_attempts, 50);
        assert!(config.any_length);
        assert!(config.lowercase);
    }

    #[test]
    fn trailing_positionals_are_collected_not_applied() {
        let cli = parse(&["2", "8", "6", "9", "10"]);
        assert_eq!(cli.extra, ["9", "10"]);
        let mut config = file_config();
        apply_overrides(&mut config, &cli);
        assert_eq!(config.word_count, 2);
        assert_eq!(config.min_total_length, 6);
    }

    #[test]
    fn malformed_number_is_rejected() {
        assert!(Cli::try_parse_from(["passdict", "three"]).is_err());
        assert!(Cli::try_parse_from(["passdict", "3", "-8"]).is_err());
    }
}
