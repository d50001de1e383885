use clap::Parser;
use log::debug;
use perfect_numbers::{
    parse_limit, parse_pace, run, Error, OutputFormat, Result, SearchConfig,
};
use std::io::{self, ErrorKind};
use std::process;
use std::time::Duration;

/// Print even perfect numbers 2^(p-1) * (2^p-1) for every Mersenne prime 2^p-1 with p up to
/// the limit, one per line, as soon as each is found.
#[derive(Debug, Parser)]
#[command(name = "perfect-numbers", version, about, long_about = None)]
struct Cli {
    /// Largest exponent p to test [default: 50]
    #[arg(
        value_name = "LIMIT",
        env = "PERFECT_LIMIT",
        value_parser = parse_limit,
        allow_negative_numbers = true
    )]
    limit: Option<u64>,

    /// Seconds to pause after each perfect number, 0 disables pacing [default: 1]
    #[arg(
        long,
        value_name = "SECS",
        env = "PERFECT_PACE_SECONDS",
        value_parser = parse_pace,
        allow_negative_numbers = true
    )]
    pace_seconds: Option<Duration>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        let mut config = SearchConfig::default().with_format(self.format);
        if let Some(limit) = self.limit {
            config = config.with_limit(limit);
        }
        if let Some(pace) = self.pace_seconds {
            config = config.with_pace(pace);
        }
        config
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PERFECT_TRACE", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();
    let code = exit_code(run(&cli.config(), stdout.lock()));
    if code != 0 {
        process::exit(code);
    }
}

/// Report the outcome of a search on stderr, once, and map it to the process exit status
fn exit_code(result: Result<usize>) -> i32 {
    match result {
        Ok(_) => 0,
        // the consumer went away, e.g. `perfect-numbers | head -n 3`
        Err(Error::Io(err)) if err.kind() == ErrorKind::BrokenPipe => 0,
        Err(err) => {
            debug!("search aborted: {:?}", err);
            eprintln!("error: {}", err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::env;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    /// Defaults and environment fallbacks share one test since both touch the process
    /// environment, which is global to the parallel test threads.
    #[test]
    fn cli_defaults_and_env_test() {
        env::remove_var("PERFECT_LIMIT");
        env::remove_var("PERFECT_PACE_SECONDS");
        let cli = Cli::try_parse_from(["perfect-numbers"]).unwrap();
        assert_eq!(cli.config(), SearchConfig::default());

        env::set_var("PERFECT_LIMIT", "7");
        env::set_var("PERFECT_PACE_SECONDS", "0.5");
        let config = Cli::try_parse_from(["perfect-numbers"]).unwrap().config();
        assert_eq!(config.limit(), 7);
        assert_eq!(config.pace(), Duration::from_millis(500));

        // arguments take precedence over the environment
        let config = Cli::try_parse_from(["perfect-numbers", "13", "--pace-seconds", "0"])
            .unwrap()
            .config();
        assert_eq!(config.limit(), 13);
        assert!(config.pace().is_zero());

        // values from the environment are validated like arguments
        env::set_var("PERFECT_LIMIT", "-3");
        assert!(Cli::try_parse_from(["perfect-numbers"]).is_err());

        env::remove_var("PERFECT_LIMIT");
        env::remove_var("PERFECT_PACE_SECONDS");
    }

    #[test]
    fn cli_options_test() {
        let cli = Cli::try_parse_from([
            "perfect-numbers",
            "13",
            "--pace-seconds",
            "0",
            "--format",
            "json",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.limit(), 13);
        assert!(config.pace().is_zero());
        assert_eq!(config.format(), OutputFormat::Json);
    }

    #[test]
    fn cli_rejects_invalid_input_test() {
        assert!(Cli::try_parse_from(["perfect-numbers", "-5"]).is_err());
        assert!(Cli::try_parse_from(["perfect-numbers", "abc"]).is_err());
        assert!(Cli::try_parse_from(["perfect-numbers", "--pace-seconds", "-1"]).is_err());
    }

    #[test]
    fn exit_code_test() {
        assert_eq!(exit_code(Ok(4)), 0);
        assert_eq!(exit_code(Ok(0)), 0);

        let closed = io::Error::new(ErrorKind::BrokenPipe, "closed");
        assert_eq!(exit_code(Err(Error::Io(closed))), 0);

        let full = io::Error::new(ErrorKind::WriteZero, "no space left on device");
        assert_eq!(exit_code(Err(Error::Io(full))), 1);
        assert_eq!(exit_code(Err(Error::NegativeLimit("-1".to_owned()))), 1);
    }
}
