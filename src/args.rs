use crate::error::{Result, SyncError};
use crate::mode::Mode;
use std::path::PathBuf;

/// Everything a run needs; fixed before traversal starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub mode: Mode,
    pub root: PathBuf,
    pub keep_going: bool,
}

#[derive(Debug, PartialEq)]
pub enum Invocation {
    Help,
    Run {
        config: Config,
        /// No mode flag was given and `Mode::default()` was used.
        mode_defaulted: bool,
    },
}

enum Flag {
    Help,
    Mode(Mode),
    KeepGoing,
}

fn parse_flag(token: &str) -> Option<Flag> {
    match token.to_lowercase().as_str() {
        "-h" | "--help" => Some(Flag::Help),
        "-e" | "--earliest" => Some(Flag::Mode(Mode::Earliest)),
        "-m" | "--modify" => Some(Flag::Mode(Mode::ModifyOnly)),
        "-c" | "--create" => Some(Flag::Mode(Mode::CreateOnly)),
        "-k" | "--keep-going" => Some(Flag::KeepGoing),
        _ => None,
    }
}

/// Parses the arguments after the program name.
///
/// Tokens are read in order and the first help flag or unknown token decides
/// the outcome. The last argument is always the target directory, though it
/// is still checked for flags first. Among mode flags the last one wins.
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Invocation> {
    let Some(root) = args.last() else {
        return Err(SyncError::Usage("Not enough arguments".to_string()));
    };

    let mut mode = None;
    let mut keep_going = false;
    for (i, token) in args.iter().enumerate() {
        let token = token.as_ref();
        match parse_flag(token) {
            Some(Flag::Help) => return Ok(Invocation::Help),
            Some(Flag::Mode(selected)) => mode = Some(selected),
            Some(Flag::KeepGoing) => keep_going = true,
            None if i + 1 == args.len() => {}
            None => {
                return Err(SyncError::Usage(format!(
                    "Argument not recognised \"{}\"",
                    token
                )))
            }
        }
    }

    Ok(Invocation::Run {
        config: Config {
            mode: mode.unwrap_or_default(),
            root: PathBuf::from(root.as_ref()),
            keep_going,
        },
        mode_defaulted: mode.is_none(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_config(args: &[&str]) -> (Config, bool) {
        match parse(args).unwrap() {
            Invocation::Run {
                config,
                mode_defaulted,
            } => (config, mode_defaulted),
            Invocation::Help => panic!("expected a run for {:?}", args),
        }
    }

    #[test]
    fn test_no_arguments_is_usage_error() {
        let err = parse::<&str>(&[]).unwrap_err();
        assert!(err.is_usage());
    }

    #[test]
    fn test_directory_only_defaults_to_earliest() {
        let (config, defaulted) = run_config(&["/d"]);
        assert_eq!(config.mode, Mode::Earliest);
        assert_eq!(config.root, PathBuf::from("/d"));
        assert!(!config.keep_going);
        assert!(defaulted);
    }

    #[test]
    fn test_mode_flags() {
        assert_eq!(run_config(&["-e", "/d"]).0.mode, Mode::Earliest);
        assert_eq!(run_config(&["--modify", "/d"]).0.mode, Mode::ModifyOnly);
        assert_eq!(run_config(&["-c", "/d"]).0.mode, Mode::CreateOnly);
        assert!(!run_config(&["-c", "/d"]).1);
    }

    #[test]
    fn test_flags_are_case_insensitive() {
        assert_eq!(run_config(&["-M", "/d"]).0.mode, Mode::ModifyOnly);
        assert_eq!(run_config(&["--CREATE", "/d"]).0.mode, Mode::CreateOnly);
        assert!(run_config(&["--Keep-Going", "/d"]).0.keep_going);
    }

    #[test]
    fn test_last_mode_wins() {
        assert_eq!(run_config(&["-c", "-m", "/d"]).0.mode, Mode::ModifyOnly);
        assert_eq!(run_config(&["-m", "-c", "-e", "/d"]).0.mode, Mode::Earliest);
    }

    #[test]
    fn test_help_stops_parsing() {
        assert_eq!(parse(&["-h"]).unwrap(), Invocation::Help);
        assert_eq!(parse(&["--help", "/d"]).unwrap(), Invocation::Help);
        assert_eq!(parse(&["-m", "--HELP"]).unwrap(), Invocation::Help);
        assert_eq!(parse(&["-h", "--bogus", "/d"]).unwrap(), Invocation::Help);
    }

    #[test]
    fn test_unknown_flag_before_help_is_usage_error() {
        let err = parse(&["--bogus", "-h", "/d"]).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("--bogus"));
    }

    #[test]
    fn test_unknown_flag_names_token() {
        let err = parse(&["-m", "--bogus", "/d"]).unwrap_err();
        assert!(err.is_usage());
        assert!(err.to_string().contains("--bogus"));
    }

    #[test]
    fn test_last_argument_is_always_directory() {
        // A trailing flag still counts as one, then names the directory.
        let (config, defaulted) = run_config(&["-m", "-e"]);
        assert_eq!(config.root, PathBuf::from("-e"));
        assert_eq!(config.mode, Mode::Earliest);
        assert!(!defaulted);

        // Directory names keep their case.
        assert_eq!(run_config(&["/Data/Photos"]).0.root, PathBuf::from("/Data/Photos"));
    }
}
