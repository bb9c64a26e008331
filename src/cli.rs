//! Command-line flag parsing (§6.1): `compile [flags] <file>`. Grounded in
//! the teacher's `main.rs` hand-rolled `get_command`/`get_flags` pair —
//! same shape, one positional file argument and a handful of short flags
//! instead of a subcommand enum, since this binary only ever does one
//! thing.

use crate::config::{Backend, CompileConfig};
use std::path::PathBuf;

pub fn parse_args(args: &[String]) -> Result<CompileConfig, String> {
    let mut entry_file: Option<PathBuf> = None;
    let mut config_overrides = ConfigOverrides::default();

    let mut iter = args.iter().peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-g" => config_overrides.debug_symbols = true,
            "-t" => config_overrides.run_tests = true,
            "-x" => config_overrides.strict_error_mode = true,
            "-l" => {
                let backend = iter.next().ok_or("-l requires a backend argument (llvm or c)")?;
                config_overrides.backend = Some(parse_backend(backend)?);
            }
            "-o" => {
                let out = iter.next().ok_or("-o requires an output path argument")?;
                config_overrides.output_path = Some(PathBuf::from(out));
            }
            other if other.starts_with('-') => {
                return Err(format!("unrecognized flag: {other}"));
            }
            positional => {
                if entry_file.is_some() {
                    return Err(format!("unexpected extra positional argument: {positional}"));
                }
                entry_file = Some(PathBuf::from(positional));
            }
        }
    }

    let entry_file = entry_file.ok_or("missing required <file> argument")?;
    let mut config = CompileConfig::new(entry_file);
    config_overrides.apply(&mut config);
    Ok(config)
}

fn parse_backend(word: &str) -> Result<Backend, String> {
    match word {
        "llvm" => Ok(Backend::Llvm),
        "c" => Ok(Backend::C),
        other => Err(format!("unknown backend `{other}`, expected llvm or c")),
    }
}

#[derive(Default)]
struct ConfigOverrides {
    debug_symbols: bool,
    run_tests: bool,
    strict_error_mode: bool,
    backend: Option<Backend>,
    output_path: Option<PathBuf>,
}

impl ConfigOverrides {
    fn apply(self, config: &mut CompileConfig) {
        config.debug_symbols = self.debug_symbols;
        config.run_tests = self.run_tests;
        config.strict_error_mode = self.strict_error_mode;
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if self.output_path.is_some() {
            config.output_path = self.output_path;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn parses_the_entry_file_and_defaults() {
        let config = parse_args(&args(&["main.rn"])).unwrap();
        assert_eq!(config.entry_file, PathBuf::from("main.rn"));
        assert!(!config.debug_symbols);
        assert_eq!(config.backend, Backend::Llvm);
    }

    #[test]
    fn parses_every_flag_together() {
        let config = parse_args(&args(&["-g", "-t", "-x", "-l", "c", "-o", "out.bin", "main.rn"])).unwrap();
        assert!(config.debug_symbols);
        assert!(config.run_tests);
        assert!(config.strict_error_mode);
        assert_eq!(config.backend, Backend::C);
        assert_eq!(config.output_path, Some(PathBuf::from("out.bin")));
    }

    #[test]
    fn missing_entry_file_is_an_error() {
        assert!(parse_args(&args(&["-g"])).is_err());
    }

    #[test]
    fn unknown_flag_is_an_error() {
        assert!(parse_args(&args(&["--bogus", "main.rn"])).is_err());
    }
}
