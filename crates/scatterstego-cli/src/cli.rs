use clap::{Parser, Subcommand};
use dialoguer::Password;
use log::error;
use scatterstego_core::{CodecOptions, SteganoError};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Experimental: seed for the random gaps between the hidden units
    #[arg(long = "x-gap-seed", value_name = "seed")]
    pub gap_seed: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn codec_options(&self) -> CodecOptions {
        CodecOptions {
            gap_seed: self.gap_seed,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
}

/// prompts for a password on the terminal, a failed prompt is an error
pub fn ask_for_password(confirm: bool) -> CliResult<String> {
    let prompt = Password::new().with_prompt("Enter the password");
    let prompt = if confirm {
        prompt.with_confirmation("Repeat the password", "Error: the passwords don't match.")
    } else {
        prompt
    };

    prompt.interact().map_err(prompt_error)
}

/// the password given on the command line, or the one from `prompt` when asking was requested
pub fn resolve_password<F>(
    given: Option<String>,
    ask: bool,
    prompt: F,
) -> CliResult<Option<String>>
where
    F: FnOnce() -> CliResult<String>,
{
    if ask {
        prompt().map(Some)
    } else {
        Ok(given)
    }
}

fn prompt_error(e: dialoguer::Error) -> SteganoError {
    error!("Could not read the password: {e}");
    match e {
        dialoguer::Error::IO(source) => SteganoError::IoError(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io;
    use std::path::Path;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_hide_with_seed() {
        let args = CliArgs::parse_from([
            "scatterstego",
            "--x-gap-seed",
            "42",
            "hide",
            "-i",
            "carrier.png",
            "-o",
            "secret.png",
            "-m",
            "HELLO",
            "-p",
            "pw",
        ]);

        assert_eq!(args.codec_options(), CodecOptions::with_gap_seed(42));
        match args.command {
            Commands::Hide(hide) => {
                assert_eq!(hide.image, Path::new("carrier.png"));
                assert_eq!(hide.write_to_file, Path::new("secret.png"));
                assert_eq!(hide.message, "HELLO");
                assert_eq!(hide.password.as_deref(), Some("pw"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn should_parse_unveil() {
        let args = CliArgs::parse_from([
            "scatterstego",
            "unveil",
            "-i",
            "encrypted_secret.png",
            "--iv",
            "iv_secret.png",
            "--keep-decrypted",
        ]);

        assert_eq!(args.codec_options(), CodecOptions::default());
        match args.command {
            Commands::Unveil(unveil) => {
                assert_eq!(unveil.media, Path::new("encrypted_secret.png"));
                assert_eq!(unveil.nonce_file.as_deref(), Some(Path::new("iv_secret.png")));
                assert!(unveil.keep_decrypted);
                assert_eq!(unveil.password, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn should_not_accept_password_and_prompt_together() {
        let result = CliArgs::try_parse_from([
            "scatterstego",
            "unveil",
            "-i",
            "secret.png",
            "-p",
            "pw",
            "--ask-password",
        ]);

        assert!(result.is_err());
    }

    #[test]
    fn should_parse_ask_password() {
        let args = CliArgs::parse_from([
            "scatterstego",
            "hide",
            "-i",
            "carrier.png",
            "-o",
            "secret.png",
            "-m",
            "HELLO",
            "--ask-password",
        ]);

        match args.command {
            Commands::Hide(hide) => {
                assert!(hide.ask_password);
                assert_eq!(hide.password, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn should_turn_a_failed_prompt_into_an_io_error() {
        let e = dialoguer::Error::IO(io::Error::new(io::ErrorKind::Other, "not a terminal"));

        match prompt_error(e) {
            SteganoError::IoError(source) => assert_eq!(source.to_string(), "not a terminal"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn should_fail_when_the_prompt_fails() {
        let result = resolve_password(None, true, || {
            Err(SteganoError::IoError(io::Error::new(
                io::ErrorKind::Other,
                "not a terminal",
            )))
        });

        assert!(matches!(result, Err(SteganoError::IoError(_))));
    }

    #[test]
    fn should_only_prompt_when_asked() {
        let given = resolve_password(Some("pw".to_string()), false, || {
            panic!("must not prompt")
        })
        .unwrap();
        assert_eq!(given.as_deref(), Some("pw"));

        let prompted = resolve_password(None, true, || Ok("typed".to_string())).unwrap();
        assert_eq!(prompted.as_deref(), Some("typed"));
    }
}
