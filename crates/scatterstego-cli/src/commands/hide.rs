use std::path::PathBuf;

use clap::Args;
use log::info;
use scatterstego_core::CodecOptions;

use crate::cli::{ask_for_password, resolve_password};
use crate::CliResult;

/// Hides a text message in a PNG image, sealed when a password is given
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to seal the image
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Ask for the password on the terminal
    #[arg(long, conflicts_with = "password")]
    pub ask_password: bool,

    /// PNG image that carries the message, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Final image will be stored as file, must be a PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        self.run_with_prompt(options, || ask_for_password(true))
    }

    fn run_with_prompt<F>(self, options: CodecOptions, prompt: F) -> CliResult<()>
    where
        F: FnOnce() -> CliResult<String>,
    {
        let password = resolve_password(self.password, self.ask_password, prompt)?;

        let report = scatterstego_core::api::hide::prepare()
            .with_options(options)
            .with_message(&self.message)
            .with_image(self.image)
            .with_output(self.write_to_file)
            .use_password(password)
            .execute()?;

        info!("message hidden in {:?}", report.image);
        if let Some(sealed) = report.sealed {
            println!("{}", sealed.ciphertext.display());
            println!("{}", sealed.nonce.display());
        } else {
            println!("{}", report.image.display());
        }

        Ok(())
    }
}
