use std::path::PathBuf;

use clap::Args;

use crate::cli::{ask_for_password, resolve_password};
use crate::CliResult;

/// Unveils a text message from a PNG image, unsealing it first when a password is given
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to seal the image
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Ask for the password on the terminal
    #[arg(long, conflicts_with = "password")]
    pub ask_password: bool,

    /// Source image that contains the message, sealed or plain
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Nonce written when sealing, defaults to iv_<name> next to the source image
    #[arg(long = "iv", value_name = "nonce file")]
    pub nonce_file: Option<PathBuf>,

    /// The message is also written into this file
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,

    /// Keep the unsealed image as new_<name> next to the source image
    #[arg(long)]
    pub keep_decrypted: bool,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        let password =
            resolve_password(self.password, self.ask_password, || ask_for_password(false))?;

        let mut api = scatterstego_core::api::unveil::prepare()
            .from_secret_file(self.media)
            .using_password(password)
            .keep_unsealed_image(self.keep_decrypted);
        if let Some(nonce_file) = self.nonce_file {
            api = api.with_nonce_file(nonce_file);
        }
        if let Some(output_file) = self.output_file {
            api = api.into_output_file(output_file);
        }

        println!("{}", api.execute()?);

        Ok(())
    }
}
