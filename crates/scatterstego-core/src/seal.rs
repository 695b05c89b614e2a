//! Sealing of finished stego images with a password.
//!
//! Files are named after the image they protect:
//! - `picture.png` is sealed into `encrypted_picture.png`
//! - the nonce needed to open it again goes into `iv_picture.png`
//! - unsealing `encrypted_picture.png` to disk writes `new_picture.png`

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};
use scatterstego_seal::{decrypt, derive_key, encrypt, nonce_from_slice};

use crate::{Result, SteganoError};

pub const SEALED_PREFIX: &str = "encrypted_";
pub const NONCE_PREFIX: &str = "iv_";
pub const UNSEALED_PREFIX: &str = "new_";

/// the two files written when sealing an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealedFile {
    pub ciphertext: PathBuf,
    pub nonce: PathBuf,
}

fn with_prefix(path: &Path, prefix: &str) -> Result<PathBuf> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(SteganoError::InvalidFileName)?;

    Ok(path.with_file_name(format!("{prefix}{name}")))
}

pub fn sealed_path(plain: &Path) -> Result<PathBuf> {
    with_prefix(plain, SEALED_PREFIX)
}

pub fn nonce_path_for(plain: &Path) -> Result<PathBuf> {
    with_prefix(plain, NONCE_PREFIX)
}

/// the name of the image before it was sealed, `encrypted_a.png` becomes `a.png`.
/// Names without the prefix are kept as they are.
pub fn plain_path_of(sealed: &Path) -> Result<PathBuf> {
    let name = sealed
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(SteganoError::InvalidFileName)?;
    let plain = name.strip_prefix(SEALED_PREFIX).unwrap_or(name);
    if plain.is_empty() {
        return Err(SteganoError::InvalidFileName);
    }

    Ok(sealed.with_file_name(plain))
}

pub fn unsealed_path(sealed: &Path) -> Result<PathBuf> {
    with_prefix(&plain_path_of(sealed)?, UNSEALED_PREFIX)
}

/// where [`seal_file`] put the nonce for the given sealed file
pub fn default_nonce_path(sealed: &Path) -> Result<PathBuf> {
    nonce_path_for(&plain_path_of(sealed)?)
}

/// encrypts the file at `plain` with a key derived from `password`, the original stays untouched
pub fn seal_file(plain: &Path, password: &str) -> Result<SealedFile> {
    let data = fs::read(plain).map_err(|source| {
        error!("Error reading {plain:?}: {source}");
        SteganoError::ReadError { source }
    })?;
    let key = derive_key(password);
    let (cipher_data, nonce) = encrypt(&key, &data).map_err(SteganoError::EncryptionError)?;

    let sealed = SealedFile {
        ciphertext: sealed_path(plain)?,
        nonce: nonce_path_for(plain)?,
    };
    // nonce first, a ciphertext without its nonce can never be opened again
    fs::write(&sealed.nonce, nonce).map_err(|source| SteganoError::WriteError { source })?;
    if let Err(source) = fs::write(&sealed.ciphertext, cipher_data) {
        error!("Error writing {:?}: {source}", sealed.ciphertext);
        let _ = fs::remove_file(&sealed.nonce);
        return Err(SteganoError::WriteError { source });
    }
    debug!("sealed {plain:?} into {:?}", sealed.ciphertext);

    Ok(sealed)
}

/// decrypts a sealed file in memory and returns the original bytes
pub fn unseal_bytes(sealed: &Path, nonce_file: &Path, password: &str) -> Result<Vec<u8>> {
    let data = fs::read(sealed).map_err(|source| {
        error!("Error reading {sealed:?}: {source}");
        SteganoError::ReadError { source }
    })?;
    let raw_nonce = fs::read(nonce_file).map_err(|source| {
        error!("Error reading nonce {nonce_file:?}: {source}");
        SteganoError::ReadError { source }
    })?;
    let nonce = nonce_from_slice(&raw_nonce).map_err(SteganoError::InvalidNonce)?;

    decrypt(&derive_key(password), &data, &nonce).map_err(SteganoError::DecryptionError)
}

/// decrypts a sealed file and writes the result next to it, see [`unsealed_path`].
/// The decrypted bytes are returned along with the written path.
pub fn unseal_file(
    sealed: &Path,
    nonce_file: &Path,
    password: &str,
) -> Result<(PathBuf, Vec<u8>)> {
    let data = unseal_bytes(sealed, nonce_file, password)?;
    let target = unsealed_path(sealed)?;
    fs::write(&target, &data).map_err(|source| SteganoError::WriteError { source })?;
    debug!("unsealed {sealed:?} into {target:?}");

    Ok((target, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn should_name_files_after_the_image() {
        let plain = Path::new("out/Half-Moon-2.png");

        assert_eq!(
            sealed_path(plain).unwrap(),
            Path::new("out/encrypted_Half-Moon-2.png")
        );
        assert_eq!(
            nonce_path_for(plain).unwrap(),
            Path::new("out/iv_Half-Moon-2.png")
        );

        let sealed = Path::new("out/encrypted_Half-Moon-2.png");
        assert_eq!(plain_path_of(sealed).unwrap(), plain);
        assert_eq!(
            unsealed_path(sealed).unwrap(),
            Path::new("out/new_Half-Moon-2.png")
        );
        assert_eq!(
            default_nonce_path(sealed).unwrap(),
            Path::new("out/iv_Half-Moon-2.png")
        );
    }

    #[test]
    fn should_keep_names_without_prefix() {
        let sealed = Path::new("secret.bin");

        assert_eq!(plain_path_of(sealed).unwrap(), Path::new("secret.bin"));
        assert_eq!(unsealed_path(sealed).unwrap(), Path::new("new_secret.bin"));
    }

    #[test]
    fn should_reject_paths_without_file_name() {
        assert!(matches!(
            sealed_path(Path::new("..")),
            Err(SteganoError::InvalidFileName)
        ));
        assert!(matches!(
            plain_path_of(Path::new("encrypted_")),
            Err(SteganoError::InvalidFileName)
        ));
    }

    #[test]
    fn should_seal_and_unseal_a_file() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("image.png");
        let content: Vec<u8> = (0..=255).cycle().take(2000).collect();
        fs::write(&plain, &content).unwrap();

        let sealed = seal_file(&plain, "secret password").unwrap();
        assert_eq!(sealed.ciphertext, dir.path().join("encrypted_image.png"));
        assert_eq!(sealed.nonce, dir.path().join("iv_image.png"));
        assert_ne!(fs::read(&sealed.ciphertext).unwrap(), content);
        assert_eq!(fs::read(&sealed.nonce).unwrap().len(), 24);

        let bytes = unseal_bytes(&sealed.ciphertext, &sealed.nonce, "secret password").unwrap();
        assert_eq!(bytes, content);

        let (written, data) =
            unseal_file(&sealed.ciphertext, &sealed.nonce, "secret password").unwrap();
        assert_eq!(written, dir.path().join("new_image.png"));
        assert_eq!(data, content);
        assert_eq!(fs::read(written).unwrap(), content);
    }

    #[test]
    fn should_fail_with_the_wrong_password() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("image.png");
        fs::write(&plain, b"plain bytes").unwrap();
        let sealed = seal_file(&plain, "right").unwrap();

        let result = unseal_bytes(&sealed.ciphertext, &sealed.nonce, "wrong");
        assert!(matches!(result, Err(SteganoError::DecryptionError(_))));
    }

    #[test]
    fn should_fail_for_a_broken_nonce_file() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("image.png");
        fs::write(&plain, b"plain bytes").unwrap();
        let sealed = seal_file(&plain, "pw").unwrap();
        fs::write(&sealed.nonce, [0u8; 5]).unwrap();

        let result = unseal_bytes(&sealed.ciphertext, &sealed.nonce, "pw");
        assert!(matches!(result, Err(SteganoError::InvalidNonce(_))));
    }

    #[test]
    fn should_fail_for_missing_files() {
        let dir = TempDir::new().unwrap();

        assert!(matches!(
            seal_file(&dir.path().join("nope.png"), "pw"),
            Err(SteganoError::ReadError { .. })
        ));
        assert!(matches!(
            unseal_bytes(
                &dir.path().join("encrypted_nope.png"),
                &dir.path().join("iv_nope.png"),
                "pw"
            ),
            Err(SteganoError::ReadError { .. })
        ));
    }

    #[test]
    fn should_not_leave_a_ciphertext_without_nonce() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("image.png");
        fs::write(&plain, b"plain bytes").unwrap();
        // a directory in place of the nonce file makes writing it fail
        fs::create_dir(dir.path().join("iv_image.png")).unwrap();

        let result = seal_file(&plain, "pw");

        assert!(matches!(result, Err(SteganoError::WriteError { .. })));
        assert!(!dir.path().join("encrypted_image.png").exists());
    }

    #[test]
    fn should_remove_the_nonce_when_the_ciphertext_cannot_be_written() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("image.png");
        fs::write(&plain, b"plain bytes").unwrap();
        fs::create_dir(dir.path().join("encrypted_image.png")).unwrap();

        let result = seal_file(&plain, "pw");

        assert!(matches!(result, Err(SteganoError::WriteError { .. })));
        assert!(!dir.path().join("iv_image.png").exists());
    }
}
