use std::fmt::{self, Debug, Formatter};

/// An optional password, `None` means the image is neither sealed nor unsealed.
/// The content never shows up in debug output.
#[derive(Default, Clone)]
pub struct Password(Option<String>);

impl Password {
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(password) = &self.0 {
            write!(f, "Password({})", "*".repeat(password.chars().count()))
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password)
    }
}

impl From<Option<&str>> for Password {
    fn from(password: Option<&str>) -> Self {
        Self(password.map(str::to_string))
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(Some(password))
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(password.to_string()))
    }
}

impl AsRef<Option<String>> for Password {
    fn as_ref(&self) -> &Option<String> {
        &self.0
    }
}
