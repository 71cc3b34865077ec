use std::fmt;
use std::path::PathBuf;

use crate::repository::StorageError;

/// Relative path the bank is read from when nothing else is configured.
pub const DEFAULT_BANK_PATH: &str = "qs.xlsx";

/// Where the spreadsheet bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BankLocation {
    File(PathBuf),
    Url(String),
}

impl BankLocation {
    /// Interpret `raw` as an `http(s)` URL or, failing that, a file path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Fetch the raw workbook bytes.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` for unreadable files, and
    /// `StorageError::Http`/`StorageError::HttpStatus` for failed downloads.
    pub async fn read_bytes(&self) -> Result<Vec<u8>, StorageError> {
        match self {
            BankLocation::File(path) => Ok(tokio::fs::read(path).await?),
            BankLocation::Url(url) => {
                let response = reqwest::get(url.as_str()).await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(StorageError::HttpStatus(status));
                }
                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}

impl Default for BankLocation {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_BANK_PATH))
    }
}

impl fmt::Display for BankLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankLocation::File(path) => write!(f, "{}", path.display()),
            BankLocation::Url(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_detects_urls() {
        assert_eq!(
            BankLocation::parse("https://example.com/qs.xlsx"),
            BankLocation::Url("https://example.com/qs.xlsx".into())
        );
        assert_eq!(
            BankLocation::parse("HTTP://host/qs.xlsx"),
            BankLocation::Url("HTTP://host/qs.xlsx".into())
        );
    }

    #[test]
    fn parse_falls_back_to_paths() {
        assert_eq!(
            BankLocation::parse(" banks/qs.xlsx "),
            BankLocation::File(PathBuf::from("banks/qs.xlsx"))
        );
    }

    #[test]
    fn default_is_relative_bank_file() {
        assert_eq!(BankLocation::default().to_string(), DEFAULT_BANK_PATH);
    }
}
