use std::fmt;

use crate::error::{Error, Result};
use crate::types::FileUpload;

/// Size ceiling enforced by the hardened upload policy.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 1_048_576;

/// Client-side checks applied before a file is uploaded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UploadPolicy {
    /// Forward every selected file as-is.
    Unrestricted,

    /// Reject files larger than the given number of bytes without sending them.
    MaxBytes(u64),
}

impl UploadPolicy {
    /// The hardened policy with the default 1 MiB ceiling.
    pub const fn hardened() -> Self {
        UploadPolicy::MaxBytes(DEFAULT_MAX_UPLOAD_BYTES)
    }

    /// Returns the size ceiling, if any.
    pub fn max_bytes(&self) -> Option<u64> {
        match self {
            UploadPolicy::Unrestricted => None,
            UploadPolicy::MaxBytes(limit) => Some(*limit),
        }
    }

    /// Check an upload against this policy.
    pub fn check(&self, upload: &FileUpload) -> Result<()> {
        match self.max_bytes() {
            Some(limit) if upload.len() > limit => Err(Error::validation(
                format!(
                    "{} is {} bytes; the maximum is {}",
                    upload.file_name,
                    upload.len(),
                    HumanBytes(limit)
                ),
                Some("file".to_string()),
            )),
            _ => Ok(()),
        }
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::hardened()
    }
}

/// Formats a byte count using binary units when it divides evenly.
pub(crate) struct HumanBytes(pub u64);

impl fmt::Display for HumanBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const KIB: u64 = 1024;
        const MIB: u64 = 1024 * KIB;
        match self.0 {
            n if n >= MIB && n % MIB == 0 => write!(f, "{} MiB", n / MIB),
            n if n >= KIB && n % KIB == 0 => write!(f, "{} KiB", n / KIB),
            n => write!(f, "{n} bytes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hardened() {
        assert_eq!(UploadPolicy::default(), UploadPolicy::MaxBytes(1_048_576));
    }

    #[test]
    fn ceiling_is_inclusive() {
        let policy = UploadPolicy::hardened();
        let at_limit = FileUpload::new("a.txt", vec![0u8; 1_048_576]);
        assert!(policy.check(&at_limit).is_ok());

        let over = FileUpload::new("a.txt", vec![0u8; 1_048_577]);
        let err = policy.check(&over).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("1 MiB"));
    }

    #[test]
    fn unrestricted_accepts_anything() {
        let big = FileUpload::new("big.pdf", vec![0u8; 2 * 1_048_576]);
        assert!(UploadPolicy::Unrestricted.check(&big).is_ok());
    }

    #[test]
    fn human_bytes() {
        assert_eq!(HumanBytes(1_048_576).to_string(), "1 MiB");
        assert_eq!(HumanBytes(2048).to_string(), "2 KiB");
        assert_eq!(HumanBytes(1000).to_string(), "1000 bytes");
    }
}
