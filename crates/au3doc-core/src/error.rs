//! Construction-time errors for the documentation registry

use thiserror::Error;

/// Errors raised while building hover/completion tables.
///
/// All failures are construction-time; lookups signal a miss with
/// `None` instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocError {
    /// A signature without a usable call-syntax label. A silently
    /// skipped entry would be indistinguishable from "no documentation
    /// exists", so the whole build fails instead.
    #[error("invalid signature for name={name} in module={module}")]
    InvalidSignature { name: String, module: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_entry_and_module() {
        let err = DocError::InvalidSignature {
            name: "_FTP_Open".to_string(),
            module: "ftpex".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid signature for name=_FTP_Open in module=ftpex"
        );
    }
}
