//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling the client and front-end.

use std::time::Duration;

use arrrg_derive::CommandLine;

use crate::types::{DEFAULT_MAX_UPLOAD_BYTES, UploadPolicy};

/// Command-line arguments for the docchat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Base URL of the chat server.
    #[arrrg(optional, "Chat server URL (default: $DOCCHAT_BASE_URL or http://127.0.0.1:5000/)", "URL")]
    pub base_url: Option<String>,

    /// Transport timeout in seconds.
    #[arrrg(optional, "Give up on a request after this many seconds (default: never)", "SECS")]
    pub timeout_secs: Option<u64>,

    /// Upload size ceiling.
    #[arrrg(optional, "Reject uploads larger than this (default: 1048576)", "BYTES")]
    pub max_upload_bytes: Option<u64>,

    /// Disable the upload size ceiling.
    #[arrrg(flag, "Send files of any size")]
    pub no_size_limit: bool,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,

    /// Log debug diagnostics to stderr.
    #[arrrg(flag, "Log request diagnostics to stderr")]
    pub verbose: bool,
}

/// Configuration for a chat client and its front-end.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Server base URL; `None` defers to the client's environment lookup.
    pub base_url: Option<String>,

    /// Transport timeout; `None` leaves stalled requests pending.
    pub timeout: Option<Duration>,

    /// Client-side checks applied to uploads.
    pub upload_policy: UploadPolicy,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Whether to log debug diagnostics.
    pub verbose: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Base URL: resolved by the client
    /// - Timeout: none
    /// - Upload policy: hardened, 1 MiB
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            upload_policy: UploadPolicy::default(),
            use_color: true,
            verbose: false,
        }
    }

    /// Sets the server base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the transport timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the upload policy.
    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Enables debug diagnostics.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The default `tracing` filter directive for this configuration.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "warn,docchat=debug"
        } else {
            "warn"
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let upload_policy = if args.no_size_limit {
            UploadPolicy::Unrestricted
        } else {
            UploadPolicy::MaxBytes(args.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES))
        };

        ChatConfig {
            base_url: args.base_url,
            timeout: args.timeout_secs.map(Duration::from_secs),
            upload_policy,
            use_color: !args.no_color,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert!(config.base_url.is_none());
        assert!(config.timeout.is_none());
        assert_eq!(config.upload_policy, UploadPolicy::MaxBytes(1_048_576));
        assert!(config.use_color);
        assert!(!config.verbose);
        assert_eq!(config.log_directive(), "warn");
    }

    #[test]
    fn config_from_args_defaults() {
        let config = ChatConfig::from(ChatArgs::default());
        assert_eq!(config, ChatConfig::new());
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            base_url: Some("https://chat.example.com".to_string()),
            timeout_secs: Some(30),
            max_upload_bytes: Some(4096),
            no_size_limit: false,
            no_color: true,
            verbose: true,
        };
        let config = ChatConfig::from(args);
        assert_eq!(config.base_url.as_deref(), Some("https://chat.example.com"));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.upload_policy, UploadPolicy::MaxBytes(4096));
        assert!(!config.use_color);
        assert_eq!(config.log_directive(), "warn,docchat=debug");
    }

    #[test]
    fn no_size_limit_wins() {
        let args = ChatArgs {
            max_upload_bytes: Some(4096),
            no_size_limit: true,
            ..ChatArgs::default()
        };
        assert_eq!(
            ChatConfig::from(args).upload_policy,
            UploadPolicy::Unrestricted
        );
    }

    #[test]
    fn config_builder_pattern() {
        let config = ChatConfig::new()
            .with_base_url("http://localhost:8000")
            .with_timeout(Some(Duration::from_secs(5)))
            .with_upload_policy(UploadPolicy::Unrestricted)
            .without_color()
            .with_verbose(true);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8000"));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.upload_policy, UploadPolicy::Unrestricted);
        assert!(!config.use_color);
        assert!(config.verbose);
    }
}
