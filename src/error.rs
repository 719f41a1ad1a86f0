// file: src/error.rs
// version: 1.0.0
// guid: 754389d8-21be-48a7-969e-c4666ba007a1

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, SetupError>;

/// Error types for the share setup
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("this command should be run with root privileges: {0}")]
    Privilege(String),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("could not find the local ip address")]
    NoLocalAddress,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Command '{command}' failed (exit code {exit_code:?}): {stderr}")]
    ProcessError {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Failed to enable services: {}", .0.join("; "))]
    ServiceEnable(Vec<String>),

    #[error("Confirmation error: {0}")]
    Confirmation(String),
}

impl SetupError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new privilege error
    pub fn privilege(msg: impl Into<String>) -> Self {
        Self::Privilege(msg.into())
    }

    /// Create a new lookup error
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a new confirmation error
    pub fn confirmation(msg: impl Into<String>) -> Self {
        Self::Confirmation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_enable_lists_every_failure() {
        let err = SetupError::ServiceEnable(vec![
            "rpcbind: exit 1".to_string(),
            "nfs-common: not found".to_string(),
        ]);

        let msg = err.to_string();
        assert!(msg.contains("rpcbind: exit 1"));
        assert!(msg.contains("nfs-common: not found"));
    }

    #[test]
    fn test_privilege_message_mentions_root() {
        let err = SetupError::privilege("SUDO_USER is not set");
        assert!(err.to_string().contains("root privileges"));
    }

    #[test]
    fn test_process_error_display() {
        let err = SetupError::ProcessError {
            command: "apt install -y samba".to_string(),
            exit_code: Some(100),
            stderr: "E: Unable to locate package".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("apt install -y samba"));
        assert!(msg.contains("100"));
        assert!(msg.contains("Unable to locate package"));
    }
}
