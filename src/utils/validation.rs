use crate::utils::error::{Result, WarpError};
use url::Host;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(WarpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Command names become chat literals; whitespace or a leading slash would
/// make the name unregistrable or double-slashed at the prompt.
pub fn validate_command_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.chars().any(char::is_whitespace) {
        return Err(WarpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Command names cannot contain whitespace".to_string(),
        });
    }

    if value.starts_with('/') {
        return Err(WarpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Command names are registered without a leading slash".to_string(),
        });
    }

    Ok(())
}

/// Accepts bare hostnames, IPv4 and bracketed IPv6 literals.
pub fn validate_host(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    Host::parse(value)
        .map(|_| ())
        .map_err(|e| WarpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Invalid host: {}", e),
        })
}

/// Narrows a raw config integer to a routable port.
pub fn validate_port(field_name: &str, value: u32) -> Result<u16> {
    if value == 0 || value > u16::MAX as u32 {
        return Err(WarpError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Port must be between 1 and 65535".to_string(),
        });
    }
    Ok(value as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_command_name() {
        assert!(validate_command_name("commands[0].name", "lobby").is_ok());
        assert!(validate_command_name("commands[0].name", "bedrock-link").is_ok());
        assert!(validate_command_name("commands[0].name", "").is_err());
        assert!(validate_command_name("commands[0].name", "two words").is_err());
        assert!(validate_command_name("commands[0].name", "/lobby").is_err());
    }

    #[test]
    fn test_validate_host() {
        assert!(validate_host("commands[0].ip", "play.example.com").is_ok());
        assert!(validate_host("commands[0].ip", "10.0.0.5").is_ok());
        assert!(validate_host("commands[0].ip", "[::1]").is_ok());
        assert!(validate_host("commands[0].ip", "").is_err());
        assert!(validate_host("commands[0].ip", "bad host name").is_err());
    }

    #[test]
    fn test_validate_port() {
        assert_eq!(validate_port("commands[0].port", 25565).unwrap(), 25565);
        assert!(validate_port("commands[0].port", 0).is_err());
        assert!(validate_port("commands[0].port", 70000).is_err());
    }
}
