use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::Path;

use crate::domains::callers::KnownParticipants;

pub const DEFAULT_CONFERENCE_NAME: &str = "My conference";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_verify_service_sid: String,
    pub twilio_verify_base_url: Option<String>,
    pub moderator: String,
    pub conference_name: String,
    pub known_participants: KnownParticipants,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID")
                .context("TWILIO_ACCOUNT_SID must be set")?,
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN")
                .context("TWILIO_AUTH_TOKEN must be set")?,
            twilio_verify_service_sid: env::var("TWILIO_VERIFY_SERVICE_SID")
                .context("TWILIO_VERIFY_SERVICE_SID must be set")?,
            twilio_verify_base_url: env::var("TWILIO_VERIFY_BASE_URL").ok(),
            moderator: env::var("MODERATOR").context("MODERATOR must be set")?,
            conference_name: env::var("CONFERENCE_NAME")
                .unwrap_or_else(|_| DEFAULT_CONFERENCE_NAME.to_string()),
            known_participants: load_known_participants()?,
        })
    }
}

/// Read the allow-list from `KNOWN_PARTICIPANTS` (inline JSON) or
/// `KNOWN_PARTICIPANTS_FILE` (path to a JSON file). Inline wins.
fn load_known_participants() -> Result<KnownParticipants> {
    if let Ok(inline) = env::var("KNOWN_PARTICIPANTS") {
        return parse_known_participants(&inline).context("KNOWN_PARTICIPANTS is not valid JSON");
    }

    let path = env::var("KNOWN_PARTICIPANTS_FILE")
        .context("KNOWN_PARTICIPANTS or KNOWN_PARTICIPANTS_FILE must be set")?;
    read_known_participants(Path::new(&path))
}

pub fn read_known_participants(path: &Path) -> Result<KnownParticipants> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_known_participants(&raw).with_context(|| format!("{} is not valid JSON", path.display()))
}

/// Parse a JSON object of phone number to display name.
pub fn parse_known_participants(raw: &str) -> Result<KnownParticipants> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_to_name_object() {
        let participants =
            parse_known_participants(r#"{"+15557654321": "Alice", "+15550001111": "Bob"}"#)
                .unwrap();

        assert_eq!(participants.len(), 2);
        assert_eq!(participants.display_name("+15557654321"), Some("Alice"));
        assert_eq!(participants.display_name("+15550001111"), Some("Bob"));
    }

    #[test]
    fn rejects_non_object_json() {
        assert!(parse_known_participants(r#"["+15557654321"]"#).is_err());
        assert!(parse_known_participants("not json").is_err());
    }

    #[test]
    fn reads_participants_from_file() {
        let path = std::env::temp_dir().join(format!(
            "known_participants_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"+15557654321": "Alice"}"#).unwrap();

        let participants = read_known_participants(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(participants.display_name("+15557654321"), Some("Alice"));
    }
}
