//! Environment configuration and the fixed guild identifiers.
//!
//! The bot serves exactly one guild, so the guild, role, channel, and link
//! identifiers are compiled in rather than configurable at runtime.

use poise::serenity_prelude::{ChannelId, GuildId, RoleId};

use crate::error::{BotError, Result};

// IDs and links
pub const GUILD_ID: GuildId = GuildId::new(1286494224677736468);
pub const FIRST_YEAR_ROLE_ID: RoleId = RoleId::new(1386056949602455683);
pub const LOG_CHANNEL_ID: ChannelId = ChannelId::new(1395509672852852836);
pub const WELCOME_CHANNEL_ID: ChannelId = ChannelId::new(1286494224677736471);

pub const FIRST_YEAR_ROLE_LABEL: &str = "MS1 Year 1 Student";
pub const INVITE_LINK: &str = "https://discord.gg/dm8yXHD4";
pub const WELCOME_GIF_URL: &str = "https://www.dropbox.com/scl/fi/yxya94d102ltsrz64qv9k/Photo-Jul-16-2025-22-48-40.gif?rlkey=1bs2wfc8ae0tuax8deyo6crwy&st=lqux5oe7&raw=1";
pub const FOOTER_ICON_URL: &str = "https://i.imgur.com/zjXe9Rv.png";

/// Google Sheets webhook (deployed Apps Script web app), overridable via WEBHOOK_URL
const DEFAULT_WEBHOOK_URL: &str = "https://script.google.com/macros/s/AKfycbw--o753G2aCXCpibr4PH5F1hk4419SB5VGxt8ffTk4LSTnV7RAfWNStTm0r2BCoPqL/exec";

const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration sourced from the environment
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Discord bot token (required)
    pub token: String,
    /// Port for the liveness HTTP server
    pub port: u16,
    /// Registration webhook endpoint
    pub webhook_url: String,
}

impl BotConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("DISCORD_TOKEN").map_err(|_| BotError::MissingEnv {
            name: "DISCORD_TOKEN".to_string(),
        })?;
        let port = parse_port(std::env::var("PORT").ok())?;
        let webhook_url =
            std::env::var("WEBHOOK_URL").unwrap_or_else(|_| DEFAULT_WEBHOOK_URL.to_string());

        Ok(Self {
            token,
            port,
            webhook_url,
        })
    }
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw {
        Some(value) => value.parse().map_err(|_| BotError::InvalidEnv {
            name: "PORT".to_string(),
            value,
        }),
        None => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_when_unset() {
        assert_eq!(parse_port(None).unwrap(), 8080);
    }

    #[test]
    fn test_port_parses_from_string() {
        assert_eq!(parse_port(Some("3000".to_string())).unwrap(), 3000);
    }

    #[test]
    fn test_port_rejects_garbage() {
        let err = parse_port(Some("eighty".to_string())).unwrap_err();
        assert!(matches!(err, BotError::InvalidEnv { .. }));
        assert!(err.to_string().contains("PORT"));
    }
}
