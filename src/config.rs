use crate::domain::app::TicketSettings;
use crate::domain::category::StaffRoles;
use std::env;
use std::num::NonZeroU64;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_STATUS_TEXT: &str = "Helping Users • /ticket";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} wasn't in env vars")]
    Missing(&'static str),
    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Playing,
    Watching,
    Listening,
    Competing,
}

impl FromStr for ActivityKind {
    type Err = ();

    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind.to_ascii_lowercase().as_str() {
            "playing" => Ok(ActivityKind::Playing),
            "watching" => Ok(ActivityKind::Watching),
            "listening" => Ok(ActivityKind::Listening),
            "competing" => Ok(ActivityKind::Competing),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presence {
    pub text: String,
    pub kind: ActivityKind,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub application_id: u64,
    /// Commands are registered to this guild only when set, globally otherwise.
    pub guild_id: Option<u64>,
    pub presence: Presence,
    pub tickets: TicketSettings,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = TicketSettings::default();
        let roles = StaffRoles::default();

        let tickets = TicketSettings {
            log_channel: id_or(&get, "SUPPORT_LOG_CHANNEL_ID", defaults.log_channel)?,
            ticket_category: id_or(&get, "TICKET_CATEGORY_ID", defaults.ticket_category)?,
            staff_roles: StaffRoles {
                billing: id_or(&get, "BILLING_ROLE_ID", roles.billing)?,
                technical: id_or(&get, "TECHNICAL_ROLE_ID", roles.technical)?,
                general: id_or(&get, "GENERAL_ROLE_ID", roles.general)?,
            },
            close_delay: Duration::from_secs(parse_or(
                &get,
                "TICKET_CLOSE_DELAY_SECS",
                defaults.close_delay.as_secs(),
            )?),
        };

        Ok(Self {
            token: get("DISCORD_TOKEN").ok_or(ConfigError::Missing("DISCORD_TOKEN"))?,
            application_id: id(&get, "CLIENT_ID")?.ok_or(ConfigError::Missing("CLIENT_ID"))?,
            guild_id: id(&get, "GUILD_ID")?,
            presence: Presence {
                text: get("STATUS_TEXT").unwrap_or_else(|| DEFAULT_STATUS_TEXT.to_string()),
                kind: parse_or(&get, "STATUS_TYPE", ActivityKind::Watching)?,
            },
            tickets,
        })
    }
}

fn parse<T, F>(get: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { key, value })
        })
        .transpose()
}

fn parse_or<T, F>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse(get, key)?.unwrap_or(default))
}

/// Snowflakes are never zero.
fn id<F>(get: &F, key: &'static str) -> Result<Option<u64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(parse::<NonZeroU64, F>(get, key)?.map(NonZeroU64::get))
}

fn id_or<F>(get: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(id(get, key)?.unwrap_or(default))
}
