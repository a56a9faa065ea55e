pub mod claims;

use regex::Regex;
use std::sync::LazyLock;

const WHITESPACE_RE: &str = r"\s+";

/// Milliseconds between the Unix epoch and the first second of 2015.
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WHITESPACE_RE).expect("Invalid regex"));

/// Lowercases a name and collapses whitespace into single hyphens, which is what the
/// platform does to text channel names on creation.
#[must_use]
pub fn normalise_channel_name(name: &str) -> String {
    WHITESPACE
        .replace_all(name.trim(), "-")
        .to_lowercase()
}

/// Creation time of a snowflake, in milliseconds since the Unix epoch.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn snowflake_timestamp_ms(id: u64) -> i64 {
    ((id >> 22) + DISCORD_EPOCH_MS) as i64
}
