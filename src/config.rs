//! Configuration module for tagchat.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::{Result, TagChatError};

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Display name of the bot.
    #[serde(default = "default_bot_name")]
    pub name: String,
    /// Avatar URL of the bot.
    #[serde(default = "default_bot_avatar")]
    pub avatar: String,
    /// Character that marks an input line as a command.
    #[serde(default = "default_prefix")]
    pub prefix: char,
    /// Simulated latency before the bot answers a command, in milliseconds.
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,
}

fn default_bot_name() -> String {
    "Dyno".to_string()
}

fn default_bot_avatar() -> String {
    "https://cdn.discordapp.com/avatars/155149108183695360/b545f949437a346513364f7b6005b76b.png"
        .to_string()
}

fn default_prefix() -> char {
    '/'
}

fn default_reply_delay() -> u64 {
    400
}

impl BotConfig {
    /// Reply delay as a `Duration`.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
            avatar: default_bot_avatar(),
            prefix: default_prefix(),
            reply_delay_ms: default_reply_delay(),
        }
    }
}

/// Local user configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct UserConfig {
    /// Display name of the local user. Recorded as the author of created tags.
    #[serde(default = "default_user_name")]
    pub name: String,
    /// Avatar URL of the local user.
    #[serde(default = "default_user_avatar")]
    pub avatar: String,
}

fn default_user_name() -> String {
    "User".to_string()
}

fn default_user_avatar() -> String {
    "https://picsum.photos/200".to_string()
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: default_user_name(),
            avatar: default_user_avatar(),
        }
    }
}

/// Tag seeding configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TagsConfig {
    /// Whether the built-in tags are loaded on startup.
    #[serde(default = "default_include_defaults")]
    pub include_defaults: bool,
    /// Optional TOML file with additional `[[tags]]` entries.
    #[serde(default)]
    pub seed_file: Option<String>,
}

fn default_include_defaults() -> bool {
    true
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            include_defaults: default_include_defaults(),
            seed_file: None,
        }
    }
}

/// Terminal display configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Emit ANSI escape sequences.
    #[serde(default = "default_ansi")]
    pub ansi: bool,
    /// Show spoiler content instead of masking it.
    #[serde(default)]
    pub reveal_spoilers: bool,
}

fn default_ansi() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            ansi: default_ansi(),
            reveal_spoilers: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/tagchat.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Bot configuration.
    #[serde(default)]
    pub bot: BotConfig,
    /// Local user configuration.
    #[serde(default)]
    pub user: UserConfig,
    /// Tag seeding configuration.
    #[serde(default)]
    pub tags: TagsConfig,
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(TagChatError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| TagChatError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TAGCHAT_LOG_LEVEL`: Override the log level
    pub fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("TAGCHAT_LOG_LEVEL") {
            if !level.is_empty() {
                self.logging.level = level;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if the command prefix is whitespace or alphanumeric,
    /// since ordinary messages would then be mistaken for commands.
    pub fn validate(&self) -> Result<()> {
        let prefix = self.bot.prefix;
        if prefix.is_whitespace() || prefix.is_alphanumeric() {
            return Err(TagChatError::Validation(format!(
                "command prefix {prefix:?} must be a symbol character"
            )));
        }
        if self.user.name.trim().is_empty() {
            return Err(TagChatError::Validation(
                "user name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
