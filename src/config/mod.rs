use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, thiserror::Error)]
#[error("invalid value {value:?} for {name}: {reason}")]
pub struct ConfigError {
    name: &'static str,
    value: String,
    reason: String,
}

/// Echo server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: num_cpus::get() * 2,
        }
    }
}

impl EchoConfig {
    /// Reads `ECHO_HOST`, `ECHO_PORT` and `ECHO_WORKERS`, falling back to the
    /// defaults for anything unset. Call `dotenvy::dotenv()` first to pick up
    /// a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: lookup("ECHO_HOST").unwrap_or(defaults.host),
            port: parse(&lookup, "ECHO_PORT")?.unwrap_or(defaults.port),
            workers: match parse::<usize, _>(&lookup, "ECHO_WORKERS")? {
                Some(0) | None => defaults.workers,
                Some(n) => n,
            },
        })
    }
}

fn parse<T, F>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(name) else {
        return Ok(None);
    };

    match value.trim().parse::<T>() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => Err(ConfigError {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}
