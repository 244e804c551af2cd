//! peergate.toml configuration parser.
//!
//! Reading the file is left to the embedding service; this module only
//! parses its contents. The timeouts here are applied by the RPC layer
//! around peer calls; a timer that fires there reaches
//! [`crate::status::to_status`] as a deadline signal.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const DEFAULT_ENDORSEMENT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_BROADCAST_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub gateway: GatewaySection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewaySection {
    pub enabled: Option<bool>,
    pub endorsement_timeout: Option<String>,
    pub broadcast_timeout: Option<String>,
    pub dial_timeout: Option<String>,
}

/// Resolved gateway options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOptions {
    pub enabled: bool,
    /// Time allowed for a peer to endorse or evaluate a proposal.
    pub endorsement_timeout: Duration,
    /// Time allowed for the ordering service to accept a transaction.
    pub broadcast_timeout: Duration,
    /// Time allowed to establish a connection to a peer or orderer.
    pub dial_timeout: Duration,
}

impl Default for GatewayOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            endorsement_timeout: DEFAULT_ENDORSEMENT_TIMEOUT,
            broadcast_timeout: DEFAULT_BROADCAST_TIMEOUT,
            dial_timeout: DEFAULT_DIAL_TIMEOUT,
        }
    }
}

impl GatewayConfig {
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve into [`GatewayOptions`], filling in defaults.
    pub fn options(&self) -> Result<GatewayOptions, ConfigError> {
        let section = &self.gateway;
        Ok(GatewayOptions {
            enabled: section.enabled.unwrap_or(true),
            endorsement_timeout: resolve_duration(
                "endorsement_timeout",
                section.endorsement_timeout.as_deref(),
                DEFAULT_ENDORSEMENT_TIMEOUT,
            )?,
            broadcast_timeout: resolve_duration(
                "broadcast_timeout",
                section.broadcast_timeout.as_deref(),
                DEFAULT_BROADCAST_TIMEOUT,
            )?,
            dial_timeout: resolve_duration(
                "dial_timeout",
                section.dial_timeout.as_deref(),
                DEFAULT_DIAL_TIMEOUT,
            )?,
        })
    }
}

fn resolve_duration(
    key: &'static str,
    value: Option<&str>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    let duration = parse_duration(value).ok_or_else(|| ConfigError::InvalidDuration {
        key,
        value: value.to_string(),
    })?;
    if duration.is_zero() {
        return Err(ConfigError::ZeroDuration { key });
    }
    Ok(duration)
}

/// Parse `"250ms"`, `"30s"`, `"2m"`, `"1h"`, or a bare number of seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        ms.parse::<u64>().ok().map(Duration::from_millis)
    } else if let Some(secs) = s.strip_suffix('s') {
        secs.parse::<u64>().ok().map(Duration::from_secs)
    } else if let Some(mins) = s.strip_suffix('m') {
        mins.parse::<u64>()
            .ok()
            .and_then(|m| m.checked_mul(60))
            .map(Duration::from_secs)
    } else if let Some(hours) = s.strip_suffix('h') {
        hours
            .parse::<u64>()
            .ok()
            .and_then(|h| h.checked_mul(3600))
            .map(Duration::from_secs)
    } else {
        s.parse::<u64>().ok().map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = GatewayConfig::from_toml_str("").unwrap();
        assert_eq!(config.options().unwrap(), GatewayOptions::default());
    }

    #[test]
    fn parse_full_section() {
        let config = GatewayConfig::from_toml_str(
            r#"
[gateway]
enabled = false
endorsement_timeout = "10s"
broadcast_timeout = "1500ms"
dial_timeout = "1m"
"#,
        )
        .unwrap();
        let options = config.options().unwrap();

        assert!(!options.enabled);
        assert_eq!(options.endorsement_timeout, Duration::from_secs(10));
        assert_eq!(options.broadcast_timeout, Duration::from_millis(1500));
        assert_eq!(options.dial_timeout, Duration::from_secs(60));
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = GatewayConfig::from_toml_str(
            r#"
[gateway]
endorsement_timeout = "5s"
"#,
        )
        .unwrap();
        let options = config.options().unwrap();

        assert!(options.enabled);
        assert_eq!(options.endorsement_timeout, Duration::from_secs(5));
        assert_eq!(options.dial_timeout, DEFAULT_DIAL_TIMEOUT);
    }

    #[test]
    fn invalid_duration_names_key() {
        let config = GatewayConfig::from_toml_str(
            r#"
[gateway]
broadcast_timeout = "soon"
"#,
        )
        .unwrap();
        let err = config.options().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDuration { key: "broadcast_timeout", .. }
        ));
        assert!(err.to_string().contains("broadcast_timeout"));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let config = GatewayConfig::from_toml_str(
            r#"
[gateway]
dial_timeout = "0s"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.options().unwrap_err(),
            ConfigError::ZeroDuration { key: "dial_timeout" }
        ));
    }

    #[test]
    fn parse_duration_values() {
        assert_eq!(parse_duration("250ms"), Some(Duration::from_millis(250)));
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration("2m"), Some(Duration::from_secs(120)));
        assert_eq!(parse_duration("1h"), Some(Duration::from_secs(3600)));
        assert_eq!(parse_duration(" 45 "), Some(Duration::from_secs(45)));
        assert_eq!(parse_duration("fast"), None);
    }

    #[test]
    fn overflowing_duration_is_invalid() {
        let config = GatewayConfig::from_toml_str(
            r#"
[gateway]
dial_timeout = "18446744073709551615h"
"#,
        )
        .unwrap();
        assert!(matches!(
            config.options().unwrap_err(),
            ConfigError::InvalidDuration { key: "dial_timeout", .. }
        ));
        assert_eq!(parse_duration("307445734561825861m"), None);
        assert_eq!(
            parse_duration("18446744073709551615s"),
            Some(Duration::from_secs(u64::MAX))
        );
    }

    #[test]
    fn toml_round_trip() {
        let config = GatewayConfig {
            gateway: GatewaySection {
                enabled: Some(true),
                endorsement_timeout: Some("15s".to_string()),
                ..Default::default()
            },
        };
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("endorsement_timeout"));
        let parsed = GatewayConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(
            parsed.options().unwrap().endorsement_timeout,
            Duration::from_secs(15)
        );
    }
}
