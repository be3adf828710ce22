//! Typed printer profiles
//!
//! Profiles deserialize into one struct per connection variant instead of a
//! free-form map, so a malformed entry fails at load time rather than deep
//! inside a dispatch call.

use serde::{Deserialize, Serialize};

use crate::error::{PrintError, PrintResult};

pub const DEFAULT_PORT: u16 = 9100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// How a profile reaches its device. Exactly one variant per profile,
/// discriminated by the persisted `mode` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Connection {
    /// Raw ZPL over TCP, conventionally port 9100.
    Network {
        ip_address: String,
        #[serde(default = "default_port")]
        port: u16,
        /// Connect/write timeout in seconds.
        #[serde(default = "default_timeout")]
        timeout: u64,
    },
    /// OS print spooler, addressed by installed device/share name.
    Usb { device_name: String },
}

/// Informational profile type, mirrors the connection mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PrinterKind {
    Usb,
    Network,
}

/// Print head settings stored alongside the connection. Carried for the
/// configuration UI; rendering reads its own calibration from
/// `label_defaults`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrintSettings {
    pub print_speed: u8,
    pub darkness: u8,
    pub print_width: String,
    pub label_width: String,
    pub label_height: String,
    pub dpi: u32,
}

impl Default for PrintSettings {
    fn default() -> Self {
        Self {
            print_speed: 2,
            darkness: 8,
            print_width: "104mm".to_string(),
            label_width: "100mm".to_string(),
            label_height: "50mm".to_string(),
            dpi: 203,
        }
    }
}

/// A configured output target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrinterProfile {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PrinterKind,
    pub enabled: bool,
    pub connection: Connection,
    #[serde(default)]
    pub settings: PrintSettings,
}

impl PrinterProfile {
    /// The built-in profile synthesized when no configuration exists.
    pub fn fallback() -> Self {
        Self {
            id: "fallback".to_string(),
            name: "Fallback Printer".to_string(),
            kind: PrinterKind::Usb,
            enabled: true,
            connection: Connection::Usb { device_name: "ZDesigner GK420t".to_string() },
            settings: PrintSettings::default(),
        }
    }

    /// Reject profiles whose connection cannot possibly be dialed.
    pub fn validate(&self) -> PrintResult<()> {
        match &self.connection {
            Connection::Network { ip_address, .. } if ip_address.trim().is_empty() => {
                Err(PrintError::Validation(format!(
                    "network printer '{}' has no IP address",
                    self.id
                )))
            }
            Connection::Usb { device_name } if device_name.trim().is_empty() => {
                Err(PrintError::Validation(format!(
                    "usb printer '{}' has no device name",
                    self.id
                )))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_profile_is_usable() {
        let p = PrinterProfile::fallback();
        assert_eq!(p.id, "fallback");
        assert!(p.enabled);
        assert!(p.validate().is_ok());
        assert!(matches!(p.connection, Connection::Usb { .. }));
    }

    #[test]
    fn test_network_profile_deserializes_with_defaults() {
        let json = r#"{
            "id": "dock",
            "name": "Dock Zebra",
            "type": "network",
            "enabled": true,
            "connection": { "mode": "network", "ip_address": "192.168.1.50" }
        }"#;
        let p: PrinterProfile = serde_json::from_str(json).expect("deserialize");
        match p.connection {
            Connection::Network { port, timeout, .. } => {
                assert_eq!(port, 9100);
                assert_eq!(timeout, 5);
            }
            _ => panic!("expected network connection"),
        }
    }

    #[test]
    fn test_unknown_connection_mode_is_rejected() {
        let json = r#"{
            "id": "x", "name": "x", "type": "usb", "enabled": true,
            "connection": { "mode": "bluetooth", "device_name": "d" }
        }"#;
        assert!(serde_json::from_str::<PrinterProfile>(json).is_err());
    }

    #[test]
    fn test_validation_rejects_empty_ip() {
        let mut p = PrinterProfile::fallback();
        p.connection = Connection::Network { ip_address: "  ".into(), port: 9100, timeout: 5 };
        assert!(matches!(p.validate(), Err(PrintError::Validation(_))));
    }

    #[test]
    fn test_serialized_form_matches_config_layout() {
        let p = PrinterProfile::fallback();
        let v = serde_json::to_value(&p).expect("serialize");
        assert_eq!(v["type"], "usb");
        assert_eq!(v["connection"]["mode"], "usb");
        assert_eq!(v["connection"]["device_name"], "ZDesigner GK420t");
        assert_eq!(v["settings"]["dpi"], 203);
    }
}
