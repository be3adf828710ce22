//! Transport dispatch
//!
//! Resolves an output target (a configured profile or one of the legacy
//! flat modes) into exactly one transport and sends the rendered document
//! through it. No retries and no fallback: a socket failure surfaces as a
//! socket failure, it never quietly degrades to file output.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::{PrintError, PrintResult};
use crate::profile::{Connection, DEFAULT_PORT};
use crate::store::PrinterProfileStore;
use crate::transport::{FileTransport, NetworkTransport, SpoolerTransport, Transport};

/// Connect timeout applied to the legacy flat socket mode, which carries no
/// per-profile timeout of its own.
pub const LEGACY_TIMEOUT_SECS: u64 = 10;

/// Where a dispatch call sends its document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "output_mode", rename_all = "snake_case")]
pub enum OutputTarget {
    /// Resolve a stored profile and branch on its connection mode.
    Configured { printer_id: String },
    /// Legacy flat socket parameters.
    Printer { host: String, port: u16 },
    /// Legacy flat spooler share.
    WindowsPrinter { share: String },
    /// Write documents into a directory.
    File { output_dir: PathBuf },
}

impl OutputTarget {
    /// Map a legacy mode string plus its flat parameter onto a target.
    /// Unknown modes are a fatal `UnsupportedMode`, not a fallback.
    pub fn from_legacy(mode: &str, parameter: &str) -> PrintResult<Self> {
        match mode {
            "configured" => Ok(Self::Configured { printer_id: parameter.to_string() }),
            "printer" => {
                let (host, port) = match parameter.rsplit_once(':') {
                    Some((host, port)) => {
                        let port = port.parse::<u16>().map_err(|_| {
                            PrintError::Validation(format!("invalid port in '{}'", parameter))
                        })?;
                        (host.to_string(), port)
                    }
                    None => (parameter.to_string(), DEFAULT_PORT),
                };
                Ok(Self::Printer { host, port })
            }
            "windows_printer" => Ok(Self::WindowsPrinter { share: parameter.to_string() }),
            "file" => Ok(Self::File { output_dir: PathBuf::from(parameter) }),
            other => Err(PrintError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Routes rendered documents to their transport.
///
/// Borrows the store it resolves profiles from; callers construct it around
/// whatever store instance they own (a temp-file store in tests).
pub struct TransportDispatcher<'a> {
    store: &'a PrinterProfileStore,
}

impl<'a> TransportDispatcher<'a> {
    pub fn new(store: &'a PrinterProfileStore) -> Self {
        Self { store }
    }

    /// Build the transport a profile's connection resolves to.
    pub(crate) fn transport_for(connection: &Connection) -> Box<dyn Transport> {
        match connection {
            Connection::Network { ip_address, port, timeout } => Box::new(NetworkTransport::new(
                ip_address,
                *port,
                Duration::from_secs(*timeout),
            )),
            Connection::Usb { device_name } => Box::new(SpoolerTransport::new(device_name)),
        }
    }

    /// Send one rendered document through the resolved transport.
    #[instrument(skip(self, document), fields(data_len = document.len()))]
    pub fn dispatch(&self, target: &OutputTarget, document: &[u8]) -> PrintResult<()> {
        match target {
            OutputTarget::Configured { printer_id } => {
                let profile = self
                    .store
                    .get(printer_id)
                    .ok_or_else(|| PrintError::NotFound(printer_id.clone()))?;
                if !profile.enabled {
                    return Err(PrintError::Disabled(printer_id.clone()));
                }
                profile.validate()?;

                info!(printer = %profile.name, "dispatching via configured profile");
                Self::transport_for(&profile.connection).send(document)
            }
            OutputTarget::Printer { host, port } => {
                NetworkTransport::new(host, *port, Duration::from_secs(LEGACY_TIMEOUT_SECS))
                    .send(document)
            }
            OutputTarget::WindowsPrinter { share } => SpoolerTransport::new(share).send(document),
            OutputTarget::File { output_dir } => FileTransport::new(output_dir).send(document),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{PrinterKind, PrinterProfile, PrintSettings};

    fn store_with(profile: PrinterProfile) -> (tempfile::TempDir, PrinterProfileStore) {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut store = PrinterProfileStore::load(dir.path().join("printer_config.json"));
        store.add(profile).expect("add profile");
        (dir, store)
    }

    fn network_profile(id: &str, enabled: bool, port: u16) -> PrinterProfile {
        PrinterProfile {
            id: id.to_string(),
            name: format!("Printer {}", id),
            kind: PrinterKind::Network,
            enabled,
            connection: Connection::Network {
                ip_address: "127.0.0.1".to_string(),
                port,
                timeout: 1,
            },
            settings: PrintSettings::default(),
        }
    }

    #[test]
    fn test_legacy_mode_parsing() {
        assert_eq!(
            OutputTarget::from_legacy("printer", "192.168.1.50:9200").expect("parse"),
            OutputTarget::Printer { host: "192.168.1.50".into(), port: 9200 }
        );
        assert_eq!(
            OutputTarget::from_legacy("printer", "192.168.1.50").expect("parse"),
            OutputTarget::Printer { host: "192.168.1.50".into(), port: 9100 }
        );
        assert_eq!(
            OutputTarget::from_legacy("file", "./out").expect("parse"),
            OutputTarget::File { output_dir: PathBuf::from("./out") }
        );
    }

    #[test]
    fn test_legacy_unknown_mode_is_unsupported() {
        assert!(matches!(
            OutputTarget::from_legacy("carrier_pigeon", "coop"),
            Err(PrintError::UnsupportedMode(_))
        ));
    }

    #[test]
    fn test_unknown_profile_is_not_found() {
        let (_dir, store) = store_with(network_profile("dock", true, 9100));
        let dispatcher = TransportDispatcher::new(&store);
        let target = OutputTarget::Configured { printer_id: "ghost".into() };
        assert!(matches!(dispatcher.dispatch(&target, b"^XA^XZ"), Err(PrintError::NotFound(_))));
    }

    #[test]
    fn test_disabled_profile_is_rejected_explicitly() {
        let (_dir, store) = store_with(network_profile("dock", false, 9100));
        let dispatcher = TransportDispatcher::new(&store);
        let target = OutputTarget::Configured { printer_id: "dock".into() };
        assert!(matches!(dispatcher.dispatch(&target, b"^XA^XZ"), Err(PrintError::Disabled(_))));
    }

    #[test]
    fn test_file_target_writes_document() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = PrinterProfileStore::load(dir.path().join("printer_config.json"));
        let dispatcher = TransportDispatcher::new(&store);

        let out = dir.path().join("labels");
        let target = OutputTarget::File { output_dir: out.clone() };
        dispatcher.dispatch(&target, b"^XA^FD1^FS^XZ").expect("dispatch");

        assert_eq!(std::fs::read_dir(&out).expect("read dir").count(), 1);
    }

    #[test]
    fn test_output_mode_serde_tags() {
        let target = OutputTarget::Configured { printer_id: "dock".into() };
        let v = serde_json::to_value(&target).expect("serialize");
        assert_eq!(v["output_mode"], "configured");
        assert_eq!(v["printer_id"], "dock");
    }
}
