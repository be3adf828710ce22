//! OS print-spooler transport
//!
//! Stages the document in a temporary file and hands it to the Windows
//! print share with `copy /B`, which is how raw ZPL reaches USB-attached
//! Zebras without a driver round-trip. The staging file is removed
//! unconditionally, success or not.
//!
//! There is no spooler bridge on other platforms; sending there reports
//! `UnsupportedMode` instead of pretending the job went out.

use tracing::instrument;
#[cfg(windows)]
use tracing::info;

use crate::error::{PrintError, PrintResult};

#[derive(Debug, Clone)]
pub struct SpoolerTransport {
    share: String,
}

impl SpoolerTransport {
    pub fn new(share: &str) -> Self {
        Self { share: share.to_string() }
    }

    /// Bare device names are addressed through the local host share; full
    /// UNC paths pass through untouched.
    #[cfg_attr(not(windows), allow(dead_code))]
    fn share_path(&self) -> String {
        if self.share.starts_with(r"\\") {
            self.share.clone()
        } else {
            format!(r"\\localhost\{}", self.share)
        }
    }

    /// Installed print device names, virtual queues filtered out.
    #[cfg(windows)]
    pub fn list_printers() -> PrintResult<Vec<String>> {
        use windows::Win32::Graphics::Printing::{
            EnumPrintersW, PRINTER_ENUM_CONNECTIONS, PRINTER_ENUM_LOCAL, PRINTER_INFO_5W,
        };
        use windows::core::PWSTR;

        unsafe {
            let flags = PRINTER_ENUM_LOCAL | PRINTER_ENUM_CONNECTIONS;
            let mut needed: u32 = 0;
            let mut returned: u32 = 0;

            let _ = EnumPrintersW(flags, None, 5, None, &mut needed, &mut returned);
            if needed == 0 {
                return Ok(Vec::new());
            }

            let mut buf: Vec<u8> = vec![0; needed as usize];
            EnumPrintersW(flags, None, 5, Some(buf.as_mut_slice()), &mut needed, &mut returned)
                .map_err(|_| PrintError::Transport("EnumPrintersW failed".to_string()))?;

            let infos =
                std::slice::from_raw_parts(buf.as_ptr() as *const PRINTER_INFO_5W, returned as usize);

            let mut names = Vec::new();
            for info in infos {
                if info.pPrinterName.is_null() {
                    continue;
                }
                let name = PWSTR(info.pPrinterName.0).to_string().unwrap_or_default();
                let port = if info.pPortName.is_null() {
                    String::new()
                } else {
                    PWSTR(info.pPortName.0).to_string().unwrap_or_default()
                };
                if !is_virtual_port(&port) {
                    names.push(name);
                }
            }
            Ok(names)
        }
    }

    #[cfg(not(windows))]
    pub fn list_printers() -> PrintResult<Vec<String>> {
        Err(PrintError::UnsupportedMode(
            "print device enumeration requires the windows spooler".to_string(),
        ))
    }
}

/// Ports that belong to virtual queues (PDF/XPS/OneNote), never to a
/// physical label printer.
#[cfg(windows)]
fn is_virtual_port(port: &str) -> bool {
    let p = port.to_lowercase();
    p == "file:"
        || p == "portprompt:"
        || p == "xpsport:"
        || p == "nul:"
        || p.starts_with("onenote")
        || p.starts_with("wfsport:")
}

#[cfg(windows)]
impl super::Transport for SpoolerTransport {
    #[instrument(skip(document), fields(share = %self.share, data_len = document.len()))]
    fn send(&self, document: &[u8]) -> PrintResult<()> {
        use std::io::Write;
        use std::process::Command;

        // NamedTempFile deletes on drop, which covers every exit path below.
        let mut staging = tempfile::Builder::new().suffix(".zpl").tempfile()?;
        staging.write_all(document)?;
        staging.flush()?;

        let target = self.share_path();
        info!(target = %target, "copying document to print share");

        let status = Command::new("cmd")
            .args(["/C", "copy", "/B"])
            .arg(staging.path())
            .arg(&target)
            .status()
            .map_err(|e| PrintError::Transport(format!("copy command failed to start: {}", e)))?;

        if !status.success() {
            return Err(PrintError::SpoolerExit { code: status.code().unwrap_or(-1) });
        }

        info!("document spooled");
        Ok(())
    }

    fn check(&self) -> PrintResult<bool> {
        let printers = Self::list_printers()?;
        Ok(printers.iter().any(|name| name == &self.share))
    }
}

#[cfg(not(windows))]
impl super::Transport for SpoolerTransport {
    #[instrument(skip(_document), fields(share = %self.share))]
    fn send(&self, _document: &[u8]) -> PrintResult<()> {
        Err(PrintError::UnsupportedMode(
            "the print spooler transport is only available on windows".to_string(),
        ))
    }

    fn check(&self) -> PrintResult<bool> {
        // Legacy tolerance: without a spooler there is nothing to query, and
        // the probe contract reports success rather than blocking every
        // non-windows deployment. Dispatching still fails with
        // UnsupportedMode.
        tracing::warn!(share = %self.share, "usb reachability check is a no-op on this platform");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_path_prefixes_bare_names() {
        let t = SpoolerTransport::new("ZDesigner GK420t");
        assert_eq!(t.share_path(), r"\\localhost\ZDesigner GK420t");
    }

    #[test]
    fn test_share_path_keeps_unc_paths() {
        let t = SpoolerTransport::new(r"\\warehouse-pc\Zebra");
        assert_eq!(t.share_path(), r"\\warehouse-pc\Zebra");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_send_is_unsupported_off_windows() {
        use crate::transport::Transport;
        let t = SpoolerTransport::new("Zebra");
        assert!(matches!(t.send(b"^XA^XZ"), Err(PrintError::UnsupportedMode(_))));
        // but the reachability no-op stays permissive
        assert!(t.check().expect("check"));
    }
}
