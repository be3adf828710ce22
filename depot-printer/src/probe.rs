//! Connectivity diagnostics
//!
//! A read path used before or instead of real printing: step 1 checks the
//! profile's transport is reachable, step 2 optionally pushes the self-test
//! pattern through that same transport so the result reflects what an
//! actual print job would experience. There is no separate test code path.

use tracing::{info, instrument, warn};

use crate::dispatch::TransportDispatcher;
use crate::error::{PrintError, PrintResult};
use crate::store::PrinterProfileStore;
use crate::transport::Transport;

pub struct ConnectivityProbe<'a> {
    store: &'a PrinterProfileStore,
}

impl<'a> ConnectivityProbe<'a> {
    pub fn new(store: &'a PrinterProfileStore) -> Self {
        Self { store }
    }

    /// Test reachability of a configured printer.
    ///
    /// Returns `Ok(false)` when the device does not answer (or, with
    /// `send_test_pattern`, when the test document fails to send). Errors
    /// are reserved for an unknown id or an undialable connection. Disabled
    /// profiles may be probed; disabling gates dispatch, not diagnostics.
    #[instrument(skip(self))]
    pub fn test_connection(&self, printer_id: &str, send_test_pattern: bool) -> PrintResult<bool> {
        let profile = self
            .store
            .get(printer_id)
            .ok_or_else(|| PrintError::NotFound(printer_id.to_string()))?;
        profile.validate()?;

        let transport = TransportDispatcher::transport_for(&profile.connection);

        if !transport.check()? {
            info!(printer = %profile.name, "printer unreachable");
            return Ok(false);
        }

        if !send_test_pattern {
            info!(printer = %profile.name, "printer reachable");
            return Ok(true);
        }

        let document = depot_zpl::render_test_pattern(&profile.name);
        match transport.send(document.as_bytes()) {
            Ok(()) => {
                info!(printer = %profile.name, "self-test pattern sent");
                Ok(true)
            }
            Err(e) => {
                warn!(printer = %profile.name, error = %e, "self-test pattern failed");
                Ok(false)
            }
        }
    }
}
