//! Loading and saving a ledger file.

use std::io;
use std::path::Path;

use tracing::info;

use crate::codec;
use crate::error::{Result, WarehouseError};
use crate::fs::write_atomic;
use crate::ledger::InventoryLedger;

/// Load a ledger from `path`.
///
/// Returns `Ok(None)` when the file does not exist, so callers can start
/// with an empty ledger.
///
/// # Errors
///
/// Returns `WarehouseError::Storage` if the file exists but cannot be read.
pub fn load(path: &Path) -> Result<Option<InventoryLedger>> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no saved ledger found");
            return Ok(None);
        }
        Err(err) => {
            return Err(WarehouseError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            )))
        }
    };
    let ledger = codec::decode(&contents)?;
    info!(
        path = %path.display(),
        incoming = ledger.incoming().len(),
        shipping = ledger.shipping().len(),
        "loaded ledger"
    );
    Ok(Some(ledger))
}

/// Load a ledger, or an empty one if the file does not exist.
pub fn load_or_default(path: &Path) -> Result<InventoryLedger> {
    Ok(load(path)?.unwrap_or_default())
}

/// Save a ledger to `path`, replacing any previous contents atomically.
///
/// # Errors
///
/// Returns `WarehouseError::Storage` if the file cannot be written.
pub fn save(path: &Path, ledger: &InventoryLedger) -> Result<()> {
    write_atomic(path, &codec::encode(ledger)).map_err(|err| {
        WarehouseError::Storage(format!("Failed to write {}: {}", path.display(), err))
    })?;
    info!(
        path = %path.display(),
        incoming = ledger.incoming().len(),
        shipping = ledger.shipping().len(),
        "saved ledger"
    );
    Ok(())
}
