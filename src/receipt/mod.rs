pub mod id;
pub mod types;

pub use id::ReceiptId;
pub use types::{Item, Receipt};

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a receipt JSON file, returning the id its bytes hash to and the
/// parsed receipt.
pub fn read_receipt_file(path: &Path) -> Result<(ReceiptId, Receipt)> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read receipt file at {}", path.display()))?;

    let receipt = Receipt::from_slice(&bytes)
        .with_context(|| format!("Failed to parse receipt: invalid JSON in {}", path.display()))?;

    Ok((ReceiptId::from_bytes(&bytes), receipt))
}
