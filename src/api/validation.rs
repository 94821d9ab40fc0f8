use crate::error::{PortalError, PortalResult};

use super::PortalConfig;

/// Validates a bootstrap config before any stage is built.
pub(super) fn validate_config(config: &PortalConfig) -> PortalResult<()> {
    if !config.viewport.is_valid() {
        return Err(PortalError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    config.sphere.validate()?;
    if config.error_hold_ms == 0 {
        return Err(PortalError::InvalidData(
            "error hold must be > 0 ms".to_owned(),
        ));
    }
    Ok(())
}
