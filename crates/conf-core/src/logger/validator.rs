//! Installation-time logger conformance check

use super::{Capability, Logger};
use crate::{Error, Result};

/// Check `logger` against every [`Capability`], in [`Capability::ALL`] order.
///
/// Fails on the first capability the logger does not respond to; later gaps
/// are not reported.
pub fn validate(logger: &dyn Logger) -> Result<()> {
    match Capability::ALL
        .into_iter()
        .find(|capability| !logger.responds_to(*capability))
    {
        Some(capability) => Err(Error::InvalidLogger { capability }),
        None => Ok(()),
    }
}
