use super::prelude::*;

/// One-shot request for the device's last-known position.
///
/// Permission must have been granted by an external authorization step;
/// the injected flag makes that precondition explicit instead of silently
/// assuming it.
pub fn acquire_initial_location<G>(
    gateway: &G,
    permission: LocationPermission,
) -> Result<Option<MapPoint>>
where
    G: LocationGateway + ?Sized,
{
    if !permission.is_granted() {
        return Err(Error::LocationPermission);
    }
    Ok(gateway.last_known_position()?)
}
