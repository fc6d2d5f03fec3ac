use super::prelude::*;

/// The tap flow only ever logs a single address line.
const MAX_ADDRESS_CANDIDATES: usize = 1;

/// Resolves a tapped position to the closest known address, if any.
pub fn resolve_tapped_address<G>(gateway: &G, pos: MapPoint) -> Result<Option<ResolvedAddress>>
where
    G: ReverseGeocodingGateway + ?Sized,
{
    let candidates = gateway.resolve_addresses(pos, MAX_ADDRESS_CANDIDATES)?;
    Ok(candidates.into_iter().next())
}
