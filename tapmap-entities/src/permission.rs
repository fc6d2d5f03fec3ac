/// Whether the user has granted access to the device position.
///
/// Granting is performed by an outer authorization step. The flows in this
/// workspace only check the outcome and never prompt.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LocationPermission {
    Granted,
    Denied,
}

impl LocationPermission {
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}
