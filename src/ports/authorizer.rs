use crate::domain::Capability;

/// Port for checking whether the caller may run a batch operation.
pub trait Authorizer {
    /// Whether the capability is granted.
    fn can(&self, capability: Capability) -> bool;
}

/// Authorizer that grants every capability.
pub struct AllowAll;

impl Authorizer for AllowAll {
    fn can(&self, _capability: Capability) -> bool {
        true
    }
}
