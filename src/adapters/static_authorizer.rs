use std::collections::BTreeSet;

use crate::domain::Capability;
use crate::ports::Authorizer;

/// Authorizer granting a fixed set of capabilities, typically from config.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthorizer {
    granted: BTreeSet<Capability>,
}

impl StaticAuthorizer {
    pub fn new(granted: impl IntoIterator<Item = Capability>) -> Self {
        Self { granted: granted.into_iter().collect() }
    }
}

impl Authorizer for StaticAuthorizer {
    fn can(&self, capability: Capability) -> bool {
        self.granted.contains(&capability)
    }
}
