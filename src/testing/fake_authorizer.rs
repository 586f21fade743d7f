use std::collections::BTreeSet;
use std::sync::Mutex;

use crate::domain::Capability;
use crate::ports::Authorizer;

/// Authorizer denying a configurable set of capabilities and recording checks.
#[derive(Default)]
pub struct FakeAuthorizer {
    pub denied: BTreeSet<Capability>,
    pub checks: Mutex<Vec<Capability>>,
}

impl FakeAuthorizer {
    pub fn allow_all() -> Self {
        Self::default()
    }

    pub fn deny(capabilities: &[Capability]) -> Self {
        Self { denied: capabilities.iter().copied().collect(), checks: Mutex::new(Vec::new()) }
    }

    pub fn checks(&self) -> Vec<Capability> {
        self.checks.lock().unwrap().clone()
    }
}

impl Authorizer for FakeAuthorizer {
    fn can(&self, capability: Capability) -> bool {
        self.checks.lock().unwrap().push(capability);
        !self.denied.contains(&capability)
    }
}
