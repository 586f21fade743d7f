mod fake_authorizer;
mod fake_runtime;

pub use fake_authorizer::FakeAuthorizer;
pub use fake_runtime::FakeRuntime;

use crate::domain::{AddonDescriptor, AddonSlug, DEFAULT_PRIORITY, PackageRef};

/// Descriptor whose display name is the capitalized slug and whose package is the slug.
pub fn addon(slug: &str, deps: &[&str]) -> AddonDescriptor {
    addon_with_priority(slug, deps, DEFAULT_PRIORITY)
}

pub fn addon_with_priority(slug: &str, deps: &[&str], priority: i32) -> AddonDescriptor {
    let mut chars = slug.chars();
    let display_name = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    AddonDescriptor {
        slug: AddonSlug::new(slug).unwrap(),
        display_name,
        dependencies: deps.iter().map(|d| AddonSlug::new(d).unwrap()).collect(),
        priority,
        package_ref: PackageRef::new(slug),
        description: format!("{} add-on", slug),
    }
}
