//! Central registry of snapshot collections
//!
//! Export and import share this single ordered list so the two directions can
//! never drift apart. Registry order is restore order; no ordering dependency
//! between collections is enforced beyond that.

/// Descriptor for one named collection in the live store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSpec {
    /// Stable collection name, used as the store key and snapshot file stem
    pub name: &'static str,
}

impl CollectionSpec {
    const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// File name for this collection inside a snapshot directory
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }
}

/// All known collections, in restore order.
///
/// Documents may embed cross-collection references by id; those survive a
/// restore as long as the referenced collections are restored from the same
/// snapshot, so relative order here carries no integrity guarantee.
pub const COLLECTIONS: [CollectionSpec; 10] = [
    CollectionSpec::new("users"),
    CollectionSpec::new("bank_accounts"),
    CollectionSpec::new("credit_cards"),
    CollectionSpec::new("loans"),
    CollectionSpec::new("transactions"),
    CollectionSpec::new("budgets"),
    CollectionSpec::new("daybooks"),
    CollectionSpec::new("journals"),
    CollectionSpec::new("stocks"),
    CollectionSpec::new("sips"),
];

/// Look up a collection descriptor by name
pub fn find(name: &str) -> Option<&'static CollectionSpec> {
    COLLECTIONS.iter().find(|c| c.name == name)
}
