//! Process-unique object id generation.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

use std::collections::HashSet;

use rand::Rng;

use crate::consts::{ID_PREFIX, ID_RANDOM_BYTES};
use crate::doc::ObjectId;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Issues fresh ids and remembers every id seen this session, so a new id
/// never collides with an issued or restored one.
#[derive(Debug, Default)]
pub struct IdGenerator {
    seen: HashSet<ObjectId>,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A new `id<hex>` identity distinct from everything seen so far.
    pub fn generate(&mut self) -> ObjectId {
        let mut rng = rand::rng();
        loop {
            let bytes: [u8; ID_RANDOM_BYTES] = rng.random();
            let id = ObjectId::new(format!("{ID_PREFIX}{}", bytes_to_hex(&bytes)));
            if self.seen.insert(id.clone()) {
                return id;
            }
        }
    }

    /// Record an externally supplied id (e.g. from a restored record).
    pub fn reserve(&mut self, id: &ObjectId) {
        self.seen.insert(id.clone());
    }

    #[must_use]
    pub fn has_seen(&self, id: &ObjectId) -> bool {
        self.seen.contains(id)
    }
}
