use crate::types::attributes::AttributeStore;
use crate::types::time::{IntoTime, Time};
use num_traits::Zero;

/// Where a performer is in the score: the start time of the node being
/// visited and the attributes inherited from enclosing groups.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    pub time: Time,
    pub inherited: AttributeStore,
}

impl Context {
    pub fn new(time: impl IntoTime) -> Self {
        Context {
            time: time.into_time(),
            inherited: AttributeStore::new(),
        }
    }

    /// Context for a node starting `by` beats later
    pub fn advance(&self, by: Time) -> Self {
        Context {
            time: self.time + by,
            inherited: self.inherited.clone(),
        }
    }

    /// Context for the inside of a group; the innermost group wins on collision
    pub fn inherit(&self, attributes: &AttributeStore) -> Self {
        Context {
            time: self.time,
            inherited: self.inherited.merged_with(attributes),
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context {
            time: Time::zero(),
            inherited: AttributeStore::new(),
        }
    }
}
