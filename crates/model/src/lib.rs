use std::fmt::Debug;

use serde::Serialize;
use utility::id::{HasId, Id};

pub mod locomotive;
pub mod repair;
pub mod report;
pub mod sample;
pub mod team;
pub mod worker;

/// A stored entity together with the key the database assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone + PartialEq,
{
    pub id: Id<V>,
    #[serde(flatten)]
    pub content: V,
}

impl<V> WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone + PartialEq,
{
    pub fn new(id: Id<V>, content: V) -> Self {
        Self { id, content }
    }
}
