use serde::{Deserialize, Serialize};
use utility::id::HasId;

/// A maintenance crew, reachable under a contact phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub phone: String,
}

impl HasId for Team {
    type IdType = i32;
}

impl Team {
    pub fn new<S: Into<String>>(phone: S) -> Self {
        Self {
            phone: phone.into(),
        }
    }
}
