use std::fmt;

/// A registered customer. The id is assigned by whoever creates the customer and is
/// not checked for uniqueness.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: u64,
    pub name: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, id: u64) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}
