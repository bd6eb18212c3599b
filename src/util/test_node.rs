use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use crate::sortable::Sortable;

/// A string-backed node used throughout the tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestNode(pub String);

impl TestNode {
    pub fn new(name: &str) -> TestNode {
        TestNode(name.to_owned())
    }

    /// Creates `count` nodes named `{prefix}_0`, `{prefix}_1`, ...
    pub fn many(count: usize, prefix: &str) -> Vec<TestNode> {
        (0..count)
            .map(|i| TestNode(format!("{prefix}_{i}")))
            .collect()
    }
}

impl Sortable for TestNode {
    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn less(&self, other: &Self) -> bool {
        self.0 < other.0
    }

    fn unique(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.0.as_bytes())
    }
}

impl Display for TestNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shorthand for [`TestNode::new`].
pub fn node(name: &str) -> TestNode {
    TestNode::new(name)
}
