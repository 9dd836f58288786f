use std::cmp::Ordering;

use thiserror::Error;

use crate::parsing::text::Position;

/// A hard parse failure: where it happened and what would have been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {} at {at}", describe(.expected))]
pub struct Failure {
    pub at: Position,
    pub expected: Vec<String>,
}

impl Failure {
    pub fn new(at: Position, expected: impl Into<String>) -> Self {
        Self {
            at,
            expected: vec![expected.into()],
        }
    }

    /// Combines two failures from alternatives tried at the same point.
    ///
    /// The one that got further wins; on a tie the expectations are unioned,
    /// keeping first-seen order.
    #[must_use]
    pub fn merge(mut self, other: Failure) -> Failure {
        match self.at.offset.cmp(&other.at.offset) {
            Ordering::Greater => self,
            Ordering::Less => other,
            Ordering::Equal => {
                for e in other.expected {
                    if !self.expected.contains(&e) {
                        self.expected.push(e);
                    }
                }
                self
            }
        }
    }
}

fn describe(expected: &[String]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [one] => one.clone(),
        many => format!("one of {}", many.join(", ")),
    }
}
