//! Resolve topic keys use case

use crate::domain::{LiturgicalDay, TopicOverrides};

/// A topic code and the key it resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTopic {
    pub code: String,
    pub key: String,
}

/// Resolve each topic code for `day`, keeping input order.
pub fn resolve_topics(
    day: &LiturgicalDay,
    codes: &[String],
    overrides: &TopicOverrides,
) -> Vec<ResolvedTopic> {
    codes
        .iter()
        .map(|code| ResolvedTopic {
            code: code.clone(),
            key: day.relative_topic_with(code, overrides),
        })
        .collect()
}
