//! FAQ search and topic filtering for the support page.

use crate::model::Faq;

use super::Keyword;

/// Question keywords that place an FAQ under a support topic.
const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("repair", &["repair", "service", "fix", "maintenance"]),
    ("warranty", &["warranty", "guarantee", "covered"]),
    (
        "watches",
        &["watch", "timepiece", "automatic", "mechanical", "quartz", "smart"],
    ),
    ("value", &["value", "price", "worth", "appraisal", "investment"]),
    ("water", &["water", "resistance", "waterproof", "swimming"]),
];

/// Keywords for a topic, or `None` if the topic is unknown.
#[must_use]
pub fn topic_keywords(topic: &str) -> Option<&'static [&'static str]> {
    let topic = topic.trim().to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, keywords)| *keywords)
}

/// Names of every known topic.
pub fn topics() -> impl Iterator<Item = &'static str> {
    TOPIC_KEYWORDS.iter().map(|(name, _)| *name)
}

/// FAQs whose question or answer contains `raw`. A blank query returns all.
pub fn search_faqs<'a>(faqs: &'a [Faq], raw: &str) -> Vec<&'a Faq> {
    let Some(keyword) = Keyword::parse(raw) else {
        return faqs.iter().collect();
    };
    faqs.iter()
        .filter(|f| keyword.matches(&f.question) || keyword.matches(&f.answer))
        .collect()
}

/// FAQs whose question mentions any keyword of `topic`.
///
/// An unknown topic returns every FAQ.
pub fn faqs_by_topic<'a>(faqs: &'a [Faq], topic: &str) -> Vec<&'a Faq> {
    let Some(keywords) = topic_keywords(topic) else {
        return faqs.iter().collect();
    };
    faqs.iter()
        .filter(|f| {
            let question = f.question.to_lowercase();
            keywords.iter().any(|k| question.contains(k))
        })
        .collect()
}
