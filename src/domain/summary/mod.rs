//! Summary domain module.
//!
//! Turns an interview (or a legacy list of concerns) into a one-to-two
//! sentence digest: the prompt sent to the completion gateway and the canned
//! digests used when the gateway is not configured or fails.

use serde::{Deserialize, Serialize};

use crate::domain::conversation::{ChatMessage, ChatRole, Transcript};

/// Digest when the respondent has not said anything yet.
pub const NO_DETAILS_SUMMARY: &str = "มีความกังวลเรื่อง Slack แต่ยังไม่ได้เล่าละเอียด";

/// Last-resort digest when even the input could not be read.
pub const DEFAULT_SUMMARY: &str = "ผู้ใช้แสดงความกังวลเกี่ยวกับการเปลี่ยนจาก Line ไป Slack";

const SINGLE_CONCERN_PREFIX: &str = "ความกังวลหลัก: ";
const MULTI_CONCERN_PREFIX: &str =
    "ผู้ใช้แสดงความกังวลหลายประการเกี่ยวกับการเปลี่ยนจาก Line ไป Slack";

/// Joins every contribution in the unconfigured digests.
pub const LIST_SEPARATOR: &str = ", ";

/// Joins the first two contributions in the failure digest.
pub const PAIR_CONNECTOR: &str = " และ ";

/// How many contributions the failure digest quotes.
const FAILURE_DIGEST_LIMIT: usize = 2;

/// What to summarize.
///
/// The two shapes are mutually exclusive; callers pick one explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryInput {
    /// Full interview, optionally still starting with the greeting.
    Conversation(Transcript),
    /// Legacy shape: bare concern strings.
    Concerns(Vec<String>),
}

impl SummaryInput {
    pub fn conversation(messages: Vec<ChatMessage>) -> Self {
        SummaryInput::Conversation(Transcript::from_messages(messages))
    }

    pub fn concerns(concerns: Vec<String>) -> Self {
        SummaryInput::Concerns(concerns)
    }

    /// Text the respondent contributed, greeting excluded.
    pub fn contributions(&self) -> Vec<&str> {
        match self {
            SummaryInput::Conversation(transcript) => transcript
                .without_greeting()
                .iter()
                .filter(|m| m.is_user())
                .map(|m| m.content.as_str())
                .collect(),
            SummaryInput::Concerns(concerns) => concerns.iter().map(String::as_str).collect(),
        }
    }

    /// True when there is nothing to summarize.
    pub fn is_empty(&self) -> bool {
        self.contributions().is_empty()
    }

    /// Shape name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SummaryInput::Conversation(_) => "conversation",
            SummaryInput::Concerns(_) => "concerns",
        }
    }
}

/// Prompt asking the model for a 1-2 sentence digest in professional Thai.
pub fn summary_prompt(input: &SummaryInput) -> String {
    match input {
        SummaryInput::Concerns(concerns) => {
            let numbered = concerns
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{}. {}", i + 1, c))
                .collect::<Vec<_>>()
                .join("\n");
            format!(
                "สรุปประเด็นความกังวลเกี่ยวกับการเปลี่ยนจาก Line มาใช้ Slack ให้เป็น 1-2 ประโยคที่ครอบคลุมประเด็นสำคัญ:\n\
                 \n\
                 ความกังวลที่แสดงออกมา:\n\
                 {}\n\
                 \n\
                 กรุณาสรุปให้ครอบคลุมประเด็นหลักทั้งหมด ใช้ภาษาไทยระดับมืออาชีพ",
                numbered
            )
        }
        SummaryInput::Conversation(transcript) => {
            let conversation = transcript
                .without_greeting()
                .iter()
                .map(|m| {
                    let speaker = match m.role {
                        ChatRole::User => "ผู้ใช้",
                        ChatRole::Assistant => "AI",
                    };
                    format!("{}: {}", speaker, m.content)
                })
                .collect::<Vec<_>>()
                .join("\n\n");
            format!(
                "จากบทสนทนาเรื่องการเปลี่ยนจาก Line มาใช้ Slack ให้สรุปประเด็นความกังวลหลักให้เป็น 1-2 ประโยคที่ครอบคลุมประเด็นสำคัญ:\n\
                 \n\
                 บทสนทนา:\n\
                 {}\n\
                 \n\
                 สรุปเฉพาะประเด็นความกังวลหลักและเหตุผลที่สำคัญ ใช้ภาษาไทยระดับมืออาชีพ",
                conversation
            )
        }
    }
}

/// Digest used when no completion credential is configured.
///
/// Lists every contribution.
pub fn unconfigured_digest(input: &SummaryInput) -> String {
    let contributions = input.contributions();
    if contributions.is_empty() {
        return NO_DETAILS_SUMMARY.to_string();
    }
    match input {
        SummaryInput::Concerns(_) if contributions.len() == 1 => {
            format!("{}{}", SINGLE_CONCERN_PREFIX, contributions[0])
        }
        SummaryInput::Concerns(_) => format!(
            "{}: {}",
            MULTI_CONCERN_PREFIX,
            contributions.join(LIST_SEPARATOR)
        ),
        SummaryInput::Conversation(_) => format!(
            "{}: {}",
            DEFAULT_SUMMARY,
            contributions.join(LIST_SEPARATOR)
        ),
    }
}

/// Digest used when a live gateway call fails.
///
/// Quotes at most the first two contributions, never just one of two.
pub fn failure_digest(input: &SummaryInput) -> String {
    let contributions = input.contributions();
    match contributions.as_slice() {
        [] => NO_DETAILS_SUMMARY.to_string(),
        [only] => format!("{}{}", SINGLE_CONCERN_PREFIX, only),
        many => {
            let quoted = &many[..many.len().min(FAILURE_DIGEST_LIMIT)];
            format!(
                "{} รวมถึง: {}",
                MULTI_CONCERN_PREFIX,
                quoted.join(PAIR_CONNECTOR)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation() -> SummaryInput {
        SummaryInput::conversation(vec![
            ChatMessage::assistant("greeting"),
            ChatMessage::user("slow rollout"),
            ChatMessage::assistant("why?"),
            ChatMessage::user("training cost"),
            ChatMessage::assistant("and?"),
            ChatMessage::user("notifications"),
        ])
    }

    #[test]
    fn contributions_skip_greeting_and_assistant() {
        assert_eq!(
            conversation().contributions(),
            vec!["slow rollout", "training cost", "notifications"]
        );
    }

    #[test]
    fn greeting_only_is_empty() {
        let input = SummaryInput::conversation(vec![ChatMessage::assistant("greeting")]);
        assert!(input.is_empty());
        assert_eq!(unconfigured_digest(&input), NO_DETAILS_SUMMARY);
        assert_eq!(failure_digest(&input), NO_DETAILS_SUMMARY);
    }

    #[test]
    fn unconfigured_single_concern() {
        let input = SummaryInput::concerns(vec!["slow rollout".into()]);
        assert_eq!(unconfigured_digest(&input), "ความกังวลหลัก: slow rollout");
    }

    #[test]
    fn unconfigured_lists_every_concern() {
        let input = SummaryInput::concerns(vec!["slow rollout".into(), "training cost".into()]);
        let digest = unconfigured_digest(&input);
        assert!(digest.contains("slow rollout, training cost"));
        assert!(digest.starts_with(MULTI_CONCERN_PREFIX));
    }

    #[test]
    fn unconfigured_conversation_lists_user_messages() {
        let digest = unconfigured_digest(&conversation());
        assert_eq!(
            digest,
            format!(
                "{}: slow rollout, training cost, notifications",
                DEFAULT_SUMMARY
            )
        );
    }

    #[test]
    fn failure_digest_quotes_first_two() {
        let digest = failure_digest(&conversation());
        assert!(digest.contains("slow rollout และ training cost"));
        assert!(!digest.contains("notifications"));
    }

    #[test]
    fn failure_digest_single_wording_differs() {
        let single = failure_digest(&SummaryInput::concerns(vec!["cost".into()]));
        let multi = failure_digest(&SummaryInput::concerns(vec!["cost".into(), "time".into()]));
        assert_eq!(single, "ความกังวลหลัก: cost");
        assert!(multi.starts_with(MULTI_CONCERN_PREFIX));
        assert!(multi.contains("cost และ time"));
    }

    #[test]
    fn conversation_prompt_labels_speakers_without_greeting() {
        let prompt = summary_prompt(&conversation());
        assert!(prompt.contains("ผู้ใช้: slow rollout"));
        assert!(prompt.contains("AI: why?"));
        assert!(!prompt.contains("greeting"));
    }

    #[test]
    fn concerns_prompt_numbers_items() {
        let prompt = summary_prompt(&SummaryInput::concerns(vec!["a".into(), "b".into()]));
        assert!(prompt.contains("1. a\n2. b"));
    }
}
