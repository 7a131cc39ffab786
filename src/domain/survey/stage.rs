//! Survey stage state machine.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where the respondent is in the survey.
///
/// `Survey` is shown twice: first to collect ratings, then again after the
/// interview to preview the summary before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStage {
    #[default]
    Survey,
    Chat,
    Complete,
}

impl StateMachine for SurveyStage {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SurveyStage::*;
        matches!(
            (self, target),
            (Survey, Chat) | (Chat, Survey) | (Survey, Complete)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SurveyStage::*;
        match self {
            Survey => vec![Chat, Complete],
            Chat => vec![Survey],
            Complete => vec![],
        }
    }
}

impl std::fmt::Display for SurveyStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SurveyStage::Survey => "survey",
            SurveyStage::Chat => "chat",
            SurveyStage::Complete => "complete",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_can_only_go_back_to_survey() {
        assert_eq!(SurveyStage::Chat.valid_transitions(), vec![SurveyStage::Survey]);
        assert!(SurveyStage::Chat.transition_to(SurveyStage::Complete).is_err());
    }

    #[test]
    fn complete_is_terminal() {
        assert!(SurveyStage::Complete.is_terminal());
        assert!(SurveyStage::Complete.transition_to(SurveyStage::Survey).is_err());
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(SurveyStage::Chat.to_string(), "chat");
    }
}
