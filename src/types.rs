use serde::{Deserialize, Serialize};

/// One selectable answer as delivered by the backend. Exactly one option per
/// question is expected to carry `isCorrect: true`; the client does not
/// verify this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub answer: String,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<AnswerOption>,
    pub difficulty_level: u32,
}

/// One entry of the test history, frozen at the moment the answer was
/// accepted. Sent back verbatim when requesting detailed feedback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub options: Vec<AnswerOption>,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub difficulty: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AnswerVerdict {
    pub correct: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillAssessment {
    pub skill: String,
    pub level: String,
    pub evidence: String,
}

/// Narrative feedback synthesized by the backend from a completed test.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DetailedFeedback {
    pub feedback_summary: String,
    pub skill_levels: Vec<SkillAssessment>,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub suggested_improvements: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[allow(dead_code)]
    pub token_type: String,
}

/// Shared by the user and institute signup endpoints.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}
