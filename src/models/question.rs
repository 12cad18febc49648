//! Question data model
//!
//! A question is the only persisted record of the bank. The stored JSON keeps
//! camelCase keys (`questionType`, `createdAt`, `answeredAt`) so existing
//! collections load unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Open answers must be strictly shorter than this many characters
pub const OPEN_ANSWER_MAX_CHARS: usize = 255;

/// Kind of answer a question accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Exactly one option
    Single,
    /// Any non-empty subset of options
    Multiple,
    /// Free text
    Open,
}

impl QuestionType {
    pub fn name(&self) -> &'static str {
        match self {
            QuestionType::Single => "single",
            QuestionType::Multiple => "multiple",
            QuestionType::Open => "open",
        }
    }

    /// Whether questions of this type carry an option list
    pub fn has_options(&self) -> bool {
        !matches!(self, QuestionType::Open)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(QuestionType::Single),
            "multiple" => Ok(QuestionType::Multiple),
            "open" => Ok(QuestionType::Open),
            other => Err(format!(
                "unknown question type '{}' (expected single, multiple or open)",
                other
            )),
        }
    }
}

/// One selectable option of a choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub option: String,
}

impl QuestionOption {
    pub fn new(option: impl Into<String>) -> Self {
        Self {
            option: option.into(),
        }
    }
}

/// Answer as it is stored on disk
///
/// `single` and `open` questions store a string, `multiple` questions store a
/// map from option label to selection flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Choices(BTreeMap<String, bool>),
}

/// Answering state of a question, derived from its stored answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerState {
    Unanswered,
    Single(String),
    Multiple(BTreeMap<String, bool>),
    Open(String),
}

impl AnswerState {
    pub fn is_answered(&self) -> bool {
        !matches!(self, AnswerState::Unanswered)
    }
}

/// Answer payload submitted for an unanswered question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerInput {
    /// Selected option label of a `single` question
    Choice(String),
    /// Option label to selection flag of a `multiple` question
    Choices(BTreeMap<String, bool>),
    /// Free text of an `open` question
    Text(String),
}

/// A persisted question record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Assigned by the question service on create
    #[serde(default)]
    pub id: String,

    pub question: String,

    pub question_type: QuestionType,

    /// Empty for `open` questions
    #[serde(default)]
    pub options: Vec<QuestionOption>,

    /// Creation timestamp (RFC 3339), display only
    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub answer: Option<AnswerValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answered_at: Option<String>,

    /// Last time the answer was submitted or cleared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Question {
    /// Create an unsaved, unanswered question
    pub fn new<I, T>(question: impl Into<String>, question_type: QuestionType, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id: String::new(),
            question: question.into(),
            question_type,
            options: options.into_iter().map(QuestionOption::new).collect(),
            created_at: String::new(),
            answer: None,
            answered_at: None,
            updated_at: None,
        }
    }

    /// Option labels in display order
    pub fn option_labels(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|o| o.option.as_str())
    }

    pub fn has_option(&self, label: &str) -> bool {
        self.option_labels().any(|o| o == label)
    }

    /// Classify the stored answer
    ///
    /// An empty answer, an empty choice map, or an answer whose shape does not
    /// fit the question type all count as unanswered.
    pub fn answer_state(&self) -> AnswerState {
        match (self.question_type, &self.answer) {
            (_, None) => AnswerState::Unanswered,
            (QuestionType::Single, Some(AnswerValue::Text(text))) if !text.is_empty() => {
                AnswerState::Single(text.clone())
            }
            (QuestionType::Open, Some(AnswerValue::Text(text))) if !text.is_empty() => {
                AnswerState::Open(text.clone())
            }
            (QuestionType::Multiple, Some(AnswerValue::Choices(map))) if !map.is_empty() => {
                AnswerState::Multiple(map.clone())
            }
            _ => AnswerState::Unanswered,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.answer_state().is_answered()
    }

    /// True when a stored answer exists but its JSON shape cannot belong to this type
    pub fn has_mismatched_answer(&self) -> bool {
        matches!(
            (self.question_type, &self.answer),
            (QuestionType::Multiple, Some(AnswerValue::Text(_)))
                | (QuestionType::Single | QuestionType::Open, Some(AnswerValue::Choices(_)))
        )
    }

    pub fn created_at_time(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    pub fn answered_at_time(&self) -> Option<DateTime<Utc>> {
        self.answered_at.as_deref().and_then(parse_timestamp)
    }
}

/// Parse a stored RFC 3339 timestamp
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Comparator for newest-first sorting
///
/// Missing timestamps sort after present ones; equal timestamps compare equal
/// so a stable sort keeps stored order.
pub fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_type_parse() {
        assert_eq!("single".parse::<QuestionType>(), Ok(QuestionType::Single));
        assert_eq!(" Multiple ".parse::<QuestionType>(), Ok(QuestionType::Multiple));
        assert_eq!("open".parse::<QuestionType>(), Ok(QuestionType::Open));
        assert!("essay".parse::<QuestionType>().is_err());
    }

    #[test]
    fn test_deserialize_stored_layout() {
        let json = r#"{
            "id": "3",
            "question": "Pick colors",
            "questionType": "multiple",
            "options": [{"option": "Red"}, {"option": "Blue"}],
            "createdAt": "2024-05-01T10:00:00.000Z",
            "answer": {"Red": true, "Blue": false},
            "answeredAt": "2024-05-02T10:00:00.000Z"
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.id, "3");
        assert_eq!(question.question_type, QuestionType::Multiple);
        assert_eq!(question.option_labels().collect::<Vec<_>>(), vec!["Red", "Blue"]);
        assert!(question.is_answered());
        assert!(question.answered_at_time().is_some());
    }

    #[test]
    fn test_serialize_uses_camel_case_and_null_answer() {
        let question = Question::new("Why?", QuestionType::Open, Vec::<String>::new());
        let json = serde_json::to_value(&question).unwrap();

        assert_eq!(json["questionType"], "open");
        assert!(json["answer"].is_null());
        assert!(json.get("answeredAt").is_none());
    }

    #[test]
    fn test_answer_state_classification() {
        let mut single = Question::new("Color?", QuestionType::Single, ["Red", "Blue"]);
        assert_eq!(single.answer_state(), AnswerState::Unanswered);

        single.answer = Some(AnswerValue::Text(String::new()));
        assert_eq!(single.answer_state(), AnswerState::Unanswered);

        single.answer = Some(AnswerValue::Text("Red".to_string()));
        assert_eq!(single.answer_state(), AnswerState::Single("Red".to_string()));

        let mut multiple = Question::new("Colors?", QuestionType::Multiple, ["Red", "Blue"]);
        multiple.answer = Some(AnswerValue::Choices(BTreeMap::new()));
        assert!(!multiple.is_answered());

        let mut map = BTreeMap::new();
        map.insert("Red".to_string(), true);
        multiple.answer = Some(AnswerValue::Choices(map.clone()));
        assert_eq!(multiple.answer_state(), AnswerState::Multiple(map));
    }

    #[test]
    fn test_mismatched_answer_is_unanswered() {
        let mut multiple = Question::new("Colors?", QuestionType::Multiple, ["Red"]);
        multiple.answer = Some(AnswerValue::Text("Red".to_string()));

        assert!(multiple.has_mismatched_answer());
        assert!(!multiple.is_answered());
    }

    #[test]
    fn test_newest_first_ordering() {
        let older = parse_timestamp("2024-01-01T00:00:00Z");
        let newer = parse_timestamp("2024-06-01T00:00:00Z");

        assert_eq!(newest_first(newer, older), Ordering::Less);
        assert_eq!(newest_first(older, newer), Ordering::Greater);
        assert_eq!(newest_first(older, older), Ordering::Equal);
        assert_eq!(newest_first(older, None), Ordering::Less);
        assert_eq!(newest_first(None, None), Ordering::Equal);
    }
}
