//! Answering - the answered/unanswered state machine
//!
//! `AnswerBoard` holds the two derived views of the collection. Submitting a
//! valid answer moves a question from the unanswered view to the front of the
//! answered view; clearing moves it back. Each transition is written through
//! the question service before the views change. A cleared question is also
//! moved to the front of the stored collection so it stays first after a reload.

use crate::error::{QuizError, QuizResult};
use crate::models::question::newest_first;
use crate::models::{
    AnswerInput, AnswerValue, Question, QuestionType, ValidationErrors, OPEN_ANSWER_MAX_CHARS,
};
use crate::services::QuestionService;
use crate::store::QuestionStore;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Answered and unanswered views of the collection
#[derive(Debug, Clone, Default)]
pub struct AnswerBoard {
    unanswered: Vec<Question>,
    answered: Vec<Question>,
}

impl AnswerBoard {
    /// Load the collection and partition it
    pub fn load<S: QuestionStore>(service: &QuestionService<S>) -> QuizResult<Self> {
        Ok(Self::from_questions(service.list()?))
    }

    /// Partition questions into the two views
    ///
    /// Unanswered questions keep stored order; answered questions are sorted by
    /// `answeredAt`, newest first.
    pub fn from_questions(questions: Vec<Question>) -> Self {
        let (mut answered, unanswered): (Vec<_>, Vec<_>) = questions.into_iter().partition(|q| {
            if q.has_mismatched_answer() {
                tracing::warn!(
                    id = %q.id,
                    question_type = %q.question_type,
                    "Stored answer does not fit the question type, treating as unanswered"
                );
            }
            q.is_answered()
        });

        answered.sort_by(|a, b| newest_first(a.answered_at_time(), b.answered_at_time()));

        Self {
            unanswered,
            answered,
        }
    }

    pub fn unanswered(&self) -> &[Question] {
        &self.unanswered
    }

    pub fn answered(&self) -> &[Question] {
        &self.answered
    }

    /// Find a question in either view
    pub fn find(&self, id: &str) -> Option<&Question> {
        self.unanswered
            .iter()
            .chain(self.answered.iter())
            .find(|q| q.id == id)
    }

    /// Submit an answer for an unanswered question
    pub fn submit<S: QuestionStore>(
        &mut self,
        service: &mut QuestionService<S>,
        id: &str,
        input: AnswerInput,
    ) -> QuizResult<Question> {
        self.submit_at(service, id, input, Utc::now())
    }

    /// Submit an answer with an explicit timestamp
    pub fn submit_at<S: QuestionStore>(
        &mut self,
        service: &mut QuestionService<S>,
        id: &str,
        input: AnswerInput,
        at: DateTime<Utc>,
    ) -> QuizResult<Question> {
        let index = self
            .unanswered
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| QuizError::NotFound(id.to_string()))?;

        let value = validate_answer(&self.unanswered[index], &input).map_err(|errors| {
            tracing::debug!(id, errors = %errors, "Answer rejected");
            QuizError::Validation(errors)
        })?;

        let mut question = self.unanswered[index].clone();
        let stamp = at.to_rfc3339();
        question.answer = Some(value);
        question.answered_at = Some(stamp.clone());
        question.updated_at = Some(stamp);

        if !service.update(id, question.clone())? {
            tracing::warn!(id, "Answered question is no longer in storage");
            self.unanswered.remove(index);
            return Err(QuizError::NotFound(id.to_string()));
        }

        self.unanswered.remove(index);
        self.answered.insert(0, question.clone());

        tracing::info!(id, "Answer submitted");
        Ok(question)
    }

    /// Clear the answer of an answered question
    pub fn clear<S: QuestionStore>(
        &mut self,
        service: &mut QuestionService<S>,
        id: &str,
    ) -> QuizResult<Question> {
        self.clear_at(service, id, Utc::now())
    }

    /// Clear an answer with an explicit timestamp
    pub fn clear_at<S: QuestionStore>(
        &mut self,
        service: &mut QuestionService<S>,
        id: &str,
        at: DateTime<Utc>,
    ) -> QuizResult<Question> {
        let index = self
            .answered
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| QuizError::NotFound(id.to_string()))?;

        let mut question = self.answered[index].clone();
        question.answer = None;
        question.answered_at = None;
        question.updated_at = Some(at.to_rfc3339());

        if !service.move_to_front(id, question.clone())? {
            tracing::warn!(id, "Cleared question is no longer in storage");
            self.answered.remove(index);
            return Err(QuizError::NotFound(id.to_string()));
        }

        self.answered.remove(index);
        self.unanswered.insert(0, question.clone());

        tracing::info!(id, "Answer cleared");
        Ok(question)
    }
}

/// Validate a submission against the question and produce the stored answer
pub fn validate_answer(
    question: &Question,
    input: &AnswerInput,
) -> Result<AnswerValue, ValidationErrors> {
    match (question.question_type, input) {
        (QuestionType::Single, AnswerInput::Choice(choice)) => validate_single(question, choice),
        (QuestionType::Multiple, AnswerInput::Choices(choices)) => {
            validate_multiple(question, choices)
        }
        (QuestionType::Open, AnswerInput::Text(text)) => validate_open(text),
        (question_type, _) => Err(ValidationErrors::single(
            "answer",
            format!("Answer does not fit a {} question", question_type),
        )),
    }
}

/// Whether a stored answer is still a valid answer to the question
pub fn answer_fits(question: &Question, answer: &AnswerValue) -> bool {
    let input = match (question.question_type, answer) {
        (QuestionType::Single, AnswerValue::Text(choice)) => AnswerInput::Choice(choice.clone()),
        (QuestionType::Open, AnswerValue::Text(text)) => AnswerInput::Text(text.clone()),
        (_, AnswerValue::Choices(choices)) => AnswerInput::Choices(choices.clone()),
        (QuestionType::Multiple, AnswerValue::Text(_)) => return false,
    };
    validate_answer(question, &input).is_ok()
}

fn validate_single(question: &Question, choice: &str) -> Result<AnswerValue, ValidationErrors> {
    if choice.is_empty() {
        return Err(ValidationErrors::single("answer", "Select an option"));
    }
    if !question.has_option(choice) {
        return Err(ValidationErrors::single(
            "answer",
            format!("'{}' is not one of the options", choice),
        ));
    }
    Ok(AnswerValue::Text(choice.to_string()))
}

fn validate_multiple(
    question: &Question,
    choices: &BTreeMap<String, bool>,
) -> Result<AnswerValue, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    for label in choices.keys().filter(|label| !question.has_option(label)) {
        errors.push("answer", format!("'{}' is not one of the options", label));
    }
    if !choices.values().any(|selected| *selected) {
        errors.push("answer", "Select at least one option");
    }

    errors.into_result()?;
    Ok(AnswerValue::Choices(choices.clone()))
}

fn validate_open(text: &str) -> Result<AnswerValue, ValidationErrors> {
    if text.is_empty() {
        return Err(ValidationErrors::single("answer", "Answer is required"));
    }
    if text.chars().count() >= OPEN_ANSWER_MAX_CHARS {
        return Err(ValidationErrors::single(
            "answer",
            format!(
                "Answer must be shorter than {} characters",
                OPEN_ANSWER_MAX_CHARS
            ),
        ));
    }
    Ok(AnswerValue::Text(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
    }

    fn choices(pairs: &[(&str, bool)]) -> BTreeMap<String, bool> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn seeded_service() -> QuestionService<MemoryStore> {
        let mut service = QuestionService::new(MemoryStore::new());
        service
            .create(Question::new("Why?", QuestionType::Open, Vec::<String>::new()))
            .unwrap();
        service
            .create(Question::new("Colors?", QuestionType::Multiple, ["Red", "Blue", "Green"]))
            .unwrap();
        service
            .create(Question::new("Color?", QuestionType::Single, ["Red", "Blue"]))
            .unwrap();
        service
    }

    #[test]
    fn test_load_partitions_and_sorts() {
        let mut older = Question::new("A?", QuestionType::Single, ["x"]);
        older.id = "1".to_string();
        older.answer = Some(AnswerValue::Text("x".to_string()));
        older.answered_at = Some(at(1).to_rfc3339());

        let mut newer = Question::new("B?", QuestionType::Open, Vec::<String>::new());
        newer.id = "2".to_string();
        newer.answer = Some(AnswerValue::Text("text".to_string()));
        newer.answered_at = Some(at(5).to_rfc3339());

        let mut empty_map = Question::new("C?", QuestionType::Multiple, ["y"]);
        empty_map.id = "3".to_string();
        empty_map.answer = Some(AnswerValue::Choices(BTreeMap::new()));

        let mut blank = Question::new("D?", QuestionType::Open, Vec::<String>::new());
        blank.id = "4".to_string();

        let board = AnswerBoard::from_questions(vec![older, empty_map, newer, blank]);

        let unanswered: Vec<_> = board.unanswered().iter().map(|q| q.id.as_str()).collect();
        let answered: Vec<_> = board.answered().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(unanswered, vec!["3", "4"]);
        assert_eq!(answered, vec!["2", "1"]);
    }

    #[test]
    fn test_equal_answered_at_keeps_stored_order() {
        let make = |id: &str| {
            let mut q = Question::new("Q?", QuestionType::Open, Vec::<String>::new());
            q.id = id.to_string();
            q.answer = Some(AnswerValue::Text("a".to_string()));
            q.answered_at = Some(at(3).to_rfc3339());
            q
        };

        let board = AnswerBoard::from_questions(vec![make("a"), make("b"), make("c")]);
        let answered: Vec<_> = board.answered().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(answered, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_submit_single_moves_question_and_persists() {
        let mut service = seeded_service();
        let mut board = AnswerBoard::load(&service).unwrap();

        let answered = board
            .submit_at(&mut service, "3", AnswerInput::Choice("Blue".to_string()), at(9))
            .unwrap();

        assert_eq!(answered.answer, Some(AnswerValue::Text("Blue".to_string())));
        assert_eq!(answered.answered_at, Some(at(9).to_rfc3339()));
        assert!(board.unanswered().iter().all(|q| q.id != "3"));
        assert_eq!(board.answered()[0].id, "3");

        let stored = service.get_by_id("3").unwrap().unwrap();
        assert_eq!(stored, answered);

        // Persisted order is unchanged by answering
        let ids: Vec<_> = service.list().unwrap().into_iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_submit_single_rejects_empty_and_unknown() {
        let mut service = seeded_service();
        let mut board = AnswerBoard::load(&service).unwrap();
        let saves = service.store().save_count();

        let err = board
            .submit(&mut service, "3", AnswerInput::Choice(String::new()))
            .unwrap_err();
        assert!(err.validation_errors().unwrap().has_field("answer"));

        let err = board
            .submit(&mut service, "3", AnswerInput::Choice("Purple".to_string()))
            .unwrap_err();
        assert!(err.validation_errors().is_some());

        assert_eq!(service.store().save_count(), saves);
        assert_eq!(board.unanswered().len(), 3);
    }

    #[test]
    fn test_submit_multiple_requires_a_true_entry() {
        let mut service = seeded_service();
        let mut board = AnswerBoard::load(&service).unwrap();

        let all_false = choices(&[("Red", false), ("Blue", false), ("Green", false)]);
        let err = board
            .submit(&mut service, "2", AnswerInput::Choices(all_false))
            .unwrap_err();
        assert!(err.validation_errors().is_some());

        let err = board
            .submit(&mut service, "2", AnswerInput::Choices(BTreeMap::new()))
            .unwrap_err();
        assert!(err.validation_errors().is_some());

        let valid = choices(&[("Red", true), ("Blue", false)]);
        let answered = board
            .submit(&mut service, "2", AnswerInput::Choices(valid.clone()))
            .unwrap();
        assert_eq!(answered.answer, Some(AnswerValue::Choices(valid)));
    }

    #[test]
    fn test_submit_multiple_rejects_unknown_labels() {
        let question = Question::new("Colors?", QuestionType::Multiple, ["Red"]);
        let input = AnswerInput::Choices(choices(&[("Red", true), ("Pink", true)]));

        let errors = validate_answer(&question, &input).unwrap_err();
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_open_answer_length_boundary() {
        let question = Question::new("Why?", QuestionType::Open, Vec::<String>::new());

        let accepted = AnswerInput::Text("a".repeat(254));
        assert!(validate_answer(&question, &accepted).is_ok());

        let rejected = AnswerInput::Text("a".repeat(255));
        assert!(validate_answer(&question, &rejected).is_err());

        let empty = AnswerInput::Text(String::new());
        assert!(validate_answer(&question, &empty).is_err());
    }

    #[test]
    fn test_open_answer_counts_characters_not_bytes() {
        let question = Question::new("Why?", QuestionType::Open, Vec::<String>::new());
        let input = AnswerInput::Text("é".repeat(254));

        assert!(validate_answer(&question, &input).is_ok());
    }

    #[test]
    fn test_input_shape_must_match_type() {
        let question = Question::new("Color?", QuestionType::Single, ["Red"]);
        let input = AnswerInput::Text("Red".to_string());

        assert!(validate_answer(&question, &input).is_err());
    }

    #[test]
    fn test_clear_and_reanswer_cycle() {
        let mut service = seeded_service();
        let mut board = AnswerBoard::load(&service).unwrap();

        board
            .submit_at(&mut service, "1", AnswerInput::Text("Because".to_string()), at(1))
            .unwrap();

        let cleared = board.clear_at(&mut service, "1", at(2)).unwrap();
        assert!(cleared.answer.is_none());
        assert!(cleared.answered_at.is_none());
        assert_eq!(cleared.updated_at, Some(at(2).to_rfc3339()));
        assert!(board.answered().iter().all(|q| q.id != "1"));
        assert_eq!(board.unanswered()[0].id, "1");
        assert!(!service.get_by_id("1").unwrap().unwrap().is_answered());

        let reanswered = board
            .submit_at(&mut service, "1", AnswerInput::Text("Again".to_string()), at(3))
            .unwrap();
        assert_eq!(reanswered.answered_at, Some(at(3).to_rfc3339()));
        assert_eq!(board.answered()[0].id, "1");
        assert!(board.unanswered().iter().all(|q| q.id != "1"));
    }

    #[test]
    fn test_cleared_question_is_first_after_reload() {
        let mut service = seeded_service();
        let mut board = AnswerBoard::load(&service).unwrap();

        board
            .submit_at(&mut service, "1", AnswerInput::Text("Because".to_string()), at(1))
            .unwrap();
        board.clear_at(&mut service, "1", at(2)).unwrap();

        let in_memory: Vec<_> = board.unanswered().iter().map(|q| q.id.as_str()).collect();
        let reloaded = AnswerBoard::load(&service).unwrap();
        let unanswered: Vec<_> = reloaded.unanswered().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(in_memory, vec!["1", "3", "2"]);
        assert_eq!(unanswered, in_memory);
    }

    #[test]
    fn test_vanished_question_is_not_found_and_views_follow_storage() {
        let mut service = seeded_service();
        let mut board = AnswerBoard::load(&service).unwrap();
        board
            .submit_at(&mut service, "1", AnswerInput::Text("Because".to_string()), at(1))
            .unwrap();

        service.delete_by_id("3").unwrap();
        service.delete_by_id("1").unwrap();
        let saves = service.store().save_count();

        let err = board
            .submit(&mut service, "3", AnswerInput::Choice("Red".to_string()))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(board.find("3").is_none());

        assert!(board.clear(&mut service, "1").unwrap_err().is_not_found());
        assert!(board.find("1").is_none());

        assert_eq!(service.store().save_count(), saves);
        let ids: Vec<_> = service.list().unwrap().into_iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_answer_fits_current_options() {
        let mut question = Question::new("Color?", QuestionType::Single, ["Red", "Blue"]);
        let red = AnswerValue::Text("Red".to_string());
        assert!(answer_fits(&question, &red));

        question.options = Question::new("", QuestionType::Single, ["Green", "Blue"]).options;
        assert!(!answer_fits(&question, &red));

        let multiple = Question::new("Colors?", QuestionType::Multiple, ["Red"]);
        assert!(answer_fits(&multiple, &AnswerValue::Choices(choices(&[("Red", true)]))));
        assert!(!answer_fits(&multiple, &AnswerValue::Choices(choices(&[("Pink", true)]))));
        assert!(!answer_fits(&multiple, &red));
    }

    #[test]
    fn test_wrong_view_is_not_found() {
        let mut service = seeded_service();
        let mut board = AnswerBoard::load(&service).unwrap();

        assert!(board.clear(&mut service, "1").unwrap_err().is_not_found());

        board
            .submit(&mut service, "1", AnswerInput::Text("x".to_string()))
            .unwrap();
        let err = board
            .submit(&mut service, "1", AnswerInput::Text("y".to_string()))
            .unwrap_err();
        assert!(err.is_not_found());

        assert!(board
            .submit(&mut service, "missing", AnswerInput::Text("y".to_string()))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_reload_reflects_persisted_transitions() {
        let mut service = seeded_service();
        let mut board = AnswerBoard::load(&service).unwrap();

        board
            .submit_at(&mut service, "3", AnswerInput::Choice("Red".to_string()), at(1))
            .unwrap();
        board
            .submit_at(&mut service, "1", AnswerInput::Text("ok".to_string()), at(4))
            .unwrap();

        let reloaded = AnswerBoard::load(&service).unwrap();
        let answered: Vec<_> = reloaded.answered().iter().map(|q| q.id.as_str()).collect();
        let unanswered: Vec<_> = reloaded.unanswered().iter().map(|q| q.id.as_str()).collect();
        assert_eq!(answered, vec!["1", "3"]);
        assert_eq!(unanswered, vec!["2"]);
    }
}
