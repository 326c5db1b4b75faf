use crate::model::Question;
use serde::Deserialize;

/// Raw question record as it appears in the bank. Every field is optional so
/// a sloppy bank still loads; `normalize` decides what each record means.
#[derive(Deserialize, Debug)]
struct RawQuestion {
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    answer: Option<usize>,
}

/// Loads the question bank from the embedded YAML.
pub fn read_questions_embedded() -> Vec<Question> {
    parse_questions(include_str!("data/questions.yaml"))
}

/// Parses a YAML sequence of question records. A document that is not a
/// sequence yields an empty bank (the app then shows the empty state) rather
/// than an error; per-record cleanup happens in `normalize`.
pub fn parse_questions(src: &str) -> Vec<Question> {
    let raw: Vec<RawQuestion> = match serde_yaml::from_str(src) {
        Ok(raw) => raw,
        Err(err) => {
            log::error!("question bank is not a sequence of records: {err}");
            return Vec::new();
        }
    };

    raw.into_iter().enumerate().map(normalize).collect()
}

/// Single validation pass: after this, `answer` is either a valid index into
/// `options` or `None` (question stays visible but can never score).
fn normalize((i, raw): (usize, RawQuestion)) -> Question {
    let question = raw.question.unwrap_or_default();
    let options = raw.options.unwrap_or_default();

    let answer = match raw.answer {
        Some(a) if a < options.len() => Some(a),
        Some(a) => {
            log::warn!(
                "question {}: answer index {a} out of range for {} options, question is unscoreable",
                i + 1,
                options.len()
            );
            None
        }
        None => {
            log::warn!("question {}: no answer index, question is unscoreable", i + 1);
            None
        }
    };

    if question.is_empty() {
        log::warn!("question {}: missing question text", i + 1);
    }
    if options.is_empty() {
        log::warn!("question {}: no options", i + 1);
    }

    Question {
        question,
        options,
        answer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_records() {
        let bank = parse_questions(
            r#"
- question: "In what year did Nigeria gain independence?"
  options: ["1957", "1960", "1963"]
  answer: 1
- question: "What is the capital of Nigeria?"
  options: ["Lagos", "Abuja"]
  answer: 1
"#,
        );
        assert_eq!(bank.len(), 2);
        assert_eq!(bank[0].answer, Some(1));
        assert_eq!(bank[1].options, vec!["Lagos", "Abuja"]);
    }

    #[test]
    fn out_of_range_answer_becomes_unscoreable() {
        let bank = parse_questions(
            r#"
- question: "Q?"
  options: ["a", "b"]
  answer: 5
"#,
        );
        assert_eq!(bank.len(), 1);
        assert_eq!(bank[0].answer, None);
    }

    #[test]
    fn missing_fields_default_instead_of_failing() {
        let bank = parse_questions("- answer: 0\n- question: \"Only text\"\n");
        assert_eq!(bank.len(), 2);
        assert!(bank[0].question.is_empty());
        assert!(bank[0].options.is_empty());
        // answer 0 with zero options is out of range, so unscoreable
        assert_eq!(bank[0].answer, None);
        assert_eq!(bank[1].question, "Only text");
    }

    #[test]
    fn non_sequence_document_yields_empty_bank() {
        assert!(parse_questions("not: a sequence").is_empty());
        assert!(parse_questions("[]").is_empty());
    }

    #[test]
    fn embedded_bank_loads_and_every_answer_is_in_range() {
        let bank = read_questions_embedded();
        assert!(!bank.is_empty());
        for q in &bank {
            assert!(!q.question.is_empty());
            assert!(q.has_options());
            let a = q.answer.expect("embedded bank questions are all scoreable");
            assert!(a < q.options.len());
        }
    }
}
