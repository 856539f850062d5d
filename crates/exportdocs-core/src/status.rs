//! Participant status inferred from free-text affiliations.
//!
//! The upstream store has no degree field, so the status column of the
//! contributions list is guessed from keywords in the affiliation. The
//! heuristic sits behind [`StatusClassifier`] so renderers can be given a
//! different strategy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classified status of a speaker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    /// No affiliation recorded.
    NotSpecified,
    /// Bachelor-level student.
    Student,
    /// Master-level student.
    Master,
    /// Anything else; carries the affiliation unchanged.
    Other(String),
}

impl Status {
    /// Returns the label written into the report.
    pub fn label(&self) -> &str {
        match self {
            Self::NotSpecified => "Не указан",
            Self::Student => "Студент",
            Self::Master => "Магистр",
            Self::Other(affiliation) => affiliation,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Strategy mapping an affiliation to a [`Status`].
pub trait StatusClassifier: Send + Sync {
    fn classify(&self, affiliation: Option<&str>) -> Status;
}

impl<F> StatusClassifier for F
where
    F: Fn(Option<&str>) -> Status + Send + Sync,
{
    fn classify(&self, affiliation: Option<&str>) -> Status {
        self(affiliation)
    }
}

/// Case-insensitive substring matching against two keyword lists.
///
/// Student keywords are checked before master keywords; the first match
/// wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordClassifier {
    pub student_keywords: Vec<String>,
    pub master_keywords: Vec<String>,
}

const STUDENT_KEYWORDS: [&str; 8] = [
    "студент", "student", "бакалавр", "bachelor", "1 курс", "2 курс", "3 курс", "4 курс",
];

const MASTER_KEYWORDS: [&str; 5] = ["магистр", "master", "магистрант", "5 курс", "6 курс"];

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self {
            student_keywords: Vec::from(STUDENT_KEYWORDS.map(String::from)),
            master_keywords: Vec::from(MASTER_KEYWORDS.map(String::from)),
        }
    }
}

impl KeywordClassifier {
    /// Creates a classifier with custom keyword lists.
    pub fn new(student_keywords: Vec<String>, master_keywords: Vec<String>) -> Self {
        Self {
            student_keywords,
            master_keywords,
        }
    }
}

fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    keywords
        .iter()
        .any(|keyword| haystack.contains(&keyword.to_lowercase()))
}

impl StatusClassifier for KeywordClassifier {
    fn classify(&self, affiliation: Option<&str>) -> Status {
        let Some(affiliation) = affiliation.filter(|a| !a.is_empty()) else {
            return Status::NotSpecified;
        };

        let lowered = affiliation.to_lowercase();
        if contains_any(&lowered, &self.student_keywords) {
            Status::Student
        } else if contains_any(&lowered, &self.master_keywords) {
            Status::Master
        } else {
            Status::Other(affiliation.to_string())
        }
    }
}

/// Classifies with the default keyword lists.
pub fn classify_status(affiliation: Option<&str>) -> Status {
    KeywordClassifier::default().classify(affiliation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_affiliation_is_not_specified() {
        assert_eq!(classify_status(None), Status::NotSpecified);
        assert_eq!(classify_status(Some("")), Status::NotSpecified);
        assert_eq!(Status::NotSpecified.label(), "Не указан");
    }

    #[test]
    fn student_keywords_are_case_insensitive() {
        assert_eq!(classify_status(Some("СТУДЕНТ МГУ")), Status::Student);
        assert_eq!(classify_status(Some("PhD Student, MIT")), Status::Student);
        assert_eq!(classify_status(Some("МГТУ, 3 курс")), Status::Student);
        assert_eq!(classify_status(Some("Бакалавр, СПбГУ")), Status::Student);
    }

    #[test]
    fn master_keywords() {
        assert_eq!(classify_status(Some("Магистрант ИТМО")), Status::Master);
        assert_eq!(classify_status(Some("Master program")), Status::Master);
        assert_eq!(classify_status(Some("МФТИ, 5 курс")), Status::Master);
        assert_eq!(Status::Master.label(), "Магистр");
    }

    #[test]
    fn student_checked_before_master() {
        assert_eq!(
            classify_status(Some("студент магистратуры")),
            Status::Student
        );
    }

    #[test]
    fn unmatched_affiliation_is_returned_verbatim() {
        let status = classify_status(Some("НИИ Прикладной Физики"));
        assert_eq!(status, Status::Other("НИИ Прикладной Физики".to_string()));
        assert_eq!(status.to_string(), "НИИ Прикладной Физики");
    }

    #[test]
    fn custom_keywords() {
        let classifier = KeywordClassifier::new(vec!["Undergrad".into()], vec!["Grad".into()]);
        assert_eq!(classifier.classify(Some("undergrad")), Status::Student);
        assert_eq!(classifier.classify(Some("grad school")), Status::Master);
        assert_eq!(
            classifier.classify(Some("студент")),
            Status::Other("студент".into())
        );
    }

    #[test]
    fn closures_are_classifiers() {
        let always_other = |a: Option<&str>| Status::Other(a.unwrap_or("?").to_uppercase());
        assert_eq!(
            always_other.classify(Some("lab")),
            Status::Other("LAB".into())
        );
    }

    #[test]
    fn keywords_deserialize_with_defaults() {
        let classifier: KeywordClassifier =
            serde_json::from_str(r#"{"master_keywords": ["m"]}"#).unwrap();
        assert_eq!(
            classifier.student_keywords,
            KeywordClassifier::default().student_keywords
        );
        assert_eq!(classifier.master_keywords, vec!["m".to_string()]);
    }
}
