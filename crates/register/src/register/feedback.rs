use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io::Write;
use std::sync::Arc;
use uuid::Uuid;

use crate::register::repository::{FeedbackRepository, RepositoryError};

/// Column order of the feedback export. Fixed; downstream analysis depends
/// on it.
pub const FEEDBACK_COLUMNS: [&str; 13] = [
    "created",
    "feedbackOrTechnical",
    "satisfaction",
    "improvements",
    "visitReason",
    "visitReasonOther",
    "contactAuthority",
    "contactAuthorityNoReason",
    "problemArea",
    "problemAreaPage",
    "problemDescription",
    "betaSurveyYesNo",
    "betaSurveyEmail",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeedbackId(pub Uuid);

impl FeedbackId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FeedbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackKind {
    Feedback,
    TechnicalProblem,
}

impl FeedbackKind {
    pub const fn value(self) -> &'static str {
        match self {
            Self::Feedback => "feedback",
            Self::TechnicalProblem => "technical-problem",
        }
    }
}

/// Append-only record of user-submitted feedback. Created once, never
/// updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: FeedbackId,
    pub kind: FeedbackKind,
    pub satisfaction: Option<String>,
    pub improvements: Option<String>,
    pub visit_reason: Option<String>,
    pub visit_reason_other: Option<String>,
    pub contact_authority: Option<String>,
    pub contact_authority_no_reason: Option<String>,
    pub problem_area: Option<String>,
    pub problem_area_page: Option<String>,
    pub problem_description: Option<String>,
    pub beta_survey_yes_no: Option<String>,
    pub beta_survey_email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    fn csv_row(&self) -> [String; 13] {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        [
            self.created_at.format("%d/%m/%Y, %H:%M:%S").to_string(),
            self.kind.value().to_string(),
            text(&self.satisfaction),
            text(&self.improvements),
            text(&self.visit_reason),
            text(&self.visit_reason_other),
            text(&self.contact_authority),
            text(&self.contact_authority_no_reason),
            text(&self.problem_area),
            text(&self.problem_area_page),
            text(&self.problem_description),
            text(&self.beta_survey_yes_no),
            text(&self.beta_survey_email),
        ]
    }
}

/// Writes the header row plus one row per record and returns the number of
/// rows written (records + 1).
pub fn export_csv<W: Write>(records: &[Feedback], writer: W) -> Result<usize, csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(FEEDBACK_COLUMNS)?;
    for record in records {
        csv_writer.write_record(record.csv_row())?;
    }
    csv_writer.flush()?;

    Ok(records.len() + 1)
}

/// Form payload for a feedback submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackSubmission {
    pub kind: Option<FeedbackKind>,
    pub satisfaction: Option<String>,
    pub improvements: Option<String>,
    pub visit_reason: Option<String>,
    pub visit_reason_other: Option<String>,
    pub contact_authority: Option<String>,
    pub contact_authority_no_reason: Option<String>,
    pub problem_area: Option<String>,
    pub problem_area_page: Option<String>,
    pub problem_description: Option<String>,
    pub beta_survey_yes_no: Option<String>,
    pub beta_survey_email: Option<String>,
}

/// Field-level validation message, rendered back beside the submitted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub text: String,
}

pub type ValidationErrors = BTreeMap<String, FieldError>;

#[derive(Debug, thiserror::Error)]
pub enum SubmitFeedbackError {
    #[error("feedback submission failed validation")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub struct FeedbackService<F> {
    repository: Arc<F>,
}

impl<F> FeedbackService<F>
where
    F: FeedbackRepository,
{
    pub fn new(repository: Arc<F>) -> Self {
        Self { repository }
    }

    /// Validates the submission and appends a record. Validation problems
    /// come back as a field map, never as a panic or a 500.
    pub fn submit(
        &self,
        submission: FeedbackSubmission,
        now: DateTime<Utc>,
    ) -> Result<Feedback, SubmitFeedbackError> {
        let mut errors = ValidationErrors::new();

        let Some(kind) = submission.kind else {
            errors.insert(
                "kind".to_string(),
                FieldError {
                    text: "Select whether this is feedback or a technical problem".to_string(),
                },
            );
            return Err(SubmitFeedbackError::Validation(errors));
        };

        match kind {
            FeedbackKind::Feedback => {
                if is_blank(&submission.satisfaction) {
                    errors.insert(
                        "satisfaction".to_string(),
                        FieldError {
                            text: "Select how satisfied you were with the service".to_string(),
                        },
                    );
                }
            }
            FeedbackKind::TechnicalProblem => {
                if is_blank(&submission.problem_description) {
                    errors.insert(
                        "problemDescription".to_string(),
                        FieldError {
                            text: "Describe the problem you encountered".to_string(),
                        },
                    );
                }
            }
        }

        if !errors.is_empty() {
            return Err(SubmitFeedbackError::Validation(errors));
        }

        let record = Feedback {
            id: FeedbackId::new(),
            kind,
            satisfaction: submission.satisfaction,
            improvements: submission.improvements,
            visit_reason: submission.visit_reason,
            visit_reason_other: submission.visit_reason_other,
            contact_authority: submission.contact_authority,
            contact_authority_no_reason: submission.contact_authority_no_reason,
            problem_area: submission.problem_area,
            problem_area_page: submission.problem_area_page,
            problem_description: submission.problem_description,
            beta_survey_yes_no: submission.beta_survey_yes_no,
            beta_survey_email: submission.beta_survey_email,
            created_at: now,
        };

        self.repository.append(record.clone())?;
        Ok(record)
    }

    pub fn export(&self) -> Result<Vec<u8>, SubmitFeedbackError> {
        let records = self.repository.all()?;
        let mut buffer = Vec::new();
        export_csv(&records, &mut buffer).map_err(|err| {
            SubmitFeedbackError::Repository(RepositoryError::Unavailable(err.to_string()))
        })?;
        Ok(buffer)
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value
        .as_deref()
        .map_or(true, |text| text.trim().is_empty())
}
