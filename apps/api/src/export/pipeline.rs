//! Submission pipeline: one request from raw resume text to rendered files.
//!
//! Flow: reject empty input → classify (blocking pool, optional timeout) →
//!       dispatch for the requested kind (blocking pool) → outcome.
//!
//! Every value created here is request-scoped. The predictor is the only shared state.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::classify::{CategoryPredictor, Prediction};
use crate::config::Config;
use crate::errors::AppError;
use crate::export::dispatcher::{dispatch, ExportBundle, ExportOptions};
use crate::render::a4_page_geometry;
use crate::synthesis::DocumentKind;

/// What the user asked for. `PredictCategory` stops after classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionAction {
    PredictCategory,
    GenerateResume,
    GenerateCoverLetter,
    GeneratePortfolio,
}

impl SubmissionAction {
    pub fn document_kind(self) -> Option<DocumentKind> {
        match self {
            SubmissionAction::PredictCategory => None,
            SubmissionAction::GenerateResume => Some(DocumentKind::Resume),
            SubmissionAction::GenerateCoverLetter => Some(DocumentKind::CoverLetter),
            SubmissionAction::GeneratePortfolio => Some(DocumentKind::Portfolio),
        }
    }
}

/// Request body shared by the submit and download endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Submission {
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    pub action: SubmissionAction,
}

#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub prediction: Prediction,
    /// `None` for `PredictCategory`.
    pub bundle: Option<ExportBundle>,
}

/// Per-process pipeline settings derived from `Config`.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    pub classify_timeout: Option<Duration>,
    pub export: ExportOptions,
}

impl PipelineSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            classify_timeout: config.classify_timeout,
            export: ExportOptions {
                page: a4_page_geometry(),
                escape_html: config.escape_portfolio_html,
            },
        }
    }
}

/// Runs one submission end to end.
#[tracing::instrument(
    name = "submission",
    skip_all,
    fields(request_id = %Uuid::new_v4(), action = ?submission.action)
)]
pub async fn run_submission(
    predictor: &CategoryPredictor,
    settings: &PipelineSettings,
    submission: Submission,
) -> Result<SubmissionOutcome, AppError> {
    if submission.resume_text.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    let prediction = classify(predictor, settings.classify_timeout, &submission.resume_text).await?;
    debug!("Normalized input: {} bytes", prediction.normalized.len());
    info!("Predicted job category: {}", prediction.label);

    let Some(kind) = submission.action.document_kind() else {
        return Ok(SubmissionOutcome {
            prediction,
            bundle: None,
        });
    };

    let label = prediction.label.clone();
    let options = settings.export.clone();
    let Submission {
        resume_text,
        job_description,
        ..
    } = submission;

    let bundle = tokio::task::spawn_blocking(move || {
        dispatch(kind, &label, &resume_text, &job_description, &options)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Export task failed: {e}")))?;

    Ok(SubmissionOutcome {
        prediction,
        bundle: Some(bundle),
    })
}

/// Classifies on the blocking pool. With a timeout, expiry abandons the wait and fails
/// only this request; the model call itself is not interrupted.
async fn classify(
    predictor: &CategoryPredictor,
    timeout: Option<Duration>,
    raw_text: &str,
) -> Result<Prediction, AppError> {
    let predictor = predictor.clone();
    let raw_text = raw_text.to_string();
    let task = tokio::task::spawn_blocking(move || predictor.predict(&raw_text));

    let joined = match timeout {
        Some(limit) => tokio::time::timeout(limit, task)
            .await
            .map_err(|_| AppError::ClassificationTimeout(limit))?,
        None => task.await,
    };

    let prediction = joined
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Classification task failed: {e}")))??;
    Ok(prediction)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::classify::predictor::testing::{predictor_with, FixedClassifier};
    use crate::classify::{Classifier, ClassifyError, FeatureVector, PredictedLabel};

    fn settings() -> PipelineSettings {
        PipelineSettings {
            classify_timeout: None,
            export: ExportOptions {
                page: a4_page_geometry(),
                escape_html: true,
            },
        }
    }

    fn submission(text: &str, action: SubmissionAction) -> Submission {
        Submission {
            resume_text: text.to_string(),
            job_description: String::new(),
            action,
        }
    }

    const RAW: &str = "Experienced Python developer with 5 years in data science.";

    #[tokio::test]
    async fn test_resume_scenario_end_to_end() {
        let (predictor, vectorizer, classifier) =
            predictor_with(FixedClassifier::returning("Data Science"));

        let outcome = run_submission(
            &predictor,
            &settings(),
            submission(RAW, SubmissionAction::GenerateResume),
        )
        .await
        .unwrap();

        assert_eq!(*classifier.calls.lock().unwrap(), 1);
        assert_eq!(
            *vectorizer.seen.lock().unwrap(),
            vec!["experienced python developer with years in data science".to_string()]
        );

        let bundle = outcome.bundle.unwrap();
        let names: Vec<_> = bundle.artifacts.iter().map(|a| a.filename.as_str()).collect();
        assert_eq!(names, vec!["resume.docx", "resume.pdf"]);
        assert!(bundle.artifacts.iter().all(|a| !a.bytes.is_empty()));
        assert!(bundle.document.text.contains("Target Role: Data Science"));
    }

    #[tokio::test]
    async fn test_portfolio_scenario_end_to_end() {
        let (predictor, _, _) = predictor_with(FixedClassifier::returning("Web Designing"));

        let outcome = run_submission(
            &predictor,
            &settings(),
            submission(RAW, SubmissionAction::GeneratePortfolio),
        )
        .await
        .unwrap();

        let bundle = outcome.bundle.unwrap();
        assert_eq!(bundle.artifacts.len(), 3);
        assert!(bundle.document.text.starts_with("PORTFOLIO PROFILE"));

        let html = bundle.artifact("portfolio.html").unwrap();
        assert!(std::str::from_utf8(&html.bytes).unwrap().contains(RAW));
    }

    #[tokio::test]
    async fn test_predict_only_skips_export() {
        let (predictor, _, classifier) = predictor_with(FixedClassifier::returning("HR"));

        let outcome = run_submission(
            &predictor,
            &settings(),
            submission(RAW, SubmissionAction::PredictCategory),
        )
        .await
        .unwrap();

        assert_eq!(outcome.prediction.label.as_str(), "HR");
        assert!(outcome.bundle.is_none());
        assert_eq!(*classifier.calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_whitespace_input_is_rejected_before_classification() {
        let (predictor, vectorizer, classifier) = predictor_with(FixedClassifier::returning("HR"));

        let err = run_submission(
            &predictor,
            &settings(),
            submission(" \n\t ", SubmissionAction::GenerateResume),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::EmptyInput));
        assert_eq!(*classifier.calls.lock().unwrap(), 0);
        assert!(vectorizer.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_classifier_failure_fails_the_request() {
        let (predictor, _, _) = predictor_with(FixedClassifier::failing());

        let err = run_submission(
            &predictor,
            &settings(),
            submission(RAW, SubmissionAction::GenerateCoverLetter),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Classification(ClassifyError::Backend(_))));
    }

    struct SlowClassifier;

    impl Classifier for SlowClassifier {
        fn classify(&self, _features: &FeatureVector) -> Result<PredictedLabel, ClassifyError> {
            std::thread::sleep(Duration::from_millis(300));
            Ok(PredictedLabel::new("too late"))
        }
    }

    #[tokio::test]
    async fn test_classification_timeout_is_reported() {
        let vectorizer = Arc::new(crate::classify::predictor::testing::RecordingVectorizer::default());
        let predictor = CategoryPredictor::new(vectorizer, Arc::new(SlowClassifier));
        let settings = PipelineSettings {
            classify_timeout: Some(Duration::from_millis(20)),
            ..settings()
        };

        let err = run_submission(
            &predictor,
            &settings,
            submission(RAW, SubmissionAction::PredictCategory),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::ClassificationTimeout(d) if d == Duration::from_millis(20)));
    }

    #[test]
    fn test_submission_deserializes_without_job_description() {
        let json = r#"{"resume_text": "cv", "action": "generate_cover_letter"}"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.job_description, "");
        assert_eq!(
            submission.action.document_kind(),
            Some(DocumentKind::CoverLetter)
        );
    }

    #[test]
    fn test_submission_rejects_unknown_action() {
        let json = r#"{"resume_text": "cv", "action": "generate_haiku"}"#;
        assert!(serde_json::from_str::<Submission>(json).is_err());
    }
}
