use anyhow::Result;
use tracing::{error, info, warn};

use crate::errors::{FormError, FormResult};
use crate::models::TagDraft;
use crate::services::TagSink;
use crate::slug::slug_from_title;
use crate::state::SubmitState;

pub const TITLE_LABEL: &str = "Tag name";
pub const SLUG_LABEL: &str = "Slug";
pub const CANCEL_LABEL: &str = "Cancel";
pub const SUBMIT_LABEL: &str = "Salvar";

pub const MIN_TITLE_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(TagDraft),
    Failed { draft: TagDraft, reason: String },
}

impl SubmitOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }

    pub fn draft(&self) -> &TagDraft {
        match self {
            SubmitOutcome::Created(draft) | SubmitOutcome::Failed { draft, .. } => draft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Closed,
}

/// The create-tag dialog: one title field, a read-only slug derived from it
/// and a submit action guarded by the submission state.
#[derive(Debug, Default)]
pub struct CreateTagForm {
    title: String,
    slug: String,
    state: SubmitState,
    error: Option<FormError>,
}

impl CreateTagForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting()
    }

    /// Inline error for the title field from the last submit attempt.
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.slug = if self.title.is_empty() {
            String::new()
        } else {
            slug_from_title(&self.title)
        };
    }

    pub fn validate(&self) -> FormResult<()> {
        // Counted in UTF-16 code units, the way browsers measure input length.
        if self.title.encode_utf16().count() < MIN_TITLE_LEN {
            return Err(FormError::title_too_short());
        }

        Ok(())
    }

    /// Validates the title and moves the form into `Submitting`.
    ///
    /// The returned draft is what must be sent; the form stays `Idle` when
    /// validation fails.
    pub fn begin_submit(&mut self) -> FormResult<TagDraft> {
        if self.state.is_submitting() {
            warn!(title = %self.title, "submit ignored while a request is in flight");
            return Err(FormError::AlreadySubmitting);
        }

        if let Err(err) = self.validate() {
            self.error = Some(err.clone());
            return Err(err);
        }

        self.error = None;
        self.state = SubmitState::Submitting;

        Ok(TagDraft::from_title(self.title.clone()))
    }

    /// Settles an in-flight submission. Any result returns the form to `Idle`.
    pub fn finish_submit(&mut self, draft: TagDraft, result: Result<()>) -> SubmitOutcome {
        self.state = SubmitState::Idle;

        match result {
            Ok(()) => {
                info!(slug = %draft.slug(), "tag submitted");
                SubmitOutcome::Created(draft)
            }
            Err(err) => {
                error!(error = ?err, slug = %draft.slug(), "tag submission failed");
                SubmitOutcome::Failed {
                    draft,
                    reason: format!("{err:#}"),
                }
            }
        }
    }

    pub async fn submit<S: TagSink>(&mut self, sink: &S) -> FormResult<SubmitOutcome> {
        let draft = self.begin_submit()?;
        let result = sink.create_tag(&draft).await;
        Ok(self.finish_submit(draft, result))
    }

    pub fn cancel(&mut self) -> FormEvent {
        self.set_title(String::new());
        self.error = None;
        FormEvent::Closed
    }
}
