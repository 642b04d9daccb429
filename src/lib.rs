pub mod config;
pub mod errors;
pub mod form;
pub mod models;
pub mod services;
pub mod slug;
pub mod state;

pub use config::ApiConfig;
pub use errors::{FormError, FormResult};
pub use form::{CreateTagForm, FormEvent, SubmitOutcome};
pub use models::TagDraft;
pub use services::{TagSink, TagsApiClient};
pub use slug::slug_from_title;
pub use state::SubmitState;
