use serde::Serialize;

use crate::slug::{is_valid_slug, slug_from_title};

/// Video count every tag starts with.
pub const INITIAL_AMOUNT_OF_VIDEOS: u32 = 0;

/// A tag as it is sent to the tags endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDraft {
    title: String,
    slug: String,
    amount_of_videos: u32,
}

impl TagDraft {
    pub fn from_title(title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = slug_from_title(&title);
        debug_assert!(is_valid_slug(&slug), "derived malformed slug {slug:?}");

        Self {
            title,
            slug,
            amount_of_videos: INITIAL_AMOUNT_OF_VIDEOS,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn amount_of_videos(&self) -> u32 {
        self.amount_of_videos
    }
}
