mod tags_api;

pub use tags_api::{TagSink, TagsApiClient};
