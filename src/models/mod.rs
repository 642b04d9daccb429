mod tag;

pub use tag::TagDraft;
