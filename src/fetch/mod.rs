mod metadata;

pub use metadata::MetadataClient;
