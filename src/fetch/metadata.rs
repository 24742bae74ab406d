use log::{debug, warn};
use reqwest::{StatusCode, Url};

use crate::error::{Error, Result};
use crate::types::{MetadataRecord, ProjectMap};

const USER_AGENT: &str = concat!("oss-fuzz-stats/", env!("CARGO_PKG_VERSION"));
const CONTENTS_PATH: [&str; 5] = ["repos", "google", "oss-fuzz", "contents", "projects"];

/// Looks up OSS-Fuzz project descriptors through the GitHub contents API.
#[derive(Debug, Clone)]
pub struct MetadataClient {
    client: reqwest::Client,
    base_url: Url,
}

impl MetadataClient {
    /// Create a client against the given API base URL
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = base_url.as_ref();
        let parsed = Url::parse(base_url)
            .map_err(|e| Error::InvalidApiUrl(format!("{}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(Error::InvalidApiUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// URL of the contents listing for one project.
    ///
    /// The project id is a single percent-encoded path segment, so `/`, `?`
    /// and `#` in an id can never reach another project's listing.
    pub fn project_url(&self, project: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidApiUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(CONTENTS_PATH)
            .push(project);
        Ok(url)
    }

    /// Fetch the metadata record for a single project.
    ///
    /// Any non-200 status yields [`MetadataRecord::NotFound`]. Only transport
    /// failures, or a 200 whose body is not JSON, are returned as errors.
    pub async fn fetch_one(&self, project: &str) -> Result<MetadataRecord> {
        let url = self.project_url(project)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!("metadata lookup for '{}' returned {}", project, status);
            return Ok(MetadataRecord::not_found());
        }

        let body: serde_json::Value = response.json().await?;
        Ok(MetadataRecord::Found(body))
    }

    /// Fetch metadata for every project, one request after another
    pub async fn fetch_project_metadata(
        &self,
        projects: &[String],
    ) -> Result<ProjectMap<MetadataRecord>> {
        let mut metadata = ProjectMap::new();
        for project in projects {
            let record = self.fetch_one(project).await?;
            metadata.insert(project.clone(), record);
        }
        Ok(metadata)
    }
}
