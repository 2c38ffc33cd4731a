use shared_types::{ApiConfig, ConfigError, PostDraft, SubmitError};

/// Outbound write of a single post draft.
///
/// Implementations perform exactly one request per call and never retry.
#[allow(async_fn_in_trait)]
pub trait PostsApi {
    async fn create_post(&self, draft: &PostDraft) -> Result<(), SubmitError>;
}

impl<A: PostsApi + ?Sized> PostsApi for &A {
    async fn create_post(&self, draft: &PostDraft) -> Result<(), SubmitError> {
        (**self).create_post(draft).await
    }
}

/// `PostsApi` backed by a JSON REST endpoint (e.g. json-server's `/posts`).
#[derive(Debug, Clone)]
pub struct HttpPostsApi {
    client: reqwest::Client,
    posts_url: reqwest::Url,
}

impl HttpPostsApi {
    pub fn new(posts_url: &str) -> Result<Self, ConfigError> {
        let parsed = reqwest::Url::parse(posts_url)
            .map_err(|e| ConfigError::new(format!("invalid posts_url {:?}: {}", posts_url, e)))?;

        Ok(Self {
            client: reqwest::Client::new(),
            posts_url: parsed,
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ConfigError> {
        Self::new(&config.posts_url)
    }

    pub fn posts_url(&self) -> &str {
        self.posts_url.as_str()
    }
}

impl PostsApi for HttpPostsApi {
    /// POST the draft as JSON. Any 2xx is success; the response body is not read.
    #[tracing::instrument(skip(self, draft), fields(url = %self.posts_url, title = %draft.title, views = ?draft.views))]
    async fn create_post(&self, draft: &PostDraft) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(self.posts_url.clone())
            .json(draft)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Posts request failed");
                SubmitError::transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "Posts endpoint rejected the draft");
            return Err(SubmitError::non_success(status.as_u16()));
        }

        tracing::info!(status = status.as_u16(), "Post created");
        Ok(())
    }
}
