// src/dropbox.rs
//! Client for the Dropbox `files/list_folder` API.
//!
//! See <https://dropbox.github.io/dropbox-api-v2-explorer/#files_list_folder>.
use crate::error::{Error, RequestError, Result};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_API_URL: &str = "https://api.dropboxapi.com/2";

const LIST_FOLDER: &str = "files/list_folder";
const LIST_FOLDER_CONTINUE: &str = "files/list_folder/continue";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryTag {
    File,
    Folder,
    Deleted,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteEntry {
    #[serde(rename = ".tag", alias = "tag", default)]
    pub tag: EntryTag,
    pub name: String,
    #[serde(default)]
    pub path_lower: String,
    #[serde(default)]
    pub path_display: String,
}

#[derive(Debug, Deserialize)]
pub struct ListingPage {
    pub entries: Vec<RemoteEntry>,
    pub cursor: String,
    pub has_more: bool,
}

/// Extra toggles merged into the initial `list_folder` request.
/// Disabled toggles are left out of the payload.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ListingOptions {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub recursive: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub include_media_info: bool,
}

#[derive(Serialize)]
struct ListFolderArg<'a> {
    path: &'a str,
    #[serde(flatten)]
    options: &'a ListingOptions,
}

#[derive(Serialize)]
struct ListFolderContinueArg<'a> {
    cursor: &'a str,
}

pub struct DropboxClient {
    http: reqwest::Client,
    base_url: String,
}

impl DropboxClient {
    pub fn new(http: reqwest::Client) -> Self {
        Self::with_base_url(http, DEFAULT_API_URL)
    }

    pub fn with_base_url(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Lists every entry under `path`, following continuation cursors until
    /// the server reports no more pages. Any failed page aborts the listing.
    pub async fn list(
        &self,
        path: &str,
        token: &str,
        options: &ListingOptions,
    ) -> Result<Vec<RemoteEntry>> {
        let arg = ListFolderArg { path, options };
        let mut page: ListingPage = self.post(LIST_FOLDER, token, &arg).await?;
        debug!(
            "Fetched {} entries from {} (has_more: {})",
            page.entries.len(),
            path,
            page.has_more
        );

        let mut entries = std::mem::take(&mut page.entries);
        while page.has_more {
            let arg = ListFolderContinueArg {
                cursor: &page.cursor,
            };
            page = self.post(LIST_FOLDER_CONTINUE, token, &arg).await?;
            debug!(
                "Fetched {} more entries (has_more: {})",
                page.entries.len(),
                page.has_more
            );
            entries.append(&mut page.entries);
        }

        Ok(entries)
    }

    async fn post<B, T>(&self, endpoint: &str, token: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        let resp = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .json(body)
            .send()
            .await
            .map_err(RequestError::from)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            }
            .into());
        }

        let text = resp.text().await.map_err(RequestError::from)?;
        serde_json::from_str(&text).map_err(|source| Error::ResponseParse {
            endpoint: endpoint.to_string(),
            source,
        })
    }
}
