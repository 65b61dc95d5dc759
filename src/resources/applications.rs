//! Applications, the one family whose list endpoint paginates.

use super::require_id;
use crate::client::Client;
use crate::envelope;
use crate::types::{CivoError, CivoResult, PaginatedResponse, SimpleResponse};
use serde::{Deserialize, Serialize};

/// Process layout of an application; camelCase on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProcessInfo {
    #[serde(default, rename = "processType")]
    pub process_type: String,
    #[serde(default, rename = "processCount")]
    pub process_count: i32,
}

/// An application deployed on the platform
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Application {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub network_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub process_info: Vec<ProcessInfo>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub ssh_key_ids: Vec<String>,
}

/// Write-model for application create/update; optional fields take server
/// defaults and are left off the wire entirely
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicationConfig {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ssh_key_ids: Vec<String>,
}

/// Accessor for the applications resource family
pub struct ApplicationsClient {
    client: Client,
}

impl ApplicationsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List applications, one page per call.
    ///
    /// Walking further pages is the caller's business; nothing here loops.
    pub async fn list(&self) -> CivoResult<PaginatedResponse<Application>> {
        let body = self.client.send_get_request("/v2/applications").await?;
        envelope::decode_paginated(&body)
    }

    /// Deploy a new application
    pub async fn create(&self, config: &ApplicationConfig) -> CivoResult<Application> {
        let body = self
            .client
            .send_post_request("/v2/applications", config)
            .await?;
        envelope::decode_item(&body)
    }

    /// Find the application matching `name` on the first page, first match in
    /// server list order
    pub async fn get(&self, name: &str) -> CivoResult<Application> {
        let page = self.list().await?;
        page.items
            .into_iter()
            .find(|a| a.name == name)
            .ok_or_else(|| CivoError::not_found("application", name))
    }

    /// Update an existing application
    pub async fn update(&self, id: &str, config: &ApplicationConfig) -> CivoResult<Application> {
        require_id(id, "id")?;

        let body = self
            .client
            .send_put_request(&format!("/v2/applications/{}", id), config)
            .await?;
        envelope::decode_item(&body)
    }

    /// Delete an application
    pub async fn delete(&self, id: &str) -> CivoResult<SimpleResponse> {
        require_id(id, "id")?;

        let body = self
            .client
            .send_delete_request(&format!("/v2/applications/{}", id))
            .await?;
        self.client.decode_simple_response(&body)
    }
}
