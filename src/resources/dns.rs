//! DNS domains and the records nested under them.

use super::require_id;
use crate::client::Client;
use crate::envelope;
use crate::types::{CivoError, CivoResult, SimpleResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A domain registered with the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DnsDomain {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub name: String,
}

/// Write-model for domain create/update; the server assigns everything else
#[derive(Debug, Clone, Serialize)]
pub struct DnsDomainConfig {
    pub name: String,
}

/// The allowed record types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DnsRecordType {
    #[default]
    A,
    Cname,
    Mx,
    Txt,
}

/// A DNS record, a value snapshot rather than a live handle
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DnsRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub domain_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, rename = "type")]
    pub record_type: DnsRecordType,
    #[serde(default)]
    pub priority: u32,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Write-model for record create/update.
///
/// None of the wire fields are mandatory server-side; absent values take
/// server defaults. `domain_id` only selects the URL and is never
/// transmitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DnsRecordConfig {
    #[serde(skip_serializing)]
    pub domain_id: String,
    #[serde(rename = "type")]
    pub record_type: DnsRecordType,
    pub name: String,
    pub value: String,
    pub priority: u32,
    pub ttl: u32,
}

/// Accessor for the DNS resource family
pub struct DnsClient {
    client: Client,
}

impl DnsClient {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// List all domains owned by the calling account
    pub async fn list_domains(&self) -> CivoResult<Vec<DnsDomain>> {
        let body = self.client.send_get_request("/v2/dns").await?;
        envelope::decode_list(&body)
    }

    /// Register a new domain
    pub async fn create_domain(&self, name: &str) -> CivoResult<DnsDomain> {
        let config = DnsDomainConfig { name: name.to_string() };
        let body = self.client.send_post_request("/v2/dns", &config).await?;
        envelope::decode_item(&body)
    }

    /// Find the domain matching `name`.
    ///
    /// The API offers no server-side filter, so this lists and scans, O(n) in
    /// the number of domains. On duplicate names the first match in server
    /// list order wins.
    pub async fn get_domain(&self, name: &str) -> CivoResult<DnsDomain> {
        let domains = self.list_domains().await?;
        domains
            .into_iter()
            .find(|d| d.name == name)
            .ok_or_else(|| CivoError::not_found("DNS domain", name))
    }

    /// Rename an existing domain
    pub async fn update_domain(&self, domain: &DnsDomain, name: &str) -> CivoResult<DnsDomain> {
        require_id(&domain.id, "domain.id")?;

        let config = DnsDomainConfig { name: name.to_string() };
        let body = self
            .client
            .send_put_request(&format!("/v2/dns/{}", domain.id), &config)
            .await?;
        envelope::decode_item(&body)
    }

    /// Delete a domain
    pub async fn delete_domain(&self, domain: &DnsDomain) -> CivoResult<SimpleResponse> {
        require_id(&domain.id, "domain.id")?;

        let body = self
            .client
            .send_delete_request(&format!("/v2/dns/{}", domain.id))
            .await?;
        self.client.decode_simple_response(&body)
    }

    /// Create a record under the domain named by `config.domain_id`
    pub async fn create_record(&self, config: &DnsRecordConfig) -> CivoResult<DnsRecord> {
        require_id(&config.domain_id, "config.domain_id")?;

        let body = self
            .client
            .send_post_request(&format!("/v2/dns/{}/records", config.domain_id), config)
            .await?;
        envelope::decode_item(&body)
    }

    /// List all records under a domain
    pub async fn list_records(&self, domain_id: &str) -> CivoResult<Vec<DnsRecord>> {
        require_id(domain_id, "domain_id")?;

        let body = self
            .client
            .send_get_request(&format!("/v2/dns/{}/records", domain_id))
            .await?;
        envelope::decode_list(&body)
    }

    /// Find the record matching `name` under a domain.
    ///
    /// Same list-and-scan contract as [`get_domain`](Self::get_domain).
    pub async fn get_record(&self, domain_id: &str, name: &str) -> CivoResult<DnsRecord> {
        let records = self.list_records(domain_id).await?;
        records
            .into_iter()
            .find(|r| r.name == name)
            .ok_or_else(|| CivoError::not_found("DNS record", name))
    }

    /// Update a record in place
    pub async fn update_record(
        &self,
        config: &DnsRecordConfig,
        record: &DnsRecord,
    ) -> CivoResult<DnsRecord> {
        require_id(&record.domain_id, "record.domain_id")?;
        require_id(&record.id, "record.id")?;

        let body = self
            .client
            .send_put_request(
                &format!("/v2/dns/{}/records/{}", record.domain_id, record.id),
                config,
            )
            .await?;
        envelope::decode_item(&body)
    }

    /// Delete a record
    pub async fn delete_record(&self, record: &DnsRecord) -> CivoResult<SimpleResponse> {
        require_id(&record.id, "record.id")?;
        require_id(&record.domain_id, "record.domain_id")?;

        let body = self
            .client
            .send_delete_request(&format!("/v2/dns/{}/records/{}", record.domain_id, record.id))
            .await?;
        self.client.decode_simple_response(&body)
    }
}
