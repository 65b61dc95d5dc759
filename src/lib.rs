//! # civo-rs: A typed Rust client for the Civo cloud API
//!
//! This SDK provides a typed interface to Civo's HTTP/JSON control plane,
//! with resource accessors for DNS domains/records and applications built on
//! a single shared transport and response-decoding layer.
//!
//! ## Key Features
//!
//! - One transport layer handling authentication, request construction and
//!   error classification for every resource family
//! - Consistent envelope decoding: bare resources, sequences, paginated
//!   collections and `SimpleResponse` action outcomes
//! - A pluggable [`Transport`] seam so accessors can be tested without a
//!   network
//! - Secure token handling with memory zeroing and redacted debug output
//!
//! ## Basic Usage
//!
//! ```no_run
//! use civo_rs::from_env;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client from the CIVO_TOKEN environment variable
//!     let civo = from_env()?;
//!
//!     // List every DNS domain on the account
//!     for domain in civo.dns().list_domains().await? {
//!         println!("{} ({})", domain.name, domain.id);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod envelope;
pub mod resources;
pub mod types;

// Re-export core components
pub use client::{ApiRequest, Client, ReqwestTransport, Transport};
pub use types::{
    sanitize_error_message, CivoError, CivoResult, PaginatedResponse, SecureToken, SimpleResponse,
};

// Re-export resource accessors and models
pub use resources::{
    Application, ApplicationConfig, ApplicationsClient, DnsClient, DnsDomain, DnsRecord,
    DnsRecordConfig, DnsRecordType, ProcessInfo,
};

pub mod prelude {
    //! Convenient imports for commonly used types and functions
    pub use crate::{
        from_env, Client, CivoError, CivoResult, PaginatedResponse, SimpleResponse, Transport,
    };
    pub use crate::resources::{
        Application, ApplicationConfig, DnsDomain, DnsRecord, DnsRecordConfig, DnsRecordType,
    };
}

// Entry point functions
pub fn new_client(token: impl Into<String>) -> Client {
    Client::new(token)
}

/// Build a client from the `CIVO_TOKEN` environment variable, honoring an
/// optional `CIVO_API_URL` base-URL override.
pub fn from_env() -> CivoResult<Client> {
    match std::env::var("CIVO_TOKEN") {
        Ok(token) => {
            let client = Client::new(token);
            Ok(match std::env::var("CIVO_API_URL") {
                Ok(url) => client.with_base_url(url),
                Err(_) => client,
            })
        }
        Err(_) => Err(CivoError::MissingToken),
    }
}
