//! Resource accessors.
//!
//! One module per resource family, each a thin layer over the client's
//! request surface and the envelope decoders. Accessors hold a clone of the
//! [`Client`](crate::Client) and compose operations out of a fixed URL
//! template plus one decode rule.

pub mod applications;
pub mod dns;

pub use applications::{Application, ApplicationConfig, ApplicationsClient, ProcessInfo};
pub use dns::{DnsClient, DnsDomain, DnsDomainConfig, DnsRecord, DnsRecordConfig, DnsRecordType};

use crate::types::{CivoError, CivoResult};

/// Fail fast on an empty identifier before any request is built.
pub(crate) fn require_id(value: &str, field: &str) -> CivoResult<()> {
    if value.trim().is_empty() {
        return Err(CivoError::validation(format!("{} must not be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_id_rejects_empty_and_blank() {
        assert!(matches!(
            require_id("", "domain_id"),
            Err(CivoError::Validation(_))
        ));
        assert!(matches!(
            require_id("   ", "domain_id"),
            Err(CivoError::Validation(_))
        ));
        assert!(require_id("d1", "domain_id").is_ok());
    }
}
