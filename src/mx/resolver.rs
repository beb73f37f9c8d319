use std::future::Future;

use trust_dns_resolver::{TokioAsyncResolver, error::ResolveError};

use super::{Error, MxRecord, MxStatus};

/// Looks up MX records for `domain` using the system resolver.
///
/// The domain is normalized via IDNA before querying DNS. The resulting
/// [`MxStatus`] contains the sorted list of records (ascending preference).
pub async fn check_mx(domain: &str) -> Result<MxStatus, Error> {
    let ascii = normalize_domain(domain)?;
    let resolver = TokioAsyncResolver::tokio_from_system_conf().map_err(Error::resolver_init)?;
    resolve_with(&resolver, &ascii).await
}

pub(crate) async fn resolve_with<R>(resolver: &R, ascii_domain: &str) -> Result<MxStatus, Error>
where
    R: LookupMx,
{
    let mut records = resolver.lookup_mx(ascii_domain).await.map_err(Error::lookup)?;

    records.sort();
    records.dedup();

    if records.is_empty() {
        Ok(MxStatus::NoRecords)
    } else {
        Ok(MxStatus::Records(records))
    }
}

pub(crate) fn normalize_domain(domain: &str) -> Result<String, Error> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDomain);
    }
    idna::domain_to_ascii(trimmed).map_err(Error::idna)
}

pub(crate) fn normalize_exchange(exchange: String) -> String {
    let trimmed = exchange.trim_end_matches('.');
    trimmed.to_ascii_lowercase()
}

/// MX lookup seam. Implemented for the live tokio resolver and, in tests,
/// for a scripted stub.
pub trait LookupMx {
    fn lookup_mx(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<Vec<MxRecord>, ResolveError>> + Send;
}

impl LookupMx for TokioAsyncResolver {
    fn lookup_mx(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<Vec<MxRecord>, ResolveError>> + Send {
        async move {
            let lookup = self.mx_lookup(domain).await?;
            let mut records = Vec::new();
            for mx in lookup.iter() {
                let exchange = normalize_exchange(mx.exchange().to_utf8());
                records.push(MxRecord::new(mx.preference(), exchange));
            }
            Ok(records)
        }
    }
}

#[cfg(test)]
impl LookupMx for crate::mx::tests::StubResolver {
    fn lookup_mx(
        &self,
        domain: &str,
    ) -> impl Future<Output = Result<Vec<MxRecord>, ResolveError>> + Send {
        std::future::ready((self.on_lookup)(domain))
    }
}
