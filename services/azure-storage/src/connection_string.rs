use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::str::FromStr;

use azsas_core::utils::Redact;
use azsas_core::{Error, Result};
use log::debug;

use crate::constants::*;
use crate::{Credential, Service};

/// Splits an [Azure connection string][1] into its key/value pairs.
///
/// Segments are separated by `;` and split on their first `=`, so values may
/// contain `=` themselves (base64 account keys end with `==`). Empty segments
/// are skipped and whitespace around a segment is ignored. Keys are kept
/// case-sensitive; when a key repeats, its last value wins.
///
/// A segment without `=`, or with nothing before it, fails the whole parse
/// with [`azsas_core::ErrorKind::MalformedSegment`].
///
/// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
pub fn parse(conn_str: &str) -> Result<HashMap<String, String>> {
    let key_values = conn_str
        .split(';')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(Error::malformed_segment(format!(
                "invalid connection string segment {segment:?}, expected 'key=value' in {:?}",
                redacted(conn_str)
            ))),
        })
        .collect::<Result<HashMap<_, _>>>()?;

    debug!("parsed connection string with keys: {:?}", sorted_keys(&key_values));

    Ok(key_values)
}

/// Render `conn_str` with its secret values masked by [`Redact`].
fn redacted(conn_str: &str) -> String {
    conn_str
        .split(';')
        .map(|segment| match segment.split_once('=') {
            Some((key, value)) if [ACCOUNT_KEY, SHARED_ACCESS_SIGNATURE].contains(&key.trim()) => {
                format!("{key}={:?}", Redact::from(value))
            }
            _ => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join(";")
}

fn sorted_keys(key_values: &HashMap<String, String>) -> Vec<&str> {
    let mut keys: Vec<&str> = key_values.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}

/// A parsed connection string with typed accessors.
///
/// ```
/// use azsas_azure_storage::ConnectionString;
///
/// # fn main() -> azsas_core::Result<()> {
/// let cs: ConnectionString =
///     "DefaultEndpointsProtocol=https;AccountName=acct;AccountKey=a2V5;EndpointSuffix=core.windows.net"
///         .parse()?;
/// assert_eq!(cs.account_name(), Some("acct"));
/// assert_eq!(cs.account_key(), Some("a2V5"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionString {
    key_values: HashMap<String, String>,
}

impl ConnectionString {
    /// Parse a raw connection string, see [`parse`].
    pub fn parse(conn_str: &str) -> Result<Self> {
        Ok(Self {
            key_values: parse(conn_str)?,
        })
    }

    /// Get the value of `key`, matched case-sensitively.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.key_values.get(key).map(String::as_str)
    }

    /// The `AccountName` entry.
    pub fn account_name(&self) -> Option<&str> {
        self.get(ACCOUNT_NAME)
    }

    /// The `AccountKey` entry.
    pub fn account_key(&self) -> Option<&str> {
        self.get(ACCOUNT_KEY)
    }

    /// Borrow all parsed entries.
    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.key_values
    }

    /// Consume into all parsed entries.
    pub fn into_map(self) -> HashMap<String, String> {
        self.key_values
    }

    /// Returns `(AccountName, AccountKey)`, failing if either is missing.
    pub fn account_credential(&self) -> Result<(&str, &str)> {
        let account_name = self.account_name().ok_or_else(|| {
            Error::config_invalid(format!("connection string has no {ACCOUNT_NAME}"))
        })?;
        let account_key = self.account_key().ok_or_else(|| {
            Error::config_invalid(format!("connection string has no {ACCOUNT_KEY}"))
        })?;

        Ok((account_name, account_key))
    }

    /// The credential carried by this connection string.
    ///
    /// A `SharedAccessSignature` wins over `AccountName` + `AccountKey`.
    /// Returns `None` when neither is present; AAD style credentials are not
    /// passed through connection strings.
    pub fn credential(&self) -> Option<Credential> {
        if let Some(token) = self.get(SHARED_ACCESS_SIGNATURE) {
            return Some(Credential::with_sas_token(token));
        }

        match (self.account_name(), self.account_key()) {
            (Some(account_name), Some(account_key)) => {
                Some(Credential::with_shared_key(account_name, account_key))
            }
            _ => None,
        }
    }

    /// Resolve the endpoint of `service`.
    ///
    /// An explicit `<Service>Endpoint` entry is used as is. Otherwise the
    /// endpoint is built from `AccountName` and `EndpointSuffix`, with
    /// `DefaultEndpointsProtocol` defaulting to `https`. Returns `None` if
    /// there is not enough to build one.
    pub fn endpoint(&self, service: &Service) -> Result<Option<String>> {
        if let Some(endpoint) = service.endpoint_key().and_then(|key| self.get(key)) {
            return Ok(Some(endpoint.to_string()));
        }

        let (Some(account_name), Some(endpoint_suffix)) =
            (self.account_name(), self.get(ENDPOINT_SUFFIX))
        else {
            return Ok(None);
        };

        let protocol = self.get(DEFAULT_ENDPOINTS_PROTOCOL).unwrap_or("https");
        if protocol != "http" && protocol != "https" {
            return Err(Error::config_invalid(format!(
                "invalid {DEFAULT_ENDPOINTS_PROTOCOL}: {protocol}"
            )));
        }

        Ok(Some(format!(
            "{protocol}://{account_name}.{}.{endpoint_suffix}",
            service.endpoint_name()
        )))
    }

    /// Azurite settings when `UseDevelopmentStorage=true`.
    ///
    /// Only the blob service is emulated, other services get `None`.
    pub(crate) fn development_storage(&self, service: &Service) -> Option<DevelopmentStorage> {
        if service != &Service::Blob || self.get(USE_DEVELOPMENT_STORAGE) != Some("true") {
            return None;
        }

        let account_name = self
            .account_name()
            .unwrap_or(AZURITE_DEFAULT_STORAGE_ACCOUNT_NAME)
            .to_string();
        let account_key = self
            .account_key()
            .unwrap_or(AZURITE_DEFAULT_STORAGE_ACCOUNT_KEY)
            .to_string();
        let proxy_uri = self
            .get(DEVELOPMENT_STORAGE_PROXY_URI)
            .unwrap_or(AZURITE_DEFAULT_BLOB_URI);

        Some(DevelopmentStorage {
            endpoint: format!("{proxy_uri}/{account_name}"),
            account_name,
            account_key,
        })
    }
}

impl FromStr for ConnectionString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Debug for ConnectionString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for key in sorted_keys(&self.key_values) {
            let value = &self.key_values[key];
            if key == ACCOUNT_KEY || key == SHARED_ACCESS_SIGNATURE {
                map.entry(&key, &Redact::from(value));
            } else {
                map.entry(&key, value);
            }
        }
        map.finish()
    }
}

/// Development storage aka Azurite account settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DevelopmentStorage {
    pub account_name: String,
    pub account_key: String,
    pub endpoint: String,
}
