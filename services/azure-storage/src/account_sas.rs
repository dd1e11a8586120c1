//! Account SAS (Shared Access Signature) tokens.
//!
//! A token is computed in four stages, each exposed on its own:
//!
//! 1. [`decode_account_key`]: base64 decode the account key.
//! 2. [`string_to_sign`]: lay out the signed fields in their canonical order.
//! 3. [`sign`]: HMAC-SHA256 the string to sign with the decoded key.
//! 4. [`encode_query`]: percent-encode the query pairs into `?sv=...&sig=...`.
//!
//! [`compute`] runs all of them.
//!
//! Only the account key is validated. Permissions, services, resource types,
//! timestamps and protocol are opaque strings here: they are not checked
//! against their alphabets, and a start after the expiry is not rejected.
//! Callers that want those guarantees must check before signing.
//!
//! Reference: [Create an account SAS](https://learn.microsoft.com/en-us/rest/api/storageservices/create-account-sas)

use std::fmt::{self, Debug, Formatter};

use azsas_core::hash::{base64_decode, base64_hmac_sha256};
use azsas_core::time::{format_iso8601, DateTime};
use azsas_core::utils::Redact;
use azsas_core::{Error, Result};
use log::debug;
use percent_encoding::percent_encode;

use crate::constants::AZURE_QUERY_ENCODE_SET;
use crate::Credential;

/// Specifies the protocols permitted for a request made with the SAS.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SignedProtocol {
    /// Only HTTPS requests are permitted.
    Https,
    /// Both HTTPS and HTTP requests are permitted.
    HttpsAndHttp,
}

impl fmt::Display for SignedProtocol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SignedProtocol::Https => write!(f, "https"),
            SignedProtocol::HttpsAndHttp => write!(f, "https,http"),
        }
    }
}

/// The parameters an account SAS is signed over.
///
/// Empty strings mean "not set" for `start`, `signed_ip` and
/// `signed_protocol`. `expiry` and `signed_version` are required by the
/// service but not enforced here.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SasParameters {
    /// Storage account name.
    pub account_name: String,
    /// Storage account key, base64 encoded.
    pub account_key: String,
    /// Signed permissions such as `rwdlac`.
    pub permissions: String,
    /// Signed services such as `b` or `bqtf`.
    pub services: String,
    /// Signed resource types such as `sco`.
    pub resource_types: String,
    /// Start time, e.g. `2018-03-20T04:00:00Z`.
    pub start: String,
    /// Expiry time, e.g. `2020-03-20T04:00:00Z`.
    pub expiry: String,
    /// `https` or `https,http`.
    pub signed_protocol: String,
    /// An IP address or range allowed to use the token.
    pub signed_ip: String,
    /// The storage service version, which also fixes the string to sign layout.
    pub signed_version: String,
}

impl Debug for SasParameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SasParameters")
            .field("account_name", &self.account_name)
            .field("account_key", &Redact::from(&self.account_key))
            .field("permissions", &self.permissions)
            .field("services", &self.services)
            .field("resource_types", &self.resource_types)
            .field("start", &self.start)
            .field("expiry", &self.expiry)
            .field("signed_protocol", &self.signed_protocol)
            .field("signed_ip", &self.signed_ip)
            .field("signed_version", &self.signed_version)
            .finish()
    }
}

impl SasParameters {
    /// Create parameters for the given account, everything else empty.
    pub fn new(account_name: impl Into<String>, account_key: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            account_key: account_key.into(),
            ..Default::default()
        }
    }

    /// Create parameters from a shared key credential.
    ///
    /// A SAS token credential can't sign anything and is rejected.
    pub fn from_credential(cred: &Credential) -> Result<Self> {
        match cred {
            Credential::SharedKey {
                account_name,
                account_key,
            } => Ok(Self::new(account_name, account_key)),
            Credential::SasToken { .. } => Err(Error::config_invalid(
                "an account SAS requires a shared key credential",
            )),
        }
    }

    /// Set the signed permissions.
    pub fn with_permissions(mut self, permissions: impl Into<String>) -> Self {
        self.permissions = permissions.into();
        self
    }

    /// Set the signed services.
    pub fn with_services(mut self, services: impl Into<String>) -> Self {
        self.services = services.into();
        self
    }

    /// Set the signed resource types.
    pub fn with_resource_types(mut self, resource_types: impl Into<String>) -> Self {
        self.resource_types = resource_types.into();
        self
    }

    /// Set the start time as an already formatted string.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = start.into();
        self
    }

    /// Set the start time, formatted as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn with_start_time(self, start: DateTime) -> Self {
        self.with_start(format_iso8601(start))
    }

    /// Set the expiry time as an already formatted string.
    pub fn with_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.expiry = expiry.into();
        self
    }

    /// Set the expiry time, formatted as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn with_expiry_time(self, expiry: DateTime) -> Self {
        self.with_expiry(format_iso8601(expiry))
    }

    /// Set the signed protocol.
    pub fn with_protocol(mut self, protocol: SignedProtocol) -> Self {
        self.signed_protocol = protocol.to_string();
        self
    }

    /// Set the allowed IP address or range.
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.signed_ip = ip.into();
        self
    }

    /// Set the signed storage service version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.signed_version = version.into();
        self
    }

    /// Compute the SAS token, see [`compute`].
    pub fn token(&self) -> Result<String> {
        compute(self)
    }
}

/// Compute the account SAS token for `params`.
///
/// Returns the query string including its leading `?`, for example:
///
/// ```text
/// ?sv=2017-07-29&ss=b&srt=c&sp=rwac&se=2020-03-20T04:00:00Z&st=2018-03-20T04:00:00Z&spr=https&sig=...
/// ```
///
/// Fails with [`azsas_core::ErrorKind::InvalidKeyEncoding`] if the account
/// key is not valid base64, in which case nothing is signed.
pub fn compute(params: &SasParameters) -> Result<String> {
    let key = decode_account_key(&params.account_key)?;

    let string_to_sign = string_to_sign(params);
    debug!("string to sign: {}", &string_to_sign);

    let signature = sign(&key, &string_to_sign);

    Ok(encode_query(&query_pairs(params, &signature)))
}

/// Decode the base64 account key into the HMAC key bytes.
pub fn decode_account_key(account_key: &str) -> Result<Vec<u8>> {
    base64_decode(account_key).map_err(|e| {
        Error::invalid_key_encoding("account key is not valid base64").with_source(e)
    })
}

/// The signed fields in the order the service reconstructs them.
///
/// Values are raw: percent-encoding happens after signing.
pub fn signing_fields(params: &SasParameters) -> [(&'static str, &str); 9] {
    [
        ("accountname", params.account_name.as_str()),
        ("signedpermissions", params.permissions.as_str()),
        ("signedservice", params.services.as_str()),
        ("signedresourcetype", params.resource_types.as_str()),
        ("signedstart", params.start.as_str()),
        ("signedexpiry", params.expiry.as_str()),
        ("signedIP", params.signed_ip.as_str()),
        ("signedProtocol", params.signed_protocol.as_str()),
        ("signedversion", params.signed_version.as_str()),
    ]
}

/// Construct the string to sign.
///
/// ## Format
///
/// ```text
/// accountname + "\n" +
/// signedpermissions + "\n" +
/// signedservice + "\n" +
/// signedresourcetype + "\n" +
/// signedstart + "\n" +
/// signedexpiry + "\n" +
/// signedIP + "\n" +
/// signedProtocol + "\n" +
/// signedversion + "\n"
/// ```
///
/// Empty fields keep their line.
///
/// ## Reference
///
/// - [Construct the signature string](https://learn.microsoft.com/en-us/rest/api/storageservices/create-account-sas#construct-the-signature-string)
pub fn string_to_sign(params: &SasParameters) -> String {
    signing_fields(params)
        .iter()
        .fold(String::with_capacity(256), |mut s, (_, value)| {
            s.push_str(value);
            s.push('\n');
            s
        })
}

/// Sign `string_to_sign` with the decoded account key, returning base64.
pub fn sign(key: &[u8], string_to_sign: &str) -> String {
    base64_hmac_sha256(key, string_to_sign.as_bytes())
}

/// The query pairs of the token, not yet encoded.
///
/// `st`, `sip` and `spr` are left out when empty. `sig` is always last.
pub fn query_pairs<'a>(
    params: &'a SasParameters,
    signature: &'a str,
) -> Vec<(&'static str, &'a str)> {
    let mut pairs = vec![
        ("sv", params.signed_version.as_str()),
        ("ss", params.services.as_str()),
        ("srt", params.resource_types.as_str()),
        ("sp", params.permissions.as_str()),
        ("se", params.expiry.as_str()),
    ];

    for (key, value) in [
        ("st", params.start.as_str()),
        ("sip", params.signed_ip.as_str()),
        ("spr", params.signed_protocol.as_str()),
    ] {
        if !value.is_empty() {
            pairs.push((key, value));
        }
    }

    pairs.push(("sig", signature));
    pairs
}

/// Percent-encode every value and join the pairs into `?k=v&k=v`.
pub fn encode_query(pairs: &[(&str, &str)]) -> String {
    let query = pairs
        .iter()
        .map(|(k, v)| {
            format!(
                "{k}={}",
                percent_encode(v.as_bytes(), &AZURE_QUERY_ENCODE_SET)
            )
        })
        .collect::<Vec<String>>()
        .join("&");

    format!("?{query}")
}
