//! Azure Storage account SAS signer
//!
//! This crate computes [account SAS][1] tokens from an account name and key,
//! and reads account settings out of connection strings and the environment.
//!
//! # Example
//!
//! ```rust
//! use azsas_azure_storage::{ConnectionString, SasParameters, SignedProtocol};
//!
//! # fn main() -> azsas_core::Result<()> {
//! let conn: ConnectionString = "DefaultEndpointsProtocol=https;AccountName=azurermtestsa0;AccountKey=T0ZQouXBDpWud/PlTRHIJH2+VUK8D+fnedEynb9Mx638IYnsMUe4mv1fFjC7t0NayTfFAQJzPZuV1WHFKOzGdg==;EndpointSuffix=core.windows.net".parse()?;
//! let (account_name, account_key) = conn.account_credential()?;
//!
//! let token = SasParameters::new(account_name, account_key)
//!     .with_permissions("rwac")
//!     .with_services("b")
//!     .with_resource_types("c")
//!     .with_start("2018-03-20T04:00:00Z")
//!     .with_expiry("2020-03-20T04:00:00Z")
//!     .with_protocol(SignedProtocol::Https)
//!     .with_version("2017-07-29")
//!     .token()?;
//!
//! assert!(token.ends_with("&sig=SQigK%2FnFA4pv0F0oMLqr6DxUWV4vtFqWi6q3Mf7o9nY%3D"));
//! # Ok(())
//! # }
//! ```
//!
//! [1]: https://learn.microsoft.com/en-us/rest/api/storageservices/create-account-sas

mod constants;
pub use constants::{
    AZBLOB_ACCOUNT_KEY, AZBLOB_ACCOUNT_NAME, AZBLOB_ENDPOINT, AZURE_STORAGE_ACCOUNT_KEY,
    AZURE_STORAGE_ACCOUNT_NAME, AZURE_STORAGE_CONNECTION_STRING, AZURE_STORAGE_SAS_TOKEN,
};

pub mod account_sas;
pub use account_sas::{SasParameters, SignedProtocol};

pub mod connection_string;
pub use connection_string::ConnectionString;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod service;
pub use service::Service;
