use std::fmt::{Debug, Formatter};

use azsas_core::utils::Redact;
use azsas_core::{Env, Result};

use crate::constants::*;
use crate::{ConnectionString, Credential, Service};

/// Config carries the account settings needed to compute SAS tokens.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// `account_name` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZBLOB_ACCOUNT_NAME`] or [`AZURE_STORAGE_ACCOUNT_NAME`]
    /// - connection string entry `AccountName`
    pub account_name: Option<String>,
    /// `account_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZBLOB_ACCOUNT_KEY`] or [`AZURE_STORAGE_ACCOUNT_KEY`]
    /// - connection string entry `AccountKey`
    pub account_key: Option<String>,
    /// `sas_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZURE_STORAGE_SAS_TOKEN`]
    /// - connection string entry `SharedAccessSignature`
    pub sas_token: Option<String>,
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZBLOB_ENDPOINT`]
    /// - connection string, see [`ConnectionString::endpoint`]
    pub endpoint: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("account_name", &self.account_name)
            .field("account_key", &Redact::from(&self.account_key))
            .field("sas_token", &Redact::from(&self.sas_token))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// [`AZURE_STORAGE_CONNECTION_STRING`] is parsed first, for the blob
    /// service. Individual variables override what it provides, and values
    /// already set on this config are only replaced by values found in env.
    pub fn from_env(mut self, env: &impl Env) -> Result<Self> {
        if let Some(v) = env.var(AZURE_STORAGE_CONNECTION_STRING) {
            let parsed = Self::try_from_connection_string(&v, &Service::Blob)?;
            self.account_name = parsed.account_name.or(self.account_name);
            self.account_key = parsed.account_key.or(self.account_key);
            self.sas_token = parsed.sas_token.or(self.sas_token);
            self.endpoint = parsed.endpoint.or(self.endpoint);
        }

        if let Some(v) = env
            .var(AZBLOB_ACCOUNT_NAME)
            .or_else(|| env.var(AZURE_STORAGE_ACCOUNT_NAME))
        {
            self.account_name = Some(v);
        }

        if let Some(v) = env
            .var(AZBLOB_ACCOUNT_KEY)
            .or_else(|| env.var(AZURE_STORAGE_ACCOUNT_KEY))
        {
            self.account_key = Some(v);
        }

        if let Some(v) = env.var(AZURE_STORAGE_SAS_TOKEN) {
            self.sas_token = Some(v);
        }

        if let Some(v) = env.var(AZBLOB_ENDPOINT) {
            self.endpoint = Some(v);
        }

        Ok(self)
    }

    /// Parses an [Azure connection string][1] into a configuration object.
    ///
    /// The connection string doesn't have to specify all parameters, they
    /// can still be set on the returned object.
    ///
    /// The service decides which endpoint is picked up. With
    /// `UseDevelopmentStorage=true` the blob service resolves to the local
    /// Azurite emulator account.
    ///
    /// ```txt
    /// DefaultEndpointsProtocol=https;
    /// AccountName=mystorageaccount;
    /// AccountKey=Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==;
    /// EndpointSuffix=core.windows.net
    /// ```
    ///
    /// [1]: https://learn.microsoft.com/en-us/azure/storage/common/storage-configure-connection-string
    pub fn try_from_connection_string(conn_str: &str, service: &Service) -> Result<Self> {
        let conn = ConnectionString::parse(conn_str)?;

        if let Some(dev) = conn.development_storage(service) {
            return Ok(Config {
                account_name: Some(dev.account_name),
                account_key: Some(dev.account_key),
                endpoint: Some(dev.endpoint),
                ..Default::default()
            });
        }

        let mut config = Config {
            account_name: conn.account_name().map(str::to_string),
            endpoint: conn.endpoint(service)?,
            ..Default::default()
        };

        match conn.credential() {
            Some(Credential::SasToken { token }) => config.sas_token = Some(token),
            Some(Credential::SharedKey {
                account_name,
                account_key,
            }) => {
                config.account_name = Some(account_name);
                config.account_key = Some(account_key);
            }
            None => {}
        }

        Ok(config)
    }

    /// The credential this config carries, preferring a SAS token over the
    /// shared key.
    pub fn credential(&self) -> Option<Credential> {
        if let Some(token) = self.sas_token.as_deref().filter(|v| !v.is_empty()) {
            return Some(Credential::with_sas_token(token));
        }

        match (self.account_name.as_deref(), self.account_key.as_deref()) {
            (Some(account_name), Some(account_key)) => {
                Some(Credential::with_shared_key(account_name, account_key))
                    .filter(Credential::is_valid)
            }
            _ => None,
        }
    }
}
