use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Keys understood in connection strings.
pub const ACCOUNT_NAME: &str = "AccountName";
pub const ACCOUNT_KEY: &str = "AccountKey";
pub const SHARED_ACCESS_SIGNATURE: &str = "SharedAccessSignature";
pub const DEFAULT_ENDPOINTS_PROTOCOL: &str = "DefaultEndpointsProtocol";
pub const ENDPOINT_SUFFIX: &str = "EndpointSuffix";
pub const USE_DEVELOPMENT_STORAGE: &str = "UseDevelopmentStorage";
pub const DEVELOPMENT_STORAGE_PROXY_URI: &str = "DevelopmentStorageProxyUri";

// Azurite defaults, published in the emulator documentation.
pub const AZURITE_DEFAULT_STORAGE_ACCOUNT_NAME: &str = "devstoreaccount1";
pub const AZURITE_DEFAULT_STORAGE_ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
pub const AZURITE_DEFAULT_BLOB_URI: &str = "http://127.0.0.1:10000";

// Env values used to configure the account.
/// Connection string for the blob service, read before the variables below.
pub const AZURE_STORAGE_CONNECTION_STRING: &str = "AZURE_STORAGE_CONNECTION_STRING";
/// Account name, preferred over [`AZURE_STORAGE_ACCOUNT_NAME`].
pub const AZBLOB_ACCOUNT_NAME: &str = "AZBLOB_ACCOUNT_NAME";
/// Account name, used when [`AZBLOB_ACCOUNT_NAME`] is unset.
pub const AZURE_STORAGE_ACCOUNT_NAME: &str = "AZURE_STORAGE_ACCOUNT_NAME";
/// Base64 account key, preferred over [`AZURE_STORAGE_ACCOUNT_KEY`].
pub const AZBLOB_ACCOUNT_KEY: &str = "AZBLOB_ACCOUNT_KEY";
/// Base64 account key, used when [`AZBLOB_ACCOUNT_KEY`] is unset.
pub const AZURE_STORAGE_ACCOUNT_KEY: &str = "AZURE_STORAGE_ACCOUNT_KEY";
/// Pre-computed SAS token, used instead of the account key when set.
pub const AZURE_STORAGE_SAS_TOKEN: &str = "AZURE_STORAGE_SAS_TOKEN";
/// Service endpoint URL.
pub const AZBLOB_ENDPOINT: &str = "AZBLOB_ENDPOINT";

/// Escapes every SAS query value except unreserved characters and `:`.
///
/// `/`, `+` and `=` show up in base64 signatures, `,` in protocol lists.
/// `:` is left alone so timestamps read as `2020-03-20T04:00:00Z`.
pub static AZURE_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b':');
