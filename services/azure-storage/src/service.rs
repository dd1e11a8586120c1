/// The storage services an account exposes.
///
/// The service decides which endpoint a connection string resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Azure Blob Storage.
    Blob,
    /// Azure File Storage.
    File,
    /// Azure Table Storage.
    Table,
    /// Azure Queue Storage.
    Queue,
    /// Azure Data Lake Storage Gen2.
    Adls,
}

impl Service {
    /// The host label of this service, as in `{account}.{label}.core.windows.net`.
    pub fn endpoint_name(&self) -> &'static str {
        match self {
            Service::Blob => "blob",
            Service::File => "file",
            Service::Table => "table",
            Service::Queue => "queue",
            Service::Adls => "dfs",
        }
    }

    /// The connection string key that carries an explicit endpoint, if any.
    pub(crate) fn endpoint_key(&self) -> Option<&'static str> {
        match self {
            Service::Blob => Some("BlobEndpoint"),
            Service::File => Some("FileEndpoint"),
            Service::Table => Some("TableEndpoint"),
            Service::Queue => Some("QueueEndpoint"),
            // ADLS has no dedicated endpoint key.
            Service::Adls => None,
        }
    }
}
