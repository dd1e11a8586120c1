use anyhow::Result;
use azsas_azure_storage::{Config, SasParameters, Service, SignedProtocol};
use azsas_core::OsEnv;
use chrono::{TimeDelta, Utc};

fn main() -> Result<()> {
    // Initialize logging
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    // Account settings come from AZURE_STORAGE_CONNECTION_STRING or the
    // AZBLOB_ACCOUNT_NAME / AZBLOB_ACCOUNT_KEY pair. Without them we fall
    // back to the Azurite development account.
    let mut config = Config::default().from_env(&OsEnv)?;
    if config.credential().is_none() {
        println!("No Azure credentials found, using the development storage account");
        println!(
            "To use real credentials, set AZURE_STORAGE_CONNECTION_STRING or AZBLOB_ACCOUNT_NAME and AZBLOB_ACCOUNT_KEY"
        );
        println!();
        config = Config::try_from_connection_string("UseDevelopmentStorage=true", &Service::Blob)?;
    }

    let Some(cred) = config.credential() else {
        anyhow::bail!("no shared key credential available");
    };

    let now = Utc::now();
    let token = SasParameters::from_credential(&cred)?
        .with_permissions("rl")
        .with_services("b")
        .with_resource_types("sco")
        .with_start_time(now - TimeDelta::minutes(5))
        .with_expiry_time(now + TimeDelta::hours(1))
        .with_protocol(SignedProtocol::HttpsAndHttp)
        .with_version("2017-07-29")
        .token()?;

    match config.endpoint {
        Some(endpoint) => println!("{}/{token}", endpoint.trim_end_matches('/')),
        None => println!("{token}"),
    }

    Ok(())
}
