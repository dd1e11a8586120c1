use azsas_azure_storage::account_sas::{decode_account_key, sign, string_to_sign};
use azsas_azure_storage::{ConnectionString, SasParameters, SignedProtocol};
use azsas_core::hash::base64_encode;
use azsas_core::ErrorKind;
use chrono::{TimeDelta, TimeZone, Utc};
use pretty_assertions::assert_eq;

use super::init_signing_test;

const CONN_STR: &str = "DefaultEndpointsProtocol=https;AccountName=azurermtestsa0;AccountKey=T0ZQouXBDpWud/PlTRHIJH2+VUK8D+fnedEynb9Mx638IYnsMUe4mv1fFjC7t0NayTfFAQJzPZuV1WHFKOzGdg==;EndpointSuffix=core.windows.net";

#[test]
fn test_token_from_connection_string() -> anyhow::Result<()> {
    init_signing_test();

    let conn = ConnectionString::parse(CONN_STR)?;
    let (account_name, account_key) = conn.account_credential()?;

    let token = SasParameters::new(account_name, account_key)
        .with_permissions("rwac")
        .with_services("b")
        .with_resource_types("c")
        .with_start("2018-03-20T04:00:00Z")
        .with_expiry("2020-03-20T04:00:00Z")
        .with_protocol(SignedProtocol::Https)
        .with_version("2017-07-29")
        .token()?;

    assert_eq!(
        token,
        "?sv=2017-07-29&ss=b&srt=c&sp=rwac&se=2020-03-20T04:00:00Z&st=2018-03-20T04:00:00Z&spr=https&sig=SQigK%2FnFA4pv0F0oMLqr6DxUWV4vtFqWi6q3Mf7o9nY%3D"
    );
    Ok(())
}

#[test]
fn test_token_from_credential() -> anyhow::Result<()> {
    init_signing_test();

    let cred = ConnectionString::parse(CONN_STR)?
        .credential()
        .expect("connection string carries a shared key");

    let start = Utc.with_ymd_and_hms(2018, 3, 20, 4, 0, 0).unwrap();
    let token = SasParameters::from_credential(&cred)?
        .with_permissions("rwac")
        .with_services("b")
        .with_resource_types("c")
        .with_start_time(start)
        .with_expiry_time(start + TimeDelta::days(731))
        .with_protocol(SignedProtocol::Https)
        .with_version("2017-07-29")
        .token()?;

    assert!(
        token.ends_with("&sig=SQigK%2FnFA4pv0F0oMLqr6DxUWV4vtFqWi6q3Mf7o9nY%3D"),
        "{token}"
    );
    Ok(())
}

#[test]
fn test_stages_compose() {
    init_signing_test();

    let params = SasParameters::new("account", base64_encode(b"key"))
        .with_permissions("r")
        .with_services("b")
        .with_resource_types("o")
        .with_expiry("2022-03-01T08:17:34Z")
        .with_version("2018-11-09");

    let key = decode_account_key(&params.account_key).unwrap();
    assert_eq!(key, b"key");

    let s = string_to_sign(&params);
    assert_eq!(s, "account\nr\nb\no\n\n2022-03-01T08:17:34Z\n\n\n2018-11-09\n");

    let sig = sign(&key, &s);
    assert!(params.token().unwrap().ends_with(&format!(
        "&sig={}",
        sig.replace('/', "%2F").replace('+', "%2B").replace('=', "%3D")
    )));
}

#[test]
fn test_invalid_key_is_rejected_before_signing() {
    init_signing_test();

    let err = SasParameters::new("azurermtestsa0", "this is not base64")
        .with_expiry("2020-03-20T04:00:00Z")
        .with_version("2017-07-29")
        .token()
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidKeyEncoding);
}

#[test]
fn test_fields_are_not_validated() {
    init_signing_test();

    // Unknown permission letters and a start after the expiry still sign.
    let token = SasParameters::new("azurermtestsa0", base64_encode(b"key"))
        .with_permissions("zz")
        .with_services("?")
        .with_start("2030-01-01T00:00:00Z")
        .with_expiry("2020-01-01T00:00:00Z")
        .token()
        .unwrap();

    assert!(token.starts_with("?sv=&ss=%3F&srt=&sp=zz&se=2020-01-01T00:00:00Z&st=2030-01-01T00:00:00Z&sig="), "{token}");
}
