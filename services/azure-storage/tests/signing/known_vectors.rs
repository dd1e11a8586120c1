use azsas_azure_storage::account_sas::compute;
use azsas_azure_storage::SasParameters;
use pretty_assertions::assert_eq;
use test_case::test_case;

use super::init_signing_test;

// Both keys belonged to storage accounts that have since been deleted.
const KEY_1: &str =
    "T0ZQouXBDpWud/PlTRHIJH2+VUK8D+fnedEynb9Mx638IYnsMUe4mv1fFjC7t0NayTfFAQJzPZuV1WHFKOzGdg==";
const KEY_2: &str =
    "2vJrjEyL4re2nxCEg590wJUUC7PiqqrDHjAN5RU304FNUQieiEwS2bfp83O0v28iSfWjvYhkGmjYQAdd9x+6nw==";

#[allow(clippy::too_many_arguments)]
fn vector(
    account_key: &str,
    permissions: &str,
    services: &str,
    resource_types: &str,
    start: &str,
    expiry: &str,
    signed_protocol: &str,
    signed_ip: &str,
    signed_version: &str,
) -> SasParameters {
    SasParameters {
        account_name: "azurermtestsa0".to_string(),
        account_key: account_key.to_string(),
        permissions: permissions.to_string(),
        services: services.to_string(),
        resource_types: resource_types.to_string(),
        start: start.to_string(),
        expiry: expiry.to_string(),
        signed_protocol: signed_protocol.to_string(),
        signed_ip: signed_ip.to_string(),
        signed_version: signed_version.to_string(),
    }
}

#[test_case(
    vector(KEY_1, "rwac", "b", "c", "2018-03-20T04:00:00Z", "2020-03-20T04:00:00Z", "https", "", "2017-07-29"),
    "?sv=2017-07-29&ss=b&srt=c&sp=rwac&se=2020-03-20T04:00:00Z&st=2018-03-20T04:00:00Z&spr=https&sig=SQigK%2FnFA4pv0F0oMLqr6DxUWV4vtFqWi6q3Mf7o9nY%3D";
    "blob container"
)]
#[test_case(
    vector(KEY_2, "rwdlac", "b", "sco", "2018-03-20T04:00:00Z", "2018-03-28T05:04:25Z", "https,http", "", "2017-07-29"),
    "?sv=2017-07-29&ss=b&srt=sco&sp=rwdlac&se=2018-03-28T05:04:25Z&st=2018-03-20T04:00:00Z&spr=https%2Chttp&sig=OLNwL%2B7gxeDQQaUyNdXcDPK2aCbCMgEkJNjha9te448%3D";
    "blob all resource types"
)]
#[test_case(
    vector(KEY_1, "rwac", "b", "c", "", "2020-03-20T04:00:00Z", "", "", "2017-07-29"),
    "?sv=2017-07-29&ss=b&srt=c&sp=rwac&se=2020-03-20T04:00:00Z&sig=LJswD3TTd3uE9U49VH85VwCX9tZp4ja7xTPc%2BeLgn3w%3D";
    "no start no protocol"
)]
fn test_known_vector(params: SasParameters, expected: &str) {
    init_signing_test();

    assert_eq!(compute(&params).unwrap(), expected);
}
