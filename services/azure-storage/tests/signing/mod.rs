mod account_sas;
mod known_vectors;

/// Initialize logging for a signing test.
pub fn init_signing_test() {
    let _ = env_logger::builder().is_test(true).try_init();
}
