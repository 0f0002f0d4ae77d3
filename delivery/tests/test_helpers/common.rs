use delivery::{error::DeliveryError, ApplicationRuntime, ApplicationRuntimeBuilder};

/// Creates a test runtime with an in-memory database
pub fn create_test_runtime() -> Result<ApplicationRuntime, DeliveryError> {
    // Initialize logger only once across tests
    let _ = env_logger::builder().is_test(true).try_init();

    ApplicationRuntimeBuilder::new().use_in_memory_db().build()
}
