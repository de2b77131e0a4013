use std::sync::Once;

pub const TEST_JWT_SECRET: &str = "landadmin-unit-test-secret";

static INIT: Once = Once::new();

/// Point the config singleton at a test secret before its first read
pub fn init() {
    INIT.call_once(|| {
        if std::env::var("JWT_SECRET").is_err() {
            std::env::set_var("JWT_SECRET", TEST_JWT_SECRET);
        }
    });
}
