use crate::StoreConfig;

use googletest::prelude::*;

#[test]
fn given_boundary_timeouts_when_validate_then_ok() {
    assert_that!(
        StoreConfig {
            request_timeout_secs: 1
        }
        .validate(),
        ok(anything())
    );
    assert_that!(
        StoreConfig {
            request_timeout_secs: 300
        }
        .validate(),
        ok(anything())
    );
}

#[test]
fn given_out_of_range_timeout_when_validate_then_error() {
    assert_that!(
        StoreConfig {
            request_timeout_secs: 0
        }
        .validate(),
        err(anything())
    );
    assert_that!(
        StoreConfig {
            request_timeout_secs: 301
        }
        .validate(),
        err(anything())
    );
}
