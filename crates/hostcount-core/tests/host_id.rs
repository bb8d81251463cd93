#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use hostcount_core::HostId;

#[test]
fn empty_host_name_is_rejected() {
    let err = HostId::new("").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "HOST_IDENTITY");
}

#[test]
fn host_name_is_kept_verbatim() {
    let id = HostId::new("web-7.internal").unwrap();
    assert_eq!(id.as_str(), "web-7.internal");
    assert_eq!(id.to_string(), "web-7.internal");
}
