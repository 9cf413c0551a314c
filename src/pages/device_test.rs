use super::*;
use crate::routes::{ViewId, match_path};

#[test]
fn device_detail_path_builds_param_route() {
    assert_eq!(device_detail_path(" 123 "), Some("/device/123".to_owned()));
}

#[test]
fn device_detail_path_rejects_blank_and_nested_ids() {
    assert_eq!(device_detail_path(""), None);
    assert_eq!(device_detail_path("a/b"), None);
}

#[test]
fn device_detail_path_matches_detail_route() {
    let path = device_detail_path("abc").unwrap();
    let m = match_path(&path).unwrap();
    assert_eq!(m.view(), Some(ViewId::DeviceDetail));
    assert_eq!(m.param("id"), Some("abc"));
}

#[test]
fn device_detail_path_rejects_query_and_fragment_chars() {
    assert_eq!(device_detail_path("7?x"), None);
    assert_eq!(device_detail_path("7#x"), None);
}
