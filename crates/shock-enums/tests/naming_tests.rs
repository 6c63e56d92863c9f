use super::*;

#[test]
fn test_multi_segment_name() {
    assert_eq!(normalize_constant_name("MAX_RETRY_COUNT"), "maxRetryCount");
}

#[test]
fn test_single_segment_is_lowercased() {
    assert_eq!(normalize_constant_name("OK"), "ok");
    assert_eq!(normalize_constant_name("MixedCase"), "mixedcase");
}

#[test]
fn test_empty_segments_are_skipped() {
    assert_eq!(normalize_constant_name("A__B"), "aB");
    assert_eq!(normalize_constant_name("TRAILING_"), "trailing");
    assert_eq!(normalize_constant_name("_LEADING"), "Leading");
    assert_eq!(normalize_constant_name("___"), "");
}

#[test]
fn test_empty_input() {
    assert_eq!(normalize_constant_name(""), "");
}

#[test]
fn test_later_segments_keep_only_first_char_upper() {
    assert_eq!(normalize_constant_name("http_STATUS_code"), "httpStatusCode");
    assert_eq!(normalize_constant_name("X_Y_Z"), "xYZ");
}
