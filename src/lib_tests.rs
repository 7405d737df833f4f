use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_FILES_SKIPPED);
    assert_ne!(EXIT_SUCCESS, EXIT_CONFIG_ERROR);
    assert_ne!(EXIT_FILES_SKIPPED, EXIT_CONFIG_ERROR);
}

#[test]
fn exit_codes_have_documented_values() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_FILES_SKIPPED, 1);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}
