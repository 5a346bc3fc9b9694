use std::env;
use uspto_odp::utils::config::{get_env_or_default, get_env_or_none, get_required_env};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("USPTO_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("USPTO_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("USPTO_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("USPTO_TEST_MISSING_VAR");
    }
    let result: String = get_env_or_default("USPTO_TEST_MISSING_VAR", "default".to_string());
    assert_eq!(result, "default");
}

#[test]
fn test_get_env_or_default_trims_value() {
    unsafe {
        env::set_var("USPTO_TEST_VAR_PADDED", "  42 ");
        let result: u64 = get_env_or_default("USPTO_TEST_VAR_PADDED", 0);
        assert_eq!(result, 42);
        env::remove_var("USPTO_TEST_VAR_PADDED");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("USPTO_TEST_VAR_INVALID", "not_a_number");
        let result: u32 = get_env_or_default("USPTO_TEST_VAR_INVALID", 99);
        assert_eq!(result, 99);
        env::remove_var("USPTO_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("USPTO_TEST_VAR_OPTION", "123");
        env::set_var("USPTO_TEST_VAR_OPTION_BAD", "abc");
        assert_eq!(get_env_or_none::<i32>("USPTO_TEST_VAR_OPTION"), Some(123));
        assert_eq!(get_env_or_none::<i32>("USPTO_TEST_VAR_OPTION_BAD"), None);
        assert_eq!(get_env_or_none::<i32>("USPTO_TEST_VAR_OPTION_MISSING"), None);
        env::remove_var("USPTO_TEST_VAR_OPTION");
        env::remove_var("USPTO_TEST_VAR_OPTION_BAD");
    }
}

#[test]
fn test_get_required_env() {
    unsafe {
        env::set_var("USPTO_TEST_REQUIRED", " key ");
        env::set_var("USPTO_TEST_REQUIRED_BLANK", "   ");
        assert_eq!(get_required_env("USPTO_TEST_REQUIRED"), "key");
        assert_eq!(get_required_env("USPTO_TEST_REQUIRED_BLANK"), "");
        assert_eq!(get_required_env("USPTO_TEST_REQUIRED_MISSING"), "");
        env::remove_var("USPTO_TEST_REQUIRED");
        env::remove_var("USPTO_TEST_REQUIRED_BLANK");
    }
}
