mod common;

#[cfg(test)]
pub mod validation_tests {
    use corpsite::common::*;

    #[test]
    fn test_is_valid_email_success() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("  first.last+tag@sub.example.vn "));
    }

    #[test]
    fn test_is_valid_email_fails_on_malformed_input() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@localhost"));
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email(&format!("{}@example.com", "a".repeat(260))));
    }

    #[test]
    fn test_is_valid_phone_success() {
        assert!(is_valid_phone("+84901234567"));
        assert!(is_valid_phone("090 123 4567"));
        assert!(is_valid_phone("(028) 3823-4567"));
    }

    #[test]
    fn test_is_valid_phone_fails_on_malformed_input() {
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("+84 90 abc 4567"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_require_text_fails_on_whitespace() {
        let err = require_text("title", "  \n ", "Vui lòng nhập tiêu đề!").unwrap_err();
        assert_eq!(err, ValidationError::new("title", "Vui lòng nhập tiêu đề!"));
    }

    #[test]
    fn test_require_email_distinguishes_missing_and_invalid() {
        assert_eq!(require_email("email", "").unwrap_err().message, "Vui lòng nhập email!");
        assert_eq!(require_email("email", "abc").unwrap_err().message, "Email không hợp lệ!");
        assert!(require_email("email", "user@example.com").is_ok());
    }

    #[test]
    fn test_optional_phone_allows_empty() {
        assert!(optional_phone("phone", "").is_ok());
        assert!(optional_phone("phone", "abc").is_err());
    }

    #[test]
    fn test_config_from_lookup_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.backend_domain, "http://localhost:5000");
        assert_eq!(config.page_size, 9);
    }

    #[test]
    fn test_config_from_lookup_reads_fallback_domain() {
        let config = Config::from_lookup(|key| match key {
            "NEXT_PUBLIC_BACKEND_DOMAIN" => Some("https://api.example.com/".to_string()),
            "PAGE_SIZE" => Some("12".to_string()),
            "BACKEND_TIMEOUT_SECS" => Some("soon".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.backend_domain, "https://api.example.com");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.backend_timeout, std::time::Duration::from_secs(10));
    }

    #[test]
    fn test_normalize_backend_domain_fails_on_missing_scheme() {
        assert!(normalize_backend_domain("api.example.com").is_err());
        assert!(normalize_backend_domain("https://").is_err());
        assert_eq!(
            normalize_backend_domain("http://localhost:5000//").unwrap(),
            "http://localhost:5000"
        );
    }
}
