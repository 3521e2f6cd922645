/// Strips trailing root-zone dots (`example.com.` -> `example.com`).
///
/// Every name is normalized before it is queried and before it is compared
/// or reported as a chain terminal.
pub fn normalize_domain(domain: &str) -> &str {
    domain.trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_single_trailing_dot() {
        assert_eq!(normalize_domain("cname1.example.net."), "cname1.example.net");
    }

    #[test]
    fn test_strips_repeated_trailing_dots() {
        assert_eq!(normalize_domain("example.com.."), "example.com");
    }

    #[test]
    fn test_leaves_relative_name_untouched() {
        assert_eq!(normalize_domain("app.example.com"), "app.example.com");
    }

    #[test]
    fn test_empty_and_root() {
        assert_eq!(normalize_domain(""), "");
        assert_eq!(normalize_domain("."), "");
    }
}
