//! Utility functions for value normalization

use tfbind_core::resource::is_expression;

/// Normalize region value (e.g., "ap_northeast_1" -> "ap-northeast-1").
///
/// `${...}` expressions are resolved by Terraform and are returned unchanged.
pub fn normalize_region(s: &str) -> String {
    if is_expression(s) {
        return s.to_string();
    }
    s.trim().replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_region() {
        assert_eq!(normalize_region("us_east_1"), "us-east-1");
        assert_eq!(normalize_region("eu-west-1"), "eu-west-1");
        assert_eq!(normalize_region(" ap_northeast_1 "), "ap-northeast-1");
    }

    #[test]
    fn test_normalize_region_keeps_expressions() {
        assert_eq!(normalize_region("${var.aws_region}"), "${var.aws_region}");
        assert_eq!(
            normalize_region("${data.aws_region.current.name}"),
            "${data.aws_region.current.name}"
        );
    }
}
