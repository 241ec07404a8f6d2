//! Errors raised while building, loading or synthesizing bindings

use crate::schema::TypeError;

/// Error type for binding configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{resource_type}: required attribute '{attribute}' is missing")]
    MissingRequired {
        resource_type: String,
        attribute: String,
    },

    #[error("{resource_type}: {source}")]
    Deserialize {
        resource_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {address}: {source}")]
    Serialize {
        address: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{resource_type}: expected a JSON object, got {got}")]
    NotAnObject { resource_type: String, got: String },

    #[error("{address}: {}", join_type_errors(errors))]
    Invalid {
        address: String,
        errors: Vec<TypeError>,
    },
}

impl ConfigError {
    pub fn missing(resource_type: &str, attribute: &str) -> Self {
        ConfigError::MissingRequired {
            resource_type: resource_type.to_string(),
            attribute: attribute.to_string(),
        }
    }
}

fn join_type_errors(errors: &[TypeError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_message() {
        let err = ConfigError::missing("aws_redshift_cluster", "node_type");
        assert_eq!(
            err.to_string(),
            "aws_redshift_cluster: required attribute 'node_type' is missing"
        );
    }

    #[test]
    fn invalid_joins_type_errors() {
        let err = ConfigError::Invalid {
            address: "aws_redshift_usage_limit.spectrum".to_string(),
            errors: vec![
                TypeError::MissingRequired {
                    name: "amount".to_string(),
                },
                TypeError::UnknownAttribute {
                    name: "limit".to_string(),
                },
            ],
        };
        assert_eq!(
            err.to_string(),
            "aws_redshift_usage_limit.spectrum: Required attribute 'amount' is missing; Unknown attribute 'limit'"
        );
    }
}
