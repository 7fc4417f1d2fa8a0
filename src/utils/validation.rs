use crate::utils::error::{QueueError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(QueueError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(QueueError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(QueueError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| QueueError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(QueueError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(QueueError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    // AWS region format validation
    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(QueueError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

/// Access key 與 secret key 必須成對出現
pub fn validate_credential_pair(
    field_name: &str,
    access_key: Option<&str>,
    secret_key: Option<&str>,
) -> Result<()> {
    match (access_key, secret_key) {
        (Some(access), Some(secret)) => {
            validate_non_empty_string(&format!("{}.access_key", field_name), access)?;
            validate_non_empty_string(&format!("{}.secret_key", field_name), secret)?;
            Ok(())
        }
        (None, None) => Ok(()),
        (Some(_), None) => Err(QueueError::MissingConfigError {
            field: format!("{}.secret_key", field_name),
        }),
        (None, Some(_)) => Err(QueueError::MissingConfigError {
            field: format!("{}.access_key", field_name),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("queue_url", "https://sqs.ap-southeast-2.amazonaws.com/123/q").is_ok());
        assert!(validate_url("queue_url", "http://localhost:4566/000000000000/q").is_ok());
        assert!(validate_url("queue_url", "").is_err());
        assert!(validate_url("queue_url", "invalid-url").is_err());
        assert!(validate_url("queue_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_aws_region() {
        assert!(validate_aws_region("region", "ap-southeast-2").is_ok());
        assert!(validate_aws_region("region", "").is_err());
        assert!(validate_aws_region("region", "AP_SOUTHEAST_2").is_err());
    }

    #[test]
    fn test_validate_credential_pair() {
        assert!(validate_credential_pair("credentials", None, None).is_ok());
        assert!(validate_credential_pair("credentials", Some("AKIA"), Some("secret")).is_ok());
        assert!(matches!(
            validate_credential_pair("credentials", Some("AKIA"), None),
            Err(QueueError::MissingConfigError { field }) if field == "credentials.secret_key"
        ));
        assert!(validate_credential_pair("credentials", Some(" "), Some("secret")).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_seconds", 30u64, 1, 300).is_ok());
        assert!(validate_range("timeout_seconds", 0u64, 1, 300).is_err());
    }
}
