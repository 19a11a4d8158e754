use crate::utils::error::{Result, TogglerError};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_address(field_name: &str, address: &str) -> Result<Url> {
    if address.is_empty() {
        return Err(TogglerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: "Address cannot be empty".to_string(),
        });
    }

    match Url::parse(address) {
        Ok(url) => match url.scheme() {
            "http" | "https" | "file" => Ok(url),
            scheme => Err(TogglerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: address.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(TogglerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TogglerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(TogglerError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate element id".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| TogglerError::MissingConfigError {
        field: field_name.to_string(),
    })
}
