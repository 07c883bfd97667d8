use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DemoError::InvalidConfigValueError {
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
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_at_most<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    max: T,
) -> Result<()> {
    if value > max {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at most {}", max),
        });
    }
    Ok(())
}

/// `lower` 必須不大於 `upper`，錯誤會回報在 `upper` 欄位上
pub fn validate_ordered<T: PartialOrd + std::fmt::Display + Copy>(
    lower_field: &str,
    lower: T,
    upper_field: &str,
    upper: T,
) -> Result<()> {
    if lower > upper {
        return Err(DemoError::InvalidConfigValueError {
            field: upper_field.to_string(),
            value: upper.to_string(),
            reason: format!("Must not be less than {} ({})", lower_field, lower),
        });
    }
    Ok(())
}

pub fn validate_max_len<T>(field_name: &str, items: &[T], max_len: usize) -> Result<()> {
    if items.len() > max_len {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{} items", items.len()),
            reason: format!("At most {} items are allowed", max_len),
        });
    }
    Ok(())
}
