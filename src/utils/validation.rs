use crate::utils::error::{ManifestError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ManifestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ManifestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ManifestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_dimension(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ManifestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive number of centimeters".to_string(),
        });
    }
    Ok(())
}

/// Parses user-entered text as a box number: a whole number of at least 1.
pub fn parse_box_number(text: &str) -> Result<u32> {
    let invalid = || ManifestError::ValidationError {
        message: "Box number must be a positive whole number.".to_string(),
    };

    let number: u32 = text.trim().parse().map_err(|_| invalid())?;
    if number < 1 {
        return Err(invalid());
    }
    Ok(number)
}

/// Label width entered in centimeters; rejected before any layout happens.
pub fn parse_label_width(text: &str) -> Result<f64> {
    let width: f64 = text.trim().parse().unwrap_or(f64::NAN);
    check_label_width(width)?;
    Ok(width)
}

pub fn check_label_width(width_cm: f64) -> Result<()> {
    check_centimeters(width_cm, "Label width")
}

pub fn parse_max_height(text: &str) -> Result<f64> {
    let height: f64 = text.trim().parse().unwrap_or(f64::NAN);
    check_max_height(height)?;
    Ok(height)
}

pub fn check_max_height(height_cm: f64) -> Result<()> {
    check_centimeters(height_cm, "Max height")
}

fn check_centimeters(value: f64, what: &str) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ManifestError::ValidationError {
            message: format!("{} must be a positive number in centimeters.", what),
        });
    }
    Ok(())
}
