pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Checks that `value` lies in `min..=max`, naming the field in the error.
pub fn validate_range<T>(field: &str, value: T, min: T, max: T) -> Result<(), String>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(format!("{} must be between {} and {}, got {}", field, min, max, value));
    }
    Ok(())
}
