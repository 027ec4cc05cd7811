use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
/// Error type returned by settings validation
pub enum SettingsError {
    /// An error attributable to one of the fields
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

// Fails validation with the name of the first offending field.
macro_rules! check_setting {
    ($cond:expr, $field:literal) => {
        if !($cond) {
            return Err(SettingsError::BadFieldValue($field));
        }
    };
}
pub(crate) use check_setting;
