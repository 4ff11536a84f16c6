//! Decode context - selects the protocol version a log is expected to carry

use crate::error::ContextError;

/// Begin strings this codec understands, with their numeric dictionary version.
const VERSIONS: &[(&str, u32)] = &[
    ("FIX.4.0", 4000),
    ("FIX.4.1", 4100),
    ("FIX.4.2", 4200),
    ("FIX.4.3", 4300),
    ("FIX.4.4", 4400),
    ("FIXT.1.1", 1100),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub begin_string: &'static str,
    pub version: u32,
    pub validate_checksum: bool,
    pub validate_body_length: bool,
}

impl Context {
    pub fn fix44() -> Self {
        Self::from_entry(VERSIONS[4])
    }

    pub fn fix42() -> Self {
        Self::from_entry(VERSIONS[2])
    }

    pub fn from_begin_string(begin_string: &str) -> Result<Self, ContextError> {
        VERSIONS
            .iter()
            .find(|(name, _)| *name == begin_string)
            .map(|entry| Self::from_entry(*entry))
            .ok_or_else(|| ContextError::UnsupportedVersion(begin_string.to_string()))
    }

    /// Toggle checksum and body length validation together
    pub fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_checksum = enabled;
        self.validate_body_length = enabled;
        self
    }

    fn from_entry((begin_string, version): (&'static str, u32)) -> Self {
        Self {
            begin_string,
            version,
            validate_checksum: true,
            validate_body_length: true,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::fix44()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fix44() {
        let ctx = Context::default();
        assert_eq!(ctx.begin_string, "FIX.4.4");
        assert_eq!(ctx.version, 4400);
        assert!(ctx.validate_checksum);
        assert!(ctx.validate_body_length);
    }

    #[test]
    fn test_from_begin_string() {
        assert_eq!(Context::from_begin_string("FIX.4.2").unwrap(), Context::fix42());
        assert_eq!(Context::from_begin_string("FIXT.1.1").unwrap().version, 1100);
        assert_eq!(
            Context::from_begin_string("FIX.5.0"),
            Err(ContextError::UnsupportedVersion("FIX.5.0".to_string()))
        );
    }

    #[test]
    fn test_with_validation() {
        let ctx = Context::fix44().with_validation(false);
        assert!(!ctx.validate_checksum);
        assert!(!ctx.validate_body_length);
    }
}
