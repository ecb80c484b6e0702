//! Tiny accumulating validation helper for write paths.

use crate::errors::{Error, Result};

/// Collects field-level validation failures and reports them in one
/// `Error::Invalid`, so a caller sees every problem at once.
#[derive(Default)]
pub struct Rules {
    errors: Vec<String>,
}

impl Rules {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn non_empty(mut self, field: &str, v: &str) -> Self {
        if v.trim().is_empty() {
            self.errors.push(format!("'{field}' must not be empty"));
        }
        self
    }

    pub fn non_negative(mut self, field: &str, v: f64) -> Self {
        if !v.is_finite() || v < 0.0 {
            self.errors
                .push(format!("'{field}' must be a non-negative number"));
        }
        self
    }

    pub fn at_least(mut self, field: &str, len: usize, n: usize) -> Self {
        if len < n {
            self.errors
                .push(format!("'{field}' must have at least {n} entries"));
        }
        self
    }

    pub fn at_most(mut self, field: &str, len: usize, n: usize) -> Self {
        if len > n {
            self.errors
                .push(format!("'{field}' must have at most {n} entries"));
        }
        self
    }

    pub fn check(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else if self.errors.len() == 1 {
            Err(Error::invalid(self.errors.into_iter().next().unwrap()))
        } else {
            let msg = self
                .errors
                .iter()
                .map(|e| format!("- {e}"))
                .collect::<Vec<_>>()
                .join("\n");
            Err(Error::invalid(format!("Validation failed:\n{msg}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_when_all_rules_hold() {
        assert!(Rules::new()
            .non_empty("title", "Villa")
            .non_negative("price", 10.0)
            .at_least("images", 1, 1)
            .check()
            .is_ok());
    }

    #[test]
    fn single_failure_is_reported_directly() {
        let err = Rules::new().non_empty("title", "  ").check().unwrap_err();
        assert!(matches!(err, Error::Invalid { .. }));
        assert!(err.to_string().contains("'title'"));
    }

    #[test]
    fn multiple_failures_are_joined() {
        let err = Rules::new()
            .non_empty("title", "")
            .non_negative("price", -1.0)
            .check()
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'title'"));
        assert!(msg.contains("'price'"));
    }

    #[test]
    fn nan_price_is_rejected() {
        assert!(Rules::new()
            .non_negative("price", f64::NAN)
            .check()
            .is_err());
    }
}
