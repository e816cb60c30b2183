//! Payment configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Payment configuration (Stripe)
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Stripe secret API key (sk_live_... or sk_test_...)
    pub stripe_api_key: SecretString,

    /// Redirect target after a completed checkout
    #[serde(default = "default_success_url")]
    pub checkout_success_url: String,

    /// Redirect target after an abandoned checkout
    #[serde(default = "default_cancel_url")]
    pub checkout_cancel_url: String,
}

impl PaymentConfig {
    /// Check if using Stripe test mode
    pub fn is_test_mode(&self) -> bool {
        self.stripe_api_key.expose_secret().starts_with("sk_test_")
    }

    /// Check if using Stripe live mode
    pub fn is_live_mode(&self) -> bool {
        self.stripe_api_key.expose_secret().starts_with("sk_live_")
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.stripe_api_key.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("STRIPE_API_KEY"));
        }

        // Verify key prefix for safety
        if !self.stripe_api_key.expose_secret().starts_with("sk_") {
            return Err(ValidationError::InvalidStripeKey);
        }

        for url in [&self.checkout_success_url, &self.checkout_cancel_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidRedirectUrl);
            }
        }

        Ok(())
    }
}

fn default_success_url() -> String {
    "http://localhost:5173/articles".to_string()
}

fn default_cancel_url() -> String {
    "http://localhost:5173/articles-plans".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> PaymentConfig {
        PaymentConfig {
            stripe_api_key: SecretString::new(key.to_string()),
            checkout_success_url: default_success_url(),
            checkout_cancel_url: default_cancel_url(),
        }
    }

    #[test]
    fn test_is_test_mode() {
        let config = config_with_key("sk_test_xxx");
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());
    }

    #[test]
    fn test_is_live_mode() {
        let config = config_with_key("sk_live_xxx");
        assert!(config.is_live_mode());
        assert!(!config.is_test_mode());
    }

    #[test]
    fn test_validation_missing_api_key() {
        let config = config_with_key("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_invalid_api_key_prefix() {
        let config = config_with_key("pk_test_xxx"); // Wrong prefix
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidStripeKey)
        ));
    }

    #[test]
    fn test_validation_invalid_redirect_url() {
        let mut config = config_with_key("sk_test_xxx");
        config.checkout_success_url = "articles".to_string();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidRedirectUrl)
        ));
    }

    #[test]
    fn test_validation_valid_config() {
        let config = config_with_key("sk_test_abcd1234");
        assert!(config.validate().is_ok());
    }
}
