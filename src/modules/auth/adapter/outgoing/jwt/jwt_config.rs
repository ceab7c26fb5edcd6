use crate::shared::config::{optional, parse_or, required, ConfigError};

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64,  // seconds
    pub refresh_token_expiry: i64, // seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = required("JWT_SECRET")?;

        // HS256 requires at least 32 bytes of key material
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: "must be at least 32 characters long for HS256".to_string(),
            });
        }

        let access_token_expiry = parse_or("JWT_ACCESS_EXPIRY", 1800i64)?;
        let refresh_token_expiry = parse_or("JWT_REFRESH_EXPIRY", 604800i64)?;
        let issuer = optional("JWT_ISSUER").unwrap_or_else(|| "portfolio".to_string());

        Self::validated(secret_key, issuer, access_token_expiry, refresh_token_expiry)
    }

    fn validated(
        secret_key: String,
        issuer: String,
        access_token_expiry: i64,
        refresh_token_expiry: i64,
    ) -> Result<Self, ConfigError> {
        if access_token_expiry <= 0 || access_token_expiry > 86400 {
            return Err(ConfigError::Invalid {
                key: "JWT_ACCESS_EXPIRY",
                reason: "must be between 1 and 86400 seconds (24 hours)".to_string(),
            });
        }

        if refresh_token_expiry <= access_token_expiry {
            return Err(ConfigError::Invalid {
                key: "JWT_REFRESH_EXPIRY",
                reason: "must be greater than JWT_ACCESS_EXPIRY".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry,
            refresh_token_expiry,
        })
    }
}
