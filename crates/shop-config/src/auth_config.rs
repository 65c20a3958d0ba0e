use crate::{ConfigError, ConfigErrorResult, DEFAULT_BCRYPT_COST, MAX_BCRYPT_COST, MIN_BCRYPT_COST};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// bcrypt work factor used when hashing new passwords
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.bcrypt_cost < MIN_BCRYPT_COST || self.bcrypt_cost > MAX_BCRYPT_COST {
            return Err(ConfigError::auth(format!(
                "auth.bcrypt_cost must be {}-{}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }

        Ok(())
    }
}
