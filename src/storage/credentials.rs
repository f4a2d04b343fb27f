use super::Result;

#[cfg(not(test))]
use keyring::Entry;

const SERVICE: &str = "plenty-identity";

/// Keyring-backed login identity for the PlentyMarkets REST API.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    username: Option<String>,
    password: Option<String>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load() -> Result<Self> {
        Ok(Self {
            username: Self::read_entry("user")?,
            password: Self::read_entry("password")?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Username/password pair, only when both are present.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }

    pub fn store(username: &str, password: &str) -> Result<()> {
        Self::write_entry("user", username)?;
        Self::write_entry("password", password)?;
        Ok(())
    }

    pub fn clear() -> Result<()> {
        Self::delete_entry("user")?;
        Self::delete_entry("password")?;
        Ok(())
    }

    #[cfg(not(test))]
    fn read_entry(key: &str) -> Result<Option<String>> {
        let entry = Entry::new(SERVICE, key)
            .map_err(|e| crate::error::StorageError::KeyringError(e.to_string()))?;

        match entry.get_password() {
            Ok(v) => Ok(Some(v)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(crate::error::StorageError::KeyringError(e.to_string())),
        }
    }

    #[cfg(not(test))]
    fn write_entry(key: &str, value: &str) -> Result<()> {
        let entry = Entry::new(SERVICE, key)
            .map_err(|e| crate::error::StorageError::KeyringError(e.to_string()))?;

        entry
            .set_password(value)
            .map_err(|e| crate::error::StorageError::KeyringError(e.to_string()))
    }

    #[cfg(not(test))]
    fn delete_entry(key: &str) -> Result<()> {
        let entry = Entry::new(SERVICE, key)
            .map_err(|e| crate::error::StorageError::KeyringError(e.to_string()))?;

        match entry.delete_credential() {
            Ok(_) => Ok(()),
            // Entry doesn't exist, which is fine for logout
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(crate::error::StorageError::KeyringError(e.to_string())),
        }
    }

    #[cfg(test)]
    fn read_entry(key: &str) -> Result<Option<String>> {
        println!("MOCK: Loading {} from service {}", key, SERVICE);
        Ok(None) // Mock implementation for tests
    }

    #[cfg(test)]
    fn write_entry(key: &str, _value: &str) -> Result<()> {
        println!("MOCK: Saving {} to service {}", key, SERVICE);
        Ok(()) // Mock implementation for tests
    }

    #[cfg(test)]
    fn delete_entry(key: &str) -> Result<()> {
        println!("MOCK: Deleting {} from service {}", key, SERVICE);
        Ok(()) // Mock implementation for tests
    }
}
