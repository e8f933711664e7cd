//! Service configuration
//!
//! Each lab server listens on the fixed port its course hand-out names;
//! there are no environment or CLI overrides.

/// Port for the greeting server
const GREETING_PORT: u16 = 3111;
/// Port for the login/month server
const LOGIN_PORT: u16 = 3333;
/// Port for the person directory server
const DIRECTORY_PORT: u16 = 5000;

/// Network configuration for one lab server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,
    /// Port to bind the server to
    pub port: u16,
}

impl ServerConfig {
    /// Configuration for the greeting server
    pub fn greeting() -> Self {
        Self::on_port(GREETING_PORT)
    }

    /// Configuration for the login/month server
    pub fn login() -> Self {
        Self::on_port(LOGIN_PORT)
    }

    /// Configuration for the person directory server
    pub fn directory() -> Self {
        Self::on_port(DIRECTORY_PORT)
    }

    fn on_port(port: u16) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port,
        }
    }

    /// Get the server address as a string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
