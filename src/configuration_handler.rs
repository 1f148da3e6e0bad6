use crate::configuration::Configuration;
use clap::Parser;
use std::path::PathBuf;

/// Slot booking service
#[derive(Debug, Clone, Parser)]
#[command(version)]
pub struct ConfigurationHandler {
    /// Title shown on every page
    #[arg(long, env = "WEBSITE_TITLE", default_value = "Booking")]
    website_title: String,

    /// Password expected in the `x-admin-password` header of admin requests
    #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true)]
    admin_password: String,

    /// Calendar page template
    #[arg(long, env = "FRONTEND_PATH", default_value = "frontend/calendar.html")]
    frontend_path: PathBuf,

    /// PostgreSQL connection URL. Bookings are kept in memory without it.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(long, env = "PORT", default_value = "3000")]
    port: String,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn website_title(&self) -> String {
        self.website_title.clone()
    }

    fn admin_password(&self) -> String {
        self.admin_password.clone()
    }

    fn calendar_template(&self) -> PathBuf {
        self.frontend_path.clone()
    }

    fn database_url(&self) -> Option<String> {
        self.database_url.clone()
    }

    fn port(&self) -> String {
        self.port.clone()
    }
}
