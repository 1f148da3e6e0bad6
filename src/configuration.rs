use std::path::PathBuf;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn website_title(&self) -> String;
    /// Expected value of the `x-admin-password` header.
    fn admin_password(&self) -> String;
    /// Calendar page with `{{ ... }}` placeholders.
    fn calendar_template(&self) -> PathBuf;
    /// Bookings stay in memory when unset.
    fn database_url(&self) -> Option<String>;
    fn port(&self) -> String;

    fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port())
    }
}
