use crate::config::EffectiveConfig;

impl EffectiveConfig {
    /// Whether the package is exempt from license checks (exact name match)
    pub fn is_package_allowed(&self, package_name: &str) -> bool {
        self.allowed_packages.iter().any(|allowed| allowed == package_name)
    }

    /// Whether a single license identifier is on the allow-list (exact match)
    pub fn is_license_allowed(&self, license: &str) -> bool {
        self.allowed_licenses.iter().any(|allowed| allowed == license)
    }
}
