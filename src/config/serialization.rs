//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic string
fn toml_str(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

/// Render a string list as a TOML inline array
fn toml_str_array(items: &[String]) -> String {
    let values = items
        .iter()
        .map(|s| toml::Value::String(s.clone()))
        .collect();
    toml::Value::Array(values).to_string()
}

impl Config {
    /// Serialize experience entries to [[profile.experience]] tables
    pub(super) fn experience_to_toml(&self) -> String {
        let entries = match &self.profile.experience {
            Some(entries) if !entries.is_empty() => entries,
            _ => {
                // Show an example when no experience is listed
                return r#"
# [[profile.experience]]
# company = "Acme Corp"
# role = "ML Engineer"
# duration = "2 years"   # optional
"#
                .to_string();
            }
        };

        let mut output = String::new();
        for exp in entries {
            output.push_str("\n[[profile.experience]]\n");
            output.push_str(&format!("company = {}\n", toml_str(&exp.company)));
            output.push_str(&format!("role = {}\n", toml_str(&exp.role)));
            if let Some(duration) = &exp.duration {
                output.push_str(&format!("duration = {}\n", toml_str(duration)));
            }
        }
        output
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# folio configuration

# Theme: dark, light, terminal
theme = {theme}

# Simulated "thinking" delay before each bot reply
reply_delay_ms = {delay}

# Feature flags
[features]
logs_panel = {logs_panel}
mouse = {mouse}

# What to do when asked about experience and none is listed:
#   fallback - answer that no experience is listed
#   fault    - log an error and send no reply
[resolver]
missing_experience = "{missing_experience}"

# Facts the chatbot answers from
[profile]
skills = {skills}
certifications = {certifications}
{experience}
# Logging configuration (RUST_LOG env var overrides)
[logging]
level = {log_level}
# JSON file logging (in addition to the logs panel or stderr)
file_enabled = {log_file_enabled}
file_dir = {log_file_dir}
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = {log_file_prefix}
"#,
            theme = toml_str(&self.theme),
            delay = self.reply_delay.as_millis(),
            logs_panel = self.features.logs_panel,
            mouse = self.features.mouse,
            missing_experience = self.resolver.missing_experience.as_str(),
            skills = toml_str_array(&self.profile.skills),
            certifications = toml_str_array(&self.profile.certifications),
            experience = self.experience_to_toml(),
            log_level = toml_str(&self.logging.level),
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = toml_str(&self.logging.file_dir.display().to_string()),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = toml_str(&self.logging.file_prefix),
        )
    }
}
