//! Resolver configuration
//!
//! Controls how the resolver treats experience queries when the profile has
//! no experience entries.

use crate::resolver::MissingExperience;
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverConfig {
    pub missing_experience: MissingExperience,
}

/// Resolver settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileResolver {
    pub missing_experience: Option<String>,
}

impl ResolverConfig {
    /// Create from file config with defaults
    ///
    /// Unknown policy names fall back to the default and leave a note in
    /// `warnings`.
    pub fn from_file(file: Option<FileResolver>, warnings: &mut Vec<String>) -> Self {
        let file = file.unwrap_or_default();

        let missing_experience = match file.missing_experience {
            None => MissingExperience::default(),
            Some(s) => MissingExperience::parse(&s).unwrap_or_else(|| {
                let fallback = MissingExperience::default();
                warnings.push(format!(
                    "Unknown resolver.missing_experience \"{}\" (expected \"fallback\" or \"fault\"), using \"{}\"",
                    s,
                    fallback.as_str()
                ));
                fallback
            }),
        };

        Self { missing_experience }
    }
}
