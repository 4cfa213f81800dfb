// Profile facts - the static lookup table the resolver answers from
//
// Built once at startup (defaults or the [profile] config section) and shared
// read-only for the rest of the session.

use serde::Deserialize;

/// A single work experience entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    /// Free-form tenure ("2 years", "2021-2023"); omitted from replies when unset
    #[serde(default)]
    pub duration: Option<String>,
}

/// Facts about the profile owner
///
/// `experience` is optional: the default profile ships without it, and the
/// resolver decides what to say when it is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFacts {
    pub skills: Vec<String>,
    pub certifications: Vec<String>,
    pub experience: Option<Vec<Experience>>,
}

impl Default for ProfileFacts {
    fn default() -> Self {
        Self {
            skills: ["Docker", "Tensorflow", "AWS", "Flask"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            certifications: [
                "Data Science certification by PW Skills",
                "Intro to Data Engg. coursera",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            experience: None,
        }
    }
}

impl ProfileFacts {
    /// First listed experience entry, if any
    ///
    /// An empty list counts as absent.
    pub fn latest_experience(&self) -> Option<&Experience> {
        self.experience.as_ref().and_then(|list| list.first())
    }
}

/// Profile as loaded from the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileProfile {
    pub skills: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,
    pub experience: Option<Vec<Experience>>,
}

impl ProfileFacts {
    /// Create from file config; each missing list falls back to the default
    pub fn from_file(file: Option<FileProfile>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            skills: file.skills.unwrap_or(defaults.skills),
            certifications: file.certifications.unwrap_or(defaults.certifications),
            experience: file.experience.or(defaults.experience),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_has_no_experience() {
        let profile = ProfileFacts::default();
        assert_eq!(profile.skills, vec!["Docker", "Tensorflow", "AWS", "Flask"]);
        assert_eq!(profile.certifications.len(), 2);
        assert!(profile.latest_experience().is_none());
    }

    #[test]
    fn empty_experience_list_counts_as_absent() {
        let profile = ProfileFacts {
            experience: Some(Vec::new()),
            ..Default::default()
        };
        assert!(profile.latest_experience().is_none());
    }

    #[test]
    fn from_file_keeps_defaults_for_missing_lists() {
        let profile = ProfileFacts::from_file(Some(FileProfile {
            skills: Some(vec!["Rust".to_string()]),
            certifications: None,
            experience: Some(vec![Experience {
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                duration: None,
            }]),
        }));

        assert_eq!(profile.skills, vec!["Rust"]);
        assert_eq!(profile.certifications, ProfileFacts::default().certifications);
        assert_eq!(profile.latest_experience().map(|e| e.company.as_str()), Some("Acme"));
    }
}
