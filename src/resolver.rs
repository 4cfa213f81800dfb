//! Response resolver
//!
//! Maps a free-text query to exactly one canned reply. Matching is a
//! case-insensitive substring check against a fixed, ordered list of topics;
//! the first topic that matches wins, and anything else gets the fallback.

use crate::profile::ProfileFacts;
use std::fmt;

/// Reply used when no topic keyword is present
pub const FALLBACK_REPLY: &str =
    "I can help you with questions about my skills, experience, or certifications.";

/// Reply used for experience queries when the profile lists none
pub const NO_EXPERIENCE_REPLY: &str = "I haven't listed any work experience yet.";

/// Topics the resolver knows about, in match priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Skills,
    Experience,
    Certifications,
}

impl Topic {
    /// All topics, highest priority first
    pub const PRIORITY: [Topic; 3] = [Topic::Skills, Topic::Experience, Topic::Certifications];

    /// Substring that selects this topic (matched against the lowercased query)
    pub fn keyword(self) -> &'static str {
        match self {
            Topic::Skills => "skills",
            Topic::Experience => "experience",
            Topic::Certifications => "certification",
        }
    }

    /// First topic whose keyword occurs in the query
    pub fn detect(query: &str) -> Option<Topic> {
        let query = query.to_lowercase();
        Self::PRIORITY
            .into_iter()
            .find(|topic| query.contains(topic.keyword()))
    }
}

/// What to do when an experience query hits a profile without experience
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingExperience {
    /// Answer with `NO_EXPERIENCE_REPLY`
    #[default]
    Fallback,
    /// Fail the lookup; the session drops the reply
    Fault,
}

impl MissingExperience {
    /// Parse policy string from config; `None` for unknown values
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fallback" => Some(Self::Fallback),
            "fault" => Some(Self::Fault),
            _ => None,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fallback => "fallback",
            Self::Fault => "fault",
        }
    }
}

/// Errors a lookup can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Experience was requested but the profile has none
    MissingExperience,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingExperience => write!(f, "profile has no experience entries"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Resolves queries against a profile
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    pub missing_experience: MissingExperience,
}

impl Resolver {
    pub fn new(missing_experience: MissingExperience) -> Self {
        Self { missing_experience }
    }

    /// Produce the reply for `query`
    ///
    /// Never fails for unmatched input. The only error is a missing
    /// experience entry under `MissingExperience::Fault`.
    pub fn resolve(&self, query: &str, profile: &ProfileFacts) -> Result<String, ResolveError> {
        let Some(topic) = Topic::detect(query) else {
            return Ok(FALLBACK_REPLY.to_string());
        };

        tracing::debug!("Resolver matched topic {:?}", topic);

        match topic {
            Topic::Skills => Ok(format!(
                "My key skills include: {}",
                profile.skills.join(", ")
            )),
            Topic::Experience => match profile.latest_experience() {
                Some(exp) => {
                    let mut reply = format!("I worked at {} as a {}", exp.company, exp.role);
                    if let Some(duration) = &exp.duration {
                        reply.push_str(&format!(" for {}", duration));
                    }
                    Ok(reply)
                }
                None => match self.missing_experience {
                    MissingExperience::Fallback => Ok(NO_EXPERIENCE_REPLY.to_string()),
                    MissingExperience::Fault => Err(ResolveError::MissingExperience),
                },
            },
            Topic::Certifications => Ok(format!(
                "My certifications: {}",
                profile.certifications.join(", ")
            )),
        }
    }
}
