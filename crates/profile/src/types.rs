use serde::{Deserialize, Serialize};

/// Coarse lexical hints pulled from a candidate profile.
///
/// Derived once per matching run and read-only afterwards. Every field has an
/// explicit empty state, so "no profile text" and "nothing found" both map to
/// [`ProfileSignals::default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSignals {
    /// Best-effort years of experience; 0 when unknown.
    #[serde(default)]
    pub experience_years: u32,
    /// Education line taken verbatim from the profile, if one was found.
    #[serde(default)]
    pub education_level: Option<String>,
    /// Skills in the order they appear in the profile.
    #[serde(default)]
    pub key_skills: Vec<String>,
    /// Previous job titles in profile order.
    #[serde(default)]
    pub job_titles: Vec<String>,
    /// Industries; part of the extracted shape but not used for scoring.
    #[serde(default)]
    pub industries: Vec<String>,
}

impl ProfileSignals {
    /// True when no signal carries any information.
    pub fn is_empty(&self) -> bool {
        self.experience_years == 0
            && self.education_level.is_none()
            && self.key_skills.is_empty()
            && self.job_titles.is_empty()
            && self.industries.is_empty()
    }
}
