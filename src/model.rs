use serde::{Deserialize, Serialize};

/// One faculty member as listed on the staff page.
///
/// Field names are the JSON keys of the dump.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Teacher {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    /// "Surname N.P."
    pub initials: String,
    pub lms_profile_link: Option<String>,
    pub current_job: String,
    pub teaching_disciplines: Vec<String>,
    pub level_education: String,
    pub direction_education: String,
    pub jobs: Vec<String>,
    pub degrees: Vec<String>,
    pub academ_stats: Vec<String>,
    pub rewards: Vec<String>,
    pub qualify_ups: Vec<String>,
    pub experience_age: u32,
    /// Digits only.
    pub phone: Option<String>,
    /// Digits only; set only when the source had an extension marker.
    pub phone_additional_code: Option<String>,
    pub email: Option<String>,
    pub teaching_programs: Vec<String>,
}
