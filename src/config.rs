use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::{Error, Result};

pub const TEACHERS_PAGE_URL: &str = "https://tversu.ru/sveden/employees/pps/index.html";

/// Environment variable overriding the default page URL.
pub const URL_ENV: &str = "TVGU_TEACHERS_URL";

/// Class of the block holding full text behind a "show more" control.
pub const MODAL_CLASS: &str = "showpart-container-modal";

/// `itemprop` values used on the staff table.
pub mod itemprop {
    pub const TEACHING_STAFF: &str = "teachingStaff";
    pub const FIO: &str = "fio";
    pub const POST: &str = "post";
    pub const TEACHING_DISCIPLINE: &str = "teachingDiscipline";
    pub const TEACHING_LEVEL: &str = "teachingLevel";
    pub const DEGREE: &str = "degree";
    pub const ACADEM_STAT: &str = "academStat";
    pub const QUALIFICATION: &str = "qualification";
    pub const SPEC_EXPERIENCE: &str = "specExperience";
    pub const TEACHING_OP: &str = "teachingOp";
}

/// Where the page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// `url` and `input` come from flags, `env_url` from [`URL_ENV`].
    /// An explicit `--input` wins over the environment.
    pub fn resolve(
        url: Option<String>,
        env_url: Option<String>,
        input: Option<PathBuf>,
    ) -> Result<Self> {
        match (url, input) {
            (Some(_), Some(_)) => Err(Error::Config(
                "--url and --input cannot be used together".into(),
            )),
            (None, Some(path)) => Ok(Source::File(path)),
            (Some(url), None) => Ok(Source::Url(url)),
            (None, None) => Ok(Source::Url(
                env_url.unwrap_or_else(|| TEACHERS_PAGE_URL.to_string()),
            )),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub output: Option<PathBuf>,
    pub output_directory: Option<PathBuf>,
    pub output_auto: bool,
}

impl OutputOptions {
    /// Final output path, or `None` when nothing should be written.
    pub fn resolve(&self, today: NaiveDate) -> Result<Option<PathBuf>> {
        let file = match (&self.output, self.output_auto) {
            (Some(_), true) => {
                return Err(Error::Config(
                    "--output and --output-auto cannot be used together".into(),
                ))
            }
            (Some(path), false) => path.clone(),
            (None, true) => PathBuf::from(auto_file_name(today)),
            (None, false) => return Ok(None),
        };

        Ok(Some(match &self.output_directory {
            Some(dir) => dir.join(file),
            None => file,
        }))
    }
}

pub fn auto_file_name(today: NaiveDate) -> String {
    format!("teachers-{}.json", today.format("%Y-%m-%d"))
}
