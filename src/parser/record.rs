use std::sync::LazyLock;

use regex::Regex;

use crate::config::itemprop;
use crate::error::StructureError;
use crate::model::Teacher;

use super::dom::{Cells, Node};
use super::extract::{extract_field, extract_values};
use super::text::{
    capitalize_name, collapse_whitespace, split_normalize, strip_markup,
    strip_quotes_and_periods,
};

// Surname may be two words; each part allows hyphens.
static FULLNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"([a-zA-ZёЁа-яА-Я\-]+(?:\s+[a-zA-ZёЁа-яА-Я\-]*)?)\s+([a-zA-ZёЁа-яА-Я\-]+)\s+([a-zA-ZёЁа-яА-Я\-]+)",
    )
    .unwrap()
});
static DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());
static NON_DIGITS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]").unwrap());
static EXTENSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)доб|доп").unwrap());

const LIST: &[&str] = &[",", ";"];
const NO_REWARD: &[&str] = &["нет", "none"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName {
    pub surname: String,
    pub name: String,
    pub patronymic: String,
}

impl FullName {
    /// "Surname N.P."
    pub fn initials(&self) -> String {
        let first = |s: &str| s.chars().take(1).collect::<String>();
        format!("{} {}.{}.", self.surname, first(&self.name), first(&self.patronymic))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub level: String,
    pub direction: String,
    pub jobs: Vec<String>,
}

/// Build a [`Teacher`] from one `teachingStaff` fragment.
pub fn parse_record<N: Node>(record: &N) -> Result<Teacher, StructureError> {
    let fio = required(record, itemprop::FIO)?;
    let full_name = parse_full_name(fio.text_content().trim())?;
    let initials = full_name.initials();
    let lms_profile_link = fio
        .find_tag("a")
        .and_then(|a| a.attr("href"))
        .map(|href| clean_profile_link(&href));

    let current_job = extract_field(record, itemprop::POST, LIST)?
        .into_iter()
        .next()
        .ok_or(StructureError::EmptyField(itemprop::POST))?;

    let teaching_disciplines = extract_field(record, itemprop::TEACHING_DISCIPLINE, LIST)?;

    let level = required(record, itemprop::TEACHING_LEVEL)?;
    let education = parse_education(&level.inner_markup())?;

    let degrees = extract_field(record, itemprop::DEGREE, LIST)?;

    let cells = Cells::of(record);

    let academ_stat = required(record, itemprop::ACADEM_STAT)?;
    let academ_stats = extract_values(&academ_stat, &[","]);
    let (_, rewards_cell) = cell_after(&cells, &academ_stat, "rewards", itemprop::ACADEM_STAT)?;
    let rewards = drop_no_reward(extract_values(rewards_cell, LIST));

    let qualify_ups = extract_field(record, itemprop::QUALIFICATION, LIST)?;

    let experience = required(record, itemprop::SPEC_EXPERIENCE)?;
    let experience_age = parse_experience(extract_values(&experience, &[]).first().map(String::as_str));

    let (phone_index, phone_cell) =
        cell_after(&cells, &experience, "phone", itemprop::SPEC_EXPERIENCE)?;
    let (phone, phone_additional_code) = extract_values(phone_cell, LIST)
        .first()
        .map(|p| split_phone(p))
        .unwrap_or((None, None));

    let (_, email_cell) = cells.after(phone_index).ok_or(StructureError::MissingCell {
        field: "email",
        after: "phone",
    })?;
    let email = extract_values(email_cell, LIST).into_iter().next();

    let teaching_programs = extract_field(record, itemprop::TEACHING_OP, &[";"])?;

    Ok(Teacher {
        name: full_name.name,
        surname: full_name.surname,
        patronymic: full_name.patronymic,
        initials,
        lms_profile_link,
        current_job,
        teaching_disciplines,
        level_education: education.level,
        direction_education: education.direction,
        jobs: education.jobs,
        degrees,
        academ_stats,
        rewards,
        qualify_ups,
        experience_age,
        phone,
        phone_additional_code,
        email,
        teaching_programs,
    })
}

fn required<N: Node>(record: &N, marker: &'static str) -> Result<N, StructureError> {
    record
        .find_marker(marker)
        .ok_or(StructureError::MissingMarker(marker))
}

fn cell_after<'c, N: Node>(
    cells: &'c Cells<N>,
    marked: &N,
    field: &'static str,
    after: &'static str,
) -> Result<(usize, &'c N), StructureError> {
    cells
        .position_of(marked)
        .and_then(|index| cells.after(index))
        .ok_or(StructureError::MissingCell { field, after })
}

pub fn parse_full_name(text: &str) -> Result<FullName, StructureError> {
    let caps = FULLNAME_RE
        .captures(text)
        .ok_or_else(|| StructureError::NameMismatch(text.to_string()))?;
    let part = |i: usize| capitalize_name(&collapse_whitespace(&caps[i]));

    Ok(FullName {
        surname: part(1),
        name: part(2),
        patronymic: part(3),
    })
}

pub fn clean_profile_link(href: &str) -> String {
    href.trim()
        .trim_matches('_')
        .trim_matches('\\')
        .trim_matches('/')
        .to_string()
}

/// Lines of the education cell, each split into pieces: level, direction, then jobs.
pub fn parse_education(markup: &str) -> Result<Education, StructureError> {
    let markup = markup
        .replace("</br>", "")
        .replace("<br/>", "<br>")
        .replace("<br />", "<br>");

    let pieces: Vec<String> = split_normalize(&markup, &["<br>"], strip_markup)
        .iter()
        .flat_map(|line| split_normalize(line, &[",", ";", ". "], strip_quotes_and_periods))
        .collect();

    let found = pieces.len();
    let mut pieces = pieces.into_iter();
    match (pieces.next(), pieces.next()) {
        (Some(level), Some(direction)) => Ok(Education {
            level,
            direction,
            jobs: pieces.collect(),
        }),
        _ => Err(StructureError::EducationBlock { found }),
    }
}

pub fn drop_no_reward(rewards: Vec<String>) -> Vec<String> {
    rewards
        .into_iter()
        .filter(|r| !NO_REWARD.contains(&r.to_lowercase().as_str()))
        .collect()
}

/// First run of digits, or 0.
pub fn parse_experience(text: Option<&str>) -> u32 {
    text.and_then(|t| DIGITS_RE.find(t))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

/// Phone digits and, when an extension marker is present, the extension digits.
pub fn split_phone(text: &str) -> (Option<String>, Option<String>) {
    let mut parts = EXTENSION_RE
        .split(text)
        .map(|part| NON_DIGITS_RE.replace_all(part, "").into_owned());
    let phone = parts.next().filter(|p| !p.is_empty());
    let code = parts.next().filter(|c| !c.is_empty());
    (phone, code)
}
