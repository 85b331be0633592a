//! Record-to-model conversion.
//!
//! # Fallbacks
//! The catalog is loosely typed; conversion follows these rules:
//! - `classType == "e"` marks an enrollment section.
//! - Missing `associatedClass` means group 0.
//! - Missing or unrecognised `sectionCode` means a lecture.
//! - Unrecognised campus names become "unknown campus".
//! - Unrecognised weekday codes are dropped.
//! - Missing or blank clock times become unknown times.
//!
//! Malformed dates, times and group numbers are errors.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::Arc;
use tracing::debug;

use super::records::{CourseRecord, ScheduleRecord, SectionRecord};
use crate::error::CatalogError;
use crate::models::{Campus, Course, InstructorRegistry, Occurrence, Section, SectionType, WeekDay};

/// Builds [`Course`] values from catalog records.
///
/// Instructors are interned through the shared registry handle, so every
/// course built by loaders sharing one registry sees one identity per name.
#[derive(Debug, Clone, Default)]
pub struct CourseLoader {
    registry: Arc<InstructorRegistry>,
}

impl CourseLoader {
    /// Creates a loader with its own registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a loader interning into `registry`.
    pub fn with_registry(registry: Arc<InstructorRegistry>) -> Self {
        Self { registry }
    }

    /// The registry instructors are interned into.
    pub fn registry(&self) -> &Arc<InstructorRegistry> {
        &self.registry
    }

    /// Converts a course record.
    #[tracing::instrument(skip_all, fields(course = %record.name()))]
    pub fn build_course(&self, record: &CourseRecord) -> Result<Course, CatalogError> {
        let sections = record
            .sections
            .iter()
            .map(|s| self.build_section(s))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(sections = sections.len(), "built course");
        Ok(Course::new(record.name(), sections))
    }

    /// Converts a section record.
    pub fn build_section(&self, record: &SectionRecord) -> Result<Section, CatalogError> {
        let section_type = match record.section_code.as_deref() {
            Some(code) => code.parse::<SectionType>().unwrap_or_else(|_| {
                debug!(section = %record.text, code, "unknown section code, treating as lecture");
                SectionType::Lecture
            }),
            None => SectionType::Lecture,
        };

        let group = match record.associated_class.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => {
                text.parse::<u32>().map_err(|_| CatalogError::InvalidField {
                    field: "associatedClass",
                    value: text.to_string(),
                })?
            }
            _ => 0,
        };

        let mut section = Section::new(record.text.clone(), section_type).with_group(group);
        if record.class_type.as_deref() == Some("e") {
            section = section.enrollment();
        }
        for schedule in &record.course_schedule {
            section = section.with_occurrence(build_occurrence(schedule)?);
        }
        for instructor in &record.instructor {
            section = section.with_instructor(self.registry.intern(&instructor.name));
        }
        Ok(section)
    }
}

/// Converts a schedule record.
pub fn build_occurrence(record: &ScheduleRecord) -> Result<Occurrence, CatalogError> {
    let mut occurrence = Occurrence::new(
        parse_date(&record.start_date, "startDate")?,
        parse_date(&record.end_date, "endDate")?,
    );

    if let Some(name) = record.campus.as_deref() {
        match name.parse::<Campus>() {
            Ok(campus) => occurrence = occurrence.with_campus(campus),
            Err(_) => debug!(campus = name, "unknown campus"),
        }
    }

    for code in record.days.as_deref().unwrap_or_default().split(',') {
        let code = code.trim();
        if code.is_empty() {
            continue;
        }
        match code.parse::<WeekDay>() {
            Ok(day) => occurrence = occurrence.on(day),
            Err(_) => debug!(code, "dropping unknown weekday code"),
        }
    }

    occurrence.start_time = parse_time(record.start_time.as_deref(), "startTime")?;
    occurrence.end_time = parse_time(record.end_time.as_deref(), "endTime")?;
    occurrence.is_exam = record.is_exam;
    Ok(occurrence)
}

fn parse_time(text: Option<&str>, field: &'static str) -> Result<Option<NaiveTime>, CatalogError> {
    match text.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveTime::parse_from_str(text, "%H:%M")
            .map(Some)
            .map_err(|_| CatalogError::InvalidField {
                field,
                value: text.to_string(),
            }),
    }
}

/// Accepts `2025-01-06`, an ISO timestamp starting with a date, or the
/// catalog's long form `Tue Jan 07 00:00:00 PST 2025` (zone ignored).
fn parse_date(text: &str, field: &'static str) -> Result<NaiveDate, CatalogError> {
    let text = text.trim();
    if let Some(date) = text
        .get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
    {
        return Ok(date);
    }

    let mut parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() == 6 {
        parts.remove(4);
    }
    NaiveDateTime::parse_from_str(&parts.join(" "), "%a %b %d %H:%M:%S %Y")
        .map(|dt| dt.date())
        .map_err(|_| CatalogError::InvalidField {
            field,
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::records::InstructorRecord;

    fn schedule(days: &str, start: &str, end: &str) -> ScheduleRecord {
        ScheduleRecord {
            campus: Some("Burnaby".into()),
            days: Some(days.into()),
            start_time: Some(start.into()),
            end_time: Some(end.into()),
            start_date: "2025-01-06".into(),
            end_date: "2025-04-08".into(),
            is_exam: false,
        }
    }

    #[test]
    fn test_occurrence_fields() {
        let o = build_occurrence(&schedule("Mo, We, Fr", "8:30", "9:20")).unwrap();
        assert_eq!(o.campus, Some(Campus::Burnaby));
        assert_eq!(o.weekdays.len(), 3);
        assert!(o.weekdays.contains(&WeekDay::Friday));
        assert_eq!(o.start_time, NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(o.end_time, NaiveTime::from_hms_opt(9, 20, 0));
        assert_eq!(o.start_date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
    }

    #[test]
    fn test_missing_times_are_unknown() {
        let mut record = schedule("Mo", "", "");
        record.end_time = None;
        let o = build_occurrence(&record).unwrap();
        assert!(!o.is_timed());
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        let mut record = schedule("Mo, Xx", "10:00", "11:00");
        record.campus = Some("Richmond".into());
        let o = build_occurrence(&record).unwrap();
        assert_eq!(o.campus, None);
        assert_eq!(o.weekdays.iter().copied().collect::<Vec<_>>(), vec![WeekDay::Monday]);
    }

    #[test]
    fn test_long_date_form() {
        assert_eq!(
            parse_date("Tue Jan 07 00:00:00 PST 2025", "startDate").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 7).unwrap()
        );
        assert_eq!(
            parse_date("2025-04-08T07:00:00.000Z", "endDate").unwrap(),
            NaiveDate::from_ymd_opt(2025, 4, 8).unwrap()
        );
        assert!(matches!(
            parse_date("next tuesday", "startDate"),
            Err(CatalogError::InvalidField { field: "startDate", .. })
        ));
    }

    #[test]
    fn test_bad_time_is_an_error() {
        let err = build_occurrence(&schedule("Mo", "25:99", "11:00")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidField { field: "startTime", .. }));
    }

    #[test]
    fn test_section_fallbacks() {
        let loader = CourseLoader::new();
        let section = loader
            .build_section(&SectionRecord {
                text: "D101".into(),
                section_code: Some("XYZ".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(section.section_type, SectionType::Lecture);
        assert_eq!(section.associated_group, 0);
        assert!(!section.is_enrollment);
    }

    #[test]
    fn test_section_enrollment_and_group() {
        let loader = CourseLoader::new();
        let section = loader
            .build_section(&SectionRecord {
                text: "D100".into(),
                class_type: Some("e".into()),
                associated_class: Some(" 2 ".into()),
                section_code: Some("TUT".into()),
                ..Default::default()
            })
            .unwrap();
        assert!(section.is_enrollment);
        assert_eq!(section.associated_group, 2);
        assert_eq!(section.section_type, SectionType::Tutorial);

        let bad = loader.build_section(&SectionRecord {
            text: "D100".into(),
            associated_class: Some("two".into()),
            ..Default::default()
        });
        assert!(matches!(bad, Err(CatalogError::InvalidField { field: "associatedClass", .. })));
    }

    #[test]
    fn test_instructors_shared_across_courses() {
        let loader = CourseLoader::new();
        let taught_by = |name: &str| SectionRecord {
            text: "D100".into(),
            instructor: vec![InstructorRecord { name: name.into() }],
            ..Default::default()
        };
        let a = loader
            .build_course(&CourseRecord {
                department: "CMPT".into(),
                number: "120".into(),
                sections: vec![taught_by("Brian Fraser")],
            })
            .unwrap();
        let b = loader
            .build_course(&CourseRecord {
                department: "CMPT".into(),
                number: "125".into(),
                sections: vec![taught_by("Brian Fraser")],
            })
            .unwrap();

        assert_eq!(a.name(), "CMPT 120");
        assert!(Arc::ptr_eq(
            &a.sections()[0].instructors[0],
            &b.sections()[0].instructors[0]
        ));
        assert_eq!(loader.registry().len(), 1);
    }
}
