//! Raw catalog records.
//!
//! Shapes of the course-outlines catalog as delivered to the loader: a
//! section listing entry merged with that section's outline. Field names
//! follow the catalog's camelCase spelling; everything the catalog may omit
//! is optional.

use serde::{Deserialize, Serialize};

/// One course as listed in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Department code, e.g. `CMPT`.
    pub department: String,
    /// Course number, e.g. `120`.
    pub number: String,
    /// Sections offered.
    #[serde(default)]
    pub sections: Vec<SectionRecord>,
}

impl CourseRecord {
    /// Display name, `<DEPARTMENT> <NUMBER>`.
    pub fn name(&self) -> String {
        format!("{} {}", self.department, self.number)
    }
}

/// A section listing entry with its outline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    /// Section name, e.g. `D100`.
    pub text: String,
    /// `"e"` for enrollment sections, `"n"` otherwise.
    #[serde(default)]
    pub class_type: Option<String>,
    /// Associated group number, as text.
    #[serde(default)]
    pub associated_class: Option<String>,
    /// Section code, e.g. `LEC`.
    #[serde(default)]
    pub section_code: Option<String>,
    /// Weekly meetings.
    #[serde(default)]
    pub course_schedule: Vec<ScheduleRecord>,
    /// Instructors.
    #[serde(default)]
    pub instructor: Vec<InstructorRecord>,
}

/// One course schedule entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    #[serde(default)]
    pub campus: Option<String>,
    /// Comma separated weekday codes, e.g. `"Mo, We"`.
    #[serde(default)]
    pub days: Option<String>,
    /// `H:mm`.
    #[serde(default)]
    pub start_time: Option<String>,
    /// `H:mm`.
    #[serde(default)]
    pub end_time: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub is_exam: bool,
}

/// Instructor listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstructorRecord {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_catalog_shape() {
        let record: CourseRecord = serde_json::from_value(json!({
            "department": "CMPT",
            "number": "120",
            "sections": [{
                "text": "D100",
                "classType": "e",
                "associatedClass": "1",
                "sectionCode": "LEC",
                "courseSchedule": [{
                    "campus": "Burnaby",
                    "days": "Mo, We",
                    "startTime": "10:30",
                    "endTime": "11:20",
                    "startDate": "2025-01-06",
                    "endDate": "2025-04-08",
                    "isExam": false
                }],
                "instructor": [{ "name": "Diana Cukierman" }]
            }]
        }))
        .unwrap();

        assert_eq!(record.name(), "CMPT 120");
        let section = &record.sections[0];
        assert_eq!(section.class_type.as_deref(), Some("e"));
        assert_eq!(section.course_schedule[0].days.as_deref(), Some("Mo, We"));
        assert_eq!(section.instructor[0].name, "Diana Cukierman");
    }

    #[test]
    fn test_optional_fields_default() {
        let section: SectionRecord = serde_json::from_value(json!({ "text": "D101" })).unwrap();
        assert!(section.class_type.is_none());
        assert!(section.course_schedule.is_empty());
        assert!(section.instructor.is_empty());
    }
}
