use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub code: String,
    pub title: String,
    pub department: Option<String>,
}

impl Course {
    pub const UNKNOWN_CODE: &'static str = "UNKNOWN";

    /// builds a course from raw cell text. a blank code becomes [`Course::UNKNOWN_CODE`]
    /// and a blank title falls back to the code.
    pub fn new(code: &str, title: &str, department: Option<&str>) -> Course {
        let code = match code.trim() {
            "" => Self::UNKNOWN_CODE.to_string(),
            c => c.to_string(),
        };
        let title = match title.trim() {
            "" => code.clone(),
            t => t.to_string(),
        };
        let department = department
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from);
        Course {
            code,
            title,
            department,
        }
    }
}

impl Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.title)
    }
}
