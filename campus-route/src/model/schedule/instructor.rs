use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Instructor {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
}

impl Instructor {
    /// splits a display name on whitespace: the first token is the first name and
    /// the remaining tokens form the last name. returns None for a blank name.
    pub fn from_full_name(full_name: &str) -> Option<Instructor> {
        let mut tokens = full_name.split_whitespace();
        let first_name = tokens.next()?.to_string();
        let last_name = tokens.collect::<Vec<_>>().join(" ");
        Some(Instructor {
            first_name,
            last_name,
            email: None,
        })
    }

    pub fn full_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}
