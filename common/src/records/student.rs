use std::fmt;
use std::str::FromStr;

use crate::error::{LibraryError, Result};
use crate::records::{Record, normalize_text};

/// School year a student is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    First,
    Second,
    Third,
    Fourth,
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Course::First => "1st",
            Course::Second => "2nd",
            Course::Third => "3rd",
            Course::Fourth => "4th",
        };
        f.write_str(name)
    }
}

impl FromStr for Course {
    type Err = LibraryError;

    /// Accepts `1`-`4`, the ordinal (`1st`) or the word (`first`), case-insensitive.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "1st" | "first" => Ok(Course::First),
            "2" | "2nd" | "second" => Ok(Course::Second),
            "3" | "3rd" | "third" => Ok(Course::Third),
            "4" | "4th" | "fourth" => Ok(Course::Fourth),
            _ => Err(LibraryError::invalid(format!("unknown course: {s}"))),
        }
    }
}

/// A library member. Identity is the email, compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    email: String,
    course: Course,
}

impl Student {
    /// Builds a validated student.
    ///
    /// The name is trimmed and inner whitespace collapsed; the email is trimmed
    /// and must look like `local@domain.tld`.
    pub fn new(name: &str, email: &str, course: Course) -> Result<Self> {
        let name = normalize_text(name);
        if name.is_empty() {
            return Err(LibraryError::invalid("a student's name cannot be blank"));
        }

        let email = email.trim();
        validate_email(email)?;

        Ok(Self {
            name,
            email: email.to_owned(),
            course,
        })
    }

    /// A student carrying only an email, for lookups against a collection.
    pub fn probe(email: &str) -> Result<Self> {
        let email = email.trim();
        validate_email(email)?;

        Ok(Self {
            name: String::new(),
            email: email.to_owned(),
            course: Course::First,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn course(&self) -> Course {
        self.course
    }
}

impl Record for Student {
    const KIND: &'static str = "student";

    type Key<'a> = &'a str;

    fn key(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>, {} course", self.name, self.email, self.course)
    }
}

fn validate_email(email: &str) -> Result<()> {
    let invalid = || LibraryError::invalid(format!("malformed email: `{email}`"));

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid());
    };

    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }

    let dotted = domain
        .split_once('.')
        .is_some_and(|(host, _)| !host.is_empty())
        && !domain.ends_with('.');
    if !dotted {
        return Err(invalid());
    }

    Ok(())
}
