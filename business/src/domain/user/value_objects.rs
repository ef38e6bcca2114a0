use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
            Gender::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}

/// A selectable interest on the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interest {
    pub id: &'static str,
    pub name: &'static str,
    pub value: &'static str,
}

pub const INTERESTS: [Interest; 8] = [
    Interest { id: "1", name: "Technology", value: "technology" },
    Interest { id: "2", name: "Sports", value: "sports" },
    Interest { id: "3", name: "Music", value: "music" },
    Interest { id: "4", name: "Movies", value: "movies" },
    Interest { id: "5", name: "Travel", value: "travel" },
    Interest { id: "6", name: "Cooking", value: "cooking" },
    Interest { id: "7", name: "Reading", value: "reading" },
    Interest { id: "8", name: "Art", value: "art" },
];

pub fn is_known_interest(value: &str) -> bool {
    INTERESTS.iter().any(|i| i.value == value)
}
