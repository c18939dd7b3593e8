use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boolean stored the way the visit sheet writes it: "Yes" / "No".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(from = "String", into = "String")]
pub enum YesNo {
    #[value(name = "Yes")]
    Yes,
    #[default]
    #[value(name = "No")]
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    /// Anything other than a case-insensitive "yes" reads as No.
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("yes") {
            YesNo::Yes
        } else {
            YesNo::No
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

impl From<bool> for YesNo {
    fn from(b: bool) -> Self {
        if b { YesNo::Yes } else { YesNo::No }
    }
}

impl From<String> for YesNo {
    fn from(s: String) -> Self {
        YesNo::parse(&s)
    }
}

impl From<YesNo> for String {
    fn from(v: YesNo) -> Self {
        v.as_str().to_string()
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
