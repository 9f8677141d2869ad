use serde::{Deserialize, Serialize};

/// Kind of indicator of compromise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IocType {
    Ip,
    Domain,
    Hash,
    Email,
    Url,
    FilePath,
    #[serde(other)]
    Unknown,
}

impl IocType {
    pub fn code(&self) -> &'static str {
        match self {
            IocType::Ip => "ip",
            IocType::Domain => "domain",
            IocType::Hash => "hash",
            IocType::Email => "email",
            IocType::Url => "url",
            IocType::FilePath => "file_path",
            IocType::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IocType::Ip => "IP Address",
            IocType::Domain => "Domain",
            IocType::Hash => "File Hash",
            IocType::Email => "Email",
            IocType::Url => "URL",
            IocType::FilePath => "File Path",
            IocType::Unknown => "Unknown",
        }
    }

    /// Types offered in the search filter
    pub fn searchable() -> Vec<IocType> {
        vec![
            IocType::Ip,
            IocType::Domain,
            IocType::Hash,
            IocType::Email,
            IocType::Url,
        ]
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "ip" => IocType::Ip,
            "domain" => IocType::Domain,
            "hash" => IocType::Hash,
            "email" => IocType::Email,
            "url" => IocType::Url,
            "file_path" => IocType::FilePath,
            _ => IocType::Unknown,
        }
    }
}
