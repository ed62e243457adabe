//! Route parameter validators, as a closed set of kinds.
//!
//! Validators are identified by the fully-qualified class names the backend
//! registers them under.  Anything we don't recognise is kept as
//! [Validator::Unknown] so the fallback is visible at the type level.
use serde::Deserialize;

/// Resource a query validator filters on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum QueriesResource {
    Generic,
    Base,
    Buckets,
    Collections,
    Databases,
    Deployments,
    Documents,
    Executions,
    Files,
    Functions,
    Memberships,
    Projects,
    Teams,
    Users,
    Variables,
}

impl QueriesResource {
    fn from_suffix(suffix: &str) -> Option<Self> {
        Some(match suffix {
            "Base" => Self::Base,
            "Buckets" => Self::Buckets,
            "Collections" => Self::Collections,
            "Databases" => Self::Databases,
            "Deployments" => Self::Deployments,
            "Documents" => Self::Documents,
            "Executions" => Self::Executions,
            "Files" => Self::Files,
            "Functions" => Self::Functions,
            "Memberships" => Self::Memberships,
            "Projects" => Self::Projects,
            "Teams" => Self::Teams,
            "Users" => Self::Users,
            "Variables" => Self::Variables,
            _ => return None,
        })
    }
}

const QUERIES_CLASS: &str = "Appwrite\\Utopia\\Database\\Validator\\Queries";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(from = "ValidatorRepr")]
pub enum Validator {
    Password,
    Event,
    Cname,
    Domain,
    Email,
    Host,
    Ip,
    Origin,
    Url,
    Cron,
    CustomId,
    Key,
    Uid,
    HexColor,
    Length,
    Text,
    WhiteList,
    Boolean,
    Numeric,
    Integer,
    Range,
    Float,
    /// Owns the validator each element is checked against.
    ArrayList(Box<Validator>),
    Authorization,
    Permissions,
    Roles,
    Queries(QueriesResource),
    Assoc,
    Json,
    File,
    /// Any kind outside the known set, by class name.
    Unknown(String),
}

impl Validator {
    pub fn array_of(element: Self) -> Self {
        Self::ArrayList(Box::new(element))
    }

    /// The element validator, for array validators.
    pub fn element(&self) -> Option<&Self> {
        match self {
            Self::ArrayList(element) => Some(element),
            _ => None,
        }
    }
}

impl From<&str> for Validator {
    fn from(class: &str) -> Self {
        let class = class.trim_start_matches('\\');
        match class {
            "Appwrite\\Auth\\Validator\\Password" => Self::Password,
            "Appwrite\\Event\\Validator\\Event" => Self::Event,
            "Appwrite\\Network\\Validator\\CNAME" => Self::Cname,
            "Appwrite\\Network\\Validator\\Domain" => Self::Domain,
            "Appwrite\\Network\\Validator\\Email" => Self::Email,
            "Appwrite\\Network\\Validator\\Host" => Self::Host,
            "Appwrite\\Network\\Validator\\IP" => Self::Ip,
            "Appwrite\\Network\\Validator\\Origin" => Self::Origin,
            "Appwrite\\Network\\Validator\\URL" => Self::Url,
            "Appwrite\\Task\\Validator\\Cron" => Self::Cron,
            "Appwrite\\Utopia\\Database\\Validator\\CustomId"
            | "Utopia\\Database\\Validator\\CustomId" => Self::CustomId,
            "Utopia\\Database\\Validator\\Key" => Self::Key,
            "Utopia\\Database\\Validator\\UID" => Self::Uid,
            "Utopia\\Validator\\HexColor" => Self::HexColor,
            "Utopia\\Validator\\Length" => Self::Length,
            "Utopia\\Validator\\Text" => Self::Text,
            "Utopia\\Validator\\WhiteList" => Self::WhiteList,
            "Utopia\\Validator\\Boolean" => Self::Boolean,
            "Utopia\\Validator\\Numeric" => Self::Numeric,
            "Utopia\\Validator\\Integer" => Self::Integer,
            "Utopia\\Validator\\Range" => Self::Range,
            "Utopia\\Validator\\FloatValidator" => Self::Float,
            "Utopia\\Validator\\ArrayList" => Self::array_of(Self::Unknown(String::new())),
            "Utopia\\Database\\Validator\\Authorization" => Self::Authorization,
            "Utopia\\Database\\Validator\\Permissions" => Self::Permissions,
            "Utopia\\Database\\Validator\\Roles" => Self::Roles,
            "Utopia\\Validator\\Assoc" => Self::Assoc,
            "Utopia\\Validator\\JSON" => Self::Json,
            "Utopia\\Storage\\Validator\\File" => Self::File,
            QUERIES_CLASS => Self::Queries(QueriesResource::Generic),
            _ => class
                .strip_prefix(QUERIES_CLASS)
                .and_then(|rest| rest.strip_prefix('\\'))
                .and_then(QueriesResource::from_suffix)
                .map_or_else(|| Self::Unknown(class.to_owned()), Self::Queries),
        }
    }
}

/// Yaml shape: a class name, or `{ array: <validator> }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ValidatorRepr {
    Class(String),
    Array { array: Box<ValidatorRepr> },
}

impl From<ValidatorRepr> for Validator {
    fn from(repr: ValidatorRepr) -> Self {
        match repr {
            ValidatorRepr::Class(class) => Self::from(class.as_str()),
            ValidatorRepr::Array { array } => Self::array_of(Self::from(*array)),
        }
    }
}
