use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Passenger name record: the booking's public reference code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pnr(String);

impl Pnr {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Pnr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// PNR generation seam; the surrounding system may bring its own scheme.
pub trait PnrGenerator: Send + Sync {
    fn generate(&self) -> Pnr;
}

/// Default scheme: `FLT` followed by the first uuid-v4 segment, uppercased.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidPnrGenerator;

impl PnrGenerator for UuidPnrGenerator {
    fn generate(&self) -> Pnr {
        let id = Uuid::new_v4().as_hyphenated().to_string();
        let head = id.split('-').next().unwrap_or_default().to_uppercase();
        Pnr(format!("FLT{head}"))
    }
}
