//! Strongly-typed identifiers.
//!
//! Neither identifier is ever minted here: an `OrderId` always comes from the
//! caller and a `PackageId` always comes from the upstream order payload.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of an order (UUID form).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for OrderId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for OrderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s).map_err(|e| DomainError::invalid_id(format!("OrderId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// Identifier of a package within an order.
///
/// Opaque: the upstream service hands these out and this service only echoes
/// them back, so no format is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PackageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_parses_hyphenated_uuid() {
        let id: OrderId = "7e290683-d67b-4f96-a940-44bef1f69d21".parse().unwrap();
        assert_eq!(id.to_string(), "7e290683-d67b-4f96-a940-44bef1f69d21");
    }

    #[test]
    fn order_id_rejects_garbage() {
        let err = "valor-invalido".parse::<OrderId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(msg) if msg.starts_with("OrderId")));
    }

    #[test]
    fn package_id_is_transparent_in_json() {
        let id: PackageId = serde_json::from_str(r#""pkg-1""#).unwrap();
        assert_eq!(id.as_str(), "pkg-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""pkg-1""#);
    }
}
