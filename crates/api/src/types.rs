//! Identifiers shared by every dpake crate

use core::fmt;
use core::str::FromStr;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named elliptic curve groups supported by the SPAKE2 engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GroupId {
    /// NIST P-256 (secp256r1)
    P256,
    /// NIST P-384 (secp384r1)
    P384,
    /// NIST P-521 (secp521r1)
    P521,
    /// The prime-order subgroup of edwards25519
    Edwards25519,
}

impl GroupId {
    /// All supported groups
    pub const ALL: [GroupId; 4] = [
        GroupId::P256,
        GroupId::P384,
        GroupId::P521,
        GroupId::Edwards25519,
    ];

    /// Canonical name of the group
    pub fn name(&self) -> &'static str {
        match self {
            GroupId::P256 => "secp256r1",
            GroupId::P384 => "secp384r1",
            GroupId::P521 => "secp521r1",
            GroupId::Edwards25519 => "edwards25519",
        }
    }

    /// Look a group up by any of its common names
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "secp256r1" | "P-256" | "prime256v1" => Ok(GroupId::P256),
            "secp384r1" | "P-384" => Ok(GroupId::P384),
            "secp521r1" | "P-521" => Ok(GroupId::P521),
            "edwards25519" | "ed25519" | "Ed25519" => Ok(GroupId::Edwards25519),
            _ => Err(Error::config(
                "GroupId::from_name",
                format!("unsupported group '{}'", name),
            )),
        }
    }
}

impl FromStr for GroupId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Role of a peer in a two-party exchange
///
/// Both sides must agree on which identity is A and which is B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PeerId {
    /// The initiating side, bound to identity A
    PeerA,
    /// The responding side, bound to identity B
    PeerB,
}

impl PeerId {
    /// The role of the other party
    pub fn peer(self) -> PeerId {
        match self {
            PeerId::PeerA => PeerId::PeerB,
            PeerId::PeerB => PeerId::PeerA,
        }
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeerId::PeerA => f.write_str("A"),
            PeerId::PeerB => f.write_str("B"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_lookup_by_alias() {
        assert_eq!(GroupId::from_name("secp256r1").unwrap(), GroupId::P256);
        assert_eq!("P-384".parse::<GroupId>().unwrap(), GroupId::P384);
        assert_eq!(GroupId::from_name("ed25519").unwrap(), GroupId::Edwards25519);
        for group in GroupId::ALL {
            assert_eq!(GroupId::from_name(group.name()).unwrap(), group);
        }
    }

    #[test]
    fn test_unknown_group_is_configuration_error() {
        let err = GroupId::from_name("brainpool256r1").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_peer_roles_are_opposite() {
        assert_eq!(PeerId::PeerA.peer(), PeerId::PeerB);
        assert_eq!(PeerId::PeerB.peer().peer(), PeerId::PeerB);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_group_id_serde() {
        let json = serde_json::to_string(&GroupId::P521).unwrap();
        let back: GroupId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GroupId::P521);
    }
}
