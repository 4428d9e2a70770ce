//! Everything that depends on which side of the exchange we are
//!
//! Keeping these choices in one place means the blinding elements and the
//! transcript order can only be swapped here, never at a call site.

use dpake_api::PeerId;

/// The element a peer adds to its own message: A uses `M`, B uses `N`
pub(crate) fn own_blind<'a, E>(role: PeerId, m: &'a E, n: &'a E) -> &'a E {
    match role {
        PeerId::PeerA => m,
        PeerId::PeerB => n,
    }
}

/// The element removed from the peer's message: the peer's own blind
pub(crate) fn peer_blind<'a, E>(role: PeerId, m: &'a E, n: &'a E) -> &'a E {
    own_blind(role.peer(), m, n)
}

/// Arrange two messages as `(message from A, message from B)`
pub(crate) fn order_messages<'a>(
    role: PeerId,
    own: &'a [u8],
    peer: &'a [u8],
) -> (&'a [u8], &'a [u8]) {
    match role {
        PeerId::PeerA => (own, peer),
        PeerId::PeerB => (peer, own),
    }
}
