//! The per-handshake protocol state machine
//!
//! ```text
//! Created --generate_message--> MessageReady --process_message--> SecretDerived
//! ```
//!
//! Any call that does not fit the current state, and any rejected peer
//! message, moves the context to `Failed`. A failed context cannot be
//! reused; the caller starts over with a fresh one.

use core::fmt;
use core::mem;

use dpake_algorithms::EcGroup;
use dpake_api::{Error, PeerId, Result};
use dpake_common::{barrier, EphemeralSecret, SecretVec};
use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::params::Parameters;
use crate::role::{order_messages, own_blind, peer_blind};
use crate::secret::SharedSecret;
use crate::transcript::Transcript;

/// Observable state of a [`Context`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Freshly created, no message generated yet
    Created,
    /// Own message generated, waiting for the peer's
    MessageReady,
    /// Shared secret returned; nothing left to do
    SecretDerived,
    /// An operation failed; the context is unusable
    Failed,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            State::Created => "Created",
            State::MessageReady => "MessageReady",
            State::SecretDerived => "SecretDerived",
            State::Failed => "Failed",
        })
    }
}

enum Stage<G: EcGroup> {
    Created,
    MessageReady {
        x: EphemeralSecret<G::Scalar>,
        own_message: Vec<u8>,
    },
    SecretDerived,
    Failed,
}

impl<G: EcGroup> Stage<G> {
    fn state(&self) -> State {
        match self {
            Stage::Created => State::Created,
            Stage::MessageReady { .. } => State::MessageReady,
            Stage::SecretDerived => State::SecretDerived,
            Stage::Failed => State::Failed,
        }
    }
}

/// One side of a single SPAKE2 handshake
pub struct Context<'p, G: EcGroup> {
    role: PeerId,
    params: &'p Parameters<G>,
    stage: Stage<G>,
}

impl<'p, G: EcGroup> Context<'p, G> {
    /// Start a handshake in `role` using shared `params`
    pub fn new(role: PeerId, params: &'p Parameters<G>) -> Self {
        debug!(role = %role, group = %G::ID, state = %State::Created, "SPAKE2 context created");
        Self {
            role,
            params,
            stage: Stage::Created,
        }
    }

    /// The role this context plays
    pub fn role(&self) -> PeerId {
        self.role
    }

    /// Current state
    pub fn state(&self) -> State {
        self.stage.state()
    }

    /// Produce this side's message
    ///
    /// Samples a fresh ephemeral scalar `x` and returns the encoding of
    /// `x*G + w*M` for role A or `x*G + w*N` for role B. Only valid once,
    /// on a freshly created context.
    pub fn generate_message<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<Vec<u8>> {
        const CONTEXT: &str = "Context::generate_message";

        let previous = mem::replace(&mut self.stage, Stage::Failed);
        if !matches!(previous, Stage::Created) {
            return Err(self.out_of_order(CONTEXT, previous.state()));
        }

        let x = EphemeralSecret::new(G::random_scalar(rng)?);
        let blind = own_blind(self.role, self.params.m(), self.params.n());
        let blinding = EphemeralSecret::new(G::mul(blind, self.params.w()));
        let public = EphemeralSecret::new(G::mul_base(&x));
        let own_message = G::encode(&G::add(&public, &blinding));

        self.stage = Stage::MessageReady {
            x,
            own_message: own_message.clone(),
        };
        self.transition(State::Created, State::MessageReady);
        Ok(own_message)
    }

    /// Consume the peer's message and derive the shared secret
    ///
    /// The peer element is decoded and must not be the identity, must lie
    /// on the curve and must lie in the prime-order subgroup. Every failure
    /// is terminal for this context.
    pub fn process_message(&mut self, peer_message: &[u8]) -> Result<SharedSecret> {
        const CONTEXT: &str = "Context::process_message";

        let (x, own_message) = match mem::replace(&mut self.stage, Stage::Failed) {
            Stage::MessageReady { x, own_message } => (x, own_message),
            other => return Err(self.out_of_order(CONTEXT, other.state())),
        };

        let peer = G::decode(peer_message).map_err(|err| {
            warn!(role = %self.role, group = %G::ID, len = peer_message.len(), "rejected undecodable peer message");
            err.with_context(CONTEXT)
        })?;
        let peer = EphemeralSecret::new(peer);
        self.validate_peer(&peer)?;

        let blind = peer_blind(self.role, self.params.m(), self.params.n());
        let unblinding = EphemeralSecret::new(G::mul(blind, self.params.w()));
        let unblinded = EphemeralSecret::new(G::add(&peer, &G::neg(&unblinding)));
        let shared = EphemeralSecret::new(G::mul(&unblinded, &x));
        if G::is_identity(&shared) {
            return Err(self.reject("shared element is the identity"));
        }

        let shared_bytes = SecretVec::new(G::encode(&shared));
        let w_bytes = G::scalar_to_bytes(self.params.w());
        let (message_a, message_b) = order_messages(self.role, &own_message, peer_message);
        let transcript = Transcript::new(&[
            self.params.id_a(),
            self.params.id_b(),
            message_a,
            message_b,
            shared_bytes.as_slice(),
            w_bytes.as_slice(),
        ]);
        let secret = self.params.derive_secret(transcript.as_bytes())?;

        self.stage = Stage::SecretDerived;
        self.transition(State::MessageReady, State::SecretDerived);
        Ok(secret)
    }

    fn validate_peer(&self, element: &G::Element) -> Result<()> {
        if G::is_identity(element) {
            return Err(self.reject("peer element is the identity"));
        }
        if !G::is_on_curve(element) {
            return Err(self.reject("peer element is not on the curve"));
        }
        if G::COFACTOR > 1 && !G::is_torsion_free(element) {
            return Err(self.reject("peer element is outside the prime-order subgroup"));
        }
        Ok(())
    }

    fn reject(&self, reason: &'static str) -> Error {
        warn!(role = %self.role, group = %G::ID, reason, "rejected peer element");
        Error::invalid_peer("Context::process_message", reason)
    }

    fn out_of_order(&self, context: &'static str, state: State) -> Error {
        warn!(role = %self.role, group = %G::ID, %state, operation = context, "SPAKE2 call out of sequence");
        Error::state(context, format!("not allowed in state {}", state))
    }

    fn transition(&self, from: State, to: State) {
        debug!(role = %self.role, group = %G::ID, %from, %to, "SPAKE2 state transition");
    }
}

impl<G: EcGroup> Drop for Context<'_, G> {
    fn drop(&mut self) {
        if let Stage::MessageReady { x, .. } = &mut self.stage {
            barrier::with_barriers(|| (**x).zeroize());
        }
    }
}

impl<G: EcGroup> fmt::Debug for Context<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("role", &self.role)
            .field("group", &G::ID)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}
