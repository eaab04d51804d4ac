//! Connection Classifications
//!
//! Every live connection falls somewhere in a small lattice: client or
//! server side, with or without a joined player. Hosts tag connections with
//! the most specific type; plugins filter with [`ConnectionType::includes`]
//! instead of matching exact variants.
use serde::{Deserialize, Serialize};

use crate::command::parameter::NamedVariants;

/// The possible engine connection types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectionType {
    /// Any connection at all.
    All,
    /// A connection on the client side.
    ClientSide,
    /// A client-side connection whose player has joined a server.
    ClientPlayer,
    /// A connection on either side whose player has joined a server.
    Player,
    /// A connection on the server side.
    ServerSide,
    /// A server-side connection whose player has joined a server.
    ServerPlayer,
}

impl ConnectionType {
    /// Every connection type, from broadest to most specific.
    pub const VALUES: &'static [ConnectionType] = &[
        ConnectionType::All,
        ConnectionType::ClientSide,
        ConnectionType::ClientPlayer,
        ConnectionType::Player,
        ConnectionType::ServerSide,
        ConnectionType::ServerPlayer,
    ];

    /// Whether a connection tagged `other` also counts as `self`.
    ///
    /// `ClientPlayer` and `ServerPlayer` sit under both their side and
    /// `Player`; `All` includes everything.
    pub fn includes(self, other: ConnectionType) -> bool {
        match self {
            ConnectionType::All => true,
            ConnectionType::ClientSide => {
                matches!(other, ConnectionType::ClientSide | ConnectionType::ClientPlayer)
            },
            ConnectionType::ClientPlayer => matches!(other, ConnectionType::ClientPlayer),
            ConnectionType::Player => matches!(
                other,
                ConnectionType::Player | ConnectionType::ClientPlayer | ConnectionType::ServerPlayer
            ),
            ConnectionType::ServerSide => {
                matches!(other, ConnectionType::ServerSide | ConnectionType::ServerPlayer)
            },
            ConnectionType::ServerPlayer => matches!(other, ConnectionType::ServerPlayer),
        }
    }
}

impl NamedVariants for ConnectionType {
    const VARIANTS: &'static [ConnectionType] = ConnectionType::VALUES;

    fn name(&self) -> &'static str {
        match self {
            ConnectionType::All => "all",
            ConnectionType::ClientSide => "client_side",
            ConnectionType::ClientPlayer => "client_player",
            ConnectionType::Player => "player",
            ConnectionType::ServerSide => "server_side",
            ConnectionType::ServerPlayer => "server_player",
        }
    }
}
