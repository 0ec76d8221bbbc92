use crate::scraper::enums::client_state::ClientState;
use crate::scraper::structs::connection::Connection;

pub struct ProtocolClient {
    pub(crate) connection: Connection,
    pub(crate) state: ClientState,
}
