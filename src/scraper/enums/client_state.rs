#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ClientState {
    Init,
    Connecting,
    Connected,
    Scraping,
    Done,
    Failed,
}
