/// A UDP tracker endpoint.
///
/// `uri` is kept exactly as supplied and identifies the tracker in results.
#[derive(PartialEq, Eq, Hash, Clone, Debug)]
pub struct TrackerAddress {
    pub uri: String,
    pub host: String,
    pub port: u16,
}
