/// Raw infohash input as handed over by a caller.
///
/// Each string, whether single or inside `Many`, may hold several
/// comma-separated infohashes.
#[derive(PartialEq, Eq, Clone, Debug, Default)]
pub enum InfohashInput {
    #[default]
    None,
    Single(String),
    Many(Vec<String>),
}
