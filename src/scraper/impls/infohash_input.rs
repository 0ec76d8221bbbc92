use crate::scraper::enums::infohash_input::InfohashInput;

impl From<&str> for InfohashInput {
    fn from(value: &str) -> Self {
        InfohashInput::Single(value.to_string())
    }
}

impl From<String> for InfohashInput {
    fn from(value: String) -> Self {
        InfohashInput::Single(value)
    }
}

impl From<Vec<String>> for InfohashInput {
    fn from(values: Vec<String>) -> Self {
        InfohashInput::Many(values)
    }
}

impl From<Vec<&str>> for InfohashInput {
    fn from(values: Vec<&str>) -> Self {
        InfohashInput::Many(values.into_iter().map(String::from).collect())
    }
}

impl From<&[String]> for InfohashInput {
    fn from(values: &[String]) -> Self {
        InfohashInput::Many(values.to_vec())
    }
}

impl<T: Into<InfohashInput>> From<Option<T>> for InfohashInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(InfohashInput::None, Into::into)
    }
}
