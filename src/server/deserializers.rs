use serde::{Deserialize, Deserializer};

pub fn first_page() -> i64 {
    1
}

// clients increment `page` blindly, anything that isn't an integer means the first page
pub fn deserialize_page<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or_else(first_page))
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "first_page", deserialize_with = "deserialize_page")]
    pub page: i64,
}
