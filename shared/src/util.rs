//! Small helpers shared by the server and its clients

use serde::{Deserialize, Deserializer};

/// Prefix of every generated table identifier
pub const TABLE_PREFIX: &str = "T";

/// Build the full identifier set `T1..T{count}` in order
pub fn table_names(count: u32) -> Vec<String> {
    (1..=count).map(|n| format!("{TABLE_PREFIX}{n}")).collect()
}

/// Deserialize an integer that may arrive either as a JSON number or as a
/// numeric string (`5` and `"5"` are both accepted).
///
/// Form-driven clients post every field as a string.
pub fn flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    FlexibleInt::deserialize(deserializer).map(|v| v.0)
}

/// 内部辅助：同时支持数字和字符串格式
#[derive(Debug, Clone, Copy)]
struct FlexibleInt(i64);

impl<'de> Deserialize<'de> for FlexibleInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        use std::fmt;

        struct FlexibleVisitor;

        impl<'de> Visitor<'de> for FlexibleVisitor {
            type Value = FlexibleInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string containing an integer")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FlexibleInt(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(FlexibleInt)
                    .map_err(|_| de::Error::custom(format!("integer too large: {}", value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value
                    .trim()
                    .parse::<i64>()
                    .map(FlexibleInt)
                    .map_err(|_| de::Error::custom(format!("invalid integer: {}", value)))
            }
        }

        deserializer.deserialize_any(FlexibleVisitor)
    }
}
