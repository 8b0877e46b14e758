use serde::{Deserialize, Serialize};

/// Reply from the submission backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmitTestResponse {
    #[serde(deserialize_with = "deserialize_test_id")]
    pub test_id: String,
}

/// A published test as seen from the publish view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedTest {
    pub test_id: String,
    pub link: String,
}

// Some backends return numeric ids.
fn deserialize_test_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct TestIdVisitor;

    impl<'de> Visitor<'de> for TestIdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer test id")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(TestIdVisitor)
}
