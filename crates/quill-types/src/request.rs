use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /doc`.
///
/// Clients are inconsistent about field casing (`WriteableBlobUri`,
/// `writeableBlobUri`, ...), so deserialization matches field names
/// case-insensitively. Missing fields become empty strings; the handler
/// rejects blanks with a specific message per field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendRequest {
    /// Capability URL with embedded write permission.
    pub writeable_blob_uri: String,
    /// Text to append as a single paragraph.
    pub content: String,
}

impl<'de> Deserialize<'de> for AppendRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RequestVisitor;

        impl<'de> Visitor<'de> for RequestVisitor {
            type Value = AppendRequest;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("an append request object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut writeable_blob_uri: Option<String> = None;
                let mut content: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.to_ascii_lowercase().as_str() {
                        "writeablebloburi" => {
                            if writeable_blob_uri.replace(map.next_value()?).is_some() {
                                return Err(serde::de::Error::duplicate_field("writeableBlobUri"));
                            }
                        }
                        "content" => {
                            if content.replace(map.next_value()?).is_some() {
                                return Err(serde::de::Error::duplicate_field("content"));
                            }
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(AppendRequest {
                    writeable_blob_uri: writeable_blob_uri.unwrap_or_default(),
                    content: content.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_map(RequestVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_pascal_case() {
        let req: AppendRequest =
            serde_json::from_str(r#"{"WriteableBlobUri":"https://x/blob","Content":"hello"}"#)
                .unwrap();
        assert_eq!(req.writeable_blob_uri, "https://x/blob");
        assert_eq!(req.content, "hello");
    }

    #[test]
    fn deserialize_camel_case() {
        let req: AppendRequest =
            serde_json::from_str(r#"{"writeableBlobUri":"https://x/blob","content":"hello"}"#)
                .unwrap();
        assert_eq!(req.writeable_blob_uri, "https://x/blob");
        assert_eq!(req.content, "hello");
    }

    #[test]
    fn deserialize_mixed_case() {
        let req: AppendRequest =
            serde_json::from_str(r#"{"WRITEABLEBLOBURI":"u","CONTENT":"c"}"#).unwrap();
        assert_eq!(req.writeable_blob_uri, "u");
        assert_eq!(req.content, "c");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let req: AppendRequest = serde_json::from_str(r#"{"content":"hello"}"#).unwrap();
        assert!(req.writeable_blob_uri.is_empty());
        assert_eq!(req.content, "hello");

        let req: AppendRequest = serde_json::from_str("{}").unwrap();
        assert!(req.writeable_blob_uri.is_empty());
        assert!(req.content.is_empty());
    }

    #[test]
    fn unknown_fields_ignored() {
        let req: AppendRequest =
            serde_json::from_str(r#"{"content":"c","extra":{"nested":[1,2]}}"#).unwrap();
        assert_eq!(req.content, "c");
    }

    #[test]
    fn non_string_value_is_an_error() {
        let err = serde_json::from_str::<AppendRequest>(r#"{"content":42}"#);
        assert!(err.is_err());
    }

    #[test]
    fn duplicate_field_is_an_error() {
        let err = serde_json::from_str::<AppendRequest>(r#"{"content":"a","Content":"b"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn non_object_body_is_an_error() {
        assert!(serde_json::from_str::<AppendRequest>("[1,2]").is_err());
        assert!(serde_json::from_str::<AppendRequest>("\"text\"").is_err());
    }

    #[test]
    fn serialize_uses_camel_case() {
        let req = AppendRequest {
            writeable_blob_uri: "https://x/blob".into(),
            content: "hi".into(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"writeableBlobUri\""));
        assert!(json.contains("\"content\""));
    }
}
