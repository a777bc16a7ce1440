use serde_json::{json, Value};

/// Static OpenAPI 3 description of the append operation. Served at
/// `/swagger.json`, which is where the plugin manifest points.
pub fn document() -> Value {
    json!({
        "openapi": "3.0.1",
        "info": {
            "title": "quill",
            "description": "Creates or appends content to a Microsoft Word document",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "paths": {
            "/doc": {
                "post": {
                    "operationId": "AppendToDocument",
                    "description": "Appends the given text to a Word document stored as a blob.",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": {
                                    "type": "object",
                                    "properties": {
                                        "writeableBlobUri": {
                                            "type": "string",
                                            "description": "Capability URL of the target blob, with embedded write permission."
                                        },
                                        "content": {
                                            "type": "string",
                                            "description": "Text to append as a single paragraph."
                                        }
                                    },
                                    "required": ["writeableBlobUri", "content"]
                                }
                            }
                        }
                    },
                    "responses": {
                        "201": { "description": "Confirms that the content was written." },
                        "400": { "description": "A required field was missing or blank." },
                        "500": { "description": "The append workflow failed." }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_the_append_operation() {
        let doc = document();
        assert_eq!(doc["openapi"], "3.0.1");
        let post = &doc["paths"]["/doc"]["post"];
        assert_eq!(post["operationId"], "AppendToDocument");
        let required = post["requestBody"]["content"]["application/json"]["schema"]["required"]
            .as_array()
            .unwrap();
        assert_eq!(required.len(), 2);
    }
}
