use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::Json;
use serde_json::{json, Value};

const DOCS_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>pdf-expert API</title>
</head>
<body>
  <h1>pdf-expert API</h1>
  <p>Machine-readable description: <a href="/docs/openapi.json">/docs/openapi.json</a></p>
  <h2>POST /analyze</h2>
  <p>Multipart upload with a single <code>file</code> field holding a PDF. Returns the word count of the extracted text.</p>
  <pre>curl -F "file=@report.pdf" http://localhost:8080/analyze</pre>
  <h2>GET /metrics</h2>
  <p>Prometheus counters and latency histogram.</p>
  <h2>GET /health</h2>
  <p>Liveness, version and uptime.</p>
</body>
</html>
"#;

/// `GET /docs`
pub async fn docs_page() -> Html<&'static str> {
    Html(DOCS_PAGE)
}

/// `GET /docs/openapi.json`
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-cache")],
        Json(openapi_document()),
    )
}

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } }
        }
    })
}

pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "pdf-expert",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Extracts text from uploaded PDF files and counts words."
        },
        "paths": {
            "/analyze": {
                "post": {
                    "summary": "Analyze a PDF",
                    "operationId": "analyzePdf",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "multipart/form-data": {
                                "schema": {
                                    "type": "object",
                                    "required": ["file"],
                                    "properties": {
                                        "file": { "type": "string", "format": "binary" }
                                    }
                                }
                            }
                        }
                    },
                    "responses": {
                        "200": {
                            "description": "Analysis completed",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/AnalyzeResponse" }
                                }
                            }
                        },
                        "400": error_response("Missing or malformed upload"),
                        "422": error_response("The document has no extractable text"),
                        "500": error_response("Staging or extraction failure")
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Service health",
                    "operationId": "health",
                    "responses": { "200": { "description": "Service is up" } }
                }
            },
            "/metrics": {
                "get": {
                    "summary": "Prometheus metrics",
                    "operationId": "metrics",
                    "responses": {
                        "200": {
                            "description": "Text exposition format",
                            "content": { "text/plain": { "schema": { "type": "string" } } }
                        }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "AnalyzeResponse": {
                    "type": "object",
                    "required": ["success", "data", "request_id"],
                    "properties": {
                        "success": { "type": "boolean", "example": true },
                        "data": {
                            "type": "object",
                            "required": ["file", "word_count", "status"],
                            "properties": {
                                "file": { "type": "string", "example": "report.pdf" },
                                "word_count": { "type": "integer", "minimum": 0, "example": 1234 },
                                "status": { "type": "string", "example": "completed" }
                            }
                        },
                        "request_id": { "type": "string", "format": "uuid" }
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "required": ["success", "error", "request_id"],
                    "properties": {
                        "success": { "type": "boolean", "example": false },
                        "error": { "type": "string" },
                        "request_id": { "type": "string", "format": "uuid" }
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
    fn test_openapi_document_lists_routes() {
        let doc = openapi_document();

        assert_eq!(doc["openapi"], "3.0.3");
        assert!(doc["paths"]["/analyze"]["post"].is_object());
        assert!(doc["paths"]["/metrics"]["get"].is_object());
        assert!(doc["paths"]["/health"]["get"].is_object());
        assert!(doc["paths"]["/analyze"]["post"]["responses"]["422"].is_object());
    }
}
