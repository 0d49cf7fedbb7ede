//! Machine-readable API description
//!
//! Served at /api/docs; /api redirects here.

use axum::Json;
use serde_json::{json, Value};

/// OpenAPI 3 document for the peak API
pub async fn openapi() -> Json<Value> {
    Json(document())
}

fn document() -> Value {
    let peak_schema = json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer", "readOnly": true },
            "name": { "type": "string" },
            "alt": { "type": "integer", "description": "Altitude in meters" },
            "lat": { "type": "number", "description": "Latitude in degrees" },
            "lon": { "type": "number", "description": "Longitude in degrees" }
        }
    });

    let new_peak_schema = json!({
        "type": "object",
        "required": ["name", "alt", "lat", "lon"],
        "properties": {
            "name": { "type": "string" },
            "alt": { "type": "integer" },
            "lat": { "type": "number" },
            "lon": { "type": "number" }
        }
    });

    let message_schema = json!({
        "type": "object",
        "properties": { "message": { "type": "string" } }
    });

    let error_schema = json!({
        "type": "object",
        "properties": { "error": { "type": "string" } }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Summit API",
            "description": "CRUD and bounding-box queries over named geographic peaks",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/api/peak": {
                "post": {
                    "summary": "Create a peak",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/NewPeak" } } }
                    },
                    "responses": {
                        "200": {
                            "description": "The created peak",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Peak" } } }
                        },
                        "400": { "description": "Malformed body" }
                    }
                }
            },
            "/api/peak/{id}": {
                "parameters": [{
                    "name": "id",
                    "in": "path",
                    "required": true,
                    "schema": { "type": "integer" }
                }],
                "get": {
                    "summary": "Fetch a peak by id",
                    "responses": {
                        "200": {
                            "description": "The peak",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Peak" } } }
                        },
                        "404": { "description": "No peak with that id" }
                    }
                },
                "put": {
                    "summary": "Overwrite a peak",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/NewPeak" } } }
                    },
                    "responses": {
                        "200": {
                            "description": "Confirmation message",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Message" } } }
                        },
                        "400": { "description": "Malformed body" },
                        "404": { "description": "No peak with that id" }
                    }
                },
                "delete": {
                    "summary": "Delete a peak",
                    "responses": {
                        "200": {
                            "description": "Confirmation message",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Message" } } }
                        },
                        "404": { "description": "No peak with that id" }
                    }
                }
            },
            "/api/peaks": {
                "get": {
                    "summary": "List every peak",
                    "responses": {
                        "200": {
                            "description": "All peaks",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Peak" }
                            } } }
                        }
                    }
                },
                "post": {
                    "summary": "List peaks inside a bounding box",
                    "description": "x bounds are latitudes (x1 the larger), y bounds are longitudes (y1 the smaller). The four comparisons are applied literally; an inverted box matches nothing.",
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": {
                            "type": "object",
                            "required": ["x1", "y1", "x2", "y2"],
                            "properties": {
                                "x1": { "type": "number" },
                                "y1": { "type": "number" },
                                "x2": { "type": "number" },
                                "y2": { "type": "number" }
                            }
                        } } }
                    },
                    "responses": {
                        "200": {
                            "description": "Matching peaks",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/Peak" }
                            } } }
                        },
                        "400": { "description": "Malformed body" }
                    }
                }
            },
            "/health": {
                "get": {
                    "summary": "Service health",
                    "responses": {
                        "200": { "description": "Status, version and peak count" },
                        "503": { "description": "Storage unavailable" }
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "Peak": peak_schema,
                "NewPeak": new_peak_schema,
                "Message": message_schema,
                "Error": error_schema
            }
        }
    })
}
