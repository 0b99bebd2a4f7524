use serde_json::{json, Value};

fn error_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": "#/components/schemas/ErrorResponse" }
            }
        }
    })
}

fn listing_parameters() -> Value {
    json!([
        {
            "name": "category",
            "in": "query",
            "required": false,
            "description": "Category name; `Todas` or absent lists every category",
            "schema": { "type": "string" }
        },
        {
            "name": "search",
            "in": "query",
            "required": false,
            "description": "Case-insensitive term matched against name and description",
            "schema": { "type": "string" }
        },
        {
            "name": "page",
            "in": "query",
            "required": false,
            "description": "1-based page number",
            "schema": { "type": "integer", "minimum": 1, "maximum": crate::modules::MAX_PAGE }
        }
    ])
}

pub fn document() -> Value {
    json!({
        "paths": {
            "/products": {
                "get": {
                    "summary": "List one page of products",
                    "tags": ["Catalog"],
                    "parameters": listing_parameters(),
                    "responses": {
                        "200": {
                            "description": "One page of the filtered listing",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/FeedPage" }
                                }
                            }
                        },
                        "400": error_response("Invalid page number"),
                        "502": error_response("The CMS request failed")
                    }
                }
            },
            "/products/{id}": {
                "get": {
                    "summary": "Get a product by id",
                    "tags": ["Catalog"],
                    "parameters": [{
                        "name": "id",
                        "in": "path",
                        "required": true,
                        "schema": { "type": "string" }
                    }],
                    "responses": {
                        "200": {
                            "description": "The product",
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/Product" }
                                }
                            }
                        },
                        "404": error_response("No product with this id"),
                        "502": error_response("The CMS request failed")
                    }
                }
            },
            "/categories": {
                "get": {
                    "summary": "List category filter options",
                    "tags": ["Catalog"],
                    "responses": {
                        "200": {
                            "description": "`Todas` followed by distinct categories in first-seen order",
                            "content": {
                                "application/json": {
                                    "schema": { "type": "array", "items": { "type": "string" } }
                                }
                            }
                        },
                        "502": error_response("The CMS request failed")
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "FeedPage": {
                    "type": "object",
                    "properties": {
                        "page": { "type": "integer" },
                        "products": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/Product" }
                        },
                        "totalProducts": {
                            "type": "integer",
                            "description": "Products matching the filter across all pages"
                        },
                        "nextPage": {
                            "type": "integer",
                            "nullable": true,
                            "description": "Next page to request, null when exhausted or past the deepest page"
                        },
                        "truncated": {
                            "type": "boolean",
                            "description": "More products match than the deepest page reaches"
                        }
                    },
                    "required": ["page", "products", "totalProducts", "truncated"]
                },
                "Product": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string" },
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "imageUrl": { "type": "string" },
                        "category": { "type": "string" },
                        "coverImage": { "type": "string" },
                        "technicalSpecs": {
                            "type": "object",
                            "description": "Rich text document `{ raw: { children } }`"
                        },
                        "affiliateLinks": {
                            "type": "array",
                            "items": { "$ref": "#/components/schemas/AffiliateLink" }
                        },
                        "longDescription": {
                            "type": "object",
                            "description": "Rich text document `{ raw: { children } }`"
                        }
                    },
                    "required": ["id", "name"]
                },
                "AffiliateLink": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "url": { "type": "string" }
                    },
                    "required": ["name", "url"]
                }
            }
        }
    })
}
