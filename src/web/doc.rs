//! OpenAPI documentation for the board endpoints.

use utoipa::OpenApi;

use crate::web::dto::{BoardResponse, CreateBoardRequest, MessageResponse};
use crate::web::error::ErrorBody;

/// OpenAPI document for the Web API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Board API",
        description = "List and create bulletin board posts."
    ),
    paths(
        crate::web::handlers::board::list_boards,
        crate::web::handlers::board::create_board,
    ),
    components(schemas(BoardResponse, CreateBoardRequest, MessageResponse, ErrorBody)),
    tags(
        (name = "boards", description = "Board entry operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_board_paths() {
        let doc = ApiDoc::openapi();
        let path = doc.paths.paths.get("/boards/").expect("boards path");
        let json = serde_json::to_value(path).unwrap();

        assert!(json.get("get").is_some());
        assert!(json.get("post").is_some());
    }

    #[test]
    fn test_openapi_registers_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().unwrap().schemas;

        assert!(schemas.contains_key("BoardResponse"));
        assert!(schemas.contains_key("CreateBoardRequest"));
        assert!(schemas.contains_key("ErrorBody"));
    }
}
