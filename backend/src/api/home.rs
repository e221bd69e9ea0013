//! Root greeting.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed greeting returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    #[schema(example = "World")]
    pub hello: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            hello: "World".to_owned(),
        }
    }
}

/// Greet the caller.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = Greeting)),
    tags = ["home"],
    operation_id = "home",
    security([])
)]
#[get("/")]
pub async fn home() -> web::Json<Greeting> {
    web::Json(Greeting::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn greets_the_world() {
        let app = test::init_service(App::new().service(home)).await;
        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/").to_request())
                .await;
        assert_eq!(body, json!({ "Hello": "World" }));
    }
}
