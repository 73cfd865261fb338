#![allow(dead_code)]

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use api_server::handlers::{configure_graphql, configure_rest};
use api_server::state::AppState;
use inkwell_infra::JwtConfig;
use serde_json::{Value, json};

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn test_state() -> AppState {
    AppState::in_memory(JwtConfig::with_secret(TEST_SECRET))
}

/// GraphQL and REST routes mounted over one state, standing in for two
/// processes that share a database.
pub async fn init_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .configure(configure_graphql)
            .configure(configure_rest),
    )
    .await
}

pub fn graphql_request(query: &str, variables: Value, token: Option<&str>) -> actix_http::Request {
    let mut req = test::TestRequest::post()
        .uri("/graphql")
        .set_json(json!({ "query": query, "variables": variables }));
    if let Some(token) = token {
        req = req.insert_header(("Authorization", format!("Bearer {token}")));
    }
    req.to_request()
}

pub const CREATE_AUTHOR: &str = r#"
    mutation CreateAuthor($name: String!) {
        createAuthor(input: { name: $name }) { id name token }
    }
"#;

pub const CREATE_POST: &str = r#"
    mutation CreatePost($title: String!, $content: String!) {
        createPost(input: { title: $title, content: $content }) {
            id title content author { id name }
        }
    }
"#;

/// Create an author through GraphQL, returning `(id, token)`.
pub async fn create_author<S>(app: &S, name: &str) -> (String, String)
where
    S: Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = graphql_request(CREATE_AUTHOR, json!({ "name": name }), None);
    let body: Value = test::call_and_read_body_json(app, req).await;
    let created = &body["data"]["createAuthor"];
    (
        created["id"].as_str().expect("author id").to_string(),
        created["token"].as_str().expect("token").to_string(),
    )
}
