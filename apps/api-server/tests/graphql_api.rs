mod common;

use actix_web::{http::StatusCode, test};
use inkwell_core::ports::TokenService;
use inkwell_infra::{JwtConfig, JwtTokenService};
use serde_json::{Value, json};
use uuid::Uuid;

use common::{CREATE_POST, create_author, graphql_request, init_app, test_state};

const AUTHORS: &str = "{ authors { id name } }";

#[actix_web::test]
async fn test_query_reports_api_up() {
    let app = init_app(test_state()).await;

    let body: Value =
        test::call_and_read_body_json(&app, graphql_request("{ test }", json!({}), None)).await;

    assert_eq!(body["data"]["test"], "API up and running!");
}

#[actix_web::test]
async fn test_created_author_token_decodes_to_author_id() {
    let app = init_app(test_state()).await;

    let (id, token) = create_author(&app, "Ada Lovelace").await;

    let tokens = JwtTokenService::new(JwtConfig::with_secret(common::TEST_SECRET));
    let claims = tokens.validate_token(&token).unwrap();
    assert_eq!(claims.author_id.to_string(), id);
}

#[actix_web::test]
async fn test_author_round_trips_name() {
    let app = init_app(test_state()).await;
    let (id, _) = create_author(&app, "Grace Hopper").await;

    let query = "query Author($id: ID!) { author(id: $id) { id name posts { id } } }";
    let body: Value =
        test::call_and_read_body_json(&app, graphql_request(query, json!({ "id": id }), None))
            .await;

    assert_eq!(body["data"]["author"]["name"], "Grace Hopper");
    assert_eq!(body["data"]["author"]["posts"], json!([]));
}

#[actix_web::test]
async fn test_unknown_or_malformed_ids_resolve_to_null() {
    let app = init_app(test_state()).await;

    let query = "query Lookup($id: ID!) { author(id: $id) { id } post(id: $id) { id } }";
    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
        let body: Value =
            test::call_and_read_body_json(&app, graphql_request(query, json!({ "id": id }), None))
                .await;

        assert!(body.get("errors").is_none(), "unexpected errors: {body}");
        assert_eq!(body["data"]["author"], Value::Null);
        assert_eq!(body["data"]["post"], Value::Null);
    }
}

#[actix_web::test]
async fn test_authors_without_token_is_unauthenticated() {
    let app = init_app(test_state()).await;
    create_author(&app, "Ada").await;

    let body: Value =
        test::call_and_read_body_json(&app, graphql_request(AUTHORS, json!({}), None)).await;

    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
    assert_eq!(body["errors"][0]["extensions"]["http"]["status"], 401);
}

#[actix_web::test]
async fn test_authors_with_token_lists_current_author() {
    let app = init_app(test_state()).await;
    let (id, token) = create_author(&app, "Ada").await;
    create_author(&app, "Grace").await;

    let body: Value =
        test::call_and_read_body_json(&app, graphql_request(AUTHORS, json!({}), Some(&token)))
            .await;

    let authors = body["data"]["authors"].as_array().expect("authors list");
    assert_eq!(authors.len(), 2);
    assert!(authors.iter().any(|a| a["id"] == id.as_str()));
}

#[actix_web::test]
async fn test_create_post_attributes_post_to_token_author() {
    let app = init_app(test_state()).await;
    let (author_id, token) = create_author(&app, "Ada").await;

    let vars = json!({ "title": "Notes", "content": "On the Analytical Engine" });
    let body: Value =
        test::call_and_read_body_json(&app, graphql_request(CREATE_POST, vars, Some(&token)))
            .await;

    let post = &body["data"]["createPost"];
    assert_eq!(post["author"]["id"], author_id.as_str());
    assert_eq!(post["author"]["name"], "Ada");

    let query = "query Post($id: ID!) { post(id: $id) { title content author { id } } }";
    let body: Value = test::call_and_read_body_json(
        &app,
        graphql_request(query, json!({ "id": post["id"] }), None),
    )
    .await;

    assert_eq!(body["data"]["post"]["title"], "Notes");
    assert_eq!(body["data"]["post"]["content"], "On the Analytical Engine");
    assert_eq!(body["data"]["post"]["author"]["id"], author_id.as_str());
}

#[actix_web::test]
async fn test_create_post_without_token_is_unauthenticated() {
    let app = init_app(test_state()).await;

    let vars = json!({ "title": "Anonymous", "content": "Nope" });
    let body: Value =
        test::call_and_read_body_json(&app, graphql_request(CREATE_POST, vars, None)).await;

    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
}

#[actix_web::test]
async fn test_create_post_rejects_client_supplied_author() {
    let app = init_app(test_state()).await;
    let (_, token) = create_author(&app, "Ada").await;

    let query = r#"
        mutation { createPost(input: { title: "t", content: "c", author: "someone" }) { id } }
    "#;
    let body: Value =
        test::call_and_read_body_json(&app, graphql_request(query, json!({}), Some(&token))).await;

    assert!(body["errors"].as_array().is_some_and(|e| !e.is_empty()));
}

#[actix_web::test]
async fn test_author_posts_lists_created_posts() {
    let app = init_app(test_state()).await;
    let (author_id, token) = create_author(&app, "Ada").await;

    for title in ["one", "two"] {
        let vars = json!({ "title": title, "content": "..." });
        let req = graphql_request(CREATE_POST, vars, Some(&token));
        let _: Value = test::call_and_read_body_json(&app, req).await;
    }

    let query = "query Author($id: ID!) { author(id: $id) { posts { title } } }";
    let body: Value = test::call_and_read_body_json(
        &app,
        graphql_request(query, json!({ "id": author_id }), None),
    )
    .await;

    let titles: Vec<&str> = body["data"]["author"]["posts"]
        .as_array()
        .expect("posts")
        .iter()
        .filter_map(|p| p["title"].as_str())
        .collect();
    assert_eq!(titles, vec!["one", "two"]);
}

#[actix_web::test]
async fn test_blank_author_name_is_bad_user_input() {
    let app = init_app(test_state()).await;

    let req = graphql_request(common::CREATE_AUTHOR, json!({ "name": "  " }), None);
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["errors"][0]["extensions"]["code"], "BAD_USER_INPUT");
}

#[actix_web::test]
async fn test_invalid_token_rejects_request() {
    let app = init_app(test_state()).await;

    let req = graphql_request("{ test }", json!({}), Some("garbage"));
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Invalid Token");
}

#[actix_web::test]
async fn test_bearer_without_token_is_anonymous() {
    let app = init_app(test_state()).await;

    for header in ["Bearer", "Bearer "] {
        let req = test::TestRequest::post()
            .uri("/graphql")
            .insert_header(("Authorization", header))
            .set_json(json!({ "query": "{ test }" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["test"], "API up and running!");
    }

    let req = test::TestRequest::post()
        .uri("/graphql")
        .insert_header(("Authorization", "Bearer"))
        .set_json(json!({ "query": AUTHORS }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
}

#[actix_web::test]
async fn test_non_bearer_scheme_rejects_request() {
    let app = init_app(test_state()).await;
    let (_, token) = create_author(&app, "Ada").await;

    let req = test::TestRequest::post()
        .uri("/graphql")
        .insert_header(("Authorization", format!("Basic {token}")))
        .set_json(json!({ "query": "{ test }" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_expired_token_rejects_request() {
    let app = init_app(test_state()).await;
    let (id, _) = create_author(&app, "Ada").await;

    let expired = JwtTokenService::new(JwtConfig {
        expiration_hours: -1,
        ..JwtConfig::with_secret(common::TEST_SECRET)
    })
    .generate_token(id.parse().unwrap())
    .unwrap();

    let req = graphql_request(AUTHORS, json!({}), Some(&expired));
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["title"], "Token Expired");
}

#[actix_web::test]
async fn test_token_for_unknown_author_is_anonymous() {
    let app = init_app(test_state()).await;

    let token = JwtTokenService::new(JwtConfig::with_secret(common::TEST_SECRET))
        .generate_token(Uuid::new_v4())
        .unwrap();

    let body: Value =
        test::call_and_read_body_json(&app, graphql_request(AUTHORS, json!({}), Some(&token)))
            .await;

    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
}

#[actix_web::test]
async fn test_graphiql_is_served_on_get() {
    let app = init_app(test_state()).await;

    let req = test::TestRequest::get().uri("/graphql").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
