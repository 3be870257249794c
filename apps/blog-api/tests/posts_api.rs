//! End-to-end tests for the `/posts` resource.
//!
//! Every test seeds ten posts, talks to a real server over HTTP, checks storage
//! directly where the API alone cannot prove a write, and tears down.

mod common;

use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use serde_json::{Value, json};
use uuid::Uuid;

use blog_fixtures::{PostGenerator, SEED_BATCH_SIZE};

use common::TestContext;

fn is_json(res: &reqwest::Response) -> bool {
    res.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

fn sorted_keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .expect("expected a JSON object")
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}

mod list {
    use super::*;

    #[actix_web::test]
    async fn returns_every_persisted_post() {
        let ctx = TestContext::setup().await;

        let res = ctx.client.get(ctx.url("/posts")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body: Vec<Value> = res.json().await.unwrap();
        assert!(!body.is_empty());

        let count = ctx.posts.count().await.unwrap();
        assert_eq!(body.len() as u64, count);
        assert_eq!(body.len(), SEED_BATCH_SIZE);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn items_expose_exactly_the_post_fields() {
        let ctx = TestContext::setup().await;

        let res = ctx.client.get(ctx.url("/posts")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert!(is_json(&res));

        let body: Value = res.json().await.unwrap();
        let posts = body.as_array().expect("expected an array");
        assert!(!posts.is_empty());

        for post in posts {
            assert_eq!(
                sorted_keys(post),
                vec!["author", "content", "created", "id", "title"]
            );
            assert_eq!(sorted_keys(&post["author"]), vec!["firstName", "lastName"]);
        }

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn reflects_seeded_records() {
        let ctx = TestContext::setup_with_seed(2024).await;

        let body: Vec<Value> = ctx
            .client
            .get(ctx.url("/posts"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let mut returned: Vec<String> = body
            .iter()
            .map(|p| p["id"].as_str().unwrap().to_string())
            .collect();
        let mut seeded: Vec<String> = ctx.seeded.iter().map(|p| p.id.to_string()).collect();
        returned.sort();
        seeded.sort();
        assert_eq!(returned, seeded);

        ctx.teardown().await;
    }
}

mod fetch {
    use super::*;

    #[actix_web::test]
    async fn returns_a_single_post() {
        let ctx = TestContext::setup().await;
        let post = ctx.some_post().clone();

        let res = ctx
            .client
            .get(ctx.url(&format!("/posts/{}", post.id)))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await.unwrap();
        assert_eq!(body["id"], post.id.to_string());
        assert_eq!(body["title"], post.title);
        assert_eq!(body["author"]["firstName"], post.author.first_name);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn unknown_or_malformed_ids_are_not_found() {
        let ctx = TestContext::setup().await;

        for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
            let res = ctx
                .client
                .get(ctx.url(&format!("/posts/{}", id)))
                .send()
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::NOT_FOUND);
            assert!(is_json(&res));

            let problem: Value = res.json().await.unwrap();
            assert_eq!(problem["status"], 404);
        }

        ctx.teardown().await;
    }
}

mod create {
    use super::*;

    #[actix_web::test]
    async fn adds_a_new_post() {
        let ctx = TestContext::setup().await;
        let new_post = PostGenerator::seeded(99).post();

        let res = ctx
            .client
            .post(ctx.url("/posts"))
            .json(&new_post)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);
        assert!(is_json(&res));

        let location = res
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let body: Value = res.json().await.unwrap();
        assert!(body.is_object());
        for key in ["id", "title", "content", "created"] {
            assert!(body.get(key).is_some(), "missing key {key}");
        }

        let id = body["id"].as_str().expect("id should be a string");
        assert!(!id.is_empty());
        assert_eq!(body["title"], new_post.title);
        assert_eq!(body["content"], new_post.content);
        assert!(!body["created"].is_null());
        assert_eq!(
            body["author"],
            json!({
                "firstName": new_post.author.first_name,
                "lastName": new_post.author.last_name,
            })
        );
        assert_eq!(location, Some(format!("/posts/{}", id)));

        let stored = ctx
            .posts
            .find_by_id(Uuid::parse_str(id).unwrap())
            .await
            .unwrap()
            .expect("created post should be stored");
        assert_eq!(stored.title, new_post.title);
        assert_eq!(ctx.posts.count().await.unwrap(), SEED_BATCH_SIZE as u64 + 1);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn ignores_client_supplied_id_and_created() {
        let ctx = TestContext::setup().await;
        let client_id = Uuid::new_v4().to_string();

        let res = ctx
            .client
            .post(ctx.url("/posts"))
            .json(&json!({
                "id": client_id,
                "created": "1999-01-01T00:00:00Z",
                "title": "Mine",
                "content": "Body",
                "author": {"firstName": "Bob", "lastName": "Gold"},
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: Value = res.json().await.unwrap();
        assert_ne!(body["id"], client_id);
        assert_ne!(body["created"], "1999-01-01T00:00:00Z");

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn rejects_missing_fields_without_persisting() {
        let ctx = TestContext::setup().await;

        let res = ctx
            .client
            .post(ctx.url("/posts"))
            .json(&json!({"title": "No content or author"}))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(is_json(&res));

        assert_eq!(ctx.posts.count().await.unwrap(), SEED_BATCH_SIZE as u64);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn rejects_malformed_json() {
        let ctx = TestContext::setup().await;

        let res = ctx
            .client
            .post(ctx.url("/posts"))
            .header(CONTENT_TYPE, "application/json")
            .body("{\"title\": ")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        assert_eq!(ctx.posts.count().await.unwrap(), SEED_BATCH_SIZE as u64);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn rejects_blank_fields_without_persisting() {
        let ctx = TestContext::setup().await;

        let res = ctx
            .client
            .post(ctx.url("/posts"))
            .json(&json!({
                "title": "",
                "content": "Body",
                "author": {"firstName": "Jim", "lastName": " "},
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let problem: Value = res.json().await.unwrap();
        let detail = problem["detail"].as_str().unwrap();
        assert!(detail.contains("title"));
        assert!(detail.contains("author.lastName"));

        assert_eq!(ctx.posts.count().await.unwrap(), SEED_BATCH_SIZE as u64);

        ctx.teardown().await;
    }
}

mod replace {
    use super::*;

    fn update_payload(id: &str) -> Value {
        json!({
            "id": id,
            "title": "Jims Update",
            "content": "Content",
            "author": {"firstName": "Jim", "lastName": "Bishop"},
        })
    }

    #[actix_web::test]
    async fn updates_an_existing_post() {
        let ctx = TestContext::setup().await;
        let post = ctx.some_post().clone();

        let res = ctx
            .client
            .put(ctx.url(&format!("/posts/{}", post.id)))
            .json(&update_payload(&post.id.to_string()))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(res.text().await.unwrap().is_empty());

        let updated = ctx
            .posts
            .find_by_id(post.id)
            .await
            .unwrap()
            .expect("post should still exist");
        assert_eq!(updated.title, "Jims Update");
        assert_eq!(updated.content, "Content");
        assert_eq!(updated.author.full_name(), "Jim Bishop");
        assert_eq!(updated.id, post.id);
        assert_eq!(ctx.posts.count().await.unwrap(), SEED_BATCH_SIZE as u64);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn keeps_the_creation_time() {
        let ctx = TestContext::setup().await;
        let id = ctx.some_post().id;
        let before = ctx.posts.find_by_id(id).await.unwrap().unwrap();

        let res = ctx
            .client
            .put(ctx.url(&format!("/posts/{}", id)))
            .json(&update_payload(&id.to_string()))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let after = ctx.posts.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(after.created, before.created);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn rejects_mismatched_ids() {
        let ctx = TestContext::setup().await;
        let post = ctx.some_post().clone();

        let res = ctx
            .client
            .put(ctx.url(&format!("/posts/{}", post.id)))
            .json(&update_payload(&Uuid::new_v4().to_string()))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let unchanged = ctx.posts.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(unchanged.title, post.title);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn rejects_a_body_without_id() {
        let ctx = TestContext::setup().await;
        let id = ctx.some_post().id;

        let res = ctx
            .client
            .put(ctx.url(&format!("/posts/{}", id)))
            .json(&json!({
                "title": "Jims Update",
                "content": "Content",
                "author": {"firstName": "Jim", "lastName": "Bishop"},
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn rejects_blank_fields_without_persisting() {
        let ctx = TestContext::setup().await;
        let post = ctx.some_post().clone();

        let res = ctx
            .client
            .put(ctx.url(&format!("/posts/{}", post.id)))
            .json(&json!({
                "id": post.id.to_string(),
                "title": "",
                "content": "Content",
                "author": {"firstName": "  ", "lastName": "Bishop"},
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let problem: Value = res.json().await.unwrap();
        let detail = problem["detail"].as_str().unwrap();
        assert!(detail.contains("title"));
        assert!(detail.contains("author.firstName"));
        assert!(!detail.contains("content"));

        let unchanged = ctx.posts.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(unchanged.title, post.title);
        assert_eq!(unchanged.content, post.content);
        assert_eq!(unchanged.author, post.author);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn unknown_id_is_not_found() {
        let ctx = TestContext::setup().await;
        let id = Uuid::new_v4().to_string();

        let res = ctx
            .client
            .put(ctx.url(&format!("/posts/{}", id)))
            .json(&update_payload(&id))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(ctx.posts.count().await.unwrap(), SEED_BATCH_SIZE as u64);

        ctx.teardown().await;
    }
}

mod delete {
    use super::*;

    #[actix_web::test]
    async fn removes_a_post() {
        let ctx = TestContext::setup().await;
        let id = ctx.some_post().id;

        let res = ctx
            .client
            .delete(ctx.url(&format!("/posts/{}", id)))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(res.text().await.unwrap().is_empty());

        assert!(ctx.posts.find_by_id(id).await.unwrap().is_none());
        assert_eq!(ctx.posts.count().await.unwrap(), SEED_BATCH_SIZE as u64 - 1);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn second_delete_is_not_found() {
        let ctx = TestContext::setup().await;
        let url = ctx.url(&format!("/posts/{}", ctx.some_post().id));

        let first = ctx.client.delete(&url).send().await.unwrap();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let second = ctx.client.delete(&url).send().await.unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn deleted_post_disappears_from_list() {
        let ctx = TestContext::setup().await;
        let id = ctx.some_post().id;

        ctx.client
            .delete(ctx.url(&format!("/posts/{}", id)))
            .send()
            .await
            .unwrap();

        let body: Vec<Value> = ctx
            .client
            .get(ctx.url("/posts"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body.len(), SEED_BATCH_SIZE - 1);
        assert!(body.iter().all(|p| p["id"] != id.to_string()));

        ctx.teardown().await;
    }
}

mod service {
    use super::*;

    #[actix_web::test]
    async fn health_reports_database() {
        let ctx = TestContext::setup().await;

        let res = ctx.client.get(ctx.url("/health")).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await.unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], "ok");

        ctx.teardown().await;
    }

    #[actix_web::test]
    async fn responses_carry_a_request_id() {
        let ctx = TestContext::setup().await;

        let echoed = ctx
            .client
            .get(ctx.url("/posts"))
            .header("x-request-id", "trace-me-123")
            .send()
            .await
            .unwrap();
        assert_eq!(echoed.headers()["x-request-id"], "trace-me-123");

        let minted = ctx.client.get(ctx.url("/posts")).send().await.unwrap();
        let id = minted.headers()["x-request-id"].to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());

        ctx.teardown().await;
    }
}
