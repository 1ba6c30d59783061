//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use postbox_core::error::RepoError;
use postbox_shared::dto::PostBody;
use postbox_shared::{DataEnvelope, PostDetailEnvelope};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    Ok(HttpResponse::Ok().json(DataEnvelope::new(posts)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostBody>,
) -> AppResult<HttpResponse> {
    let body = body.into_inner();
    validate(&body)?;

    let post = state.posts.create(body.into()).await?;

    Ok(HttpResponse::Created().json(DataEnvelope::new(post)))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with id {id} was not found")))?;

    Ok(HttpResponse::Ok().json(PostDetailEnvelope::new(post)))
}

/// GET /posts/latest
pub async fn latest_post(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .latest()
        .await?
        .ok_or_else(|| AppError::NotFound("there are no posts yet".to_string()))?;

    Ok(HttpResponse::Ok().json(PostDetailEnvelope::new(post)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<PostBody>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let body = body.into_inner();
    validate(&body)?;

    let post = state
        .posts
        .update(id, body.into())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post with id {id} does not exist")))?;

    Ok(HttpResponse::Ok().json(DataEnvelope::new(post)))
}

/// DELETE /posts/{id}
///
/// 204 only confirms an actual deletion; a missing id is a 404.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.delete(id).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(RepoError::NotFound) => {
            Err(AppError::NotFound(format!("post with id {id} does not exist")))
        }
        Err(e) => Err(e.into()),
    }
}

fn validate(body: &PostBody) -> Result<(), AppError> {
    if body.title.trim().is_empty() {
        return Err(AppError::Validation("title must not be empty".to_string()));
    }
    if body.content.trim().is_empty() {
        return Err(AppError::Validation(
            "content must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use postbox_infra::memory::MemoryPostRepository;
    use serde_json::{Value, json};

    use crate::handlers;
    use crate::state::AppState;

    macro_rules! seeded_app {
        () => {{
            let state = AppState::with_repository(Arc::new(MemoryPostRepository::seeded()));
            test::init_service(
                App::new()
                    .app_data(handlers::json_config())
                    .app_data(web::Data::new(state))
                    .configure(handlers::configure_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn create_then_fetch_applies_defaults() {
        let app = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"title": "t", "content": "c"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: Value = test::read_body_json(resp).await;
        let id = body["data"]["id"].as_i64().unwrap();
        assert_eq!(body["data"]["published"], json!(true));
        assert_eq!(body["data"]["rating"], Value::Null);

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{id}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["post_detail"]["id"].as_i64(), Some(id));
        assert_eq!(body["post_detail"]["title"], "t");
    }

    #[actix_web::test]
    async fn list_wraps_posts_under_data() {
        let app = seeded_app!();

        let req = test::TestRequest::get().uri("/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let posts = body["data"].as_array().unwrap();
        assert_eq!(posts.len(), 2);
        assert_ne!(posts[0]["id"], posts[1]["id"]);
    }

    #[actix_web::test]
    async fn fetching_a_missing_id_is_404() {
        let app = seeded_app!();

        let req = test::TestRequest::get().uri("/posts/999999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 404);
        assert!(body["detail"].as_str().unwrap().contains("999999"));
    }

    #[actix_web::test]
    async fn updating_a_missing_id_is_404_and_creates_nothing() {
        let app = seeded_app!();

        let req = test::TestRequest::put()
            .uri("/posts/999999")
            .set_json(json!({"title": "t", "content": "c"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::get().uri("/posts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn update_replaces_all_mutable_fields() {
        let app = seeded_app!();

        let req = test::TestRequest::put()
            .uri("/posts/1")
            .set_json(json!({
                "title": "new title",
                "content": "new content",
                "published": false,
                "rating": 5
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["title"], "new title");
        assert_eq!(body["data"]["published"], json!(false));
        assert_eq!(body["data"]["rating"], 5);
    }

    #[actix_web::test]
    async fn delete_is_204_once_then_404() {
        let app = seeded_app!();

        let req = test::TestRequest::delete().uri("/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 204);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());

        let req = test::TestRequest::get().uri("/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let req = test::TestRequest::delete().uri("/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn latest_returns_the_newest_post() {
        let app = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"title": "newest", "content": "c"}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get().uri("/posts/latest").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["post_detail"]["id"], created["data"]["id"]);
        assert_eq!(body["post_detail"]["title"], "newest");
    }

    #[actix_web::test]
    async fn latest_on_an_empty_collection_is_404() {
        let state = AppState::with_repository(Arc::new(MemoryPostRepository::new()));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(handlers::configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/posts/latest").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn body_missing_required_fields_is_422() {
        let app = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"content": "c"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);
    }

    #[actix_web::test]
    async fn empty_title_is_422() {
        let app = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({"title": "", "content": "c"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);
    }
}
