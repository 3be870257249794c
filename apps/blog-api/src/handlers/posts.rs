//! Blog post CRUD handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::DomainError;
use blog_core::domain::{Author, NewPost, Post};
use blog_core::error::RepoError;
use blog_shared::dto::{AuthorDto, CreatePostRequest, PostResponse, ReplacePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
    .into()
}

/// Ids that are not UUIDs cannot name a post, so they are reported as missing.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::NotFound(format!("Post with id {} not found", raw)))
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        author: AuthorDto {
            first_name: post.author.first_name,
            last_name: post.author.last_name,
        },
        created: post.created.to_rfc3339(),
    }
}

fn author(dto: AuthorDto) -> Author {
    Author::new(dto.first_name, dto.last_name)
}

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    tracing::debug!(count = posts.len(), "Listing posts");

    let body: Vec<PostResponse> = posts.into_iter().map(post_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let new_post = NewPost::new(req.title, req.content, author(req.author));
    new_post.validate()?;

    let saved = state.posts.insert(Post::new(new_post)).await?;
    tracing::info!(
        request_id = %request_id.as_str(),
        post_id = %saved.id,
        "Post created"
    );

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/posts/{}", saved.id)))
        .json(post_response(saved)))
}

/// PUT /posts/{id} - full replacement; `id` and `created` never change.
pub async fn replace_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
    body: web::Json<ReplacePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    if Uuid::parse_str(&req.id).ok() != Some(id) {
        return Err(AppError::BadRequest(format!(
            "Request path id ({}) and request body id ({}) must match",
            path.as_str(),
            req.id
        )));
    }

    let contents = NewPost::new(req.title, req.content, author(req.author));
    contents.validate()?;

    let existing = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    state
        .posts
        .update(existing.replace(contents))
        .await
        .map_err(|e| match e {
            RepoError::NotFound => not_found(id),
            other => other.into(),
        })?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Post replaced");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id} - not idempotent; deleting a missing post is a 404.
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.posts.delete(id).await.map_err(|e| match e {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    })?;

    tracing::info!(request_id = %request_id.as_str(), post_id = %id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
