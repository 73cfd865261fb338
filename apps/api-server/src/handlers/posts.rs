//! REST post handlers.

use actix_web::{HttpResponse, web};
use inkwell_core::domain::Post;
use inkwell_shared::dto::PostRecord;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts - every stored post, unauthenticated.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blog.list_posts().await?;
    let records: Vec<PostRecord> = posts.into_iter().map(to_record).collect();

    Ok(HttpResponse::Ok().json(records))
}

fn to_record(post: Post) -> PostRecord {
    PostRecord {
        id: post.id,
        title: post.title,
        content: post.content,
        author_id: post.author_id,
        created_at: post.created_at,
    }
}
