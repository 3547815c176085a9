use crate::error::ApiError;
use crate::models::{CommentUpdate, NewComment};
use crate::services::ApiClient;

pub async fn add_comment(recipe_id: &str, comment: &NewComment, token: Option<&str>) -> Result<(), ApiError> {
    log::info!("💬 Nuevo comentario en receta {} ({}★)", recipe_id, comment.valoracion);
    ApiClient::with_token(token)
        .post(&format!("/recetas/{}/comentarios", recipe_id), comment)
        .await?;
    Ok(())
}

pub async fn edit_comment(
    recipe_id: &str,
    comment_id: &str,
    update: &CommentUpdate,
    token: Option<&str>,
) -> Result<(), ApiError> {
    log::info!("✏️ Editando comentario {} de receta {}", comment_id, recipe_id);
    ApiClient::with_token(token)
        .put(&format!("/recetas/{}/comentarios/{}", recipe_id, comment_id), update)
        .await?;
    Ok(())
}
