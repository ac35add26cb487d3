use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::database::activities_repo::ActivitiesRepo;
use crate::models::ActivityMap;
use crate::services::activities_service::{self, ActivityError};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

pub async fn list_activities_handler(State(repo): State<ActivitiesRepo>) -> Json<ActivityMap> {
    Json(activities_service::list_activities(&repo).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(repo): State<ActivitiesRepo>,
) -> Result<Json<MessageBody>, ActivityError> {
    let message = activities_service::signup(&repo, &activity_name, &query.email).await?;
    Ok(Json(MessageBody { message }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(repo): State<ActivitiesRepo>,
) -> Result<Json<MessageBody>, ActivityError> {
    let message = activities_service::unregister(&repo, &activity_name, &query.email).await?;
    Ok(Json(MessageBody { message }))
}
