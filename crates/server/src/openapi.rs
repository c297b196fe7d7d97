use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Feeding record as it travels over HTTP.
#[derive(ToSchema)]
pub struct FeedingDoc {
    /// Assigned by the store; ignored on create, must match the path on replace
    pub id: i32,
    pub name: String,
    pub quantity_grams: Option<i32>,
    pub notes: Option<String>,
    /// RFC 3339 timestamp
    pub fed_at: Option<String>,
}

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String, pub message: Option<String> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::feedings::list,
        crate::routes::feedings::get,
        crate::routes::feedings::create,
        crate::routes::feedings::replace,
        crate::routes::feedings::delete,
    ),
    components(
        schemas(
            HealthResponse,
            FeedingDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "feedings")
    )
)]
pub struct ApiDoc;
