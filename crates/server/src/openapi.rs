use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct AssetDoc {
    pub id: String,
    pub name: String,
    pub category: String,
    pub link: String,
    pub uploader: String,
}

#[derive(ToSchema)]
pub struct NewAssetDoc {
    pub name: String,
    pub category: String,
    pub link: String,
    pub uploader: String,
}

#[derive(ToSchema)]
pub struct DeleteAssetDoc { pub uploader: String }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::assets::list_assets,
        crate::routes::assets::create_asset,
        crate::routes::assets::delete_asset,
    ),
    components(
        schemas(
            HealthResponse,
            AssetDoc,
            NewAssetDoc,
            DeleteAssetDoc,
            MessageDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "assets")
    )
)]
pub struct ApiDoc;
