use utoipa::OpenApi;

use crate::modules::jobs::dto::{CreateJobRequest, JobResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::jobs::handler::create_job,
        crate::modules::jobs::handler::list_jobs,
        crate::modules::jobs::handler::get_job,
    ),
    components(
        schemas(CreateJobRequest, JobResponse)
    ),
    tags(
        (name = "Jobs", description = "Article repurposing jobs")
    )
)]
pub struct ApiDoc;
