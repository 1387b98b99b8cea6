use utoipa::OpenApi;

use crate::modules::students::model::{
    DeleteResponse, ErrorResponse, GreetingsResponse, NotFoundResponse, Student, StudentInput,
    StudentPatch,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::greetings::controller::greetings,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::search_by_cpf,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            Student,
            StudentInput,
            StudentPatch,
            GreetingsResponse,
            DeleteResponse,
            ErrorResponse,
            NotFoundResponse,
        )
    ),
    tags(
        (name = "Greetings", description = "Greeting endpoint"),
        (name = "Students", description = "Student management endpoints")
    ),
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "A REST API built with Rust, Axum, and PostgreSQL for managing student records.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
