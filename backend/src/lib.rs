pub mod catchers;
pub mod config;
pub mod cors;
pub mod error;
pub mod processor;
pub mod queries;
pub mod routes;
pub mod store;
pub use shared::{models::*, validation::*, Tally};

use rocket::{Build, Rocket};
use crate::{
    catchers::{bad_request, internal_error, not_found, unprocessable},
    cors::CORS,
    routes::{all_options, cast_vote, reset, results, AppState},
};

pub fn build_rocket(state: AppState) -> Rocket<Build> {
    rocket::build()
        .attach(CORS)
        .manage(state)
        .mount("/", rocket::routes![cast_vote, results, reset, all_options])
        .register(
            "/",
            rocket::catchers![bad_request, not_found, unprocessable, internal_error],
        )
}
