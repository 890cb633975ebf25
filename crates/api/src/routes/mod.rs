//! Route definitions.

pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// The route namespace is flat, matching the paths the mobile clients
/// already call:
///
/// ```text
/// POST /signup                          signup
/// POST /login                           login
///
/// POST /getprofile                      upsert person profile
/// GET  /displayprofile?user_id=         fetch person profile
/// GET  /getalluserprofile               map view of all profiles
///
/// POST /getcompanyprofile               upsert company profile
/// GET  /displaycompanyprofile?user_id=  fetch company profile
/// GET  /displaycompany?user_id=         public company name + position
///
/// POST /quiz_scores                     append + fold a quiz score
/// POST /wasteUpload                     waste-sorting validation pipeline
/// GET  /leaderboard                     top 20 by points
///
/// POST /companySchedule                 create pending pickup request
/// GET  /displayuserSchedule?user_id=    schedules for a user
/// GET  /displayCompanySchedule?user_id= schedules for a company
/// POST /acceptSchedule                  pending -> accepted (+ visits)
/// POST /rejectSchedule                  pending -> rejected (+ reason)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(handlers::auth::signup))
        .route("/login", post(handlers::auth::login))
        .route("/getprofile", post(handlers::profile::upsert_profile))
        .route("/displayprofile", get(handlers::profile::display_profile))
        .route("/getalluserprofile", get(handlers::profile::all_profiles))
        .route("/getcompanyprofile", post(handlers::company::upsert_company))
        .route(
            "/displaycompanyprofile",
            get(handlers::company::display_company_profile),
        )
        .route("/displaycompany", get(handlers::company::display_company))
        .route("/quiz_scores", post(handlers::quiz::create_quiz_score))
        .route("/wasteUpload", post(handlers::waste::waste_upload))
        .route("/leaderboard", get(handlers::leaderboard::leaderboard))
        .route("/companySchedule", post(handlers::schedule::create_schedule))
        .route(
            "/displayuserSchedule",
            get(handlers::schedule::list_user_schedules),
        )
        .route(
            "/displayCompanySchedule",
            get(handlers::schedule::list_company_schedules),
        )
        .route("/acceptSchedule", post(handlers::schedule::accept_schedule))
        .route("/rejectSchedule", post(handlers::schedule::reject_schedule))
}
