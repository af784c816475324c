pub mod dashboard;
pub mod dispatch;
pub mod login;
pub mod register;
pub mod route;
pub mod schema;
pub mod shared;
pub mod submit;
pub mod terms;
