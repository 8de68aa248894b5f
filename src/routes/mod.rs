pub mod attachments;

pub mod auth;

pub mod leaves;

pub mod messages;

pub mod students;

pub use attachments::configure_attachment_routes;
pub use auth::configure_auth_routes;
pub use leaves::configure_leave_routes;
pub use messages::configure_message_routes;
pub use students::configure_student_routes;
