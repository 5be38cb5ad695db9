pub mod chat_history;
pub mod chat_widget;
pub mod landing;
pub mod layout;
pub mod login;
pub mod not_found;
pub mod overview;
pub mod profile;
pub mod purchases;
pub mod shared;
pub mod signup;

pub use chat_history::ChatHistory;
pub use chat_widget::AssistantWidget;
pub use landing::Landing;
pub use layout::DashboardLayout;
pub use login::Login;
pub use not_found::NotFound;
pub use overview::Overview;
pub use profile::Profile;
pub use purchases::Purchases;
pub use signup::Signup;
