pub mod home;
pub mod mood_page;

pub use home::HomeView;
pub use mood_page::MoodPage;
