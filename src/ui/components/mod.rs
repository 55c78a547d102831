pub mod background;
pub mod hero;
pub mod menu;
pub mod mood_form;
pub mod player;
pub mod spinner;
