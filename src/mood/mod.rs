//! Mood data: the registry of themed pages, their track catalogs, liked songs
//! and the pieces that turn a generator response into a new mood.

pub mod catalog;
pub mod form;
pub mod generator;
pub mod liked;
pub mod registry;
pub mod theme;

pub use catalog::{Catalog, Track};
pub use form::{CustomMoodForm, FormField};
pub use generator::{GeneratedMood, GeneratorError, MoodGenerator, MoodRequest};
pub use liked::LikedSongs;
pub use registry::{Gradient, MoodDefinition, MoodOrigin, MoodRegistry, slugify};
pub use theme::{Page, ThemeDescriptor, compute_theme};
