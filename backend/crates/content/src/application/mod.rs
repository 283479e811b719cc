//! Application Layer
//!
//! Use cases per content area, plus upload storage.

pub mod alumni;
pub mod config;
pub mod events;
pub mod gallery;
pub mod news;
pub mod site;
pub mod uploads;

// Re-exports
pub use alumni::AlumniUseCase;
pub use config::UploadConfig;
pub use events::EventsUseCase;
pub use gallery::GalleryUseCase;
pub use news::NewsUseCase;
pub use site::SiteUseCase;
pub use uploads::{IncomingFile, UploadsUseCase};
