pub mod error;
pub mod locate;
pub mod pass;
pub mod pipeline;
pub mod renderer;

// Re-export commonly used types
pub use error::FetchError;
pub use locate::Coordinates;
pub use pass::PassRecord;
pub use pipeline::FlyoverPipeline;
