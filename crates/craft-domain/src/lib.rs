// craft-domain library entry point
pub mod color;
pub mod errors;
pub mod item;
pub mod quality;
pub mod template;
pub use color::Color;
pub use errors::DomainError;
pub use item::{InstanceId, ItemInstance};
pub use quality::QualityTier;
pub use template::{ItemTemplate, MaterialId, TemplateBook, TemplateId};
