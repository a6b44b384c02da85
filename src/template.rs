pub mod operation;
pub mod processor;

pub use operation::TemplateOperation;
pub use processor::TemplateProcessor;
