pub mod injector;
pub mod merger;
pub mod normalizer;
pub mod validator;

pub use injector::{TemplateInjector, DATABASE_PLACEHOLDER};
pub use merger::DatabaseMerger;
pub use normalizer::QuestionNormalizer;
pub use validator::{ExamRef, FragmentValidator};
