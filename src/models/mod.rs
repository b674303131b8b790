pub mod database;
pub mod fragment;
pub mod loaders;
pub mod report;

pub use database::{CanonicalQuestion, CanonicalSolution, CanonicalStep, Course, Exam, ExamDatabase};
pub use fragment::{Fragment, FragmentMeta, FragmentSource, RawQuestion, RawStep};
pub use loaders::{load_fragment_sources, scan_fragment_files};
pub use report::BuildReport;
