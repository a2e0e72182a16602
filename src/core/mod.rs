pub mod etl;
pub mod outcome;
pub mod transform;

pub use crate::domain::model::{
    Credentials, DestinationUser, SourceUser, SubmissionEnvelope, SubmitResponse, TransferReport,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
