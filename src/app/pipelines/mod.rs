pub mod transfer_pipeline;

pub use transfer_pipeline::HttpTransferPipeline;
