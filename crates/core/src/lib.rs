pub mod batch;
pub mod codec;
pub mod config;
pub mod notify;
pub mod testing;

pub use batch::{
    BatchConfig, BatchConverter, BatchError, BatchProgress, BatchReport, FailureStage,
    FileOutcome,
};
pub use codec::{CodecError, Dimensions, ImageCodec, ResizeFilter, WebpCodec};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, NotifierConfig,
    NotifierMethod,
};
pub use notify::{create_notifier, Alert, AlertKind, Notifier, NotifyError};
