//! Form services
//!
//! Services carry the side effects the reducer stays free of: interpreting
//! change events, validating values, collecting submission bodies, and
//! talking to the host's HTTP transport. The factory resolves the right
//! implementation per field, honoring configuration overrides.

mod change_handler;
mod collector;
mod factory;
mod selector;
mod submit;
pub mod traits;
mod uploader;
mod validator;

pub use change_handler::{DefaultArrayFieldChangeHandler, DefaultChangeHandler, FileChangeHandler};
pub use collector::JsonDataCollector;
pub use factory::{DefaultServiceFactory, ServiceFactory};
pub use selector::{TextValueSelector, ToggleValueSelector, ValueSelector};
pub use submit::HttpSubmitService;
pub use traits::*;
pub use uploader::HttpFileUploader;
pub use validator::{DefaultFormValidator, RegexFieldValidator};
