pub mod error;
pub mod fcm;
pub mod log;
pub mod message;
pub mod sender;

pub use error::PushError;
pub use fcm::FcmSender;
pub use log::LogSender;
pub use message::PushMessage;
pub use sender::PushSender;
