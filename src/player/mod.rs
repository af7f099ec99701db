pub mod controller;
pub mod dispatch;
pub mod request;
pub mod traits;

pub use controller::common::AutomationScript;
pub use controller::scripts_for;
pub use dispatch::{dispatch, Dispatch};
pub use request::PlayerRequest;
pub use traits::{Action, PlaySelection, PlayerScripts, Query, Source, Transport};
