//! Navigator core: pure state machine for client-side page and post loading.
mod effect;
mod entry;
mod link;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use entry::{NavEntry, DEFAULT_PAGE};
pub use link::{route_link_click, LinkClick, PRIMARY_BUTTON};
pub use msg::Msg;
pub use state::{NavState, RequestId};
pub use update::update;
pub use view_model::NavViewModel;
