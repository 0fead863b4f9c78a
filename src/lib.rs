pub mod capabilities;
pub mod config;
pub mod contact;
pub mod dom;
pub mod error;
pub mod github;
pub mod http;
pub mod locale;
pub mod page;
pub mod server;
pub mod skills;
pub mod theme;
pub mod types;
pub mod widget;

pub use error::{PortfolioError, Result};
pub use widget::{RemoteListWidget, RenderState, RenderTarget};
