//! # yoga
//!
//! Client core for the Yoga studio booking API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both front-ends (`client/` in the browser, `cli/` in a terminal) sit on top
//! of this crate. It owns the wire types, one gateway per REST resource, the
//! in-memory session store, the client route table with its guards, the
//! declarative form validators, and the view controllers that glue a form to
//! a single gateway call.
//!
//! DESIGN
//! ======
//! Every gateway method is exactly one HTTP round trip through the
//! [`transport::HttpTransport`] seam. Views collapse failures into a boolean
//! error flag and return the navigation the front-end should perform.

pub mod config;
pub mod error;
pub mod form;
pub mod gateway;
pub mod route;
pub mod store;
pub mod transport;
pub mod types;
pub mod views;

pub use config::ClientConfig;
pub use error::ApiError;
pub use gateway::{ApiClient, AuthGateway, SessionGateway, TeacherGateway, UserGateway};
pub use route::Route;
pub use store::SessionStore;
