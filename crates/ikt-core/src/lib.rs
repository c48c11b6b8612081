pub mod config;
pub mod logging;

// Transformation encoding engine
pub mod catalog;
pub mod encode;
pub mod options;
pub mod session;
pub mod url_merge;

// Collaborators around the engine
pub mod navigation;
pub mod upload;
