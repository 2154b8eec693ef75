pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod system;
pub mod utils;

use services::{VideoService, YoutubeService};

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct InnerState {
    pub videos: VideoService,
    pub youtube: YoutubeService,
}
