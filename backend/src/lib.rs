pub mod assets;
pub mod conf;
pub mod db;
pub mod error;
pub mod serve_files;
pub mod startup;
pub mod trace;

mod routes;
