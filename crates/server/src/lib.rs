pub mod calc;
pub mod config;
pub mod documents;
pub mod health;
pub mod openapi;
pub mod rest;
pub mod telemetry;
pub mod typst;
