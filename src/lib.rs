//! AIOS curriculum progress tracker: server-rendered shell plus the shared
//! student, week-progress, checkpoint and mind-map record contract.

pub mod config;
pub mod db;
pub mod domain;
pub mod map;
pub mod pages;
pub mod routes;
pub mod state;
