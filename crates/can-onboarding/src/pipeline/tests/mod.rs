mod board;
mod common;
mod service;
