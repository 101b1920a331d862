mod common;
mod critical;
mod service;
