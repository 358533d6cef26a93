pub mod tools;
pub mod web;
