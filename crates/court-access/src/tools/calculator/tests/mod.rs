mod common;
mod engine;
mod letter;
