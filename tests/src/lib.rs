#![cfg(test)]

mod fixtures;
mod library;
