mod collections;
mod lending;
