mod common;
mod pool;
