mod common;
mod feedback;
mod ranking;
