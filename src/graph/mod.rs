pub mod builder;
#[cfg(feature = "python")]
pub mod py_graph;
pub mod weighted;
