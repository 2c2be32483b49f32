pub mod host_bridge;
