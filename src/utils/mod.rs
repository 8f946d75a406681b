pub mod local;
pub mod machine_output;
pub mod remote;
