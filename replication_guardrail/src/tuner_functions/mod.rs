pub mod network_topology;
pub mod simple_strategy;
pub mod tune_up;
pub mod uptuning_switch;
pub mod warnings;
