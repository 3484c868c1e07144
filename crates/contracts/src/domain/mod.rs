pub mod a001_savings_group;
