pub mod d410_group_analytics;
