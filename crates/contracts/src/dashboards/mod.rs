pub mod d400_admin_stats;
