pub mod climbing_stairs;
pub mod coin_change;
pub mod house_robber;
pub mod lcs;
