// Pure physics helpers shared by the worm entity.

pub mod jump;
pub mod movement;
