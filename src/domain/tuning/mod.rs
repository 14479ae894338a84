pub mod worm;
