pub mod ripple;
pub mod shooting_star;
pub mod star;
