pub mod penguin;
