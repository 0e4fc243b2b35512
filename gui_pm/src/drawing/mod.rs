pub mod form;
pub mod game;
pub mod settings;
pub mod tab;
